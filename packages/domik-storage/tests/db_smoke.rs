use domik_config::Postgres;
use domik_storage::db::Db;
use domik_testkit::TestDatabase;

#[tokio::test]
#[ignore = "Requires external Postgres. Set DOMIK_PG_DSN to run."]
async fn db_connects_and_bootstraps() {
	let Some(base_dsn) = domik_testkit::env_dsn() else {
		eprintln!("Skipping db_connects_and_bootstraps; set DOMIK_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");
	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set DOMIK_PG_DSN to run."]
async fn listing_tables_exist_after_bootstrap() {
	let Some(base_dsn) = domik_testkit::env_dsn() else {
		eprintln!("Skipping listing_tables_exist_after_bootstrap; set DOMIK_PG_DSN to run.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	for table in [
		"cities",
		"districts",
		"metro_stations",
		"property_types",
		"transaction_types",
		"listings",
		"listing_images",
	] {
		let count: i64 = sqlx::query_scalar(
			"SELECT count(*) FROM information_schema.tables WHERE table_name = $1",
		)
		.bind(table)
		.fetch_one(&db.pool)
		.await
		.expect("Failed to query schema tables.");

		assert_eq!(count, 1, "expected table {table} after bootstrap");
	}

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set DOMIK_PG_DSN to run."]
async fn catalog_resolution_prefers_shortest_then_lexicographic() {
	let Some(base_dsn) = domik_testkit::env_dsn() else {
		eprintln!(
			"Skipping catalog_resolution_prefers_shortest_then_lexicographic; set DOMIK_PG_DSN to run."
		);

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 1 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	sqlx::query("INSERT INTO cities (name) VALUES ($1), ($2), ($3)")
		.bind("Новомосковск")
		.bind("Москва")
		.bind("Московский")
		.execute(&db.pool)
		.await
		.expect("Failed to seed cities.");

	let city = domik_storage::catalog::resolve_city(&db, "москв")
		.await
		.expect("Failed to resolve city.")
		.expect("Expected a city match.");

	// All three contain the query; the shortest stored name wins.
	assert_eq!(city.name, "Москва");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
