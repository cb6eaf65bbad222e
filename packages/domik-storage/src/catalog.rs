//! Reference-catalog reads for the resolver: case-insensitive containment
//! of the query text within the stored display name, shortest name first,
//! then lexicographic. One deterministic row or none.

use domik_domain::listing::{City, District, MetroStation, PropertyType, TransactionType};

use crate::{Result, db::Db};

pub async fn resolve_city(db: &Db, name: &str) -> Result<Option<City>> {
	let name = name.trim();

	if name.is_empty() {
		return Ok(None);
	}

	let row: Option<(i64, String)> = sqlx::query_as(
		"\
SELECT city_id, name
FROM cities
WHERE lower(name) LIKE '%' || lower($1) || '%'
ORDER BY length(name), name
LIMIT 1",
	)
	.bind(name)
	.fetch_optional(&db.pool)
	.await?;

	Ok(row.map(|(city_id, name)| City { city_id, name }))
}

pub async fn resolve_district(db: &Db, city_id: i64, name: &str) -> Result<Option<District>> {
	let name = name.trim();

	if name.is_empty() {
		return Ok(None);
	}

	let row: Option<(i64, i64, String)> = sqlx::query_as(
		"\
SELECT district_id, city_id, name
FROM districts
WHERE city_id = $1
	AND lower(name) LIKE '%' || lower($2) || '%'
ORDER BY length(name), name
LIMIT 1",
	)
	.bind(city_id)
	.bind(name)
	.fetch_optional(&db.pool)
	.await?;

	Ok(row.map(|(district_id, city_id, name)| District { district_id, city_id, name }))
}

pub async fn resolve_metro_station(
	db: &Db,
	city_id: i64,
	name: &str,
) -> Result<Option<MetroStation>> {
	let name = name.trim();

	if name.is_empty() {
		return Ok(None);
	}

	let row: Option<(i64, i64, String)> = sqlx::query_as(
		"\
SELECT station_id, city_id, name
FROM metro_stations
WHERE city_id = $1
	AND lower(name) LIKE '%' || lower($2) || '%'
ORDER BY length(name), name
LIMIT 1",
	)
	.bind(city_id)
	.bind(name)
	.fetch_optional(&db.pool)
	.await?;

	Ok(row.map(|(station_id, city_id, name)| MetroStation { station_id, city_id, name }))
}

pub async fn resolve_property_type(db: &Db, name: &str) -> Result<Option<PropertyType>> {
	let name = name.trim();

	if name.is_empty() {
		return Ok(None);
	}

	let row: Option<(i64, String)> = sqlx::query_as(
		"\
SELECT property_type_id, name
FROM property_types
WHERE lower(name) LIKE '%' || lower($1) || '%'
ORDER BY length(name), name
LIMIT 1",
	)
	.bind(name)
	.fetch_optional(&db.pool)
	.await?;

	Ok(row.map(|(property_type_id, name)| PropertyType { property_type_id, name }))
}

pub async fn resolve_transaction_type(db: &Db, name: &str) -> Result<Option<TransactionType>> {
	let name = name.trim();

	if name.is_empty() {
		return Ok(None);
	}

	let row: Option<(i64, String)> = sqlx::query_as(
		"\
SELECT transaction_type_id, name
FROM transaction_types
WHERE lower(name) LIKE '%' || lower($1) || '%'
ORDER BY length(name), name
LIMIT 1",
	)
	.bind(name)
	.fetch_optional(&db.pool)
	.await?;

	Ok(row.map(|(transaction_type_id, name)| TransactionType { transaction_type_id, name }))
}
