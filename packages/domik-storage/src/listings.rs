use std::collections::HashMap;

use sqlx::{Postgres, QueryBuilder, Row, postgres::PgRow};

use domik_domain::{
	filters::RoomsFilter,
	listing::{Listing, ListingImage, STATUS_ACTIVE},
	query::ListingQuery,
};

use crate::{Result, db::Db};

/// Runs the compiled predicate over active listings: newest first, at most
/// `limit` rows. Every constraint is a bound parameter; the predicate
/// structure alone decides which clauses appear.
pub async fn search_active(db: &Db, query: &ListingQuery, limit: i64) -> Result<Vec<Listing>> {
	let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
		"\
SELECT listing_id, title, price, area, rooms, floor, city_id, district_id, metro_station_id,
	metro_distance, property_type_id, transaction_type_id, is_new_building, is_commercial,
	is_country, year_built, status, created_at
FROM listings
WHERE status = ",
	);

	builder.push_bind(STATUS_ACTIVE);

	if let Some(city_id) = query.city_id {
		builder.push(" AND city_id = ").push_bind(city_id);
	}
	if let Some(district_id) = query.district_id {
		builder.push(" AND district_id = ").push_bind(district_id);
	}
	if let Some(station_id) = query.metro_station_id {
		builder.push(" AND metro_station_id = ").push_bind(station_id);
	}
	if let Some(property_type_id) = query.property_type_id {
		builder.push(" AND property_type_id = ").push_bind(property_type_id);
	}
	if let Some(transaction_type_id) = query.transaction_type_id {
		builder.push(" AND transaction_type_id = ").push_bind(transaction_type_id);
	}

	match &query.rooms {
		Some(RoomsFilter::Exactly(rooms)) => {
			builder.push(" AND rooms = ").push_bind(*rooms);
		},
		Some(RoomsFilter::AnyOf(rooms)) => {
			builder.push(" AND rooms = ANY(").push_bind(rooms.clone()).push(")");
		},
		None => {},
	}

	if let Some(min) = query.price.min {
		builder.push(" AND price >= ").push_bind(min);
	}
	if let Some(max) = query.price.max {
		builder.push(" AND price <= ").push_bind(max);
	}
	if let Some(min) = query.area.min {
		builder.push(" AND area >= ").push_bind(min);
	}
	if let Some(max) = query.area.max {
		builder.push(" AND area <= ").push_bind(max);
	}
	if let Some(min) = query.floor.min {
		builder.push(" AND floor >= ").push_bind(min);
	}
	if let Some(max) = query.floor.max {
		builder.push(" AND floor <= ").push_bind(max);
	}
	if let Some(max) = query.metro_distance_max {
		builder.push(" AND metro_distance <= ").push_bind(max);
	}
	if let Some(min) = query.year_built_min {
		builder.push(" AND year_built >= ").push_bind(min);
	}
	if let Some(flag) = query.is_new_building {
		builder.push(" AND is_new_building = ").push_bind(flag);
	}
	if let Some(flag) = query.is_commercial {
		builder.push(" AND is_commercial = ").push_bind(flag);
	}
	if let Some(flag) = query.is_country {
		builder.push(" AND is_country = ").push_bind(flag);
	}

	builder.push(" ORDER BY created_at DESC LIMIT ").push_bind(limit);

	let rows = builder.build().fetch_all(&db.pool).await?;

	rows.iter().map(listing_from_row).collect()
}

/// Fetches every image for the given listings, grouped per listing in
/// stored (position) order.
pub async fn images_for(db: &Db, listing_ids: &[i64]) -> Result<HashMap<i64, Vec<ListingImage>>> {
	if listing_ids.is_empty() {
		return Ok(HashMap::new());
	}

	let rows: Vec<(i64, i64, String, i32, bool)> = sqlx::query_as(
		"\
SELECT image_id, listing_id, url, position, is_primary
FROM listing_images
WHERE listing_id = ANY($1)
ORDER BY listing_id, position, image_id",
	)
	.bind(listing_ids)
	.fetch_all(&db.pool)
	.await?;
	let mut grouped: HashMap<i64, Vec<ListingImage>> = HashMap::new();

	for (image_id, listing_id, url, position, is_primary) in rows {
		grouped
			.entry(listing_id)
			.or_default()
			.push(ListingImage { image_id, listing_id, url, position, is_primary });
	}

	Ok(grouped)
}

fn listing_from_row(row: &PgRow) -> Result<Listing> {
	Ok(Listing {
		listing_id: row.try_get("listing_id")?,
		title: row.try_get("title")?,
		price: row.try_get("price")?,
		area: row.try_get("area")?,
		rooms: row.try_get("rooms")?,
		floor: row.try_get("floor")?,
		city_id: row.try_get("city_id")?,
		district_id: row.try_get("district_id")?,
		metro_station_id: row.try_get("metro_station_id")?,
		metro_distance: row.try_get("metro_distance")?,
		property_type_id: row.try_get("property_type_id")?,
		transaction_type_id: row.try_get("transaction_type_id")?,
		is_new_building: row.try_get("is_new_building")?,
		is_commercial: row.try_get("is_commercial")?,
		is_country: row.try_get("is_country")?,
		year_built: row.try_get("year_built")?,
		status: row.try_get("status")?,
		created_at: row.try_get("created_at")?,
	})
}
