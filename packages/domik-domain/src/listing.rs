use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Listings in any other status are invisible to search.
pub const STATUS_ACTIVE: &str = "active";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct City {
	pub city_id: i64,
	pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct District {
	pub district_id: i64,
	pub city_id: i64,
	pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MetroStation {
	pub station_id: i64,
	pub city_id: i64,
	pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PropertyType {
	pub property_type_id: i64,
	pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TransactionType {
	pub transaction_type_id: i64,
	pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Listing {
	pub listing_id: i64,
	pub title: String,
	pub price: f64,
	pub area: f64,
	pub rooms: i32,
	pub floor: i32,
	pub city_id: i64,
	pub district_id: Option<i64>,
	pub metro_station_id: Option<i64>,
	/// Walking distance to the associated metro station, in minutes.
	pub metro_distance: Option<f64>,
	pub property_type_id: i64,
	pub transaction_type_id: i64,
	pub is_new_building: bool,
	pub is_commercial: bool,
	pub is_country: bool,
	pub year_built: Option<i32>,
	pub status: String,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListingImage {
	pub image_id: i64,
	pub listing_id: i64,
	pub url: String,
	pub position: i32,
	pub is_primary: bool,
}

/// A listing as returned to the caller: the row plus its representative image.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ListingCard {
	pub listing: Listing,
	pub image: Option<ListingImage>,
}

/// The primary-flagged image when present, otherwise the first in stored
/// order, otherwise none. `images` must already be in stored order.
pub fn representative_image(images: &[ListingImage]) -> Option<&ListingImage> {
	images.iter().find(|image| image.is_primary).or_else(|| images.first())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn image(image_id: i64, position: i32, is_primary: bool) -> ListingImage {
		ListingImage {
			image_id,
			listing_id: 1,
			url: format!("https://img.example/{image_id}.jpg"),
			position,
			is_primary,
		}
	}

	#[test]
	fn prefers_primary_image() {
		let images = vec![image(1, 0, false), image(2, 1, true), image(3, 2, false)];

		assert_eq!(representative_image(&images).map(|i| i.image_id), Some(2));
	}

	#[test]
	fn falls_back_to_first_in_stored_order() {
		let images = vec![image(7, 0, false), image(8, 1, false), image(9, 2, false)];

		assert_eq!(representative_image(&images).map(|i| i.image_id), Some(7));
	}

	#[test]
	fn no_images_means_no_representative() {
		assert!(representative_image(&[]).is_none());
	}
}
