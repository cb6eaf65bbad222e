use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The structured filter set extracted from a free-text search utterance.
///
/// Every field is independently optional. An absent field means
/// "unconstrained on that axis" and must never be collapsed to a
/// false/zero value by later stages.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFilters {
	pub city: Option<String>,
	pub transaction_type: Option<String>,
	pub property_type: Option<String>,
	pub price_min: Option<f64>,
	pub price_max: Option<f64>,
	pub area_min: Option<f64>,
	pub area_max: Option<f64>,
	pub rooms: Option<RoomsFilter>,
	pub floor_min: Option<i32>,
	pub floor_max: Option<i32>,
	pub is_new_building: Option<bool>,
	pub is_commercial: Option<bool>,
	pub is_country: Option<bool>,
	pub district: Option<String>,
	pub metro_station: Option<String>,
	pub metro_distance_max: Option<f64>,
	pub year_built_min: Option<i32>,
}

/// A single room count or a multi-valued preference.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RoomsFilter {
	Exactly(i32),
	AnyOf(Vec<i32>),
}

impl ExtractedFilters {
	/// Builds the filter set from the raw model output.
	///
	/// Coercion is lenient per field: a missing, null, or wrong-typed field
	/// becomes `None` and the rest of the object is still read. A non-object
	/// payload yields the all-null filter set.
	pub fn from_value(raw: &Value) -> Self {
		let Some(map) = raw.as_object() else {
			return Self::default();
		};

		Self {
			city: string_field(map, "city"),
			transaction_type: string_field(map, "transactionType"),
			property_type: string_field(map, "propertyType"),
			price_min: number_field(map, "priceMin"),
			price_max: number_field(map, "priceMax"),
			area_min: number_field(map, "areaMin"),
			area_max: number_field(map, "areaMax"),
			rooms: rooms_field(map.get("rooms")),
			floor_min: int_field(map, "floorMin"),
			floor_max: int_field(map, "floorMax"),
			is_new_building: bool_field(map, "isNewBuilding"),
			is_commercial: bool_field(map, "isCommercial"),
			is_country: bool_field(map, "isCountry"),
			district: string_field(map, "district"),
			metro_station: string_field(map, "metroStation"),
			metro_distance_max: number_field(map, "metroDistanceMax"),
			year_built_min: int_field(map, "yearBuiltMin"),
		}
	}
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
	map.get(key)
		.and_then(Value::as_str)
		.map(str::trim)
		.filter(|value| !value.is_empty())
		.map(str::to_string)
}

fn number_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
	let raw = map.get(key)?;

	match raw {
		Value::Number(value) => value.as_f64().filter(|value| value.is_finite()),
		// Models occasionally quote numbers.
		Value::String(value) => value.trim().parse::<f64>().ok().filter(|value| value.is_finite()),
		_ => None,
	}
}

fn int_field(map: &Map<String, Value>, key: &str) -> Option<i32> {
	let raw = map.get(key)?;

	match raw {
		Value::Number(value) => value.as_i64().and_then(|value| i32::try_from(value).ok()),
		Value::String(value) => value.trim().parse::<i32>().ok(),
		_ => None,
	}
}

fn bool_field(map: &Map<String, Value>, key: &str) -> Option<bool> {
	map.get(key).and_then(Value::as_bool)
}

fn rooms_field(raw: Option<&Value>) -> Option<RoomsFilter> {
	match raw? {
		Value::Number(value) =>
			value.as_i64().and_then(|value| i32::try_from(value).ok()).map(RoomsFilter::Exactly),
		Value::Array(values) => {
			let rooms = values
				.iter()
				.filter_map(Value::as_i64)
				.filter_map(|value| i32::try_from(value).ok())
				.collect::<Vec<_>>();

			if rooms.is_empty() { None } else { Some(RoomsFilter::AnyOf(rooms)) }
		},
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_all_fields() {
		let raw = serde_json::json!({
			"city": "Санкт-Петербург",
			"transactionType": "Sale",
			"propertyType": "Apartment",
			"priceMin": 5_000_000,
			"priceMax": 10_000_000,
			"areaMin": 40.5,
			"areaMax": null,
			"rooms": 2,
			"floorMin": 3,
			"floorMax": 15,
			"isNewBuilding": true,
			"isCommercial": null,
			"isCountry": false,
			"district": "Центральный",
			"metroStation": "Невский проспект",
			"metroDistanceMax": 10,
			"yearBuiltMin": 2010,
		});
		let filters = ExtractedFilters::from_value(&raw);

		assert_eq!(filters.city.as_deref(), Some("Санкт-Петербург"));
		assert_eq!(filters.price_min, Some(5_000_000.0));
		assert_eq!(filters.area_max, None);
		assert_eq!(filters.rooms, Some(RoomsFilter::Exactly(2)));
		assert_eq!(filters.is_new_building, Some(true));
		assert_eq!(filters.is_commercial, None);
		assert_eq!(filters.is_country, Some(false));
		assert_eq!(filters.metro_distance_max, Some(10.0));
	}

	#[test]
	fn absent_and_null_are_both_unconstrained() {
		let raw = serde_json::json!({ "city": null });
		let filters = ExtractedFilters::from_value(&raw);

		assert_eq!(filters, ExtractedFilters::default());
	}

	#[test]
	fn wrong_typed_field_is_dropped_not_fatal() {
		let raw = serde_json::json!({
			"priceMin": "not a number",
			"rooms": "two",
			"isCommercial": "yes",
			"city": "Москва",
		});
		let filters = ExtractedFilters::from_value(&raw);

		assert_eq!(filters.price_min, None);
		assert_eq!(filters.rooms, None);
		assert_eq!(filters.is_commercial, None);
		assert_eq!(filters.city.as_deref(), Some("Москва"));
	}

	#[test]
	fn quoted_numbers_are_coerced() {
		let raw = serde_json::json!({ "priceMax": "10000000", "floorMin": "2" });
		let filters = ExtractedFilters::from_value(&raw);

		assert_eq!(filters.price_max, Some(10_000_000.0));
		assert_eq!(filters.floor_min, Some(2));
	}

	#[test]
	fn rooms_list_is_read_as_set() {
		let raw = serde_json::json!({ "rooms": [1, 2] });
		let filters = ExtractedFilters::from_value(&raw);

		assert_eq!(filters.rooms, Some(RoomsFilter::AnyOf(vec![1, 2])));
	}

	#[test]
	fn empty_rooms_list_is_unconstrained() {
		let raw = serde_json::json!({ "rooms": [] });

		assert_eq!(ExtractedFilters::from_value(&raw).rooms, None);
	}

	#[test]
	fn non_object_payload_yields_all_null() {
		assert_eq!(
			ExtractedFilters::from_value(&serde_json::json!("2 rooms")),
			ExtractedFilters::default()
		);
	}
}
