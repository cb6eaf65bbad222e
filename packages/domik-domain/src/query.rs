use serde::{Deserialize, Serialize};

use crate::{
	filters::RoomsFilter,
	listing::{Listing, STATUS_ACTIVE},
};

/// A numeric range with independently optional bounds. A present `min` with
/// an absent `max` is an open-ended lower bound; the missing side is never
/// defaulted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Bounds<T> {
	pub min: Option<T>,
	pub max: Option<T>,
}
impl<T> Bounds<T>
where
	T: PartialOrd + Copy,
{
	pub fn contains(&self, value: T) -> bool {
		if let Some(min) = self.min
			&& value < min
		{
			return false;
		}
		if let Some(max) = self.max
			&& value > max
		{
			return false;
		}

		true
	}
}

/// The store-ready predicate compiled from an [`ExtractedFilters`]: a
/// conjunction over canonical identifiers, partial ranges, and boolean
/// flags. Built once per search and discarded after execution.
///
/// The active-status constraint is implied and unconditional; it is part of
/// [`ListingQuery::matches`] and of the SQL rendering, not a field here.
///
/// [`ExtractedFilters`]: crate::filters::ExtractedFilters
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ListingQuery {
	pub city_id: Option<i64>,
	pub district_id: Option<i64>,
	pub metro_station_id: Option<i64>,
	pub property_type_id: Option<i64>,
	pub transaction_type_id: Option<i64>,
	pub rooms: Option<RoomsFilter>,
	pub price: Bounds<f64>,
	pub area: Bounds<f64>,
	pub floor: Bounds<i32>,
	pub metro_distance_max: Option<f64>,
	pub year_built_min: Option<i32>,
	pub is_new_building: Option<bool>,
	pub is_commercial: Option<bool>,
	pub is_country: Option<bool>,
}
impl ListingQuery {
	/// Whether a listing satisfies every present constraint. Constraints on
	/// fields the listing lacks (`metro_distance`, `year_built`) exclude it,
	/// matching the SQL comparison semantics for NULL columns.
	pub fn matches(&self, listing: &Listing) -> bool {
		if listing.status != STATUS_ACTIVE {
			return false;
		}
		if let Some(city_id) = self.city_id
			&& listing.city_id != city_id
		{
			return false;
		}
		if let Some(district_id) = self.district_id
			&& listing.district_id != Some(district_id)
		{
			return false;
		}
		if let Some(station_id) = self.metro_station_id
			&& listing.metro_station_id != Some(station_id)
		{
			return false;
		}
		if let Some(property_type_id) = self.property_type_id
			&& listing.property_type_id != property_type_id
		{
			return false;
		}
		if let Some(transaction_type_id) = self.transaction_type_id
			&& listing.transaction_type_id != transaction_type_id
		{
			return false;
		}

		match &self.rooms {
			Some(RoomsFilter::Exactly(rooms)) =>
				if listing.rooms != *rooms {
					return false;
				},
			Some(RoomsFilter::AnyOf(rooms)) =>
				if !rooms.contains(&listing.rooms) {
					return false;
				},
			None => {},
		}

		if !self.price.contains(listing.price) {
			return false;
		}
		if !self.area.contains(listing.area) {
			return false;
		}
		if !self.floor.contains(listing.floor) {
			return false;
		}
		if let Some(max) = self.metro_distance_max
			&& !listing.metro_distance.is_some_and(|distance| distance <= max)
		{
			return false;
		}
		if let Some(min) = self.year_built_min
			&& !listing.year_built.is_some_and(|year| year >= min)
		{
			return false;
		}
		if let Some(flag) = self.is_new_building
			&& listing.is_new_building != flag
		{
			return false;
		}
		if let Some(flag) = self.is_commercial
			&& listing.is_commercial != flag
		{
			return false;
		}
		if let Some(flag) = self.is_country
			&& listing.is_country != flag
		{
			return false;
		}

		true
	}
}

#[cfg(test)]
mod tests {
	use time::OffsetDateTime;

	use super::*;

	fn listing() -> Listing {
		Listing {
			listing_id: 1,
			title: "2-комнатная квартира".to_string(),
			price: 8_500_000.0,
			area: 54.0,
			rooms: 2,
			floor: 4,
			city_id: 10,
			district_id: Some(100),
			metro_station_id: Some(1_000),
			metro_distance: Some(7.0),
			property_type_id: 1,
			transaction_type_id: 2,
			is_new_building: false,
			is_commercial: true,
			is_country: false,
			year_built: Some(2015),
			status: STATUS_ACTIVE.to_string(),
			created_at: OffsetDateTime::from_unix_timestamp(1_700_000_000).expect("timestamp"),
		}
	}

	#[test]
	fn empty_query_matches_any_active_listing() {
		assert!(ListingQuery::default().matches(&listing()));
	}

	#[test]
	fn inactive_listings_never_match() {
		let mut sold = listing();

		sold.status = "sold".to_string();

		assert!(!ListingQuery::default().matches(&sold));
	}

	#[test]
	fn absent_boolean_imposes_no_constraint() {
		// `is_commercial` left as None must keep both commercial and
		// non-commercial listings reachable.
		let query = ListingQuery::default();
		let commercial = listing();
		let mut residential = listing();

		residential.is_commercial = false;

		assert!(query.matches(&commercial));
		assert!(query.matches(&residential));
	}

	#[test]
	fn false_boolean_is_a_real_constraint() {
		let query = ListingQuery { is_commercial: Some(false), ..Default::default() };

		assert!(!query.matches(&listing()));
	}

	#[test]
	fn lower_bound_alone_leaves_upper_open() {
		let query = ListingQuery {
			price: Bounds { min: Some(5_000_000.0), max: None },
			..Default::default()
		};
		let mut expensive = listing();

		expensive.price = 900_000_000.0;

		assert!(query.matches(&expensive));
		assert!(!query.matches(&Listing { price: 4_999_999.0, ..listing() }));
	}

	#[test]
	fn rooms_set_membership() {
		let query =
			ListingQuery { rooms: Some(RoomsFilter::AnyOf(vec![1, 2])), ..Default::default() };
		let two_rooms = listing();
		let mut three_rooms = listing();

		three_rooms.rooms = 3;

		assert!(query.matches(&two_rooms));
		assert!(!query.matches(&three_rooms));
	}

	#[test]
	fn metro_distance_constraint_excludes_listings_without_metro() {
		let query = ListingQuery { metro_distance_max: Some(10.0), ..Default::default() };
		let mut no_metro = listing();

		no_metro.metro_station_id = None;
		no_metro.metro_distance = None;

		assert!(query.matches(&listing()));
		assert!(!query.matches(&no_metro));
	}

	#[test]
	fn year_built_lower_bound() {
		let query = ListingQuery { year_built_min: Some(2020), ..Default::default() };

		assert!(!query.matches(&listing()));
		assert!(query.matches(&Listing { year_built: Some(2021), ..listing() }));
	}
}
