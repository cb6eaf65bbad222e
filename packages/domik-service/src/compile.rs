use domik_domain::{
	filters::ExtractedFilters,
	query::{Bounds, ListingQuery},
};

use crate::AssistantService;

impl AssistantService {
	/// Compiles the extracted filter set into a store-ready predicate.
	///
	/// Text fields go through the reference catalog; a miss or a lookup
	/// failure drops that one constraint and compilation continues — the
	/// search favors broader results over failing outright. Compilation
	/// itself never errors.
	pub(crate) async fn compile(&self, filters: &ExtractedFilters) -> ListingQuery {
		let catalog = &self.stores.catalog;
		let mut query = ListingQuery::default();

		if let Some(city) = &filters.city {
			match catalog.resolve_city(city).await {
				Ok(Some(found)) => query.city_id = Some(found.city_id),
				Ok(None) => tracing::debug!(city, "No city matched; constraint dropped."),
				Err(err) =>
					tracing::warn!(error = %err, city, "City lookup failed; constraint dropped."),
			}
		}

		// District and metro lookups are scoped to a city. Without a
		// resolved city they are skipped, not attempted globally.
		if let Some(city_id) = query.city_id {
			if let Some(district) = &filters.district {
				match catalog.resolve_district(city_id, district).await {
					Ok(Some(found)) => query.district_id = Some(found.district_id),
					Ok(None) =>
						tracing::debug!(district, "No district matched; constraint dropped."),
					Err(err) => tracing::warn!(
						error = %err,
						district,
						"District lookup failed; constraint dropped."
					),
				}
			}
			if let Some(station) = &filters.metro_station {
				match catalog.resolve_metro_station(city_id, station).await {
					Ok(Some(found)) => query.metro_station_id = Some(found.station_id),
					Ok(None) =>
						tracing::debug!(station, "No metro station matched; constraint dropped."),
					Err(err) => tracing::warn!(
						error = %err,
						station,
						"Metro station lookup failed; constraint dropped."
					),
				}
			}
		}

		if let Some(property_type) = &filters.property_type {
			match catalog.resolve_property_type(property_type).await {
				Ok(Some(found)) => query.property_type_id = Some(found.property_type_id),
				Ok(None) =>
					tracing::debug!(property_type, "No property type matched; constraint dropped."),
				Err(err) => tracing::warn!(
					error = %err,
					property_type,
					"Property type lookup failed; constraint dropped."
				),
			}
		}
		if let Some(transaction_type) = &filters.transaction_type {
			match catalog.resolve_transaction_type(transaction_type).await {
				Ok(Some(found)) => query.transaction_type_id = Some(found.transaction_type_id),
				Ok(None) => tracing::debug!(
					transaction_type,
					"No transaction type matched; constraint dropped."
				),
				Err(err) => tracing::warn!(
					error = %err,
					transaction_type,
					"Transaction type lookup failed; constraint dropped."
				),
			}
		}

		query.rooms = filters.rooms.clone();
		query.price = Bounds { min: filters.price_min, max: filters.price_max };
		query.area = Bounds { min: filters.area_min, max: filters.area_max };
		query.floor = Bounds { min: filters.floor_min, max: filters.floor_max };
		query.metro_distance_max = filters.metro_distance_max;
		query.year_built_min = filters.year_built_min;
		// Tri-state: Some(false) is a real constraint, None constrains nothing.
		query.is_new_building = filters.is_new_building;
		query.is_commercial = filters.is_commercial;
		query.is_country = filters.is_country;

		query
	}
}
