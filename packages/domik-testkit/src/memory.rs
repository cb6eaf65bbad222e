//! In-memory backends for the service seams, so the search pipeline can be
//! exercised without Postgres or a live model endpoint.

use std::collections::HashMap;

use color_eyre::eyre;
use serde_json::Value;

use domik_domain::{
	listing::{City, District, Listing, ListingImage, MetroStation, PropertyType, TransactionType},
	matching,
	query::ListingQuery,
};
use domik_service::{BoxFuture, ExtractorProvider, ListingStore, ReferenceCatalog};

/// Returns a fixed extraction payload, standing in for the model.
pub struct ScriptedExtractor {
	pub response: Value,
}

impl ExtractorProvider for ScriptedExtractor {
	fn extract<'a>(
		&'a self,
		_cfg: &'a domik_config::LlmProviderConfig,
		_messages: &'a [Value],
	) -> BoxFuture<'a, color_eyre::Result<Value>> {
		Box::pin(async move { Ok(self.response.clone()) })
	}
}

/// Fails every call, standing in for a down or timing-out model endpoint.
pub struct FailingExtractor;

impl ExtractorProvider for FailingExtractor {
	fn extract<'a>(
		&'a self,
		_cfg: &'a domik_config::LlmProviderConfig,
		_messages: &'a [Value],
	) -> BoxFuture<'a, color_eyre::Result<Value>> {
		Box::pin(async move { Err(eyre::eyre!("extractor unavailable")) })
	}
}

#[derive(Default)]
pub struct MemoryCatalog {
	pub cities: Vec<City>,
	pub districts: Vec<District>,
	pub stations: Vec<MetroStation>,
	pub property_types: Vec<PropertyType>,
	pub transaction_types: Vec<TransactionType>,
}

impl ReferenceCatalog for MemoryCatalog {
	fn resolve_city<'a>(
		&'a self,
		name: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Option<City>>> {
		Box::pin(async move {
			let id = matching::pick_best(
				name,
				self.cities.iter().map(|city| (city.city_id, city.name.as_str())),
			);

			Ok(id.and_then(|id| self.cities.iter().find(|city| city.city_id == id).cloned()))
		})
	}

	fn resolve_district<'a>(
		&'a self,
		city_id: i64,
		name: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Option<District>>> {
		Box::pin(async move {
			let id = matching::pick_best(
				name,
				self.districts
					.iter()
					.filter(|district| district.city_id == city_id)
					.map(|district| (district.district_id, district.name.as_str())),
			);

			Ok(id.and_then(|id| {
				self.districts.iter().find(|district| district.district_id == id).cloned()
			}))
		})
	}

	fn resolve_metro_station<'a>(
		&'a self,
		city_id: i64,
		name: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Option<MetroStation>>> {
		Box::pin(async move {
			let id = matching::pick_best(
				name,
				self.stations
					.iter()
					.filter(|station| station.city_id == city_id)
					.map(|station| (station.station_id, station.name.as_str())),
			);

			Ok(id
				.and_then(|id| self.stations.iter().find(|station| station.station_id == id))
				.cloned())
		})
	}

	fn resolve_property_type<'a>(
		&'a self,
		name: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Option<PropertyType>>> {
		Box::pin(async move {
			let id = matching::pick_best(
				name,
				self.property_types.iter().map(|kind| (kind.property_type_id, kind.name.as_str())),
			);

			Ok(id.and_then(|id| {
				self.property_types.iter().find(|kind| kind.property_type_id == id).cloned()
			}))
		})
	}

	fn resolve_transaction_type<'a>(
		&'a self,
		name: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Option<TransactionType>>> {
		Box::pin(async move {
			let id = matching::pick_best(
				name,
				self.transaction_types
					.iter()
					.map(|kind| (kind.transaction_type_id, kind.name.as_str())),
			);

			Ok(id.and_then(|id| {
				self.transaction_types
					.iter()
					.find(|kind| kind.transaction_type_id == id)
					.cloned()
			}))
		})
	}
}

#[derive(Default)]
pub struct MemoryListings {
	pub listings: Vec<Listing>,
	pub images: Vec<ListingImage>,
	/// Simulates a connectivity failure on every call.
	pub fail: bool,
}

impl ListingStore for MemoryListings {
	fn search_active<'a>(
		&'a self,
		query: &'a ListingQuery,
		limit: i64,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Listing>>> {
		Box::pin(async move {
			if self.fail {
				return Err(eyre::eyre!("listing store unavailable"));
			}

			let mut matched = self
				.listings
				.iter()
				.filter(|listing| query.matches(listing))
				.cloned()
				.collect::<Vec<_>>();

			matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
			matched.truncate(usize::try_from(limit).unwrap_or_default());

			Ok(matched)
		})
	}

	fn images_for<'a>(
		&'a self,
		listing_ids: &'a [i64],
	) -> BoxFuture<'a, color_eyre::Result<HashMap<i64, Vec<ListingImage>>>> {
		Box::pin(async move {
			if self.fail {
				return Err(eyre::eyre!("listing store unavailable"));
			}

			let mut grouped: HashMap<i64, Vec<ListingImage>> = HashMap::new();

			for image in &self.images {
				if listing_ids.contains(&image.listing_id) {
					grouped.entry(image.listing_id).or_default().push(image.clone());
				}
			}
			for images in grouped.values_mut() {
				images.sort_by_key(|image| (image.position, image.image_id));
			}

			Ok(grouped)
		})
	}
}
