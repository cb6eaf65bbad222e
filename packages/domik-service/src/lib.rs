pub mod assistant;
pub mod compile;
pub mod execute;
pub mod interpret;

use std::{collections::HashMap, future::Future, pin::Pin, sync::Arc};

use serde_json::Value;

pub use assistant::{AssistantSearchRequest, AssistantSearchResponse};

use domik_config::{Config, LlmProviderConfig};
use domik_domain::{
	listing::{City, District, Listing, ListingImage, MetroStation, PropertyType, TransactionType},
	query::ListingQuery,
};
use domik_providers::extractor;
use domik_storage::{catalog, db::Db, listings};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait ExtractorProvider
where
	Self: Send + Sync,
{
	fn extract<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, color_eyre::Result<Value>>;
}

/// Read-only lookups against the reference catalog. Implementations must
/// resolve by case-insensitive containment of the query text within the
/// stored display name, picking the shortest matching name (then the
/// lexicographically smallest) so resolution is deterministic.
pub trait ReferenceCatalog
where
	Self: Send + Sync,
{
	fn resolve_city<'a>(&'a self, name: &'a str)
	-> BoxFuture<'a, color_eyre::Result<Option<City>>>;

	fn resolve_district<'a>(
		&'a self,
		city_id: i64,
		name: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Option<District>>>;

	fn resolve_metro_station<'a>(
		&'a self,
		city_id: i64,
		name: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Option<MetroStation>>>;

	fn resolve_property_type<'a>(
		&'a self,
		name: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Option<PropertyType>>>;

	fn resolve_transaction_type<'a>(
		&'a self,
		name: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Option<TransactionType>>>;
}

/// Read access to the listing store. `search_active` must return only
/// active listings, newest first, and at most `limit` rows, so the SQL and
/// in-memory backends cannot drift from the executor's expectations.
pub trait ListingStore
where
	Self: Send + Sync,
{
	fn search_active<'a>(
		&'a self,
		query: &'a ListingQuery,
		limit: i64,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Listing>>>;

	fn images_for<'a>(
		&'a self,
		listing_ids: &'a [i64],
	) -> BoxFuture<'a, color_eyre::Result<HashMap<i64, Vec<ListingImage>>>>;
}

#[derive(Clone)]
pub struct Providers {
	pub extractor: Arc<dyn ExtractorProvider>,
}
impl Providers {
	pub fn new(extractor: Arc<dyn ExtractorProvider>) -> Self {
		Self { extractor }
	}
}
impl Default for Providers {
	fn default() -> Self {
		Self { extractor: Arc::new(DefaultExtractor) }
	}
}

#[derive(Clone)]
pub struct Stores {
	pub catalog: Arc<dyn ReferenceCatalog>,
	pub listings: Arc<dyn ListingStore>,
}
impl Stores {
	pub fn new(catalog: Arc<dyn ReferenceCatalog>, listings: Arc<dyn ListingStore>) -> Self {
		Self { catalog, listings }
	}

	pub fn postgres(db: Arc<Db>) -> Self {
		Self { catalog: Arc::new(PgCatalog { db: db.clone() }), listings: Arc::new(PgListings { db }) }
	}
}

pub struct AssistantService {
	pub cfg: Config,
	pub stores: Stores,
	pub providers: Providers,
}
impl AssistantService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, stores: Stores::postgres(Arc::new(db)), providers: Providers::default() }
	}

	pub fn with_parts(cfg: Config, stores: Stores, providers: Providers) -> Self {
		Self { cfg, stores, providers }
	}
}

struct DefaultExtractor;

impl ExtractorProvider for DefaultExtractor {
	fn extract<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, color_eyre::Result<Value>> {
		Box::pin(extractor::extract(cfg, messages))
	}
}

struct PgCatalog {
	db: Arc<Db>,
}

impl ReferenceCatalog for PgCatalog {
	fn resolve_city<'a>(
		&'a self,
		name: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Option<City>>> {
		Box::pin(async move { Ok(catalog::resolve_city(&self.db, name).await?) })
	}

	fn resolve_district<'a>(
		&'a self,
		city_id: i64,
		name: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Option<District>>> {
		Box::pin(async move { Ok(catalog::resolve_district(&self.db, city_id, name).await?) })
	}

	fn resolve_metro_station<'a>(
		&'a self,
		city_id: i64,
		name: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Option<MetroStation>>> {
		Box::pin(async move { Ok(catalog::resolve_metro_station(&self.db, city_id, name).await?) })
	}

	fn resolve_property_type<'a>(
		&'a self,
		name: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Option<PropertyType>>> {
		Box::pin(async move { Ok(catalog::resolve_property_type(&self.db, name).await?) })
	}

	fn resolve_transaction_type<'a>(
		&'a self,
		name: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Option<TransactionType>>> {
		Box::pin(async move { Ok(catalog::resolve_transaction_type(&self.db, name).await?) })
	}
}

struct PgListings {
	db: Arc<Db>,
}

impl ListingStore for PgListings {
	fn search_active<'a>(
		&'a self,
		query: &'a ListingQuery,
		limit: i64,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Listing>>> {
		Box::pin(async move { Ok(listings::search_active(&self.db, query, limit).await?) })
	}

	fn images_for<'a>(
		&'a self,
		listing_ids: &'a [i64],
	) -> BoxFuture<'a, color_eyre::Result<HashMap<i64, Vec<ListingImage>>>> {
		Box::pin(async move { Ok(listings::images_for(&self.db, listing_ids).await?) })
	}
}
