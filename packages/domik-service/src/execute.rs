use domik_domain::{
	listing::{ListingCard, representative_image},
	query::ListingQuery,
};

use crate::AssistantService;

/// Fixed result cap; not configurable per request.
pub const MAX_RESULTS: i64 = 20;

impl AssistantService {
	/// Runs the compiled predicate: newest listings first, capped at
	/// [`MAX_RESULTS`], one representative image per listing. A store
	/// failure yields an empty list, never an error.
	pub(crate) async fn execute(&self, query: &ListingQuery) -> Vec<ListingCard> {
		let listings = match self.stores.listings.search_active(query, MAX_RESULTS).await {
			Ok(listings) => listings,
			Err(err) => {
				tracing::warn!(error = %err, "Listing search failed; returning no results.");

				return Vec::new();
			},
		};
		let ids = listings.iter().map(|listing| listing.listing_id).collect::<Vec<_>>();
		let mut images = match self.stores.listings.images_for(&ids).await {
			Ok(images) => images,
			Err(err) => {
				tracing::warn!(error = %err, "Image fetch failed; returning listings without images.");

				Default::default()
			},
		};

		listings
			.into_iter()
			.map(|listing| {
				let listing_images = images.remove(&listing.listing_id).unwrap_or_default();
				let image = representative_image(&listing_images).cloned();

				ListingCard { listing, image }
			})
			.collect()
	}
}
