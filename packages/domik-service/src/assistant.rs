use domik_domain::{filters::ExtractedFilters, listing::ListingCard};

use crate::AssistantService;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AssistantSearchRequest {
	pub query: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AssistantSearchResponse {
	/// The extracted filter set, returned alongside the results for UI
	/// display and debugging.
	pub filters: ExtractedFilters,
	pub results: Vec<ListingCard>,
}

impl AssistantService {
	/// The single inbound operation: free-text utterance in, extracted
	/// filters plus capped, newest-first results out.
	///
	/// This call never fails. Model failures degrade to an unfiltered
	/// search, unresolved references drop their one constraint, and store
	/// failures degrade to an empty result list.
	pub async fn assistant_search(&self, request: AssistantSearchRequest) -> AssistantSearchResponse {
		let filters = self.interpret(&request.query).await;
		let query = self.compile(&filters).await;
		let results = self.execute(&query).await;

		AssistantSearchResponse { filters, results }
	}
}
