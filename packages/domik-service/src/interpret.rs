use domik_domain::filters::ExtractedFilters;

use crate::AssistantService;

/// The extraction contract sent as the system message. It enumerates every
/// field the model may emit, its type, and its value vocabulary; anything
/// the user did not state must come back as null.
pub(crate) const EXTRACTION_PROMPT: &str = "\
You extract real-estate search filters from a user request.
Respond with a single JSON object and nothing else. Use exactly these keys, \
with null for anything the request does not state:
- city: the city name as the user wrote it, or null
- transactionType: \"Sale\" or \"Rent\", or null
- propertyType: \"Apartment\", \"House\", \"Commercial\" or \"Land\", or null
- priceMin, priceMax: numbers, or null
- areaMin, areaMax: numbers in square meters, or null
- rooms: a number, or an array of numbers when several counts fit, or null
- floorMin, floorMax: numbers, or null
- isNewBuilding, isCommercial, isCountry: true, false, or null
- district: the district name as the user wrote it, or null
- metroStation: the metro station name as the user wrote it, or null
- metroDistanceMax: a number of minutes on foot, or null
- yearBuiltMin: a number, or null
Never guess. A field the user did not mention is null, not false and not 0.";

impl AssistantService {
	/// Extracts a structured filter set from a free-text utterance.
	///
	/// Exactly one model call per search; a call failure, timeout, or
	/// unparseable response degrades to the all-null filter set so the
	/// search still runs (broad rather than broken).
	pub(crate) async fn interpret(&self, utterance: &str) -> ExtractedFilters {
		let messages = [
			serde_json::json!({ "role": "system", "content": EXTRACTION_PROMPT }),
			serde_json::json!({ "role": "user", "content": utterance }),
		];

		match self.providers.extractor.extract(&self.cfg.providers.llm_extractor, &messages).await
		{
			Ok(raw) => ExtractedFilters::from_value(&raw),
			Err(err) => {
				tracing::warn!(
					error = %err,
					"Filter extraction failed; falling back to an unfiltered search."
				);

				ExtractedFilters::default()
			},
		}
	}
}
