use axum::{
	Json, Router,
	extract::{State, rejection::JsonRejection},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use domik_service::{AssistantSearchRequest, AssistantSearchResponse};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/assistant/search", post(assistant_search))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn assistant_search(
	State(state): State<AppState>,
	payload: Result<Json<AssistantSearchRequest>, JsonRejection>,
) -> Result<Json<AssistantSearchResponse>, ApiError> {
	let Json(payload) = payload?;

	// The pipeline absorbs its own failures, so this handler cannot 500.
	Ok(Json(state.service.assistant_search(payload).await))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}

impl From<JsonRejection> for ApiError {
	fn from(rejection: JsonRejection) -> Self {
		Self {
			status: rejection.status(),
			error_code: "invalid_request".to_string(),
			message: rejection.body_text(),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
