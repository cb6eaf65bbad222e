use std::sync::Arc;

use domik_service::AssistantService;
use domik_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<AssistantService>,
}
impl AppState {
	pub async fn new(config: domik_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		Ok(Self { service: Arc::new(AssistantService::new(config, db)) })
	}

	pub fn with_service(service: AssistantService) -> Self {
		Self { service: Arc::new(service) }
	}
}
