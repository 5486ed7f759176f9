use crate::adapters::NotionClient;
use crate::config::ServerConfig;
use crate::core::registration::RegistrationService;
use crate::core::RecordStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub registration: Arc<RegistrationService>,
}

impl AppState {
    pub fn new(config: Arc<ServerConfig>, store: Arc<dyn RecordStore>) -> Self {
        let registration = Arc::new(RegistrationService::new(store, config.record_title.clone()));
        Self {
            config,
            registration,
        }
    }

    /// State backed by the Notion database named in `config`.
    pub fn from_config(config: ServerConfig) -> Self {
        let store = Arc::new(NotionClient::from_config(&config));
        Self::new(Arc::new(config), store)
    }
}
