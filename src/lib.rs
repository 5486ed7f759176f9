pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::NotionClient;
pub use app::{build_router, AppState};
pub use config::ServerConfig;
pub use crate::core::{registration::RegistrationService, RecordStore, RegistrationResult};
pub use utils::error::{CommuteError, Result};
