pub mod registration;

pub use crate::domain::model::RegistrationResult;
pub use crate::domain::ports::RecordStore;
pub use crate::utils::error::Result;
