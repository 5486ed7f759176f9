use serde::{Deserialize, Serialize};

/// Outcome of one registration attempt, returned to the caller as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResult {
    pub message: String,
    pub registered: bool,
}

impl RegistrationResult {
    pub fn registered() -> Self {
        Self {
            message: "You have successfully registered.".to_string(),
            registered: true,
        }
    }

    pub fn within_cooldown(hours: i64) -> Self {
        Self {
            message: format!("You have already registered within {} hours.", hours),
            registered: false,
        }
    }
}
