use crate::core::{RecordStore, RegistrationResult};
use crate::utils::error::Result;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const COOLDOWN_HOURS: i64 = 10;

/// Records at most one commute per cooldown window.
///
/// The check and the insert are serialized inside this process only. Two
/// instances pointed at the same database can still both insert.
pub struct RegistrationService {
    store: Arc<dyn RecordStore>,
    title: String,
    cooldown: Duration,
    lock: Mutex<()>,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn RecordStore>, title: impl Into<String>) -> Self {
        Self {
            store,
            title: title.into(),
            cooldown: Duration::hours(COOLDOWN_HOURS),
            lock: Mutex::new(()),
        }
    }

    pub async fn register(&self) -> Result<RegistrationResult> {
        self.register_at(Utc::now()).await
    }

    pub async fn register_at(&self, now: DateTime<Utc>) -> Result<RegistrationResult> {
        let _guard = self.lock.lock().await;

        let latest = self.store.latest_created_time().await?;
        tracing::debug!("Latest record created at: {:?}", latest);

        // inclusive: exactly `cooldown` ago still counts as recent
        if let Some(created_time) = latest {
            if now - created_time <= self.cooldown {
                tracing::info!("Skipping registration, last record at {}", created_time);
                return Ok(RegistrationResult::within_cooldown(
                    self.cooldown.num_hours(),
                ));
            }
        }

        self.store.create_record(&self.title).await?;
        tracing::info!("Registered commute at {}", now);

        Ok(RegistrationResult::registered())
    }
}
