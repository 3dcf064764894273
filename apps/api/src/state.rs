use chrono::{DateTime, Utc};

use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
///
/// The ATS profile table is `'static` data and is not carried here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            started_at: Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds().max(0)
    }
}
