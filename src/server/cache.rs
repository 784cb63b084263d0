use crate::utils::error::Result;
use serde::Serialize;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Serves the last computed report until its revalidation window lapses.
///
/// Callers arriving during a recomputation wait for it instead of starting
/// their own fan-out against the upstream API.
pub struct Revalidating {
    window: Duration,
    entry: Mutex<Option<(Instant, serde_json::Value)>>,
}

impl Revalidating {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            entry: Mutex::new(None),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub async fn get_or_refresh<T, F, Fut>(&self, refresh: F) -> Result<serde_json::Value>
    where
        T: Serialize,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        if self.window.is_zero() {
            return Ok(serde_json::to_value(refresh().await)?);
        }

        let mut entry = self.entry.lock().await;
        if let Some((computed_at, value)) = entry.as_ref() {
            if computed_at.elapsed() < self.window {
                tracing::debug!("♻️ Serving cached report ({:?} old)", computed_at.elapsed());
                return Ok(value.clone());
            }
        }

        let value = serde_json::to_value(refresh().await)?;
        *entry = Some((Instant::now(), value.clone()));
        Ok(value)
    }
}
