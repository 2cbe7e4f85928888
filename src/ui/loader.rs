//! Background task for the one-shot directory fetch.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use crate::api::{DirectoryClient, FetchError};
use crate::ui::events::AppEvent;

/// Handle to the in-flight fetch.
///
/// There is no true abort: cancellation clears a liveness flag that the
/// fetch thread consults before publishing its result, so a response that
/// arrives after the UI is torn down is discarded instead of applied.
pub struct FetchTask {
    alive: Arc<AtomicBool>,
}

impl FetchTask {
    /// Launch the fetch on a dedicated thread with its own current-thread
    /// runtime. Completion is delivered as [`AppEvent::FetchCompleted`].
    pub fn spawn(client: DirectoryClient, events: Sender<AppEvent>) -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        let liveness = Arc::clone(&alive);

        thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    tracing::error!(error = %err, "failed to build fetch runtime");
                    let _ = events.send(AppEvent::FetchCompleted(Err(FetchError::Internal(
                        err.to_string(),
                    ))));
                    return;
                }
            };

            tracing::info!("directory fetch started");
            let result = runtime.block_on(client.fetch_users());

            if !liveness.load(Ordering::SeqCst) {
                tracing::info!("fetch result discarded: view torn down");
                return;
            }

            match &result {
                Ok(records) => tracing::info!(count = records.len(), "directory fetch succeeded"),
                Err(err) => tracing::warn!(error = %err, "directory fetch failed"),
            }
            let _ = events.send(AppEvent::FetchCompleted(result));
        });

        Self { alive }
    }

    /// Mark the consuming view as gone; a late result will be dropped.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
