use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncReceiver;
use regen_core::tracker::Schedule;
use regen_core::{Notifier, SyncSource, Tracker};
use regen_notify::ToastOutcome;
use tokio::task::{JoinError, JoinSet};
use tokio_util::sync::CancellationToken;

use crate::seed::{ManualSeed, acquire_seed};
use crate::state::AppState;

/// Application controller for task spawning and lifecycle
pub struct AppController {
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks<S>(
        &self,
        source: S,
        notifier: Arc<dyn Notifier>,
        toast_rx: AsyncReceiver<ToastOutcome>,
        manual: ManualSeed,
    ) -> JoinSet<anyhow::Result<()>>
    where
        S: SyncSource + 'static,
    {
        let mut tasks = JoinSet::new();

        // Seeding, then the regeneration loop
        tasks.spawn(tracker_task(
            self.state.clone(),
            source,
            notifier,
            manual,
            self.cancel_token.child_token(),
        ));

        // Toast completions
        tasks.spawn(toast_watcher(toast_rx, self.cancel_token.child_token()));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

/// Maps the first finished task to the process result
pub fn task_outcome(result: Result<anyhow::Result<()>, JoinError>) -> anyhow::Result<()> {
    match result {
        Ok(Ok(())) => {
            tracing::warn!("task exited");
            Ok(())
        }
        Ok(Err(e)) => {
            tracing::error!("task failed: {e:#}");
            Err(e)
        }
        Err(e) => {
            tracing::error!("task panicked: {e}");
            Err(e.into())
        }
    }
}

async fn tracker_task<S: SyncSource>(
    state: Arc<AppState>,
    source: S,
    notifier: Arc<dyn Notifier>,
    manual: ManualSeed,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let seed = tokio::select! {
        seed = acquire_seed(&state, &source, manual) => seed?,
        _ = cancel.cancelled() => return Ok(()),
    };

    tracing::info!("Seeded from {:?}: {:?}", seed.source, seed.reading);

    let tracker = Tracker::seed(
        seed.reading,
        Schedule::from(&state.config.tracker),
        state.clock.clone(),
        notifier,
        Duration::from_millis(state.config.notifier.duration_ms),
    );
    tracker.run(cancel).await;

    Ok(())
}

async fn toast_watcher(
    toast_rx: AsyncReceiver<ToastOutcome>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            outcome = toast_rx.recv() => match outcome {
                Ok(ToastOutcome::Dismissed { id }) => tracing::debug!(toast = %id, "toast dismissed"),
                Ok(ToastOutcome::Failed { id, reason }) => {
                    tracing::debug!(toast = %id, "toast failed: {reason}")
                }
                Err(_) => break,
            },
        }
    }

    Ok(())
}
