use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use regen_config::notifier::NotifierConfig;
use regen_core::Notifier;
use tokio::runtime::Handle;
use uuid::Uuid;

use crate::animation::slide_in_positions;
use crate::surface::{ToastFrame, ToastSurface};

/// How a toast task ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastOutcome {
    Dismissed { id: Uuid },
    Failed { id: Uuid, reason: String },
}

#[derive(Debug, Clone)]
pub struct ToastLayout {
    pub screen_width: u32,
    pub width: u32,
    pub height: u32,
    pub top: i32,
    pub margin: i32,
    pub slide_frames: u32,
    pub frame_delay: Duration,
}

impl ToastLayout {
    /// `screen_width` overrides the configured fallback when known
    pub fn from_config(config: &NotifierConfig, screen_width: Option<u32>) -> Self {
        Self {
            screen_width: screen_width.unwrap_or(config.screen_width),
            width: config.width,
            height: config.height,
            top: config.top,
            margin: config.margin,
            slide_frames: config.slide_frames,
            frame_delay: Duration::from_millis(config.frame_ms),
        }
    }

    fn frame_at(&self, x: i32) -> ToastFrame {
        ToastFrame {
            x,
            y: self.top,
            width: self.width,
            height: self.height,
        }
    }

    fn resting_x(&self) -> i32 {
        self.screen_width as i32 - self.width as i32 - self.margin
    }
}

/// Each `show` spawns a task that owns its toast from open to close and
/// reports the outcome on the completion channel.
pub struct ToastNotifier<S> {
    surface: Arc<S>,
    layout: ToastLayout,
    done_tx: AsyncSender<ToastOutcome>,
    runtime: Handle,
}

impl<S: ToastSurface> ToastNotifier<S> {
    pub fn new(
        surface: S,
        layout: ToastLayout,
        runtime: Handle,
    ) -> (Self, AsyncReceiver<ToastOutcome>) {
        let (done_tx, done_rx) = kanal::bounded_async(64);
        let notifier = Self {
            surface: Arc::new(surface),
            layout,
            done_tx,
            runtime,
        };
        (notifier, done_rx)
    }
}

impl<S: ToastSurface> Notifier for ToastNotifier<S> {
    fn show(&self, message: &str, duration: Duration) {
        let id = Uuid::new_v4();
        let surface = Arc::clone(&self.surface);
        let layout = self.layout.clone();
        let done_tx = self.done_tx.clone();
        let message = message.to_string();

        self.runtime.spawn(async move {
            let outcome = match run_toast(surface.as_ref(), id, &message, &layout, duration).await {
                Ok(()) => ToastOutcome::Dismissed { id },
                Err(e) => {
                    tracing::debug!(toast = %id, "toast aborted: {e:#}");
                    let _ = surface.close(id);
                    ToastOutcome::Failed {
                        id,
                        reason: format!("{e:#}"),
                    }
                }
            };

            // nobody listening during shutdown
            let _ = done_tx.send(outcome).await;
        });
    }
}

async fn run_toast<S: ToastSurface + ?Sized>(
    surface: &S,
    id: Uuid,
    message: &str,
    layout: &ToastLayout,
    duration: Duration,
) -> anyhow::Result<()> {
    let positions = slide_in_positions(
        layout.screen_width,
        layout.width,
        layout.margin,
        layout.slide_frames,
    );
    let start_x = positions.first().copied().unwrap_or_else(|| layout.resting_x());

    surface.open(id, message, layout.frame_at(start_x))?;

    for x in positions.into_iter().skip(1) {
        tokio::time::sleep(layout.frame_delay).await;
        surface.move_to(id, layout.frame_at(x))?;
    }

    tokio::time::sleep(duration).await;
    surface.close(id)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Open(String, i32),
        Move(i32),
        Close,
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Mutex<Vec<Call>>,
        fail_moves: bool,
    }

    impl ToastSurface for RecordingSurface {
        fn open(&self, _id: Uuid, message: &str, frame: ToastFrame) -> anyhow::Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Open(message.to_string(), frame.x));
            Ok(())
        }

        fn move_to(&self, _id: Uuid, frame: ToastFrame) -> anyhow::Result<()> {
            if self.fail_moves {
                anyhow::bail!("surface already removed");
            }
            self.calls.lock().unwrap().push(Call::Move(frame.x));
            Ok(())
        }

        fn close(&self, _id: Uuid) -> anyhow::Result<()> {
            self.calls.lock().unwrap().push(Call::Close);
            Ok(())
        }
    }

    fn layout() -> ToastLayout {
        ToastLayout {
            screen_width: 1000,
            width: 280,
            height: 70,
            top: 20,
            margin: 20,
            slide_frames: 3,
            frame_delay: Duration::from_millis(1),
        }
    }

    async fn next_outcome(rx: &AsyncReceiver<ToastOutcome>) -> ToastOutcome {
        tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap()
    }

    #[tokio::test]
    async fn toast_slides_in_holds_and_closes() {
        let (notifier, done_rx) =
            ToastNotifier::new(RecordingSurface::default(), layout(), Handle::current());

        notifier.show("Charges 80% full (8/10)", Duration::from_millis(5));

        assert!(matches!(
            next_outcome(&done_rx).await,
            ToastOutcome::Dismissed { .. }
        ));

        let calls = notifier.surface.calls.lock().unwrap().clone();
        assert_eq!(calls.first(), Some(&Call::Open("Charges 80% full (8/10)".to_string(), 1050)));
        assert_eq!(calls.last(), Some(&Call::Close));
        assert!(calls.contains(&Call::Move(700)));
    }

    #[tokio::test]
    async fn surface_failure_is_reported_not_raised() {
        let surface = RecordingSurface {
            fail_moves: true,
            ..Default::default()
        };
        let (notifier, done_rx) = ToastNotifier::new(surface, layout(), Handle::current());

        notifier.show("Charges 100% full (10/10)", Duration::from_millis(5));

        match next_outcome(&done_rx).await {
            ToastOutcome::Failed { reason, .. } => assert!(reason.contains("already removed")),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[tokio::test]
    async fn concurrent_toasts_each_report_once() {
        let (notifier, done_rx) =
            ToastNotifier::new(RecordingSurface::default(), layout(), Handle::current());

        for i in 0..3 {
            notifier.show(&format!("toast {i}"), Duration::from_millis(5));
        }

        let mut ids = Vec::new();
        for _ in 0..3 {
            match next_outcome(&done_rx).await {
                ToastOutcome::Dismissed { id } => ids.push(id),
                other => panic!("unexpected outcome {other:?}"),
            }
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
