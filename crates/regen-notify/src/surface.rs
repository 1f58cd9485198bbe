use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastFrame {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Where toasts are drawn. Calls for an id that is already gone must error,
/// never panic.
pub trait ToastSurface: Send + Sync + 'static {
    fn open(&self, id: Uuid, message: &str, frame: ToastFrame) -> anyhow::Result<()>;
    fn move_to(&self, id: Uuid, frame: ToastFrame) -> anyhow::Result<()>;
    fn close(&self, id: Uuid) -> anyhow::Result<()>;
}

/// Renders toasts as log lines
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSurface;

impl ToastSurface for LogSurface {
    fn open(&self, id: Uuid, message: &str, frame: ToastFrame) -> anyhow::Result<()> {
        tracing::info!(toast = %id, "{}", message);
        tracing::trace!(toast = %id, "opened at {:?}", frame);
        Ok(())
    }

    fn move_to(&self, id: Uuid, frame: ToastFrame) -> anyhow::Result<()> {
        tracing::trace!(toast = %id, "moved to ({}, {})", frame.x, frame.y);
        Ok(())
    }

    fn close(&self, id: Uuid) -> anyhow::Result<()> {
        tracing::debug!(toast = %id, "closed");
        Ok(())
    }
}
