use std::time::Duration;

use image::{GrayImage, RgbaImage};
use regen_types::{CaptureRegion, WindowInfo};

/// Enumerates open top-level windows
pub trait WindowSource: Send + Sync {
    fn list_windows(&self) -> anyhow::Result<Vec<WindowInfo>>;
}

/// Grabs pixels for an arbitrary screen rectangle
pub trait FrameCapturer: Send + Sync {
    fn capture(&self, region: CaptureRegion) -> anyhow::Result<RgbaImage>;
}

/// OCR engine restricted to a character whitelist.
///
/// Empty or garbled text is a normal result, not an error.
pub trait TextRecognizer: Send + Sync {
    fn recognize(&self, image: &GrayImage, whitelist: &str) -> anyhow::Result<String>;
}

/// Fire-and-forget transient messages
pub trait Notifier: Send + Sync {
    fn show(&self, message: &str, duration: Duration);
}
