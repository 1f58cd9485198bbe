mod capture;
mod ocr;

pub use capture::{XcapCapturer, XcapWindows, list_windows, primary_screen_width};
pub use ocr::TesseractRecognizer;

use regen_config::Config;
use regen_core::{OpticalSync, PatternMatcher, RegionMapper, TextExtractor};

pub type DesktopSync = OpticalSync<XcapWindows, XcapCapturer, TesseractRecognizer>;

/// Wire the desktop backends into one sync pipeline
pub fn desktop_sync(config: &Config) -> anyhow::Result<DesktopSync> {
    let mut extractor = TextExtractor::new(
        TesseractRecognizer::from_config(&config.ocr),
        config.ocr.whitelist.clone(),
    );
    if let Some(dir) = &config.ocr.debug_capture_dir {
        extractor = extractor.with_debug_dir(dir);
    }

    Ok(OpticalSync::new(
        XcapWindows,
        XcapCapturer,
        extractor,
        RegionMapper::new(config.calibration)?,
        PatternMatcher::new()?,
        config.window_title.clone(),
    ))
}
