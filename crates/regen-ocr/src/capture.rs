use anyhow::{Context, Result};
use image::RgbaImage;
use regen_core::{FrameCapturer, WindowSource};
use regen_types::{CaptureRegion, WindowGeometry, WindowInfo};
use xcap::{Monitor, Window};

/// Visible, titled top-level windows
pub fn list_windows() -> Result<Vec<WindowInfo>> {
    let windows = Window::all().context("Failed to enumerate windows")?;
    Ok(windows
        .into_iter()
        .filter(|w| !w.title().is_empty() && !w.is_minimized())
        .map(|w| WindowInfo {
            title: w.title().to_string(),
            geometry: WindowGeometry {
                left: w.x(),
                top: w.y(),
                width: w.width(),
                height: w.height(),
            },
        })
        .collect())
}

/// Width of the primary monitor, used to place toasts
pub fn primary_screen_width() -> Result<u32> {
    let monitors = Monitor::all().context("Failed to get monitors")?;
    let monitor = monitors
        .iter()
        .find(|m| m.is_primary())
        .or(monitors.first())
        .context("No monitor found")?;
    Ok(monitor.width())
}

/// Crop of the monitor that fully contains `region`
pub fn capture_screen_region(region: CaptureRegion) -> Result<RgbaImage> {
    if region.width == 0 || region.height == 0 {
        anyhow::bail!("Empty capture region {:?}", region);
    }

    let monitors = Monitor::all().context("Failed to get monitors")?;

    let monitor = monitors
        .iter()
        .find(|m| {
            region.x >= m.x()
                && region.y >= m.y()
                && i64::from(region.x) + i64::from(region.width)
                    <= i64::from(m.x()) + i64::from(m.width())
                && i64::from(region.y) + i64::from(region.height)
                    <= i64::from(m.y()) + i64::from(m.height())
        })
        .with_context(|| format!("Region {:?} is not inside any monitor", region))?;

    let image = monitor.capture_image().context("Failed to capture screen")?;

    let cropped = xcap::image::imageops::crop_imm(
        &image,
        (region.x - monitor.x()) as u32,
        (region.y - monitor.y()) as u32,
        region.width,
        region.height,
    )
    .to_image();

    Ok(cropped)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct XcapWindows;

impl WindowSource for XcapWindows {
    fn list_windows(&self) -> Result<Vec<WindowInfo>> {
        list_windows()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct XcapCapturer;

impl FrameCapturer for XcapCapturer {
    fn capture(&self, region: CaptureRegion) -> Result<RgbaImage> {
        capture_screen_region(region)
    }
}
