//! One-shot check of the capture pipeline - run with: cargo run -p regen-ocr --bin probe

use anyhow::Result;
use regen_config::Config;
use regen_core::{RegionMapper, locate_window};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let config = Config::new();

    // 1. List available windows
    tracing::info!("Available windows:");
    let windows = regen_ocr::list_windows()?;
    for (i, window) in windows.iter().enumerate().take(10) {
        tracing::info!("   [{}] {} {:?}", i, window.title, window.geometry);
    }

    // 2. Locate target and map the calibrated region
    let mapper = RegionMapper::new(config.calibration)?;
    let window = locate_window(&regen_ocr::XcapWindows, &config.window_title)?;
    let region = mapper.map(&window);
    tracing::info!("Target window {:?} -> capture region {:?}", window, region);

    // 3. Run the full chain once
    let sync = regen_ocr::desktop_sync(&config)?;
    let start = std::time::Instant::now();
    match sync.attempt_blocking() {
        Ok(reading) => tracing::info!(
            "Parsed {}/{}, next in {}s ({:?})",
            reading.current,
            reading.max,
            reading.regen_seconds,
            start.elapsed()
        ),
        Err(e) => tracing::warn!("Sync attempt failed: {} ({:?})", e, start.elapsed()),
    }

    Ok(())
}
