use std::sync::Arc;

use async_trait::async_trait;
use regen_types::Reading;

use crate::capability::{FrameCapturer, TextRecognizer, WindowSource};
use crate::error::SyncError;
use crate::extract::TextExtractor;
use crate::locate::locate_window;
use crate::mapper::RegionMapper;
use crate::matcher::PatternMatcher;
use crate::sampler::SyncSource;

/// One pass of locate -> map -> capture -> OCR -> match
pub struct OpticalSync<W, C, R> {
    windows: W,
    capturer: C,
    extractor: TextExtractor<R>,
    mapper: RegionMapper,
    matcher: PatternMatcher,
    window_title: String,
}

impl<W, C, R> OpticalSync<W, C, R>
where
    W: WindowSource,
    C: FrameCapturer,
    R: TextRecognizer,
{
    pub fn new(
        windows: W,
        capturer: C,
        extractor: TextExtractor<R>,
        mapper: RegionMapper,
        matcher: PatternMatcher,
        window_title: impl Into<String>,
    ) -> Self {
        Self {
            windows,
            capturer,
            extractor,
            mapper,
            matcher,
            window_title: window_title.into(),
        }
    }

    /// Blocking; every failure is soft
    pub fn attempt_blocking(&self) -> Result<Reading, SyncError> {
        let window = locate_window(&self.windows, &self.window_title)?;
        let region = self.mapper.map(&window);

        let frame = self
            .capturer
            .capture(region)
            .map_err(|e| SyncError::CaptureFailure(format!("{e:#}")))?;

        let text = self.extractor.extract(&frame)?;
        let text = text.trim();
        tracing::debug!("OCR text: '{}'", text);

        self.matcher
            .find(text)
            .map(|found| found.reading())
            .ok_or_else(|| SyncError::NoPatternMatch(text.to_string()))
    }
}

#[async_trait]
impl<W, C, R> SyncSource for Arc<OpticalSync<W, C, R>>
where
    W: WindowSource + 'static,
    C: FrameCapturer + 'static,
    R: TextRecognizer + 'static,
{
    async fn attempt(&self) -> Result<Reading, SyncError> {
        let sync = Arc::clone(self);
        match tokio::task::spawn_blocking(move || sync.attempt_blocking()).await {
            Ok(result) => result,
            Err(e) => Err(SyncError::CaptureFailure(format!("sync task failed: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use image::{GrayImage, RgbaImage};
    use regen_types::{Calibration, CaptureRegion, ScreenRect, WindowGeometry, WindowInfo};
    use std::sync::Mutex;

    use super::*;

    struct OneWindow(Option<WindowGeometry>);

    impl WindowSource for OneWindow {
        fn list_windows(&self) -> anyhow::Result<Vec<WindowInfo>> {
            Ok(self
                .0
                .iter()
                .map(|geometry| WindowInfo {
                    title: "Wplace - Browser".to_string(),
                    geometry: *geometry,
                })
                .collect())
        }
    }

    #[derive(Default)]
    struct RecordingCapturer {
        regions: Mutex<Vec<CaptureRegion>>,
        fail: bool,
    }

    impl FrameCapturer for RecordingCapturer {
        fn capture(&self, region: CaptureRegion) -> anyhow::Result<RgbaImage> {
            self.regions.lock().unwrap().push(region);
            if self.fail {
                anyhow::bail!("region off-screen");
            }
            Ok(RgbaImage::new(region.width, region.height))
        }
    }

    struct FixedText(&'static str);

    impl TextRecognizer for FixedText {
        fn recognize(&self, _: &GrayImage, _: &str) -> anyhow::Result<String> {
            Ok(self.0.to_string())
        }
    }

    fn calibration() -> Calibration {
        Calibration {
            reference_window: WindowGeometry {
                left: 0,
                top: 0,
                width: 1000,
                height: 500,
            },
            reference_rect: ScreenRect {
                left: 800,
                top: 450,
                right: 900,
                bottom: 475,
            },
        }
    }

    fn sync(
        window: Option<WindowGeometry>,
        capturer: RecordingCapturer,
        text: &'static str,
    ) -> OpticalSync<OneWindow, RecordingCapturer, FixedText> {
        OpticalSync::new(
            OneWindow(window),
            capturer,
            TextExtractor::new(FixedText(text), "0123456789/:()"),
            RegionMapper::new(calibration()).unwrap(),
            PatternMatcher::new().unwrap(),
            "Wplace",
        )
    }

    #[test]
    fn full_chain_produces_reading_from_mapped_region() {
        let window = WindowGeometry {
            left: 10,
            top: 20,
            width: 500,
            height: 250,
        };
        let sync = sync(Some(window), RecordingCapturer::default(), " 7/10 (01:23)\n");

        let reading = sync.attempt_blocking().unwrap();
        assert_eq!(
            reading,
            Reading {
                current: 7,
                max: 10,
                regen_seconds: 83,
            }
        );

        let regions = sync.capturer.regions.lock().unwrap();
        assert_eq!(
            regions.as_slice(),
            &[CaptureRegion {
                x: 410,
                y: 245,
                width: 50,
                height: 12,
            }]
        );
    }

    #[test]
    fn missing_window_short_circuits_before_capture() {
        let sync = sync(None, RecordingCapturer::default(), "7/10 (01:23)");
        assert!(matches!(
            sync.attempt_blocking(),
            Err(SyncError::WindowNotFound(_))
        ));
        assert!(sync.capturer.regions.lock().unwrap().is_empty());
    }

    #[test]
    fn capture_and_match_failures_are_typed() {
        let window = calibration().reference_window;

        let failing = RecordingCapturer {
            fail: true,
            ..Default::default()
        };
        assert!(matches!(
            sync(Some(window), failing, "7/10 (01:23)").attempt_blocking(),
            Err(SyncError::CaptureFailure(_))
        ));

        assert_eq!(
            sync(Some(window), RecordingCapturer::default(), "7/1O").attempt_blocking(),
            Err(SyncError::NoPatternMatch("7/1O".to_string()))
        );
    }

    #[tokio::test]
    async fn async_attempt_runs_on_blocking_pool() {
        let window = calibration().reference_window;
        let sync = Arc::new(sync(Some(window), RecordingCapturer::default(), "3/5 (00:09)"));
        let reading = sync.attempt().await.unwrap();
        assert_eq!(reading.regen_seconds, 9);
    }
}
