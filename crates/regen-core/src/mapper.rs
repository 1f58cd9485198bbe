//! Maps the calibrated counter rectangle into the current window.
//!
//! Each axis is scaled independently by `current / reference` window size and
//! the counter's offset from the window origin is scaled by the same factor.
//! Rounding happens once, at the very end. This assumes the counter scales
//! linearly with the window, which does not hold for fixed-size UI chrome.

use regen_types::{Calibration, CaptureRegion, WindowGeometry};

use crate::error::CalibrationError;

#[derive(Debug, Clone)]
pub struct RegionMapper {
    calibration: Calibration,
}

impl RegionMapper {
    pub fn new(calibration: Calibration) -> Result<Self, CalibrationError> {
        let window = calibration.reference_window;
        if window.width == 0 || window.height == 0 {
            return Err(CalibrationError::EmptyReferenceWindow {
                width: window.width,
                height: window.height,
            });
        }

        let rect = calibration.reference_rect;
        if rect.width() <= 0 || rect.height() <= 0 {
            return Err(CalibrationError::EmptyReferenceRect {
                width: rect.width(),
                height: rect.height(),
            });
        }

        Ok(Self { calibration })
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Capture rectangle for the window as it is right now
    pub fn map(&self, window: &WindowGeometry) -> CaptureRegion {
        let reference = &self.calibration.reference_window;
        let rect = &self.calibration.reference_rect;

        let scale_x = f64::from(window.width) / f64::from(reference.width);
        let scale_y = f64::from(window.height) / f64::from(reference.height);

        let relative_left = f64::from(rect.left) - f64::from(reference.left);
        let relative_top = f64::from(rect.top) - f64::from(reference.top);

        let scaled_left = relative_left * scale_x;
        let scaled_top = relative_top * scale_y;
        let scaled_width = rect.width() as f64 * scale_x;
        let scaled_height = rect.height() as f64 * scale_y;

        let region = CaptureRegion {
            x: (f64::from(window.left) + scaled_left) as i32,
            y: (f64::from(window.top) + scaled_top) as i32,
            width: scaled_width as u32,
            height: scaled_height as u32,
        };

        tracing::debug!(
            "Window {}x{} at ({}, {}), scale {:.3}x{:.3}, offset ({}, {}) -> ({:.1}, {:.1}), region {:?}",
            window.width,
            window.height,
            window.left,
            window.top,
            scale_x,
            scale_y,
            relative_left,
            relative_top,
            scaled_left,
            scaled_top,
            region
        );

        region
    }
}

#[cfg(test)]
mod tests {
    use regen_types::ScreenRect;

    use super::*;

    fn calibration() -> Calibration {
        Calibration {
            reference_window: WindowGeometry {
                left: 1912,
                top: -8,
                width: 1936,
                height: 1048,
            },
            reference_rect: ScreenRect {
                left: 2881,
                top: 978,
                right: 2977,
                bottom: 1002,
            },
        }
    }

    fn assert_close(actual: i64, expected: f64) {
        assert!(
            (actual as f64 - expected).abs() <= 1.0,
            "expected ~{expected}, got {actual}"
        );
    }

    #[test]
    fn reference_window_maps_to_reference_rect() {
        let mapper = RegionMapper::new(calibration()).unwrap();
        let region = mapper.map(&calibration().reference_window);
        assert_eq!(
            region,
            CaptureRegion {
                x: 2881,
                y: 978,
                width: 96,
                height: 24,
            }
        );
    }

    #[test]
    fn moving_the_window_translates_the_region() {
        let mapper = RegionMapper::new(calibration()).unwrap();
        let moved = WindowGeometry {
            left: 0,
            top: 0,
            ..calibration().reference_window
        };
        let region = mapper.map(&moved);
        assert_eq!((region.x, region.y), (2881 - 1912, 978 + 8));
        assert_eq!((region.width, region.height), (96, 24));
    }

    #[test]
    fn uniform_scaling_scales_size_and_offset() {
        let mapper = RegionMapper::new(calibration()).unwrap();
        let reference = calibration().reference_window;

        for k in [0.5_f64, 0.75, 1.25, 2.0] {
            let window = WindowGeometry {
                left: 100,
                top: 50,
                width: (f64::from(reference.width) * k) as u32,
                height: (f64::from(reference.height) * k) as u32,
            };
            let region = mapper.map(&window);

            assert_close(i64::from(region.width), 96.0 * k);
            assert_close(i64::from(region.height), 24.0 * k);
            assert_close(i64::from(region.x - window.left), 969.0 * k);
            assert_close(i64::from(region.y - window.top), 986.0 * k);
        }
    }

    #[test]
    fn axes_scale_independently() {
        let mapper = RegionMapper::new(calibration()).unwrap();
        let window = WindowGeometry {
            left: 0,
            top: 0,
            width: 1936,
            height: 524,
        };
        let region = mapper.map(&window);
        assert_eq!(region.width, 96);
        assert_eq!(region.height, 12);
        assert_eq!(region.x, 969);
        assert_eq!(region.y, 493);
    }

    #[test]
    fn degenerate_calibration_is_rejected() {
        let mut empty_window = calibration();
        empty_window.reference_window.width = 0;
        assert!(matches!(
            RegionMapper::new(empty_window),
            Err(CalibrationError::EmptyReferenceWindow { .. })
        ));

        let mut inverted_rect = calibration();
        inverted_rect.reference_rect.right = inverted_rect.reference_rect.left;
        assert!(matches!(
            RegionMapper::new(inverted_rect),
            Err(CalibrationError::EmptyReferenceRect { .. })
        ));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let mut wide = calibration();
        wide.reference_window.left = i32::MAX;
        wide.reference_rect.left = i32::MIN;
        wide.reference_rect.right = i32::MAX;
        let mapper = RegionMapper::new(wide.clone()).unwrap();
        let region = mapper.map(&wide.reference_window);
        assert_eq!(region.width, u32::MAX);
        assert_eq!(region.x, i32::MIN);

        let mut inverted = calibration();
        inverted.reference_rect.left = i32::MAX;
        inverted.reference_rect.right = i32::MIN;
        assert!(matches!(
            RegionMapper::new(inverted),
            Err(CalibrationError::EmptyReferenceRect { width, .. }) if width == -i64::from(u32::MAX)
        ));
    }
}
