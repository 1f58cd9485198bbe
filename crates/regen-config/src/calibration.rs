use regen_types::{Calibration, ScreenRect, WindowGeometry};

/// Measured on a maximized window on the second monitor
pub fn default_calibration() -> Calibration {
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
