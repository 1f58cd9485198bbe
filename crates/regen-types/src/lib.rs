pub mod types;

pub use types::{
    Calibration, CaptureRegion, Reading, ReadingSource, ScreenRect, WindowGeometry, WindowInfo,
};
