pub mod capability;
pub mod clock;
pub mod error;
pub mod extract;
pub mod locate;
pub mod mapper;
pub mod matcher;
pub mod pipeline;
pub mod sampler;
pub mod tracker;

pub use capability::{FrameCapturer, Notifier, TextRecognizer, WindowSource};
pub use clock::{Clock, ManualClock, TokioClock};
pub use error::{CalibrationError, SyncError};
pub use extract::TextExtractor;
pub use locate::locate_window;
pub use mapper::RegionMapper;
pub use matcher::{CounterMatch, PatternMatcher};
pub use pipeline::OpticalSync;
pub use sampler::{FailureCounts, SampleReport, Sampler, SyncSource};
pub use tracker::{Tick, Tracker, TrackerState};
