/// Reasons a single sync attempt produced no reading.
///
/// None of these are fatal: the sampler counts them and moves on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("no window title contains '{0}'")]
    WindowNotFound(String),

    #[error("capture failed: {0}")]
    CaptureFailure(String),

    #[error("text recognition failed: {0}")]
    RecognitionFailure(String),

    #[error("no pattern matched OCR text {0:?}")]
    NoPatternMatch(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalibrationError {
    #[error("reference window has zero area ({width}x{height})")]
    EmptyReferenceWindow { width: u32, height: u32 },

    #[error("reference rectangle has no area ({width}x{height})")]
    EmptyReferenceRect { width: i64, height: i64 },
}
