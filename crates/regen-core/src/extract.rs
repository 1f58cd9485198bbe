use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::{GrayImage, RgbaImage};

use crate::capability::TextRecognizer;
use crate::error::SyncError;

/// Grayscale conversion followed by whitelisted OCR
pub struct TextExtractor<R> {
    recognizer: R,
    whitelist: String,
    debug_dir: Option<PathBuf>,
}

impl<R: TextRecognizer> TextExtractor<R> {
    pub fn new(recognizer: R, whitelist: impl Into<String>) -> Self {
        Self {
            recognizer,
            whitelist: whitelist.into(),
            debug_dir: None,
        }
    }

    /// Dump every grayscale frame into `dir` before recognition
    pub fn with_debug_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.debug_dir = Some(dir.into());
        self
    }

    pub fn extract(&self, frame: &RgbaImage) -> Result<String, SyncError> {
        let gray = image::imageops::grayscale(frame);

        if let Some(dir) = &self.debug_dir {
            self.dump(dir, &gray);
        }

        self.recognizer
            .recognize(&gray, &self.whitelist)
            .map_err(|e| SyncError::RecognitionFailure(format!("{e:#}")))
    }

    fn dump(&self, dir: &Path, gray: &GrayImage) {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let path = dir.join(format!("capture-{stamp}.png"));

        if let Err(e) = gray.save(&path) {
            tracing::warn!("Failed to write debug capture {}: {}", path.display(), e);
        } else {
            tracing::debug!("Saved debug capture to {}", path.display());
        }
    }
}
