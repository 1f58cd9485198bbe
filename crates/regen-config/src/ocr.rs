use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "eng".to_string()
}

fn default_whitelist() -> String {
    "0123456789/:()".to_string()
}

fn default_page_seg_mode() -> u8 {
    6
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct OcrConfig {
    #[serde(default = "default_language")]
    pub language: String,
    /// Characters the recognizer is allowed to emit
    #[serde(default = "default_whitelist")]
    pub whitelist: String,
    #[serde(default = "default_page_seg_mode")]
    pub page_seg_mode: u8,
    pub tessdata_path: Option<String>,
    /// Grayscale frames are dumped here as PNG when set
    pub debug_capture_dir: Option<String>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            whitelist: default_whitelist(),
            page_seg_mode: default_page_seg_mode(),
            tessdata_path: None,
            debug_capture_dir: None,
        }
    }
}
