use anyhow::{Context, Result};
use image::GrayImage;
use regen_config::ocr::OcrConfig;
use regen_core::TextRecognizer;
use tesseract::Tesseract;

/// Tesseract with a character whitelist, one engine instance per call
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    language: String,
    datapath: Option<String>,
    page_seg_mode: u8,
}

impl TesseractRecognizer {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            datapath: None,
            page_seg_mode: 6,
        }
    }

    pub fn from_config(config: &OcrConfig) -> Self {
        Self {
            language: config.language.clone(),
            datapath: config.tessdata_path.clone(),
            page_seg_mode: config.page_seg_mode,
        }
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, image: &GrayImage, whitelist: &str) -> Result<String> {
        let (width, height) = image.dimensions();

        let mut engine = Tesseract::new(self.datapath.as_deref(), Some(self.language.as_str()))
            .context("Failed to initialize tesseract")?
            .set_variable("tessedit_char_whitelist", whitelist)
            .context("Failed to set character whitelist")?
            .set_variable("tessedit_pageseg_mode", &self.page_seg_mode.to_string())
            .context("Failed to set page segmentation mode")?
            .set_frame(
                image.as_raw(),
                width as i32,
                height as i32,
                1,
                width as i32,
            )
            .context("Failed to hand frame to tesseract")?
            .recognize()
            .context("Recognition failed")?;

        engine.get_text().context("Failed to read recognized text")
    }
}
