use std::env;

use regen_types::Calibration;
use serde::{Deserialize, Serialize};

use self::calibration::default_calibration;
use self::notifier::NotifierConfig;
use self::ocr::OcrConfig;
use self::sampler::SamplerConfig;
use self::tracker::TrackerConfig;

pub mod calibration;
pub mod notifier;
pub mod ocr;
pub mod sampler;
pub mod tracker;

pub use sampler::ConsensusPolicy;

fn default_window_title() -> String {
    "Wplace".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    /// Substring matched against top-level window titles
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_calibration")]
    pub calibration: Calibration,
    pub ocr: OcrConfig,
    pub sampler: SamplerConfig,
    pub tracker: TrackerConfig,
    pub notifier: NotifierConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            calibration: default_calibration(),
            ocr: OcrConfig::default(),
            sampler: SamplerConfig::default(),
            tracker: TrackerConfig::default(),
            notifier: NotifierConfig::default(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overlay environment variables on top of whatever was loaded
    pub fn apply_env(&mut self) {
        if let Ok(title) = env::var("WINDOW_TITLE") {
            self.window_title = title;
        }

        if let Some(budget_ms) = env_parse("SAMPLE_BUDGET_MS") {
            self.sampler.budget_ms = budget_ms;
        }

        if let Some(interval_ms) = env_parse("SAMPLE_INTERVAL_MS") {
            self.sampler.interval_ms = interval_ms;
        }

        if let Some(secs) = env_parse("REGEN_INTERVAL_SECS") {
            self.tracker.regen_interval_secs = secs;
        }

        if let Ok(path) = env::var("TESSDATA_PATH") {
            self.ocr.tessdata_path = Some(path);
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
