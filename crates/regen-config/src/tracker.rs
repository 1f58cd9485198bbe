use serde::{Deserialize, Serialize};

fn default_regen_interval_secs() -> u64 {
    30
}

fn default_idle_interval_secs() -> u64 {
    10
}

fn default_manual_regen_secs() -> u32 {
    30
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TrackerConfig {
    /// Time for one charge to regenerate
    #[serde(default = "default_regen_interval_secs")]
    pub regen_interval_secs: u64,
    /// Re-check cadence once charges are full
    #[serde(default = "default_idle_interval_secs")]
    pub idle_interval_secs: u64,
    /// Countdown assumed when the seed has no usable timer
    #[serde(default = "default_manual_regen_secs")]
    pub manual_regen_secs: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            regen_interval_secs: default_regen_interval_secs(),
            idle_interval_secs: default_idle_interval_secs(),
            manual_regen_secs: default_manual_regen_secs(),
        }
    }
}
