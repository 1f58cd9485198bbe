use serde::{Deserialize, Serialize};

fn default_budget_ms() -> u64 {
    3000
}

fn default_interval_ms() -> u64 {
    200
}

/// How repeated readings are reduced to one estimate
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConsensusPolicy {
    /// Reading with the smallest countdown wins
    #[default]
    MinTimer,
    /// Most frequent (current, max) pair, smallest countdown breaks ties
    Majority,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SamplerConfig {
    /// Total time spent sampling before giving up
    #[serde(default = "default_budget_ms")]
    pub budget_ms: u64,
    /// Pause between attempts
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    pub policy: ConsensusPolicy,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            budget_ms: default_budget_ms(),
            interval_ms: default_interval_ms(),
            policy: ConsensusPolicy::default(),
        }
    }
}
