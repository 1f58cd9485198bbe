//! Repeated sync attempts under a time budget, reduced to one estimate.
//!
//! A single OCR read is not trusted. The sampler keeps attempting at a fixed
//! interval until the budget is spent and then picks one reading from the
//! successes. The default policy takes the smallest countdown, assuming it is
//! the freshest read near a regeneration boundary. That is a heuristic only.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use regen_config::{ConsensusPolicy, sampler::SamplerConfig};
use regen_types::Reading;

use crate::clock::Clock;
use crate::error::SyncError;

/// Anything that can attempt one reading
#[async_trait]
pub trait SyncSource: Send + Sync {
    async fn attempt(&self) -> Result<Reading, SyncError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailureCounts {
    pub window_not_found: u32,
    pub capture: u32,
    pub recognition: u32,
    pub no_match: u32,
}

impl FailureCounts {
    fn record(&mut self, error: &SyncError) {
        match error {
            SyncError::WindowNotFound(_) => self.window_not_found += 1,
            SyncError::CaptureFailure(_) => self.capture += 1,
            SyncError::RecognitionFailure(_) => self.recognition += 1,
            SyncError::NoPatternMatch(_) => self.no_match += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.window_not_found + self.capture + self.recognition + self.no_match
    }
}

#[derive(Debug, Clone, Default)]
pub struct SampleReport {
    /// `None` when no attempt produced a reading
    pub best: Option<Reading>,
    pub attempts: u32,
    pub readings: Vec<Reading>,
    pub failures: FailureCounts,
}

pub struct Sampler {
    budget: Duration,
    interval: Duration,
    policy: ConsensusPolicy,
}

impl Sampler {
    pub fn new(budget: Duration, interval: Duration, policy: ConsensusPolicy) -> Self {
        Self {
            budget,
            // a zero interval would never let a logical clock advance
            interval: interval.max(Duration::from_millis(1)),
            policy,
        }
    }

    pub fn from_config(config: &SamplerConfig) -> Self {
        Self::new(
            Duration::from_millis(config.budget_ms),
            Duration::from_millis(config.interval_ms),
            config.policy,
        )
    }

    pub async fn sample<S>(&self, source: &S, clock: &dyn Clock) -> SampleReport
    where
        S: SyncSource + ?Sized,
    {
        tracing::info!(
            "Starting sync: budget {:?}, interval {:?}, policy {:?}",
            self.budget,
            self.interval,
            self.policy
        );

        let start = clock.now();
        let mut report = SampleReport::default();

        while clock.now().saturating_sub(start) < self.budget {
            report.attempts += 1;

            match source.attempt().await {
                Ok(reading) => {
                    tracing::debug!(
                        "Sync attempt {}: {}/{}, next in {}s",
                        report.attempts,
                        reading.current,
                        reading.max,
                        reading.regen_seconds
                    );
                    report.readings.push(reading);
                }
                Err(e) => {
                    tracing::debug!("Sync attempt {} failed: {}", report.attempts, e);
                    report.failures.record(&e);
                }
            }

            clock.sleep(self.interval).await;
        }

        report.best = reduce(self.policy, &report.readings);

        match report.best {
            Some(best) => tracing::info!(
                "Sync succeeded: {}/{}, next in {}s ({} of {} attempts read)",
                best.current,
                best.max,
                best.regen_seconds,
                report.readings.len(),
                report.attempts
            ),
            None => tracing::warn!(
                "Sync failed after {} attempts: {:?}",
                report.attempts,
                report.failures
            ),
        }

        report
    }
}

pub fn reduce(policy: ConsensusPolicy, readings: &[Reading]) -> Option<Reading> {
    match policy {
        ConsensusPolicy::MinTimer => min_timer(readings),
        ConsensusPolicy::Majority => majority(readings),
    }
}

/// Smallest countdown; the earliest reading wins ties
pub fn min_timer(readings: &[Reading]) -> Option<Reading> {
    readings.iter().min_by_key(|r| r.regen_seconds).copied()
}

/// Most frequent `(current, max)`; ties go to the smaller countdown, then to
/// the pair seen first
pub fn majority(readings: &[Reading]) -> Option<Reading> {
    // (count, smallest timer, first index) per pair
    let mut tally: HashMap<(u32, u32), (usize, u32, usize)> = HashMap::new();

    for (index, reading) in readings.iter().enumerate() {
        let entry = tally
            .entry((reading.current, reading.max))
            .or_insert((0, reading.regen_seconds, index));
        entry.0 += 1;
        entry.1 = entry.1.min(reading.regen_seconds);
    }

    tally
        .into_iter()
        .min_by(|(_, a), (_, b)| {
            b.0.cmp(&a.0)
                .then(a.1.cmp(&b.1))
                .then(a.2.cmp(&b.2))
        })
        .map(|((current, max), (_, regen_seconds, _))| Reading {
            current,
            max,
            regen_seconds,
        })
}
