//! Charge regeneration simulator.
//!
//! Seeded once from a reading, then self-driven: every regen interval one
//! charge is added and the tens milestone it lands on is announced the first
//! time it is reached. Once full it idles and re-checks on a shorter cadence.
//! Milestones are never re-armed.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use regen_config::tracker::TrackerConfig;
use regen_types::Reading;
use tokio_util::sync::CancellationToken;

use crate::capability::Notifier;
use crate::clock::Clock;

pub const FULL_MILESTONE: u32 = 100;

pub fn milestone_message(milestone: u32, current: u32, max: u32) -> String {
    format!("Charges {milestone}% full ({current}/{max})")
}

/// Outcome of one state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Charged {
        current: u32,
        max: u32,
        percent: u32,
        /// Set only when this tick fired a new milestone
        milestone: Option<u32>,
    },
    Full {
        current: u32,
        max: u32,
        milestone: Option<u32>,
    },
}

impl Tick {
    pub fn milestone(&self) -> Option<u32> {
        match self {
            Tick::Charged { milestone, .. } | Tick::Full { milestone, .. } => *milestone,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerState {
    current: u32,
    max: u32,
    notified: BTreeSet<u32>,
}

impl TrackerState {
    pub fn new(current: u32, max: u32) -> Self {
        Self {
            current,
            max,
            notified: BTreeSet::new(),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn notified(&self) -> &BTreeSet<u32> {
        &self.notified
    }

    pub fn tick(&mut self) -> Tick {
        if self.current < self.max {
            self.current += 1;
            let percent = (u64::from(self.current) * 100 / u64::from(self.max)) as u32;
            let milestone = percent / 10 * 10;

            Tick::Charged {
                current: self.current,
                max: self.max,
                percent,
                milestone: self.notified.insert(milestone).then_some(milestone),
            }
        } else {
            Tick::Full {
                current: self.current,
                max: self.max,
                milestone: self
                    .notified
                    .insert(FULL_MILESTONE)
                    .then_some(FULL_MILESTONE),
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Schedule {
    /// Time for one charge once the first observed countdown has elapsed
    pub regen_interval: Duration,
    pub idle_interval: Duration,
    /// Used instead of a zero observed countdown
    pub fallback_first_wait: Duration,
}

impl From<&TrackerConfig> for Schedule {
    fn from(config: &TrackerConfig) -> Self {
        Self {
            regen_interval: Duration::from_secs(config.regen_interval_secs),
            idle_interval: Duration::from_secs(config.idle_interval_secs),
            fallback_first_wait: Duration::from_secs(u64::from(config.manual_regen_secs)),
        }
    }
}

pub struct Tracker {
    state: TrackerState,
    schedule: Schedule,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    toast_duration: Duration,
    next_deadline: Duration,
}

impl Tracker {
    /// The first increment lines up with the observed countdown; every later
    /// one uses the fixed regen interval
    pub fn seed(
        reading: Reading,
        schedule: Schedule,
        clock: Arc<dyn Clock>,
        notifier: Arc<dyn Notifier>,
        toast_duration: Duration,
    ) -> Self {
        let first_wait = match reading.regen_seconds {
            0 => schedule.fallback_first_wait,
            secs => Duration::from_secs(u64::from(secs)),
        };

        tracing::info!(
            "Starting tracker with {}/{} charges, waiting {:?}",
            reading.current,
            reading.max,
            first_wait
        );

        Self {
            state: TrackerState::new(reading.current, reading.max),
            next_deadline: clock.now() + first_wait,
            schedule,
            clock,
            notifier,
            toast_duration,
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    /// Clock time at which the next tick fires
    pub fn next_deadline(&self) -> Duration {
        self.next_deadline
    }

    /// Wait for the next deadline, then apply one transition
    pub async fn step(&mut self) -> Tick {
        self.clock.sleep_until(self.next_deadline).await;

        let tick = self.state.tick();
        let wait = match tick {
            Tick::Charged {
                current,
                max,
                percent,
                ..
            } => {
                tracing::info!("Current charges: {current}/{max} ({percent}%)");
                self.schedule.regen_interval
            }
            Tick::Full { current, max, .. } => {
                tracing::debug!("Charges full: {current}/{max}");
                self.schedule.idle_interval
            }
        };

        if let Some(milestone) = tick.milestone() {
            let message = milestone_message(milestone, self.state.current, self.state.max);
            tracing::debug!("Milestone {milestone}%");
            self.notifier.show(&message, self.toast_duration);
        }

        self.next_deadline += wait;
        tick
    }

    /// Runs until `cancel` fires
    pub async fn run(mut self, cancel: CancellationToken) {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Tracker stopping at {}/{}", self.state.current, self.state.max);
                    break;
                }
                _ = self.step() => {}
            }
        }
    }
}
