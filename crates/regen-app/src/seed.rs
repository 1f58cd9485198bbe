use std::io::{BufRead, Write};

use anyhow::Context;
use regen_core::{Sampler, SyncSource};
use regen_types::{Reading, ReadingSource};

use crate::state::AppState;

/// Blocking operator prompt used when optical sync comes back empty
pub type ManualSeed = Box<dyn FnOnce() -> anyhow::Result<Reading> + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    pub reading: Reading,
    pub source: ReadingSource,
}

/// Optical estimate if the sampler finds one, otherwise the manual prompt
pub async fn acquire_seed<S>(state: &AppState, source: &S, manual: ManualSeed) -> anyhow::Result<Seed>
where
    S: SyncSource + ?Sized,
{
    let sampler = Sampler::from_config(&state.config.sampler);
    let report = sampler.sample(source, state.clock.as_ref()).await;

    if let Some(reading) = report.best {
        return Ok(Seed {
            reading,
            source: ReadingSource::Optical,
        });
    }

    tracing::warn!("Auto-sync failed, falling back to manual input");
    let reading = tokio::task::spawn_blocking(manual)
        .await
        .context("Manual input task failed")??;

    Ok(Seed {
        reading,
        source: ReadingSource::Manual,
    })
}

/// Ask for max then current charges; the countdown is assumed
pub fn prompt_manual_seed<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    regen_seconds: u32,
) -> anyhow::Result<Reading> {
    let max = prompt_number(&mut input, &mut output, "Enter max charges: ", 1)?;
    let current = prompt_number(&mut input, &mut output, "Enter current charges: ", 0)?;

    if current > max {
        tracing::warn!("Current charges {current} exceed max {max}, clamping");
    }

    Ok(Reading {
        current: current.min(max),
        max,
        regen_seconds,
    })
}

fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    min: u32,
) -> anyhow::Result<u32> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("Input closed before a value was entered");
        }

        match line.trim().parse::<u32>() {
            Ok(value) if value >= min => return Ok(value),
            _ => writeln!(output, "Please enter a whole number of at least {min}")?,
        }
    }
}
