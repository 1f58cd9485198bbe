use std::env;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use regen_config::Config;
use regen_notify::{LogSurface, ToastLayout, ToastNotifier};
use tokio::runtime::Handle;
use tracing_subscriber::EnvFilter;

mod controller;
mod profile;
mod seed;
mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = profile::load_config()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build runtime")?;

    let result = runtime.block_on(run(config));

    // a pending manual prompt holds a blocking thread on stdin
    runtime.shutdown_timeout(Duration::from_secs(1));
    result
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if env::var("LOG_FORMAT").is_ok_and(|v| v == "json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let screen_width = match regen_ocr::primary_screen_width() {
        Ok(width) => Some(width),
        Err(e) => {
            tracing::warn!("Could not query screen width: {e:#}");
            None
        }
    };

    let layout = ToastLayout::from_config(&config.notifier, screen_width);
    let (notifier, toast_rx) = ToastNotifier::new(LogSurface, layout, Handle::current());

    let source = Arc::new(regen_ocr::desktop_sync(&config)?);
    let manual_regen_secs = config.tracker.manual_regen_secs;
    let manual: seed::ManualSeed = Box::new(move || {
        seed::prompt_manual_seed(io::stdin().lock(), io::stdout(), manual_regen_secs)
    });

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(source, Arc::new(notifier), toast_rx, manual);

    let outcome = tokio::select! {
        result = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            result.context("Failed to listen for ctrl+c")
        }
        Some(result) = tasks.join_next() => controller::task_outcome(result),
    };

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::error!("task failed during shutdown: {e:#}");
        }
    }

    outcome
}
