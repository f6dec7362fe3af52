//! Reconbot printer - renders a file of notifications to stdout.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use reconbot_domain::RawNotification;
use reconbot_engine::infrastructure::{config::RunnerConfig, name_directory::JsonNameDirectory};
use reconbot_engine::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; anything else is worth knowing about.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load .env: {}", e);
        }
    }

    // Initialize logging (stderr, so stdout only carries rendered lines)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reconbot_engine=info,reconbot_print=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RunnerConfig::from_env();
    tracing::info!(
        notifications = %config.notifications_path.display(),
        names = %config.names_path.display(),
        "Starting reconbot printer"
    );

    let directory = JsonNameDirectory::load(&config.names_path)
        .await
        .context("loading name directory")?;
    let notifications = load_notifications(&config.notifications_path).await?;

    let app = App::new(Arc::new(directory));

    let mut failed = 0usize;
    for line in app.printer.transform_all(&notifications).await {
        match line {
            Ok(line) => println!("{}", line),
            Err(_) => failed += 1,
        }
    }

    tracing::info!(
        total = notifications.len(),
        failed,
        "Finished printing notifications"
    );
    Ok(())
}

async fn load_notifications(path: &Path) -> anyhow::Result<Vec<RawNotification>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading notifications from {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("parsing notifications in {}", path.display()))
}
