//! DinoPark Engine - Main entry point.
//!
//! Runs the park against in-memory storage: optionally loads the starter
//! park, builds one enclosure by quantity and logs the resulting overview.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dinopark_engine::infrastructure::config::EngineConfig;
use dinopark_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dinopark_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting DinoPark Engine");

    let config = EngineConfig::from_env();
    tracing::info!(?config, "Loaded configuration");

    let app = App::in_memory();

    if config.seed_park {
        app.use_cases.seed.execute().await?;
    }

    match app
        .use_cases
        .builder
        .build_enclosure_by_quantity(config.securities, config.dinosaurs)
        .await
    {
        Ok(enclosure) => tracing::info!(enclosure_id = %enclosure.id(), "Enclosure ready"),
        Err(e) => tracing::error!(error = %e, "Could not build enclosure"),
    }

    for summary in app.use_cases.overview.execute().await? {
        tracing::info!(
            enclosure_id = %summary.id,
            dinosaurs = summary.dinosaur_count,
            securities = ?summary.securities,
            needs_alarm = summary.needs_alarm,
            "Enclosure"
        );
        for line in &summary.dinosaurs {
            tracing::info!(enclosure_id = %summary.id, "{}", line);
        }
    }

    Ok(())
}
