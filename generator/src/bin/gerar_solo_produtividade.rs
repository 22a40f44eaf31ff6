//! Stage 2: soil profiles, annual yield and daily NDVI from the stage 1 tables

use vineyard_synth::{config::Config, pipeline, telemetry};

fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    dotenvy::dotenv().ok();
    let config = Config::load()?;

    let summary = pipeline::run_soil_productivity_stage(&config)?;
    summary.log();

    Ok(())
}
