//! Stage 1: plot catalog and daily climate series

use vineyard_synth::{config::Config, pipeline, telemetry};

fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    dotenvy::dotenv().ok();
    let config = Config::load()?;

    let summary = pipeline::run_plot_climate_stage(&config)?;
    summary.log();

    Ok(())
}
