//! The two generation stages
//!
//! Each stage seeds its own noise source, generates its tables in memory,
//! audits them and only then writes them to the table store.

use std::path::PathBuf;

use chrono::Datelike;
use shared::{
    validate_climate_series, validate_ndvi, validate_plot_references, validate_unique_plot_ids,
    validate_yield, AnnualYieldRecord, DailyClimateRecord, Plot, PlotWithSoil,
    VegetationIndexRecord,
};

use crate::config::Config;
use crate::error::GeneratorResult;
use crate::external::{tables, TableStore};
use crate::services::{
    generate_soil_profiles, plot_catalog, ClimateGenerator, NoiseSource, ProductivityGenerator,
    VegetationGenerator,
};

/// One table written by a stage
#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// What a stage wrote
#[derive(Debug, Clone)]
pub struct StageSummary {
    pub stage: &'static str,
    pub tables: Vec<TableSummary>,
}

impl StageSummary {
    fn new(stage: &'static str) -> Self {
        Self {
            stage,
            tables: Vec::new(),
        }
    }

    fn record<T: serde::Serialize>(
        &mut self,
        store: &TableStore,
        table: &str,
        rows: &[T],
    ) -> GeneratorResult<()> {
        let path = store.write(table, rows)?;
        tracing::info!(path = %path.display(), rows = rows.len(), "wrote {}", table);
        self.tables.push(TableSummary {
            path,
            rows: rows.len(),
        });
        Ok(())
    }

    /// Rows written to the table with the given file name
    pub fn rows_in(&self, table: &str) -> Option<usize> {
        self.tables
            .iter()
            .find(|t| t.path.file_name().is_some_and(|name| name == table))
            .map(|t| t.rows)
    }

    pub fn log(&self) {
        let total: usize = self.tables.iter().map(|t| t.rows).sum();
        tracing::info!(
            stage = self.stage,
            tables = self.tables.len(),
            rows = total,
            "stage completed"
        );
    }
}

// ============================================================================
// Stage 1: Plots & Climate
// ============================================================================

/// In-memory output of the plot & climate stage
#[derive(Debug, Clone)]
pub struct PlotClimateOutput {
    pub plots: Vec<Plot>,
    pub climate: Vec<DailyClimateRecord>,
}

/// Generate and audit the plot and climate tables
pub fn generate_plot_climate(config: &Config) -> GeneratorResult<PlotClimateOutput> {
    let range = config.date_range()?;
    let mut noise = NoiseSource::seeded(config.climate.seed);

    let plots = plot_catalog();
    validate_unique_plot_ids(&plots)?;

    let climate = ClimateGenerator::default().generate(&range, &mut noise)?;
    validate_climate_series(&climate, &range)?;

    Ok(PlotClimateOutput { plots, climate })
}

/// Run the plot & climate stage and write its tables
pub fn run_plot_climate_stage(config: &Config) -> GeneratorResult<StageSummary> {
    tracing::info!(
        seed = config.climate.seed,
        start = %config.climate.start_date,
        end = %config.climate.end_date,
        "generating plots and daily climate"
    );

    let store = TableStore::create(&config.output_dir)?;
    let output = generate_plot_climate(config)?;

    let mut summary = StageSummary::new("plot_climate");
    summary.record(&store, tables::PLOTS, &output.plots)?;
    summary.record(&store, tables::DAILY_CLIMATE, &output.climate)?;
    Ok(summary)
}

// ============================================================================
// Stage 2: Soil & Productivity
// ============================================================================

/// In-memory output of the soil & productivity stage
#[derive(Debug, Clone)]
pub struct SoilProductivityOutput {
    pub plots_with_soil: Vec<PlotWithSoil>,
    pub yields: Vec<AnnualYieldRecord>,
    pub ndvi: Vec<VegetationIndexRecord>,
}

/// Derive soil, yield and NDVI tables from stage-1 data and audit them
pub fn generate_soil_productivity(
    plots: &[Plot],
    climate: &[DailyClimateRecord],
    seed: u64,
) -> GeneratorResult<SoilProductivityOutput> {
    let mut noise = NoiseSource::seeded(seed);

    let soils = generate_soil_profiles(plots, &mut noise);
    let plots_with_soil: Vec<PlotWithSoil> = plots
        .iter()
        .zip(&soils)
        .map(|(plot, soil)| PlotWithSoil::join(plot, soil))
        .collect();
    tracing::info!(plots = plots_with_soil.len(), "soil profiles generated");

    let years = match (climate.first(), climate.last()) {
        (Some(first), Some(last)) => first.date.year()..=last.date.year(),
        _ => 1..=0,
    };
    let yields = ProductivityGenerator::default().generate(&plots_with_soil, climate, years, &mut noise)?;
    let ndvi = VegetationGenerator::default().generate(&plots_with_soil, climate, &mut noise)?;

    let known_ids = validate_unique_plot_ids(plots)?;
    validate_plot_references("produtividade_anual", yields.iter().map(|y| y.plot_id), &known_ids)?;
    validate_plot_references("ndvi_diario", ndvi.iter().map(|n| n.plot_id), &known_ids)?;
    yields.iter().try_for_each(validate_yield)?;
    ndvi.iter().try_for_each(validate_ndvi)?;

    Ok(SoilProductivityOutput {
        plots_with_soil,
        yields,
        ndvi,
    })
}

/// Run the soil & productivity stage against the tables of stage 1
pub fn run_soil_productivity_stage(config: &Config) -> GeneratorResult<StageSummary> {
    let store = TableStore::new(&config.output_dir);
    let plots: Vec<Plot> = store.read_non_empty(tables::PLOTS)?;
    let climate: Vec<DailyClimateRecord> = store.read_non_empty(tables::DAILY_CLIMATE)?;

    tracing::info!(
        plots = plots.len(),
        climate_days = climate.len(),
        seed = config.productivity.seed,
        "inputs loaded"
    );

    let output = generate_soil_productivity(&plots, &climate, config.productivity.seed)?;

    let mut summary = StageSummary::new("soil_productivity");
    summary.record(&store, tables::PLOTS_WITH_SOIL, &output.plots_with_soil)?;
    summary.record(&store, tables::ANNUAL_YIELD, &output.yields)?;
    summary.record(&store, tables::DAILY_NDVI, &output.ndvi)?;
    Ok(summary)
}
