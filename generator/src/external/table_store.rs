//! Flat-file tabular store
//!
//! Each table is one comma-separated UTF-8 file with a header row. Writing a
//! table replaces any previous file of the same name.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{GeneratorError, GeneratorResult};

/// File names of the persisted tables
pub mod tables {
    pub const PLOTS: &str = "talhoes.csv";
    /// Fixed name, independent of the configured climate date range
    pub const DAILY_CLIMATE: &str = "clima_diario_2019_2024.csv";
    pub const PLOTS_WITH_SOIL: &str = "talhoes_com_solo.csv";
    pub const ANNUAL_YIELD: &str = "produtividade_anual.csv";
    pub const DAILY_NDVI: &str = "ndvi_diario.csv";
}

/// CSV tables rooted in one directory
#[derive(Debug, Clone)]
pub struct TableStore {
    root: PathBuf,
}

impl TableStore {
    /// Open a store without touching the filesystem
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Open a store, creating its directory if absent
    pub fn create(root: impl Into<PathBuf>) -> GeneratorResult<Self> {
        let store = Self::new(root);
        std::fs::create_dir_all(&store.root).map_err(|e| GeneratorError::io(&store.root, e))?;
        Ok(store)
    }

    pub fn path(&self, table: &str) -> PathBuf {
        self.root.join(table)
    }

    /// Serialize `rows` into `table`, returning the written path
    pub fn write<T: Serialize>(&self, table: &str, rows: &[T]) -> GeneratorResult<PathBuf> {
        let path = self.path(table);
        let mut wtr = csv::Writer::from_path(&path).map_err(|e| GeneratorError::csv(&path, e))?;

        for row in rows {
            wtr.serialize(row).map_err(|e| GeneratorError::csv(&path, e))?;
        }
        wtr.flush().map_err(|e| GeneratorError::io(&path, e))?;

        tracing::debug!(path = %path.display(), rows = rows.len(), "table written");
        Ok(path)
    }

    /// Read every row of `table`. Missing files, missing columns and
    /// unparsable cells are errors; an empty table is returned as-is.
    pub fn read<T: DeserializeOwned>(&self, table: &str) -> GeneratorResult<Vec<T>> {
        let path = self.path(table);
        let mut rdr = csv::Reader::from_path(&path).map_err(|e| GeneratorError::csv(&path, e))?;

        let rows = rdr
            .deserialize()
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| GeneratorError::csv(&path, e))?;

        tracing::debug!(path = %path.display(), rows = rows.len(), "table read");
        Ok(rows)
    }

    /// Like [`TableStore::read`], but an empty table is an error
    pub fn read_non_empty<T: DeserializeOwned>(&self, table: &str) -> GeneratorResult<Vec<T>> {
        let rows = self.read(table)?;
        if rows.is_empty() {
            return Err(GeneratorError::EmptyInput(self.path(table)));
        }
        Ok(rows)
    }
}
