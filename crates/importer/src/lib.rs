//! One-shot spreadsheet importer for the pricing table.
//!
//! Reads the pricing workbook, reshapes its side-by-side plan blocks into
//! rows and refreshes `pricing_table` with them: existing rows are deleted and
//! the new ones inserted inside a single transaction.

pub mod grid;
pub mod layout;
pub mod reader;

use std::path::{Path, PathBuf};

use migration::MigratorTrait;
use models::pricing::NewPricing;
use sea_orm::DatabaseConnection;
use service::db::pricing_service;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, info, instrument};

pub use grid::{Cell, Grid};
pub use layout::{parse_records, ParsedSheet, PricingRecord};
pub use reader::read_grid;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot open workbook {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: calamine::Error,
    },
    #[error("cannot read worksheet {name}: {source}")]
    Sheet {
        name: String,
        #[source]
        source: calamine::Error,
    },
    #[error("worksheet not found: {0}")]
    SheetNotFound(String),
    #[error("workbook has no worksheets")]
    EmptyWorkbook,
    #[error("schema migration failed: {0}")]
    Migration(String),
    #[error("reader task failed: {0}")]
    Task(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Outcome of one import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub blocks_scanned: usize,
    pub blocks_skipped: usize,
    pub deleted: u64,
    pub inserted: u64,
}

/// Read `path` and refresh the pricing table from it.
#[instrument(skip(db, path), fields(path = %path.display()))]
pub async fn import_file(db: &DatabaseConnection, path: &Path, sheet: Option<&str>) -> Result<ImportReport, ImportError> {
    info!("reading pricing workbook");
    let owned_path: PathBuf = path.to_path_buf();
    let owned_sheet = sheet.map(str::to_string);
    let grid = tokio::task::spawn_blocking(move || read_grid(&owned_path, owned_sheet.as_deref()))
        .await
        .map_err(|e| ImportError::Task(e.to_string()))?
        .inspect_err(|e| error!(error = %e, "error reading workbook"))?;
    import_grid(db, &grid).await
}

/// Parse an already loaded grid and refresh the pricing table from it.
pub async fn import_grid(db: &DatabaseConnection, grid: &Grid) -> Result<ImportReport, ImportError> {
    // Make sure the table exists before clearing it
    migration::Migrator::up(db, None)
        .await
        .map_err(|e| ImportError::Migration(e.to_string()))?;

    let parsed = parse_records(grid);
    let rows: Vec<NewPricing> = parsed.records.into_iter().map(NewPricing::from).collect();
    let outcome = pricing_service::replace_all(db, rows)
        .await
        .inspect_err(|e| error!(error = %e, "error importing data"))?;

    let report = ImportReport {
        blocks_scanned: parsed.blocks_scanned,
        blocks_skipped: parsed.blocks_skipped,
        deleted: outcome.deleted,
        inserted: outcome.inserted,
    };
    info!(
        blocks = report.blocks_scanned,
        skipped = report.blocks_skipped,
        deleted = report.deleted,
        inserted = report.inserted,
        "data imported successfully"
    );
    Ok(report)
}
