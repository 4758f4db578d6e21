//! Workbook access via calamine.

use std::path::Path;

use calamine::{open_workbook_auto, Reader};
use tracing::info;

use crate::grid::Grid;
use crate::ImportError;

/// Load one worksheet as a grid. Uses `sheet` when given, else the first sheet.
/// Any format calamine recognises by extension (xlsx, xlsm, xls, ods) works.
pub fn read_grid(path: &Path, sheet: Option<&str>) -> Result<Grid, ImportError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| ImportError::Open {
        path: path.display().to_string(),
        source: e,
    })?;

    let names = workbook.sheet_names();
    let name = match sheet {
        Some(wanted) => names
            .iter()
            .find(|n| n.as_str() == wanted)
            .cloned()
            .ok_or_else(|| ImportError::SheetNotFound(wanted.to_string()))?,
        None => names.first().cloned().ok_or(ImportError::EmptyWorkbook)?,
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| ImportError::Sheet { name: name.clone(), source: e })?;
    let grid = Grid::from_range(&range);
    info!(sheet = %name, rows = grid.height(), cols = grid.width(), "worksheet loaded");
    Ok(grid)
}
