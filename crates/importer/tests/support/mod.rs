use std::path::PathBuf;

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use tempfile::TempDir;

/// One plan block at column `start`, laid out like the pricing workbook.
/// The fourth people cell is text ("4 People") the way the sheet writes it.
pub fn write_block(sheet: &mut Worksheet, start: u16, food: &str, plan: &str, base: f64) -> Result<(), XlsxError> {
    sheet.write_string(0, start, "Pricing")?;
    sheet.write_string(1, start, "Food Type")?;
    sheet.write_string(1, start + 1, food)?;
    sheet.write_string(2, start, "Plan")?;
    sheet.write_string(2, start + 1, plan)?;
    sheet.write_string(3, start, "No. of People")?;
    sheet.write_string(4, start, "Details")?;
    sheet.write_string(4, start + 1, "Lunch + Dinner")?;
    sheet.write_string(5, start, "Frequency")?;
    sheet.write_string(5, start + 1, "Daily")?;
    sheet.write_string(7, start, "Basic Price")?;
    for i in 1..=7u16 {
        if i == 4 {
            sheet.write_string(3, start + i, "4 People")?;
        } else {
            sheet.write_number(3, start + i, f64::from(i))?;
        }
        sheet.write_number(7, start + i, base * f64::from(i))?;
    }
    Ok(())
}

/// "Monthly" (Veg/Standard and Jain/Premium side by side), then "Weekly"
/// (Non-Veg/Trial).
pub fn pricing_workbook(dir: &TempDir) -> Result<PathBuf, XlsxError> {
    let mut workbook = Workbook::new();

    let monthly = workbook.add_worksheet();
    monthly.set_name("Monthly")?;
    write_block(monthly, 0, "Veg", "Standard", 100.0)?;
    write_block(monthly, 8, "Jain", "Premium", 150.0)?;

    let weekly = workbook.add_worksheet();
    weekly.set_name("Weekly")?;
    write_block(weekly, 0, "Non-Veg", "Trial", 50.0)?;

    let path = dir.path().join("Pricing MD.xlsx");
    workbook.save(&path)?;
    Ok(path)
}
