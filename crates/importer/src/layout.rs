//! Pricing sheet layout.
//!
//! The sheet is a row of side-by-side blocks, each `BLOCK_WIDTH` columns wide.
//! Column 0 of a block holds labels; the remaining seven columns are one
//! household size each. Scalar fields live at fixed rows in the first value
//! column, and prices sit on whichever row is labelled "Basic Price".

use models::pricing::NewPricing;
use tracing::{debug, info, warn};

use crate::grid::{Cell, Grid};

pub const BLOCK_WIDTH: usize = 8;

const FOOD_TYPE_ROW: usize = 1;
const PLAN_TYPE_ROW: usize = 2;
const PEOPLE_ROW: usize = 3;
const DETAILS_ROW: usize = 4;
const FREQUENCY_ROW: usize = 5;

const BASIC_PRICE_LABEL: &str = "Basic Price";

/// One normalized pricing row taken from the sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRecord {
    pub meal_plan: String,
    pub price: f64,
    pub food_type: String,
    pub people_count: i32,
    pub frequency: String,
    pub meal_details: String,
}

impl From<PricingRecord> for NewPricing {
    fn from(r: PricingRecord) -> Self {
        NewPricing {
            meal_plan: r.meal_plan,
            price: r.price,
            food_type: r.food_type,
            people_count: r.people_count,
            frequency: r.frequency,
            meal_details: r.meal_details,
            utensil_washing_price: None,
            utensil_washing_commission: None,
            children_special_price: None,
            preference_community_percentage: None,
            kitchen_platform_price: None,
        }
    }
}

/// Scalar fields shared by every column of a block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockHeader {
    pub food_type: String,
    pub plan_type: String,
    pub meal_details: String,
    pub frequency: String,
}

/// Records plus the block bookkeeping gathered while parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSheet {
    pub records: Vec<PricingRecord>,
    pub blocks_scanned: usize,
    pub blocks_skipped: usize,
}

/// Start columns of every complete block; a narrower trailing block is dropped.
pub fn blocks(grid: &Grid) -> impl Iterator<Item = usize> + '_ {
    (0..grid.width())
        .step_by(BLOCK_WIDTH)
        .filter(move |start| start + BLOCK_WIDTH <= grid.width())
}

/// Read the fixed-row fields of the block starting at `start`.
/// `None` when food type or plan type is missing.
pub fn extract_block(grid: &Grid, start: usize) -> Option<BlockHeader> {
    let value_col = start + 1;
    let food_type = grid.get(FOOD_TYPE_ROW, value_col).as_text()?;
    let plan_type = grid.get(PLAN_TYPE_ROW, value_col).as_text()?;
    Some(BlockHeader {
        food_type,
        plan_type,
        meal_details: grid.get(DETAILS_ROW, value_col).as_text().unwrap_or_default(),
        frequency: grid.get(FREQUENCY_ROW, value_col).as_text().unwrap_or_default(),
    })
}

/// First row whose label cell is text containing "Basic Price".
pub fn find_basic_price_row(grid: &Grid, start: usize) -> Option<usize> {
    (0..grid.height()).find(|&row| match grid.get(row, start) {
        Cell::Text(label) => label.contains(BASIC_PRICE_LABEL),
        _ => false,
    })
}

/// Whether a price cell should produce a record.
pub fn is_valid_price(cell: &Cell) -> bool {
    parse_price(cell).is_some()
}

/// Price value of a cell, rejecting blanks, the repeated label and anything
/// that does not parse as a float.
pub fn parse_price(cell: &Cell) -> Option<f64> {
    if let Cell::Text(s) = cell {
        if s.trim().eq_ignore_ascii_case(BASIC_PRICE_LABEL) {
            return None;
        }
    }
    cell.as_f64()
}

/// Household size from a people cell: numbers are truncated, text yields its
/// first run of digits ("4 People" -> 4).
pub fn parse_people_count(cell: &Cell) -> Option<i32> {
    match cell {
        Cell::Number(n) if n.is_finite() => {
            let t = n.trunc();
            (t >= i32::MIN as f64 && t <= i32::MAX as f64).then_some(t as i32)
        }
        Cell::Text(s) => {
            let digits: String = s
                .chars()
                .skip_while(|c| !c.is_ascii_digit())
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

/// Records for one block in column order, or `None` if the block is skipped.
pub fn parse_block(grid: &Grid, start: usize) -> Option<Vec<PricingRecord>> {
    let Some(header) = extract_block(grid, start) else {
        debug!(block_col = start, "block skipped: no food type or plan type");
        return None;
    };
    let Some(price_row) = find_basic_price_row(grid, start) else {
        warn!(block_col = start, plan = %header.plan_type, "block skipped: no Basic Price row");
        return None;
    };

    let mut records = Vec::new();
    for col in start + 1..start + BLOCK_WIDTH {
        let people_cell = grid.get(PEOPLE_ROW, col);
        let Some(price) = parse_price(grid.get(price_row, col)) else { continue };
        if people_cell.is_missing() {
            continue;
        }
        let Some(people_count) = parse_people_count(people_cell) else {
            warn!(block_col = start, col, cell = ?people_cell, "column skipped: people count is not a number");
            continue;
        };
        info!(plan = %header.plan_type, people_count, price, "parsed pricing");
        records.push(PricingRecord {
            meal_plan: header.plan_type.clone(),
            price,
            food_type: header.food_type.clone(),
            people_count,
            frequency: header.frequency.clone(),
            meal_details: header.meal_details.clone(),
        });
    }
    Some(records)
}

/// Walk every block and collect records in block order, then column order.
pub fn parse_records(grid: &Grid) -> ParsedSheet {
    let mut out = ParsedSheet::default();
    for start in blocks(grid) {
        out.blocks_scanned += 1;
        match parse_block(grid, start) {
            Some(records) => out.records.extend(records),
            None => out.blocks_skipped += 1,
        }
    }
    out
}
