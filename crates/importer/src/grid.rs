//! Cell grid anchored at A1.
//!
//! calamine ranges start at the first non-empty cell; the pricing layout is
//! addressed by absolute row/column, so the grid re-anchors every range at
//! (0, 0) and pads the gap with empty cells.

use calamine::{Data, ExcelDateTime, Range};

/// A spreadsheet cell after type coercion.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) if f.is_nan() => Cell::Empty,
            Data::Float(f) => Cell::Number(*f),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::Text(render_datetime(dt)),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self { Cell::Text(s.to_string()) }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self { Cell::Number(n) }
}

impl Cell {
    /// Empty, or text made only of whitespace.
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Display form used for text columns. Integral numbers drop the `.0`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            _ if self.is_missing() => None,
            Cell::Text(s) => Some(s.trim().to_string()),
            Cell::Number(n) => Some(render_number(*n)),
            Cell::Bool(b) => Some(b.to_string()),
            Cell::Empty => None,
        }
    }

    /// Numeric value of the cell; text is trimmed and parsed. Non-finite
    /// values count as absent.
    pub fn as_f64(&self) -> Option<f64> {
        let n = match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            Cell::Empty | Cell::Bool(_) => return None,
        };
        n.is_finite().then_some(n)
    }
}

/// ISO 8601 text; date-only when there is no time part. Durations and
/// out-of-range serials keep calamine's numeric form.
fn render_datetime(dt: &ExcelDateTime) -> String {
    match dt.as_datetime() {
        Some(d) if dt.is_datetime() => {
            if d.time() == chrono::NaiveTime::MIN {
                d.format("%Y-%m-%d").to_string()
            } else {
                d.format("%Y-%m-%dT%H:%M:%S").to_string()
            }
        }
        _ => dt.to_string(),
    }
}

fn render_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Rectangular cell matrix, row-major, anchored at A1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

static EMPTY: Cell = Cell::Empty;

impl Grid {
    /// Build from rows of possibly uneven length; short rows are padded.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut r| {
                r.resize(width, Cell::Empty);
                r
            })
            .collect();
        Self { rows, width }
    }

    pub fn from_range(range: &Range<Data>) -> Self {
        let Some((row0, col0)) = range.start() else { return Self::default() };
        let (row0, col0) = (row0 as usize, col0 as usize);
        let (height, width) = range.get_size();
        let mut rows = vec![vec![Cell::Empty; col0 + width]; row0 + height];
        for (r, c, data) in range.cells() {
            rows[row0 + r][col0 + c] = Cell::from(data);
        }
        Self { rows, width: col0 + width }
    }

    pub fn height(&self) -> usize { self.rows.len() }

    pub fn width(&self) -> usize { self.width }

    /// Cell at absolute position; out of range reads as empty.
    pub fn get(&self, row: usize, col: usize) -> &Cell {
        self.rows.get(row).and_then(|r| r.get(col)).unwrap_or(&EMPTY)
    }
}
