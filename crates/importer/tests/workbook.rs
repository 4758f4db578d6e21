mod support;

use importer::{parse_records, read_grid, Cell, ImportError};

#[test]
fn first_sheet_is_the_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = support::pricing_workbook(&dir).unwrap();

    let grid = read_grid(&path, None).unwrap();
    assert_eq!(grid.width(), 16);
    assert_eq!(grid.get(2, 1), &Cell::Text("Standard".into()));

    let parsed = parse_records(&grid);
    assert_eq!(parsed.blocks_scanned, 2);
    assert_eq!(parsed.blocks_skipped, 0);
    assert_eq!(parsed.records.len(), 14);

    let first = &parsed.records[0];
    assert_eq!((first.food_type.as_str(), first.meal_plan.as_str()), ("Veg", "Standard"));
    assert_eq!((first.people_count, first.price), (1, 100.0));
    assert_eq!(first.meal_details, "Lunch + Dinner");
    assert_eq!(first.frequency, "Daily");
    assert_eq!(parsed.records[3].people_count, 4);

    let last = parsed.records.last().unwrap();
    assert_eq!((last.meal_plan.as_str(), last.people_count, last.price), ("Premium", 7, 1050.0));
}

#[test]
fn named_sheet_is_selected() {
    let dir = tempfile::tempdir().unwrap();
    let path = support::pricing_workbook(&dir).unwrap();

    let parsed = parse_records(&read_grid(&path, Some("Weekly")).unwrap());
    assert_eq!(parsed.records.len(), 7);
    assert!(parsed.records.iter().all(|r| r.meal_plan == "Trial" && r.food_type == "Non-Veg"));
    let prices: Vec<f64> = parsed.records.iter().map(|r| r.price).collect();
    assert_eq!(prices, vec![50.0, 100.0, 150.0, 200.0, 250.0, 300.0, 350.0]);
}

#[test]
fn unknown_sheet_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = support::pricing_workbook(&dir).unwrap();

    let err = read_grid(&path, Some("Quarterly")).unwrap_err();
    assert!(matches!(err, ImportError::SheetNotFound(ref name) if name == "Quarterly"));
}
