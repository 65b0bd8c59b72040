use calamine::{Data, Range};

use sets_ingest::{Sheet, TableReader};

#[test]
fn header_row_is_always_skipped() {
    let sheet: Sheet = vec![
        vec!["SET-0000", "1111111"],
        vec!["SET-0001", "1234567"],
    ]
    .into_iter()
    .collect();
    let rows: Vec<_> = TableReader::new(&sheet).rows().collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cells(), ["SET-0001", "1234567"]);
}

#[test]
fn header_only_sheet_yields_nothing() {
    let sheet: Sheet = vec![vec!["Set", "Barcode"]].into_iter().collect();
    assert_eq!(TableReader::new(&sheet).rows().count(), 0);
    assert_eq!(TableReader::new(&Sheet::default()).rows().count(), 0);
}

#[test]
fn empty_rows_are_still_yielded() {
    let sheet: Sheet = vec![
        vec!["Set", "Barcode"],
        vec!["", "1234567"],
        vec!["SET-0002", "2234567"],
    ]
    .into_iter()
    .collect();
    let rows: Vec<_> = TableReader::new(&sheet).rows().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].is_empty());
    assert_eq!(rows[1].cells(), ["SET-0002", "2234567"]);
}

#[test]
fn range_is_padded_to_first_row_and_column() {
    // Data starts at B2: the header row is empty and column A is empty.
    let mut range: Range<Data> = Range::new((1, 1), (2, 2));
    range.set_value((1, 1), Data::String("Set".to_string()));
    range.set_value((1, 2), Data::String("Barcode".to_string()));
    range.set_value((2, 1), Data::String("SET-0001".to_string()));
    range.set_value((2, 2), Data::Float(1234567.0));

    let sheet = Sheet::from_range(&range);
    assert_eq!(sheet.row_count(), 3);
    assert_eq!(sheet.rows()[2], vec!["", "SET-0001", "1234567"]);

    // Column A is empty, so every data row truncates to nothing.
    let rows: Vec<_> = TableReader::new(&sheet).rows().collect();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.is_empty()));
}

#[test]
fn range_cells_are_coerced_once() {
    let mut range: Range<Data> = Range::new((0, 0), (1, 3));
    range.set_value((0, 0), Data::String("Set".to_string()));
    range.set_value((1, 0), Data::String("SET-0001".to_string()));
    range.set_value((1, 1), Data::Int(1234567));
    range.set_value((1, 2), Data::Float(2234567.0));
    range.set_value((1, 3), Data::String("ABC-99999".to_string()));

    let sheet = Sheet::from_range(&range);
    let rows: Vec<_> = TableReader::new(&sheet).rows().collect();
    assert_eq!(
        rows[0].cells(),
        ["SET-0001", "1234567", "2234567", "ABC-99999"]
    );
}

#[test]
fn numeric_zero_cells_end_the_row() {
    let mut range: Range<Data> = Range::new((0, 0), (3, 3));
    range.set_value((0, 0), Data::String("Set".to_string()));
    range.set_value((1, 0), Data::String("SET-0001".to_string()));
    range.set_value((1, 1), Data::Float(1234567.0));
    range.set_value((1, 2), Data::Float(0.0));
    range.set_value((1, 3), Data::Float(7654321.0));
    range.set_value((2, 0), Data::String("SET-0002".to_string()));
    range.set_value((2, 1), Data::Int(0));
    range.set_value((2, 2), Data::Int(2234567));
    range.set_value((3, 0), Data::Int(0));
    range.set_value((3, 1), Data::Int(3334567));

    let sheet = Sheet::from_range(&range);
    let rows: Vec<_> = TableReader::new(&sheet).rows().collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].cells(), ["SET-0001", "1234567"]);
    assert_eq!(rows[1].cells(), ["SET-0002"]);
    assert!(rows[2].is_empty());
}

#[test]
fn text_zero_and_false_end_the_row() {
    let mut range: Range<Data> = Range::new((0, 0), (2, 2));
    range.set_value((0, 0), Data::String("Set".to_string()));
    range.set_value((1, 0), Data::String("SET-0001".to_string()));
    range.set_value((1, 1), Data::String("0".to_string()));
    range.set_value((1, 2), Data::String("7654321".to_string()));
    range.set_value((2, 0), Data::String("SET-0002".to_string()));
    range.set_value((2, 1), Data::Bool(false));
    range.set_value((2, 2), Data::String("2234567".to_string()));

    let sheet = Sheet::from_range(&range);
    let rows: Vec<_> = TableReader::new(&sheet).rows().collect();
    assert_eq!(rows[0].cells(), ["SET-0001"]);
    assert_eq!(rows[1].cells(), ["SET-0002"]);
}

#[test]
fn values_that_only_contain_zeros_are_kept() {
    let sheet: Sheet = vec![
        vec!["Set", "Barcode"],
        vec!["SET-0001", "0000000", "0.0", "1234567"],
    ]
    .into_iter()
    .collect();
    let rows: Vec<_> = TableReader::new(&sheet).rows().collect();
    assert_eq!(rows[0].cells(), ["SET-0001", "0000000", "0.0", "1234567"]);
}
