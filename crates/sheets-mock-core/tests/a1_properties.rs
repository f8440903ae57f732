//! Property tests for A1 parsing and formatting

use proptest::prelude::*;
use sheets_mock_core::{a1_from_corners, GridCoord, RangeAddress, RangeExpr, Spreadsheet};

fn spreadsheet() -> Spreadsheet {
    let mut ss = Spreadsheet::new("props", "Props");
    ss.add_sheet("Sheet1").unwrap();
    ss
}

proptest! {
    /// Parsing `<Col><Row>` and formatting the top-left corner gives the input back
    #[test]
    fn single_cell_round_trip(col in 0u8..26, row in 1u32..=100_000) {
        let text = format!("{}{}", (b'A' + col) as char, row);
        let address = RangeAddress::resolve(&text, &spreadsheet()).unwrap();

        prop_assert_eq!(address.start, address.end);
        prop_assert_eq!(address.start.to_a1_string().unwrap(), text);
    }

    /// Whole-column references always span every row of the sheet
    #[test]
    fn whole_column_spans_all_rows(col in 0u8..26) {
        let letter = (b'A' + col) as char;
        let text = format!("Sheet1!{}:{}", letter, letter);
        let address = RangeAddress::resolve(&text, &spreadsheet()).unwrap();

        prop_assert_eq!(address.start, GridCoord::new(0, col as u32));
        prop_assert_eq!(address.end, GridCoord::new(99, col as u32));
    }

    /// Corner order in the expression does not matter
    #[test]
    fn corners_are_normalized(
        r1 in 0u32..100, c1 in 0u32..26, r2 in 0u32..100, c2 in 0u32..26,
    ) {
        let a = GridCoord::new(r1, c1).to_a1_string().unwrap();
        let b = GridCoord::new(r2, c2).to_a1_string().unwrap();
        let ss = spreadsheet();

        let forward = RangeAddress::resolve(&format!("{}:{}", a, b), &ss).unwrap();
        let backward = RangeAddress::resolve(&format!("{}:{}", b, a), &ss).unwrap();
        prop_assert_eq!(forward, backward);
        prop_assert!(forward.start.row <= forward.end.row);
        prop_assert!(forward.start.col <= forward.end.col);
    }

    /// Column-A spans built for append responses parse back to the same rows
    #[test]
    fn column_span_reparses(start in 0u32..500, len in 1u32..50) {
        let end = start + len - 1;
        let text = a1_from_corners("Sheet1", GridCoord::new(start, 0), GridCoord::new(end, 0)).unwrap();
        let expr = RangeExpr::parse(&text).unwrap();

        prop_assert_eq!(expr.sheet.as_deref(), Some("Sheet1"));
        prop_assert_eq!(expr.start.row, Some(start));
        prop_assert_eq!(expr.end.row, Some(end));
        prop_assert_eq!(expr.start.col, Some(0));
    }
}
