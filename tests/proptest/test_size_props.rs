//! Property-based tests for console geometry

use gridconsole::error::ErrorKind;
use gridconsole::models::{CellSize, GridSize};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_pixel_size_adds_border(
        columns in 1u32..400,
        rows in 1u32..200,
        width in 1u32..32,
        height in 1u32..48
    ) {
        let size = GridSize::new(columns, rows).unwrap();
        let cell = CellSize::new(width as f32, height as f32);
        let px = size.pixel_size(cell);

        prop_assert_eq!(px.width, (width * columns + 1) as f32);
        prop_assert_eq!(px.height, (height * rows + 1) as f32);
    }

    #[test]
    fn prop_size_string_parses(columns in 1u32..10_000, rows in 1u32..10_000) {
        let parsed: GridSize = format!("{}x{}", columns, rows).parse().unwrap();
        prop_assert_eq!(parsed.columns(), columns);
        prop_assert_eq!(parsed.rows(), rows);
        prop_assert_eq!(parsed.to_string(), format!("{}x{}", columns, rows));
    }

    #[test]
    fn prop_non_numeric_sizes_rejected(
        cols in "[a-wyz]{1,6}",
        rows in "[0-9]{1,3}"
    ) {
        let err = format!("{}x{}", cols, rows).parse::<GridSize>().unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn prop_zero_dimension_rejected(n in 0u32..1000) {
        prop_assert_eq!(
            GridSize::new(0, n).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        prop_assert_eq!(
            GridSize::new(n, 0).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }
}
