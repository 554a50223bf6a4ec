mod common;

use sitewright::core::pack;
use sitewright::{ColumnWidth, GRID_UNITS};

fn widths(units: &[u8]) -> Vec<ColumnWidth> {
    units.iter().copied().map(ColumnWidth::new).collect()
}

#[test]
fn every_row_sums_within_the_grid() {
    common::init_logging();

    let cases: &[&[u8]] = &[
        &[12],
        &[6, 6],
        &[4, 4, 4],
        &[3, 3, 3, 3],
        &[7, 5, 8, 4],
        &[6, 6, 6, 6, 6],
        &[5, 5, 5],
        &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    ];
    for case in cases {
        let input = widths(case);
        for row in pack(&input) {
            let sum: u8 = row.iter().map(|w| w.units()).sum();
            assert!(sum <= GRID_UNITS, "row overflow for {case:?}");
            assert!(!row.is_empty());
        }
    }
}

#[test]
fn concatenated_rows_reproduce_the_input() {
    let input = widths(&[7, 5, 8, 4, 12, 3, 3, 3, 3, 6]);
    let flattened: Vec<ColumnWidth> = pack(&input).into_iter().flatten().collect();
    assert_eq!(flattened, input);
}

#[test]
fn a_new_row_starts_only_on_overflow() {
    // 7 + 5 fills a row exactly; 8 overflows and wraps.
    let rows = pack(&widths(&[7, 5, 8, 4]));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].iter().map(|w| w.units()).collect::<Vec<_>>(), [7, 5]);
    assert_eq!(rows[1].iter().map(|w| w.units()).collect::<Vec<_>>(), [8, 4]);
}

#[test]
fn oversized_widths_clamp_to_full_rows() {
    let rows = pack(&[ColumnWidth::new(30), ColumnWidth::new(6)]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0].units(), GRID_UNITS);
}

#[test]
fn under_full_rows_are_allowed() {
    let rows = pack(&widths(&[5, 5]));
    assert_eq!(rows.len(), 1);
    let sum: u8 = rows[0].iter().map(|w| w.units()).sum();
    assert_eq!(sum, 10);
}
