//! End-to-end coverage of the six literal rendering scenarios, driven
//! entirely through the public [`tablelayout::Table`] facade.

use tablelayout::{Column, Symbols, Table};

fn three_columns() -> Table {
    Table::new()
        .with_column(Column::new("A").width_hint(5.0))
        .with_column(Column::new("B").width_hint(5.0))
        .with_column(Column::new("C").width_hint(8.0))
}

fn three_columns_with_row() -> Table {
    let mut table = three_columns();
    let line = table.new_line();
    table.set_cell_data(line, 0, "aa").unwrap();
    table.set_cell_data(line, 1, "bb").unwrap();
    table.set_cell_data(line, 2, "cccccc").unwrap();
    table
}

#[test]
fn flat_three_columns_fit_exactly_in_a_20_wide_terminal() {
    let mut table = three_columns_with_row().force_width(20);
    let out = table.print_to_string().unwrap();

    // Column C's header ("C") and its one cell ("cccccc") are both
    // narrower than the hinted width 8, so the last-column shrink rule
    // trims the trailing padding on both rows.
    assert_eq!(out, "A     B     C\naa    bb    cccccc\n");
}

#[test]
fn raw_mode_emits_single_space_separators_and_still_prints_the_header() {
    let mut table = three_columns_with_row().force_width(20).set_raw(true);
    let out = table.print_to_string().unwrap();
    assert_eq!(out, "A B C\naa bb cccccc\n");
}

#[test]
fn export_mode_emits_key_value_pairs_with_no_header_line() {
    let mut table = three_columns_with_row().force_width(20).set_export(true);
    let out = table.print_to_string().unwrap();
    assert_eq!(out, "A=aa B=bb C=cccccc\n");
}

#[test]
fn tree_mode_prefixes_a_last_grandchild_with_chained_ancestor_art() {
    let mut table = Table::new()
        .with_column(Column::new("NAME").tree())
        .with_column(Column::new("SIZE"))
        .with_symbols(Symbols::default())
        .set_tree(true)
        .force_width(40);

    let r = table.new_line();
    table.set_cell_data(r, 0, "r").unwrap();
    table.set_cell_data(r, 1, "1").unwrap();

    let c1 = table.new_child_line(r).unwrap();
    table.set_cell_data(c1, 0, "c1").unwrap();
    table.set_cell_data(c1, 1, "1").unwrap();

    let c2 = table.new_child_line(r).unwrap();
    table.set_cell_data(c2, 0, "c2").unwrap();
    table.set_cell_data(c2, 1, "1").unwrap();

    let g = table.new_child_line(c2).unwrap();
    table.set_cell_data(g, 0, "g").unwrap();
    table.set_cell_data(g, 1, "1").unwrap();

    let out = table.print_to_string().unwrap();
    assert!(out.contains("  \u{2514}\u{2500}g"));
    assert!(out.contains("\u{251c}\u{2500}c1"));
    assert!(out.contains("\u{2514}\u{2500}c2"));
}

#[test]
fn shrink_to_fit_truncates_the_hinted_column_then_trims_the_other() {
    // Column 0: fractional hint 0.5, trunc, natural width 8.
    // Column 1: no hint, no trunc, natural width 5.
    // Terminal width 10 forces both the truncate-only and unrestricted
    // shrink passes to run (see DESIGN.md for the full derivation).
    let mut table = Table::new()
        .with_column(Column::new("A").width_hint(0.5).trunc())
        .with_column(Column::new("B"))
        .force_width(10);

    let line = table.new_line();
    table.set_cell_data(line, 0, "12345678").unwrap();
    table.set_cell_data(line, 1, "abcde").unwrap();

    let out = table.print_to_string().unwrap();

    assert_eq!(table.columns()[0].width(), 5);
    assert_eq!(table.columns()[1].width(), 4);
    assert_eq!(out, "A     B\n12345 abcde\n");
}

#[test]
fn extreme_outlier_is_suppressed_from_the_no_extremes_column() {
    // A terminal narrower than the outlier's own width forces the extremes-
    // reduction phase to re-measure the column; choosing a terminal exactly
    // as wide as the *non-outlier* cells means that re-measurement alone
    // satisfies the budget, so the subsequent grow phases (which would
    // otherwise re-absorb the outlier's width back in) never run.
    let mut table = Table::new()
        .with_column(Column::new("W").no_extremes())
        .force_width(3);

    for value in ["abc", "abc", "abc", "abc", &"a".repeat(30)] {
        let line = table.new_line();
        table.set_cell_data(line, 0, value.to_string()).unwrap();
    }

    table.print_to_string().unwrap();
    // The 30-wide outlier is flagged extreme and ignored on re-measurement,
    // so the solved column width reflects the four ordinary 3-wide cells.
    assert_eq!(table.columns()[0].width(), 3);
}
