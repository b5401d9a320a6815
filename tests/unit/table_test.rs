//! Unit tests for tables, markers and themes

use termtable::table::marker::{self, CLASS_A, CLASS_F, CUSTOM_BASE, NEGATIVE, NEUTRAL, POSITIVE};
use termtable::table::{Comparator, FilterDef};
use termtable::term::{strip_escapes, visible_length};
use termtable::{Border, KeyValueTable, Style, Table, Theme};

fn scores() -> Table {
    let mut table = Table::new()
        .with_name("Scores")
        .with_headers(["Team", "Points", "Delta"]);
    for (team, points, delta) in [("red", 12, 0.5), ("blue", 30, -1.25), ("green", 7, 0.0)] {
        table
            .create_row()
            .add_default_text(team)
            .add_int(points, NEUTRAL)
            .add_marked_float(delta);
    }
    table
}

fn column(table: &Table, index: usize) -> Vec<String> {
    table
        .rows()
        .iter()
        .map(|row| row.cell(index).map(|c| c.text.clone()).unwrap_or_default())
        .collect()
}

#[test]
fn rows_hold_at_most_one_cell_per_header() {
    let mut table = Table::new().with_headers(["A", "B"]);
    let row = table.create_row();
    row.add_default_text("1").add_default_text("2").add_default_text("3");
    assert!(row.is_full());
    assert_eq!(table.rows()[0].cells.len(), 2);
}

#[test]
fn marked_floats_follow_rounded_sign() {
    let mut table = Table::new().with_headers(["a", "b", "c"]);
    table
        .create_row()
        .add_marked_float(1.234)
        .add_marked_float(-0.004)
        .add_marked_float(-2.0);
    let cells = &table.rows()[0].cells;
    assert_eq!((cells[0].text.as_str(), cells[0].marker), ("1.23", POSITIVE));
    assert_eq!((cells[1].text.as_str(), cells[1].marker), ("0.00", NEUTRAL));
    assert_eq!((cells[2].text.as_str(), cells[2].marker), ("-2.00", NEGATIVE));
}

#[test]
fn sort_orders_by_value() {
    let mut table = scores();
    table.sort("Points");
    assert_eq!(column(&table, 0), ["blue", "red", "green"]);
    table.sort_reverse("Points");
    assert_eq!(column(&table, 0), ["green", "red", "blue"]);
}

#[test]
fn sort_by_unknown_column_keeps_order() {
    let mut table = scores();
    table.sort("Missing");
    assert_eq!(column(&table, 0), ["red", "blue", "green"]);
}

#[test]
fn derived_tables_keep_layout() {
    let table = scores().with_border(Border::THICK).with_limit(1);
    let sub = table.sub(1, 10);
    assert_eq!(column(&sub, 0), ["blue", "green"]);
    assert_eq!(sub.headers(), table.headers());
    assert_eq!(sub.border(), &Border::THICK);
    assert_eq!(sub.limit(), None);
    assert_eq!(sub.created(), table.created());

    assert_eq!(column(&table.filter_recent(1), 0), ["green"]);
    assert!(table.sub(5, 9).rows().is_empty());
}

#[test]
fn filter_compares_text() {
    let table = scores();
    assert_eq!(column(&table.filter("Team == red"), 0), ["red"]);
    assert_eq!(column(&table.filter("Team != red"), 0), ["blue", "green"]);
    // lexicographic: "12" sorts before "2"
    assert_eq!(column(&table.filter("Points > 2"), 0), ["blue", "green"]);
    assert_eq!(column(&table.filter("Points < 2"), 0), ["red"]);
}

#[test]
fn bad_filters_give_empty_tables() {
    let table = scores();
    for expression in ["Team ==", "Team ~ red", "Nope == red", "Team  == red"] {
        let filtered = table.filter(expression);
        assert!(filtered.rows().is_empty(), "{expression}");
        assert_eq!(filtered.headers(), table.headers());
    }
}

#[test]
fn filter_def_display_round_trips() {
    let def = FilterDef::parse("Delta >= 0.00").expect("valid filter");
    assert_eq!(def.comparator, Comparator::GreaterOrEqual);
    assert_eq!(FilterDef::parse(&def.to_string()), Some(def));
}

#[test]
fn set_text_and_header_rename() {
    let mut table = scores();
    table.set_header_name(0, "Name").set_text(2, 0, "lime");
    table.set_text(9, 0, "ignored");
    assert_eq!(table.find_column_index("Name"), Some(0));
    assert_eq!(table.find_column_index("Team"), None);
    assert_eq!(column(&table, 0), ["red", "blue", "lime"]);
}

#[test]
fn delimiter_line_fills_every_column() {
    let mut table = scores();
    table.delimiter_line("--");
    let plain = table.render_plain();
    let last = plain.lines().rev().nth(1).expect("delimiter row");
    assert_eq!(strip_escapes(last), "│  --   │   --   │  --   │");
}

#[test]
fn custom_markers_start_at_base() {
    let mut table = Table::new();
    let first = table.add_style(Style::new("#111111", "", false));
    let second = table.add_style(Style::new("#222222", "", false));
    assert_eq!((first, second), (CUSTOM_BASE, CUSTOM_BASE + 1));
    assert_eq!(table.custom_style(second), Some(&Style::new("#222222", "", false)));
    assert_eq!(table.custom_style(CUSTOM_BASE + 2), None);
    assert_eq!(table.custom_style(POSITIVE), None);
}

#[test]
fn theme_covers_every_builtin_marker() {
    for theme in [Theme::foreground(), Theme::background()] {
        for striped in [false, true] {
            let styles = theme.styles(striped);
            for code in NEGATIVE..=CLASS_F {
                assert!(styles.marker(code).is_some(), "{code}");
            }
            assert_eq!(theme.style_for(99, striped), &styles.text);
            assert_eq!(styles.marker(CLASS_A), Some(&styles.classes[0]));
        }
    }
}

#[test]
fn sign_markers() {
    assert_eq!(marker::for_sign(0.1), POSITIVE);
    assert_eq!(marker::for_sign(-0.1), NEGATIVE);
    assert_eq!(marker::for_sign(0.0), NEUTRAL);
}

#[test]
fn styled_and_plain_share_layout() {
    let table = scores().with_border(Border::DOUBLE);
    for theme in [Theme::foreground(), Theme::background()] {
        assert_eq!(strip_escapes(&table.render(&theme)), table.render_plain());
    }
    for line in table.render_plain().lines().skip(1) {
        assert_eq!(visible_length(line), table.width());
    }
}

#[test]
fn key_value_table_has_two_columns() {
    let mut summary = KeyValueTable::new("Summary");
    summary.add_row("rows", "3");
    summary.add_float("ratio", 0.25, POSITIVE);
    let table = summary.table();
    assert_eq!(table.headers(), ["Name", "Value"]);
    assert_eq!(table.rows()[1].cells[1].marker, POSITIVE);
    assert_eq!(summary.to_string(), summary.table().to_string());
}
