//! Layout tests for grids, character matrices and heat maps

use termtable::heatmap::Symbols;
use termtable::term::matrix::{BORDER, NEGATIVE, POSITIVE, TEXT};
use termtable::term::{strip_escapes, visible_length, CharMatrix};
use termtable::{Grid, GridCell, GridRow, HeatMap, Style, Table, Theme};

fn tiny_table() -> Table {
    let mut table = Table::new().with_headers(["A"]);
    table.create_row().add_int(1, 0);
    table
}

// ============================================================================
// Grid
// ============================================================================

#[test]
fn grid_embeds_rendered_table() {
    let table = tiny_table().render_plain();
    let grid = Grid::new().push(
        GridRow::new(1)
            .push(GridCell::plain(7, table.trim_end_matches('\n')))
            .push(GridCell::plain(6, "side\nnote")),
    );
    let expected = concat!(
        " ┌───┐  side \n",
        " │ A │  note \n",
        " ├───┤       \n",
        " │ 1 │       \n",
        " └───┘       \n",
    );
    assert_eq!(grid.render(), expected);
}

#[test]
fn grid_keeps_styled_table_intact() {
    let theme = Theme::default();
    let table = tiny_table().render(&theme);
    let grid = Grid::new().push(
        GridRow::new(0)
            .push(GridCell::plain(5, table.trim_end_matches('\n')))
            .push(GridCell::styled(Style::text(), 3, "x")),
    );
    let out = grid.render();
    for line in out.lines() {
        assert_eq!(visible_length(line), 8, "{line:?}");
    }
    assert!(out.starts_with(table.lines().next().unwrap_or_default()));
}

// ============================================================================
// CharMatrix
// ============================================================================

fn stats_box() -> CharMatrix {
    let mut matrix = CharMatrix::new(12, 4);
    matrix.box_with_header(0, 0, 12, 4, "Stats", BORDER);
    matrix.write(2, 1, "ok", POSITIVE);
    matrix.write(2, 2, "fail", NEGATIVE);
    matrix
}

#[test]
fn matrix_box_with_header() {
    insta::assert_snapshot!(stats_box().to_string(), @r"
┌─ Stats ──┐
│ ok       │
│ fail     │
└──────────┘
");
}

#[test]
fn matrix_styled_output_matches_content() {
    let matrix = stats_box();
    let styled = matrix.render();
    let stripped: Vec<String> = strip_escapes(&styled)
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect();
    assert_eq!(stripped.join("\n"), matrix.to_string());
    assert!(styled.contains(&matrix.styles()[POSITIVE].convert("ok")));
}

#[test]
fn matrix_clips_and_resizes() {
    let mut matrix = CharMatrix::new(4, 2);
    assert_eq!(matrix.write(2, 0, "long", TEXT), 2);
    assert_eq!(matrix.write(0, 5, "gone", TEXT), 0);
    matrix.resize(6, 1);
    matrix.write(4, 0, "xy", TEXT);
    assert_eq!(matrix.to_string(), "  loxy");
    matrix.clear_box(0, 0, 3, 1);
    assert_eq!(matrix.to_string(), "   oxy");
}

#[test]
fn matrix_table_with_side_notes() {
    let mut matrix = CharMatrix::new(16, 5);
    let lines = matrix.draw_table(0, 0, &tiny_table(), &Theme::default());
    matrix.write_text(7, 1, &[("rows", TEXT), ("1", POSITIVE)]);
    matrix.write_marked_float(7, 3, "up ", 0.5);
    assert_eq!(lines, 5);
    insta::assert_snapshot!(matrix.to_string(), @r"
┌───┐
│ A │  rows 1
├───┤
│ 1 │  up 0.50
└───┘
");
}

#[test]
fn matrix_table_styles_strip_to_content() {
    let mut matrix = CharMatrix::new(5, 5);
    matrix.draw_table(0, 0, &tiny_table(), &Theme::default());
    let stripped = strip_escapes(&matrix.render());
    assert_eq!(stripped, tiny_table().render_plain().trim_end());
}

// ============================================================================
// Heat map
// ============================================================================

#[test]
fn heatmap_with_delimiter_and_gaps() {
    let mut map = HeatMap::new("Load").delimiter(3).symbols(Symbols::ARROW);
    map.add_line("api", vec![4, 3, 2, 1, -1, 0]);
    map.add_line("db", vec![2, 2]);
    let expected = concat!(
        "Load\n",
        "---------------------\n",
        "api  | ⭡ ⭢ ■ | ⭠   ⭣ \n",
        "db   | ■ ■           \n",
    );
    assert_eq!(map.render_plain(), expected);
}

#[test]
fn heatmap_styled_strips_to_plain() {
    let mut map = HeatMap::new("Load").recent(3);
    map.add_line("api", vec![4, 3, 2, 1, 0]);
    map.add_line("db", vec![2]);
    assert_eq!(strip_escapes(&map.render()), map.render_plain());
}
