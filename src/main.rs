//! termtable - demo of tables, grids and heat maps

use anyhow::{Context, Result};

use termtable::table::marker::{NEGATIVE, POSITIVE};
use termtable::term::{palette, GridAlign};
use termtable::{Border, Grid, GridCell, GridRow, HeatMap, KeyValueTable, Style, Table, ThemeConfig};

fn main() -> Result<()> {
    let config = ThemeConfig::load().context("Failed to load theme")?;
    let styled = atty::is(atty::Stream::Stdout);
    let theme = config.table_theme();

    let tables = demo_tables(&config);
    let render = |table: &Table| {
        if styled {
            table.render(&theme)
        } else {
            table.render_plain()
        }
    };

    for table in &tables {
        println!("{}", render(table));
    }

    let mut summary = KeyValueTable::new("Summary");
    summary.add_row("Tables", tables.len().to_string());
    summary.add_float("Ratio", 0.75, POSITIVE);
    println!("{}", render(summary.table()));

    let left = render(&tables[0].sub(0, 3));
    let right = render(&tables[1].filter_recent(4));
    let grid = demo_grid(
        left.trim_end_matches('\n'),
        right.trim_end_matches('\n'),
        styled,
    );
    println!("{}", grid);

    let heatmap = demo_heatmap(&config);
    if styled {
        print!("{}", heatmap.render());
    } else {
        print!("{}", heatmap.render_plain());
    }

    Ok(())
}

fn demo_tables(config: &ThemeConfig) -> Vec<Table> {
    let mut first = Table::new()
        .with_name("Demo")
        .with_headers(["H1", "H2", "H3", "H4", "H5"])
        .with_border(config.border());
    let special = first.add_style(Style::new("#ff00ff", "#00ff00", false));
    for i in 1..6 {
        let marker = if i % 2 == 0 { NEGATIVE } else { POSITIVE };
        first
            .create_row()
            .add_default_text(format!("Test {i}"))
            .add_int(i, marker)
            .add_float(i as f64, marker)
            .add_marked_float(3.0 - i as f64)
            .add_text("For testing", special);
    }

    let mut second = Table::new()
        .with_headers(["H1", "H2"])
        .with_border(Border::ROUNDED);
    for i in 0..8 {
        let marker = if i % 2 == 0 { POSITIVE } else { NEGATIVE };
        second
            .create_row()
            .add_default_text(format!("Row {i}"))
            .add_int(i * 2 + 200, marker);
    }
    second.sort("H2");

    vec![first, second]
}

fn demo_grid(left: &str, right: &str, styled: bool) -> Grid {
    let cell = |style: Style, width: usize, text: &str| {
        if styled {
            GridCell::styled(style, width, text)
        } else {
            GridCell::plain(width, text)
        }
    };
    let red = Style::new("#ff0000", "", true);
    let rule = Style::new("#ababab", "", false);
    let ruler = "|123456789".repeat(7);

    Grid::new()
        .push(
            GridRow::new(2)
                .push(cell(Style::text(), 20, "Hello\nworld"))
                .push(cell(Style::text_odd(), 20, "Second text"))
                .push(cell(Style::text(), 20, "Third one").align(GridAlign::Right)),
        )
        .push(
            GridRow::new(0)
                .push(cell(rule, 20, &"-".repeat(20)))
                .push(cell(rule, 20, &"-".repeat(20)))
                .push(cell(rule, 20, &"-".repeat(20))),
        )
        .push(
            GridRow::new(2)
                .push(cell(red, 20, "Here\nis\nmuch\nmore"))
                .push(cell(red, 20, "Simple\n\nTest"))
                .push(cell(red, 20, "1\n2\n3\n4\n5")),
        )
        .push(GridRow::new(0).push(cell(Style::new(palette::GRAY, "", false), 100, &ruler)))
        .push(
            GridRow::new(2)
                .push(GridCell::plain(60, left))
                .push(GridCell::plain(30, right)),
        )
}

fn demo_heatmap(config: &ThemeConfig) -> HeatMap {
    let mut heatmap = config.style_heatmap(HeatMap::new("Heatmap").delimiter(5));
    heatmap.add_line("Row 1", vec![0, 1, 2, 3, 4, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4]);
    heatmap.add_line("Next Row", vec![0, 1, 0, 1, 0, 1, 2, 2, 3, 3, 4, 4, 3, 2, 1, 0]);
    let line = heatmap.create_line("Third one");
    for value in [0, 0, 0, 0, 1, 1, 1, 1, 2, 2, -1, 2, 3, 3, 3, 3, 4, 4, 4, 4] {
        heatmap.add_value(line, value);
    }
    heatmap
}
