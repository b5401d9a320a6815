//! Unit tests for heat map layout

use termtable::heatmap::{ColorScheme, Symbols, EMPTY};
use termtable::term::{strip_escapes, visible_length};
use termtable::HeatMap;

fn weekly() -> HeatMap {
    let mut map = HeatMap::new("Week");
    let cpu = map.create_line("cpu");
    for value in [4, 3, 2, 1, 0] {
        map.add_value(cpu, value);
    }
    let disk = map.create_line("disk");
    map.add_value(disk, -3);
    map.add_value(disk, 2);
    map
}

#[test]
fn lines_share_one_width() {
    let map = weekly();
    let plain = map.render_plain();
    let lines: Vec<&str> = plain.lines().collect();
    assert_eq!(lines[0], "Week");
    let width = visible_length(lines[1]);
    for line in &lines[2..] {
        assert_eq!(visible_length(line), width, "{line:?}");
    }
}

#[test]
fn empty_slots_render_blank() {
    let map = weekly();
    assert_eq!(map.lines()[1].entries, vec![EMPTY, 2]);
    let plain = map.render_plain();
    assert!(plain.contains("disk    ■       \n"), "{plain}");
}

#[test]
fn glyphs_follow_bucket() {
    let mut map = HeatMap::new("").symbols(Symbols::TRIANGLE).padding(0);
    map.add_line("t", vec![0, 1, 2, 3, 4]);
    assert_eq!(map.render_plain(), "\n--------\nt  ⯆⯇◼⯈⯅\n");
}

#[test]
fn styled_buckets_use_scheme_colors() {
    let map = weekly();
    let out = map.render();
    let scheme = ColorScheme::even();
    assert!(out.contains(&scheme.get(4).convert("■ ")));
    assert!(out.contains(&scheme.get(0).convert("■ ")));
    assert_eq!(strip_escapes(&out), map.render_plain());
}

#[test]
fn empty_map_has_only_title_and_rule() {
    let map = HeatMap::new("Nothing");
    assert_eq!(map.render_plain(), "Nothing\n--\n");
}
