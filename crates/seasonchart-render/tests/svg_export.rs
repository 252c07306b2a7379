//! Tests for SVG export of the visual tree

use seasonchart_core::{RawDate, RawRecord, RecordKey};
use seasonchart_render::{Chart, ChartConfig, ChartRenderer, ChartState, SvgExporter};
use tempfile::tempdir;

fn garden() -> Vec<RawRecord> {
    vec![
        RawRecord::new(RecordKey::Static(0))
            .name("Carrot")
            .season_one(RawDate::new(3.0, 1.0), RawDate::new(6.0, 1.0))
            .season_two(RawDate::new(8.0, 1.0), RawDate::new(9.0, 20.0)),
        RawRecord::new(RecordKey::Static(1))
            .name("Onion")
            .season_one(RawDate::new(2.0, 15.0), RawDate::new(4.0, 25.0)),
    ]
}

#[test]
fn export_writes_svg_file() {
    let mut state = ChartState::default();
    state.update(&garden());

    let dir = tempdir().unwrap();
    let path = dir.path().join("chart.svg");
    SvgExporter::new().export(&state, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("<svg"));
    assert!(content.contains("Carrot"));
    assert!(content.contains("Onion"));
}

#[test]
fn export_to_missing_directory_fails() {
    let state = ChartState::default();
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("chart.svg");
    assert!(SvgExporter::new().export(&state, &path).is_err());
}

#[test]
fn zero_first_start_suppresses_second_bar() {
    // Onion starts January 1st, which normalizes to 0
    let records = vec![
        garden().remove(0),
        RawRecord::new(RecordKey::Static(1))
            .name("Onion")
            .season_one(RawDate::new(1.0, 1.0), RawDate::new(4.0, 25.0)),
    ];
    let mut state = ChartState::default();
    state.update(&records);
    let svg = SvgExporter::new().render(&state).unwrap();
    // Carrot has two bars, Onion has one
    assert_eq!(svg.matches("class=\"bar\"").count(), 3);
}

#[test]
fn nonzero_first_start_draws_empty_second_bar() {
    let mut state = ChartState::default();
    state.update(&garden());
    let svg = SvgExporter::new().render(&state).unwrap();
    // Onion has no second season, but its first season starts mid-February
    assert_eq!(svg.matches("class=\"bar\"").count(), 4);

    let onion = state.timeline().group(RecordKey::Static(1)).unwrap();
    let ghost = onion.season_two.as_ref().unwrap();
    assert_eq!((ghost.x, ghost.width), (0.0, 0.0));
}

#[test]
fn removed_row_disappears_from_markup() {
    let mut chart = Chart::new(ChartConfig::default());
    chart.load(garden());
    chart.load(garden().into_iter().skip(1).collect());

    let svg = SvgExporter::new().render(chart.state()).unwrap();
    assert!(!svg.contains("Carrot"));
    assert!(svg.contains("data-key=\"static-1\""));
    assert_eq!(svg.matches("class=\"row\"").count(), 1);
}

#[test]
fn body_height_matches_row_count() {
    let config = ChartConfig::default().row_height(30.0);
    let mut state = ChartState::new(config);
    state.update(&garden());
    let svg = SvgExporter::new().render(&state).unwrap();
    assert!(svg.contains("height=\"60\""));
}
