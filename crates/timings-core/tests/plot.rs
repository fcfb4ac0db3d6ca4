// File: crates/timings-core/tests/plot.rs
// Purpose: The comparison chart carries the right ticks, series values, colors and Y bound.

mod common;

use timings_core::plot::{self, BLUE, GREEN, RED};
use timings_core::{build_chart, ResultsTable, SeriesType, Variant, VariantChoice};

fn chart_from(csv: &str) -> timings_core::Chart {
    let table = ResultsTable::from_reader(csv.as_bytes(), VariantChoice::Auto).expect("load");
    build_chart(&table)
}

#[test]
fn automate_kmp_scenario() {
    let chart = chart_from(common::TWO_WORDS);

    assert_eq!(chart.x_axis.tick_labels(), vec!["alpha", "beta"]);
    assert_eq!(chart.x_axis.tick_rotation, 90.0);
    assert_eq!(chart.title, "Comparison of Ahu-Ullman and KMP Execution Times");
    assert_eq!(chart.x_axis.label, "Words");
    assert_eq!(chart.y_axis.label, "Time (ms)");
    assert!(chart.legend && chart.grid);
    assert_eq!(chart.y_axis.bottom, None);

    // dots then lines for each method
    assert_eq!(chart.series.len(), 4);
    for s in chart.series_with_color(BLUE) {
        assert_eq!(s.values(), vec![1.2, 5.6]);
    }
    for s in chart.series_with_color(RED) {
        assert_eq!(s.values(), vec![3.4, 2.1]);
    }
    assert_eq!(chart.series_with_color(BLUE).count(), 2);
    assert_eq!(chart.series_with_color(RED).count(), 2);
    assert_eq!(chart.series_with_color(GREEN).count(), 0);

    let kinds: Vec<_> = chart.series.iter().map(|s| (s.series_type, s.label.as_str())).collect();
    assert_eq!(
        kinds,
        vec![
            (SeriesType::Scatter, "Method Automate Time (Dots)"),
            (SeriesType::Scatter, "Method KMP Time (Dots)"),
            (SeriesType::Line, "Method KMP Time (Line)"),
            (SeriesType::Line, "Method Automate Time (Line)"),
        ]
    );
}

#[test]
fn automate_kmp_uses_positional_index() {
    let chart = chart_from(common::TWO_WORDS);
    let xs: Vec<f64> = chart.series[0].data_xy.iter().map(|&(x, _)| x).collect();
    assert_eq!(xs, vec![0.0, 1.0]);
    let ticks: Vec<f64> = chart.x_axis.ticks.iter().map(|t| t.position).collect();
    assert_eq!(ticks, xs);
}

#[test]
fn egrep_scenario() {
    let chart = chart_from(common::TWO_WORDS_EGREP);

    assert_eq!(chart.title, "Comparison of Ahu-Ullman, KMP & egrep Execution Times");
    assert_eq!(chart.series.len(), 3);
    assert!(chart.series.iter().all(|s| s.series_type == SeriesType::LineMarkers));

    let green: Vec<_> = chart.series_with_color(GREEN).collect();
    assert_eq!(green.len(), 1);
    assert_eq!(green[0].values(), vec![0.9, 1.1]);
    assert_eq!(green[0].label, "Method egrep Time");

    assert_eq!(chart.y_axis.bottom, Some(0.0));
    assert_eq!(chart.y_axis.min, 0.0);
    assert!(chart.y_axis.max >= 5.6);
}

#[test]
fn egrep_bottom_stays_zero_with_negative_times() {
    let csv = "\
word,AutomateTime,isThereAWordAutomate,KMPTime,isThereAWordKMP,egrepTime
alpha,-3,true,1,true,2
beta,4,true,-1,true,1
";
    let chart = chart_from(csv);
    assert_eq!(chart.y_axis.bottom, Some(0.0));
    assert_eq!(chart.y_axis.min, 0.0);
    // data values are kept as read even when below the axis
    assert_eq!(chart.series_with_color(BLUE).next().unwrap().values(), vec![-3.0, 4.0]);
}

#[test]
fn egrep_bottom_zero_when_all_values_negative() {
    let csv = "\
word,AutomateTime,isThereAWordAutomate,KMPTime,isThereAWordKMP,egrepTime
alpha,-3,true,-1,true,-2
";
    let chart = chart_from(csv);
    assert_eq!(chart.y_axis.min, 0.0);
    assert!(chart.y_axis.max > chart.y_axis.min);
}

#[test]
fn one_tick_per_row() {
    let mut csv = String::new();
    for i in 0..25 {
        csv.push_str(&format!("w{i},{i},1,{},0\n", i * 2));
    }
    let chart = chart_from(&csv);
    assert_eq!(chart.x_axis.ticks.len(), 25);
    assert_eq!(chart.x_axis.tick_labels()[24], "w24");
    for s in &chart.series {
        assert_eq!(s.len(), 25);
    }
}

#[test]
fn plotted_values_match_file_values() {
    let csv = "a,0.5,1,7,1\nb,2.25,1,8,1\nc,1e2,0,9.5,0\n";
    let chart = chart_from(csv);
    let table = ResultsTable::from_reader(csv.as_bytes(), VariantChoice::Auto).unwrap();
    for (i, row) in table.rows().iter().enumerate() {
        for s in chart.series_with_color(BLUE) {
            assert_eq!(s.data_xy[i].1, row.automate_time);
        }
        for s in chart.series_with_color(RED) {
            assert_eq!(s.data_xy[i].1, row.kmp_time);
        }
    }
}

#[test]
fn repeated_word_shares_category_position() {
    let csv = "\
word,AutomateTime,isThereAWordAutomate,KMPTime,isThereAWordKMP,egrepTime
the,1,true,1,true,1
cat,2,true,2,true,2
the,3,true,3,true,3
";
    let table = ResultsTable::from_reader(csv.as_bytes(), VariantChoice::Auto).unwrap();
    assert_eq!(plot::x_positions(&table), vec![0.0, 1.0, 0.0]);
    let chart = build_chart(&table);
    assert_eq!(chart.x_axis.tick_labels(), vec!["the", "cat", "the"]);
}

#[test]
fn x_axis_covers_every_word_with_margin() {
    let chart = chart_from(common::TWO_WORDS);
    assert!(chart.x_axis.min < 0.0);
    assert!(chart.x_axis.max > 1.0);
}

#[test]
fn empty_table_gives_empty_series() {
    let table = ResultsTable::new(Variant::WithEgrep, Vec::new());
    let chart = build_chart(&table);
    assert_eq!(chart.series.len(), 3);
    assert!(chart.series.iter().all(|s| s.is_empty()));
    assert!(chart.x_axis.ticks.is_empty());
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 1.0));
}
