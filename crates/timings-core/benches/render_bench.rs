// File: crates/timings-core/benches/render_bench.rs
// Summary: Criterion benchmarks for loading a large results file and rendering the chart to PNG.

use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timings_core::{build_chart, RenderOptions, ResultsTable, VariantChoice};

/// Headered egrep results for `n` synthetic words.
fn results_csv(n: usize) -> String {
    let mut csv = String::from("word,AutomateTime,isThereAWordAutomate,KMPTime,isThereAWordKMP,egrepTime\n");
    for i in 0..n {
        let t = i as f64;
        csv.push_str(&format!(
            "word{i},{:.1},true,{:.1},true,{:.1}\n",
            10.0 + (t * 0.3).sin() * 4.0,
            6.0 + (t * 0.7).cos() * 2.0,
            1.0 + t * 0.01
        ));
    }
    csv
}

fn bench_load(c: &mut Criterion) {
    let csv = results_csv(5_000);
    c.bench_function("load_table_5000", |b| {
        b.iter(|| -> Result<()> {
            let table = ResultsTable::from_reader(csv.as_bytes(), VariantChoice::Auto)?;
            black_box(table);
            Ok(())
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[50usize, 500usize] {
        group.bench_function(format!("words_{n}"), |b| {
            let csv = results_csv(n);
            let table = ResultsTable::from_reader(csv.as_bytes(), VariantChoice::Auto).expect("load");
            let chart = build_chart(&table);
            let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = chart.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_load, bench_render);
criterion_main!(benches);
