use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::io::Write;

use tempfile::TempDir;
use wardrobe_processor::models::Label;
use wardrobe_processor::processors::RecommendationEngine;
use wardrobe_processor::units::{fahrenheit_to_celsius, UnitClassifier};

// Create an input file with the given number of synthetic locations
fn create_test_input(dir: &TempDir, rows: usize) -> std::path::PathBuf {
    let path = dir.path().join("input.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "location,temperature").unwrap();
    for i in 0..rows {
        writeln!(file, "City {},{}", i, (i % 40) as i64 - 5).unwrap();
    }
    path
}

fn benchmark_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute_by_size");

    for &rows in &[10, 100, 1000] {
        let dir = TempDir::new().unwrap();
        let input = create_test_input(&dir, rows);
        let fahrenheit: Vec<String> = (0..rows / 2).map(|i| format!("City {}", i)).collect();
        let engine = RecommendationEngine::new(
            input,
            dir.path().join("output.csv"),
            UnitClassifier::new(fahrenheit),
        );

        group.bench_with_input(BenchmarkId::new("rows", rows), &rows, |b, _| {
            b.iter(|| black_box(engine.recompute_all().unwrap()))
        });
    }
    group.finish();
}

fn benchmark_policy(c: &mut Criterion) {
    let temperatures: Vec<f64> = (-40..=104).map(f64::from).collect();

    c.bench_function("classify_and_label", |b| {
        b.iter(|| {
            let mut jumpers = 0;
            for &fahrenheit in &temperatures {
                let celsius = fahrenheit_to_celsius(fahrenheit);
                if Label::for_celsius(celsius) == Label::Jumper {
                    jumpers += 1;
                }
            }
            black_box(jumpers)
        })
    });
}

criterion_group!(benches, benchmark_recompute, benchmark_policy);
criterion_main!(benches);
