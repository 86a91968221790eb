use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use xlsxport::{build_xlsx, CellValue, Column, ExportOptions, Row};

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_xlsx");
    group.sample_size(10); // Reduce samples for large benchmarks

    let columns = vec![
        Column::new("id", "ID"),
        Column::new("name", "Name"),
        Column::new("value", "Value"),
    ];

    for size in [100, 1000, 5000, 10000].iter() {
        let rows: Vec<Row> = (0..*size)
            .map(|i| {
                Row::from_iter([
                    ("id".to_string(), CellValue::from(i as f64)),
                    ("name".to_string(), CellValue::from(format!("Name_{}", i))),
                    ("value".to_string(), CellValue::from((i * 100) as f64)),
                ])
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let bytes = build_xlsx(
                    black_box(&columns),
                    black_box(&rows),
                    &ExportOptions::default(),
                );
                black_box(bytes);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_build);
criterion_main!(benches);
