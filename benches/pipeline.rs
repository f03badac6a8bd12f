use covid_insight::{derive_views, RawTable};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fmt::Write;

const HEADER: &str = "iso_code,location,date,total_cases,total_deaths,stringency_index,people_vaccinated,people_fully_vaccinated,total_boosters\n";

/// 50 locations x 1000 days, roughly the shape of the real table.
fn synthetic_table() -> RawTable {
    let start = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let mut csv = String::from(HEADER);
    for loc in 0..50 {
        for day in 0..1000u64 {
            let date = start + chrono::Days::new(day);
            let cases = day * 100;
            writeln!(
                csv,
                "L{loc:02},Location {loc},{date},{cases},{},{},{},{},",
                cases / 50,
                (day % 100) as f64,
                day * 40,
                day * 30,
            )
            .unwrap();
        }
    }
    RawTable::from_csv_bytes(csv.into_bytes()).unwrap()
}

fn bench_derive_views(c: &mut Criterion) {
    let table = synthetic_table();
    c.bench_function("derive_views", |b| {
        b.iter(|| derive_views(black_box(&table), black_box("Location 25")))
    });
    c.bench_function("locations", |b| b.iter(|| black_box(&table).locations()));
}

criterion_group!(benches, bench_derive_views);
criterion_main!(benches);
