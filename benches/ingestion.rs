//! Criterion benchmarks for registry ingestion.
//!
//! Measures reading a generated in-memory extract at several sizes, with and without a
//! predicate.
//!
//! ```bash
//! cargo bench --bench ingestion
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use nyslad::ingestion::columns;
use nyslad::ingestion::csv::{read_licenses_from_reader, reader_builder};

const ROW_COUNTS: &[usize] = &[1_000, 10_000, 50_000];

const COUNTIES: &[&str] = &["New York", "Kings", "Queens", "Bronx", "Richmond"];

fn generate_extract(rows: usize) -> String {
    let mut out = columns::ALL.join(",");
    out.push('\n');
    for i in 0..rows {
        let county = COUNTIES[i % COUNTIES.len()];
        let lng = -74.0 + (i % 1000) as f64 * 0.0001;
        let lat = 40.6 + (i % 700) as f64 * 0.0001;
        let dba = if i % 3 == 0 { "" } else { "Corner Spot" };
        out.push_str(&format!(
            "{i:04}-23-{i:06},{county},1,0002,Wholesale Beer,ACME {i} INC,{dba},{i} GRAND ST,,NEW YORK,New York,10001,\
             07/18/2025,07/18/2025,07/18/2025,06/30/2026,,{i},,POINT ({lng} {lat})\n"
        ));
    }
    out
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_licenses");
    for &rows in ROW_COUNTS {
        let input = generate_extract(rows);
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(BenchmarkId::new("all", rows), &input, |b, input| {
            b.iter(|| {
                let mut rdr = reader_builder().from_reader(input.as_bytes());
                black_box(read_licenses_from_reader(&mut rdr, |_| true).unwrap())
            })
        });

        group.bench_with_input(BenchmarkId::new("one_county", rows), &input, |b, input| {
            b.iter(|| {
                let mut rdr = reader_builder().from_reader(input.as_bytes());
                black_box(
                    read_licenses_from_reader(&mut rdr, |lic| lic.premises_county == "Kings").unwrap(),
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_read);
criterion_main!(benches);
