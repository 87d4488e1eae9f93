use criterion::{criterion_group, criterion_main, Criterion};
use ridgematch::{extract, thin, MatchConfig, Matcher, Minutia, PixelGrid};
use std::hint::black_box;

fn make_ridges(rows: usize, cols: usize) -> PixelGrid {
    let mut grid = PixelGrid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            // Slanted bands three pixels thick, broken every so often.
            let band = (row + col / 2) % 9 < 3;
            let gap = (col * 7 + row * 3) % 61 < 4;
            grid.set(row, col, band && !gap).unwrap();
        }
    }
    grid
}

fn make_minutiae(count: i32, row_shift: i32, col_shift: i32) -> Vec<Minutia> {
    (0..count)
        .map(|i| {
            Minutia::new(
                20 + 29 * (i % 6) + (i * 7) % 5 + row_shift,
                15 + 31 * (i / 6) + (i * 3) % 4 + col_shift,
                (i * 53 + 40) % 280 + 30,
            )
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let ridges = make_ridges(128, 128);
    c.bench_function("thin_128", |b| {
        b.iter(|| black_box(thin(black_box(&ridges))));
    });

    let skeleton = thin(&ridges);
    c.bench_function("extract_128", |b| {
        b.iter(|| black_box(extract(black_box(&skeleton))));
    });
}

fn bench_matcher(c: &mut Criterion) {
    let reference = make_minutiae(36, 0, 0);
    let shifted = make_minutiae(36, 6, -4);
    let unrelated: Vec<_> = make_minutiae(36, 0, 0)
        .into_iter()
        .map(|m| Minutia::new(m.col, m.row, (m.orientation + 97) % 360))
        .collect();

    let matcher = Matcher::default();
    c.bench_function("match_shifted_seq", |b| {
        b.iter(|| black_box(matcher.matches(&reference, &shifted)));
    });
    c.bench_function("match_unrelated_seq", |b| {
        b.iter(|| black_box(matcher.matches(&reference, &unrelated)));
    });

    if cfg!(feature = "rayon") {
        let matcher_par = Matcher::new(MatchConfig {
            parallel: true,
            ..MatchConfig::default()
        })
        .unwrap();
        c.bench_function("match_unrelated_parallel", |b| {
            b.iter(|| black_box(matcher_par.matches(&reference, &unrelated)));
        });
    }
}

criterion_group!(benches, bench_pipeline, bench_matcher);
criterion_main!(benches);
