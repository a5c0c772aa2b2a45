// benches/extract.rs
use criterion::{ criterion_group, criterion_main, Criterion, black_box };
use scraper::Html;

use steam_scrape::{ report::NullReport, specs };

const PAGE: &str = include_str!("../tests/fixtures/profile.html");

fn bench_extract(c: &mut Criterion) {
    c.bench_function("parse_document", |b| {
        b.iter(|| Html::parse_document(black_box(PAGE)))
    });

    let doc = Html::parse_document(PAGE);
    c.bench_function("extract_profile", |b| {
        b.iter(|| {
            let rec = specs::extract_profile(black_box(&doc), &mut NullReport);
            black_box(rec.friends.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
