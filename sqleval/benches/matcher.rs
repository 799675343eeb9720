use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sqleval::{matcher, rouge, tokenize};

const REFERENCE: &str = "SELECT T1.name, count(*) FROM singer AS T1 JOIN concert AS T2 ON T1.singer_id = T2.singer_id WHERE T2.year = 2014 GROUP BY T1.name ORDER BY count(*) DESC";
const GENERATED: &str = "SELECT name, count(*) FROM singer JOIN concert ON singer.singer_id = concert.singer_id GROUP BY name";

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_sql", |b| {
        b.iter(|| tokenize::tokenize_sql(black_box(REFERENCE)))
    });
}

fn bench_compare(c: &mut Criterion) {
    let reference = tokenize::tokenize_sql(REFERENCE);
    let generated = tokenize::tokenize_sql(GENERATED);
    c.bench_function("compare_tokens", |b| {
        b.iter(|| matcher::compare_tokens(black_box(&reference), black_box(&generated)))
    });
}

fn bench_rouge(c: &mut Criterion) {
    c.bench_function("rouge_l", |b| {
        b.iter(|| rouge::rouge_l(black_box(GENERATED), black_box(REFERENCE)))
    });
}

criterion_group!(benches, bench_tokenize, bench_compare, bench_rouge);
criterion_main!(benches);
