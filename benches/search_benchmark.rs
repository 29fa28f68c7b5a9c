use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stock_search::{rank_candidates, Candidate};

fn benchmark_rank_candidates(c: &mut Criterion) {
    // Roughly the size of a full A-share listing
    let table: Vec<Candidate> = (0..5000)
        .map(|i| {
            let exchange = if i % 2 == 0 { "sh" } else { "sz" };
            Candidate::new(
                &format!("{}{:06}", exchange, 600000 - i),
                &format!("测试银行{}号", i),
            )
        })
        .collect();

    c.bench_function("rank_candidates_code", |b| {
        b.iter(|| rank_candidates(black_box(&table), black_box("6000"), black_box(10)))
    });

    c.bench_function("rank_candidates_name", |b| {
        b.iter(|| rank_candidates(black_box(&table), black_box("银行"), black_box(10)))
    });
}

criterion_group!(benches, benchmark_rank_candidates);
criterion_main!(benches);
