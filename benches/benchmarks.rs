use std::iter;

use chainbloom::BloomFilter;
use criterion::Criterion;

fn key() -> String {
    let rng = fastrand::Rng::new();
    iter::repeat_with(|| rng.alphanumeric()).take(32).collect()
}

fn populate(bf: &mut BloomFilter<str>, n: usize) {
    for _ in 0..n {
        let item = key();
        bf.insert(&item);
    }
}

fn filter(n: usize) -> BloomFilter<str> {
    BloomFilter::new(n, 4, 0.05).expect("valid sizing parameters")
}

fn bench_bloom_filter_insert(c: &mut Criterion) {
    for n in [1000, 100_000] {
        c.bench_function(&format!("insert-{}", n), |b| {
            let mut bf = filter(n);

            b.iter(|| {
                let item = key();
                bf.insert(&item);
            });
        });
    }
}

fn bench_bloom_filter_find(c: &mut Criterion) {
    for n in [1000, 100_000] {
        c.bench_function(&format!("find-{}", n), |b| {
            let mut bf = filter(n);
            populate(&mut bf, n);

            b.iter(|| {
                let item = key();
                bf.find(&item);
            });
        });
    }
}

criterion::criterion_group!(benches, bench_bloom_filter_insert, bench_bloom_filter_find);
criterion::criterion_main!(benches);
