use gossip_pet::prelude::*;
use testing::{circulant, petersen, rook_4x4, shrikhande, shuffle_labels, GraphIter};

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use petgraph::graph::UnGraph;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256Plus;

fn iso_all(graphs: impl IntoIterator<Item = (UnGraph<(), ()>, UnGraph<(), ()>)>) -> bool {
    graphs
        .into_iter()
        .all(|(g, h)| g.potentially_isomorphic(&h))
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = Xoshiro256Plus::seed_from_u64(0);

    let graphs = Vec::from_iter(
        GraphIter::default()
            .take(100)
            .map(|g| (g.clone(), shuffle_labels(g, &mut rng))),
    );
    c.bench_function("random pairs", move |b| {
        b.iter_batched(
            || graphs.clone(),
            |g| iso_all(black_box(g)),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("petersen fingerprint", |b| {
        let g = petersen();
        b.iter(|| black_box(&g).fingerprint())
    });

    c.bench_function("circulant pair", |b| {
        let g1 = circulant(13, &[1, 3, 4]);
        let g2 = circulant(13, &[1, 3, 6]);
        b.iter(|| black_box(&g1).potentially_isomorphic(black_box(&g2)))
    });

    c.bench_function("rook vs shrikhande", |b| {
        let g1 = rook_4x4();
        let g2 = shrikhande();
        b.iter(|| black_box(&g1).potentially_isomorphic(black_box(&g2)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
