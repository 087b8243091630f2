use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fx_graph::graph::ExchangeGraph;
use fx_graph::store::StoreKind;

/// Ring of `n` symbols plus deterministic chords.
fn build_graph(n: usize, kind: StoreKind) -> ExchangeGraph<String> {
    let mut graph = ExchangeGraph::with_store(kind);
    for i in 0..n {
        graph.add_vertex(format!("C{:03}", i));
    }
    for i in 0..n {
        let next = (i + 1) % n;
        graph.add_edge(
            &format!("C{:03}", i),
            &format!("C{:03}", next),
            1.0 + (i % 7) as f64,
        );
        let chord = (i * 5 + 3) % n;
        if chord != i {
            graph.add_edge(
                &format!("C{:03}", i),
                &format!("C{:03}", chord),
                2.0 + (i % 11) as f64,
            );
        }
    }
    graph
}

fn benchmark_all_pairs(c: &mut Criterion) {
    let dense = build_graph(64, StoreKind::DenseMatrix);
    let sparse = build_graph(64, StoreKind::SparseList);

    c.bench_function("all_pairs_dense_64", |b| {
        b.iter(|| black_box(dense.all_pairs_distances()))
    });
    c.bench_function("all_pairs_sparse_64", |b| {
        b.iter(|| black_box(sparse.all_pairs_distances()))
    });
}

fn benchmark_best_route(c: &mut Criterion) {
    let graph = build_graph(128, StoreKind::DenseMatrix);

    c.bench_function("best_route_128", |b| {
        b.iter(|| black_box(graph.best_route("C000", "C063")))
    });
}

fn benchmark_vertex_churn(c: &mut Criterion) {
    c.bench_function("vertex_churn_dense_64", |b| {
        b.iter(|| {
            let mut graph = build_graph(64, StoreKind::DenseMatrix);
            for i in (0..64).step_by(4) {
                graph.remove_vertex(&format!("C{:03}", i));
            }
            black_box(graph.len())
        })
    });
}

criterion_group!(
    benches,
    benchmark_all_pairs,
    benchmark_best_route,
    benchmark_vertex_churn
);
criterion_main!(benches);
