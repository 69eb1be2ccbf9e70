use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use memgraph::{
    Label, MemGraph,
    bench_utils::{GraphShape, generate_graph},
};

const RANDOM_SEED: u64 = 0xB25F;
const SAMPLE_SIZE: usize = 20;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);

fn bench_scales() -> &'static [usize] {
    #[cfg(feature = "bench-ci")]
    {
        &[1_000, 10_000]
    }
    #[cfg(not(feature = "bench-ci"))]
    {
        &[10_000, 100_000]
    }
}

fn bench_vertex_insert(c: &mut Criterion) {
    let label = Label::new("A");
    let mut group = c.benchmark_group("insert_vertices");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for &nodes in bench_scales() {
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &nodes, |b, &nodes| {
            b.iter(|| {
                let mut graph = MemGraph::new();
                for _ in 0..nodes {
                    let id = graph.create_vertex();
                    graph.add_label(id, &label).expect("label");
                }
                graph
            });
        });
    }
    group.finish();
}

fn bench_edge_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_edges");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for &nodes in bench_scales() {
        let dataset = generate_graph(
            GraphShape::Random {
                edges: nodes.saturating_mul(5),
            },
            nodes,
            RANDOM_SEED + nodes as u64,
        );
        group.bench_with_input(
            BenchmarkId::from_parameter(nodes),
            &dataset,
            |b, dataset| {
                b.iter(|| {
                    let mut graph = MemGraph::with_capacity(dataset.nodes());
                    for _ in 0..dataset.nodes() {
                        graph.create_vertex();
                    }
                    for &(from, to) in &dataset.edges {
                        graph.create_edge(from, to).expect("edge");
                    }
                    graph
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    name = insert_benches;
    config = Criterion::default();
    targets = bench_vertex_insert, bench_edge_insert
);
criterion_main!(insert_benches);
