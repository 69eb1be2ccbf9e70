use std::thread;

use memgraph::{Label, MemGraph, MemGraphError, SharedGraph};

#[test]
fn test_shared_graph_concurrent_writers() {
    let shared = SharedGraph::new();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let graph = shared.clone();
            thread::spawn(move || {
                for _ in 0..250 {
                    let id = graph.create_vertex();
                    graph.add_label(id, "A").expect("label");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer");
    }
    assert_eq!(shared.vertex_count(), 1_000);
    assert!(shared.vertex_has_label(999, &Label::new("A")));
    assert_eq!(shared.stats(&Label::new("A")).labelled_vertices, 1_000);
}

#[test]
fn test_shared_graph_queries_match_inner_store() {
    let label = Label::new("A");
    let mut graph = MemGraph::new();
    for _ in 0..3 {
        let id = graph.create_vertex();
        graph.add_label(id, &label).expect("label");
    }
    let shared = SharedGraph::from_graph(graph);
    shared.create_edge(0, 1).expect("edge");
    shared.create_edge(1, 2).expect("edge");
    shared.create_edge(2, 0).expect("edge");
    assert!(shared.exists_edge(2, 0));
    assert!(shared.exists_vertex(2));
    assert_eq!(shared.shortest_path(0, 0, &label).expect("path"), vec![0, 1, 2, 0]);

    shared.remove_label(1, &label).expect("remove");
    assert!(shared.shortest_path(0, 0, &label).expect("path").is_empty());
    assert_eq!(shared.create_edge(0, 3), Err(MemGraphError::NoVertex(3)));

    let edges = shared.with_graph(|graph| graph.edge_count());
    assert_eq!(edges, 3);
}
