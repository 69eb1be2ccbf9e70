use serde::Serialize;

use crate::{
    errors::MemGraphResult,
    graph::MemGraph,
    types::{Label, VertexId},
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub vertices: usize,
    pub edges: usize,
    pub label: String,
    pub labelled_vertices: usize,
    pub max_out_degree: usize,
    pub self_loops: usize,
}

impl GraphStats {
    pub fn collect(graph: &MemGraph, label: &Label) -> Self {
        let mut stats = GraphStats {
            vertices: graph.vertex_count(),
            label: label.to_string(),
            ..Default::default()
        };
        for (id, vertex) in graph.vertices().iter().enumerate() {
            stats.edges += vertex.out_degree();
            stats.max_out_degree = stats.max_out_degree.max(vertex.out_degree());
            stats.self_loops += vertex.outgoing().iter().filter(|&&t| t == id).count();
            if vertex.has_label(label) {
                stats.labelled_vertices += 1;
            }
        }
        stats
    }

    pub fn mean_out_degree(&self) -> f64 {
        if self.vertices == 0 {
            return 0.0;
        }
        self.edges as f64 / self.vertices as f64
    }
}

impl MemGraph {
    pub fn stats(&self, label: &Label) -> GraphStats {
        GraphStats::collect(self, label)
    }

    /// Identifiers of vertices carrying `label`, ascending.
    pub fn vertices_with_label(&self, label: &Label) -> Vec<VertexId> {
        self.vertices()
            .iter()
            .enumerate()
            .filter(|(_, vertex)| vertex.has_label(label))
            .map(|(id, _)| id)
            .collect()
    }
}

/// Outcome of a batch of shortest-path queries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct QuerySummary {
    pub queries: usize,
    pub found: usize,
    pub missing: usize,
    pub one_hop: usize,
    pub total_hops: usize,
    pub longest: usize,
}

impl QuerySummary {
    pub fn run(
        graph: &MemGraph,
        pairs: &[(VertexId, VertexId)],
        label: &Label,
    ) -> MemGraphResult<Self> {
        let mut summary = QuerySummary {
            queries: pairs.len(),
            ..Default::default()
        };
        for &(start, end) in pairs {
            let path = graph.shortest_path(start, end, label)?;
            match path.len().checked_sub(1) {
                Some(hops) => {
                    summary.found += 1;
                    summary.total_hops += hops;
                    summary.longest = summary.longest.max(hops);
                    if hops == 1 {
                        summary.one_hop += 1;
                    }
                }
                None => summary.missing += 1,
            }
        }
        Ok(summary)
    }
}
