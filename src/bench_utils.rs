use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    errors::MemGraphResult,
    graph::MemGraph,
    types::{Label, VertexId},
};

#[derive(Clone, Debug)]
pub struct GraphDataset {
    pub vertices: usize,
    pub edges: Vec<(VertexId, VertexId)>,
}

impl GraphDataset {
    pub fn nodes(&self) -> usize {
        self.vertices
    }

    pub fn edges(&self) -> usize {
        self.edges.len()
    }

    pub fn out_degrees(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.vertices];
        for &(from, _) in &self.edges {
            counts[from] += 1;
        }
        counts
    }

    pub fn hub_index(&self) -> usize {
        let mut best = (0usize, 0usize);
        for (idx, deg) in self.out_degrees().into_iter().enumerate() {
            if deg > best.0 {
                best = (deg, idx);
            }
        }
        best.1
    }

    /// Builds a store holding this dataset, with every vertex tagged `label`.
    pub fn materialize(&self, label: &Label) -> MemGraphResult<MemGraph> {
        let mut graph = MemGraph::with_capacity(self.vertices);
        for _ in 0..self.vertices {
            let id = graph.create_vertex();
            graph.add_label(id, label)?;
        }
        for &(from, to) in &self.edges {
            graph.create_edge(from, to)?;
        }
        Ok(graph)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphShape {
    Line,
    Cycle,
    /// Uniform endpoints; self loops and duplicates are possible.
    Random { edges: usize },
}

impl GraphShape {
    pub fn parse(name: &str, edges: usize) -> Result<Self, String> {
        match name {
            "line" => Ok(GraphShape::Line),
            "cycle" => Ok(GraphShape::Cycle),
            "random" => Ok(GraphShape::Random { edges }),
            other => Err(format!("unknown shape {other}")),
        }
    }
}

/// # Panics
///
/// Panics when `node_count < 2`.
pub fn generate_graph(shape: GraphShape, node_count: usize, seed: u64) -> GraphDataset {
    assert!(node_count > 1, "node_count must exceed 1");
    let edges = match shape {
        GraphShape::Line => generate_line_edges(node_count),
        GraphShape::Cycle => generate_cycle_edges(node_count),
        GraphShape::Random { edges } => generate_random_edges(node_count, edges, seed),
    };
    GraphDataset {
        vertices: node_count,
        edges,
    }
}

/// Seeded stream of `(start, end)` query pairs over `node_count` vertices. Empty when
/// there are no vertices. Use a seed distinct from the dataset's, or the pairs replay its edges.
pub fn random_queries(node_count: usize, count: usize, seed: u64) -> Vec<(VertexId, VertexId)> {
    if node_count == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(0..node_count), rng.gen_range(0..node_count)))
        .collect()
}

fn generate_line_edges(count: usize) -> Vec<(VertexId, VertexId)> {
    (0..count - 1).map(|idx| (idx, idx + 1)).collect()
}

fn generate_cycle_edges(count: usize) -> Vec<(VertexId, VertexId)> {
    (0..count).map(|idx| (idx, (idx + 1) % count)).collect()
}

fn generate_random_edges(
    node_count: usize,
    edge_count: usize,
    seed: u64,
) -> Vec<(VertexId, VertexId)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..edge_count)
        .map(|_| (rng.gen_range(0..node_count), rng.gen_range(0..node_count)))
        .collect()
}
