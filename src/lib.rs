//! In-memory directed graph store with per-vertex labels and label-constrained
//! shortest-path queries.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod bench_utils;
pub mod bfs;
pub mod config;
pub mod errors;
pub mod graph;
pub mod stats;
pub mod sync;
pub mod types;
pub mod vertex;

pub use crate::errors::{MemGraphError, MemGraphResult};
pub use crate::graph::MemGraph;
pub use crate::stats::{GraphStats, QuerySummary};
pub use crate::sync::SharedGraph;
pub use crate::types::{Label, VertexId};
pub use crate::vertex::Vertex;
