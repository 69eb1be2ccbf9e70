//! Thread-safe handle over [`MemGraph`]. The store itself is single-threaded; this wrapper
//! serialises every mutation and query behind one [`parking_lot::Mutex`], held for the
//! whole operation.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    errors::MemGraphResult,
    graph::MemGraph,
    stats::GraphStats,
    types::{Label, VertexId},
};

#[derive(Clone, Default)]
pub struct SharedGraph {
    inner: Arc<Mutex<MemGraph>>,
}

impl SharedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_graph(graph: MemGraph) -> Self {
        Self {
            inner: Arc::new(Mutex::new(graph)),
        }
    }

    pub fn create_vertex(&self) -> VertexId {
        self.inner.lock().create_vertex()
    }

    pub fn create_edge(&self, from: VertexId, to: VertexId) -> MemGraphResult<()> {
        self.inner.lock().create_edge(from, to)
    }

    pub fn add_label(&self, id: VertexId, label: impl Into<Label>) -> MemGraphResult<()> {
        self.inner.lock().add_label(id, label)
    }

    pub fn remove_label(&self, id: VertexId, label: &Label) -> MemGraphResult<()> {
        self.inner.lock().remove_label(id, label)
    }

    pub fn exists_vertex(&self, id: VertexId) -> bool {
        self.inner.lock().exists_vertex(id)
    }

    pub fn exists_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.inner.lock().exists_edge(from, to)
    }

    pub fn vertex_has_label(&self, id: VertexId, label: &Label) -> bool {
        self.inner.lock().vertex_has_label(id, label)
    }

    pub fn shortest_path(
        &self,
        start: VertexId,
        end: VertexId,
        label: &Label,
    ) -> MemGraphResult<Vec<VertexId>> {
        self.inner.lock().shortest_path(start, end, label)
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.lock().vertex_count()
    }

    pub fn stats(&self, label: &Label) -> GraphStats {
        self.inner.lock().stats(label)
    }

    /// Runs `f` with exclusive access, for batches that must not interleave.
    pub fn with_graph<R>(&self, f: impl FnOnce(&mut MemGraph) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
