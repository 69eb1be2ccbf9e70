use tracing::trace;

use crate::{
    bfs,
    errors::{MemGraphError, MemGraphResult},
    types::{Label, VertexId},
    vertex::Vertex,
};

/// Append-only arena of vertex records. A vertex's position is its identifier.
#[derive(Debug, Clone, Default)]
pub struct MemGraph {
    vertices: Vec<Vertex>,
}

impl MemGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
        }
    }

    /// Appends a vertex with no labels and no edges and returns its identifier.
    pub fn create_vertex(&mut self) -> VertexId {
        let id = self.vertices.len();
        self.vertices.push(Vertex::new());
        trace!(vertex = id, "created vertex");
        id
    }

    pub fn exists_vertex(&self, id: VertexId) -> bool {
        id < self.vertices.len()
    }

    /// Appends `to` to the outgoing list of `from`. Self loops and duplicates are allowed.
    pub fn create_edge(&mut self, from: VertexId, to: VertexId) -> MemGraphResult<()> {
        self.ensure_vertex(from)?;
        self.ensure_vertex(to)?;
        self.vertices[from].add_outgoing_edge(to);
        trace!(from, to, "created edge");
        Ok(())
    }

    pub fn add_label(&mut self, id: VertexId, label: impl Into<Label>) -> MemGraphResult<()> {
        self.vertex_mut(id)?.add_label(label);
        Ok(())
    }

    pub fn remove_label(&mut self, id: VertexId, label: &Label) -> MemGraphResult<()> {
        self.vertex_mut(id)?.remove_label(label)
    }

    /// Returns `false` for vertices that do not exist.
    pub fn vertex_has_label(&self, id: VertexId, label: &Label) -> bool {
        self.vertex(id).is_some_and(|vertex| vertex.has_label(label))
    }

    /// Returns `false` when either endpoint does not exist.
    pub fn exists_edge(&self, from: VertexId, to: VertexId) -> bool {
        if !self.exists_vertex(to) {
            return false;
        }
        self.vertex(from)
            .is_some_and(|vertex| vertex.has_outgoing_edge(to))
    }

    /// Shortest labelled walk from `start` to `end`; see [`bfs::shortest_path`].
    pub fn shortest_path(
        &self,
        start: VertexId,
        end: VertexId,
        label: &Label,
    ) -> MemGraphResult<Vec<VertexId>> {
        bfs::shortest_path(self, start, end, label)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub fn outgoing(&self, id: VertexId) -> MemGraphResult<&[VertexId]> {
        self.vertex(id)
            .map(Vertex::outgoing)
            .ok_or_else(|| MemGraphError::no_vertex(id))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Counts every outgoing entry, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::out_degree).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub(crate) fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub(crate) fn ensure_vertex(&self, id: VertexId) -> MemGraphResult<()> {
        if self.exists_vertex(id) {
            Ok(())
        } else {
            Err(MemGraphError::no_vertex(id))
        }
    }

    fn vertex_mut(&mut self, id: VertexId) -> MemGraphResult<&mut Vertex> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| MemGraphError::no_vertex(id))
    }
}
