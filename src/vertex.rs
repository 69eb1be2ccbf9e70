use ahash::AHashSet;

use crate::{
    errors::{MemGraphError, MemGraphResult},
    types::{Label, VertexId},
};

/// A vertex record: its label set and its outgoing edge targets in insertion order.
///
/// Incoming edges are not tracked. Duplicate targets are kept as independent entries.
#[derive(Debug, Clone, Default)]
pub struct Vertex {
    labels: AHashSet<Label>,
    outgoing: Vec<VertexId>,
}

impl Vertex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent: adding a label that is already present is a no-op.
    pub fn add_label(&mut self, label: impl Into<Label>) {
        self.labels.insert(label.into());
    }

    pub fn remove_label(&mut self, label: &Label) -> MemGraphResult<()> {
        if !self.labels.remove(label) {
            return Err(MemGraphError::no_label(label));
        }
        Ok(())
    }

    pub fn has_label(&self, label: &Label) -> bool {
        self.labels.contains(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn add_outgoing_edge(&mut self, target: VertexId) {
        self.outgoing.push(target);
    }

    pub fn has_outgoing_edge(&self, target: VertexId) -> bool {
        self.outgoing.contains(&target)
    }

    pub fn outgoing(&self) -> &[VertexId] {
        &self.outgoing
    }

    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_label_is_idempotent() {
        let mut vertex = Vertex::new();
        vertex.add_label("A");
        vertex.add_label("A");
        assert!(vertex.has_label(&Label::new("A")));
        assert_eq!(vertex.label_count(), 1);
    }

    #[test]
    fn test_remove_missing_label_fails() {
        let mut vertex = Vertex::new();
        vertex.add_label("A");
        let err = vertex.remove_label(&Label::new("B")).unwrap_err();
        assert_eq!(err, MemGraphError::NoLabel(Label::new("B")));
        assert!(vertex.has_label(&Label::new("A")));

        vertex.remove_label(&Label::new("A")).expect("remove");
        assert!(!vertex.has_label(&Label::new("A")));
        assert!(vertex.remove_label(&Label::new("A")).is_err());
    }

    #[test]
    fn test_labels_lists_each_name_once() {
        let mut vertex = Vertex::new();
        assert_eq!(vertex.labels().count(), 0);
        vertex.add_label("B");
        vertex.add_label("A");
        vertex.add_label("B");
        let mut names: Vec<&str> = vertex.labels().map(Label::as_str).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["A", "B"]);
        vertex.remove_label(&Label::new("A")).expect("remove");
        let names: Vec<&str> = vertex.labels().map(Label::as_str).collect();
        assert_eq!(names, vec!["B"]);
    }

    #[test]
    fn test_outgoing_keeps_insertion_order_and_duplicates() {
        let mut vertex = Vertex::new();
        vertex.add_outgoing_edge(3);
        vertex.add_outgoing_edge(1);
        vertex.add_outgoing_edge(3);
        assert_eq!(vertex.outgoing(), &[3, 1, 3]);
        assert_eq!(vertex.out_degree(), 3);
        assert!(vertex.has_outgoing_edge(1));
        assert!(vertex.has_outgoing_edge(3));
        assert!(!vertex.has_outgoing_edge(2));
    }
}
