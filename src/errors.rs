use thiserror::Error;

use crate::types::{Label, VertexId};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MemGraphError {
    #[error("vertex {0} does not exist")]
    NoVertex(VertexId),
    #[error("label {0} does not exist")]
    NoLabel(Label),
}

impl MemGraphError {
    pub fn no_vertex(id: VertexId) -> Self {
        MemGraphError::NoVertex(id)
    }

    pub fn no_label<T: Into<Label>>(label: T) -> Self {
        MemGraphError::NoLabel(label.into())
    }
}

pub type MemGraphResult<T> = Result<T, MemGraphError>;
