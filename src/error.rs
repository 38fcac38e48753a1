use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GraphError {
    #[error("edge endpoint {vertex} outside the vertex range 0..{node_count}")]
    UnknownVertex { vertex: usize, node_count: usize },
}
