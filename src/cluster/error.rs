use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClusterError {
    #[error("No centroids have been initialized")]
    NoCentroids,

    #[error("No assignment pass has run")]
    NoAssignment,
}
