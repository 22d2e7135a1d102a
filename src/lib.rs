// Public API exports
pub mod app;
pub mod cluster;
pub mod config;
pub mod render;

// Re-export main types for convenience
pub use cluster::{ClusterError, ClusterState, Point3};

pub use config::{AppConfig, DEFAULT_K, DEFAULT_POINTS, DEFAULT_RANGE, K_MAX, K_MIN};

pub use render::{
    cluster_color, markers, unassigned_color, Camera, Marker, MarkerStyle, CENTROID_RADIUS,
    POINT_RADIUS,
};
