mod palette;
mod scene;


pub use palette::{cluster_color, unassigned_color, PALETTE_LEN};
pub use scene::{markers, Camera, Marker, MarkerStyle, Projected, CENTROID_RADIUS, POINT_RADIUS};
