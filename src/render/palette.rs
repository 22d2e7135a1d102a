use nannou::prelude::*;

// Cluster colors in centroid-index order: red, green, blue, yellow,
// cyan, magenta.
const PALETTE: [(f32, f32, f32); 6] = [
    (1.0, 0.2, 0.2),
    (0.2, 1.0, 0.2),
    (0.2, 0.2, 1.0),
    (1.0, 0.91, 0.2),
    (0.2, 1.0, 0.96),
    (1.0, 0.2, 0.91),
];

pub const PALETTE_LEN: usize = PALETTE.len();

/// Color for the centroid at `index` and the points assigned to it.
/// Cycles when there are more centroids than palette entries.
pub fn cluster_color(index: usize) -> Rgb<f32> {
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    rgb(r, g, b)
}

/// Neutral color for points before any assignment pass has run.
pub fn unassigned_color() -> Rgb<f32> {
    rgb(1.0, 1.0, 1.0)
}
