use crate::cluster::types::Point3;

/// Arithmetic mean position of a non-empty set of points.
pub fn mean_position(points: &[Point3]) -> Point3 {
    let mut out = Point3::ORIGIN;

    for p in points {
        out.x += p.x;
        out.y += p.y;
        out.z += p.z;
    }

    let n = points.len() as f32;
    out.x /= n;
    out.y /= n;
    out.z /= n;

    out
}
