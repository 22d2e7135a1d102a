use nannou::prelude::*;

use crate::cluster::{ClusterState, Point3};
use crate::render::palette;

/// World-space radius of a point marker.
pub const POINT_RADIUS: f32 = 0.7;
/// World-space radius of a centroid marker.
pub const CENTROID_RADIUS: f32 = 2.0;

const CAMERA_DISTANCE: f32 = 80.0;
const FOV_Y_DEGREES: f32 = 75.0;
const NEAR_PLANE: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Solid disc, used for points.
    Filled,
    /// Stroked outline only, used for centroids.
    Outlined,
}

/// One visual primitive, placed in world space.
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    pub position: Point3,
    pub radius: f32,
    pub color: Rgb<f32>,
    pub style: MarkerStyle,
}

/// Derive the full marker list from the current state: one filled marker
/// per point, then one larger outlined marker per centroid. Point markers
/// take their assigned centroid's color, or the neutral color while no
/// assignment exists. Rebuilt from scratch on every call.
pub fn markers(state: &ClusterState) -> Vec<Marker> {
    let mut out = Vec::with_capacity(state.points().len() + state.centroids().len());
    let assignments = state.assignments();

    for (i, point) in state.points().iter().enumerate() {
        let color = if assignments.is_empty() {
            palette::unassigned_color()
        } else {
            palette::cluster_color(assignments[i])
        };
        out.push(Marker {
            position: *point,
            radius: POINT_RADIUS,
            color,
            style: MarkerStyle::Filled,
        });
    }

    for (i, centroid) in state.centroids().iter().enumerate() {
        out.push(Marker {
            position: *centroid,
            radius: CENTROID_RADIUS,
            color: palette::cluster_color(i),
            style: MarkerStyle::Outlined,
        });
    }

    out
}

/// A world-space position mapped to window coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// Distance from the camera along the view axis. Larger is farther.
    pub depth: f32,
    /// World units to pixels at this depth.
    pub scale: f32,
}

/// Perspective camera orbiting the origin at a fixed distance.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Rotation around the vertical axis, radians.
    pub yaw: f32,
    pub distance: f32,
    fov_y: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            distance: CAMERA_DISTANCE,
            fov_y: FOV_Y_DEGREES.to_radians(),
        }
    }
}

impl Camera {
    /// Map a world position to centered window coordinates, or `None` when
    /// the position falls behind the near plane.
    pub fn project(&self, p: Point3, window_height: f32) -> Option<Projected> {
        let (sin, cos) = self.yaw.sin_cos();
        let x = p.x * cos + p.z * sin;
        let z = -p.x * sin + p.z * cos;

        let depth = self.distance - z;
        if depth <= NEAR_PLANE {
            return None;
        }

        let focal = (window_height * 0.5) / (self.fov_y * 0.5).tan();
        let scale = focal / depth;
        Some(Projected {
            x: x * scale,
            y: p.y * scale,
            depth,
            scale,
        })
    }
}
