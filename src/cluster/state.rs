use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cluster::{
    centroid::mean_position, distance::euclidean_distance, error::ClusterError, types::Point3,
};

/// Points, centroids, and the point-to-centroid assignment of the current
/// demonstration step.
///
/// Invariant: whenever `assignments` is non-empty, its length equals the
/// number of points and every value indexes the centroid collection as of
/// the last assignment pass. Regenerating either collection clears it.
pub struct ClusterState {
    points: Vec<Point3>,
    centroids: Vec<Point3>,
    assignments: Vec<usize>,
    rng: ChaCha8Rng,
}

impl ClusterState {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            points: Vec::new(),
            centroids: Vec::new(),
            assignments: Vec::new(),
            rng,
        }
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn centroids(&self) -> &[Point3] {
        &self.centroids
    }

    /// Empty until an assignment pass has run.
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    pub fn is_assigned(&self) -> bool {
        !self.assignments.is_empty()
    }

    /// Replace the point collection with `n` points drawn uniformly from
    /// `[-bounding_range, bounding_range]` on each axis. Any existing
    /// assignment no longer corresponds to the current points and is cleared.
    pub fn generate_points(&mut self, n: usize, bounding_range: f32) {
        self.points = (0..n).map(|_| random_point(&mut self.rng, bounding_range)).collect();
        self.assignments.clear();
    }

    /// Replace the centroid collection with `k` freshly drawn positions.
    /// Clears any existing assignment, which may reference the old set.
    pub fn generate_centroids(&mut self, k: usize, bounding_range: f32) {
        self.centroids = (0..k).map(|_| random_point(&mut self.rng, bounding_range)).collect();
        self.assignments.clear();
    }

    /// Place centroids at known positions instead of drawing them randomly.
    /// Clears any existing assignment, same as `generate_centroids`.
    pub fn set_centroids(&mut self, centroids: Vec<Point3>) {
        self.centroids = centroids;
        self.assignments.clear();
    }

    /// Replace the point collection with known positions. Clears any
    /// existing assignment, same as `generate_points`.
    pub fn set_points(&mut self, points: Vec<Point3>) {
        self.points = points;
        self.assignments.clear();
    }

    /// Drop all centroids (and with them the assignment).
    pub fn clear_centroids(&mut self) {
        self.centroids.clear();
        self.assignments.clear();
    }

    /// Map every point to its nearest centroid by Euclidean distance.
    /// Exact ties go to the lowest centroid index.
    pub fn assign(&mut self) -> Result<(), ClusterError> {
        if self.centroids.is_empty() {
            return Err(ClusterError::NoCentroids);
        }

        let next: Vec<usize> = self
            .points
            .iter()
            .map(|p| {
                let mut best = 0;
                let mut best_dist = f32::INFINITY;
                for (i, c) in self.centroids.iter().enumerate() {
                    let d = euclidean_distance(*p, *c);
                    if d < best_dist {
                        best_dist = d;
                        best = i;
                    }
                }
                best
            })
            .collect();

        self.assignments = next;
        Ok(())
    }

    /// Move every centroid to the mean position of the points assigned to
    /// it. A centroid with no assigned points keeps its last position.
    pub fn recompute_centroids(&mut self) -> Result<(), ClusterError> {
        if self.assignments.is_empty() {
            return Err(ClusterError::NoAssignment);
        }

        for idx in 0..self.centroids.len() {
            let members: Vec<Point3> = self
                .points
                .iter()
                .zip(self.assignments.iter())
                .filter(|&(_, a)| *a == idx)
                .map(|(p, _)| *p)
                .collect();

            if !members.is_empty() {
                self.centroids[idx] = mean_position(&members);
            }
        }

        Ok(())
    }
}

fn random_point(rng: &mut ChaCha8Rng, bounding_range: f32) -> Point3 {
    Point3 {
        x: rng.gen_range(-bounding_range..=bounding_range),
        y: rng.gen_range(-bounding_range..=bounding_range),
        z: rng.gen_range(-bounding_range..=bounding_range),
    }
}
