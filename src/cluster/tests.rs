use super::*;
use approx::assert_relative_eq;

fn p(x: f32, y: f32, z: f32) -> Point3 {
    Point3::new(x, y, z)
}

#[test]
fn test_generated_points_stay_in_range() {
    let mut state = ClusterState::new(7);
    state.generate_points(200, 20.0);

    assert_eq!(state.points().len(), 200);
    for point in state.points() {
        assert!(point.x.abs() <= 20.0);
        assert!(point.y.abs() <= 20.0);
        assert!(point.z.abs() <= 20.0);
    }
}

#[test]
fn test_generated_centroids_stay_in_range() {
    let mut state = ClusterState::new(7);
    state.generate_centroids(6, 5.0);

    assert_eq!(state.centroids().len(), 6);
    for centroid in state.centroids() {
        assert!(centroid.x.abs() <= 5.0);
        assert!(centroid.y.abs() <= 5.0);
        assert!(centroid.z.abs() <= 5.0);
    }
}

#[test]
fn test_same_seed_reproduces_layout() {
    let mut a = ClusterState::new(42);
    let mut b = ClusterState::new(42);
    a.generate_points(50, 20.0);
    b.generate_points(50, 20.0);

    assert_eq!(a.points(), b.points());
}

#[test]
fn test_assign_picks_nearest_centroid() {
    let mut state = ClusterState::new(0);
    state.set_points(vec![p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0)]);
    state.set_centroids(vec![p(5.0, 0.0, 0.0), p(1.0, 1.0, 1.0)]);

    state.assign().unwrap();

    // (0,0,0) is closer to (1,1,1); (4,0,0) is closer to (5,0,0).
    assert_eq!(state.assignments(), &[1, 0]);
}

#[test]
fn test_assign_breaks_ties_toward_lowest_index() {
    let mut state = ClusterState::new(0);
    state.set_points(vec![p(0.0, 0.0, 0.0)]);
    state.set_centroids(vec![p(1.0, 0.0, 0.0), p(-1.0, 0.0, 0.0)]);

    state.assign().unwrap();

    assert_eq!(state.assignments(), &[0]);
}

#[test]
fn test_assign_is_deterministic() {
    let mut state = ClusterState::new(99);
    state.generate_points(80, 20.0);
    state.generate_centroids(4, 20.0);

    state.assign().unwrap();
    let first = state.assignments().to_vec();
    state.assign().unwrap();

    assert_eq!(state.assignments(), &first[..]);
}

#[test]
fn test_recompute_moves_centroid_to_cluster_mean() {
    let mut state = ClusterState::new(0);
    state.set_points(vec![p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]);
    state.set_centroids(vec![p(1.0, 5.0, 0.0), p(50.0, 0.0, 0.0)]);

    state.assign().unwrap();
    assert_eq!(state.assignments(), &[0, 0]);

    state.recompute_centroids().unwrap();

    let moved = state.centroids()[0];
    assert_relative_eq!(moved.x, 1.0);
    assert_relative_eq!(moved.y, 0.0);
    assert_relative_eq!(moved.z, 0.0);
}

#[test]
fn test_recompute_keeps_empty_cluster_in_place() {
    let mut state = ClusterState::new(0);
    state.set_points(vec![p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]);
    state.set_centroids(vec![p(1.0, 0.0, 0.0), p(50.0, 0.0, 0.0)]);

    state.assign().unwrap();
    state.recompute_centroids().unwrap();

    // Nothing was assigned to the far centroid, so it must not move.
    assert_eq!(state.centroids()[1], p(50.0, 0.0, 0.0));
}

#[test]
fn test_assign_without_centroids_is_a_no_op() {
    let mut state = ClusterState::new(0);
    state.generate_points(10, 20.0);

    assert_eq!(state.assign(), Err(ClusterError::NoCentroids));
    assert!(!state.is_assigned());
    assert!(state.assignments().is_empty());
}

#[test]
fn test_recompute_without_assignment_is_a_no_op() {
    let mut state = ClusterState::new(0);
    state.generate_points(10, 20.0);
    state.generate_centroids(3, 20.0);
    let before = state.centroids().to_vec();

    assert_eq!(state.recompute_centroids(), Err(ClusterError::NoAssignment));
    assert_eq!(state.centroids(), &before[..]);
}

#[test]
fn test_regenerating_points_clears_assignment() {
    let mut state = ClusterState::new(0);
    state.generate_points(10, 20.0);
    state.generate_centroids(3, 20.0);
    state.assign().unwrap();
    assert!(state.is_assigned());

    state.generate_points(10, 20.0);

    assert!(!state.is_assigned());
    assert_eq!(state.centroids().len(), 3);
}

#[test]
fn test_regenerating_centroids_clears_assignment() {
    let mut state = ClusterState::new(0);
    state.generate_points(10, 20.0);
    state.generate_centroids(3, 20.0);
    state.assign().unwrap();

    state.generate_centroids(5, 20.0);

    assert!(!state.is_assigned());
    assert_eq!(state.centroids().len(), 5);
}

#[test]
fn test_clear_centroids_drops_assignment_too() {
    let mut state = ClusterState::new(0);
    state.generate_points(10, 20.0);
    state.generate_centroids(3, 20.0);
    state.assign().unwrap();

    state.clear_centroids();

    assert!(state.centroids().is_empty());
    assert!(!state.is_assigned());
}

#[test]
fn test_two_cluster_scenario() {
    let mut state = ClusterState::new(0);
    state.set_points(vec![
        p(-10.0, 0.0, 0.0),
        p(-9.0, 0.0, 0.0),
        p(9.0, 0.0, 0.0),
        p(10.0, 0.0, 0.0),
    ]);
    state.set_centroids(vec![p(-10.0, 0.0, 0.0), p(10.0, 0.0, 0.0)]);

    state.assign().unwrap();
    assert_eq!(state.assignments(), &[0, 0, 1, 1]);

    state.recompute_centroids().unwrap();

    let left = state.centroids()[0];
    let right = state.centroids()[1];
    assert_relative_eq!(left.x, -9.5);
    assert_relative_eq!(left.y, 0.0);
    assert_relative_eq!(left.z, 0.0);
    assert_relative_eq!(right.x, 9.5);
    assert_relative_eq!(right.y, 0.0);
    assert_relative_eq!(right.z, 0.0);
}
