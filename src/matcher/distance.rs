//! Predicted-displacement distance between timestamped observations.

use crate::matcher::object::Object;

/// Ground-plane distance between `obs2` and the position `obs1` is
/// predicted to occupy at `timestamp2`.
///
/// `obs1` is extrapolated linearly with its own velocity; the height axis is
/// ignored. The metric is directional: only `obs1`'s velocity is used.
pub fn distance_between_obs(
    obs1: &Object,
    timestamp1: f64,
    obs2: &Object,
    timestamp2: f64,
) -> f64 {
    let time_diff = timestamp2 - timestamp1;
    let residual = obs2.center - obs1.center - obs1.velocity * time_diff;
    residual.xy().norm()
}

/// Average of the forward and backward predicted distances.
///
/// This is the association cost of a track/object pair.
pub fn symmetric_distance(
    track_object: &Object,
    track_timestamp: f64,
    camera_object: &Object,
    camera_timestamp: f64,
) -> f64 {
    let forward =
        distance_between_obs(track_object, track_timestamp, camera_object, camera_timestamp);
    let backward =
        distance_between_obs(camera_object, camera_timestamp, track_object, track_timestamp);
    0.5 * forward + 0.5 * backward
}
