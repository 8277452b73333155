//! Association cost matrix between tracks and frame objects.

use ndarray::Array2;

use crate::matcher::distance::symmetric_distance;
use crate::matcher::object::{Frame, Track};

/// Compute the association cost for every unassigned track/object pair.
///
/// Row `i` corresponds to `tracks[unassigned_tracks[i]]` and column `j` to
/// `frame.objects[unassigned_objects[j]]`.
pub fn compute_association_mat(
    tracks: &[Track],
    frame: &Frame,
    unassigned_tracks: &[usize],
    unassigned_objects: &[usize],
) -> Array2<f64> {
    let mut costs = Array2::zeros((unassigned_tracks.len(), unassigned_objects.len()));
    for (i, &track_idx) in unassigned_tracks.iter().enumerate() {
        let track = &tracks[track_idx];
        for (j, &object_idx) in unassigned_objects.iter().enumerate() {
            costs[[i, j]] = symmetric_distance(
                &track.obs,
                track.timestamp,
                &frame.objects[object_idx],
                frame.timestamp,
            );
        }
    }
    costs
}
