//! Hungarian matcher driven by predicted ground-plane distance.

use tracing::{debug, info};

use crate::config::{MatcherConfig, MatcherInitOptions};
use crate::error::Result;
use crate::matcher::association::compute_association_mat;
use crate::matcher::base_matcher::{AssignmentResult, MatchGates, Matcher};
use crate::matcher::distance::symmetric_distance;
use crate::matcher::gated_hungarian::{GatedHungarianMatcher, OptimizeFlag};
use crate::matcher::object::{Frame, Object, Track};

/// Matches tracks to frame objects by minimizing the total symmetric
/// predicted distance, refusing pairs at or beyond the max match distance.
///
/// A default-constructed matcher has zero gates and matches nothing until
/// [`Matcher::init`] or [`HmMatcher::new`] supplies real ones.
#[derive(Debug, Clone, Default)]
pub struct HmMatcher {
    gates: MatchGates,
    hungarian_matcher: GatedHungarianMatcher,
}

impl HmMatcher {
    pub const NAME: &'static str = "HMMatcher";

    pub fn new(config: MatcherConfig) -> Self {
        Self {
            gates: config.into(),
            hungarian_matcher: GatedHungarianMatcher::new(),
        }
    }

    pub fn gates(&self) -> &MatchGates {
        &self.gates
    }

    pub fn gates_mut(&mut self) -> &mut MatchGates {
        &mut self.gates
    }

    fn track_object_property_match(&self, tracks: &[Track], frame: &Frame) -> AssignmentResult {
        let unassigned_tracks: Vec<usize> = (0..tracks.len()).collect();
        let unassigned_objects: Vec<usize> = (0..frame.objects.len()).collect();

        if unassigned_tracks.is_empty() || unassigned_objects.is_empty() {
            return AssignmentResult {
                matches: vec![],
                unmatched_tracks: unassigned_tracks,
                unmatched_detections: unassigned_objects,
            };
        }

        let costs =
            compute_association_mat(tracks, frame, &unassigned_tracks, &unassigned_objects);
        let local = self.hungarian_matcher.solve(
            costs.view(),
            self.gates.max_match_distance(),
            self.gates.bound_match_distance(),
            OptimizeFlag::OptMin,
        );

        let matches = local
            .matches
            .iter()
            .map(|&(i, j)| (unassigned_tracks[i], unassigned_objects[j]))
            .collect();
        let unmatched_tracks = local
            .unmatched_tracks
            .iter()
            .map(|&i| unassigned_tracks[i])
            .collect();
        let unmatched_detections = local
            .unmatched_detections
            .iter()
            .map(|&j| unassigned_objects[j])
            .collect();

        AssignmentResult {
            matches,
            unmatched_tracks,
            unmatched_detections,
        }
    }
}

impl Matcher for HmMatcher {
    fn init(&mut self, options: &MatcherInitOptions) -> Result<()> {
        let path = options.config_file_path();
        let config = MatcherConfig::from_json(&path)?;
        self.gates = config.into();
        info!(
            path = %path.display(),
            max_match_distance = config.max_match_distance,
            bound_match_distance = config.bound_match_distance,
            "{} initialized",
            Self::NAME
        );
        Ok(())
    }

    fn match_tracks(&self, tracks: &[Track], frame: &Frame) -> AssignmentResult {
        let result = self.track_object_property_match(tracks, frame);
        debug!(
            tracks = tracks.len(),
            objects = frame.objects.len(),
            matched = result.matches.len(),
            "frame at {:.3} matched",
            frame.timestamp
        );
        result
    }

    fn refined_track(
        &self,
        track_object: &Object,
        track_timestamp: f64,
        camera_object: &Object,
        camera_timestamp: f64,
    ) -> bool {
        let dist =
            symmetric_distance(track_object, track_timestamp, camera_object, camera_timestamp);
        dist < self.gates.max_match_distance()
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> HmMatcher {
        HmMatcher::new(MatcherConfig::new(2.0, 4.0))
    }

    #[test]
    fn test_empty_tracks() {
        let frame = Frame::new(
            1.0,
            vec![Object::new(0.0, 0.0, 0.0), Object::new(1.0, 1.0, 0.0)],
        );
        let result = matcher().match_tracks(&[], &frame);
        assert!(result.matches.is_empty());
        assert!(result.unmatched_tracks.is_empty());
        assert_eq!(result.unmatched_detections, vec![0, 1]);
    }

    #[test]
    fn test_empty_frame() {
        let tracks = vec![
            Track::new(1, Object::new(0.0, 0.0, 0.0), 0.0),
            Track::new(2, Object::new(5.0, 0.0, 0.0), 0.0),
            Track::new(3, Object::new(9.0, 0.0, 0.0), 0.0),
        ];
        let result = matcher().match_tracks(&tracks, &Frame::new(1.0, vec![]));
        assert!(result.matches.is_empty());
        assert_eq!(result.unmatched_tracks, vec![0, 1, 2]);
        assert!(result.unmatched_detections.is_empty());
    }

    #[test]
    fn test_far_pair_is_not_matched() {
        let tracks = vec![Track::new(1, Object::new(0.0, 0.0, 0.0), 0.0)];
        let frame = Frame::new(0.1, vec![Object::new(50.0, 0.0, 0.0)]);
        let result = matcher().match_tracks(&tracks, &frame);
        assert!(result.matches.is_empty());
        assert_eq!(result.unmatched_tracks, vec![0]);
        assert_eq!(result.unmatched_detections, vec![0]);
    }

    #[test]
    fn test_moving_tracks_follow_prediction() {
        // Two tracks crossing: nearest-position matching would swap them.
        let tracks = vec![
            Track::new(1, Object::new(0.0, 0.0, 0.0).with_velocity(2.0, 0.0, 0.0), 0.0),
            Track::new(2, Object::new(2.0, 0.0, 0.0).with_velocity(-2.0, 0.0, 0.0), 0.0),
        ];
        let frame = Frame::new(
            1.0,
            vec![
                Object::new(-0.1, 0.0, 0.0).with_velocity(-2.0, 0.0, 0.0),
                Object::new(2.1, 0.0, 0.0).with_velocity(2.0, 0.0, 0.0),
            ],
        );
        let result = matcher().match_tracks(&tracks, &frame);
        assert_eq!(result.matches, vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_refined_track_uses_max_distance() {
        let m = matcher();
        let track = Object::new(0.0, 0.0, 0.0).with_velocity(1.0, 0.0, 0.0);

        // Symmetric distance 0.5.
        assert!(m.refined_track(&track, 0.0, &Object::new(1.0, 0.0, 0.0), 1.0));
        // Symmetric distance exactly 2.0 fails the strict gate.
        let still = Object::new(0.0, 0.0, 0.0);
        assert!(!m.refined_track(&still, 0.0, &Object::new(0.0, 2.0, 0.0), 0.0));
    }

    #[test]
    fn test_gates_can_be_retuned() {
        let mut m = matcher();
        assert_eq!(m.gates().max_match_distance(), 2.0);
        assert_eq!(m.gates().bound_match_distance(), 4.0);

        let track = Object::new(0.0, 0.0, 0.0);
        let det = Object::new(3.0, 0.0, 0.0);
        assert!(!m.refined_track(&track, 0.0, &det, 0.0));

        m.gates_mut().set_max_match_distance(3.5);
        m.gates_mut().set_bound_match_distance(5.0);
        assert!(m.refined_track(&track, 0.0, &det, 0.0));

        let tracks = vec![Track::new(1, track, 0.0)];
        let frame = Frame::new(0.0, vec![det]);
        assert_eq!(m.match_tracks(&tracks, &frame).matches, vec![(0, 0)]);
    }

    #[test]
    fn test_unconfigured_matcher_matches_nothing() {
        let tracks = vec![Track::new(1, Object::new(0.0, 0.0, 0.0), 0.0)];
        let frame = Frame::new(0.0, vec![Object::new(0.0, 0.0, 0.0)]);
        let result = HmMatcher::default().match_tracks(&tracks, &frame);
        assert!(result.matches.is_empty());
        assert_eq!(HmMatcher::default().name(), "HMMatcher");
    }
}
