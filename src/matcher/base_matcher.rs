//! Common interface for track-to-object matchers.

use crate::config::{MatcherConfig, MatcherInitOptions};
use crate::error::Result;
use crate::matcher::object::{Frame, Object, Track};

/// Outcome of an assignment step.
///
/// Indices refer to the inputs of the call that produced the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentResult {
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_detections: Vec<usize>,
}

/// Gate distances shared by matcher implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatchGates {
    max_match_distance: f64,
    bound_match_distance: f64,
}

impl MatchGates {
    pub fn new(max_match_distance: f64, bound_match_distance: f64) -> Self {
        Self {
            max_match_distance,
            bound_match_distance,
        }
    }

    pub fn max_match_distance(&self) -> f64 {
        self.max_match_distance
    }

    pub fn bound_match_distance(&self) -> f64 {
        self.bound_match_distance
    }

    pub fn set_max_match_distance(&mut self, max_match_distance: f64) {
        self.max_match_distance = max_match_distance;
    }

    pub fn set_bound_match_distance(&mut self, bound_match_distance: f64) {
        self.bound_match_distance = bound_match_distance;
    }
}

impl From<MatcherConfig> for MatchGates {
    fn from(config: MatcherConfig) -> Self {
        Self::new(config.max_match_distance, config.bound_match_distance)
    }
}

/// A strategy for associating tracks with the objects of a new frame.
///
/// Implementations are configured once through [`Matcher::init`] and are
/// stateless across frames afterwards.
pub trait Matcher: Send + Sync {
    /// Load configuration. A failure here should stop the caller from
    /// starting up.
    fn init(&mut self, options: &MatcherInitOptions) -> Result<()>;

    /// Associate `tracks` with `frame.objects`.
    ///
    /// Every track index appears exactly once across `matches` and
    /// `unmatched_tracks`; the same holds for object indices.
    fn match_tracks(&self, tracks: &[Track], frame: &Frame) -> AssignmentResult;

    /// Whether a single candidate pair is close enough to be accepted.
    fn refined_track(
        &self,
        track_object: &Object,
        track_timestamp: f64,
        camera_object: &Object,
        camera_timestamp: f64,
    ) -> bool;

    fn name(&self) -> &'static str;
}
