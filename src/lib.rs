//! Gated Hungarian association of tracks with newly observed objects.
//!
//! Each frame, every track is compared with every object through a
//! symmetric predicted-distance cost, and a minimum-cost one-to-one
//! assignment is computed over the pairs that pass the distance gate.
//!
//! ```
//! use hm_matcher_rs::{Frame, HmMatcher, Matcher, MatcherConfig, Object, Track};
//!
//! let matcher = HmMatcher::new(MatcherConfig::new(2.0, 4.0));
//! let tracks = vec![Track::new(1, Object::new(0.0, 0.0, 0.0).with_velocity(1.0, 0.0, 0.0), 0.0)];
//! let frame = Frame::new(1.0, vec![Object::new(1.0, 0.0, 0.0), Object::new(30.0, 0.0, 0.0)]);
//!
//! let result = matcher.match_tracks(&tracks, &frame);
//! assert_eq!(result.matches, vec![(0, 0)]);
//! assert_eq!(result.unmatched_detections, vec![1]);
//! ```

pub mod config;
pub mod error;
pub mod matcher;

pub use config::{MatcherConfig, MatcherInitOptions};
pub use error::{MatcherError, Result};
pub use matcher::{
    AssignmentResult, Frame, GatedHungarianMatcher, HmMatcher, MatchGates, Matcher, Object,
    OptimizeFlag, Track, create_matcher, register_matcher, registered_matchers,
};
