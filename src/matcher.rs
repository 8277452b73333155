mod association;
mod base_matcher;
mod distance;
mod gated_hungarian;
mod hm_matcher;
mod linear_assignment;
mod object;
mod registry;

pub use association::compute_association_mat;
pub use base_matcher::{AssignmentResult, MatchGates, Matcher};
pub use distance::{distance_between_obs, symmetric_distance};
pub use gated_hungarian::{GatedHungarianMatcher, OptimizeFlag};
pub use hm_matcher::HmMatcher;
pub use object::{Frame, Object, Track};
pub use registry::{MatcherFactory, create_matcher, register_matcher, registered_matchers};
