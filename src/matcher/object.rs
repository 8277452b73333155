//! Observed objects, tracks and frames consumed by the matcher.

use nalgebra::Vector3;

/// A single observed object.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    /// Identifier assigned by the detector
    pub id: i64,
    /// Object center in world coordinates
    pub center: Vector3<f64>,
    /// Object velocity in world coordinates per second
    pub velocity: Vector3<f64>,
}

impl Object {
    /// Create a stationary object at the given position.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            id: -1,
            center: Vector3::new(x, y, z),
            velocity: Vector3::zeros(),
        }
    }

    pub fn with_velocity(mut self, vx: f64, vy: f64, vz: f64) -> Self {
        self.velocity = Vector3::new(vx, vy, vz);
        self
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

/// A tracked entity as seen by the matcher: its latest observation and
/// the time at which it was made.
#[derive(Debug, Clone)]
pub struct Track {
    pub track_id: u64,
    /// Last observation associated with the track
    pub obs: Object,
    /// Timestamp of `obs`, in seconds
    pub timestamp: f64,
}

impl Track {
    pub fn new(track_id: u64, obs: Object, timestamp: f64) -> Self {
        Self {
            track_id,
            obs,
            timestamp,
        }
    }
}

/// All objects observed at one sensor timestamp.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Timestamp shared by every object, in seconds
    pub timestamp: f64,
    pub objects: Vec<Object>,
}

impl Frame {
    pub fn new(timestamp: f64, objects: Vec<Object>) -> Self {
        Self { timestamp, objects }
    }
}
