//! Skeletal landmarks reported by the motion sensor
//!
//! The sensor tracks a fixed set of 20 joints. Positions are in sensor space
//! (meters, y up, z away from the camera).

use serde::{Deserialize, Serialize};

/// Number of tracked landmarks
pub const JOINT_COUNT: usize = 20;

/// Body landmark identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JointId {
    HipCenter,
    Spine,
    ShoulderCenter,
    Head,
    ShoulderLeft,
    ElbowLeft,
    WristLeft,
    HandLeft,
    ShoulderRight,
    ElbowRight,
    WristRight,
    HandRight,
    HipLeft,
    KneeLeft,
    AnkleLeft,
    FootLeft,
    HipRight,
    KneeRight,
    AnkleRight,
    FootRight,
}

impl JointId {
    /// All landmarks in sensor order
    pub const ALL: [JointId; JOINT_COUNT] = [
        JointId::HipCenter,
        JointId::Spine,
        JointId::ShoulderCenter,
        JointId::Head,
        JointId::ShoulderLeft,
        JointId::ElbowLeft,
        JointId::WristLeft,
        JointId::HandLeft,
        JointId::ShoulderRight,
        JointId::ElbowRight,
        JointId::WristRight,
        JointId::HandRight,
        JointId::HipLeft,
        JointId::KneeLeft,
        JointId::AnkleLeft,
        JointId::FootLeft,
        JointId::HipRight,
        JointId::KneeRight,
        JointId::AnkleRight,
        JointId::FootRight,
    ];

    /// Slot of this landmark in a sample's joint array
    pub fn index(self) -> usize {
        self as usize
    }
}

/// How confident the sensor is about a joint position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrackingState {
    Tracked,
    Inferred,
    #[default]
    NotTracked,
}

impl TrackingState {
    /// Tracked and inferred joints carry a usable position
    pub fn is_usable(self) -> bool {
        matches!(self, TrackingState::Tracked | TrackingState::Inferred)
    }
}

/// 3D point in sensor space
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const ORIGIN: Position = Position {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Position { x, y, z }
    }

    pub fn distance(self, other: Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    pub fn offset(self, dx: f64, dy: f64, dz: f64) -> Self {
        Position::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

/// One landmark observation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    pub id: JointId,
    pub position: Position,
    #[serde(default)]
    pub tracking: TrackingState,
}

impl Joint {
    pub fn new(id: JointId, position: Position, tracking: TrackingState) -> Self {
        Joint {
            id,
            position,
            tracking,
        }
    }

    pub fn tracked(id: JointId, position: Position) -> Self {
        Joint::new(id, position, TrackingState::Tracked)
    }

    /// Placeholder for a landmark the sensor did not report
    pub fn untracked(id: JointId) -> Self {
        Joint::new(id, Position::ORIGIN, TrackingState::NotTracked)
    }
}
