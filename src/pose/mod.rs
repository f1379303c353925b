//! Pose data and similarity scoring
//!
//! # Components
//! - `joint.rs`: Landmark identifiers, positions and tracking quality
//! - `sample.rs`: Per-frame `PoseSample` and goal `LetterPose`
//! - `compare.rs`: `PoseComparator` similarity metric
//! - `library.rs`: A-Z `PoseLibrary` loading and lookup
//! - `semaphore.rs`: Built-in alphabet

pub mod compare;
pub mod joint;
pub mod library;
pub mod sample;
pub mod semaphore;

pub use compare::PoseComparator;
pub use joint::{Joint, JointId, Position, TrackingState, JOINT_COUNT};
pub use library::PoseLibrary;
pub use sample::{LetterPose, PoseSample};
