//! Pose similarity scoring
//!
//! Both samples are moved into a body-relative frame before comparing:
//! - each sample is translated so its hip center (or the centroid of the
//!   compared joints) sits at the origin
//! - both are measured in units of the goal's torso length (shoulder center
//!   to hip center)
//!
//! The unit comes from the goal alone. Stretching or collapsing the live
//! torso never rescales the other joints, so a joint drifting away from the
//! goal can only lower the score.
//!
//! Each comparable joint scores `1 - d / MAX_DEVIATION` (floored at 0) and the
//! mean is mapped onto 0-100.

use super::joint::{JointId, Position};
use super::sample::PoseSample;

/// Best possible similarity
pub const MAX_SIMILARITY: f64 = 100.0;

/// Normalized distance at which a joint contributes nothing
pub const MAX_DEVIATION: f64 = 1.0;

/// Torso lengths shorter than this are treated as degenerate
const MIN_TORSO: f64 = 1e-4;

/// Stateless comparison between a live frame and a goal pose
pub struct PoseComparator;

impl PoseComparator {
    /// Similarity of `current` to `goal` in [0, 100]
    ///
    /// Joints not usable in both samples are skipped. Returns 0 when nothing
    /// can be compared.
    pub fn compare(current: &PoseSample, goal: &PoseSample) -> f64 {
        let shared: Vec<JointId> = JointId::ALL
            .iter()
            .copied()
            .filter(|&id| {
                current.joint(id).tracking.is_usable() && goal.joint(id).tracking.is_usable()
            })
            .collect();

        if shared.is_empty() {
            return 0.0;
        }

        let scale = torso_unit(goal);
        let current_frame = BodyFrame::of(current, &shared, scale);
        let goal_frame = BodyFrame::of(goal, &shared, scale);

        let total: f64 = shared
            .iter()
            .map(|&id| {
                let a = current_frame.normalize(current.joint(id).position);
                let b = goal_frame.normalize(goal.joint(id).position);
                joint_similarity(a.distance(b))
            })
            .sum();

        let score = MAX_SIMILARITY * total / shared.len() as f64;
        if score.is_nan() {
            return 0.0;
        }
        score.clamp(0.0, MAX_SIMILARITY)
    }
}

/// Per-joint score in [0, 1]
fn joint_similarity(deviation: f64) -> f64 {
    // f64::max drops NaN, so a non-finite deviation scores 0
    (1.0 - deviation / MAX_DEVIATION).max(0.0).min(1.0)
}

/// Length unit for a comparison: the goal's torso, or 1.0 without one
fn torso_unit(goal: &PoseSample) -> f64 {
    let hip = goal.joint(JointId::HipCenter);
    let shoulder = goal.joint(JointId::ShoulderCenter);
    if !hip.tracking.is_usable() || !shoulder.tracking.is_usable() {
        return 1.0;
    }
    let torso = hip.position.distance(shoulder.position);
    if torso.is_finite() && torso > MIN_TORSO {
        torso
    } else {
        1.0
    }
}

/// Body-relative coordinate frame of one sample
struct BodyFrame {
    origin: Position,
    scale: f64,
}

impl BodyFrame {
    fn of(sample: &PoseSample, shared: &[JointId], scale: f64) -> Self {
        let origin = if shared.contains(&JointId::HipCenter) {
            sample.joint(JointId::HipCenter).position
        } else {
            centroid(sample, shared)
        };
        BodyFrame { origin, scale }
    }

    fn normalize(&self, p: Position) -> Position {
        Position::new(
            (p.x - self.origin.x) / self.scale,
            (p.y - self.origin.y) / self.scale,
            (p.z - self.origin.z) / self.scale,
        )
    }
}

fn centroid(sample: &PoseSample, ids: &[JointId]) -> Position {
    let n = ids.len() as f64;
    let (x, y, z) = ids.iter().fold((0.0, 0.0, 0.0), |(x, y, z), &id| {
        let p = sample.joint(id).position;
        (x + p.x, y + p.y, z + p.z)
    });
    Position::new(x / n, y / n, z / n)
}
