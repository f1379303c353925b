//! Synthetic motion sensor for playing without hardware
//!
//! Produces frames near a target pose: every joint gets a little positional
//! noise and is occasionally dropped, the way a real skeleton stream jitters
//! and loses occluded joints.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spellotron::pose::{Joint, PoseSample, TrackingState};

/// Positional noise per axis, meters
const JITTER: f64 = 0.008;
/// Chance a joint is reported as not tracked
const DROPOUT: f64 = 0.02;

pub struct SyntheticSensor {
    rng: StdRng,
    frame: u64,
}

impl SyntheticSensor {
    pub fn new(seed: u64) -> Self {
        SyntheticSensor {
            rng: StdRng::seed_from_u64(seed),
            frame: 0,
        }
    }

    /// Capture one frame of a player holding roughly `target`
    pub fn capture(&mut self, target: &PoseSample) -> PoseSample {
        self.frame += 1;
        let joints: Vec<Joint> = target
            .joints()
            .iter()
            .map(|joint| {
                if !joint.tracking.is_usable() || self.rng.gen_bool(DROPOUT) {
                    return Joint::untracked(joint.id);
                }
                let position = joint.position.offset(
                    self.rng.gen_range(-JITTER..JITTER),
                    self.rng.gen_range(-JITTER..JITTER),
                    self.rng.gen_range(-JITTER..JITTER),
                );
                Joint::new(joint.id, position, TrackingState::Tracked)
            })
            .collect();
        PoseSample::from_joints(joints).with_frame(self.frame)
    }
}
