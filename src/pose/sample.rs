//! Per-frame pose snapshots and the goal poses built from them

use serde::{Deserialize, Serialize};

use super::joint::{Joint, JointId, JOINT_COUNT};

/// Snapshot of every landmark for one frame
///
/// Holds exactly one entry per [`JointId`]; landmarks absent from the input
/// are stored as `NotTracked`. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "SampleRecord", into = "SampleRecord")]
pub struct PoseSample {
    joints: [Joint; JOINT_COUNT],
    /// Sensor frame number, lets a renderer find the matching image
    frame: Option<u64>,
}

impl PoseSample {
    /// Build a sample from any set of joints; later duplicates win
    pub fn from_joints<I>(joints: I) -> Self
    where
        I: IntoIterator<Item = Joint>,
    {
        let mut slots = JointId::ALL.map(Joint::untracked);
        for joint in joints {
            slots[joint.id.index()] = joint;
        }
        PoseSample {
            joints: slots,
            frame: None,
        }
    }

    /// Sample with no tracked joints
    pub fn empty() -> Self {
        Self::from_joints(std::iter::empty())
    }

    pub fn with_frame(mut self, frame: u64) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn frame(&self) -> Option<u64> {
        self.frame
    }

    pub fn joint(&self, id: JointId) -> &Joint {
        &self.joints[id.index()]
    }

    /// Joints in sensor order
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn tracked_count(&self) -> usize {
        self.joints
            .iter()
            .filter(|j| j.tracking.is_usable())
            .count()
    }
}

impl Default for PoseSample {
    fn default() -> Self {
        Self::empty()
    }
}

/// On-disk shape of a sample: an unordered joint list
#[derive(Serialize, Deserialize)]
struct SampleRecord {
    joints: Vec<Joint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    frame: Option<u64>,
}

impl From<SampleRecord> for PoseSample {
    fn from(record: SampleRecord) -> Self {
        let mut sample = PoseSample::from_joints(record.joints);
        sample.frame = record.frame;
        sample
    }
}

impl From<PoseSample> for SampleRecord {
    fn from(sample: PoseSample) -> Self {
        SampleRecord {
            joints: sample
                .joints
                .into_iter()
                .filter(|j| j.tracking.is_usable())
                .collect(),
            frame: sample.frame,
        }
    }
}

/// Canonical goal shape for one letter A-Z
#[derive(Clone, Debug, PartialEq)]
pub struct LetterPose {
    letter: char,
    sample: PoseSample,
}

impl LetterPose {
    pub fn new(letter: char, sample: PoseSample) -> Self {
        LetterPose {
            letter: letter.to_ascii_uppercase(),
            sample,
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn sample(&self) -> &PoseSample {
        &self.sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::joint::{Position, TrackingState};

    #[test]
    fn test_missing_joints_are_untracked() {
        let sample =
            PoseSample::from_joints([Joint::tracked(JointId::Head, Position::new(0.0, 1.6, 2.0))]);
        assert_eq!(sample.tracked_count(), 1);
        assert_eq!(
            sample.joint(JointId::FootLeft).tracking,
            TrackingState::NotTracked
        );
        assert_eq!(sample.joints().len(), JOINT_COUNT);
    }

    #[test]
    fn test_json_keeps_joint_positions() {
        let sample = PoseSample::from_joints([
            Joint::tracked(JointId::HandRight, Position::new(0.5, 1.2, 2.0)),
            Joint::new(
                JointId::HandLeft,
                Position::new(-0.5, 1.2, 2.0),
                TrackingState::Inferred,
            ),
        ]);
        let json = serde_json::to_string(&sample).unwrap();
        let parsed: PoseSample = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample);
    }

    #[test]
    fn test_letter_is_uppercased() {
        let pose = LetterPose::new('q', PoseSample::empty());
        assert_eq!(pose.letter(), 'Q');
    }
}
