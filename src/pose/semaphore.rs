//! Built-in letter alphabet modelled on flag semaphore
//!
//! Each letter is a pair of straight-arm directions. Directions are numbered
//! 0-7 in 45° steps, starting with the arm hanging down and turning towards the
//! +x side of the sensor. Legs and torso are the same for every letter, so the
//! arms alone tell letters apart.

use super::joint::{Joint, JointId, Position};
use super::sample::{LetterPose, PoseSample};

/// Arm directions per letter A-Z
const LETTER_ARMS: [(u8, u8); 26] = [
    (0, 1), // A
    (0, 2), // B
    (0, 3), // C
    (0, 4), // D
    (0, 5), // E
    (0, 6), // F
    (0, 7), // G
    (1, 2), // H
    (1, 3), // I
    (4, 6), // J
    (1, 4), // K
    (1, 5), // L
    (1, 6), // M
    (1, 7), // N
    (2, 3), // O
    (2, 4), // P
    (2, 5), // Q
    (2, 6), // R
    (2, 7), // S
    (3, 4), // T
    (3, 5), // U
    (4, 7), // V
    (5, 6), // W
    (5, 7), // X
    (3, 6), // Y
    (6, 7), // Z
];

const DEPTH: f64 = 2.0;
const SHOULDER_Y: f64 = 1.4;
const SHOULDER_HALF_WIDTH: f64 = 0.18;

// Distance from the shoulder along the arm
const ELBOW_REACH: f64 = 0.28;
const WRIST_REACH: f64 = 0.5;
const HAND_REACH: f64 = 0.58;

/// Arm directions for a letter, `(right, left)`
pub fn arm_directions(letter: char) -> Option<(u8, u8)> {
    let letter = letter.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return None;
    }
    let (a, b) = LETTER_ARMS[(letter as u8 - b'A') as usize];
    // The right arm takes whichever direction reaches further to +x
    if sweep(a).0 >= sweep(b).0 {
        Some((a, b))
    } else {
        Some((b, a))
    }
}

/// Full 26-letter alphabet in order A-Z
pub fn alphabet() -> Vec<LetterPose> {
    ('A'..='Z')
        .filter_map(|letter| {
            arm_directions(letter).map(|(right, left)| LetterPose::new(letter, arms_pose(right, left)))
        })
        .collect()
}

/// Standing with both arms down
pub fn neutral_pose() -> PoseSample {
    arms_pose(0, 0)
}

/// Standing pose with straight arms in the given directions
pub fn arms_pose(right: u8, left: u8) -> PoseSample {
    let mut joints = vec![
        Joint::tracked(JointId::HipCenter, Position::new(0.0, 0.9, DEPTH)),
        Joint::tracked(JointId::Spine, Position::new(0.0, 1.15, DEPTH)),
        Joint::tracked(JointId::ShoulderCenter, Position::new(0.0, SHOULDER_Y, DEPTH)),
        Joint::tracked(JointId::Head, Position::new(0.0, 1.65, DEPTH)),
        Joint::tracked(JointId::HipLeft, Position::new(-0.1, 0.85, DEPTH)),
        Joint::tracked(JointId::KneeLeft, Position::new(-0.11, 0.48, DEPTH)),
        Joint::tracked(JointId::AnkleLeft, Position::new(-0.11, 0.1, DEPTH)),
        Joint::tracked(JointId::FootLeft, Position::new(-0.12, 0.05, DEPTH - 0.08)),
        Joint::tracked(JointId::HipRight, Position::new(0.1, 0.85, DEPTH)),
        Joint::tracked(JointId::KneeRight, Position::new(0.11, 0.48, DEPTH)),
        Joint::tracked(JointId::AnkleRight, Position::new(0.11, 0.1, DEPTH)),
        Joint::tracked(JointId::FootRight, Position::new(0.12, 0.05, DEPTH - 0.08)),
    ];

    joints.extend(arm(
        [
            JointId::ShoulderRight,
            JointId::ElbowRight,
            JointId::WristRight,
            JointId::HandRight,
        ],
        SHOULDER_HALF_WIDTH,
        right,
    ));
    joints.extend(arm(
        [
            JointId::ShoulderLeft,
            JointId::ElbowLeft,
            JointId::WristLeft,
            JointId::HandLeft,
        ],
        -SHOULDER_HALF_WIDTH,
        left,
    ));

    PoseSample::from_joints(joints)
}

/// Unit vector (x, y) for a direction number
fn sweep(direction: u8) -> (f64, f64) {
    let angle = (direction % 8) as f64 * std::f64::consts::FRAC_PI_4;
    (angle.sin(), -angle.cos())
}

fn arm(ids: [JointId; 4], shoulder_x: f64, direction: u8) -> [Joint; 4] {
    let (dx, dy) = sweep(direction);
    let shoulder = Position::new(shoulder_x, SHOULDER_Y, DEPTH);
    let along = |reach: f64| shoulder.offset(dx * reach, dy * reach, 0.0);
    [
        Joint::tracked(ids[0], shoulder),
        Joint::tracked(ids[1], along(ELBOW_REACH)),
        Joint::tracked(ids[2], along(WRIST_REACH)),
        Joint::tracked(ids[3], along(HAND_REACH)),
    ]
}
