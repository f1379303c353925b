//! Letter pose library: the 26 goal poses, loaded once and shared read-only
//!
//! File format (JSON):
//! ```json
//! { "poses": { "A": { "joints": [ { "id": "Head", "position": {..}, "tracking": "Tracked" } ] } } }
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::sample::{LetterPose, PoseSample};
use super::semaphore;
use crate::error::{GameError, Result};

#[derive(Serialize, Deserialize)]
struct LibraryFile {
    poses: BTreeMap<String, PoseSample>,
}

/// Complete A-Z pose alphabet
#[derive(Clone, Debug)]
pub struct PoseLibrary {
    poses: FxHashMap<char, Arc<LetterPose>>,
}

impl PoseLibrary {
    /// Build from letter poses; every letter A-Z must be present
    pub fn from_poses<I>(poses: I) -> Result<Self>
    where
        I: IntoIterator<Item = LetterPose>,
    {
        let mut map = FxHashMap::default();
        for pose in poses {
            if pose.letter().is_ascii_uppercase() {
                map.insert(pose.letter(), Arc::new(pose));
            } else {
                log::warn!("Ignoring pose for non-letter '{}'", pose.letter());
            }
        }

        let missing: Vec<char> = ('A'..='Z').filter(|c| !map.contains_key(c)).collect();
        if !missing.is_empty() {
            return Err(GameError::IncompleteLibrary { missing });
        }

        Ok(PoseLibrary { poses: map })
    }

    /// Semaphore-style alphabet bundled with the crate
    pub fn builtin() -> Self {
        let poses = semaphore::alphabet()
            .into_iter()
            .map(|pose| (pose.letter(), Arc::new(pose)))
            .collect();
        PoseLibrary { poses }
    }

    /// Load a library from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let library = Self::from_json(&content)?;
        log::info!(
            "Loaded {} letter poses from {}",
            library.len(),
            path.as_ref().display()
        );
        Ok(library)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let file: LibraryFile = serde_json::from_str(content)?;
        let mut poses = Vec::with_capacity(file.poses.len());
        for (name, sample) in file.poses {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => poses.push(LetterPose::new(letter, sample)),
                _ => return Err(GameError::Parse(format!("Invalid pose name '{}'", name))),
            }
        }
        Self::from_poses(poses)
    }

    pub fn to_json(&self) -> Result<String> {
        let file = LibraryFile {
            poses: self
                .poses
                .iter()
                .map(|(letter, pose)| (letter.to_string(), pose.sample().clone()))
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Save library to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Goal pose for a letter (case-insensitive)
    pub fn goal(&self, letter: char) -> Result<Arc<LetterPose>> {
        let letter = letter.to_ascii_uppercase();
        self.poses
            .get(&letter)
            .cloned()
            .ok_or(GameError::MissingLetterPose(letter))
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_all_letters() {
        let library = PoseLibrary::builtin();
        assert_eq!(library.len(), 26);
        assert_eq!(library.goal('m').unwrap().letter(), 'M');
    }

    #[test]
    fn test_missing_letter_is_rejected() {
        let poses = semaphore::alphabet()
            .into_iter()
            .filter(|p| p.letter() != 'Q');
        match PoseLibrary::from_poses(poses) {
            Err(GameError::IncompleteLibrary { missing }) => assert_eq!(missing, vec!['Q']),
            other => panic!("expected IncompleteLibrary, got {:?}", other),
        }
    }

    #[test]
    fn test_non_letter_lookup_fails() {
        let library = PoseLibrary::builtin();
        assert!(matches!(
            library.goal('7'),
            Err(GameError::MissingLetterPose('7'))
        ));
    }

    #[test]
    fn test_json_round_trip_keeps_goals() {
        let library = PoseLibrary::builtin();
        let json = library.to_json().unwrap();
        let parsed = PoseLibrary::from_json(&json).unwrap();
        assert_eq!(parsed.len(), 26);
        let similarity = crate::pose::PoseComparator::compare(
            parsed.goal('R').unwrap().sample(),
            library.goal('R').unwrap().sample(),
        );
        assert!(similarity > 99.999);
    }

    #[test]
    fn test_bad_pose_name() {
        let json = r#"{ "poses": { "AB": { "joints": [] } } }"#;
        assert!(matches!(
            PoseLibrary::from_json(json),
            Err(GameError::Parse(_))
        ));
    }
}
