//! Word supply: per-level word lists and random selection
//!
//! Word pools live in `<dir>/<level:02>.txt`, whitespace separated.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

use super::progression::WordProgression;
use crate::error::{GameError, Result};

/// Difficulty levels offered by the level selector
pub const LEVEL_NAMES: [&str; 9] = [
    "Pre-K",
    "First grade",
    "Second grade",
    "Third grade",
    "Fourth grade",
    "Fifth grade",
    "Sixth grade",
    "Seventh grade",
    "Eighth grade",
];

/// Display name of a level
pub fn level_name(level: u32) -> &'static str {
    LEVEL_NAMES
        .get(level as usize)
        .copied()
        .unwrap_or("Custom")
}

/// Word lists keyed by level
#[derive(Clone, Debug, Default)]
pub struct WordBank {
    levels: FxHashMap<u32, Vec<String>>,
}

impl WordBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, level: u32, words: Vec<String>) {
        self.levels.insert(level, words);
    }

    /// Load every `NN.txt` pool found in `dir` for levels 0-8
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut bank = WordBank::new();
        for level in 0..LEVEL_NAMES.len() as u32 {
            let path = dir.as_ref().join(format!("{:02}.txt", level));
            if !path.exists() {
                continue;
            }
            let content = fs::read_to_string(&path)?;
            let words = parse_words(&content);
            log::info!(
                "Loaded {} words for level {} ({})",
                words.len(),
                level,
                level_name(level)
            );
            bank.insert(level, words);
        }
        Ok(bank)
    }

    pub fn words(&self, level: u32) -> Result<&[String]> {
        match self.levels.get(&level) {
            Some(words) if !words.is_empty() => Ok(words),
            _ => Err(GameError::EmptyWordList(level)),
        }
    }

    pub fn levels(&self) -> Vec<u32> {
        let mut levels: Vec<u32> = self.levels.keys().copied().collect();
        levels.sort_unstable();
        levels
    }
}

/// Split a word pool file into words
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .split_whitespace()
        .map(|w| w.to_string())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Uniform random choice among the spellable words of a list
///
/// Words that are too long or contain non-letters are filtered out once at
/// construction, which is equivalent to re-drawing them and cannot loop.
pub struct WordPicker {
    eligible: Vec<String>,
    total: usize,
    rng: StdRng,
}

impl WordPicker {
    pub fn new(words: &[String], max_len: usize, rng: StdRng) -> Self {
        let eligible: Vec<String> = words
            .iter()
            .filter(|w| WordProgression::validate(w, max_len).is_ok())
            .map(|w| w.trim().to_string())
            .collect();

        if eligible.len() < words.len() {
            log::warn!(
                "{} of {} words skipped (longer than {} or not spellable)",
                words.len() - eligible.len(),
                words.len(),
                max_len
            );
        }

        WordPicker {
            eligible,
            total: words.len(),
            rng,
        }
    }

    pub fn with_seed(words: &[String], max_len: usize, seed: u64) -> Self {
        Self::new(words, max_len, StdRng::seed_from_u64(seed))
    }

    /// Draw the next word
    pub fn next_word(&mut self) -> Result<String> {
        let word = self
            .eligible
            .choose(&mut self.rng)
            .cloned()
            .ok_or(GameError::NoEligibleWord { total: self.total })?;
        log::debug!("Random word selected: {}", word);
        Ok(word)
    }

    pub fn eligible(&self) -> &[String] {
        &self.eligible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_only_long_words_always_errors() {
        let list = words(&["encyclopedia", "extraordinary", "uncharacteristic"]);
        let mut picker = WordPicker::with_seed(&list, 10, 7);
        for _ in 0..1000 {
            assert!(matches!(
                picker.next_word(),
                Err(GameError::NoEligibleWord { total: 3 })
            ));
        }
    }

    #[test]
    fn test_empty_list_errors() {
        let mut picker = WordPicker::with_seed(&[], 10, 1);
        assert!(matches!(
            picker.next_word(),
            Err(GameError::NoEligibleWord { total: 0 })
        ));
    }

    #[test]
    fn test_long_words_never_drawn() {
        let list = words(&["cat", "elephantine", "dog", "hippopotamus"]);
        let mut picker = WordPicker::with_seed(&list, 10, 42);
        for _ in 0..200 {
            let word = picker.next_word().unwrap();
            assert!(word == "cat" || word == "dog", "drew {}", word);
        }
    }

    #[test]
    fn test_every_eligible_word_drawn() {
        let list = words(&["a", "be", "sea", "deer"]);
        let mut picker = WordPicker::with_seed(&list, 10, 3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(picker.next_word().unwrap());
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_parse_words() {
        assert_eq!(
            parse_words("cat dog\n  bird\r\nfish\n"),
            words(&["cat", "dog", "bird", "fish"])
        );
    }

    #[test]
    fn test_bank_missing_level() {
        let mut bank = WordBank::new();
        bank.insert(1, words(&["sun"]));
        assert_eq!(bank.words(1).unwrap().len(), 1);
        assert!(matches!(bank.words(4), Err(GameError::EmptyWordList(4))));
        assert_eq!(level_name(0), "Pre-K");
        assert_eq!(level_name(42), "Custom");
    }

    #[test]
    fn test_load_dir() {
        let dir = std::env::temp_dir().join(format!("spellotron-words-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("02.txt"), "tree\nhouse\n").unwrap();
        let bank = WordBank::load_dir(&dir).unwrap();
        assert_eq!(bank.levels(), vec![2]);
        assert_eq!(bank.words(2).unwrap(), &words(&["tree", "house"])[..]);
        fs::remove_dir_all(&dir).unwrap();
    }
}
