//! Terminal display and UI rendering
//!
//! Features:
//! - Goal word with spelled letters filled in
//! - Current letter colored by how close the player is to its pose
//! - Similarity bar, character/word timers, score
//! - End-of-word summary

use crossterm::{
    cursor, execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use spellotron::game::TimerSnapshot;
use spellotron::timing::format_clock;
use std::io::{stdout, Write};
use std::time::Duration;

/// Width of the similarity bar in cells
const BAR_WIDTH: usize = 40;

/// Similarity band mapped onto the red-yellow-green gradient
const GRADIENT_LOW: f64 = 76.0;
const GRADIENT_HIGH: f64 = 91.0;

/// Color for a similarity value: red below the band, green at the top
fn similarity_color(similarity: f64) -> Color {
    let position = (similarity.clamp(GRADIENT_LOW, GRADIENT_HIGH) - GRADIENT_LOW)
        / (GRADIENT_HIGH - GRADIENT_LOW);
    if position >= 0.99 {
        Color::Green
    } else if position >= 0.5 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// `C A _ _` style progress line
fn word_progress(letters: &[char], spelled: usize) -> String {
    letters
        .iter()
        .enumerate()
        .map(|(i, c)| if i < spelled { *c } else { '_' })
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Filled portion of the similarity bar
fn bar(similarity: f64) -> String {
    let filled = ((similarity.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Terminal display manager
pub struct Display;

impl Display {
    pub fn new() -> Self {
        Display
    }

    /// Clear screen
    pub fn clear(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    fn line(&self, row: u16) -> Result<std::io::Stdout, Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::MoveTo(0, row),
            terminal::Clear(ClearType::CurrentLine)
        )?;
        Ok(stdout)
    }

    /// Title line with level and running total
    pub fn show_header(
        &self,
        level: &str,
        total_score: u64,
        words_completed: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = self.line(0)?;
        execute!(
            stdout,
            SetForegroundColor(Color::Cyan),
            Print("Spellotron"),
            ResetColor,
            Print(format!(
                "  |  Level: {}  |  Words: {}  |  Total: {}",
                level, words_completed, total_score
            ))
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Render the goal word with spelled letters revealed
    pub fn show_word(
        &self,
        letters: &[char],
        spelled: usize,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = self.line(2)?;
        execute!(
            stdout,
            SetForegroundColor(Color::Cyan),
            Print("Word:    "),
            ResetColor,
            Print(word_progress(letters, spelled))
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Show the letter to pose, colored by the latest similarity
    pub fn show_letter(
        &self,
        letter: Option<char>,
        similarity: f64,
        streak: u32,
        required: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = self.line(3)?;
        execute!(
            stdout,
            SetForegroundColor(Color::Yellow),
            Print("Pose:    "),
            ResetColor
        )?;
        match letter {
            Some(letter) => execute!(
                stdout,
                SetForegroundColor(similarity_color(similarity)),
                Print(letter),
                ResetColor,
                Print(format!("   hold {}/{}", streak, required))
            )?,
            None => execute!(stdout, Print("-"))?,
        }
        stdout.flush()?;
        Ok(())
    }

    /// Similarity bar for the latest frame
    pub fn show_similarity(&self, similarity: f64) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = self.line(4)?;
        execute!(
            stdout,
            Print("Match:   "),
            SetForegroundColor(similarity_color(similarity)),
            Print(bar(similarity)),
            ResetColor,
            Print(format!(" {:5.1}%", similarity))
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Character and word timer labels
    pub fn show_timers(&self, timers: TimerSnapshot) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = self.line(5)?;
        execute!(
            stdout,
            SetForegroundColor(Color::Magenta),
            Print("Letter:  "),
            ResetColor,
            Print(format_clock(timers.character)),
            SetForegroundColor(Color::Magenta),
            Print("   Word: "),
            ResetColor,
            Print(format_clock(timers.word))
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Score of the current word
    pub fn show_score(&self, score: u64) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = self.line(6)?;
        execute!(
            stdout,
            SetForegroundColor(Color::Green),
            Print("Score:   "),
            ResetColor,
            Print(score)
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Pause / sensor / mimic state
    pub fn show_status(
        &self,
        paused: bool,
        sensor_connected: bool,
        mimicking: bool,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = self.line(8)?;
        if !sensor_connected {
            execute!(
                stdout,
                SetForegroundColor(Color::Red),
                Print("Motion sensor disconnected")
            )?;
        } else if paused {
            execute!(stdout, SetForegroundColor(Color::Yellow), Print("PAUSED"))?;
        } else if mimicking {
            execute!(
                stdout,
                SetForegroundColor(Color::Green),
                Print("Holding the pose...")
            )?;
        }
        execute!(stdout, ResetColor)?;
        stdout.flush()?;
        Ok(())
    }

    /// Post-word summary
    pub fn show_summary(
        &self,
        word: &str,
        score: u64,
        elapsed: Duration,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = self.line(10)?;
        execute!(
            stdout,
            SetForegroundColor(Color::Blue),
            Print("─".repeat(50)),
            ResetColor,
            cursor::MoveTo(0, 11),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print("Word complete! "),
            ResetColor,
            Print(format!(
                "{}  |  Time: {}  |  Score: {}",
                word.to_lowercase(),
                format_clock(elapsed),
                score
            )),
            cursor::MoveTo(0, 12),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::DarkGrey),
            Print("Press ENTER for the next word"),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Clear the summary block
    pub fn hide_summary(&self) -> Result<(), Box<dyn std::error::Error>> {
        for row in 10..=12 {
            self.line(row)?;
        }
        Ok(())
    }

    /// Show help text
    pub fn show_help(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = self.line(14)?;
        execute!(
            stdout,
            SetForegroundColor(Color::DarkGrey),
            Print("SPACE hold/release pose  |  P pause  |  S plug/unplug sensor  |  Esc exit"),
            ResetColor
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Reset terminal state and cleanup
    pub fn shutdown(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(stdout, cursor::MoveTo(0, 16), cursor::Show)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
