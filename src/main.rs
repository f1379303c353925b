//! Spellotron - spell words with your body
//!
//! Terminal front-end for the pose-spelling engine. Without motion-sensor
//! hardware, a synthetic sensor stands in for the player: hold SPACE-toggled
//! "mimic" mode to strike the goal pose, release it to stand neutral.

mod cli;

use clap::Parser;
use cli::display::Display;
use cli::input::InputHandler;
use cli::sensor::SyntheticSensor;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spellotron::game::{level_name, EventLog, GameEvent, SensorStatus, WordBank, WordPicker};
use spellotron::pose::semaphore;
use spellotron::{GameConfig, GameError, GameSession, PoseLibrary, SystemClock};
use std::error::Error;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "Spellotron")]
#[command(about = "Spell words by holding letter poses")]
struct Args {
    /// Grade level (0 = PreK ... 8 = Eighth)
    #[arg(short, long, default_value = "0")]
    level: u32,

    /// Path to the pose library
    #[arg(short, long, default_value = "data/poses.json")]
    poses: String,

    /// Directory with one word list per level
    #[arg(short, long, default_value = "data/word_pool")]
    words: String,

    /// Optional JSON game configuration
    #[arg(short, long)]
    config: Option<String>,

    /// Seed for word selection and the synthetic sensor
    #[arg(short, long)]
    seed: Option<u64>,

    /// Enable debug mode
    #[arg(short, long)]
    debug: bool,
}

/// Word shown in the end-of-word summary
struct Summary {
    word: String,
    score: u64,
    elapsed: Duration,
}

fn load_config(path: Option<&str>) -> GameConfig {
    let Some(path) = path else {
        return GameConfig::default();
    };
    match GameConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Could not load config {}: {} (using defaults)", path, e);
            GameConfig::default()
        }
    }
}

fn load_library(path: &str) -> PoseLibrary {
    match PoseLibrary::load(path) {
        Ok(library) => library,
        Err(e) => {
            log::warn!("Could not load poses {}: {} (using built-in alphabet)", path, e);
            PoseLibrary::builtin()
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = load_config(args.config.as_deref());
    let library = Arc::new(load_library(&args.poses));

    let bank = WordBank::load_dir(&args.words)?;
    let words = bank.words(args.level)?;

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let picker = WordPicker::new(words, config.max_word_len, rng);
    let mut sensor = SyntheticSensor::new(args.seed.unwrap_or_else(rand::random));

    let events = Arc::new(EventLog::new());
    let mut session = GameSession::new(
        config.clone(),
        library,
        picker,
        Arc::new(SystemClock::new()),
        events.clone(),
    );
    session.start_next_word()?;

    let display = Display::new();
    InputHandler::enable_raw_mode()?;
    let result = play(&mut session, &events, &config, &mut sensor, &display, args.level);

    // Cleanup runs even when the game loop failed
    InputHandler::disable_raw_mode()?;
    display.shutdown()?;
    result?;

    println!("\nSession complete!");
    println!(
        "Words: {} | Total score: {}",
        session.words_completed(),
        session.total_score()
    );

    Ok(())
}

/// Run the game loop until the player exits
fn play(
    session: &mut GameSession,
    events: &EventLog,
    config: &GameConfig,
    sensor: &mut SyntheticSensor,
    display: &Display,
    level: u32,
) -> Result<(), Box<dyn Error>> {
    let input = InputHandler::with_timeout(config.tick_interval());
    display.clear()?;
    display.show_help()?;

    let neutral = semaphore::neutral_pose();
    let required = config.recognition.required_frames;
    let mut mimicking = false;
    let mut similarity = 0.0;
    let mut summary: Option<Summary> = None;
    let mut last_frame = Instant::now();

    'game: loop {
        if let Some(key) = input.read_key()? {
            if InputHandler::is_exit(&key) {
                break 'game;
            }

            if InputHandler::is_enter(&key) && session.word_complete() {
                match session.start_next_word() {
                    Ok(_) => {}
                    Err(GameError::SensorUnavailable) | Err(GameError::SessionPaused) => {}
                    Err(e) => return Err(e.into()),
                }
            }

            match InputHandler::key_to_char(&key) {
                Some(' ') => mimicking = !mimicking,
                Some('p') => {
                    session.toggle_pause();
                }
                Some('s') => {
                    let status = match session.sensor_status() {
                        SensorStatus::Disconnected => SensorStatus::Connected,
                        _ => SensorStatus::Disconnected,
                    };
                    session.sensor_status_changed(status);
                }
                _ => {}
            }
        }

        if last_frame.elapsed() >= config.frame_interval() {
            last_frame = Instant::now();
            if session.sensor_status() == SensorStatus::Connected {
                let frame = {
                    let target = match (mimicking, session.goal()) {
                        (true, Some(goal)) => goal.sample(),
                        _ => &neutral,
                    };
                    sensor.capture(target)
                };
                if let Some(s) = session.process_frame(&frame).similarity() {
                    similarity = s;
                }
            }
        }

        for event in events.drain() {
            match event {
                GameEvent::WordStarted { .. } => {
                    summary = None;
                    similarity = 0.0;
                    display.hide_summary()?;
                }
                GameEvent::CharacterAdvanced { .. } => mimicking = false,
                GameEvent::WordCompleted {
                    word,
                    final_score,
                    elapsed,
                } => {
                    mimicking = false;
                    summary = Some(Summary {
                        word,
                        score: final_score,
                        elapsed,
                    });
                }
                _ => {}
            }
        }

        let progression = session.progression();
        display.show_header(
            level_name(level),
            session.total_score(),
            session.words_completed(),
        )?;
        display.show_word(progression.letters(), progression.spelled().len())?;
        display.show_letter(session.current_letter(), similarity, session.streak(), required)?;
        display.show_similarity(similarity)?;
        display.show_timers(session.timers())?;
        display.show_score(session.score())?;
        display.show_status(
            session.is_paused(),
            session.sensor_status() != SensorStatus::Disconnected,
            mimicking,
        )?;
        if let Some(summary) = &summary {
            display.show_summary(&summary.word, summary.score, summary.elapsed)?;
        }
    }

    Ok(())
}
