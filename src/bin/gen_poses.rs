//! Pose library generator
//!
//! Writes the built-in semaphore alphabet as a JSON pose library, ready to be
//! hand-tuned or replaced by recorded poses.
//! Usage: cargo run --bin gen_poses -- --output data/poses.json

use clap::Parser;
use spellotron::PoseLibrary;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "Spellotron - Pose Library Generator")]
#[command(about = "Write the built-in letter poses as JSON")]
struct Args {
    /// Output file
    #[arg(short, long, default_value = "data/poses.json")]
    output: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Some(parent) = Path::new(&args.output).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let library = PoseLibrary::builtin();
    library.save(&args.output)?;

    // Read back to make sure the file round-trips
    let reloaded = PoseLibrary::load(&args.output)?;
    println!(
        "Wrote {} letter poses to {}",
        reloaded.len(),
        args.output
    );

    Ok(())
}
