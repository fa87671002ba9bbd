//! # MoodSync - Emotion-Based Music Recommender
//!
//! MoodSync recommends songs by mood across multiple languages from a local
//! CSV catalog, and lets you grow the catalog with your own entries.
//!
//! ## Architecture
//!
//! - `cli`: Command-line interface definitions
//! - `store`: CSV-backed record store with bootstrap/top-up logic
//! - `seeder`: Deterministic placeholder generation per language
//! - `query`: Filtering, mood-aware sorting and sampling
//! - `display`: Display-field truncation and table rendering
//! - `config`: Data directory management
//!
//! ## Usage
//!
//! ```bash
//! # Bootstrap the catalog
//! moodsync init
//!
//! # Get recommendations
//! moodsync recommend Happy --language Telugu
//!
//! # Browse and explore
//! moodsync list
//! moodsync surprise
//!
//! # Grow the catalog
//! moodsync add "Kun Faya Kun" Calm --artist "A.R. Rahman" --language Hindi
//! ```

mod cli;
mod completion;
mod config;
mod display;
mod link;
mod query;
mod seeder;
mod store;
mod track;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::display::DisplayTrack;
use crate::query::TrackQuery;
use crate::store::{CatalogStore, DEFAULT_MIN_PER_LANGUAGE};
use crate::track::TrackSubmission;

/// Main entry point for the MoodSync application.
///
/// Initializes logging, parses command-line arguments, and routes commands
/// to the appropriate module functions. Every catalog command starts with an
/// idempotent coverage check, so the first invocation bootstraps the store
/// transparently.
///
/// # Logging
///
/// Controlled via `RUST_LOG`:
/// - `RUST_LOG=debug moodsync recommend Happy` - Enable debug logging
/// - `RUST_LOG=moodsync::store=trace moodsync list` - Module-specific logging
fn main() -> Result<()> {
    // Initialize environment logger for debugging and monitoring
    env_logger::init();

    // Parse command-line arguments using Clap derive macros
    let args = cli::Args::parse();

    // Completion commands need no catalog access
    match &args.command {
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(shell), &mut cmd);
            return Ok(());
        }
        cli::Command::CompletionEnhanced { shell } => {
            match shell {
                cli::Shell::Bash => completion::generate_enhanced_bash_completion(),
                cli::Shell::Fish => completion::generate_enhanced_fish_completion(),
                _ => {
                    return Err(anyhow::anyhow!(
                        "Enhanced completions only supported for bash and fish"
                    ))
                }
            }
            return Ok(());
        }
        _ => {}
    }

    let data_file = match args.data_file {
        Some(path) => path,
        None => config::get_data_file_path()?,
    };
    debug!("Using catalog at {}", data_file.display());
    let store = CatalogStore::new(data_file);

    match args.command {
        cli::Command::Init { min_per_language } => {
            info!("Verifying catalog coverage (minimum {min_per_language} per language)");
            store.ensure_catalog(min_per_language)?;
            println!("Catalog ready at {}", store.path().display());
        }
        cli::Command::Recommend {
            mood,
            language,
            query: text,
            emin,
            emax,
        } => {
            store.ensure_catalog(DEFAULT_MIN_PER_LANGUAGE)?;
            let tracks = store.load_all()?;

            let track_query = TrackQuery {
                mood: Some(mood),
                language: Some(language),
                text,
                energy_min: query::parse_energy_bound(emin.as_deref()),
                energy_max: query::parse_energy_bound(emax.as_deref()),
            };
            let results = query::filter(&tracks, &track_query);
            let rows: Vec<DisplayTrack> = results
                .iter()
                .take(query::RECOMMEND_LIMIT)
                .map(DisplayTrack::from_track)
                .collect();

            println!("Results ({})", rows.len());
            print!("{}", display::render_table(&rows));
        }
        cli::Command::List => {
            store.ensure_catalog(DEFAULT_MIN_PER_LANGUAGE)?;
            let mut tracks = store.load_all()?;
            query::sort_for_listing(&mut tracks);

            let rows: Vec<DisplayTrack> = tracks
                .iter()
                .take(query::LISTING_LIMIT)
                .map(DisplayTrack::from_track)
                .collect();

            println!("Total: {}", rows.len());
            print!("{}", display::render_table(&rows));
        }
        cli::Command::Surprise { seed } => {
            store.ensure_catalog(DEFAULT_MIN_PER_LANGUAGE)?;
            let tracks = store.load_all()?;

            let mut rng: StdRng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let picks = query::surprise_sample(&tracks, query::SURPRISE_SIZE, &mut rng);
            let rows: Vec<DisplayTrack> = picks.iter().map(DisplayTrack::from_track).collect();

            println!("Surprise Mix ({} random picks)", rows.len());
            print!("{}", display::render_table(&rows));
        }
        cli::Command::Add {
            title,
            mood,
            artist,
            energy,
            language,
            link,
        } => {
            // `append` bootstraps a missing store itself; a rejected
            // submission must leave the store byte-for-byte untouched.
            let submission = TrackSubmission {
                title,
                artist,
                mood,
                language,
                energy,
                link,
            };
            match submission.into_track() {
                Ok(song) => {
                    store.append(&song)?;
                    info!("Appended `{}` to {}", song.title, store.path().display());
                    println!("Song added: {} - {}", song.artist, song.title);
                }
                Err(err) => {
                    // Retryable user error, not an operational failure
                    eprintln!("{err}");
                    std::process::exit(2);
                }
            }
        }
        cli::Command::Completion { .. } | cli::Command::CompletionEnhanced { .. } => {
            unreachable!("handled before catalog setup")
        }
    }

    Ok(())
}
