//! # Command-Line Interface Module
//!
//! Defines the command-line interface for MoodSync using Clap derive
//! macros. One subcommand exists per user-facing operation; all catalog
//! commands share the `--data-file` override.
//!
//! ## Commands
//!
//! - `init`: bootstrap the catalog and verify per-language coverage
//! - `recommend`: filter and rank tracks for a mood
//! - `list`: show the full catalog, sorted by artist and title
//! - `surprise`: a random mix of up to 20 tracks
//! - `add`: append a new track after validation
//!
//! ## Examples
//!
//! ```bash
//! moodsync recommend Happy --language Telugu --emin 3
//! moodsync surprise --seed 42
//! moodsync add "Kun Faya Kun" Calm --artist "A.R. Rahman" --language Hindi
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
///
/// Uses Clap derive macros to automatically generate argument parsing,
/// help text, and validation.
#[derive(Parser)]
#[command(name = "moodsync")]
#[command(about = "MoodSync: Emotion-based music recommendations across languages")]
#[command(version)]
pub struct Args {
    /// Path to the catalog CSV file
    ///
    /// Defaults to the platform data directory
    /// (e.g. ~/.local/share/moodsync/songs.csv on Linux).
    #[arg(long, global = true, env = "MOODSYNC_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of all available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Bootstrap the catalog and verify per-language coverage
    ///
    /// Creates the catalog with the curated seed plus generated filler if it
    /// doesn't exist, or tops up any tracked language that has fewer than
    /// the minimum number of entries. Safe to run repeatedly; performs no
    /// writes when coverage is already satisfied.
    Init {
        /// Minimum number of tracks required per tracked language
        #[arg(long, default_value_t = 20)]
        min_per_language: usize,
    },

    /// Recommend tracks for a mood
    ///
    /// Filters the catalog by the given mood (case-insensitive) and optional
    /// criteria, sorts by energy (descending for Happy/Energetic, ascending
    /// otherwise), and shows at most the first 100 results.
    Recommend {
        /// Mood to recommend for: Happy, Sad, Energetic, Calm or Focus
        ///
        /// Matching is case-insensitive.
        mood: String,

        /// Restrict results to one language ("Any" disables the filter)
        #[arg(short, long, default_value = "Any")]
        language: String,

        /// Substring to search for in titles and artists
        #[arg(short, long)]
        query: Option<String>,

        /// Minimum energy (1-5)
        ///
        /// Malformed values are ignored rather than rejected.
        #[arg(long)]
        emin: Option<String>,

        /// Maximum energy (1-5)
        ///
        /// Malformed values are ignored rather than rejected.
        #[arg(long)]
        emax: Option<String>,
    },

    /// List the whole catalog
    ///
    /// Shows up to 300 tracks sorted by artist, then title
    /// (case-insensitive).
    List,

    /// Show a surprise mix
    ///
    /// Picks up to 20 random tracks from the catalog, ignoring all filters.
    Surprise {
        /// Seed for the random pick, for reproducible mixes
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Add a new track to the catalog
    ///
    /// The title must be non-empty and the mood must be one of the tracked
    /// moods (normalized to title case). Invalid submissions are rejected
    /// without writing anything. When no link is given, display falls back
    /// to a search URL; nothing is stored in its place.
    Add {
        /// Title of the track
        title: String,

        /// Mood of the track: Happy, Sad, Energetic, Calm or Focus
        mood: String,

        /// Artist name (defaults to "Unknown")
        #[arg(short, long)]
        artist: Option<String>,

        /// Energy rating 1-5 (defaults to 3, clamped into range)
        #[arg(short, long)]
        energy: Option<String>,

        /// Language (defaults to "Unknown")
        #[arg(short, long)]
        language: Option<String>,

        /// Link to the track (YouTube/Spotify URL)
        #[arg(long)]
        link: Option<String>,
    },

    /// Generate shell completions
    ///
    /// Usage: moodsync completion bash > ~/.local/share/bash-completion/completions/moodsync
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Generate enhanced completion with mood and language completion
    ///
    /// Usage: moodsync completion-enhanced bash > ~/.local/share/bash-completion/completions/moodsync
    /// Usage: moodsync completion-enhanced fish > ~/.config/fish/completions/moodsync.fish
    CompletionEnhanced {
        /// Shell to generate enhanced completions for (bash and fish supported)
        shell: Shell,
    },
}
