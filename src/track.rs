//! Domain types for the catalog: moods, track records and user submissions.
//!
//! A [`Track`] is immutable once created. Records enter the catalog either
//! through the seeder (synthetic filler) or through a validated
//! [`TrackSubmission`] (organic). The store never mutates or deletes them.

use std::fmt;

use thiserror::Error;

use crate::link;

/// Languages with a guaranteed minimum number of catalog entries.
/// Records may carry any language text; only these are counted for coverage.
pub const LANGUAGES: [&str; 5] = ["English", "Telugu", "Hindi", "Tamil", "Malayalam"];

/// Energy used when a stored or submitted value cannot be parsed.
pub const DEFAULT_ENERGY: u8 = 3;

/// Closed set of emotional categories.
///
/// The variant order matters twice: the seeder cycles through it round-robin,
/// and `Happy`/`Energetic` select the descending sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sad,
    Energetic,
    Calm,
    Focus,
}

impl Mood {
    /// All moods, in the canonical round-robin order.
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Energetic,
        Mood::Calm,
        Mood::Focus,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Energetic => "Energetic",
            Mood::Calm => "Calm",
            Mood::Focus => "Focus",
        }
    }

    /// Case-insensitive lookup, e.g. `"HAPPY"` and `"happy"` both resolve
    /// to [`Mood::Happy`]. Returns `None` for anything outside the set.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Mood> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str().eq_ignore_ascii_case(raw.trim()))
    }

    /// The `index`-th mood in round-robin order, wrapping at the set size.
    #[must_use]
    pub fn cycle(index: usize) -> Mood {
        Mood::ALL[index % Mood::ALL.len()]
    }

    /// High-energy moods surface intense tracks first, so recommendation
    /// results for them are sorted by energy descending.
    #[must_use]
    pub fn sorts_descending(self) -> bool {
        matches!(self, Mood::Happy | Mood::Energetic)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width/alignment flags working in table output.
        f.pad(self.as_str())
    }
}

/// One catalog entry. `link` is the only optional field; everything else is
/// required once a record has passed the store's load-time normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub mood: Mood,
    /// Intensity rating, always in `1..=5`.
    pub energy: u8,
    pub language: String,
    /// Stored URL, `None` when the row had no usable link. A search fallback
    /// is computed at presentation time and never written back.
    pub link: Option<String>,
}

/// Clamp an arbitrary integer into the valid energy range `1..=5`.
#[must_use]
pub fn clamp_energy(value: i64) -> u8 {
    value.clamp(1, 5) as u8
}

/// Lenient energy parse: malformed input falls back to [`DEFAULT_ENERGY`],
/// out-of-range values are clamped.
#[must_use]
pub fn parse_energy(raw: &str) -> u8 {
    raw.trim()
        .parse::<i64>()
        .map_or(DEFAULT_ENERGY, clamp_energy)
}

/// Rejection reasons for a user submission. These are retryable user errors,
/// kept apart from operational store failures (which surface as `anyhow`
/// errors from the store itself).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please provide a title for the song.")]
    MissingTitle,
    #[error("\"{0}\" is not a recognized mood. Choose one of: Happy, Sad, Energetic, Calm, Focus.")]
    UnknownMood(String),
}

/// Raw user input for adding a track, before any normalization.
#[derive(Debug, Clone, Default)]
pub struct TrackSubmission {
    pub title: String,
    pub artist: Option<String>,
    pub mood: String,
    pub language: Option<String>,
    pub energy: Option<String>,
    pub link: Option<String>,
}

impl TrackSubmission {
    /// Validate and normalize the submission into a storable [`Track`].
    ///
    /// Rules: title is trimmed and must be non-empty; mood is normalized to
    /// title case and must be in the tracked set; artist defaults to
    /// "Unknown" and language to "Unknown"; energy parses leniently with
    /// clamping; an empty link is replaced by the deterministic search
    /// fallback so every stored submission carries a usable URL.
    ///
    /// No partial record is ever produced: validation failures reject the
    /// whole submission before anything reaches the store.
    pub fn into_track(self) -> Result<Track, ValidationError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let mood_raw = self.mood.trim();
        let mood = Mood::parse(&capitalize(mood_raw))
            .ok_or_else(|| ValidationError::UnknownMood(mood_raw.to_string()))?;

        let artist = non_empty_or(self.artist, "Unknown");
        let language = non_empty_or(self.language, "Unknown");
        let energy = self
            .energy
            .as_deref()
            .map_or(DEFAULT_ENERGY, parse_energy);

        let link = match self.link.as_deref().map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
            _ => link::fallback_link(&title, &artist, &language, mood.as_str()),
        };

        Ok(Track {
            title,
            artist,
            mood,
            energy,
            language,
            link: Some(link),
        })
    }
}

/// First character uppercased, the rest lowercased ("enerGETIC" -> "Energetic").
fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    match value.as_deref().map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => default.to_string(),
    }
}
