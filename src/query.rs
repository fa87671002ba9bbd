//! Filtering, mood-aware ordering and sampling of catalog records.
//!
//! Everything here is pure: inputs are never mutated and results are fresh
//! copies, so callers can re-run a query and get identical output. The
//! result caps live here too because they are part of the observable
//! contract, even though the CLI enforces them.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::track::{Mood, Track};

/// Maximum rows in a recommendation result.
pub const RECOMMEND_LIMIT: usize = 100;
/// Maximum rows in a full-catalog listing.
pub const LISTING_LIMIT: usize = 300;
/// Size of a surprise mix, bounded by the catalog size.
pub const SURPRISE_SIZE: usize = 20;

/// Sentinel language value meaning "no language filter".
pub const ANY_LANGUAGE: &str = "Any";

/// Optional criteria for a recommendation request. All matching is
/// case-insensitive; energy bounds are plain integers so out-of-range
/// requests simply match nothing instead of erroring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackQuery {
    pub mood: Option<String>,
    pub language: Option<String>,
    pub text: Option<String>,
    pub energy_min: Option<i32>,
    pub energy_max: Option<i32>,
}

impl TrackQuery {
    /// Direction of the energy sort implied by the queried mood. Derived
    /// from the normalized mood so `"happy"` and `"HAPPY"` order alike.
    fn sorts_descending(&self) -> bool {
        self.mood
            .as_deref()
            .and_then(Mood::parse)
            .is_some_and(Mood::sorts_descending)
    }
}

/// Filter `tracks` by the query's criteria, then sort by energy in the
/// mood-implied direction.
///
/// Predicates apply in order: mood equality, language equality (skipped
/// for the `"Any"` sentinel), lowercased substring over title or artist,
/// minimum energy, maximum energy. The sort is stable, so records with
/// equal energy keep their stored relative order. With no criteria at all
/// the result is the whole input sorted ascending by energy.
#[must_use]
pub fn filter(tracks: &[Track], query: &TrackQuery) -> Vec<Track> {
    let mut out: Vec<Track> = tracks
        .iter()
        .filter(|track| matches(track, query))
        .cloned()
        .collect();

    if query.sorts_descending() {
        out.sort_by(|a, b| b.energy.cmp(&a.energy));
    } else {
        out.sort_by(|a, b| a.energy.cmp(&b.energy));
    }
    out
}

fn matches(track: &Track, query: &TrackQuery) -> bool {
    if let Some(mood) = query.mood.as_deref() {
        if !track.mood.as_str().eq_ignore_ascii_case(mood) {
            return false;
        }
    }
    if let Some(language) = query.language.as_deref() {
        if language != ANY_LANGUAGE && !track.language.eq_ignore_ascii_case(language) {
            return false;
        }
    }
    if let Some(text) = query.text.as_deref() {
        let needle = text.to_lowercase();
        let in_title = track.title.to_lowercase().contains(&needle);
        let in_artist = track.artist.to_lowercase().contains(&needle);
        if !in_title && !in_artist {
            return false;
        }
    }
    if let Some(min) = query.energy_min {
        if i32::from(track.energy) < min {
            return false;
        }
    }
    if let Some(max) = query.energy_max {
        if i32::from(track.energy) > max {
            return false;
        }
    }
    true
}

/// Lenient parse for the `emin`/`emax` request parameters: malformed values
/// are treated as absent rather than erroring.
#[must_use]
pub fn parse_energy_bound(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|value| value.trim().parse::<i32>().ok())
}

/// Full-catalog listing order: (artist, title), lowercased, ascending.
pub fn sort_for_listing(tracks: &mut [Track]) {
    tracks.sort_by_cached_key(|track| (track.artist.to_lowercase(), track.title.to_lowercase()));
}

/// Random sample of `min(count, tracks.len())` records without replacement.
///
/// The random source is injected so a seeded generator yields a
/// reproducible mix; the result order is unspecified.
#[must_use]
pub fn surprise_sample<R: Rng + ?Sized>(tracks: &[Track], count: usize, rng: &mut R) -> Vec<Track> {
    tracks.choose_multiple(rng, count).cloned().collect()
}
