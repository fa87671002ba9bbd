//! Presentation adapter: display-ready rows and a plain-text table.
//!
//! Field truncation and the lazy link fallback happen here, on ephemeral
//! copies; stored records are never backfilled with computed links.

use crate::link;
use crate::track::{Mood, Track};

const TITLE_WIDTH: usize = 32;
const ARTIST_WIDTH: usize = 18;

/// One row ready for rendering: fields truncated to display widths and the
/// link guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTrack {
    pub title: String,
    pub artist: String,
    pub mood: Mood,
    pub energy: u8,
    pub language: String,
    pub link: String,
}

impl DisplayTrack {
    /// Build a display row from a record, resolving the search fallback when
    /// the stored link is empty or whitespace-only.
    #[must_use]
    pub fn from_track(track: &Track) -> Self {
        let link = match track.link.as_deref().map(str::trim) {
            Some(stored) if !stored.is_empty() => stored.to_string(),
            _ => link::fallback_link(
                &track.title,
                &track.artist,
                &track.language,
                track.mood.as_str(),
            ),
        };

        Self {
            title: shorten(&track.title, TITLE_WIDTH),
            artist: shorten(&track.artist, ARTIST_WIDTH),
            mood: track.mood,
            energy: track.energy,
            language: track.language.clone(),
            link,
        }
    }
}

/// Truncate `text` to at most `width` characters, marking cuts with an
/// ellipsis. Operates on character boundaries, never bytes.
#[must_use]
pub fn shorten(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Render rows as an aligned text table with a numbered first column.
#[must_use]
pub fn render_table(rows: &[DisplayTrack]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>3}  {:<32}  {:<18}  {:<9}  {}  {:<12}  LINK\n",
        "#", "TITLE", "ARTIST", "MOOD", "E", "LANG"
    ));
    for (index, row) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<32}  {:<18}  {:<9}  {}  {:<12}  {}\n",
            index + 1,
            row.title,
            row.artist,
            row.mood,
            row.energy,
            row.language,
            row.link
        ));
    }
    out
}
