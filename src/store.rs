//! CSV-backed record store.
//!
//! The store is an explicit handle over one catalog file; it is constructed
//! once and passed by reference to every operation. Rows are append-only:
//! nothing ever rewrites or deletes existing records except the
//! corrupt-file rebuild path, which discards the whole file and reseeds.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, trace, warn};
use serde::Deserialize;

use crate::seeder;
use crate::track::{parse_energy, Mood, Track, LANGUAGES};

/// Coverage floor applied when a command touches the store without an
/// explicit minimum.
pub const DEFAULT_MIN_PER_LANGUAGE: usize = 20;

/// Column order of the on-disk catalog.
const HEADER: [&str; 6] = ["title", "artist", "mood", "energy", "language", "link"];

/// A stored row before normalization. Every field is free text; shorter rows
/// deserialize with empty defaults so a truncated line degrades instead of
/// failing the whole load.
#[derive(Debug, Default, Deserialize)]
struct RawTrack {
    #[serde(default)]
    title: String,
    #[serde(default)]
    artist: String,
    #[serde(default)]
    mood: String,
    #[serde(default)]
    energy: String,
    #[serde(default)]
    language: String,
    #[serde(default)]
    link: String,
}

impl RawTrack {
    /// Normalize into a usable record, or `None` when the row is missing a
    /// title or a recognizable mood. Malformed energy is repaired to the
    /// default and out-of-range values are clamped; the file itself is
    /// never touched.
    fn normalize(self) -> Option<Track> {
        if self.title.is_empty() {
            return None;
        }
        let mood = Mood::parse(&self.mood)?;

        let artist = if self.artist.is_empty() {
            "Unknown".to_string()
        } else {
            self.artist
        };
        let link = {
            let trimmed = self.link.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        Some(Track {
            title: self.title,
            artist,
            mood,
            energy: parse_energy(&self.energy),
            language: self.language,
            link,
        })
    }
}

/// Handle over the durable catalog file.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Make sure every tracked language has at least `min_per_language`
    /// records.
    ///
    /// A missing catalog is created from the curated seed plus generated
    /// filler. An existing catalog is counted per tracked language and only
    /// the deficit is appended; rows in unrecognized languages are ignored
    /// by the count and never removed. A catalog that cannot be read during
    /// count-verification is discarded and rebuilt from scratch.
    ///
    /// Idempotent: when all thresholds are already met this performs no
    /// writes, so it is safe to run at the start of every command.
    pub fn ensure_catalog(&self, min_per_language: usize) -> Result<()> {
        if !self.exists() {
            return self.create_initial(min_per_language);
        }

        let counts = match self.count_tracked_languages() {
            Ok(counts) => counts,
            Err(err) => {
                warn!(
                    "Catalog at {} is unreadable ({err}); discarding and rebuilding from seed",
                    self.path.display()
                );
                fs::remove_file(&self.path).with_context(|| {
                    format!("Failed to remove corrupt catalog at {}", self.path.display())
                })?;
                return self.create_initial(min_per_language);
            }
        };
        trace!("Per-language catalog counts: {counts:?}");

        let mut top_up = Vec::new();
        for language in LANGUAGES {
            let have = counts.get(language).copied().unwrap_or(0);
            if have < min_per_language {
                top_up.extend(seeder::generate(language, min_per_language - have));
            }
        }

        if top_up.is_empty() {
            debug!("Catalog coverage already satisfied, nothing to write");
            return Ok(());
        }

        info!(
            "Topping up catalog with {} generated rows at {}",
            top_up.len(),
            self.path.display()
        );
        self.append_rows(&top_up)
    }

    /// Load every well-formed record. Rows without a title or a valid mood
    /// are silently excluded; malformed energy values are repaired
    /// in-memory. Read-only.
    pub fn load_all(&self) -> Result<Vec<Track>> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .with_context(|| format!("Failed to open catalog at {}", self.path.display()))?;

        let mut tracks = Vec::new();
        for row in reader.deserialize::<RawTrack>() {
            let raw = row.with_context(|| {
                format!("Failed to read catalog row from {}", self.path.display())
            })?;
            if let Some(track) = raw.normalize() {
                tracks.push(track);
            }
        }
        debug!("Loaded {} tracks from {}", tracks.len(), self.path.display());
        Ok(tracks)
    }

    /// Durably append one record. Initializes the catalog first when the
    /// file does not exist yet. No uniqueness constraint applies.
    pub fn append(&self, track: &Track) -> Result<()> {
        if !self.exists() {
            self.create_initial(DEFAULT_MIN_PER_LANGUAGE)?;
        }
        self.append_rows(std::slice::from_ref(track))
    }

    /// Write a fresh catalog: header, curated seed rows, then generated
    /// filler per language in the historical write order.
    fn create_initial(&self, min_per_language: usize) -> Result<()> {
        info!("Creating catalog at {}", self.path.display());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create catalog directory {}", parent.display())
                })?;
            }
        }

        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create catalog at {}", self.path.display()))?;
        let mut writer = csv::Writer::from_writer(file);
        writer
            .write_record(HEADER)
            .context("Failed to write catalog header")?;

        for track in seeder::base_tracks() {
            write_track(&mut writer, &track)?;
        }
        for language in seeder::SEED_WRITE_ORDER {
            for track in seeder::generate(language, min_per_language) {
                write_track(&mut writer, &track)?;
            }
        }

        writer.flush().with_context(|| {
            format!("Failed to flush new catalog at {}", self.path.display())
        })?;
        Ok(())
    }

    /// Append rows to the existing file as one flushed write call.
    fn append_rows(&self, tracks: &[Track]) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .with_context(|| {
                format!("Failed to open catalog for append at {}", self.path.display())
            })?;
        let mut writer = csv::Writer::from_writer(file);
        for track in tracks {
            write_track(&mut writer, track)?;
        }
        writer.flush().with_context(|| {
            format!("Failed to flush appended rows to {}", self.path.display())
        })?;
        Ok(())
    }

    /// Count stored rows per tracked language. Unrecognized languages are
    /// skipped. Any read or parse failure is reported to the caller, which
    /// treats the file as corrupt.
    fn count_tracked_languages(&self) -> Result<HashMap<&'static str, usize>> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;

        let mut counts: HashMap<&'static str, usize> =
            LANGUAGES.iter().map(|language| (*language, 0)).collect();
        for row in reader.deserialize::<RawTrack>() {
            let raw: RawTrack = row?;
            if let Some(count) = counts.get_mut(raw.language.as_str()) {
                *count += 1;
            }
        }
        Ok(counts)
    }
}

fn write_track(writer: &mut csv::Writer<File>, track: &Track) -> Result<()> {
    let energy = track.energy.to_string();
    let record: [&str; 6] = [
        &track.title,
        &track.artist,
        track.mood.as_str(),
        &energy,
        &track.language,
        track.link.as_deref().unwrap_or(""),
    ];
    writer
        .write_record(record)
        .with_context(|| format!("Failed to write catalog row for `{}`", track.title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, CatalogStore) {
        let dir = TempDir::new().expect("temp dir");
        let store = CatalogStore::new(dir.path().join("songs.csv"));
        (dir, store)
    }

    #[test]
    fn test_ensure_catalog_creates_file_with_coverage() {
        let (_dir, store) = temp_store();
        store.ensure_catalog(20).expect("bootstrap");
        assert!(store.exists());

        let tracks = store.load_all().expect("load");
        // 10 curated rows + 20 filler rows per tracked language.
        assert_eq!(tracks.len(), 10 + 20 * LANGUAGES.len());
        for language in LANGUAGES {
            let count = tracks.iter().filter(|t| t.language == language).count();
            assert!(count >= 20, "{language} has only {count} rows");
        }
    }

    #[test]
    fn test_ensure_catalog_is_idempotent() {
        let (_dir, store) = temp_store();
        store.ensure_catalog(20).expect("first bootstrap");
        let after_first = fs::metadata(store.path()).expect("metadata").len();

        store.ensure_catalog(20).expect("second run");
        let after_second = fs::metadata(store.path()).expect("metadata").len();
        assert_eq!(
            after_first, after_second,
            "second ensure_catalog must not write anything"
        );
    }

    #[test]
    fn test_ensure_catalog_tops_up_deficits_only() {
        let (_dir, store) = temp_store();

        // Start from a hand-written catalog with a single Telugu row.
        let mut file = File::create(store.path()).expect("create");
        writeln!(file, "title,artist,mood,energy,language,link").expect("header");
        writeln!(file, "Old Row,Someone,Happy,3,Telugu,").expect("row");
        drop(file);

        store.ensure_catalog(5).expect("top up");
        let tracks = store.load_all().expect("load");

        // Existing row survives untouched, deficit of 4 is appended.
        assert!(tracks.iter().any(|t| t.title == "Old Row"));
        let telugu = tracks.iter().filter(|t| t.language == "Telugu").count();
        assert_eq!(telugu, 5);
        for language in ["English", "Hindi", "Tamil", "Malayalam"] {
            let count = tracks.iter().filter(|t| t.language == language).count();
            assert_eq!(count, 5, "{language} should be topped up to the minimum");
        }
    }

    #[test]
    fn test_ensure_catalog_ignores_untracked_languages() {
        let (_dir, store) = temp_store();

        let mut file = File::create(store.path()).expect("create");
        writeln!(file, "title,artist,mood,energy,language,link").expect("header");
        for i in 0..30 {
            writeln!(file, "Song {i},Various,Calm,2,Klingon,").expect("row");
        }
        drop(file);

        store.ensure_catalog(3).expect("top up");
        let tracks = store.load_all().expect("load");
        for language in LANGUAGES {
            let count = tracks.iter().filter(|t| t.language == language).count();
            assert_eq!(count, 3, "{language} coverage despite untracked rows");
        }
    }

    #[test]
    fn test_ensure_catalog_rebuilds_corrupt_file() {
        let (_dir, store) = temp_store();

        // Invalid UTF-8 makes the count pass fail.
        fs::write(store.path(), b"title,artist\xff\xfe\nbroken").expect("write garbage");
        store.ensure_catalog(4).expect("rebuild");

        let tracks = store.load_all().expect("load rebuilt catalog");
        assert!(tracks.iter().all(|t| (1..=5).contains(&t.energy)));
        for language in LANGUAGES {
            assert!(tracks.iter().filter(|t| t.language == language).count() >= 4);
        }
    }

    #[test]
    fn test_load_all_excludes_rows_missing_title_or_mood() {
        let (_dir, store) = temp_store();

        let mut file = File::create(store.path()).expect("create");
        writeln!(file, "title,artist,mood,energy,language,link").expect("header");
        writeln!(file, ",Ghost,Happy,3,English,").expect("row");
        writeln!(file, "No Mood,Ghost,,3,English,").expect("row");
        writeln!(file, "Odd Mood,Ghost,Confused,3,English,").expect("row");
        writeln!(file, "Keeper,Ghost,Happy,3,English,").expect("row");
        drop(file);

        let tracks = store.load_all().expect("load");
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "Keeper");
    }

    #[test]
    fn test_load_all_repairs_and_clamps_energy() {
        let (_dir, store) = temp_store();

        let mut file = File::create(store.path()).expect("create");
        writeln!(file, "title,artist,mood,energy,language,link").expect("header");
        writeln!(file, "A,X,Happy,loud,English,").expect("row");
        writeln!(file, "B,X,Happy,9,English,").expect("row");
        writeln!(file, "C,X,Happy,-3,English,").expect("row");
        writeln!(file, "D,X,Happy,4,English,").expect("row");
        drop(file);

        let tracks = store.load_all().expect("load");
        let energies: Vec<u8> = tracks.iter().map(|t| t.energy).collect();
        assert_eq!(energies, vec![3, 5, 1, 4]);
        assert!(tracks.iter().all(|t| (1..=5).contains(&t.energy)));
    }

    #[test]
    fn test_load_all_maps_blank_link_to_none() {
        let (_dir, store) = temp_store();

        let mut file = File::create(store.path()).expect("create");
        writeln!(file, "title,artist,mood,energy,language,link").expect("header");
        writeln!(file, "A,X,Happy,3,English,   ").expect("row");
        writeln!(file, "B,X,Happy,3,English,https://example.com/b").expect("row");
        drop(file);

        let tracks = store.load_all().expect("load");
        assert_eq!(tracks[0].link, None);
        assert_eq!(tracks[1].link.as_deref(), Some("https://example.com/b"));
    }

    #[test]
    fn test_append_adds_one_row() {
        let (_dir, store) = temp_store();
        store.ensure_catalog(2).expect("bootstrap");
        let before = store.load_all().expect("load").len();

        let track = Track {
            title: "My Song, With Commas".to_string(),
            artist: "Me".to_string(),
            mood: Mood::Calm,
            energy: 2,
            language: "English".to_string(),
            link: Some("https://example.com/song".to_string()),
        };
        store.append(&track).expect("append");

        let tracks = store.load_all().expect("reload");
        assert_eq!(tracks.len(), before + 1);
        let stored = tracks.last().expect("appended row");
        assert_eq!(stored.title, "My Song, With Commas");
        assert_eq!(stored.mood, Mood::Calm);
    }

    #[test]
    fn test_append_initializes_missing_store() {
        let (_dir, store) = temp_store();
        assert!(!store.exists());

        let track = Track {
            title: "First".to_string(),
            artist: "Me".to_string(),
            mood: Mood::Happy,
            energy: 4,
            language: "English".to_string(),
            link: None,
        };
        store.append(&track).expect("append bootstraps first");

        let tracks = store.load_all().expect("load");
        assert!(tracks.iter().any(|t| t.title == "First"));
        // The bootstrap seeded full coverage before the append.
        assert!(tracks.len() > 1);
    }

    #[test]
    fn test_duplicates_are_permitted() {
        let (_dir, store) = temp_store();
        store.ensure_catalog(1).expect("bootstrap");

        let track = Track {
            title: "Twice".to_string(),
            artist: "Me".to_string(),
            mood: Mood::Sad,
            energy: 2,
            language: "English".to_string(),
            link: None,
        };
        store.append(&track).expect("first");
        store.append(&track).expect("second");

        let copies = store
            .load_all()
            .expect("load")
            .into_iter()
            .filter(|t| t.title == "Twice")
            .count();
        assert_eq!(copies, 2);
    }
}
