//! Song analysis pipeline
//!
//! Ties the fetcher, the analyzer and the store together: fetch lyrics,
//! analyze them, persist the result, and answer artist-level questions from
//! the stored records.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analyzer::{LanguageHint, MoodAnalyzer, Valence};
use crate::error::Result;
use crate::fetch::LyricsFetcher;
use crate::store::{EmotionStats, MoodStore, SongRecord};

/// Result of an `analyze_song` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongReport {
    pub record: SongRecord,
    /// True when the record came from the store instead of a fresh analysis
    pub from_cache: bool,
}

impl fmt::Display for SongReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = &self.record;
        writeln!(f, "{} - {}", record.title, record.artist)?;
        writeln!(f, "Primary emotion: {}", record.primary)?;
        match record.secondary {
            Some(secondary) => writeln!(f, "Secondary emotion: {}", secondary)?,
            None => writeln!(f, "Secondary emotion: -")?,
        }
        writeln!(f, "Intensity: {:.3}", record.intensity)?;
        writeln!(f, "Confidence: {:.3}", record.confidence)?;
        if !record.keywords.is_empty() {
            writeln!(f, "Keywords: {}", record.keywords.join(", "))?;
        }
        writeln!(f, "Analyzed at: {}", record.analyzed_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        if self.from_cache {
            writeln!(f, "(from cache)")?;
        }
        writeln!(f, "Lyrics excerpt:")?;
        write!(f, "{}", excerpt(&record.lyrics, 200))?;
        Ok(())
    }
}

/// Aggregate view over every stored song of one artist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistProfile {
    pub artist: String,
    pub total_songs: i64,
    pub stats: EmotionStats,
    pub average_intensity: f64,
    pub saddest_song: Option<SongRecord>,
    pub happiest_song: Option<SongRecord>,
    pub recent: Vec<SongRecord>,
}

/// Stored songs ranked by signed mood score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub entries: Vec<SongRecord>,
}

impl Comparison {
    /// Highest-scoring entry, if any
    pub fn most_positive(&self) -> Option<&SongRecord> {
        self.entries.first()
    }

    /// Lowest-scoring entry, if any
    pub fn most_negative(&self) -> Option<&SongRecord> {
        self.entries.last()
    }
}

/// The full music mood pipeline
pub struct MusicMood {
    analyzer: MoodAnalyzer,
    fetcher: LyricsFetcher,
    store: MoodStore,
}

impl MusicMood {
    /// Open the pipeline against a database file, with the default fetcher
    pub fn open(db_path: &str) -> Result<Self> {
        Ok(Self::with_parts(
            MoodAnalyzer::new(),
            LyricsFetcher::new(),
            MoodStore::open(db_path)?,
        ))
    }

    /// Assemble the pipeline from custom parts (used by tests)
    pub fn with_parts(analyzer: MoodAnalyzer, fetcher: LyricsFetcher, store: MoodStore) -> Self {
        Self { analyzer, fetcher, store }
    }

    /// Analyze a song end to end
    ///
    /// Returns the stored record when one exists, unless `force_refresh` is
    /// set; otherwise fetches the lyrics, analyzes them and stores the
    /// outcome.
    pub async fn analyze_song(
        &self,
        title: &str,
        artist: &str,
        force_refresh: bool,
    ) -> Result<SongReport> {
        if !force_refresh {
            if let Some(record) = self.store.get(title, artist)? {
                info!("'{}' by '{}' already analyzed, using stored result", title, artist);
                return Ok(SongReport { record, from_cache: true });
            }
        }

        info!("analyzing '{}' by '{}'", title, artist);
        let lyrics = self.fetcher.fetch_lyrics(artist, title).await?;
        info!("lyrics found ({} characters)", lyrics.len());

        let analysis = self.analyzer.analyze(&lyrics, LanguageHint::Auto);
        let mut record = SongRecord::from_analysis(title, artist, &lyrics, &analysis);
        record.id = Some(self.store.upsert(&record)?);

        Ok(SongReport { record, from_cache: false })
    }

    /// Build an aggregate profile of an artist from stored analyses
    pub fn artist_profile(&self, artist: &str) -> Result<ArtistProfile> {
        let songs = self.store.by_artist(artist)?;
        let stats = self.store.emotion_stats(Some(artist))?;

        let average_intensity = if songs.is_empty() {
            0.0
        } else {
            songs.iter().map(|s| s.intensity).sum::<f64>() / songs.len() as f64
        };

        let saddest_song = extreme_song(&songs, Valence::Negative);
        let happiest_song = extreme_song(&songs, Valence::Positive);

        Ok(ArtistProfile {
            artist: artist.to_string(),
            total_songs: songs.len() as i64,
            stats,
            average_intensity,
            saddest_song,
            happiest_song,
            recent: songs.into_iter().take(5).collect(),
        })
    }

    /// Compare previously analyzed songs by signed mood score
    ///
    /// Songs without a stored analysis are skipped.
    pub fn compare_songs(&self, songs: &[(String, String)]) -> Result<Comparison> {
        let mut entries = Vec::new();
        for (title, artist) in songs {
            if let Some(record) = self.store.get(title, artist)? {
                entries.push(record);
            }
        }
        entries.sort_by(|a, b| {
            b.mood_score()
                .partial_cmp(&a.mood_score())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(Comparison { entries })
    }

    /// Direct access to the underlying store
    pub fn store(&self) -> &MoodStore {
        &self.store
    }
}

// Most intense stored song whose primary emotion has the given valence.
fn extreme_song(songs: &[SongRecord], valence: Valence) -> Option<SongRecord> {
    songs
        .iter()
        .filter(|s| s.primary.valence() == valence)
        .max_by(|a, b| {
            a.intensity
                .partial_cmp(&b.intensity)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .cloned()
}

fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}
