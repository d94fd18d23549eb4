//! Persistence of analysis results
//!
//! A small SQLite store keyed by (title, artist). Re-analyzing a song
//! replaces its previous record; the analyzer itself never touches this
//! layer.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analyzer::{AnalysisResult, Emotion};
use crate::error::{Error, Result};

/// A persisted song analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongRecord {
    pub id: Option<i64>,
    pub title: String,
    pub artist: String,
    pub lyrics: String,
    pub primary: Emotion,
    pub secondary: Option<Emotion>,
    pub intensity: f64,
    pub confidence: f64,
    pub keywords: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
}

impl SongRecord {
    /// Build a record from a fresh analysis
    pub fn from_analysis(
        title: &str,
        artist: &str,
        lyrics: &str,
        analysis: &AnalysisResult,
    ) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            artist: artist.to_string(),
            lyrics: lyrics.to_string(),
            primary: analysis.primary,
            secondary: analysis.secondary,
            intensity: analysis.intensity,
            confidence: analysis.confidence,
            keywords: analysis.keywords.iter().take(10).cloned().collect(),
            analyzed_at: Utc::now(),
        }
    }

    /// Signed mood score: negative-valence emotions count below zero
    pub fn mood_score(&self) -> f64 {
        use crate::analyzer::Valence;
        match self.primary.valence() {
            Valence::Negative => -self.intensity,
            Valence::Neutral => 0.0,
            Valence::Positive => self.intensity,
        }
    }
}

/// Per-emotion aggregate over stored analyses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionBucket {
    pub emotion: Emotion,
    pub count: i64,
    pub avg_intensity: f64,
}

/// Emotion distribution over a set of stored analyses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionStats {
    pub buckets: Vec<EmotionBucket>,
    pub total_songs: i64,
}

/// SQLite-backed store of song analyses
pub struct MoodStore {
    conn: Connection,
}

impl MoodStore {
    /// Open (and initialize if needed) the store at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS songs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                artist TEXT NOT NULL,
                lyrics TEXT NOT NULL,
                primary_emotion TEXT NOT NULL,
                secondary_emotion TEXT,
                intensity REAL NOT NULL,
                confidence REAL NOT NULL,
                keywords TEXT NOT NULL,
                analyzed_at TEXT NOT NULL,
                UNIQUE(title, artist)
            );",
        )?;
        Ok(())
    }

    /// Insert a record, replacing any previous analysis of the same song
    pub fn upsert(&self, record: &SongRecord) -> Result<i64> {
        let keywords = serde_json::to_string(&record.keywords)?;
        self.conn.execute(
            "INSERT INTO songs
                (title, artist, lyrics, primary_emotion, secondary_emotion,
                 intensity, confidence, keywords, analyzed_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
             ON CONFLICT(title, artist) DO UPDATE SET
                lyrics = excluded.lyrics,
                primary_emotion = excluded.primary_emotion,
                secondary_emotion = excluded.secondary_emotion,
                intensity = excluded.intensity,
                confidence = excluded.confidence,
                keywords = excluded.keywords,
                analyzed_at = excluded.analyzed_at",
            params![
                record.title,
                record.artist,
                record.lyrics,
                record.primary.as_str(),
                record.secondary.map(Emotion::as_str),
                record.intensity,
                record.confidence,
                keywords,
                record.analyzed_at.to_rfc3339(),
            ],
        )?;

        let id: i64 = self.conn.query_row(
            "SELECT id FROM songs WHERE title = ?1 AND artist = ?2",
            params![record.title, record.artist],
            |row| row.get(0),
        )?;
        debug!("stored analysis of '{}' by '{}' as #{}", record.title, record.artist, id);
        Ok(id)
    }

    /// Fetch the stored analysis of one song, if any
    pub fn get(&self, title: &str, artist: &str) -> Result<Option<SongRecord>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, title, artist, lyrics, primary_emotion, secondary_emotion,
                        intensity, confidence, keywords, analyzed_at
                 FROM songs WHERE title = ?1 AND artist = ?2",
                params![title, artist],
                Self::read_row,
            )
            .optional()?;

        row.map(Self::into_record).transpose()
    }

    /// All stored analyses of one artist, most recent first
    pub fn by_artist(&self, artist: &str) -> Result<Vec<SongRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, artist, lyrics, primary_emotion, secondary_emotion,
                    intensity, confidence, keywords, analyzed_at
             FROM songs WHERE artist = ?1 ORDER BY analyzed_at DESC, id DESC",
        )?;
        let rows = stmt
            .query_map(params![artist], Self::read_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter().map(Self::into_record).collect()
    }

    /// Emotion distribution, for one artist or across the whole store
    pub fn emotion_stats(&self, artist: Option<&str>) -> Result<EmotionStats> {
        let (scope, rows) = match artist {
            Some(artist) => {
                let mut stmt = self.conn.prepare(
                    "SELECT primary_emotion, COUNT(*), AVG(intensity)
                     FROM songs WHERE artist = ?1 GROUP BY primary_emotion",
                )?;
                let rows = stmt
                    .query_map(params![artist], |row| {
                        Ok((row.get::<_, String>(0)?, row.get(1)?, row.get(2)?))
                    })?
                    .collect::<rusqlite::Result<Vec<(String, i64, f64)>>>()?;
                ("one artist", rows)
            }
            None => {
                let mut stmt = self.conn.prepare(
                    "SELECT primary_emotion, COUNT(*), AVG(intensity)
                     FROM songs GROUP BY primary_emotion",
                )?;
                let rows = stmt
                    .query_map([], |row| {
                        Ok((row.get::<_, String>(0)?, row.get(1)?, row.get(2)?))
                    })?
                    .collect::<rusqlite::Result<Vec<(String, i64, f64)>>>()?;
                ("all songs", rows)
            }
        };
        debug!("computed emotion stats over {}", scope);

        let mut buckets = Vec::with_capacity(rows.len());
        let mut total = 0;
        for (name, count, avg_intensity) in rows {
            buckets.push(EmotionBucket {
                emotion: name.parse()?,
                count,
                avg_intensity,
            });
            total += count;
        }
        // deterministic order regardless of SQL grouping
        buckets.sort_by_key(|b| b.emotion.index());

        Ok(EmotionStats { buckets, total_songs: total })
    }

    fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
        Ok(RawRow {
            id: row.get(0)?,
            title: row.get(1)?,
            artist: row.get(2)?,
            lyrics: row.get(3)?,
            primary: row.get(4)?,
            secondary: row.get(5)?,
            intensity: row.get(6)?,
            confidence: row.get(7)?,
            keywords: row.get(8)?,
            analyzed_at: row.get(9)?,
        })
    }

    fn into_record(raw: RawRow) -> Result<SongRecord> {
        let analyzed_at = DateTime::parse_from_rfc3339(&raw.analyzed_at)
            .map_err(|e| Error::Parse(format!("bad timestamp in store: {}", e)))?
            .with_timezone(&Utc);

        Ok(SongRecord {
            id: Some(raw.id),
            title: raw.title,
            artist: raw.artist,
            lyrics: raw.lyrics,
            primary: raw.primary.parse()?,
            secondary: raw
                .secondary
                .as_deref()
                .map(|s| s.parse::<Emotion>())
                .transpose()?,
            intensity: raw.intensity,
            confidence: raw.confidence,
            keywords: serde_json::from_str(&raw.keywords)?,
            analyzed_at,
        })
    }
}

/// Row as read from SQLite, before parsing typed fields
struct RawRow {
    id: i64,
    title: String,
    artist: String,
    lyrics: String,
    primary: String,
    secondary: Option<String>,
    intensity: f64,
    confidence: f64,
    keywords: String,
    analyzed_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{LanguageHint, MoodAnalyzer};

    fn sample_record(title: &str, artist: &str, text: &str) -> SongRecord {
        let analyzer = MoodAnalyzer::new();
        let analysis = analyzer.analyze(text, LanguageHint::En);
        SongRecord::from_analysis(title, artist, text, &analysis)
    }

    #[test]
    fn test_round_trip() {
        let store = MoodStore::open_in_memory().unwrap();
        let record = sample_record("Fake Song", "Fake Artist", "so sad and lonely tonight");

        let id = store.upsert(&record).unwrap();
        let loaded = store.get("Fake Song", "Fake Artist").unwrap().unwrap();

        assert_eq!(loaded.id, Some(id));
        assert_eq!(loaded.primary, record.primary);
        assert_eq!(loaded.keywords, record.keywords);
        assert_eq!(loaded.analyzed_at.to_rfc3339(), record.analyzed_at.to_rfc3339());
    }

    #[test]
    fn test_get_missing_song() {
        let store = MoodStore::open_in_memory().unwrap();
        assert!(store.get("Nothing", "Nobody").unwrap().is_none());
    }

    #[test]
    fn test_upsert_replaces_existing_analysis() {
        let store = MoodStore::open_in_memory().unwrap();
        let first = sample_record("Song", "Artist", "so sad and lonely tonight");
        let second = sample_record("Song", "Artist", "happy sunshine, love and laughter");

        let first_id = store.upsert(&first).unwrap();
        let second_id = store.upsert(&second).unwrap();
        assert_eq!(first_id, second_id);

        let loaded = store.get("Song", "Artist").unwrap().unwrap();
        assert_eq!(loaded.primary, Emotion::Happiness);

        let all = store.by_artist("Artist").unwrap();
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_by_artist_and_stats() {
        let store = MoodStore::open_in_memory().unwrap();
        store
            .upsert(&sample_record("Blue", "Artist", "tears and sorrow, crying alone"))
            .unwrap();
        store
            .upsert(&sample_record("Gold", "Artist", "happy sunshine, love and laughter"))
            .unwrap();
        store
            .upsert(&sample_record("Other", "Someone Else", "rage and hate, furious"))
            .unwrap();

        let songs = store.by_artist("Artist").unwrap();
        assert_eq!(songs.len(), 2);

        let stats = store.emotion_stats(Some("Artist")).unwrap();
        assert_eq!(stats.total_songs, 2);
        assert_eq!(stats.buckets.len(), 2);
        assert!(stats
            .buckets
            .iter()
            .any(|b| b.emotion == Emotion::Sadness && b.count == 1));

        let global = store.emotion_stats(None).unwrap();
        assert_eq!(global.total_songs, 3);
    }

    #[test]
    fn test_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("musicmood.db");

        {
            let store = MoodStore::open(&path).unwrap();
            store
                .upsert(&sample_record("Blue", "Artist", "tears and sorrow, crying alone"))
                .unwrap();
        }

        let store = MoodStore::open(&path).unwrap();
        let loaded = store.get("Blue", "Artist").unwrap().unwrap();
        assert_eq!(loaded.primary, Emotion::Sadness);
    }

    #[test]
    fn test_mood_score_sign() {
        let sad = sample_record("Blue", "Artist", "tears and sorrow, crying alone");
        assert!(sad.mood_score() < 0.0);
        let happy = sample_record("Gold", "Artist", "happy sunshine, love and laughter");
        assert!(happy.mood_score() > 0.0);
    }
}
