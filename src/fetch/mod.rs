//! Lyrics fetching
//!
//! Retrieves raw lyrics text for a (title, artist) pair from online sources.
//! Sources are pluggable behind the `LyricsSource` trait; the fetcher walks
//! its source list until one returns usable text, then cleans the result
//! before it reaches the analyzer.

use std::collections::HashMap;

use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config;
use crate::error::{Error, Result};

/// lyrics.ovh API base URL
const OVH_API_BASE: &str = "https://api.lyrics.ovh";

/// A provider of song lyrics
#[async_trait]
pub trait LyricsSource: Send + Sync {
    /// Fetch the lyrics of a song, or fail with `LyricsNotFound`
    async fn fetch(&self, artist: &str, title: &str) -> Result<String>;

    /// Source name, for logging
    fn name(&self) -> &str;
}

/// lyrics.ovh response body
#[derive(Debug, Deserialize)]
struct OvhResponse {
    lyrics: String,
}

/// Lyrics source backed by the lyrics.ovh JSON API
pub struct OvhLyricsSource {
    client: Client,
    base_url: String,
}

impl OvhLyricsSource {
    /// Create a new lyrics.ovh source
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: OVH_API_BASE.to_string(),
        }
    }

    /// Create a source with a custom base URL (for testing)
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for OvhLyricsSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LyricsSource for OvhLyricsSource {
    async fn fetch(&self, artist: &str, title: &str) -> Result<String> {
        let url = format!("{}/v1/{}/{}", self.base_url, artist, title);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::LyricsNotFound {
                title: title.to_string(),
                artist: artist.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(Error::Parse(format!(
                "lyrics.ovh returned status {}",
                response.status()
            )));
        }

        let body: OvhResponse = response.json().await?;
        Ok(body.lyrics)
    }

    fn name(&self) -> &str {
        "lyrics.ovh"
    }
}

/// In-memory lyrics source for tests and offline demos
pub struct MockLyricsSource {
    responses: HashMap<(String, String), String>,
}

impl MockLyricsSource {
    /// Create an empty mock source
    pub fn new() -> Self {
        Self { responses: HashMap::new() }
    }

    /// Register canned lyrics for a song
    pub fn add(&mut self, artist: &str, title: &str, lyrics: &str) {
        self.responses.insert(
            (artist.to_lowercase(), title.to_lowercase()),
            lyrics.to_string(),
        );
    }
}

impl Default for MockLyricsSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LyricsSource for MockLyricsSource {
    async fn fetch(&self, artist: &str, title: &str) -> Result<String> {
        self.responses
            .get(&(artist.to_lowercase(), title.to_lowercase()))
            .cloned()
            .ok_or_else(|| Error::LyricsNotFound {
                title: title.to_string(),
                artist: artist.to_string(),
            })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Fetches lyrics through an ordered list of sources and cleans the text
pub struct LyricsFetcher {
    sources: Vec<Box<dyn LyricsSource>>,
    section_marker: Regex,
    parenthetical: Regex,
}

impl LyricsFetcher {
    /// Create a fetcher with the default online source
    pub fn new() -> Self {
        Self::with_sources(vec![Box::new(OvhLyricsSource::new())])
    }

    /// Create a fetcher with a custom source list
    pub fn with_sources(sources: Vec<Box<dyn LyricsSource>>) -> Self {
        Self {
            sources,
            section_marker: Regex::new(r"\[[^\]]*\]").unwrap(),
            parenthetical: Regex::new(r"\([^)]*\)").unwrap(),
        }
    }

    /// Fetch and clean the lyrics of a song
    ///
    /// Walks the source list in order; a source that fails or returns too
    /// little text is skipped. Fails with `LyricsNotFound` only when every
    /// source is exhausted.
    pub async fn fetch_lyrics(&self, artist: &str, title: &str) -> Result<String> {
        for source in &self.sources {
            debug!("fetching '{}' by '{}' from {}", title, artist, source.name());
            match source.fetch(artist, title).await {
                Ok(raw) => {
                    let cleaned = self.clean_lyrics(&raw);
                    if cleaned.len() >= config::MIN_LYRICS_LEN {
                        return Ok(cleaned);
                    }
                    debug!(
                        "{} returned only {} usable characters, trying next source",
                        source.name(),
                        cleaned.len()
                    );
                }
                Err(err) if err.is_not_found() => {
                    debug!("{} has no lyrics for this song", source.name());
                }
                Err(err) => {
                    warn!("{} failed: {}", source.name(), err);
                }
            }
        }

        Err(Error::LyricsNotFound {
            title: title.to_string(),
            artist: artist.to_string(),
        })
    }

    /// Strip section markers, parentheticals and junk lines from raw lyrics
    pub fn clean_lyrics(&self, raw: &str) -> String {
        let without_sections = self.section_marker.replace_all(raw, "");
        let without_parens = self.parenthetical.replace_all(&without_sections, "");

        without_parens
            .lines()
            .map(str::trim)
            .filter(|line| line.chars().count() > 2 && !line.chars().all(|c| c.is_ascii_digit()))
            .collect::<Vec<&str>>()
            .join("\n")
    }
}

impl Default for LyricsFetcher {
    fn default() -> Self {
        Self::new()
    }
}
