//! # MusicMood
//!
//! A sentiment analysis system for music lyrics.
//!
//! This library provides:
//! - A pure lyric emotion analyzer (six-category lexicon scoring blended
//!   with a contextual polarity signal)
//! - Lyrics fetching from online sources
//! - SQLite persistence of analysis results
//! - Artist-level aggregation and song comparison
//!
//! ## Example
//!
//! ```rust
//! use musicmood::{LanguageHint, MoodAnalyzer};
//!
//! fn main() {
//!     let analyzer = MoodAnalyzer::new();
//!     let result = analyzer.analyze(
//!         "I'm tired of being what you want me to be",
//!         LanguageHint::Auto,
//!     );
//!
//!     println!("{}: {:.2}", result.primary, result.intensity);
//! }
//! ```

pub mod analyzer;
pub mod app;
pub mod error;
pub mod fetch;
pub mod store;

// Re-export main types from analyzer
pub use analyzer::{
    AnalysisResult, AnalyzerConfig, CategoryScore, Emotion, Language, LanguageHint, Lexicon,
    MoodAnalyzer, Valence,
};

// Re-export from the pipeline layers
pub use app::{ArtistProfile, Comparison, MusicMood, SongReport};
pub use error::{Error, Result};
pub use fetch::{LyricsFetcher, LyricsSource, MockLyricsSource, OvhLyricsSource};
pub use store::{EmotionBucket, EmotionStats, MoodStore, SongRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tuning parameters for the analysis pipeline
pub mod config {
    /// Default strength of the contextual boost/damp factor
    pub const DEFAULT_CONTEXT_FACTOR: f64 = 0.3;

    /// Default minimum combined intensity for a secondary emotion
    pub const DEFAULT_SECONDARY_THRESHOLD: f64 = 0.15;

    /// Default confidence weight of the primary/runner-up gap
    pub const DEFAULT_GAP_WEIGHT: f64 = 0.5;

    /// Default confidence weight of keyword evidence volume
    pub const DEFAULT_EVIDENCE_WEIGHT: f64 = 0.35;

    /// Default confidence weight of contextual valence agreement
    pub const DEFAULT_AGREEMENT_WEIGHT: f64 = 0.15;

    /// Distinct keyword count at which evidence confidence saturates
    pub const DEFAULT_EVIDENCE_SATURATION: usize = 8;

    /// Minimum cleaned lyrics length considered a usable fetch result
    pub const MIN_LYRICS_LEN: usize = 50;
}
