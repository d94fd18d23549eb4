//! Lyric emotion analysis
//!
//! The engine runs in three stages: normalization, independent lexical and
//! contextual scoring, and aggregation into a final profile. It performs no
//! I/O, holds no mutable state between calls, and always produces the same
//! result for the same input text and language hint.

pub mod aggregate;
pub mod context;
pub mod lexical;
pub mod lexicon;
pub mod normalize;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use aggregate::AnalyzerConfig;
pub use lexicon::{Emotion, Language, LanguageHint, Lexicon, Valence};

use aggregate::aggregate;
use context::score_context;
use lexical::score_lexical;
use normalize::normalize;

/// Score breakdown for one emotion category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub emotion: Emotion,
    /// Accumulated lexical evidence, unnormalized
    pub raw_lexical: f64,
    /// The text-wide contextual polarity signal, in [-1, 1]
    pub contextual_signal: f64,
    /// Final blended intensity, in [0, 1]
    pub intensity: f64,
}

/// Emotional profile of one lyrics text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Language the text was scored against
    pub language: Language,
    pub primary: Emotion,
    pub secondary: Option<Emotion>,
    /// Combined intensity of the primary emotion
    pub intensity: f64,
    pub confidence: f64,
    /// Contributing lexicon terms, deduplicated, in order of appearance
    pub keywords: Vec<String>,
    /// All six categories, in priority order
    pub scores: Vec<CategoryScore>,
}

impl AnalysisResult {
    /// Score entry for a specific category
    pub fn score_for(&self, emotion: Emotion) -> &CategoryScore {
        &self.scores[emotion.index()]
    }

    /// True when the text carried no detectable sentiment
    pub fn is_zero_signal(&self) -> bool {
        self.intensity == 0.0 && self.confidence == 0.0
    }

    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} ({:.1}%)",
            capitalize(self.primary.as_str()),
            self.intensity * 100.0
        );

        if self.confidence > 0.7 {
            summary.push_str(" - high confidence");
        } else if self.confidence > 0.4 {
            summary.push_str(" - moderate confidence");
        } else {
            summary.push_str(" - low confidence");
        }

        if !self.keywords.is_empty() {
            let top: Vec<&str> = self.keywords.iter().take(3).map(String::as_str).collect();
            summary.push_str(&format!(" - keywords: {}", top.join(", ")));
        }

        summary
    }

    fn zero(language: Language) -> Self {
        let scores = Emotion::ALL
            .iter()
            .map(|&emotion| CategoryScore {
                emotion,
                raw_lexical: 0.0,
                contextual_signal: 0.0,
                intensity: 0.0,
            })
            .collect();

        Self {
            language,
            primary: Emotion::ALL[0],
            secondary: None,
            intensity: 0.0,
            confidence: 0.0,
            keywords: Vec::new(),
            scores,
        }
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Primary emotion: {}", self.primary)?;
        match self.secondary {
            Some(secondary) => writeln!(f, "Secondary emotion: {}", secondary)?,
            None => writeln!(f, "Secondary emotion: -")?,
        }
        writeln!(f, "Intensity: {:.3}", self.intensity)?;
        writeln!(f, "Confidence: {:.1}%", self.confidence * 100.0)?;
        if !self.keywords.is_empty() {
            writeln!(f, "Keywords: {}", self.keywords.join(", "))?;
        }
        writeln!(f, "Detected emotions:")?;
        for score in &self.scores {
            if score.intensity > 0.01 {
                writeln!(f, "  {}: {:.3}", score.emotion, score.intensity)?;
            }
        }
        Ok(())
    }
}

/// Emotion analyzer for song lyrics
///
/// Construction builds the immutable lexicon tables; after that the analyzer
/// is read-only and safe to share across threads.
pub struct MoodAnalyzer {
    lexicon: Lexicon,
    config: AnalyzerConfig,
}

impl MoodAnalyzer {
    /// Create an analyzer with the default blend parameters
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create an analyzer with custom blend parameters
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { lexicon: Lexicon::new(), config }
    }

    /// Analyze a lyrics text and return its emotional profile
    ///
    /// Pure and deterministic. Text that normalizes to nothing yields the
    /// zero-signal result rather than an error.
    pub fn analyze(&self, lyrics: &str, hint: LanguageHint) -> AnalysisResult {
        let text = normalize(lyrics, hint, &self.lexicon);
        if text.is_empty() {
            return AnalysisResult::zero(text.language);
        }

        let lexical = score_lexical(&text, &self.lexicon);
        let signal = score_context(&text, &self.lexicon);
        let blended = aggregate(&lexical.raw, signal, lexical.keywords.len(), &self.config);

        let scores = Emotion::ALL
            .iter()
            .map(|&emotion| CategoryScore {
                emotion,
                raw_lexical: lexical.raw[emotion.index()],
                contextual_signal: signal,
                intensity: blended.combined[emotion.index()],
            })
            .collect();

        AnalysisResult {
            language: text.language,
            primary: blended.primary,
            secondary: blended.secondary,
            intensity: blended.combined[blended.primary.index()],
            confidence: blended.confidence,
            keywords: lexical.keywords,
            scores,
        }
    }
}

impl Default for MoodAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sad_lyrics_profile() {
        let analyzer = MoodAnalyzer::new();
        let result = analyzer.analyze(
            "I'm tired of being what you want me to be... lost... broken... empty",
            LanguageHint::En,
        );

        assert_eq!(result.primary, Emotion::Sadness);
        assert!(result.intensity > 0.6, "intensity was {}", result.intensity);
        for keyword in ["tired", "lost", "broken", "empty"] {
            assert!(
                result.keywords.iter().any(|k| k == keyword),
                "missing keyword {}",
                keyword
            );
        }
        assert!(result.score_for(Emotion::Sadness).contextual_signal < 0.0);
    }

    #[test]
    fn test_happy_lyrics_profile() {
        let analyzer = MoodAnalyzer::new();
        let result = analyzer.analyze(
            "I'm so happy today, love and sunshine everywhere\nWe laugh and smile and celebrate",
            LanguageHint::En,
        );

        assert_eq!(result.primary, Emotion::Happiness);
        assert!(result.intensity > 0.5);
        assert!(result.confidence > 0.0);
    }

    #[test]
    fn test_portuguese_auto_detection() {
        let analyzer = MoodAnalyzer::new();
        let result = analyzer.analyze(
            "Estou muito triste e sozinho\nChorando lagrimas de saudade sem você",
            LanguageHint::Auto,
        );

        assert_eq!(result.language, Language::Pt);
        assert_eq!(result.primary, Emotion::Sadness);
        assert!(result.keywords.iter().any(|k| k == "saudade"));
    }

    #[test]
    fn test_all_six_categories_always_present() {
        let analyzer = MoodAnalyzer::new();
        for text in ["", "happy", "completely unrelated words"] {
            let result = analyzer.analyze(text, LanguageHint::En);
            assert_eq!(result.scores.len(), Emotion::COUNT);
            for (index, emotion) in Emotion::ALL.iter().enumerate() {
                assert_eq!(result.scores[index].emotion, *emotion);
                assert!((0.0..=1.0).contains(&result.scores[index].intensity));
            }
        }
    }

    #[test]
    fn test_determinism() {
        let analyzer = MoodAnalyzer::new();
        let text = "I remember the old days, tears and laughter, hope and fear";
        let first = analyzer.analyze(text, LanguageHint::En);
        let second = analyzer.analyze(text, LanguageHint::En);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_empty_input_is_zero_signal() {
        let analyzer = MoodAnalyzer::new();
        let result = analyzer.analyze("", LanguageHint::En);

        assert_eq!(result.primary, Emotion::Sadness);
        assert_eq!(result.secondary, None);
        assert_eq!(result.intensity, 0.0);
        assert_eq!(result.confidence, 0.0);
        assert!(result.keywords.is_empty());
        assert!(result.is_zero_signal());
    }

    #[test]
    fn test_no_matches_is_zero_signal_not_error() {
        let analyzer = MoodAnalyzer::new();
        let result = analyzer.analyze("table chair window door", LanguageHint::En);
        assert!(result.is_zero_signal());
    }

    #[test]
    fn test_repeated_keyword_never_lowers_intensity() {
        let analyzer = MoodAnalyzer::new();
        let base = analyzer.analyze("broken dreams and a happy song", LanguageHint::En);
        let reinforced =
            analyzer.analyze("broken broken dreams and a happy song", LanguageHint::En);
        assert!(
            reinforced.score_for(Emotion::Sadness).intensity
                >= base.score_for(Emotion::Sadness).intensity
        );
    }

    #[test]
    fn test_equal_scores_prefer_sadness_over_anger() {
        let analyzer = MoodAnalyzer::new();
        // "grief" and "furious" carry the same weight and no polarity
        let result = analyzer.analyze("grief and furious", LanguageHint::En);
        let sadness = result.score_for(Emotion::Sadness).intensity;
        let anger = result.score_for(Emotion::Anger).intensity;
        assert_eq!(sadness, anger);
        assert_eq!(result.primary, Emotion::Sadness);
    }

    #[test]
    fn test_weak_runner_up_is_not_reported_as_secondary() {
        let analyzer = MoodAnalyzer::new();
        // strong sadness, one low-weight nostalgia term ("old", 0.4 of 3.7)
        let result = analyzer.analyze(
            "despair and sorrow, broken and hopeless, old",
            LanguageHint::En,
        );
        assert_eq!(result.primary, Emotion::Sadness);
        assert!(result.score_for(Emotion::Nostalgia).intensity < 0.15);
        assert_eq!(result.secondary, None);
    }

    #[test]
    fn test_strong_runner_up_is_reported_as_secondary() {
        let analyzer = MoodAnalyzer::new();
        let result = analyzer.analyze(
            "sad tears falling down, broken and crying\nI remember our yesterday",
            LanguageHint::En,
        );
        assert_eq!(result.primary, Emotion::Sadness);
        assert_eq!(result.secondary, Some(Emotion::Nostalgia));
    }

    #[test]
    fn test_summary_mentions_primary_and_keywords() {
        let analyzer = MoodAnalyzer::new();
        let result = analyzer.analyze("so sad, crying lonely tears", LanguageHint::En);
        let summary = result.summary();
        assert!(summary.starts_with("Sadness"));
        assert!(summary.contains("keywords"));
    }
}
