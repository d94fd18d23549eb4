//! Emotion categories and the static keyword tables behind the analyzer
//!
//! All tables are built once in `Lexicon::new` and never mutated afterwards,
//! so a single `Lexicon` can be shared freely across concurrent analyses.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Emotion categories recognized by the analyzer
///
/// The declaration order is the fixed priority order used to break score
/// ties, so it must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Sadness,
    Anger,
    Happiness,
    Fear,
    Hope,
    Nostalgia,
}

impl Emotion {
    /// All categories, in priority order
    pub const ALL: [Emotion; 6] = [
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Happiness,
        Emotion::Fear,
        Emotion::Hope,
        Emotion::Nostalgia,
    ];

    /// Number of categories
    pub const COUNT: usize = Self::ALL.len();

    /// Position in the priority order, usable as an array index
    pub fn index(self) -> usize {
        self as usize
    }

    /// Valence direction of this category
    pub fn valence(self) -> Valence {
        match self {
            Emotion::Sadness | Emotion::Anger | Emotion::Fear => Valence::Negative,
            Emotion::Happiness | Emotion::Hope => Valence::Positive,
            Emotion::Nostalgia => Valence::Neutral,
        }
    }

    /// Lowercase name, matching the serialized form
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Happiness => "happiness",
            Emotion::Fear => "fear",
            Emotion::Hope => "hope",
            Emotion::Nostalgia => "nostalgia",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sadness" => Ok(Emotion::Sadness),
            "anger" => Ok(Emotion::Anger),
            "happiness" => Ok(Emotion::Happiness),
            "fear" => Ok(Emotion::Fear),
            "hope" => Ok(Emotion::Hope),
            "nostalgia" => Ok(Emotion::Nostalgia),
            other => Err(Error::InvalidInput(format!("unknown emotion: {}", other))),
        }
    }
}

/// Valence direction of an emotion category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Valence {
    Negative,
    Neutral,
    Positive,
}

/// Supported lyric languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Pt,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Pt => write!(f, "pt"),
        }
    }
}

/// Language hint accepted by `analyze`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageHint {
    En,
    Pt,
    Auto,
}

impl FromStr for LanguageHint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(LanguageHint::En),
            "pt" => Ok(LanguageHint::Pt),
            "auto" => Ok(LanguageHint::Auto),
            other => Err(Error::InvalidInput(format!(
                "unsupported language hint: {} (expected pt, en or auto)",
                other
            ))),
        }
    }
}

/// A multi-word lexicon phrase with its category and weight
#[derive(Debug, Clone, Copy)]
pub struct PhraseEntry {
    pub tokens: &'static [&'static str],
    pub emotion: Emotion,
    pub weight: f64,
}

/// Per-language lookup tables
struct LanguageTable {
    words: HashMap<&'static str, (Emotion, f64)>,
    phrases: HashMap<&'static str, Vec<PhraseEntry>>,
    intensifiers: HashMap<&'static str, f64>,
    markers: HashSet<&'static str>,
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
}

impl LanguageTable {
    fn build(
        words: &[(&'static str, Emotion, f64)],
        phrases: &[(&'static [&'static str], Emotion, f64)],
        intensifiers: &[(&'static str, f64)],
        markers: &[&'static str],
        positive: &[&'static str],
        negative: &[&'static str],
    ) -> Self {
        let mut word_map = HashMap::with_capacity(words.len());
        for &(term, emotion, weight) in words {
            // first declaration wins; a term never feeds two categories
            word_map.entry(term).or_insert((emotion, weight));
        }

        let mut phrase_map: HashMap<&'static str, Vec<PhraseEntry>> = HashMap::new();
        for &(tokens, emotion, weight) in phrases {
            phrase_map
                .entry(tokens[0])
                .or_default()
                .push(PhraseEntry { tokens, emotion, weight });
        }
        for entries in phrase_map.values_mut() {
            // longest phrase first so the most specific match is tried first
            entries.sort_by(|a, b| b.tokens.len().cmp(&a.tokens.len()));
        }

        Self {
            words: word_map,
            phrases: phrase_map,
            intensifiers: intensifiers.iter().copied().collect(),
            markers: markers.iter().copied().collect(),
            positive: positive.iter().copied().collect(),
            negative: negative.iter().copied().collect(),
        }
    }
}

/// Immutable keyword, intensifier and polarity tables for all languages
pub struct Lexicon {
    en: LanguageTable,
    pt: LanguageTable,
}

impl Lexicon {
    /// Build the full lexicon
    pub fn new() -> Self {
        Self {
            en: LanguageTable::build(
                EN_TERMS,
                EN_PHRASES,
                EN_INTENSIFIERS,
                EN_MARKERS,
                EN_POSITIVE,
                EN_NEGATIVE,
            ),
            pt: LanguageTable::build(
                PT_TERMS,
                PT_PHRASES,
                PT_INTENSIFIERS,
                PT_MARKERS,
                PT_POSITIVE,
                PT_NEGATIVE,
            ),
        }
    }

    fn table(&self, language: Language) -> &LanguageTable {
        match language {
            Language::En => &self.en,
            Language::Pt => &self.pt,
        }
    }

    /// Look up a single-word keyword
    pub fn word(&self, language: Language, token: &str) -> Option<(Emotion, f64)> {
        self.table(language).words.get(token).copied()
    }

    /// Phrases whose first word is `token`, longest first
    pub fn phrases_starting(&self, language: Language, token: &str) -> &[PhraseEntry] {
        self.table(language)
            .phrases
            .get(token)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Intensifier multiplier for a token, if any
    pub fn intensifier(&self, language: Language, token: &str) -> Option<f64> {
        self.table(language).intensifiers.get(token).copied()
    }

    /// Whether a token is a high-frequency marker word of the language
    pub fn is_marker(&self, language: Language, token: &str) -> bool {
        self.table(language).markers.contains(token)
    }

    /// Whether a token carries positive polarity
    pub fn is_positive(&self, language: Language, token: &str) -> bool {
        self.table(language).positive.contains(token)
    }

    /// Whether a token carries negative polarity
    pub fn is_negative(&self, language: Language, token: &str) -> bool {
        self.table(language).negative.contains(token)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

// Keyword tables. Terms are stored lowercase with diacritics already folded,
// the same form the normalizer produces, and include the inflections that
// actually show up in lyrics.

const EN_TERMS: &[(&str, Emotion, f64)] = &[
    // sadness
    ("sad", Emotion::Sadness, 1.0),
    ("sadness", Emotion::Sadness, 1.0),
    ("cry", Emotion::Sadness, 0.9),
    ("crying", Emotion::Sadness, 0.9),
    ("cried", Emotion::Sadness, 0.9),
    ("tears", Emotion::Sadness, 0.8),
    ("pain", Emotion::Sadness, 0.8),
    ("hurt", Emotion::Sadness, 0.8),
    ("hurts", Emotion::Sadness, 0.8),
    ("broken", Emotion::Sadness, 0.9),
    ("lonely", Emotion::Sadness, 0.9),
    ("loneliness", Emotion::Sadness, 0.9),
    ("empty", Emotion::Sadness, 0.8),
    ("alone", Emotion::Sadness, 0.7),
    ("sorrow", Emotion::Sadness, 0.9),
    ("grief", Emotion::Sadness, 0.9),
    ("melancholy", Emotion::Sadness, 0.8),
    ("despair", Emotion::Sadness, 1.0),
    ("hopeless", Emotion::Sadness, 0.9),
    ("depression", Emotion::Sadness, 0.9),
    ("tired", Emotion::Sadness, 0.6),
    ("lost", Emotion::Sadness, 0.7),
    ("goodbye", Emotion::Sadness, 0.5),
    // anger
    ("angry", Emotion::Anger, 1.0),
    ("anger", Emotion::Anger, 1.0),
    ("rage", Emotion::Anger, 1.0),
    ("hate", Emotion::Anger, 0.9),
    ("hatred", Emotion::Anger, 0.9),
    ("mad", Emotion::Anger, 0.7),
    ("furious", Emotion::Anger, 0.9),
    ("annoyed", Emotion::Anger, 0.6),
    ("frustrated", Emotion::Anger, 0.7),
    ("irritated", Emotion::Anger, 0.6),
    ("violence", Emotion::Anger, 0.8),
    ("fight", Emotion::Anger, 0.6),
    ("fighting", Emotion::Anger, 0.6),
    ("war", Emotion::Anger, 0.6),
    ("destroy", Emotion::Anger, 0.7),
    ("scream", Emotion::Anger, 0.5),
    ("burn", Emotion::Anger, 0.5),
    // happiness
    ("happy", Emotion::Happiness, 1.0),
    ("happiness", Emotion::Happiness, 1.0),
    ("joy", Emotion::Happiness, 0.9),
    ("smile", Emotion::Happiness, 0.8),
    ("smiling", Emotion::Happiness, 0.8),
    ("laugh", Emotion::Happiness, 0.8),
    ("laughing", Emotion::Happiness, 0.8),
    ("love", Emotion::Happiness, 0.7),
    ("amazing", Emotion::Happiness, 0.7),
    ("wonderful", Emotion::Happiness, 0.8),
    ("beautiful", Emotion::Happiness, 0.7),
    ("perfect", Emotion::Happiness, 0.7),
    ("awesome", Emotion::Happiness, 0.7),
    ("fantastic", Emotion::Happiness, 0.7),
    ("celebration", Emotion::Happiness, 0.8),
    ("celebrate", Emotion::Happiness, 0.8),
    ("sunshine", Emotion::Happiness, 0.6),
    ("dancing", Emotion::Happiness, 0.5),
    // fear
    ("fear", Emotion::Fear, 1.0),
    ("scared", Emotion::Fear, 0.9),
    ("afraid", Emotion::Fear, 0.9),
    ("terror", Emotion::Fear, 0.9),
    ("panic", Emotion::Fear, 0.9),
    ("anxiety", Emotion::Fear, 0.8),
    ("anxious", Emotion::Fear, 0.8),
    ("worried", Emotion::Fear, 0.7),
    ("nervous", Emotion::Fear, 0.6),
    ("frightened", Emotion::Fear, 0.9),
    ("paranoid", Emotion::Fear, 0.7),
    ("insecure", Emotion::Fear, 0.6),
    ("vulnerable", Emotion::Fear, 0.6),
    // hope
    ("hope", Emotion::Hope, 1.0),
    ("hoping", Emotion::Hope, 0.9),
    ("dream", Emotion::Hope, 0.8),
    ("dreams", Emotion::Hope, 0.8),
    ("future", Emotion::Hope, 0.6),
    ("believe", Emotion::Hope, 0.7),
    ("faith", Emotion::Hope, 0.8),
    ("trust", Emotion::Hope, 0.6),
    ("optimistic", Emotion::Hope, 0.8),
    ("bright", Emotion::Hope, 0.6),
    ("light", Emotion::Hope, 0.5),
    ("tomorrow", Emotion::Hope, 0.6),
    ("better", Emotion::Hope, 0.5),
    ("heal", Emotion::Hope, 0.7),
    ("rise", Emotion::Hope, 0.5),
    // nostalgia
    ("remember", Emotion::Nostalgia, 0.9),
    ("memory", Emotion::Nostalgia, 0.9),
    ("memories", Emotion::Nostalgia, 0.9),
    ("past", Emotion::Nostalgia, 0.7),
    ("yesterday", Emotion::Nostalgia, 0.8),
    ("childhood", Emotion::Nostalgia, 0.8),
    ("old", Emotion::Nostalgia, 0.4),
    ("miss", Emotion::Nostalgia, 0.7),
    ("missing", Emotion::Nostalgia, 0.7),
    ("nostalgia", Emotion::Nostalgia, 1.0),
    ("reminisce", Emotion::Nostalgia, 0.9),
];

const EN_PHRASES: &[(&[&str], Emotion, f64)] = &[
    (&["used", "to"], Emotion::Nostalgia, 0.8),
    (&["back", "then"], Emotion::Nostalgia, 0.8),
    (&["those", "days"], Emotion::Nostalgia, 0.7),
    (&["fall", "apart"], Emotion::Sadness, 0.8),
];

const EN_INTENSIFIERS: &[(&str, f64)] = &[
    ("extremely", 1.8),
    ("absolutely", 1.8),
    ("completely", 1.7),
    ("totally", 1.6),
    ("incredibly", 1.6),
    ("very", 1.4),
    ("really", 1.3),
    ("so", 1.2),
];

const EN_MARKERS: &[&str] = &[
    "the", "and", "you", "that", "with", "for", "this", "but", "not", "what", "all", "your",
    "was", "are", "i'm", "don't", "it's",
];

const EN_POSITIVE: &[&str] = &[
    "love", "happy", "joy", "smile", "laugh", "beautiful", "wonderful", "amazing", "perfect",
    "good", "great", "sweet", "shine", "light", "hope", "dream", "free", "alive", "warm",
    "heaven", "sunshine", "paradise",
];

const EN_NEGATIVE: &[&str] = &[
    "sad", "cry", "tears", "pain", "hurt", "broken", "lonely", "empty", "hate", "fear", "dark",
    "lost", "die", "dead", "cold", "alone", "sorrow", "scared", "afraid", "wrong", "tired",
];

const PT_TERMS: &[(&str, Emotion, f64)] = &[
    // tristeza
    ("triste", Emotion::Sadness, 1.0),
    ("tristeza", Emotion::Sadness, 1.0),
    ("chorar", Emotion::Sadness, 0.9),
    ("chorando", Emotion::Sadness, 0.9),
    ("chorei", Emotion::Sadness, 0.9),
    ("lagrimas", Emotion::Sadness, 0.8),
    ("dor", Emotion::Sadness, 0.8),
    ("machucado", Emotion::Sadness, 0.7),
    ("quebrado", Emotion::Sadness, 0.9),
    ("sozinho", Emotion::Sadness, 0.8),
    ("sozinha", Emotion::Sadness, 0.8),
    ("vazio", Emotion::Sadness, 0.8),
    ("solidao", Emotion::Sadness, 0.9),
    ("depressao", Emotion::Sadness, 0.9),
    ("desespero", Emotion::Sadness, 1.0),
    ("cansado", Emotion::Sadness, 0.6),
    ("cansada", Emotion::Sadness, 0.6),
    ("perdido", Emotion::Sadness, 0.7),
    ("perdida", Emotion::Sadness, 0.7),
    ("adeus", Emotion::Sadness, 0.5),
    // raiva
    ("raiva", Emotion::Anger, 1.0),
    ("odio", Emotion::Anger, 0.9),
    ("bravo", Emotion::Anger, 0.7),
    ("furioso", Emotion::Anger, 0.9),
    ("furiosa", Emotion::Anger, 0.9),
    ("irritado", Emotion::Anger, 0.6),
    ("frustrado", Emotion::Anger, 0.7),
    ("violencia", Emotion::Anger, 0.8),
    ("luta", Emotion::Anger, 0.6),
    ("guerra", Emotion::Anger, 0.6),
    ("destruir", Emotion::Anger, 0.7),
    ("gritar", Emotion::Anger, 0.5),
    // felicidade
    ("feliz", Emotion::Happiness, 1.0),
    ("felicidade", Emotion::Happiness, 1.0),
    ("alegria", Emotion::Happiness, 0.9),
    ("alegre", Emotion::Happiness, 0.9),
    ("sorriso", Emotion::Happiness, 0.8),
    ("sorrir", Emotion::Happiness, 0.8),
    ("rir", Emotion::Happiness, 0.8),
    ("amor", Emotion::Happiness, 0.7),
    ("incrivel", Emotion::Happiness, 0.7),
    ("maravilhoso", Emotion::Happiness, 0.8),
    ("lindo", Emotion::Happiness, 0.7),
    ("linda", Emotion::Happiness, 0.7),
    ("perfeito", Emotion::Happiness, 0.7),
    ("perfeita", Emotion::Happiness, 0.7),
    ("fantastico", Emotion::Happiness, 0.7),
    ("celebracao", Emotion::Happiness, 0.8),
    ("festa", Emotion::Happiness, 0.6),
    // medo
    ("medo", Emotion::Fear, 1.0),
    ("assustado", Emotion::Fear, 0.9),
    ("assustada", Emotion::Fear, 0.9),
    ("terror", Emotion::Fear, 0.9),
    ("panico", Emotion::Fear, 0.9),
    ("ansiedade", Emotion::Fear, 0.8),
    ("preocupado", Emotion::Fear, 0.7),
    ("nervoso", Emotion::Fear, 0.6),
    ("amedrontado", Emotion::Fear, 0.9),
    ("paranoico", Emotion::Fear, 0.7),
    ("inseguro", Emotion::Fear, 0.6),
    // esperanca
    ("esperanca", Emotion::Hope, 1.0),
    ("sonho", Emotion::Hope, 0.8),
    ("sonhos", Emotion::Hope, 0.8),
    ("sonhar", Emotion::Hope, 0.8),
    ("futuro", Emotion::Hope, 0.6),
    ("acreditar", Emotion::Hope, 0.7),
    ("acredito", Emotion::Hope, 0.7),
    ("fe", Emotion::Hope, 0.8),
    ("confianca", Emotion::Hope, 0.6),
    ("otimista", Emotion::Hope, 0.8),
    ("brilhante", Emotion::Hope, 0.6),
    ("luz", Emotion::Hope, 0.5),
    ("amanha", Emotion::Hope, 0.6),
    ("melhor", Emotion::Hope, 0.5),
    ("curar", Emotion::Hope, 0.7),
    // nostalgia
    ("saudade", Emotion::Nostalgia, 1.0),
    ("saudades", Emotion::Nostalgia, 1.0),
    ("lembrar", Emotion::Nostalgia, 0.9),
    ("lembro", Emotion::Nostalgia, 0.9),
    ("lembranca", Emotion::Nostalgia, 0.9),
    ("memoria", Emotion::Nostalgia, 0.9),
    ("memorias", Emotion::Nostalgia, 0.9),
    ("passado", Emotion::Nostalgia, 0.7),
    ("ontem", Emotion::Nostalgia, 0.8),
    ("infancia", Emotion::Nostalgia, 0.8),
    ("velho", Emotion::Nostalgia, 0.4),
    ("antigamente", Emotion::Nostalgia, 0.8),
    ("costumava", Emotion::Nostalgia, 0.7),
    ("nostalgia", Emotion::Nostalgia, 1.0),
];

const PT_PHRASES: &[(&[&str], Emotion, f64)] = &[
    (&["sem", "esperanca"], Emotion::Sadness, 0.9),
    (&["com", "medo"], Emotion::Fear, 0.9),
    (&["naquela", "epoca"], Emotion::Nostalgia, 0.8),
];

const PT_INTENSIFIERS: &[(&str, f64)] = &[
    ("extremamente", 1.8),
    ("absolutamente", 1.8),
    ("completamente", 1.7),
    ("totalmente", 1.6),
    ("incrivelmente", 1.6),
    ("muito", 1.5),
    ("realmente", 1.3),
    ("bastante", 1.3),
    ("tao", 1.2),
];

const PT_MARKERS: &[&str] = &[
    "que", "nao", "de", "um", "uma", "para", "com", "meu", "minha", "voce", "mais", "sem",
    "por", "eu", "esta", "estou", "como",
];

const PT_POSITIVE: &[&str] = &[
    "amor", "feliz", "alegria", "sorriso", "rir", "lindo", "linda", "maravilhoso", "incrivel",
    "perfeito", "bom", "boa", "doce", "brilhar", "luz", "esperanca", "sonho", "livre", "vivo",
    "ceu",
];

const PT_NEGATIVE: &[&str] = &[
    "triste", "tristeza", "chorar", "lagrimas", "dor", "machucado", "quebrado", "sozinho",
    "sozinha", "vazio", "odio", "medo", "escuro", "perdido", "perdida", "morrer", "morto",
    "frio", "cansado", "cansada",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(Emotion::ALL[0], Emotion::Sadness);
        assert_eq!(Emotion::ALL[1], Emotion::Anger);
        assert_eq!(Emotion::Sadness.index(), 0);
        assert_eq!(Emotion::Nostalgia.index(), 5);
    }

    #[test]
    fn test_valence_mapping() {
        assert_eq!(Emotion::Sadness.valence(), Valence::Negative);
        assert_eq!(Emotion::Anger.valence(), Valence::Negative);
        assert_eq!(Emotion::Fear.valence(), Valence::Negative);
        assert_eq!(Emotion::Happiness.valence(), Valence::Positive);
        assert_eq!(Emotion::Hope.valence(), Valence::Positive);
        assert_eq!(Emotion::Nostalgia.valence(), Valence::Neutral);
    }

    #[test]
    fn test_emotion_round_trip() {
        for emotion in Emotion::ALL {
            let parsed: Emotion = emotion.as_str().parse().unwrap();
            assert_eq!(parsed, emotion);
        }
        assert!("joyful".parse::<Emotion>().is_err());
    }

    #[test]
    fn test_language_hint_parsing() {
        assert_eq!("pt".parse::<LanguageHint>().unwrap(), LanguageHint::Pt);
        assert_eq!("en".parse::<LanguageHint>().unwrap(), LanguageHint::En);
        assert_eq!("auto".parse::<LanguageHint>().unwrap(), LanguageHint::Auto);
        assert!("klingon".parse::<LanguageHint>().is_err());
    }

    #[test]
    fn test_every_category_has_terms_in_both_languages() {
        let lexicon = Lexicon::new();
        for language in [Language::En, Language::Pt] {
            for emotion in Emotion::ALL {
                let table = lexicon.table(language);
                let has_word = table.words.values().any(|&(e, _)| e == emotion);
                let has_phrase = table
                    .phrases
                    .values()
                    .flatten()
                    .any(|p| p.emotion == emotion);
                assert!(
                    has_word || has_phrase,
                    "no {} terms for {:?}",
                    emotion,
                    language
                );
            }
        }
    }

    #[test]
    fn test_weights_and_multipliers_in_range() {
        for &(term, _, weight) in EN_TERMS.iter().chain(PT_TERMS.iter()) {
            assert!(weight > 0.0 && weight <= 1.0, "bad weight for {}", term);
        }
        for &(term, mult) in EN_INTENSIFIERS.iter().chain(PT_INTENSIFIERS.iter()) {
            assert!(mult > 1.0, "bad multiplier for {}", term);
        }
    }

    #[test]
    fn test_lookups() {
        let lexicon = Lexicon::new();
        assert_eq!(
            lexicon.word(Language::En, "broken"),
            Some((Emotion::Sadness, 0.9))
        );
        assert_eq!(lexicon.word(Language::Pt, "saudade"), Some((Emotion::Nostalgia, 1.0)));
        assert_eq!(lexicon.word(Language::En, "saudade"), None);
        assert_eq!(lexicon.intensifier(Language::En, "very"), Some(1.4));
        assert!(lexicon.intensifier(Language::En, "banana").is_none());

        let phrases = lexicon.phrases_starting(Language::En, "used");
        assert_eq!(phrases.len(), 1);
        assert_eq!(phrases[0].emotion, Emotion::Nostalgia);
    }
}
