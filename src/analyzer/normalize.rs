//! Text normalization
//!
//! Turns raw lyric text into lowercase, diacritic-folded tokens grouped by
//! sentence, and resolves the `auto` language hint. The output is consumed by
//! both scorers and discarded after the analysis call.

use super::lexicon::{Language, LanguageHint, Lexicon};

/// Normalized, tokenized text for a single analysis
#[derive(Debug, Clone)]
pub struct NormalizedText {
    pub language: Language,
    pub sentences: Vec<Sentence>,
}

/// One sentence as an ordered token list
#[derive(Debug, Clone)]
pub struct Sentence {
    pub tokens: Vec<String>,
}

impl NormalizedText {
    /// True when nothing scorable survived normalization
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Total token count across sentences
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(|s| s.tokens.len()).sum()
    }
}

/// Normalize raw text and resolve the language hint
pub fn normalize(text: &str, hint: LanguageHint, lexicon: &Lexicon) -> NormalizedText {
    let sentences: Vec<Sentence> = text
        .split(is_sentence_boundary)
        .map(tokenize)
        .filter(|tokens| !tokens.is_empty())
        .map(|tokens| Sentence { tokens })
        .collect();

    let language = match hint {
        LanguageHint::En => Language::En,
        LanguageHint::Pt => Language::Pt,
        LanguageHint::Auto => detect_language(&sentences, lexicon),
    };

    NormalizedText { language, sentences }
}

// Lyrics are line-structured and often unpunctuated, so line breaks count as
// sentence boundaries alongside terminal punctuation.
fn is_sentence_boundary(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…' | '\n' | '\r')
}

fn tokenize(segment: &str) -> Vec<String> {
    segment
        .split_whitespace()
        .map(normalize_token)
        .filter(|t| !t.is_empty())
        .collect()
}

fn normalize_token(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .map(fold_char)
        .collect::<String>()
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_string()
}

// Keyword matching is diacritic-insensitive, so accented characters fold to
// their ASCII base before lookup.
fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        '’' => '\'',
        _ => c,
    }
}

// Majority vote over high-frequency marker words; ties resolve to English.
fn detect_language(sentences: &[Sentence], lexicon: &Lexicon) -> Language {
    let mut en_hits = 0usize;
    let mut pt_hits = 0usize;

    for sentence in sentences {
        for token in &sentence.tokens {
            if lexicon.is_marker(Language::En, token) {
                en_hits += 1;
            }
            if lexicon.is_marker(Language::Pt, token) {
                pt_hits += 1;
            }
        }
    }

    if pt_hits > en_hits {
        Language::Pt
    } else {
        Language::En
    }
}
