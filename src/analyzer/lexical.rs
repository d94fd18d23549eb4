//! Lexical scorer
//!
//! Accumulates weighted keyword evidence per emotion category and collects
//! the contributing terms. Each token position feeds at most one category:
//! the first lexicon match wins and phrase matches consume their tokens.

use super::lexicon::{Emotion, Language, Lexicon, PhraseEntry};
use super::normalize::NormalizedText;

/// How far back an intensifier may sit from the keyword it amplifies
const INTENSIFIER_WINDOW: usize = 2;

/// Raw per-category evidence plus the terms that produced it
#[derive(Debug, Clone)]
pub struct LexicalScores {
    pub raw: [f64; Emotion::COUNT],
    pub keywords: Vec<String>,
}

/// Scan normalized text against the lexicon for its resolved language
pub fn score_lexical(text: &NormalizedText, lexicon: &Lexicon) -> LexicalScores {
    let language = text.language;
    let mut raw = [0.0; Emotion::COUNT];
    let mut keywords = Vec::new();

    for sentence in &text.sentences {
        let tokens = &sentence.tokens;
        let mut i = 0;
        while i < tokens.len() {
            let multiplier = intensifier_at(lexicon, language, tokens, i);

            if let Some((phrase, width)) = match_phrase(lexicon, language, tokens, i) {
                raw[phrase.emotion.index()] += phrase.weight * multiplier;
                record_keyword(&mut keywords, &phrase.tokens.join(" "));
                i += width;
                continue;
            }

            if let Some((emotion, weight)) = lexicon.word(language, &tokens[i]) {
                raw[emotion.index()] += weight * multiplier;
                record_keyword(&mut keywords, &tokens[i]);
            }
            i += 1;
        }
    }

    LexicalScores { raw, keywords }
}

// Longest phrase starting at position `i`, with its token width.
fn match_phrase<'a>(
    lexicon: &'a Lexicon,
    language: Language,
    tokens: &[String],
    i: usize,
) -> Option<(&'a PhraseEntry, usize)> {
    for phrase in lexicon.phrases_starting(language, &tokens[i]) {
        let width = phrase.tokens.len();
        if i + width > tokens.len() {
            continue;
        }
        let matches = phrase
            .tokens
            .iter()
            .zip(&tokens[i..i + width])
            .all(|(expected, actual)| actual == expected);
        if matches {
            return Some((phrase, width));
        }
    }
    None
}

// Nearest intensifier within the window preceding position `i`, if any.
fn intensifier_at(lexicon: &Lexicon, language: Language, tokens: &[String], i: usize) -> f64 {
    for back in 1..=INTENSIFIER_WINDOW {
        if back > i {
            break;
        }
        if let Some(multiplier) = lexicon.intensifier(language, &tokens[i - back]) {
            return multiplier;
        }
    }
    1.0
}

fn record_keyword(keywords: &mut Vec<String>, term: &str) {
    if !keywords.iter().any(|k| k == term) {
        keywords.push(term.to_string());
    }
}
