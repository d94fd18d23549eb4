//! Contextual polarity scorer
//!
//! Produces one scalar in [-1, 1] for the whole text: the token-count
//! weighted average of per-sentence polarity estimates. It runs independently
//! of the lexical scorer and only corroborates or dampens its findings
//! during aggregation.

use super::lexicon::Lexicon;
use super::normalize::NormalizedText;

/// Overall polarity of the text: negative values lean unpleasant, positive
/// values lean pleasant. Sentences without any polarity-bearing token are
/// excluded from the average; fully unscorable text is neutral (0).
pub fn score_context(text: &NormalizedText, lexicon: &Lexicon) -> f64 {
    let language = text.language;
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for sentence in &text.sentences {
        let mut positive = 0usize;
        let mut negative = 0usize;
        for token in &sentence.tokens {
            if lexicon.is_positive(language, token) {
                positive += 1;
            } else if lexicon.is_negative(language, token) {
                negative += 1;
            }
        }

        let scorable = positive + negative;
        if scorable == 0 {
            continue;
        }

        let polarity = (positive as f64 - negative as f64) / scorable as f64;
        let weight = sentence.tokens.len() as f64;
        weighted_sum += polarity * weight;
        total_weight += weight;
    }

    if total_weight == 0.0 {
        0.0
    } else {
        (weighted_sum / total_weight).clamp(-1.0, 1.0)
    }
}
