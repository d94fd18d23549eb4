//! Emotion aggregation
//!
//! Blends the raw lexical scores with the contextual polarity signal into a
//! combined intensity per category, then selects the primary and secondary
//! emotions and derives a confidence value.

use crate::config;

use super::lexicon::{Emotion, Valence};

/// Tunable blend parameters
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Strength of the contextual boost/damp applied to matching valences
    pub context_factor: f64,
    /// Minimum combined intensity for a secondary emotion to be reported
    pub secondary_threshold: f64,
    /// Confidence weight of the primary/runner-up intensity gap
    pub gap_weight: f64,
    /// Confidence weight of the keyword evidence volume
    pub evidence_weight: f64,
    /// Confidence weight of valence agreement with the contextual signal
    pub agreement_weight: f64,
    /// Distinct keyword count at which the evidence factor saturates
    pub evidence_saturation: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            context_factor: config::DEFAULT_CONTEXT_FACTOR,
            secondary_threshold: config::DEFAULT_SECONDARY_THRESHOLD,
            gap_weight: config::DEFAULT_GAP_WEIGHT,
            evidence_weight: config::DEFAULT_EVIDENCE_WEIGHT,
            agreement_weight: config::DEFAULT_AGREEMENT_WEIGHT,
            evidence_saturation: config::DEFAULT_EVIDENCE_SATURATION,
        }
    }
}

/// Outcome of the blend step, before result assembly
#[derive(Debug, Clone)]
pub struct Aggregate {
    pub combined: [f64; Emotion::COUNT],
    pub primary: Emotion,
    pub secondary: Option<Emotion>,
    pub confidence: f64,
}

/// Blend lexical and contextual signals and pick the winning categories
pub fn aggregate(
    raw: &[f64; Emotion::COUNT],
    signal: f64,
    keyword_count: usize,
    cfg: &AnalyzerConfig,
) -> Aggregate {
    let combined = combine(raw, signal, cfg.context_factor);
    let (primary, secondary) = select(&combined, cfg.secondary_threshold);
    let confidence = confidence(&combined, primary, signal, keyword_count, cfg);

    Aggregate { combined, primary, secondary, confidence }
}

// Max-normalize the raw scores, then boost categories whose valence agrees
// with the signal's sign and damp those that disagree. Neutral-valence
// categories pass through unchanged.
fn combine(raw: &[f64; Emotion::COUNT], signal: f64, factor: f64) -> [f64; Emotion::COUNT] {
    let max = raw.iter().copied().fold(0.0, f64::max);
    let mut combined = [0.0; Emotion::COUNT];
    if max <= 0.0 {
        return combined;
    }

    let magnitude = signal.abs();
    for emotion in Emotion::ALL {
        let normalized = raw[emotion.index()] / max;
        combined[emotion.index()] = match agreement(emotion.valence(), signal) {
            Some(true) => (normalized * (1.0 + factor * magnitude)).min(1.0),
            Some(false) => (normalized * (1.0 - factor * magnitude)).max(0.0),
            None => normalized,
        };
    }
    combined
}

// Whether a valence agrees with the signal's sign. None for neutral valence
// or a zero signal, which neither boost nor damp.
fn agreement(valence: Valence, signal: f64) -> Option<bool> {
    match valence {
        Valence::Neutral => None,
        Valence::Negative if signal < 0.0 => Some(true),
        Valence::Negative if signal > 0.0 => Some(false),
        Valence::Positive if signal > 0.0 => Some(true),
        Valence::Positive if signal < 0.0 => Some(false),
        _ => None,
    }
}

// Highest combined intensity wins; the priority order of `Emotion::ALL`
// breaks exact ties. The secondary must clear the reporting threshold.
fn select(combined: &[f64; Emotion::COUNT], threshold: f64) -> (Emotion, Option<Emotion>) {
    let mut primary = Emotion::ALL[0];
    for emotion in Emotion::ALL {
        if combined[emotion.index()] > combined[primary.index()] {
            primary = emotion;
        }
    }

    let mut secondary: Option<Emotion> = None;
    for emotion in Emotion::ALL {
        if emotion == primary {
            continue;
        }
        let intensity = combined[emotion.index()];
        if intensity >= threshold
            && secondary.map_or(true, |s| intensity > combined[s.index()])
        {
            secondary = Some(emotion);
        }
    }

    (primary, secondary)
}

fn confidence(
    combined: &[f64; Emotion::COUNT],
    primary: Emotion,
    signal: f64,
    keyword_count: usize,
    cfg: &AnalyzerConfig,
) -> f64 {
    let primary_intensity = combined[primary.index()];
    if primary_intensity <= 0.0 {
        // no lexical evidence at all: nothing to be confident about
        return 0.0;
    }

    let runner_up = Emotion::ALL
        .iter()
        .filter(|&&e| e != primary)
        .map(|e| combined[e.index()])
        .fold(0.0, f64::max);
    let gap = primary_intensity - runner_up;

    let evidence = (keyword_count as f64 / cfg.evidence_saturation as f64).min(1.0);

    let agreement_term = match agreement(primary.valence(), signal) {
        Some(true) => signal.abs(),
        Some(false) => -signal.abs(),
        None => 0.0,
    };

    (cfg.gap_weight * gap
        + cfg.evidence_weight * evidence
        + cfg.agreement_weight * agreement_term)
        .clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_for(entries: &[(Emotion, f64)]) -> [f64; Emotion::COUNT] {
        let mut raw = [0.0; Emotion::COUNT];
        for &(emotion, value) in entries {
            raw[emotion.index()] = value;
        }
        raw
    }

    #[test]
    fn test_max_normalization() {
        let raw = raw_for(&[(Emotion::Sadness, 2.0), (Emotion::Fear, 1.0)]);
        let combined = combine(&raw, 0.0, 0.3);
        assert!((combined[Emotion::Sadness.index()] - 1.0).abs() < 1e-9);
        assert!((combined[Emotion::Fear.index()] - 0.5).abs() < 1e-9);
        assert_eq!(combined[Emotion::Happiness.index()], 0.0);
    }

    #[test]
    fn test_all_zero_raw_stays_zero() {
        let combined = combine(&[0.0; Emotion::COUNT], -0.8, 0.3);
        assert!(combined.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_boost_and_damp() {
        let raw = raw_for(&[(Emotion::Sadness, 1.0), (Emotion::Happiness, 1.0)]);
        let combined = combine(&raw, -1.0, 0.3);
        // negative signal: sadness boosted (capped at 1.0), happiness damped
        assert!((combined[Emotion::Sadness.index()] - 1.0).abs() < 1e-9);
        assert!((combined[Emotion::Happiness.index()] - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_neutral_valence_untouched() {
        let raw = raw_for(&[(Emotion::Nostalgia, 1.0), (Emotion::Sadness, 0.5)]);
        let negative = combine(&raw, -1.0, 0.3);
        let positive = combine(&raw, 1.0, 0.3);
        assert!((negative[Emotion::Nostalgia.index()] - 1.0).abs() < 1e-9);
        assert!((positive[Emotion::Nostalgia.index()] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_boost_can_flip_the_winner() {
        // happiness leads lexically but a strong negative signal flips it
        let raw = raw_for(&[(Emotion::Happiness, 1.0), (Emotion::Sadness, 0.85)]);
        let combined = combine(&raw, -0.9, 0.3);
        let (primary, _) = select(&combined, 0.15);
        assert_eq!(primary, Emotion::Sadness);
    }

    #[test]
    fn test_tie_breaks_by_priority_order() {
        let mut combined = [0.0; Emotion::COUNT];
        combined[Emotion::Sadness.index()] = 0.8;
        combined[Emotion::Anger.index()] = 0.8;
        let (primary, secondary) = select(&combined, 0.15);
        assert_eq!(primary, Emotion::Sadness);
        assert_eq!(secondary, Some(Emotion::Anger));
    }

    #[test]
    fn test_secondary_threshold() {
        let mut combined = [0.0; Emotion::COUNT];
        combined[Emotion::Sadness.index()] = 0.25;
        combined[Emotion::Anger.index()] = 0.10;
        let (_, secondary) = select(&combined, 0.15);
        assert_eq!(secondary, None);

        combined[Emotion::Anger.index()] = 0.20;
        let (primary, secondary) = select(&combined, 0.15);
        assert_eq!(primary, Emotion::Sadness);
        assert_eq!(secondary, Some(Emotion::Anger));
    }

    #[test]
    fn test_zero_everything_gives_priority_primary_and_zero_confidence() {
        let result = aggregate(&[0.0; Emotion::COUNT], 0.0, 0, &AnalyzerConfig::default());
        assert_eq!(result.primary, Emotion::Sadness);
        assert_eq!(result.secondary, None);
        assert_eq!(result.confidence, 0.0);
        assert!(result.combined.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_agreement_raises_confidence_disagreement_lowers_it() {
        let raw = raw_for(&[(Emotion::Sadness, 1.0)]);
        let cfg = AnalyzerConfig::default();
        let agreeing = aggregate(&raw, -0.8, 3, &cfg);
        let neutral = aggregate(&raw, 0.0, 3, &cfg);
        let disagreeing = aggregate(&raw, 0.8, 3, &cfg);
        assert!(agreeing.confidence > neutral.confidence);
        assert!(disagreeing.confidence < neutral.confidence);
    }

    #[test]
    fn test_more_keywords_raise_confidence_until_saturation() {
        let raw = raw_for(&[(Emotion::Sadness, 1.0)]);
        let cfg = AnalyzerConfig::default();
        let few = aggregate(&raw, 0.0, 1, &cfg);
        let more = aggregate(&raw, 0.0, 5, &cfg);
        let saturated = aggregate(&raw, 0.0, cfg.evidence_saturation, &cfg);
        let beyond = aggregate(&raw, 0.0, cfg.evidence_saturation * 4, &cfg);
        assert!(more.confidence > few.confidence);
        assert!((beyond.confidence - saturated.confidence).abs() < 1e-9);
    }

    #[test]
    fn test_intensities_stay_in_unit_range() {
        let raw = raw_for(&[(Emotion::Sadness, 5.0), (Emotion::Hope, 4.9)]);
        for signal in [-1.0, -0.5, 0.0, 0.5, 1.0] {
            let result = aggregate(&raw, signal, 10, &AnalyzerConfig::default());
            for value in result.combined {
                assert!((0.0..=1.0).contains(&value));
            }
            assert!((0.0..=1.0).contains(&result.confidence));
        }
    }
}
