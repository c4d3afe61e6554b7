//! The corrected classifier variant. Kept wholly separate from
//! [`crate::heuristic::classify`] so the legacy decision rule stays intact
//! for callers that depend on it.
//!
//! Adds what the keyword counter ignores: temporal claims checked against a
//! reference year, source credibility, attribution and sensational-language
//! scoring, and human-readable reasoning for every adjustment.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use newslens_common::Label;

use crate::patterns::detect_suspicious_patterns;

static TEMPORAL_PATTERNS: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        Regex::new(r"we are in \d{4}").unwrap(),
        Regex::new(r"the year is \d{4}").unwrap(),
        Regex::new(r"it is \d{4}").unwrap(),
        Regex::new(r"current year.*\d{4}").unwrap(),
        Regex::new(r"today is.*\d{4}").unwrap(),
    ]
});

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").unwrap());

const SENSATIONAL_WORDS: [&str; 6] = [
    "shocking",
    "unbelievable",
    "breaking",
    "exclusive",
    "secret",
    "exposed",
];

const ATTRIBUTION_PHRASES: [&str; 4] =
    ["according to", "sources say", "reported by", "study shows"];

/// Known outlets and their fixed credibility scores. Checked by substring
/// against the lower-cased source name, in this order, before the suspicious
/// indicators, so "Fake BBC Mirror" still scores as BBC.
const CREDIBLE_SOURCES: [(&str, f64); 9] = [
    ("bbc", 0.95),
    ("reuters", 0.98),
    ("cnn", 0.90),
    ("times of india", 0.85),
    ("the hindu", 0.90),
    ("indian express", 0.85),
    ("deccan herald", 0.80),
    ("press information bureau", 0.95),
    ("pib", 0.95),
];

const SUSPICIOUS_SOURCE_INDICATORS: [&str; 4] = ["fake", "conspiracy", "hoax", "clickbait"];

const BASELINE_CONFIDENCE: f64 = 0.5;
const CONFIDENCE_MIN: f64 = 0.1;
const CONFIDENCE_MAX: f64 = 0.95;
/// Above this, the scored path calls the text Real.
const REAL_THRESHOLD: f64 = 0.6;

/// How a temporal claim relates to the reference year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TemporalAccuracy {
    Accurate,
    Outdated,
    FuturePrediction,
}

impl std::fmt::Display for TemporalAccuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemporalAccuracy::Accurate => write!(f, "accurate"),
            TemporalAccuracy::Outdated => write!(f, "outdated"),
            TemporalAccuracy::FuturePrediction => write!(f, "future prediction"),
        }
    }
}

/// Result of the enhanced analysis path.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EnhancedAnalysis {
    pub label: Label,
    /// Within [0.1, 0.95]; wider range than the core heuristic.
    pub confidence: f64,
    /// One entry per scoring adjustment that fired.
    pub reasoning: Vec<String>,
    /// Set only when the text made a temporal claim.
    pub temporal_accuracy: Option<TemporalAccuracy>,
    /// Credibility of the supplied source, 0.5 when none was given.
    pub source_credibility: f64,
    pub suspicious_patterns: Vec<String>,
}

/// Rule-based detector with temporal awareness. Construct with the year
/// claims are judged against; nothing inside reads a clock.
#[derive(Debug, Clone, Copy)]
pub struct EnhancedDetector {
    reference_year: i32,
}

impl EnhancedDetector {
    pub fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }

    /// Analyze a (title, body) pair with an optional source name.
    pub fn analyze(&self, title: &str, body: &str, source: Option<&str>) -> EnhancedAnalysis {
        let text = format!("{title} {body}");
        let lower = text.to_lowercase();
        let lower = lower.trim();

        let source_credibility = assess_source_credibility(source);
        let suspicious_patterns = detect_suspicious_patterns(&text);

        if TEMPORAL_PATTERNS.iter().any(|re| re.is_match(lower)) {
            let (label, confidence, reason, accuracy) = self.evaluate_temporal_claim(lower);
            return EnhancedAnalysis {
                label,
                confidence,
                reasoning: vec![reason],
                temporal_accuracy: accuracy,
                source_credibility,
                suspicious_patterns,
            };
        }

        let (confidence, reasoning) = score_text(&text, lower, source_credibility);
        let label = if confidence > REAL_THRESHOLD {
            Label::Real
        } else {
            Label::Fake
        };

        EnhancedAnalysis {
            label,
            confidence,
            reasoning,
            temporal_accuracy: None,
            source_credibility,
            suspicious_patterns,
        }
    }

    /// Judge the first 4-digit year in the text against the reference year.
    fn evaluate_temporal_claim(
        &self,
        lower: &str,
    ) -> (Label, f64, String, Option<TemporalAccuracy>) {
        let year = YEAR_RE
            .find(lower)
            .and_then(|m| m.as_str().parse::<i32>().ok());

        let Some(year) = year else {
            return (
                Label::Real,
                0.5,
                "No specific year mentioned".to_string(),
                None,
            );
        };

        let reference = self.reference_year;
        if year == reference {
            (
                Label::Real,
                0.95,
                format!("Correctly states current year ({reference})"),
                Some(TemporalAccuracy::Accurate),
            )
        } else if year < reference {
            (
                Label::Fake,
                0.85,
                format!("Claims we are in {year}, but current year is {reference}"),
                Some(TemporalAccuracy::Outdated),
            )
        } else {
            (
                Label::Fake,
                0.90,
                format!("Claims we are in future year {year}, current year is {reference}"),
                Some(TemporalAccuracy::FuturePrediction),
            )
        }
    }
}

/// The scored path: start from the baseline, apply each language signal,
/// then shift by source credibility and clamp.
fn score_text(text: &str, lower: &str, source_credibility: f64) -> (f64, Vec<String>) {
    let mut confidence = BASELINE_CONFIDENCE;
    let mut reasoning = Vec::new();

    let sensational = SENSATIONAL_WORDS
        .iter()
        .filter(|w| lower.contains(**w))
        .count();
    if sensational > 2 {
        confidence -= 0.2;
        reasoning.push("Contains excessive sensational language".to_string());
    }

    if ATTRIBUTION_PHRASES.iter().any(|p| lower.contains(p)) {
        confidence += 0.15;
        reasoning.push("Contains proper source attribution".to_string());
    }

    if text.matches('!').count() > 3 {
        confidence -= 0.1;
        reasoning.push("Excessive use of exclamation marks".to_string());
    }

    confidence += (source_credibility - 0.5) * 0.3;
    if source_credibility > 0.8 {
        reasoning.push("High credibility source".to_string());
    } else if source_credibility < 0.3 {
        reasoning.push("Low credibility source".to_string());
    }

    (confidence.clamp(CONFIDENCE_MIN, CONFIDENCE_MAX), reasoning)
}

/// Score a source name against the known-outlet table, falling back to the
/// suspicious-indicator check, then a neutral default. No source at all sits
/// exactly between credible and suspicious.
fn assess_source_credibility(source: Option<&str>) -> f64 {
    let Some(source) = source else {
        return 0.5;
    };
    let lower = source.to_lowercase();

    for (outlet, score) in CREDIBLE_SOURCES {
        if lower.contains(outlet) {
            return score;
        }
    }

    if SUSPICIOUS_SOURCE_INDICATORS.iter().any(|s| lower.contains(s)) {
        return 0.2;
    }

    0.6
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> EnhancedDetector {
        EnhancedDetector::new(2025)
    }

    #[test]
    fn current_year_claim_is_real_and_accurate() {
        let a = detector().analyze("Status", "we are in 2025", None);
        assert_eq!(a.label, Label::Real);
        assert_eq!(a.confidence, 0.95);
        assert_eq!(a.temporal_accuracy, Some(TemporalAccuracy::Accurate));
        assert_eq!(a.reasoning, vec!["Correctly states current year (2025)"]);
    }

    #[test]
    fn past_year_claim_is_outdated_fake() {
        let a = detector().analyze("Status", "we are in 2023", None);
        assert_eq!(a.label, Label::Fake);
        assert_eq!(a.confidence, 0.85);
        assert_eq!(a.temporal_accuracy, Some(TemporalAccuracy::Outdated));
    }

    #[test]
    fn future_year_claim_is_fake_prediction() {
        let a = detector().analyze("Status", "we are in 2026", None);
        assert_eq!(a.label, Label::Fake);
        assert_eq!(a.confidence, 0.90);
        assert_eq!(
            a.temporal_accuracy,
            Some(TemporalAccuracy::FuturePrediction)
        );
    }

    #[test]
    fn attribution_with_credible_source_reads_real() {
        let a = detector().analyze(
            "Markets",
            "According to officials, the stock market closed higher today",
            Some("Reuters"),
        );
        // 0.5 + 0.15 + (0.98 - 0.5) * 0.3 = 0.794
        assert_eq!(a.label, Label::Real);
        assert!((a.confidence - 0.794).abs() < 1e-9);
        assert!(a
            .reasoning
            .contains(&"Contains proper source attribution".to_string()));
        assert!(a.reasoning.contains(&"High credibility source".to_string()));
    }

    #[test]
    fn sensational_pileup_reads_fake() {
        let a = detector().analyze(
            "SHOCKING exclusive",
            "An unbelievable secret exposed!!!!",
            Some("Conspiracy Daily"),
        );
        // 0.5 - 0.2 - 0.1 + (0.2 - 0.5) * 0.3 = 0.11
        assert_eq!(a.label, Label::Fake);
        assert!((a.confidence - 0.11).abs() < 1e-9);
        assert!(a.reasoning.contains(&"Low credibility source".to_string()));
    }

    #[test]
    fn confidence_never_leaves_its_range() {
        let worst = detector().analyze(
            "SHOCKING unbelievable secret",
            "exposed!!!! breaking exclusive",
            Some("hoax network"),
        );
        assert!(worst.confidence >= CONFIDENCE_MIN);

        let best = detector().analyze(
            "Report",
            "According to a study shows, reported by officials",
            Some("Reuters"),
        );
        assert!(best.confidence <= CONFIDENCE_MAX);
    }

    #[test]
    fn neutral_text_without_source_sits_at_baseline_fake() {
        // 0.5 is not above the 0.6 threshold, so unadorned text reads Fake.
        let a = detector().analyze("Weather", "The forecast shows rain tomorrow", None);
        assert_eq!(a.confidence, 0.5);
        assert_eq!(a.label, Label::Fake);
        assert_eq!(a.source_credibility, 0.5);
    }

    #[test]
    fn credible_table_wins_over_suspicious_indicator() {
        assert_eq!(assess_source_credibility(Some("Fake BBC Mirror")), 0.95);
        assert_eq!(assess_source_credibility(Some("Hoax Central")), 0.2);
        assert_eq!(assess_source_credibility(Some("Smalltown Gazette")), 0.6);
        assert_eq!(assess_source_credibility(None), 0.5);
    }

    #[test]
    fn suspicious_patterns_ride_along() {
        let a = detector().analyze("One weird trick", "You won't believe this!!!!!!", None);
        assert!(a
            .suspicious_patterns
            .contains(&"Contains clickbait language".to_string()));
    }
}
