use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Classification outcome ---

/// Binary screening verdict for a piece of news text.
///
/// Variant names double as the wire spelling ("Real" / "Fake"), which is what
/// the dashboard and export document display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Label {
    Real,
    Fake,
}

impl Label {
    /// Sentiment is derived 1:1 from the label; there is no separate model.
    pub fn sentiment(&self) -> Sentiment {
        match self {
            Label::Real => Sentiment::Positive,
            Label::Fake => Sentiment::Negative,
        }
    }

    /// Fixed sentiment score per label.
    pub fn sentiment_score(&self) -> f64 {
        match self {
            Label::Real => 0.5,
            Label::Fake => -0.4,
        }
    }

    /// Fixed credibility score per label.
    pub fn credibility_score(&self) -> f64 {
        match self {
            Label::Real => 0.8,
            Label::Fake => 0.2,
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Real => write!(f, "Real"),
            Label::Fake => write!(f, "Fake"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
        }
    }
}

// --- Regions ---

/// Coverage regions the feed and analytics are bucketed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Region {
    Karnataka,
    India,
    International,
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::Karnataka => write!(f, "Karnataka"),
            Region::India => write!(f, "India"),
            Region::International => write!(f, "International"),
        }
    }
}

impl Region {
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "karnataka" => Some(Region::Karnataka),
            "india" => Some(Region::India),
            "international" => Some(Region::International),
            _ => None,
        }
    }
}

// --- Analysis result ---

/// The output of classifying one (title, body) pair. Produced fresh per call;
/// nothing is cached or shared across invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Analysis {
    pub label: Label,
    /// Always within [0.70, 0.95].
    pub confidence: f64,
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
    pub credibility_score: f64,
    /// Matched entity names, in lexicon scan order (not textual order).
    pub entities: Vec<String>,
}

// --- Articles ---

/// A news article with its screening verdict attached. Fixture articles carry
/// hand-written verdicts; simulated articles derive theirs from the template
/// classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub source: String,
    pub category: String,
    pub timestamp: DateTime<Utc>,
    pub region: Region,
    pub classification: Label,
    pub confidence: f64,
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
    pub credibility_score: f64,
    pub entities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_derives_sentiment_one_to_one() {
        assert_eq!(Label::Real.sentiment(), Sentiment::Positive);
        assert_eq!(Label::Fake.sentiment(), Sentiment::Negative);
    }

    #[test]
    fn label_constants_match_wire_values() {
        assert_eq!(Label::Real.sentiment_score(), 0.5);
        assert_eq!(Label::Real.credibility_score(), 0.8);
        assert_eq!(Label::Fake.sentiment_score(), -0.4);
        assert_eq!(Label::Fake.credibility_score(), 0.2);
    }

    #[test]
    fn label_serializes_as_display_spelling() {
        assert_eq!(serde_json::to_string(&Label::Real).unwrap(), "\"Real\"");
        assert_eq!(serde_json::to_string(&Label::Fake).unwrap(), "\"Fake\"");
    }

    #[test]
    fn region_from_str_loose_is_case_insensitive() {
        assert_eq!(Region::from_str_loose("karnataka"), Some(Region::Karnataka));
        assert_eq!(Region::from_str_loose("INDIA"), Some(Region::India));
        assert_eq!(Region::from_str_loose("elsewhere"), None);
    }
}
