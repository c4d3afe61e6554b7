//! Per-region simulated articles appended to each assembled feed. Templates
//! are fixed; only the timestamp varies per assembly.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use newslens_common::{Article, Label, Region, Sentiment};

/// Verdict constants derived from a template's classification. These differ
/// from the classifier's own label constants (0.5/-0.3 vs 0.5/-0.4, 0.85/0.15
/// vs 0.8/0.2): simulated feed entries have always carried their own values.
const SIMULATED_REAL_SENTIMENT_SCORE: f64 = 0.5;
const SIMULATED_FAKE_SENTIMENT_SCORE: f64 = -0.3;
const SIMULATED_REAL_CREDIBILITY: f64 = 0.85;
const SIMULATED_FAKE_CREDIBILITY: f64 = 0.15;

struct Template {
    title: &'static str,
    content: &'static str,
    source: &'static str,
    classification: Label,
    confidence: f64,
}

fn templates(region: Region) -> [Template; 2] {
    match region {
        Region::Karnataka => [
            Template {
                title: "Bangalore IT Sector Reports Record Growth in Q3 2025",
                content: "The Information Technology sector in Bangalore has reported \
                          unprecedented growth with over 50,000 new jobs created in the third \
                          quarter of 2025. Major tech companies are expanding their operations \
                          in the Silicon Valley of India.",
                source: "Deccan Herald",
                classification: Label::Real,
                confidence: 0.88,
            },
            Template {
                title: "BREAKING: Karnataka Chief Minister Declares All Education Free Forever",
                content: "In a shocking move, Karnataka CM announced that all education from \
                          primary to PhD will be completely free for everyone in the state \
                          starting tomorrow. No verification or eligibility criteria needed.",
                source: "Karnataka Fake Times",
                classification: Label::Fake,
                confidence: 0.94,
            },
        ],
        Region::India => [
            Template {
                title: "India's Digital Payment System Crosses 10 Billion Transactions",
                content: "India's Unified Payments Interface (UPI) has achieved a historic \
                          milestone by processing over 10 billion transactions in a single \
                          month, reinforcing the country's position as a global leader in \
                          digital payments.",
                source: "Economic Times",
                classification: Label::Real,
                confidence: 0.91,
            },
            Template {
                title: "Government Announces Free Smartphones for Every Citizen",
                content: "The Indian government has declared that every citizen will receive a \
                          free iPhone 15 Pro as part of a new digital inclusion initiative. \
                          Distribution centers will open in every district next Monday.",
                source: "India Misinformation Daily",
                classification: Label::Fake,
                confidence: 0.97,
            },
        ],
        Region::International => [
            Template {
                title: "European Union Announces Major Climate Initiative",
                content: "The European Union has unveiled a comprehensive climate action plan \
                          worth \u{20ac}500 billion to achieve carbon neutrality by 2030, five \
                          years ahead of the original target.",
                source: "Reuters",
                classification: Label::Real,
                confidence: 0.87,
            },
            Template {
                title: "NASA Discovers Alien Life Forms on Mars, Keeps Secret",
                content: "Leaked documents suggest NASA has discovered intelligent alien \
                          civilization on Mars but is hiding the truth from the public to \
                          prevent global panic and economic collapse.",
                source: "Global Conspiracy Network",
                classification: Label::Fake,
                confidence: 0.99,
            },
        ],
    }
}

/// Materialize the region's two simulated articles, stamped with `now`.
pub fn simulated_articles(region: Region, now: DateTime<Utc>) -> Vec<Article> {
    templates(region)
        .into_iter()
        .map(|t| {
            let (sentiment_score, credibility_score) = match t.classification {
                Label::Real => (SIMULATED_REAL_SENTIMENT_SCORE, SIMULATED_REAL_CREDIBILITY),
                Label::Fake => (SIMULATED_FAKE_SENTIMENT_SCORE, SIMULATED_FAKE_CREDIBILITY),
            };
            Article {
                id: Uuid::new_v4(),
                title: t.title.to_string(),
                content: t.content.to_string(),
                source: t.source.to_string(),
                category: "General".to_string(),
                timestamp: now,
                region,
                classification: t.classification,
                confidence: t.confidence,
                sentiment: t.classification.sentiment(),
                sentiment_score,
                credibility_score,
                entities: vec![region.to_string()],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_region_yields_one_real_and_one_fake() {
        let now = Utc::now();
        for region in [Region::Karnataka, Region::India, Region::International] {
            let articles = simulated_articles(region, now);
            assert_eq!(articles.len(), 2);
            assert_eq!(articles[0].classification, Label::Real);
            assert_eq!(articles[1].classification, Label::Fake);
        }
    }

    #[test]
    fn derived_fields_follow_template_classification() {
        let articles = simulated_articles(Region::India, Utc::now());
        let real = &articles[0];
        assert_eq!(real.sentiment, Sentiment::Positive);
        assert_eq!(real.sentiment_score, 0.5);
        assert_eq!(real.credibility_score, 0.85);

        let fake = &articles[1];
        assert_eq!(fake.sentiment, Sentiment::Negative);
        assert_eq!(fake.sentiment_score, -0.3);
        assert_eq!(fake.credibility_score, 0.15);
    }

    #[test]
    fn entities_name_the_region() {
        let articles = simulated_articles(Region::Karnataka, Utc::now());
        for a in &articles {
            assert_eq!(a.entities, vec!["Karnataka".to_string()]);
        }
    }

    #[test]
    fn category_is_general_and_timestamp_is_stamped() {
        let now = Utc::now();
        for a in simulated_articles(Region::International, now) {
            assert_eq!(a.category, "General");
            assert_eq!(a.timestamp, now);
        }
    }
}
