//! The canned article set the dashboard is seeded with. Verdicts here are
//! hand-written fixture values, not output of the classifier.

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use newslens_common::{Article, Label, Region, Sentiment};

/// The five seed articles, in dashboard display order.
pub fn sample_articles() -> Vec<Article> {
    vec![
        Article {
            id: Uuid::new_v4(),
            title: "Bangalore Metro Expansion Project Gets Government Approval".to_string(),
            content: "The Karnataka government has approved the Phase 3 expansion of Bangalore \
                      Metro, which will add 150 km of new lines connecting outer areas to the \
                      city center. The project is expected to cost Rs 30,000 crore and will be \
                      completed by 2028."
                .to_string(),
            source: "The Hindu".to_string(),
            category: "Infrastructure".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 8, 23, 10, 30, 0).unwrap(),
            region: Region::Karnataka,
            classification: Label::Real,
            confidence: 0.92,
            sentiment: Sentiment::Positive,
            sentiment_score: 0.6,
            credibility_score: 0.90,
            entities: vec![
                "Karnataka".to_string(),
                "Bangalore Metro".to_string(),
                "Government".to_string(),
            ],
        },
        Article {
            id: Uuid::new_v4(),
            title: "SHOCKING: Mysore Palace Made of Pure Gold, Government Hides Truth".to_string(),
            content: "Secret documents reveal that Mysore Palace is actually made of pure gold \
                      worth billions, but the government has been covering this up for decades. \
                      Local sources claim this is the biggest scandal in Karnataka history."
                .to_string(),
            source: "Karnataka Conspiracy News".to_string(),
            category: "Politics".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 8, 23, 9, 15, 0).unwrap(),
            region: Region::Karnataka,
            classification: Label::Fake,
            confidence: 0.96,
            sentiment: Sentiment::Negative,
            sentiment_score: -0.4,
            credibility_score: 0.12,
            entities: vec![
                "Mysore Palace".to_string(),
                "Government".to_string(),
                "Karnataka".to_string(),
            ],
        },
        Article {
            id: Uuid::new_v4(),
            title: "Indian Space Research Organisation Launches New Satellite".to_string(),
            content: "ISRO successfully launched its latest communication satellite from \
                      Sriharikota, marking another milestone in India's space program. The \
                      satellite will improve telecommunications across rural India."
                .to_string(),
            source: "Times of India".to_string(),
            category: "Science".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 8, 23, 8, 45, 0).unwrap(),
            region: Region::India,
            classification: Label::Real,
            confidence: 0.89,
            sentiment: Sentiment::Positive,
            sentiment_score: 0.7,
            credibility_score: 0.85,
            entities: vec![
                "ISRO".to_string(),
                "India".to_string(),
                "Satellite".to_string(),
                "Sriharikota".to_string(),
            ],
        },
        Article {
            id: Uuid::new_v4(),
            title: "Prime Minister Announces Free Gold for All Citizens".to_string(),
            content: "In a surprise announcement, the Prime Minister declared that every Indian \
                      citizen will receive 1kg of free gold from the government treasury. \
                      Distribution to start next week across all states."
                .to_string(),
            source: "Fake News India".to_string(),
            category: "Politics".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 8, 23, 7, 20, 0).unwrap(),
            region: Region::India,
            classification: Label::Fake,
            confidence: 0.98,
            // Positive sentiment on a Fake row is intentional here.
            sentiment: Sentiment::Positive,
            sentiment_score: 0.8,
            credibility_score: 0.08,
            entities: vec![
                "Prime Minister".to_string(),
                "India".to_string(),
                "Government".to_string(),
            ],
        },
        Article {
            id: Uuid::new_v4(),
            title: "Global Climate Summit Reaches Historic Agreement".to_string(),
            content: "World leaders at the Global Climate Summit have reached a historic \
                      agreement to reduce carbon emissions by 50% over the next decade. The \
                      agreement includes $100 billion in funding for developing nations."
                .to_string(),
            source: "BBC News".to_string(),
            category: "Environment".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 8, 23, 6, 30, 0).unwrap(),
            region: Region::International,
            classification: Label::Real,
            confidence: 0.91,
            sentiment: Sentiment::Positive,
            sentiment_score: 0.6,
            credibility_score: 0.95,
            entities: vec![
                "Climate Summit".to_string(),
                "World Leaders".to_string(),
                "Emissions".to_string(),
            ],
        },
    ]
}
