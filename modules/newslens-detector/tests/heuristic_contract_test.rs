//! Contract tests for the keyword-count classifier. These pin the exact
//! scoring behavior downstream consumers rely on; a change that breaks one
//! of these is a compatibility break, not a refactor.

use newslens_common::{Label, Sentiment};
use newslens_detector::classify;

#[test]
fn attributed_growth_report_is_real_at_ceiling() {
    let a = classify(
        "Official statement",
        "According to research shows data indicates normal growth",
    );
    // Four real phrases: the title itself supplies "official statement".
    assert_eq!(a.label, Label::Real);
    assert_eq!(a.confidence, 0.95);
    assert_eq!(a.sentiment, Sentiment::Positive);
}

#[test]
fn sensational_pileup_is_fake_at_ceiling_with_no_entities() {
    let a = classify(
        "SHOCKING secret conspiracy",
        "leaked documents reveal breaking exclusive news",
    );
    // Five fake phrases, zero real. 0.70 + 0.50 clamps to the ceiling.
    assert_eq!(a.label, Label::Fake);
    assert_eq!(a.confidence, 0.95);
    assert!(a.entities.is_empty());
}

#[test]
fn neutral_text_is_real_at_the_floor() {
    let a = classify("Quarterly update", "Sales held steady across most stores.");
    assert_eq!(a.label, Label::Real);
    assert_eq!(a.confidence, 0.70);
}

#[test]
fn fake_override_fires_even_when_real_score_is_higher() {
    // Three fake phrases against five real phrases. The score comparison
    // loses, but the more-than-two-fake-phrases clause decides on its own.
    let a = classify(
        "shocking secret conspiracy",
        "according to a study finds, research shows an official statement; data indicates growth",
    );
    assert_eq!(a.label, Label::Fake);
    // Spread of two: 0.70 + 0.20.
    assert!((a.confidence - 0.90).abs() < 1e-9);
}

#[test]
fn entity_order_follows_the_lexicon_not_the_text() {
    let a = classify("Bangalore traffic", "New flyovers planned across Karnataka");
    assert_eq!(a.entities, vec!["Karnataka", "Bangalore"]);

    let a = classify("India responds", "The government issued guidance");
    assert_eq!(a.entities, vec!["Government", "India"]);
}

#[test]
fn repeated_calls_return_identical_results() {
    let title = "Election coverage";
    let body = "According to the commission, covid protocols apply in Bangalore.";
    let first = classify(title, body);
    let second = classify(title, body);
    assert_eq!(first, second);
}

#[test]
fn confidence_stays_within_bounds_across_inputs() {
    let inputs = [
        ("", ""),
        ("shocking", ""),
        ("shocking secret", "conspiracy leaked documents"),
        ("according to", "research shows study finds"),
        ("you won't believe", "data indicates otherwise"),
    ];
    for (title, body) in inputs {
        let a = classify(title, body);
        assert!(
            (0.70..=0.95).contains(&a.confidence),
            "confidence {} out of range for ({title:?}, {body:?})",
            a.confidence
        );
    }
}
