//! The keyword-count classifier. Pure and total: any two strings in, a
//! complete [`Analysis`] out, no I/O, no state across calls.

use newslens_common::{Analysis, Label};

use crate::lexicon::{ENTITY_LEXICON, FAKE_LEXICON, REAL_LEXICON};

/// Lower bound of the confidence range.
pub const CONFIDENCE_FLOOR: f64 = 0.70;
/// Upper bound of the confidence range.
pub const CONFIDENCE_CEILING: f64 = 0.95;
/// Confidence gained per point of score spread.
const CONFIDENCE_STEP: f64 = 0.10;

/// Fake-lexicon count above which the label is Fake outright, regardless of
/// the real-lexicon count.
const FAKE_OVERRIDE_THRESHOLD: usize = 2;

/// Classify a (title, body) pair.
///
/// The two inputs are joined with a single space and lower-cased; matching is
/// plain substring containment, so "shocking" inside "shockingly" counts.
/// The label falls to Fake when the fake count beats the real count, or when
/// more than two fake phrases matched, even if the real count is higher.
/// That second clause is deliberate and callers depend on it: a document with
/// three fake phrases and five real phrases is still Fake.
pub fn classify(title: &str, body: &str) -> Analysis {
    let text = format!("{title} {body}").to_lowercase();

    let fake_score = lexicon_hits(&text, &FAKE_LEXICON);
    let real_score = lexicon_hits(&text, &REAL_LEXICON);

    let label = if fake_score > real_score || fake_score > FAKE_OVERRIDE_THRESHOLD {
        Label::Fake
    } else {
        Label::Real
    };
    tracing::debug!(fake_score, real_score, label = %label, "scored text");

    // Symmetric in the two scores; independent of which label won.
    let spread = fake_score.abs_diff(real_score) as f64;
    let confidence = (CONFIDENCE_FLOOR + CONFIDENCE_STEP * spread).min(CONFIDENCE_CEILING);

    Analysis {
        label,
        confidence,
        sentiment: label.sentiment(),
        sentiment_score: label.sentiment_score(),
        credibility_score: label.credibility_score(),
        entities: extract_entities(&text),
    }
}

/// Count how many lexicon phrases appear in `text`. Each phrase scores at
/// most once.
fn lexicon_hits(text: &str, lexicon: &[&str]) -> usize {
    lexicon.iter().filter(|phrase| text.contains(**phrase)).count()
}

/// Scan the entity lexicon in its fixed order and emit each term present in
/// `text`, first character upper-cased. Output order is lexicon order, not
/// the order terms appear in the text. Expects `text` already lower-cased.
pub fn extract_entities(text: &str) -> Vec<String> {
    ENTITY_LEXICON
        .iter()
        .filter(|term| text.contains(**term))
        .map(|term| capitalize_first(term))
        .collect()
}

fn capitalize_first(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
