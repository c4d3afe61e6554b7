//! Fixed trigger-phrase lexicons for the keyword-count heuristic.
//!
//! Order matters: entity output preserves the scan order of `ENTITY_LEXICON`,
//! so reordering a list is a behavior change, not a cleanup.

/// Phrases that push a document toward the Fake label. Each contributes at
/// most one point no matter how often it appears.
pub const FAKE_LEXICON: [&str; 7] = [
    "shocking",
    "secret",
    "government hides",
    "conspiracy",
    "leaked documents",
    "breaking exclusive",
    "you won't believe",
];

/// Phrases that push a document toward the Real label.
pub const REAL_LEXICON: [&str; 5] = [
    "according to",
    "research shows",
    "study finds",
    "official statement",
    "data indicates",
];

/// Known entity terms, scanned in this order against the lower-cased text.
pub const ENTITY_LEXICON: [&str; 7] = [
    "government",
    "india",
    "karnataka",
    "bangalore",
    "prime minister",
    "covid",
    "election",
];
