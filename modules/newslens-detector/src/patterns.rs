//! Surface-level suspicious-pattern scan, reported alongside enhanced
//! analysis. These never affect the core classifier's verdict.

/// Clickbait phrases checked case-insensitively against the full text.
const CLICKBAIT_PHRASES: [&str; 4] = [
    "you won't believe",
    "doctors hate",
    "one weird trick",
    "this will shock you",
];

/// Fraction of uppercase characters above which text is flagged.
const UPPERCASE_RATIO_LIMIT: f64 = 0.3;

/// Exclamation marks above this count get flagged.
const EXCLAMATION_LIMIT: usize = 5;

/// Check text for suspicious presentation patterns. Returns descriptions of
/// what was found; empty means clean. Empty input is clean by definition.
pub fn detect_suspicious_patterns(text: &str) -> Vec<String> {
    let mut findings = Vec::new();

    let char_count = text.chars().count();
    if char_count > 0 {
        let upper = text.chars().filter(|c| c.is_uppercase()).count();
        if upper as f64 / char_count as f64 > UPPERCASE_RATIO_LIMIT {
            findings.push("Excessive capitalization".to_string());
        }
    }

    if text.matches('!').count() > EXCLAMATION_LIMIT {
        findings.push("Excessive exclamation marks".to_string());
    }

    let lower = text.to_lowercase();
    if CLICKBAIT_PHRASES.iter().any(|p| lower.contains(p)) {
        findings.push("Contains clickbait language".to_string());
    }

    findings
}
