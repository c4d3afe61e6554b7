pub mod lexicon;
pub mod heuristic;
pub mod patterns;
pub mod enhanced;

pub use enhanced::{EnhancedAnalysis, EnhancedDetector, TemporalAccuracy};
pub use heuristic::{classify, extract_entities};
pub use patterns::detect_suspicious_patterns;
