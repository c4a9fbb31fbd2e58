// Suggestion generation: scoring, the parallel scan and ranking

pub mod collector;
pub mod engine;
pub mod scan;
pub mod scorer;

pub use collector::ScoreCollector;
pub use engine::{LoadStats, SuggestionEngine};
pub use scorer::CandidateScorer;
