use archive_core::Thought;
use serde::Serialize;

/// The Matchmaker's classification of a `smart_lookup` outcome. Ordering
/// here mirrors the strict top-to-bottom precedence the facade applies:
/// a boosted thought that also clears `hint_threshold` is `SemanticHint`,
/// never `EntityHop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStrategy {
    ExactHit,
    SemanticHint,
    EntityHop,
    StandardRetrieval,
}

/// The outcome of `Archive::smart_lookup`: the chosen strategy, the top
/// thought it was computed from (if any), its score, and a
/// strategy-shaped content payload for the caller.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub strategy: MatchStrategy,
    pub thought: Option<Thought>,
    pub score: f64,
    pub content: serde_json::Value,
}

impl SearchResult {
    pub fn no_results() -> Self {
        Self {
            strategy: MatchStrategy::StandardRetrieval,
            thought: None,
            score: 0.0,
            content: serde_json::json!({ "message": "No relevant memories found." }),
        }
    }
}
