use archive_core::config::DecayConfig;
use archive_core::{Scope, Thought};
use chrono::{DateTime, Utc};

use crate::formula;

/// Pure, stateless scorer: wraps a `DecayConfig` so callers don't have to
/// thread lambda lookups through every call site.
#[derive(Debug, Clone, Default)]
pub struct TemporalRanker {
    config: DecayConfig,
}

impl TemporalRanker {
    pub fn new(config: DecayConfig) -> Self {
        Self { config }
    }

    pub fn decay_factor(&self, scope: Scope, created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
        formula::decay_factor(scope, created_at, now, &self.config)
    }

    pub fn adjust_score(&self, score: f64, scope: Scope, created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
        formula::adjust_score(score, scope, created_at, now, &self.config)
    }

    /// Convenience for scoring an owned `Thought` directly.
    pub fn adjust_thought_score(&self, score: f64, thought: &Thought, now: DateTime<Utc>) -> f64 {
        self.adjust_score(score, thought.scope, thought.created_at, now)
    }
}
