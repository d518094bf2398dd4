//! # archive-decay
//!
//! `TemporalRanker`: a pure, stateless exponential decay formula over
//! the four scope tiers. Short-lived personal memory decays faster than
//! institutional memory, so a stale but client-wide thought can still
//! outrank a very recent, narrowly personal one.

pub mod formula;
pub mod ranker;

pub use ranker::TemporalRanker;
