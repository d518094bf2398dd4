//! # archive-retrieval
//!
//! The `Archive` facade: orchestrates `VectorStore`, `GraphStore`,
//! `TemporalRanker`, and `FederationBroker` behind `add_thought`,
//! `retrieve`, and `smart_lookup`. Also home to the Matchmaker types
//! (`SearchResult`, `MatchStrategy`) and the `tokio`-backed `TaskRunner`
//! used for background entity extraction.

pub mod facade;
pub mod matchmaker;
pub mod task_runner;

pub use facade::{Archive, RetrievalMetadata};
pub use matchmaker::{MatchStrategy, SearchResult};
pub use task_runner::{wait_for_quiescence, TokioTaskRunner};
