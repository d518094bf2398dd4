//! # archive-vector
//!
//! Append-only brute-force cosine vector store. Dimensionality is fixed
//! by the first insert; search is exact (no approximate indexing, per
//! the archive's non-goals).

pub mod similarity;
pub mod store;

pub use store::VectorStore;
