//! # archive-graph
//!
//! The symbolic half of the archive: a typed directed multigraph of
//! canonical `Type:Value` entity nodes connected by labelled edges
//! (`CREATED`, `BELONGS_TO`, `RELATED_TO`, ...). Supports 1-hop
//! traversal in either direction, used by the retrieval pipeline to
//! boost vector search results that share an entity neighborhood.

pub mod direction;
pub mod entity;
pub mod store;

pub use direction::Direction;
pub use store::GraphStore;
