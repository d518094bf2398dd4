//! # archive-core
//!
//! Foundation crate for the hybrid neuro-symbolic memory archive.
//! Defines the `Thought` record, the `Scope` hierarchy, the user's
//! security context, the pluggable-collaborator traits (`Embedder`,
//! `EntityExtractor`, `TaskRunner`), configuration, and the error
//! taxonomy. Every other crate in the workspace depends on this one.

pub mod config;
pub mod constants;
pub mod errors;
pub mod thought;
pub mod traits;
pub mod user_context;

pub use errors::{ArchiveError, ArchiveResult};
pub use thought::{Scope, Thought};
pub use traits::{Embedder, EntityExtractor, TaskRunner};
pub use user_context::UserContext;
