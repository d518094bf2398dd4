//! # archive-relocation
//!
//! `RelocationManager`: executes scope-transfer sanitization. When a
//! user moves departments, their personal (`USER`-scoped) thoughts that
//! are 1-hop graph-linked to the department they're leaving are deleted;
//! everything else is untouched.

pub mod manager;

pub use manager::{on_dept_transfer, on_role_change};
