//! # archive-federation
//!
//! `FederationBroker`: a pure admission predicate over a `UserContext`
//! and a `Thought`. Two independent checks must both pass — scope
//! membership, then RBAC (OR across `access_roles`, open when empty).

pub mod broker;

pub use broker::{admits, predicate_for};
