use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The containment level that governs a thought's visibility and decay rate.
///
/// Serializes to the wire names used by the persisted JSON formats, where
/// `DEPARTMENT` is spelled `DEPT` for historical compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "PROJECT")]
    Project,
    #[serde(rename = "DEPT")]
    Department,
    #[serde(rename = "CLIENT")]
    Client,
}

impl Scope {
    /// The entity-type prefix this scope's node takes in the graph
    /// (`"User:<scope_id>"`, `"Project:<scope_id>"`, ...).
    pub fn node_type(self) -> &'static str {
        match self {
            Scope::User => "User",
            Scope::Project => "Project",
            Scope::Department => "Department",
            Scope::Client => "Client",
        }
    }
}

/// A cached prompt/response record with its embedding, extracted entities,
/// and access metadata. The fundamental unit of the archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thought {
    /// Globally unique, immutable identifier.
    pub id: Uuid,
    /// Embedding vector; dimensionality is fixed per `VectorStore` instance.
    pub vector: Vec<f32>,
    /// Canonical `Type:Value` entities. Empty at creation, written back by
    /// background entity extraction.
    pub entities: Vec<String>,
    pub scope: Scope,
    pub scope_id: String,
    pub prompt_text: String,
    pub reasoning_trace: String,
    pub final_response: String,
    pub source_urns: HashSet<String>,
    pub created_at: DateTime<Utc>,
    /// Advisory; retained for future eviction, not consulted by decay math.
    pub ttl_seconds: u64,
    /// Role tokens required for read. Empty = no role restriction beyond scope.
    pub access_roles: HashSet<String>,
    /// Set true when any of `source_urns` is invalidated.
    #[serde(default)]
    pub is_stale: bool,
}

impl Thought {
    /// The canonical graph node for this thought: `"Thought:<id>"`.
    pub fn node_id(&self) -> String {
        format!("Thought:{}", self.id)
    }

    /// The canonical scope-container node this thought belongs to, e.g.
    /// `"Project:<scope_id>"` for a `PROJECT`-scoped thought.
    pub fn scope_node(&self) -> String {
        format!("{}:{}", self.scope.node_type(), self.scope_id)
    }
}
