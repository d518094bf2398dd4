use serde::{Deserialize, Serialize};

/// The security context of the user making a request: identity, group
/// memberships, and assigned roles. Supplied by the external identity
/// service; the archive treats it as an opaque input record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserContext {
    pub user_id: String,
    #[serde(default)]
    pub dept_ids: Vec<String>,
    #[serde(default)]
    pub project_ids: Vec<String>,
    #[serde(default)]
    pub client_ids: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserContext {
    /// Construct a minimal context with just a user id; no group
    /// memberships or roles.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Default::default()
        }
    }
}
