use archive_core::Scope;
use archive_graph::{Direction, GraphStore};
use archive_vector::VectorStore;
use tracing::info;

const RELATION_BELONGS_TO: &str = "BELONGS_TO";

/// Sanitize a user's personal memory after a department transfer: any
/// `USER`-scoped thought whose entities graph-link (1-hop, `BELONGS_TO`)
/// to the lost department is deleted. PROJECT/DEPARTMENT/CLIENT-scoped
/// thoughts live with their scope container and are never touched.
/// Contamination is strictly 1-hop; transitive contamination is out of
/// scope.
///
/// Returns the ids of thoughts deleted.
pub fn on_dept_transfer(
    vector_store: &mut VectorStore,
    graph_store: &GraphStore,
    user_id: &str,
    old_dept_id: &str,
) -> Vec<uuid::Uuid> {
    let lost_dept_node = format!("Department:{old_dept_id}");

    let contaminated: Vec<uuid::Uuid> = vector_store
        .get_by_scope(Scope::User, user_id)
        .into_iter()
        .filter(|t| {
            t.entities.iter().any(|e| {
                graph_store
                    .get_related_entities(e, Some(RELATION_BELONGS_TO), Direction::Outgoing)
                    .iter()
                    .any(|(neighbor, _)| neighbor == &lost_dept_node)
            })
        })
        .map(|t| t.id)
        .collect();

    for id in &contaminated {
        vector_store.delete(*id);
    }

    if !contaminated.is_empty() {
        info!(user_id, old_dept_id, deleted = contaminated.len(), "sanitized thoughts after department transfer");
    }

    contaminated
}

/// Passive: a role change requires no data rewrite, since access is
/// re-evaluated at read time by the federation predicate. Present so
/// callers have a symmetric entry point alongside `on_dept_transfer`.
pub fn on_role_change(user_id: &str) {
    info!(user_id, "role change observed; access re-evaluated at read time, no data rewritten");
}
