use archive_core::{Scope, Thought, UserContext};

/// Whether `ctx` may read `thought`: scope membership AND (RBAC OR
/// across `thought.access_roles`, open when empty).
pub fn admits(ctx: &UserContext, thought: &Thought) -> bool {
    scope_admits(ctx, thought) && rbac_admits(ctx, thought)
}

fn scope_admits(ctx: &UserContext, thought: &Thought) -> bool {
    match thought.scope {
        Scope::User => thought.scope_id == ctx.user_id,
        Scope::Department => ctx.dept_ids.iter().any(|id| id == &thought.scope_id),
        Scope::Project => ctx.project_ids.iter().any(|id| id == &thought.scope_id),
        Scope::Client => ctx.client_ids.iter().any(|id| id == &thought.scope_id),
    }
}

fn rbac_admits(ctx: &UserContext, thought: &Thought) -> bool {
    if thought.access_roles.is_empty() {
        return true;
    }
    thought.access_roles.iter().any(|role| ctx.roles.iter().any(|r| r == role))
}

/// Build a closure over `ctx` suitable for `Iterator::filter` on a
/// candidate list, so callers don't re-derive the two checks inline.
pub fn predicate_for(ctx: UserContext) -> impl Fn(&Thought) -> bool {
    move |thought| admits(&ctx, thought)
}
