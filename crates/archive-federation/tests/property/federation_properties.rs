use archive_core::{Scope, Thought, UserContext};
use archive_federation::admits;
use chrono::Utc;
use proptest::prelude::*;
use std::collections::HashSet;
use uuid::Uuid;

fn thought_with(scope_id: &str, roles: Vec<String>) -> Thought {
    Thought {
        id: Uuid::new_v4(),
        vector: vec![],
        entities: vec![],
        scope: Scope::User,
        scope_id: scope_id.to_string(),
        prompt_text: String::new(),
        reasoning_trace: String::new(),
        final_response: String::new(),
        source_urns: HashSet::new(),
        created_at: Utc::now(),
        ttl_seconds: 0,
        access_roles: roles.into_iter().collect(),
        is_stale: false,
    }
}

proptest! {
    /// A thought with no role restriction is never excluded by RBAC,
    /// regardless of what roles the caller does or doesn't hold.
    #[test]
    fn empty_access_roles_always_passes_rbac(
        user_id in "[a-z]{1,8}", caller_roles in prop::collection::vec("[a-z]{1,8}", 0..5),
    ) {
        let mut ctx = UserContext::new(user_id.clone());
        ctx.roles = caller_roles;
        let t = thought_with(&user_id, vec![]);
        prop_assert!(admits(&ctx, &t));
    }

    /// A caller sharing none of a thought's roles is always excluded,
    /// even if the scope check alone would have admitted it.
    #[test]
    fn disjoint_roles_always_reject(
        user_id in "[a-z]{1,8}", thought_role in "[a-z]{1,8}", caller_role in "[a-z]{9,16}",
    ) {
        let mut ctx = UserContext::new(user_id.clone());
        ctx.roles = vec![caller_role];
        let t = thought_with(&user_id, vec![thought_role]);
        prop_assert!(!admits(&ctx, &t));
    }

    /// A caller with no group memberships at all is never admitted to a
    /// thought scoped to someone else's user id.
    #[test]
    fn distinct_user_ids_never_admit_user_scope(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
        prop_assume!(a != b);
        let ctx = UserContext::new(a);
        let t = thought_with(&b, vec![]);
        prop_assert!(!admits(&ctx, &t));
    }
}
