use archive_core::config::DecayConfig;
use archive_core::Scope;
use archive_decay::formula::decay_factor;
use chrono::{Duration, Utc};
use proptest::prelude::*;

fn scope_strategy() -> impl Strategy<Value = Scope> {
    prop_oneof![
        Just(Scope::User),
        Just(Scope::Project),
        Just(Scope::Department),
        Just(Scope::Client),
    ]
}

proptest! {
    /// The factor is always within [0, 1]; it never amplifies a score.
    #[test]
    fn decay_factor_is_always_in_unit_range(
        scope in scope_strategy(), elapsed_secs in 0i64..1_000_000_000,
    ) {
        let now = Utc::now();
        let created = now - Duration::seconds(elapsed_secs);
        let f = decay_factor(scope, created, now, &DecayConfig::default());
        prop_assert!((0.0..=1.0).contains(&f));
    }

    /// Decay never increases as elapsed time grows, for any scope.
    #[test]
    fn decay_factor_is_monotonically_non_increasing(
        scope in scope_strategy(), a in 0i64..500_000_000, b in 0i64..500_000_000,
    ) {
        let now = Utc::now();
        let (shorter, longer) = if a <= b { (a, b) } else { (b, a) };
        let cfg = DecayConfig::default();
        let f_shorter = decay_factor(scope, now - Duration::seconds(shorter), now, &cfg);
        let f_longer = decay_factor(scope, now - Duration::seconds(longer), now, &cfg);
        prop_assert!(f_longer <= f_shorter);
    }

    /// At any fixed elapsed time, USER decays at least as fast as
    /// PROJECT, which decays at least as fast as DEPARTMENT, which
    /// decays at least as fast as CLIENT — the scope ordering invariant.
    #[test]
    fn scope_ordering_holds_at_any_elapsed_time(elapsed_secs in 1i64..1_000_000_000) {
        let now = Utc::now();
        let created = now - Duration::seconds(elapsed_secs);
        let cfg = DecayConfig::default();

        let user = decay_factor(Scope::User, created, now, &cfg);
        let project = decay_factor(Scope::Project, created, now, &cfg);
        let department = decay_factor(Scope::Department, created, now, &cfg);
        let client = decay_factor(Scope::Client, created, now, &cfg);

        prop_assert!(user <= project);
        prop_assert!(project <= department);
        prop_assert!(department <= client);
    }
}
