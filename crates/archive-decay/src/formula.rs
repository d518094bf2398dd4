use archive_core::config::DecayConfig;
use archive_core::Scope;
use chrono::{DateTime, Utc};

/// Per-scope decay rate lambda, from `cfg`.
///
/// Ordering is load-bearing: `USER > PROJECT > DEPARTMENT > CLIENT`, so
/// institutional memory (client-level) long outlives an individual
/// exchange (user-level) at equal base relevance.
fn lambda_for(scope: Scope, cfg: &DecayConfig) -> f64 {
    match scope {
        Scope::User => cfg.lambda_user,
        Scope::Project => cfg.lambda_project,
        Scope::Department => cfg.lambda_department,
        Scope::Client => cfg.lambda_client,
    }
}

/// `e^(-lambda * elapsed_seconds)`, elapsed clamped to `>= 0` so a
/// `created_at` in the future (clock skew) never inflates the factor
/// above 1.0.
pub fn decay_factor(scope: Scope, created_at: DateTime<Utc>, now: DateTime<Utc>, cfg: &DecayConfig) -> f64 {
    let elapsed = (now - created_at).num_seconds().max(0) as f64;
    let lambda = lambda_for(scope, cfg);
    (-lambda * elapsed).exp()
}

/// Multiply `base_score` by the scope's temporal decay factor.
pub fn adjust_score(base_score: f64, scope: Scope, created_at: DateTime<Utc>, now: DateTime<Utc>, cfg: &DecayConfig) -> f64 {
    base_score * decay_factor(scope, created_at, now, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn cfg() -> DecayConfig {
        DecayConfig::default()
    }

    #[test]
    fn future_created_at_clamps_to_full_factor() {
        let now = Utc::now();
        let future = now + Duration::hours(1);
        assert_eq!(decay_factor(Scope::User, future, now, &cfg()), 1.0);
    }

    #[test]
    fn zero_elapsed_is_full_factor() {
        let now = Utc::now();
        assert_eq!(decay_factor(Scope::Client, now, now, &cfg()), 1.0);
    }

    #[test]
    fn lambda_ordering_is_strictly_decreasing() {
        let c = cfg();
        assert!(c.lambda_user > c.lambda_project);
        assert!(c.lambda_project > c.lambda_department);
        assert!(c.lambda_department > c.lambda_client);
    }

    #[test]
    fn ten_hour_crossover_calibration() {
        // A USER thought at base relevance 1.0 and a CLIENT thought at
        // base relevance 0.8, both created 10 hours ago: the CLIENT
        // thought's decay has barely moved while the USER thought has
        // decayed past the crossover point.
        let now = Utc::now();
        let created = now - Duration::hours(10);
        let c = cfg();

        let user_score = adjust_score(1.0, Scope::User, created, now, &c);
        let client_score = adjust_score(0.8, Scope::Client, created, now, &c);

        assert!(client_score > user_score, "client={client_score} user={user_score}");
    }

    #[test]
    fn decay_is_monotonically_non_increasing_with_elapsed_time() {
        let now = Utc::now();
        let c = cfg();
        let earlier = decay_factor(Scope::Project, now - Duration::hours(1), now, &c);
        let later = decay_factor(Scope::Project, now - Duration::hours(2), now, &c);
        assert!(later <= earlier);
    }
}
