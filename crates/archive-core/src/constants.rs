/// Default score at/above which `smart_lookup` classifies a result as
/// `EXACT_HIT`.
pub const DEFAULT_EXACT_THRESHOLD: f64 = 0.99;

/// Default score at/above which `smart_lookup` classifies a result as
/// `SEMANTIC_HINT` (when below the exact threshold).
pub const DEFAULT_HINT_THRESHOLD: f64 = 0.85;

/// Default multiplicative boost applied to a candidate whose entities
/// intersect the retrieval boost set.
pub const DEFAULT_GRAPH_BOOST_FACTOR: f64 = 1.1;

/// `retrieve` over-fetches this many candidates per requested result
/// before federation filtering and ranking.
pub const CANDIDATE_OVERFETCH_FACTOR: usize = 5;

/// Per-scope decay rate (lambda), in 1/seconds. Ordering is load-bearing:
/// short-lived personal memory decays faster than institutional memory.
/// `LAMBDA_USER` is tuned to a ~10h half-life so that, per the calibration
/// target, a USER thought with base score 1.0 is outranked by a CLIENT
/// thought with base score 0.8 after 10 hours have elapsed.
pub const LAMBDA_USER: f64 = 1.925e-5; // half-life ~10h
pub const LAMBDA_PROJECT: f64 = 8.0e-6; // half-life ~1 day
pub const LAMBDA_DEPARTMENT: f64 = 2.0e-6; // half-life ~4 days
pub const LAMBDA_CLIENT: f64 = 4.0e-7; // half-life ~20 days

/// Zero-norm vectors are clamped to this value before division so the
/// cosine similarity of an all-zero embedding is 0.0 rather than NaN.
pub const ZERO_NORM_EPSILON: f64 = 1e-10;
