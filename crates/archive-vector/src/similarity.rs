/// L2 norm of a vector, computed in `f64` to avoid precision loss when
/// summing many `f32` embedding components.
pub fn norm(v: &[f32]) -> f64 {
    v.iter().map(|x| (*x as f64) * (*x as f64)).sum::<f64>().sqrt()
}

/// Cosine similarity between `query` and `candidate`, given the query's
/// precomputed norm (shared across every candidate in a search).
///
/// A zero-norm candidate is treated as having norm [`archive_core::constants::ZERO_NORM_EPSILON`]
/// rather than zero, so the result is `0.0` instead of `NaN`. The caller
/// is responsible for short-circuiting when `query_norm == 0`.
pub fn cosine(query: &[f32], query_norm: f64, candidate: &[f32]) -> f64 {
    let candidate_norm = norm(candidate);
    let candidate_norm = if candidate_norm == 0.0 {
        archive_core::constants::ZERO_NORM_EPSILON
    } else {
        candidate_norm
    };

    let dot: f64 = query
        .iter()
        .zip(candidate.iter())
        .map(|(a, b)| (*a as f64) * (*b as f64))
        .sum();

    (dot / (query_norm * candidate_norm)).clamp(-1.0, 1.0)
}
