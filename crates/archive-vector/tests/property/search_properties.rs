use archive_vector::similarity::cosine;
use proptest::prelude::*;

proptest! {
    /// Cosine similarity is always within [-1, 1], regardless of input
    /// magnitude, matching the "clamped to its natural range" contract
    /// in the search spec.
    #[test]
    fn cosine_is_always_clamped(
        a in prop::collection::vec(-1000.0f32..1000.0, 1..16),
        b in prop::collection::vec(-1000.0f32..1000.0, 1..16),
    ) {
        let n = a.len().min(b.len());
        let a = &a[..n];
        let b = &b[..n];
        let qn = archive_vector::similarity::norm(a);
        if qn > 0.0 {
            let score = cosine(a, qn, b);
            prop_assert!((-1.0..=1.0).contains(&score));
        }
    }
}
