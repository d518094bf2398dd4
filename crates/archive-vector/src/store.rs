use std::path::Path;

use archive_core::{ArchiveError, ArchiveResult, Scope, Thought};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::similarity;

/// Append-only store of thoughts keyed by id. Search is exact brute-force
/// cosine similarity; the implementation keeps a parallel vector cache so
/// repeated searches don't re-walk `thoughts` to extract embeddings.
#[derive(Debug, Default)]
pub struct VectorStore {
    thoughts: Vec<Thought>,
    vectors: Vec<Vec<f32>>,
    dimension: Option<usize>,
}

impl VectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dimensionality established by the first insert, if any.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Append a thought. Fails with `DimensionMismatch` if its vector's
    /// length disagrees with the dimension established by the first
    /// insert. O(1) amortized.
    pub fn add(&mut self, thought: Thought) -> ArchiveResult<()> {
        let len = thought.vector.len();
        match self.dimension {
            None => self.dimension = Some(len),
            Some(expected) if expected != len => {
                return Err(ArchiveError::DimensionMismatch {
                    expected,
                    actual: len,
                })
            }
            Some(_) => {}
        }

        debug!(id = %thought.id, "added thought to vector store");
        self.vectors.push(thought.vector.clone());
        self.thoughts.push(thought);
        Ok(())
    }

    /// Brute-force cosine similarity search. Returns `(thought, score)`
    /// pairs sorted by score descending, truncated to `limit`.
    ///
    /// `limit = 0` returns empty. A zero-norm `query_vector` returns
    /// empty (rather than dividing by zero). `min_score` is inclusive.
    pub fn search(
        &self,
        query_vector: &[f32],
        limit: usize,
        min_score: f64,
    ) -> Vec<(Thought, f64)> {
        if limit == 0 {
            return Vec::new();
        }

        let query_norm = similarity::norm(query_vector);
        if query_norm == 0.0 {
            warn!("search called with zero-norm query vector");
            return Vec::new();
        }

        let mut scored: Vec<(usize, f64)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(i, v)| (i, similarity::cosine(query_vector, query_norm, v)))
            .filter(|(_, score)| *score >= min_score)
            .collect();

        // Stable sort descending by score; ties keep insertion order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);

        scored
            .into_iter()
            .map(|(i, score)| (self.thoughts[i].clone(), score))
            .collect()
    }

    /// Remove the thought with the given id, keeping the vector cache in
    /// sync. Returns whether a record was removed.
    pub fn delete(&mut self, id: Uuid) -> bool {
        if let Some(pos) = self.thoughts.iter().position(|t| t.id == id) {
            self.thoughts.remove(pos);
            self.vectors.remove(pos);
            debug!(%id, "deleted thought from vector store");
            true
        } else {
            false
        }
    }

    /// Thoughts matching both `scope` and `scope_id`, in insertion order.
    pub fn get_by_scope(&self, scope: Scope, scope_id: &str) -> Vec<Thought> {
        self.thoughts
            .iter()
            .filter(|t| t.scope == scope && t.scope_id == scope_id)
            .cloned()
            .collect()
    }

    /// Flip `is_stale` to true for every thought whose `source_urns`
    /// contains `urn`, skipping thoughts already marked stale. Returns
    /// the count of thoughts newly staled.
    pub fn mark_stale_by_urn(&mut self, urn: &str) -> usize {
        let mut count = 0;
        for t in &mut self.thoughts {
            if !t.is_stale && t.source_urns.contains(urn) {
                t.is_stale = true;
                count += 1;
            }
        }
        if count > 0 {
            info!(urn, count, "marked thoughts stale");
        }
        count
    }

    /// Look up a single thought by id.
    pub fn get(&self, id: Uuid) -> Option<&Thought> {
        self.thoughts.iter().find(|t| t.id == id)
    }

    /// Overwrite the `entities` of the thought `id`, as written back by
    /// background entity extraction. Returns whether the thought was found.
    pub fn set_entities(&mut self, id: Uuid, entities: Vec<String>) -> bool {
        match self.thoughts.iter_mut().find(|t| t.id == id) {
            Some(t) => {
                t.entities = entities;
                true
            }
            None => false,
        }
    }

    /// Total number of thoughts currently stored.
    pub fn len(&self) -> usize {
        self.thoughts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thoughts.is_empty()
    }

    /// Serialize every stored thought to a JSON array on disk.
    pub fn save(&self, path: &Path) -> ArchiveResult<()> {
        let json = serde_json::to_string_pretty(&self.thoughts)?;
        std::fs::write(path, json)?;
        info!(path = %path.display(), count = self.thoughts.len(), "saved vector store snapshot");
        Ok(())
    }

    /// Load thoughts from a JSON snapshot, replacing current contents. A
    /// missing file is a warning, not an error; malformed JSON propagates.
    pub fn load(&mut self, path: &Path) -> ArchiveResult<()> {
        if !path.exists() {
            warn!(path = %path.display(), "vector store snapshot not found, starting empty");
            return Ok(());
        }
        let json = std::fs::read_to_string(path)?;
        let thoughts: Vec<Thought> = serde_json::from_str(&json)?;
        self.vectors = thoughts.iter().map(|t| t.vector.clone()).collect();
        self.dimension = thoughts.first().map(|t| t.vector.len());
        let count = thoughts.len();
        self.thoughts = thoughts;
        info!(path = %path.display(), count, "loaded vector store snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::HashSet;

    fn thought(vector: Vec<f32>, scope: Scope, scope_id: &str) -> Thought {
        Thought {
            id: Uuid::new_v4(),
            vector,
            entities: vec![],
            scope,
            scope_id: scope_id.to_string(),
            prompt_text: "p".into(),
            reasoning_trace: "r".into(),
            final_response: "f".into(),
            source_urns: HashSet::new(),
            created_at: Utc::now(),
            ttl_seconds: 0,
            access_roles: HashSet::new(),
            is_stale: false,
        }
    }

    #[test]
    fn add_establishes_dimension_and_rejects_mismatch() {
        let mut store = VectorStore::new();
        store.add(thought(vec![1.0, 0.0], Scope::User, "u1")).unwrap();
        assert_eq!(store.dimension(), Some(2));

        let err = store.add(thought(vec![1.0], Scope::User, "u1")).unwrap_err();
        assert!(matches!(err, ArchiveError::DimensionMismatch { expected: 2, actual: 1 }));
    }

    #[test]
    fn search_respects_limit_zero_and_min_score() {
        let mut store = VectorStore::new();
        store.add(thought(vec![1.0, 0.0], Scope::User, "u1")).unwrap();
        store.add(thought(vec![0.0, 1.0], Scope::User, "u2")).unwrap();

        assert!(store.search(&[1.0, 0.0], 0, 0.0).is_empty());
        assert!(store.search(&[0.0, 0.0], 10, 0.0).is_empty());

        let results = store.search(&[1.0, 0.0], 10, 0.5);
        assert_eq!(results.len(), 1);
        assert!((results[0].1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn delete_is_sync_with_vector_cache() {
        let mut store = VectorStore::new();
        let t = thought(vec![1.0, 0.0], Scope::User, "u1");
        let id = t.id;
        store.add(t).unwrap();
        assert!(store.delete(id));
        assert!(!store.delete(id));
        assert!(store.search(&[1.0, 0.0], 10, -1.0).is_empty());
    }

    #[test]
    fn get_by_scope_filters_both_fields() {
        let mut store = VectorStore::new();
        store.add(thought(vec![1.0], Scope::User, "u1")).unwrap();
        store.add(thought(vec![1.0], Scope::User, "u2")).unwrap();
        store.add(thought(vec![1.0], Scope::Project, "u1")).unwrap();

        let results = store.get_by_scope(Scope::User, "u1");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn mark_stale_by_urn_is_idempotent() {
        let mut store = VectorStore::new();
        let mut t = thought(vec![1.0], Scope::User, "u1");
        t.source_urns.insert("urn:doc:1".to_string());
        store.add(t).unwrap();

        assert_eq!(store.mark_stale_by_urn("urn:doc:1"), 1);
        assert_eq!(store.mark_stale_by_urn("urn:doc:1"), 0);
    }

    #[test]
    fn set_entities_overwrites_and_reports_unknown_id() {
        let mut store = VectorStore::new();
        let t = thought(vec![1.0], Scope::User, "u1");
        let id = t.id;
        store.add(t).unwrap();

        assert!(store.set_entities(id, vec!["Concept:Rust".to_string()]));
        assert_eq!(store.get(id).unwrap().entities, vec!["Concept:Rust".to_string()]);
        assert!(!store.set_entities(Uuid::new_v4(), vec![]));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.json");

        let mut store = VectorStore::new();
        let mut t = thought(vec![1.0, 2.0], Scope::Client, "acme");
        t.source_urns.insert("urn:doc:1".into());
        t.access_roles.insert("admin".into());
        let id = t.id;
        store.add(t).unwrap();
        store.save(&path).unwrap();

        let mut loaded = VectorStore::new();
        loaded.load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        let reloaded = loaded.get(id).unwrap();
        assert_eq!(reloaded.vector, vec![1.0, 2.0]);
        assert_eq!(reloaded.scope_id, "acme");
        assert!(reloaded.source_urns.contains("urn:doc:1"));
    }

    #[test]
    fn load_missing_file_is_not_an_error() {
        let mut store = VectorStore::new();
        store.load(Path::new("/nonexistent/path/to/vectors.json")).unwrap();
        assert!(store.is_empty());
    }
}
