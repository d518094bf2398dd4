use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use archive_core::config::{ArchiveConfig, RetrievalConfig};
use archive_core::{ArchiveError, ArchiveResult, Embedder, EntityExtractor, Scope, TaskRunner, Thought, UserContext};
use archive_decay::TemporalRanker;
use archive_federation::admits;
use archive_graph::{Direction, GraphStore};
use archive_vector::VectorStore;
use chrono::Utc;
use serde_json::json;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::matchmaker::{MatchStrategy, SearchResult};

const RELATION_CREATED: &str = "CREATED";
const RELATION_BELONGS_TO: &str = "BELONGS_TO";
const RELATION_RELATED_TO: &str = "RELATED_TO";

/// Per-candidate scoring detail returned alongside each `retrieve` result.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct RetrievalMetadata {
    pub base_score: f64,
    pub is_boosted: bool,
    pub decay_factor: f64,
}

fn canonicalize(id: &str) -> &str {
    if id.is_empty() {
        "Unknown"
    } else {
        id
    }
}

/// The facade. Owns the vector store, graph store, decay ranker,
/// pluggable embedder/extractor, and a task runner for background
/// entity extraction. Stores are wrapped in a coarse `Mutex` rather than
/// a single-threaded executor, per the cooperative-scheduling model this
/// is modeled on: all mutating operations are short and never held
/// across an `.await`.
pub struct Archive {
    vector_store: Arc<Mutex<VectorStore>>,
    graph_store: Arc<Mutex<GraphStore>>,
    ranker: TemporalRanker,
    embedder: Arc<dyn Embedder>,
    extractor: Option<Arc<dyn EntityExtractor>>,
    task_runner: Arc<dyn TaskRunner>,
    config: RetrievalConfig,
}

impl Archive {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        extractor: Option<Arc<dyn EntityExtractor>>,
        task_runner: Arc<dyn TaskRunner>,
        config: ArchiveConfig,
    ) -> Self {
        Self {
            vector_store: Arc::new(Mutex::new(VectorStore::new())),
            graph_store: Arc::new(Mutex::new(GraphStore::new())),
            ranker: TemporalRanker::new(config.decay.clone()),
            embedder,
            extractor,
            task_runner,
            config: config.retrieval,
        }
    }

    pub fn vector_store(&self) -> &Arc<Mutex<VectorStore>> {
        &self.vector_store
    }

    pub fn graph_store(&self) -> &Arc<Mutex<GraphStore>> {
        &self.graph_store
    }

    /// Ingest a new thought. All five steps complete synchronously
    /// except the entity-extraction schedule itself, which is
    /// fire-and-forget: embed, build the record, append to the vector
    /// store, write the two structural graph edges, then (if an
    /// extractor is configured) hand `process_entities` to the task
    /// runner.
    #[allow(clippy::too_many_arguments)]
    pub fn add_thought(
        &self,
        prompt: &str,
        response: &str,
        scope: Scope,
        scope_id: &str,
        user_id: &str,
        access_roles: HashSet<String>,
        source_urns: HashSet<String>,
        ttl_seconds: u64,
    ) -> ArchiveResult<Thought> {
        if scope == Scope::User && scope_id != user_id {
            return Err(ArchiveError::SovereigntyViolation {
                user_id: user_id.to_string(),
                scope_id: scope_id.to_string(),
            });
        }

        let combined_text = format!("{prompt}\n{response}");
        let vector = self
            .embedder
            .embed(&combined_text)
            .map_err(|e| ArchiveError::Embedding(e.to_string()))?;

        let thought = Thought {
            id: Uuid::new_v4(),
            vector,
            entities: Vec::new(),
            scope,
            scope_id: scope_id.to_string(),
            prompt_text: prompt.to_string(),
            reasoning_trace: response.to_string(),
            final_response: response.to_string(),
            source_urns,
            created_at: Utc::now(),
            ttl_seconds,
            access_roles,
            is_stale: false,
        };

        self.vector_store.lock().unwrap().add(thought.clone())?;
        info!(id = %thought.id, "added thought to vector store");

        let thought_node = thought.node_id();
        let user_node = format!("User:{}", canonicalize(user_id));
        let scope_node = format!("{}:{}", scope.node_type(), canonicalize(scope_id));
        {
            let mut graph = self.graph_store.lock().unwrap();
            graph.add_relationship(&user_node, &thought_node, RELATION_CREATED)?;
            graph.add_relationship(&thought_node, &scope_node, RELATION_BELONGS_TO)?;
        }
        debug!(id = %thought.id, %user_node, %scope_node, "wrote structural graph edges");

        if let Some(extractor) = self.extractor.clone() {
            let vector_store = Arc::clone(&self.vector_store);
            let graph_store = Arc::clone(&self.graph_store);
            let thought_id = thought.id;
            let text = combined_text;
            self.task_runner.spawn(Box::pin(process_entities(
                vector_store,
                graph_store,
                extractor,
                thought_id,
                text,
            )));
        }

        Ok(thought)
    }

    /// Define an operator-curated edge between two canonical entities,
    /// creating either node lazily. Idempotent.
    pub fn define_entity_relationship(&self, source: &str, target: &str, relation: &str) -> ArchiveResult<()> {
        self.graph_store.lock().unwrap().add_relationship(source, target, relation)?;
        info!(source, target, relation, "defined entity relationship");
        Ok(())
    }

    /// Delegate to `VectorStore::mark_stale_by_urn`.
    pub fn invalidate_source(&self, urn: &str) -> usize {
        self.vector_store.lock().unwrap().mark_stale_by_urn(urn)
    }

    /// Scope-Link-Rank-Retrieve: vector search, federation filter, graph
    /// boost, temporal decay, stable sort, truncate.
    pub fn retrieve(
        &self,
        query: &str,
        context: &UserContext,
        limit: usize,
        min_score: f64,
        graph_boost_factor: f64,
    ) -> ArchiveResult<Vec<(Thought, f64, RetrievalMetadata)>> {
        let query_vector = self
            .embedder
            .embed(query)
            .map_err(|e| ArchiveError::Embedding(e.to_string()))?;

        let overfetch = limit.saturating_mul(self.config.candidate_overfetch_factor);
        let candidates = self.vector_store.lock().unwrap().search(&query_vector, overfetch, min_score);

        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let filtered: Vec<(Thought, f64)> = candidates.into_iter().filter(|(t, _)| admits(context, t)).collect();

        let boost_set = self.build_boost_set(context);

        let now = Utc::now();
        let mut scored: Vec<(Thought, f64, RetrievalMetadata)> = filtered
            .into_iter()
            .map(|(t, base_score)| {
                let is_boosted = t.entities.iter().any(|e| boost_set.contains(e));
                let boosted_score = if is_boosted { base_score * graph_boost_factor } else { base_score };
                let decay_factor = self.ranker.decay_factor(t.scope, t.created_at, now);
                let final_score = boosted_score * decay_factor;
                (
                    t,
                    final_score,
                    RetrievalMetadata {
                        base_score,
                        is_boosted,
                        decay_factor,
                    },
                )
            })
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);
        Ok(scored)
    }

    /// Union of `Project:<id>` seed nodes for the context's active
    /// projects and their 1-hop both-direction neighbors, queried once
    /// per seed (not recursively) per the original implementation.
    fn build_boost_set(&self, context: &UserContext) -> HashSet<String> {
        let seeds: HashSet<String> = context.project_ids.iter().map(|p| format!("Project:{p}")).collect();
        let mut boost_set = seeds.clone();

        let graph = self.graph_store.lock().unwrap();
        for seed in &seeds {
            for (neighbor, _relation) in graph.get_related_entities(seed, None, Direction::Both) {
                boost_set.insert(neighbor);
            }
        }

        if boost_set.len() > seeds.len() {
            debug!(from = seeds.len(), to = boost_set.len(), "expanded boost entity set");
        }
        boost_set
    }

    /// Classify the top `retrieve` result into a `MatchStrategy` and
    /// build the strategy-shaped content payload.
    pub fn smart_lookup(&self, query: &str, context: &UserContext) -> ArchiveResult<SearchResult> {
        let results = self.retrieve(
            query,
            context,
            5,
            0.0,
            self.config.graph_boost_factor,
        )?;

        let Some((top_thought, top_score, top_metadata)) = results.first().cloned() else {
            return Ok(SearchResult::no_results());
        };

        let strategy_result = if top_score >= self.config.exact_threshold {
            SearchResult {
                strategy: MatchStrategy::ExactHit,
                thought: Some(top_thought.clone()),
                score: top_score,
                content: json!({
                    "prompt": top_thought.prompt_text,
                    "reasoning": top_thought.reasoning_trace,
                    "response": top_thought.final_response,
                    "source": "cache_hit",
                }),
            }
        } else if top_score >= self.config.hint_threshold {
            SearchResult {
                strategy: MatchStrategy::SemanticHint,
                thought: Some(top_thought.clone()),
                score: top_score,
                content: json!({
                    "hint": format!("Similar problem solved previously. Consider this approach: {}", top_thought.reasoning_trace),
                    "source": "semantic_hint",
                }),
            }
        } else if top_metadata.is_boosted {
            SearchResult {
                strategy: MatchStrategy::EntityHop,
                thought: Some(top_thought.clone()),
                score: top_score,
                content: json!({
                    "hint": format!("Found structurally related context (Entity Hop). Consider: {}", top_thought.reasoning_trace),
                    "source": "entity_hop",
                    "reasoning": top_thought.reasoning_trace,
                }),
            }
        } else {
            SearchResult {
                strategy: MatchStrategy::StandardRetrieval,
                thought: Some(top_thought.clone()),
                score: top_score,
                content: json!({
                    "top_thoughts": results.iter().map(|(t, s, _)| json!({
                        "response": t.final_response,
                        "reasoning": t.reasoning_trace,
                        "score": s,
                    })).collect::<Vec<_>>(),
                }),
            }
        };

        Ok(strategy_result)
    }
}

/// Background entity extraction: runs after `add_thought` has returned.
/// On failure, logs and leaves the thought's `entities` empty — per §7,
/// extractor failure is non-fatal and swallowed.
async fn process_entities(
    vector_store: Arc<Mutex<VectorStore>>,
    graph_store: Arc<Mutex<GraphStore>>,
    extractor: Arc<dyn EntityExtractor>,
    thought_id: Uuid,
    text: String,
) {
    let entities = match extractor.extract(&text).await {
        Ok(entities) => entities,
        Err(e) => {
            error!(id = %thought_id, error = %e, "entity extraction failed");
            return;
        }
    };

    vector_store.lock().unwrap().set_entities(thought_id, entities.clone());

    let thought_node = format!("Thought:{thought_id}");
    let mut graph = graph_store.lock().unwrap();
    for entity in &entities {
        if graph.add_entity(entity).is_err() {
            error!(id = %thought_id, entity, "skipping malformed extracted entity");
            continue;
        }
        let _ = graph.add_relationship(entity, &thought_node, RELATION_RELATED_TO);
        let _ = graph.add_relationship(&thought_node, entity, RELATION_RELATED_TO);
    }

    info!(id = %thought_id, count = entities.len(), "extracted entities for thought");
}
