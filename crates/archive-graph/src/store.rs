use std::collections::HashMap;
use std::path::Path;

use archive_core::ArchiveResult;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction as PetDirection;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::direction::Direction;
use crate::entity;

/// A typed directed multigraph keyed by canonical `Type:Value` entity
/// strings, edges labelled by relation. Between any ordered pair, at
/// most one edge exists per relation label.
#[derive(Debug, Default)]
pub struct GraphStore {
    graph: DiGraph<String, String>,
    index: HashMap<String, NodeIndex>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeLinkNode {
    id: String,
    #[serde(rename = "type")]
    entity_type: String,
    value: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeLinkEdge {
    source: String,
    target: String,
    relation: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeLinkGraph {
    nodes: Vec<NodeLinkNode>,
    links: Vec<NodeLinkEdge>,
    directed: bool,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_node(&mut self, entity: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(entity) {
            return idx;
        }
        let idx = self.graph.add_node(entity.to_string());
        self.index.insert(entity.to_string(), idx);
        idx
    }

    /// Parse `s` as `Type:Value` and add it as a node. Idempotent;
    /// fails with `InvalidEntityFormat` on a malformed string.
    pub fn add_entity(&mut self, s: &str) -> ArchiveResult<()> {
        entity::parse(s)?;
        if !self.index.contains_key(s) {
            self.ensure_node(s);
            debug!(entity = s, "added entity node");
        }
        Ok(())
    }

    /// Insert (or confirm) the edge `(src, tgt, rel)`, lazily creating
    /// either node if missing. Re-adding an existing edge is a no-op.
    pub fn add_relationship(&mut self, src: &str, tgt: &str, rel: &str) -> ArchiveResult<()> {
        entity::parse(src)?;
        entity::parse(tgt)?;

        let src_idx = self.ensure_node(src);
        let tgt_idx = self.ensure_node(tgt);

        let exists = self
            .graph
            .edges_directed(src_idx, PetDirection::Outgoing)
            .any(|e| e.target() == tgt_idx && e.weight() == rel);

        if !exists {
            self.graph.add_edge(src_idx, tgt_idx, rel.to_string());
            debug!(src, tgt, rel, "added edge");
        }
        Ok(())
    }

    /// Entities related to `entity`, optionally filtered by exact-match
    /// relation label, walked in the given direction. Unknown entity
    /// returns empty. `Both` deduplicates `(neighbor, relation)` pairs
    /// that would otherwise be reported twice by a bidirectional edge.
    pub fn get_related_entities(
        &self,
        entity: &str,
        relation: Option<&str>,
        direction: Direction,
    ) -> Vec<(String, String)> {
        let Some(&idx) = self.index.get(entity) else {
            return Vec::new();
        };

        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();

        let mut push_from = |dir: PetDirection, out: &mut Vec<(String, String)>| {
            for e in self.graph.edges_directed(idx, dir) {
                if let Some(want) = relation {
                    if e.weight() != want {
                        continue;
                    }
                }
                let neighbor_idx = if dir == PetDirection::Outgoing {
                    e.target()
                } else {
                    e.source()
                };
                let neighbor = self.graph[neighbor_idx].clone();
                let key = (neighbor.clone(), e.weight().clone());
                if seen.insert(key) {
                    out.push((neighbor, e.weight().clone()));
                }
            }
        };

        match direction {
            Direction::Outgoing => push_from(PetDirection::Outgoing, &mut out),
            Direction::Incoming => push_from(PetDirection::Incoming, &mut out),
            Direction::Both => {
                push_from(PetDirection::Outgoing, &mut out);
                push_from(PetDirection::Incoming, &mut out);
            }
        }

        out
    }

    /// Whether `entity` has a node in the graph.
    pub fn contains(&self, entity: &str) -> bool {
        self.index.contains_key(entity)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Snapshot to node-link JSON: `{nodes, links, directed: true}`.
    pub fn save(&self, path: &Path) -> ArchiveResult<()> {
        let nodes = self
            .index
            .keys()
            .map(|id| {
                let (ty, value) = entity::parse(id).unwrap_or(("", ""));
                NodeLinkNode {
                    id: id.clone(),
                    entity_type: ty.to_string(),
                    value: value.to_string(),
                }
            })
            .collect();

        let links = self
            .graph
            .edge_references()
            .map(|e| NodeLinkEdge {
                source: self.graph[e.source()].clone(),
                target: self.graph[e.target()].clone(),
                relation: e.weight().clone(),
            })
            .collect();

        let doc = NodeLinkGraph {
            nodes,
            links,
            directed: true,
        };
        let json = serde_json::to_string_pretty(&doc)?;
        std::fs::write(path, json)?;
        info!(path = %path.display(), nodes = self.node_count(), edges = self.edge_count(), "saved graph store snapshot");
        Ok(())
    }

    /// Load from a node-link JSON snapshot, replacing current contents.
    /// A missing file leaves the graph empty (not an error).
    pub fn load(&mut self, path: &Path) -> ArchiveResult<()> {
        if !path.exists() {
            warn!(path = %path.display(), "graph store snapshot not found, starting empty");
            return Ok(());
        }
        let json = std::fs::read_to_string(path)?;
        let doc: NodeLinkGraph = serde_json::from_str(&json)?;

        self.graph = DiGraph::new();
        self.index = HashMap::new();

        for node in &doc.nodes {
            self.ensure_node(&node.id);
        }
        for link in &doc.links {
            // Nodes are already present from the `nodes` array; this
            // lazily creates any that the snapshot omitted.
            let src_idx = self.ensure_node(&link.source);
            let tgt_idx = self.ensure_node(&link.target);
            self.graph.add_edge(src_idx, tgt_idx, link.relation.clone());
        }

        info!(path = %path.display(), nodes = self.node_count(), edges = self.edge_count(), "loaded graph store snapshot");
        Ok(())
    }
}
