use crate::builder::GraphBuilder;
use crate::config::RouteConfig;
use crate::error::Result;
use crate::types::{EdgeType, NavigationEdge, NavigationNode};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// One directed entry of the adjacency index.
///
/// A bidirectional edge produces two of these sharing `edge_id`, weight and
/// accessibility; the edge record itself is not duplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct Traversal {
    pub edge_id: String,
    pub weight: f64,
    pub is_accessible: bool,
    pub is_active: bool,
    pub edge_type: EdgeType,

    /// Registered for the `to -> from` direction of a bidirectional edge
    pub reversed: bool,
}

/// Immutable routing snapshot over a node set and its connections.
///
/// Any change to the source data means building a new snapshot; nothing here
/// mutates after construction, so a shared reference is safe to query from
/// many threads.
#[derive(Debug, Clone)]
pub struct NavigationGraph {
    /// Directed adjacency (vertex weight = node id)
    pub(crate) graph: DiGraph<String, Traversal>,

    /// Node id -> vertex, including ids only seen as edge endpoints
    pub(crate) index: HashMap<String, NodeIndex>,

    /// Node id -> node record
    pub(crate) nodes: HashMap<String, NavigationNode>,

    pub(crate) edge_records: usize,

    pub(crate) config: RouteConfig,
}

impl NavigationGraph {
    /// Build with the default [`RouteConfig`]
    pub fn new(nodes: &[NavigationNode], edges: &[NavigationEdge]) -> Result<Self> {
        GraphBuilder::new(RouteConfig::default())?.build(nodes, edges)
    }

    pub(crate) fn empty(config: RouteConfig) -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
            nodes: HashMap::new(),
            edge_records: 0,
            config,
        }
    }

    /// Vertex for `id`, created on first sight
    pub(crate) fn vertex(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.index.insert(id.to_string(), idx);
        idx
    }

    /// Direct lookup by id
    pub fn get_node_by_id(&self, id: &str) -> Option<&NavigationNode> {
        self.nodes.get(id)
    }

    /// All node records, in no particular order
    pub fn nodes(&self) -> impl Iterator<Item = &NavigationNode> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edge records supplied at construction
    pub fn edge_count(&self) -> usize {
        self.edge_records
    }

    /// Number of directed entries in the adjacency index
    pub fn traversal_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Outgoing entries registered for `id` as `(neighbor id, entry)`
    pub fn traversals_from(&self, id: &str) -> Vec<(&str, &Traversal)> {
        use petgraph::visit::EdgeRef;

        let Some(&idx) = self.index.get(id) else {
            return Vec::new();
        };
        self.graph
            .edges(idx)
            .map(|e| (self.graph[e.target()].as_str(), e.weight()))
            .collect()
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }
}
