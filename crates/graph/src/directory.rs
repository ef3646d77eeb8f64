use crate::builder::GraphBuilder;
use crate::config::RouteConfig;
use crate::error::{GraphError, Result};
use crate::graph::NavigationGraph;
use crate::types::{NavigationEdge, NavigationNode, NodePatch};

/// Upstream source of node and edge records.
///
/// The graph never mutates; editors go through this and take a fresh
/// snapshot afterwards.
pub trait NodeRepository {
    fn list_nodes(&self) -> &[NavigationNode];

    fn list_edges(&self) -> &[NavigationEdge];

    fn add_node(&mut self, node: NavigationNode) -> Result<()>;

    /// Apply a partial update; the id never changes
    fn update_node(&mut self, id: &str, patch: NodePatch) -> Result<&NavigationNode>;

    /// Remove the node and every edge touching it
    fn delete_node(&mut self, id: &str) -> Result<NavigationNode>;
}

/// In-memory [`NodeRepository`]
#[derive(Debug, Clone, Default)]
pub struct NodeDirectory {
    nodes: Vec<NavigationNode>,
    edges: Vec<NavigationEdge>,
}

impl NodeDirectory {
    pub fn new(nodes: Vec<NavigationNode>, edges: Vec<NavigationEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn add_edge(&mut self, edge: NavigationEdge) {
        self.edges.push(edge);
    }

    /// Build an immutable graph over the current records
    pub fn snapshot(&self, config: &RouteConfig) -> Result<NavigationGraph> {
        GraphBuilder::new(config.clone())?.build(&self.nodes, &self.edges)
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }
}

impl NodeRepository for NodeDirectory {
    fn list_nodes(&self) -> &[NavigationNode] {
        &self.nodes
    }

    fn list_edges(&self) -> &[NavigationEdge] {
        &self.edges
    }

    fn add_node(&mut self, node: NavigationNode) -> Result<()> {
        if self.nodes.iter().any(|n| n.id == node.id) {
            return Err(GraphError::DuplicateNode(node.id));
        }
        self.nodes.push(node);
        Ok(())
    }

    fn update_node(&mut self, id: &str, patch: NodePatch) -> Result<&NavigationNode> {
        let pos = self.position(id)?;
        patch.apply(&mut self.nodes[pos]);
        Ok(&self.nodes[pos])
    }

    fn delete_node(&mut self, id: &str) -> Result<NavigationNode> {
        let pos = self.position(id)?;
        let removed = self.nodes.remove(pos);
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(id));
        log::debug!(
            "Deleted node {id} and {} connected edge(s)",
            before - self.edges.len()
        );
        Ok(removed)
    }
}
