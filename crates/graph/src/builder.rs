use crate::config::{DanglingEdgePolicy, RouteConfig};
use crate::error::{GraphError, Result};
use crate::graph::{NavigationGraph, Traversal};
use crate::types::{NavigationEdge, NavigationNode};

/// Builds [`NavigationGraph`] snapshots from node and edge lists
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    config: RouteConfig,
}

impl GraphBuilder {
    pub fn new(config: RouteConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RouteConfig {
        &self.config
    }

    /// Build a snapshot from the supplied records
    pub fn build(
        &self,
        nodes: &[NavigationNode],
        edges: &[NavigationEdge],
    ) -> Result<NavigationGraph> {
        let mut graph = NavigationGraph::empty(self.config.clone());

        // Phase 1: node lookup (last write wins on id collisions)
        for node in nodes {
            graph.vertex(&node.id);
            if graph.nodes.insert(node.id.clone(), node.clone()).is_some() {
                log::warn!("Node id {} supplied more than once; keeping the last", node.id);
            }
        }

        // Phase 2: adjacency index
        let mut dangling = 0usize;
        for edge in edges {
            check_weight(edge)?;

            let missing: Vec<&str> = [edge.from_node_id.as_str(), edge.to_node_id.as_str()]
                .into_iter()
                .filter(|id| !graph.nodes.contains_key(*id))
                .collect();
            if !missing.is_empty() {
                match self.config.dangling_edges {
                    DanglingEdgePolicy::Reject => {
                        return Err(GraphError::InvalidEdge {
                            edge_id: edge.id.clone(),
                            reason: format!("unknown endpoint(s): {}", missing.join(", ")),
                        });
                    }
                    DanglingEdgePolicy::Permissive => {
                        log::warn!(
                            "Edge {} references unknown node(s) {}; routes through it will fail",
                            edge.id,
                            missing.join(", ")
                        );
                        dangling += 1;
                    }
                }
            }

            let from = graph.vertex(&edge.from_node_id);
            let to = graph.vertex(&edge.to_node_id);
            graph.graph.add_edge(from, to, traversal(edge, false));
            if edge.is_bidirectional {
                graph.graph.add_edge(to, from, traversal(edge, true));
            }
            graph.edge_records += 1;
        }

        log::info!(
            "Built navigation graph: {} nodes, {} edges, {} traversals ({} dangling)",
            graph.node_count(),
            graph.edge_count(),
            graph.traversal_count(),
            dangling
        );

        Ok(graph)
    }
}

fn check_weight(edge: &NavigationEdge) -> Result<()> {
    if edge.weight.is_finite() && edge.weight >= 0.0 {
        return Ok(());
    }
    Err(GraphError::InvalidEdge {
        edge_id: edge.id.clone(),
        reason: format!("weight must be finite and non-negative, got {}", edge.weight),
    })
}

fn traversal(edge: &NavigationEdge, reversed: bool) -> Traversal {
    Traversal {
        edge_id: edge.id.clone(),
        weight: edge.weight,
        is_accessible: edge.is_accessible,
        is_active: edge.is_active,
        edge_type: edge.edge_type,
        reversed,
    }
}
