use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Building in the campus directory (read-only reference data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub floor_count: u32,
}

/// What kind of place a node is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    Room,
    Entrance,
    Intersection,
    Elevator,
    Stairs,
    Restroom,
    Exit,
}

/// Point of interest inside the navigable space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationNode {
    /// Immutable once created
    pub id: String,

    pub building_id: String,

    /// Display name (e.g., "Room 101", "Main Entrance")
    pub name: String,

    #[serde(rename = "type")]
    pub category: NodeCategory,

    /// Floor number, negative for basements
    pub floor: i32,

    pub latitude: f64,
    pub longitude: f64,

    #[serde(default)]
    pub description: String,

    /// Whether a wheelchair can be at / pass through this point
    pub is_accessible: bool,

    /// Inactive nodes are excluded from search and routing
    pub is_active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
}

/// Physical kind of a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    Hallway,
    Outdoor,
    Stairs,
    Elevator,
    Door,
}

/// Connection between two nodes as supplied by the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEdge {
    pub id: String,
    pub from_node_id: String,
    pub to_node_id: String,

    /// Distance-like cost (may encode time or difficulty)
    pub weight: f64,

    pub is_bidirectional: bool,

    /// True only if a wheelchair can traverse this segment
    pub is_accessible: bool,

    pub is_active: bool,

    pub edge_type: EdgeType,
}

impl NavigationEdge {
    /// Whether the edge touches the given node at either end
    pub fn touches(&self, node_id: &str) -> bool {
        self.from_node_id == node_id || self.to_node_id == node_id
    }
}

/// Route produced by a shortest-path query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    /// Start to end inclusive
    pub nodes: Vec<NavigationNode>,

    /// Kind of connection used between each consecutive pair of nodes
    pub edge_types: Vec<EdgeType>,

    /// Sum of traversed edge weights
    pub total_distance: f64,

    /// Seconds, rounded up
    pub estimated_time: u64,

    /// True iff every traversed edge is accessible
    pub is_accessible: bool,
}

impl PathResult {
    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }
}

/// Usage counter as supplied by the data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularEntry {
    pub node_id: String,
    pub search_count: u64,
}

/// Usage counter resolved against the current graph
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularDestination {
    pub node: NavigationNode,
    pub search_count: u64,
}

/// Partial update for a node; `id` is deliberately absent
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePatch {
    pub building_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub category: Option<NodeCategory>,
    pub floor: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub is_accessible: Option<bool>,
    pub is_active: Option<bool>,
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
}

impl NodePatch {
    pub fn apply(self, node: &mut NavigationNode) {
        if let Some(building_id) = self.building_id {
            node.building_id = building_id;
        }
        if let Some(name) = self.name {
            node.name = name;
        }
        if let Some(category) = self.category {
            node.category = category;
        }
        if let Some(floor) = self.floor {
            node.floor = floor;
        }
        if let Some(latitude) = self.latitude {
            node.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            node.longitude = longitude;
        }
        if let Some(description) = self.description {
            node.description = description;
        }
        if let Some(is_accessible) = self.is_accessible {
            node.is_accessible = is_accessible;
        }
        if let Some(is_active) = self.is_active {
            node.is_active = is_active;
        }
        if self.metadata.is_some() {
            node.metadata = self.metadata;
        }
    }
}
