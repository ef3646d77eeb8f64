use crate::builder::GraphBuilder;
use crate::config::RouteConfig;
use crate::directory::NodeDirectory;
use crate::error::{GraphError, Result};
use crate::graph::NavigationGraph;
use crate::types::{Building, NavigationEdge, NavigationNode, PopularEntry};
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_CAMPUS: &str = include_str!("../data/campus.json");

/// Campus directory as exchanged with the data source (JSON, camelCase fields)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusDataset {
    #[serde(default)]
    pub buildings: Vec<Building>,
    pub nodes: Vec<NavigationNode>,
    pub edges: Vec<NavigationEdge>,
    #[serde(default)]
    pub popular: Vec<PopularEntry>,
}

impl CampusDataset {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| GraphError::Dataset(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }

    /// Small two-building campus bundled with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CAMPUS)
    }

    pub fn building(&self, id: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == id)
    }

    pub fn graph(&self, config: &RouteConfig) -> Result<NavigationGraph> {
        GraphBuilder::new(config.clone())?.build(&self.nodes, &self.edges)
    }

    pub fn into_directory(self) -> NodeDirectory {
        NodeDirectory::new(self.nodes, self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EdgeType, NodeCategory};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_campus_loads() {
        let dataset = CampusDataset::builtin().unwrap();
        assert_eq!(dataset.buildings.len(), 2);
        assert_eq!(dataset.building("lib").unwrap().floor_count, 2);

        let archive = dataset.nodes.iter().find(|n| n.id == "archive").unwrap();
        assert_eq!(archive.floor, -1);
        assert_eq!(archive.category, NodeCategory::Room);

        let room = dataset.nodes.iter().find(|n| n.id == "room-101").unwrap();
        assert_eq!(
            room.metadata.as_ref().and_then(|m| m.get("capacity")),
            Some(&serde_json::json!(120))
        );

        let graph = dataset.graph(&RouteConfig::default()).unwrap();
        assert_eq!(graph.node_count(), dataset.nodes.len());
        assert_eq!(graph.traversal_count(), dataset.edges.len() * 2);
    }

    #[test]
    fn test_builtin_routes() {
        let graph = CampusDataset::builtin()
            .unwrap()
            .graph(&RouteConfig::default())
            .unwrap();

        let fastest = graph
            .shortest_path("main-entrance", "room-201", false)
            .unwrap()
            .unwrap();
        assert_eq!(fastest.total_distance, 35.0);
        assert!(!fastest.is_accessible);

        let accessible = graph
            .shortest_path("main-entrance", "room-201", true)
            .unwrap()
            .unwrap();
        assert_eq!(accessible.total_distance, 45.0);
        assert!(accessible.node_ids().contains(&"elevator-a-2"));
        assert!(accessible.is_accessible);

        assert!(graph
            .shortest_path("main-entrance", "archive", true)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_parses_minimal_json() {
        let raw = r#"{
            "nodes": [{
                "id": "n1", "buildingId": "b", "name": "Door", "type": "entrance",
                "floor": 0, "latitude": 1.0, "longitude": 2.0,
                "isAccessible": true, "isActive": true
            }],
            "edges": [{
                "id": "e1", "fromNodeId": "n1", "toNodeId": "n1", "weight": 1,
                "isBidirectional": false, "isAccessible": true, "isActive": true,
                "edgeType": "door"
            }]
        }"#;

        let dataset = CampusDataset::from_json_str(raw).unwrap();
        assert!(dataset.buildings.is_empty());
        assert!(dataset.popular.is_empty());
        assert_eq!(dataset.nodes[0].description, "");
        assert_eq!(dataset.edges[0].edge_type, EdgeType::Door);
    }

    #[test]
    fn test_bad_json_is_dataset_error() {
        assert!(matches!(
            CampusDataset::from_json_str("{\"nodes\": 3}"),
            Err(GraphError::Dataset(_))
        ));
        assert!(matches!(
            CampusDataset::load(Path::new("/definitely/not/here.json")),
            Err(GraphError::Dataset(_))
        ));
    }
}
