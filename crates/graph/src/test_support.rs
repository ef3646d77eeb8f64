use crate::types::{EdgeType, NavigationEdge, NavigationNode, NodeCategory};

/// Active, accessible room
pub(crate) fn node(id: &str, name: &str, floor: i32) -> NavigationNode {
    NavigationNode {
        id: id.to_string(),
        building_id: "main".to_string(),
        name: name.to_string(),
        category: NodeCategory::Room,
        floor,
        latitude: 30.77,
        longitude: 76.57,
        description: String::new(),
        is_accessible: true,
        is_active: true,
        metadata: None,
    }
}

/// Active, accessible, bidirectional hallway
pub(crate) fn edge(id: &str, from: &str, to: &str, weight: f64) -> NavigationEdge {
    NavigationEdge {
        id: id.to_string(),
        from_node_id: from.to_string(),
        to_node_id: to.to_string(),
        weight,
        is_bidirectional: true,
        is_accessible: true,
        is_active: true,
        edge_type: EdgeType::Hallway,
    }
}
