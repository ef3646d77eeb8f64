use crate::types::{EdgeType, NavigationNode, PathResult};
use serde::Serialize;
use std::fmt;

/// What the walker does between two consecutive stops
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Maneuver {
    /// Same floor
    Walk { to: String },

    /// Elevator or stairs to another floor
    ChangeFloor {
        up: bool,
        floor: i32,
        via: Option<EdgeType>,
    },
}

impl fmt::Display for Maneuver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maneuver::Walk { to } => write!(f, "Walk to {to}"),
            Maneuver::ChangeFloor { up, floor, via } => {
                let transit = match via {
                    Some(EdgeType::Elevator) => "elevator",
                    Some(EdgeType::Stairs) => "stairs",
                    _ => "elevator/stairs",
                };
                let direction = if *up { "" } else { "down " };
                write!(f, "Take {transit} {direction}to floor {floor}")
            }
        }
    }
}

/// One turn-by-turn instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    /// 1-based position in the step list
    pub index: usize,
    pub from_node_id: String,
    pub to_node_id: String,

    /// Connection used for this step, when the route recorded one
    pub edge_type: Option<EdgeType>,

    pub maneuver: Maneuver,
    pub instruction: String,
}

fn maneuver(current: &NavigationNode, next: &NavigationNode, via: Option<EdgeType>) -> Maneuver {
    if current.floor == next.floor {
        Maneuver::Walk {
            to: next.name.clone(),
        }
    } else {
        Maneuver::ChangeFloor {
            up: next.floor > current.floor,
            floor: next.floor,
            via,
        }
    }
}

/// Step list for a route: one step per consecutive pair of stops
pub fn directions(path: &PathResult) -> Vec<RouteStep> {
    path.nodes
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let edge_type = path.edge_types.get(i).copied();
            let maneuver = maneuver(&pair[0], &pair[1], edge_type);
            RouteStep {
                index: i + 1,
                from_node_id: pair[0].id.clone(),
                to_node_id: pair[1].id.clone(),
                edge_type,
                instruction: maneuver.to_string(),
                maneuver,
            }
        })
        .collect()
}
