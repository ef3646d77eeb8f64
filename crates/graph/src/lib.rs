//! # Campus Navigation Graph
//!
//! Shortest-path routing and place search over an indoor/campus map.
//!
//! ## Features
//!
//! - **Label-setting shortest path** - binary-heap search over non-negative weights
//! - **Accessibility filter** - wheelchair-only routes on demand
//! - **Type-ahead search** - case-insensitive, prefix matches first
//! - **Immutable snapshots** - rebuild on change, share freely between threads
//!
//! ## Architecture
//!
//! ```text
//! CampusDataset (JSON) / NodeDirectory (editable records)
//!     │
//!     ├──> GraphBuilder
//!     │      ├─ Node id -> node lookup
//!     │      └─ Directed adjacency (petgraph), two entries per bidirectional edge
//!     │
//!     ├──> NavigationGraph (read-only snapshot)
//!     │      ├─ search(text)
//!     │      ├─ shortest_path(start, end, accessible_only)
//!     │      └─ get_node_by_id(id)
//!     │
//!     └──> Presentation helpers
//!            ├─ directions(path) -> turn-by-turn steps
//!            └─ popular_destinations(graph, counters)
//! ```

mod builder;
mod config;
mod dataset;
mod directions;
mod directory;
mod error;
mod graph;
mod pathfinding;
mod popular;
mod search;
mod types;

#[cfg(test)]
mod test_support;

pub use builder::GraphBuilder;
pub use config::{DanglingEdgePolicy, RouteConfig, DEFAULT_WALKING_SPEED};
pub use dataset::CampusDataset;
pub use directions::{directions, Maneuver, RouteStep};
pub use directory::{NodeDirectory, NodeRepository};
pub use error::{GraphError, Result};
pub use graph::{NavigationGraph, Traversal};
pub use popular::popular_destinations;
pub use types::{
    Building, EdgeType, NavigationEdge, NavigationNode, NodeCategory, NodePatch,
    PathResult, PopularDestination, PopularEntry,
};
