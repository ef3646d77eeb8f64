use crate::graph::NavigationGraph;
use crate::types::{PopularDestination, PopularEntry};

/// Resolve usage counters against the graph, most searched first.
///
/// Entries whose node is not in the graph are dropped.
pub fn popular_destinations(
    graph: &NavigationGraph,
    entries: &[PopularEntry],
) -> Vec<PopularDestination> {
    let mut resolved: Vec<PopularDestination> = entries
        .iter()
        .filter_map(|entry| match graph.get_node_by_id(&entry.node_id) {
            Some(node) => Some(PopularDestination {
                node: node.clone(),
                search_count: entry.search_count,
            }),
            None => {
                log::debug!("Popular destination {} not in graph; skipping", entry.node_id);
                None
            }
        })
        .collect();

    resolved.sort_by(|a, b| b.search_count.cmp(&a.search_count));
    resolved
}
