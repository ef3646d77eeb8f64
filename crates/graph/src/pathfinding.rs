use crate::error::{GraphError, Result};
use crate::graph::NavigationGraph;
use crate::types::{EdgeType, NavigationNode, PathResult};
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::{EdgeRef, VisitMap, Visitable};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Heap entry ordered so that `BinaryHeap` pops the smallest distance first
#[derive(Debug, Clone, Copy)]
struct Candidate {
    distance: f64,
    vertex: NodeIndex,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl NavigationGraph {
    /// Shortest route from `start_id` to `end_id`.
    ///
    /// Returns `Ok(None)` when both ends exist but no route satisfies the
    /// activity / accessibility constraints, including when the start or end
    /// node itself is inactive. Inactive nodes are never passed through.
    /// Unknown ids are `UnknownNode` errors.
    pub fn shortest_path(
        &self,
        start_id: &str,
        end_id: &str,
        require_accessible: bool,
    ) -> Result<Option<PathResult>> {
        let (start_node, start) = self.resolve(start_id)?;
        let (end_node, end) = self.resolve(end_id)?;

        if !start_node.is_active || !end_node.is_active {
            log::debug!("Route {start_id} -> {end_id}: endpoint inactive");
            return Ok(None);
        }

        let mut distances: HashMap<NodeIndex, f64> = HashMap::new();
        let mut predecessors: HashMap<NodeIndex, EdgeIndex> = HashMap::new();
        let mut visited = self.graph.visit_map();
        let mut heap = BinaryHeap::new();
        let mut settled = 0usize;

        distances.insert(start, 0.0);
        heap.push(Candidate {
            distance: 0.0,
            vertex: start,
        });

        while let Some(Candidate { distance, vertex }) = heap.pop() {
            if visited.is_visited(&vertex) {
                continue;
            }
            if vertex == end {
                break;
            }
            visited.visit(vertex);
            settled += 1;

            for entry in self.graph.edges(vertex) {
                let traversal = entry.weight();
                if !traversal.is_active {
                    continue;
                }
                if require_accessible && !traversal.is_accessible {
                    continue;
                }
                let next = entry.target();
                if visited.is_visited(&next) || !self.is_passable(next) {
                    continue;
                }

                let alt = distance + traversal.weight;
                let improves = distances.get(&next).map_or(true, |&known| alt < known);
                if improves {
                    distances.insert(next, alt);
                    predecessors.insert(next, entry.id());
                    heap.push(Candidate {
                        distance: alt,
                        vertex: next,
                    });
                }
            }
        }

        let Some(&total_distance) = distances.get(&end) else {
            log::debug!(
                "Route {start_id} -> {end_id}: no path (settled {settled}, accessible={require_accessible})"
            );
            return Ok(None);
        };

        let (nodes, edge_types, is_accessible) = self.assemble(start, end, &predecessors)?;
        log::debug!(
            "Route {start_id} -> {end_id}: {} stops, distance {total_distance} (settled {settled})",
            nodes.len()
        );

        Ok(Some(PathResult {
            nodes,
            edge_types,
            total_distance,
            estimated_time: self.config.estimated_seconds(total_distance),
            is_accessible,
        }))
    }

    fn resolve(&self, id: &str) -> Result<(&NavigationNode, NodeIndex)> {
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))?;
        let vertex = self
            .index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))?;
        Ok((node, vertex))
    }

    /// Inactive nodes are never entered. Vertices without a node record stay
    /// passable so that reconstruction can report them.
    fn is_passable(&self, vertex: NodeIndex) -> bool {
        self.nodes
            .get(&self.graph[vertex])
            .map_or(true, |node| node.is_active)
    }

    /// Walk predecessors back from `end`, resolving every vertex to its node
    /// and checking accessibility of each entry actually used.
    fn assemble(
        &self,
        start: NodeIndex,
        end: NodeIndex,
        predecessors: &HashMap<NodeIndex, EdgeIndex>,
    ) -> Result<(Vec<NavigationNode>, Vec<EdgeType>, bool)> {
        let mut vertices = vec![end];
        let mut edge_types = Vec::new();
        let mut is_accessible = true;
        let mut current = end;

        while current != start {
            let Some(&entry) = predecessors.get(&current) else {
                return Err(GraphError::InconsistentGraph {
                    from: self.graph[start].clone(),
                    missing: self.graph[current].clone(),
                });
            };
            let traversal = &self.graph[entry];
            is_accessible &= traversal.is_accessible;
            edge_types.push(traversal.edge_type);
            let (source, _) = self.graph.edge_endpoints(entry).ok_or_else(|| {
                GraphError::InconsistentGraph {
                    from: self.graph[start].clone(),
                    missing: self.graph[current].clone(),
                }
            })?;
            vertices.push(source);
            current = source;
        }
        vertices.reverse();
        edge_types.reverse();

        let nodes = vertices
            .into_iter()
            .map(|vertex| {
                let id = &self.graph[vertex];
                self.nodes
                    .get(id)
                    .cloned()
                    .ok_or_else(|| GraphError::InconsistentGraph {
                        from: self.graph[start].clone(),
                        missing: id.clone(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((nodes, edge_types, is_accessible))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{edge, node};
    use crate::types::NavigationEdge;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    /// A(floor 1) - B(floor 1) - C(floor 2), plus a direct A - C stairs edge
    fn campus(bc_accessible: bool, ac_accessible: bool) -> NavigationGraph {
        let nodes = vec![node("A", "Start", 1), node("B", "Hall", 1), node("C", "End", 2)];
        let mut bc = edge("bc", "B", "C", 5.0);
        bc.is_accessible = bc_accessible;
        bc.edge_type = EdgeType::Elevator;
        let mut ac = edge("ac", "A", "C", 20.0);
        ac.is_accessible = ac_accessible;
        ac.edge_type = EdgeType::Stairs;
        let edges = vec![edge("ab", "A", "B", 10.0), bc, ac];
        NavigationGraph::new(&nodes, &edges).unwrap()
    }

    #[test]
    fn test_prefers_cheaper_accessible_route() {
        let graph = campus(true, false);

        let path = graph.shortest_path("A", "C", false).unwrap().unwrap();
        assert_eq!(path.node_ids(), vec!["A", "B", "C"]);
        assert_eq!(path.edge_types, vec![EdgeType::Hallway, EdgeType::Elevator]);
        assert_eq!(path.total_distance, 15.0);
        assert_eq!(path.estimated_time, 11);
        assert!(path.is_accessible);

        let accessible = graph.shortest_path("A", "C", true).unwrap().unwrap();
        assert_eq!(accessible, path);
    }

    #[test]
    fn test_accessibility_filter_forces_longer_route() {
        let graph = campus(false, true);

        let path = graph.shortest_path("A", "C", false).unwrap().unwrap();
        assert_eq!(path.node_ids(), vec!["A", "B", "C"]);
        assert_eq!(path.total_distance, 15.0);
        assert!(!path.is_accessible);

        let path = graph.shortest_path("A", "C", true).unwrap().unwrap();
        assert_eq!(path.node_ids(), vec!["A", "C"]);
        assert_eq!(path.edge_types, vec![EdgeType::Stairs]);
        assert_eq!(path.total_distance, 20.0);
        assert_eq!(path.estimated_time, 15);
        assert!(path.is_accessible);
    }

    #[test]
    fn test_disconnected_node_is_not_found() {
        let nodes = vec![node("A", "Start", 1), node("D", "Island", 1)];
        let graph = NavigationGraph::new(&nodes, &[]).unwrap();
        assert!(graph.shortest_path("A", "D", false).unwrap().is_none());
    }

    #[test]
    fn test_unknown_endpoint_is_an_error() {
        let graph = campus(true, false);
        assert!(matches!(
            graph.shortest_path("ghost", "C", false),
            Err(GraphError::UnknownNode(id)) if id == "ghost"
        ));
        assert!(matches!(
            graph.shortest_path("A", "ghost", false),
            Err(GraphError::UnknownNode(_))
        ));
    }

    #[test]
    fn test_start_equals_end() {
        let graph = campus(true, false);
        let path = graph.shortest_path("B", "B", true).unwrap().unwrap();
        assert_eq!(path.node_ids(), vec!["B"]);
        assert!(path.edge_types.is_empty());
        assert_eq!(path.total_distance, 0.0);
        assert_eq!(path.estimated_time, 0);
        assert!(path.is_accessible);
    }

    #[test]
    fn test_inactive_edges_and_nodes_are_skipped() {
        let nodes = vec![node("A", "Start", 1), node("B", "Hall", 1), node("C", "End", 1)];
        let mut ab = edge("ab", "A", "B", 1.0);
        ab.is_active = false;
        let edges = vec![ab, edge("bc", "B", "C", 1.0), edge("ac", "A", "C", 9.0)];
        let graph = NavigationGraph::new(&nodes, &edges).unwrap();

        let path = graph.shortest_path("A", "C", false).unwrap().unwrap();
        assert_eq!(path.node_ids(), vec!["A", "C"]);

        let mut closed = node("B", "Hall", 1);
        closed.is_active = false;
        let nodes = vec![node("A", "Start", 1), closed, node("C", "End", 1)];
        let edges = vec![edge("ab", "A", "B", 1.0), edge("bc", "B", "C", 1.0)];
        let graph = NavigationGraph::new(&nodes, &edges).unwrap();
        assert!(graph.shortest_path("A", "C", false).unwrap().is_none());
        assert!(graph.shortest_path("A", "B", false).unwrap().is_none());
        assert!(graph.shortest_path("B", "C", false).unwrap().is_none());
        assert!(graph.shortest_path("B", "B", false).unwrap().is_none());
    }

    #[test]
    fn test_one_way_edge_is_respected() {
        let nodes = vec![node("A", "Start", 1), node("B", "End", 1)];
        let mut ab = edge("ab", "A", "B", 3.0);
        ab.is_bidirectional = false;
        let graph = NavigationGraph::new(&nodes, &[ab]).unwrap();

        assert!(graph.shortest_path("A", "B", false).unwrap().is_some());
        assert!(graph.shortest_path("B", "A", false).unwrap().is_none());
    }

    #[test]
    fn test_route_through_dangling_vertex_is_inconsistent() {
        let nodes = vec![node("A", "Start", 1), node("C", "End", 1)];
        let edges = vec![edge("a-ghost", "A", "ghost", 1.0), edge("ghost-c", "ghost", "C", 1.0)];
        let graph = NavigationGraph::new(&nodes, &edges).unwrap();

        match graph.shortest_path("A", "C", false) {
            Err(GraphError::InconsistentGraph { from, missing }) => {
                assert_eq!(from, "A");
                assert_eq!(missing, "ghost");
            }
            other => panic!("expected InconsistentGraph, got {other:?}"),
        }
    }

    #[test]
    fn test_repeated_queries_are_stable() {
        let graph = campus(false, true);
        let first = graph.shortest_path("A", "C", true).unwrap().unwrap();
        let second = graph.shortest_path("A", "C", true).unwrap().unwrap();
        assert_eq!(first.total_distance, second.total_distance);
        assert_eq!(first.is_accessible, second.is_accessible);
    }

    #[test]
    fn test_custom_walking_speed() {
        use crate::builder::GraphBuilder;
        use crate::config::RouteConfig;

        let nodes = vec![node("A", "Start", 1), node("B", "End", 1)];
        let edges = vec![edge("ab", "A", "B", 15.0)];
        let graph = GraphBuilder::new(RouteConfig::default().with_walking_speed(2.0))
            .unwrap()
            .build(&nodes, &edges)
            .unwrap();

        let path = graph.shortest_path("A", "B", false).unwrap().unwrap();
        assert_eq!(path.estimated_time, 8);
    }

    /// Exhaustive O(V * E) relaxation used as ground truth
    fn reference_distance(
        n: usize,
        edges: &[NavigationEdge],
        start: usize,
        end: usize,
        require_accessible: bool,
    ) -> Option<f64> {
        let mut dist = vec![f64::INFINITY; n];
        dist[start] = 0.0;
        for _ in 0..n {
            for e in edges {
                if !e.is_active || (require_accessible && !e.is_accessible) {
                    continue;
                }
                let from: usize = e.from_node_id[1..].parse().unwrap();
                let to: usize = e.to_node_id[1..].parse().unwrap();
                if dist[from] + e.weight < dist[to] {
                    dist[to] = dist[from] + e.weight;
                }
                if e.is_bidirectional && dist[to] + e.weight < dist[from] {
                    dist[from] = dist[to] + e.weight;
                }
            }
        }
        dist[end].is_finite().then_some(dist[end])
    }

    fn arb_edges(n: usize) -> impl Strategy<Value = Vec<NavigationEdge>> {
        prop::collection::vec(
            (0..n, 0..n, 0u32..50, any::<bool>(), any::<bool>(), prop::bool::weighted(0.9)),
            0..(n * 3),
        )
        .prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (from, to, weight, bidirectional, accessible, active))| {
                    let mut e = edge(
                        &format!("e{i}"),
                        &format!("n{from}"),
                        &format!("n{to}"),
                        f64::from(weight),
                    );
                    e.is_bidirectional = bidirectional;
                    e.is_accessible = accessible;
                    e.is_active = active;
                    e
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn proptest_matches_exhaustive_reference(
            edges in arb_edges(8),
            start in 0usize..8,
            end in 0usize..8,
            require_accessible in any::<bool>(),
        ) {
            let nodes: Vec<_> = (0..8).map(|i| node(&format!("n{i}"), &format!("N{i}"), 1)).collect();
            let graph = NavigationGraph::new(&nodes, &edges).unwrap();

            let expected = reference_distance(8, &edges, start, end, require_accessible);
            let found = graph
                .shortest_path(&format!("n{start}"), &format!("n{end}"), require_accessible)
                .unwrap();

            match (expected, found) {
                (None, None) => {}
                (Some(want), Some(path)) => {
                    prop_assert_eq!(path.total_distance, want);
                    prop_assert_eq!(path.nodes.first().map(|n| n.id.clone()), Some(format!("n{start}")));
                    prop_assert_eq!(path.nodes.last().map(|n| n.id.clone()), Some(format!("n{end}")));
                    if require_accessible {
                        prop_assert!(path.is_accessible);
                    }
                }
                (want, got) => prop_assert!(false, "reference {:?} vs found {:?}", want, got),
            }
        }
    }
}
