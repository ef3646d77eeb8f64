use campus_nav_graph::{Building, NavigationNode, PathResult, PopularDestination, RouteStep};

pub fn render_search(query: &str, results: &[&NavigationNode]) -> String {
    if results.is_empty() {
        return format!("No places match '{query}'\n");
    }
    let mut out = String::new();
    for node in results {
        out.push_str(&format!(
            "{:<24} {:<28} floor {:>2}  {}\n",
            node.id, node.name, node.floor, node.description
        ));
    }
    out
}

pub fn render_route(path: &PathResult, steps: &[RouteStep]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Route: {} stops, {}m, ~{}s\n",
        path.nodes.len(),
        path.total_distance.round(),
        path.estimated_time
    ));
    if path.is_accessible {
        out.push_str("Wheelchair accessible route\n");
    }
    if let Some(first) = path.nodes.first() {
        out.push_str(&format!("  0. Start at {}\n", first.name));
    }
    for step in steps {
        out.push_str(&format!("{:>3}. {}\n", step.index, step.instruction));
    }
    if let Some(last) = path.nodes.last() {
        out.push_str(&format!("Arrive at {} (floor {})\n", last.name, last.floor));
    }
    out
}

pub fn render_node(node: &NavigationNode) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", node.name, node.id));
    out.push_str(&format!("  building:   {}\n", node.building_id));
    out.push_str(&format!("  type:       {:?}\n", node.category));
    out.push_str(&format!("  floor:      {}\n", node.floor));
    out.push_str(&format!("  location:   {:.5}, {:.5}\n", node.latitude, node.longitude));
    out.push_str(&format!("  accessible: {}\n", node.is_accessible));
    out.push_str(&format!("  active:     {}\n", node.is_active));
    if !node.description.is_empty() {
        out.push_str(&format!("  {}\n", node.description));
    }
    out
}

pub fn render_popular(popular: &[PopularDestination]) -> String {
    let mut out = String::new();
    for (rank, dest) in popular.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {:<28} {} searches\n",
            rank + 1,
            dest.node.name,
            dest.search_count
        ));
    }
    out
}

pub fn render_buildings(buildings: &[Building]) -> String {
    let mut out = String::new();
    for b in buildings {
        out.push_str(&format!(
            "{:<8} {:<20} {} floor(s)  {}\n",
            b.id, b.name, b.floor_count, b.description
        ));
    }
    out
}
