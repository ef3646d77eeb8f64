use crate::graph::NavigationGraph;
use crate::types::NavigationNode;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Primary collation key: compatibility-decomposed, accents dropped, lowercased
fn collation_key(name: &str) -> String {
    name.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

impl NavigationGraph {
    /// Case-insensitive substring search over active node names and descriptions.
    ///
    /// Names starting with the query rank first. Each group is ordered by name,
    /// ignoring case and accents first ("Écologie" sorts between "Atrium" and
    /// "Zeta"), then lowercase name, then exact name. The query is matched
    /// as given, surrounding whitespace included; a query that is empty or
    /// only whitespace matches nothing.
    pub fn search(&self, query: &str) -> Vec<&NavigationNode> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        let mut matches: Vec<(bool, String, String, &NavigationNode)> = self
            .nodes
            .values()
            .filter(|node| node.is_active)
            .filter_map(|node| {
                let name = node.name.to_lowercase();
                let hit = name.contains(&needle) || node.description.to_lowercase().contains(&needle);
                hit.then(|| (!name.starts_with(&needle), collation_key(&node.name), name, node))
            })
            .collect();

        matches.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then_with(|| a.1.cmp(&b.1))
                .then_with(|| a.2.cmp(&b.2))
                .then_with(|| a.3.name.cmp(&b.3.name))
                .then_with(|| a.3.id.cmp(&b.3.id))
        });

        matches.into_iter().map(|(_, _, _, node)| node).collect()
    }

    /// [`search`](Self::search) truncated for type-ahead lists
    pub fn search_limited(&self, query: &str, limit: usize) -> Vec<&NavigationNode> {
        let mut results = self.search(query);
        results.truncate(limit);
        results
    }
}
