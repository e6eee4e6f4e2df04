use std::{
    collections::BTreeSet,
    sync::{Arc, Mutex},
};

use crate::util::lock;

/// Base URLs (`http://host:port`) of the peers this node resolves conflicts against.
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: Arc<Mutex<BTreeSet<String>>>,
}

impl NodeRegistry {
    pub fn new(nodes: &[String]) -> NodeRegistry {
        let registry = NodeRegistry::default();

        for node in nodes {
            registry.register(node);
        }

        registry
    }

    /// Adds a node, accepting bare `host:port` as well as full URLs.
    /// Returns whether the node was new.
    pub fn register(&self, node: &str) -> bool {
        let node = node.trim().trim_end_matches('/');

        if node.is_empty() {
            return false;
        }

        let url = if node.starts_with("http://") || node.starts_with("https://") {
            node.to_string()
        } else {
            format!("http://{}", node)
        };

        lock(&self.nodes).insert(url)
    }

    pub fn all(&self) -> Vec<String> {
        lock(&self.nodes).iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        lock(&self.nodes).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::NodeRegistry;

    #[test]
    fn normalizes_node_addresses() {
        let registry = NodeRegistry::default();

        assert!(registry.register("localhost:8001"));
        assert!(!registry.register("http://localhost:8001/"));
        assert!(registry.register("https://peer.example:443"));

        assert_eq!(
            registry.all(),
            vec!["http://localhost:8001", "https://peer.example:443"]
        );
    }

    #[test]
    fn ignores_blank_entries() {
        let registry = NodeRegistry::new(&["".to_string(), "  ".to_string()]);

        assert!(registry.is_empty());
    }
}
