use std::collections::HashMap;

use crate::{Label, Rules};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Default)]
pub struct Graph {
    labels: Vec<Label>,
    ids: HashMap<String, NodeId>,
    // Every edge is stored in both rows: forward answers "what must this bag
    // hold", backward answers "what may hold this bag".
    forward: Vec<Vec<(NodeId, u32)>>,
    backward: Vec<Vec<(NodeId, u32)>>,
}

impl Graph {
    pub fn build(rules: &Rules) -> Graph {
        let mut graph = Graph::default();
        for rule in &rules.0 {
            let container = graph.intern(&rule.container);
            for (label, count) in &rule.contents {
                let content = graph.intern(label);
                graph.add_edge(container, content, *count);
            }
        }
        graph
    }

    fn intern(&mut self, label: &Label) -> NodeId {
        if let Some(&id) = self.ids.get(&label.0) {
            return id;
        }
        let id = NodeId(self.labels.len());
        self.ids.insert(label.0.clone(), id);
        self.labels.push(label.clone());
        self.forward.push(Vec::new());
        self.backward.push(Vec::new());
        id
    }

    // A repeated (container, content) pair keeps its place but takes the
    // newer count, in both directions at once.
    fn add_edge(&mut self, container: NodeId, content: NodeId, count: u32) {
        upsert(&mut self.forward[container.0], content, count);
        upsert(&mut self.backward[content.0], container, count);
    }

    pub fn node(&self, label: &str) -> Option<NodeId> {
        self.ids.get(label).copied()
    }

    pub fn label(&self, id: NodeId) -> &Label {
        &self.labels[id.0]
    }

    pub fn contents(&self, id: NodeId) -> &[(NodeId, u32)] {
        &self.forward[id.0]
    }

    pub fn containers(&self, id: NodeId) -> &[(NodeId, u32)] {
        &self.backward[id.0]
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.labels.len()).map(NodeId)
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.forward.iter().map(|row| row.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

fn upsert(row: &mut Vec<(NodeId, u32)>, to: NodeId, count: u32) {
    match row.iter_mut().find(|(id, _)| *id == to) {
        Some((_, existing)) => *existing = count,
        None => row.push((to, count)),
    }
}
