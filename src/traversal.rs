use std::error;
use std::fmt;

use crate::graph::{Graph, NodeId};
use crate::Label;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    UnknownLabel(Label),
    CycleDetected(Label),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnknownLabel(label) => write!(f, "unknown start label: {}", label),
            Error::CycleDetected(label) => write!(f, "containment cycle through {}", label),
        }
    }
}

impl error::Error for Error {}

pub fn count_ancestors(graph: &Graph, start: &str) -> Result<usize, Error> {
    let start = lookup(graph, start)?;
    let mut seen = vec![false; graph.node_count()];
    let mut stack = vec![start];
    let mut found = 0;
    // Pre-marking the start node keeps it out of its own count.
    seen[start.0] = true;
    while let Some(id) = stack.pop() {
        for &(container, _) in graph.containers(id) {
            if !seen[container.0] {
                seen[container.0] = true;
                found += 1;
                stack.push(container);
            }
        }
    }
    Ok(found)
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    id: NodeId,
    // Next forward edge of `id` to expand.
    next: usize,
    // Count inherited from the edge that reached `id`.
    weight: u64,
    // Bags in this subtree so far, including the `id` bag itself.
    total: u64,
}

pub fn weighted_descendant_count(graph: &Graph, start: &str) -> Result<u64, Error> {
    let start = lookup(graph, start)?;
    // Marks exactly the nodes on the active path; a marked child is a cycle.
    let mut on_path = vec![false; graph.node_count()];
    let mut frames = vec![Frame {
        id: start,
        next: 0,
        weight: 1,
        total: 1,
    }];
    on_path[start.0] = true;

    while let Some(frame) = frames.pop() {
        if let Some(&(child, count)) = graph.contents(frame.id).get(frame.next) {
            frames.push(Frame {
                next: frame.next + 1,
                ..frame
            });
            if on_path[child.0] {
                return Err(Error::CycleDetected(graph.label(child).clone()));
            }
            on_path[child.0] = true;
            frames.push(Frame {
                id: child,
                next: 0,
                weight: count as u64,
                total: 1,
            });
        } else {
            on_path[frame.id.0] = false;
            let subtotal = frame.weight.saturating_mul(frame.total);
            match frames.last_mut() {
                Some(parent) => parent.total = parent.total.saturating_add(subtotal),
                None => return Ok(frame.total - 1),
            }
        }
    }

    unreachable!()
}

fn lookup(graph: &Graph, label: &str) -> Result<NodeId, Error> {
    graph
        .node(label)
        .ok_or_else(|| Error::UnknownLabel(Label::new(label)))
}
