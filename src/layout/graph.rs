//! DiagramIndex — wraps a built diagram in a petgraph DiGraph for queries.
//!
//! The builder emits flat node/edge vectors for the rendering surface; this
//! index gives structured access on top of them: lookup by id, degree
//! queries, and ordered child traversal. The text renderer walks the chart
//! through it, and the invariant tests lean on the degree queries (every
//! agent node has exactly one incoming branch edge, the root has none).

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::types::{Diagram, GraphEdge, GraphNode, NodeKind, ROOT_ID};

pub struct DiagramIndex {
    digraph: DiGraph<GraphNode, GraphEdge>,
    /// Maps node id → petgraph NodeIndex.
    node_index: HashMap<String, NodeIndex>,
}

impl DiagramIndex {
    /// Index a diagram. Edges referring to unknown node ids are dropped
    /// rather than panicking; a well-formed build never produces them.
    pub fn from_diagram(diagram: &Diagram) -> Self {
        let mut digraph: DiGraph<GraphNode, GraphEdge> = DiGraph::new();
        let mut node_index: HashMap<String, NodeIndex> = HashMap::new();

        for node in &diagram.nodes {
            let idx = digraph.add_node(node.clone());
            node_index.insert(node.id.clone(), idx);
        }

        for edge in &diagram.edges {
            if let (Some(&src), Some(&tgt)) =
                (node_index.get(&edge.source), node_index.get(&edge.target))
            {
                digraph.add_edge(src, tgt, edge.clone());
            }
        }

        Self {
            digraph,
            node_index,
        }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.node_index.get(id).map(|&idx| &self.digraph[idx])
    }

    pub fn root(&self) -> Option<&GraphNode> {
        self.node(ROOT_ID)
    }

    pub fn in_degree(&self, id: &str) -> usize {
        match self.node_index.get(id) {
            None => 0,
            Some(&idx) => self
                .digraph
                .edges_directed(idx, petgraph::Direction::Incoming)
                .count(),
        }
    }

    pub fn out_degree(&self, id: &str) -> usize {
        match self.node_index.get(id) {
            None => 0,
            Some(&idx) => self
                .digraph
                .edges_directed(idx, petgraph::Direction::Outgoing)
                .count(),
        }
    }

    /// Children of a node in edge insertion order (branch row order under
    /// the root, filtered agent order under a branch, MORE node last).
    pub fn children(&self, id: &str) -> Vec<&GraphNode> {
        let Some(&idx) = self.node_index.get(id) else {
            return Vec::new();
        };
        let mut out: Vec<(usize, &GraphNode)> = self
            .digraph
            .edges_directed(idx, petgraph::Direction::Outgoing)
            .map(|edge| (edge.id().index(), &self.digraph[edge.target()]))
            .collect();
        out.sort_by_key(|(edge_idx, _)| *edge_idx);
        out.into_iter().map(|(_, node)| node).collect()
    }

    /// Node ids of a given kind, in diagram order.
    pub fn ids_of_kind(&self, kind: NodeKind) -> Vec<&str> {
        self.digraph
            .node_indices()
            .filter(|&idx| self.digraph[idx].kind == kind)
            .map(|idx| self.digraph[idx].id.as_str())
            .collect()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
