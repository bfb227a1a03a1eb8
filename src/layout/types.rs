//! Diagram types: GraphNode, GraphEdge, Point, Diagram.
//!
//! The node id namespace is flat and prefixed by kind so the rendering
//! surface can dispatch clicks with nothing but the id string: `root`,
//! `s-<branchId>`, `u-<agentId>`, `more-<branchId>`.

use serde::Serialize;

// ─── Id prefixes ─────────────────────────────────────────────────────────────

pub const ROOT_ID: &str = "root";
pub const BRANCH_PREFIX: &str = "s-";
pub const AGENT_PREFIX: &str = "u-";
pub const MORE_PREFIX: &str = "more-";

pub fn branch_node_id(branch_id: u64) -> String {
    format!("{BRANCH_PREFIX}{branch_id}")
}

pub fn agent_node_id(agent_id: u64) -> String {
    format!("{AGENT_PREFIX}{agent_id}")
}

pub fn more_node_id(branch_id: u64) -> String {
    format!("{MORE_PREFIX}{branch_id}")
}

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

// ─── NodeKind ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeKind {
    Root,
    Branch,
    Agent,
    /// Synthetic node standing for agents truncated past the reveal limit.
    More,
}

// ─── GraphNode ───────────────────────────────────────────────────────────────

/// A positioned node handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    pub position: Point,
}

impl GraphNode {
    pub fn new(id: impl Into<String>, kind: NodeKind, label: impl Into<String>, x: i64, y: i64) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            position: Point::new(x, y),
        }
    }
}

// ─── GraphEdge ───────────────────────────────────────────────────────────────

/// A directed edge between two node ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl GraphEdge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// root → branch
    pub fn root_to_branch(branch_id: u64) -> Self {
        Self::new(
            format!("e-root-s-{branch_id}"),
            ROOT_ID,
            branch_node_id(branch_id),
        )
    }

    /// branch → agent
    pub fn branch_to_agent(branch_id: u64, agent_id: u64) -> Self {
        Self::new(
            format!("e-s-{branch_id}-u-{agent_id}"),
            branch_node_id(branch_id),
            agent_node_id(agent_id),
        )
    }

    /// branch → its reveal-more node
    pub fn branch_to_more(branch_id: u64) -> Self {
        Self::new(
            format!("e-s-{branch_id}-more"),
            branch_node_id(branch_id),
            more_node_id(branch_id),
        )
    }
}

// ─── Diagram ─────────────────────────────────────────────────────────────────

/// The full output of a build: what the rendering surface consumes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Diagram {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
