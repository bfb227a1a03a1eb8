//! Deterministic coordinate assignment for the organizational chart.
//!
//! Geometry:
//!   - the root sits at the origin;
//!   - branch `i` (in record order) sits at `(x_branch, y_base + i*y_step)`;
//!   - an expanded branch's visible agents stack in columns of
//!     `rows_per_column`, growing rightward from `x_agents` in steps of
//!     `x_gap`, each column starting `agent_column_base_offset` above the
//!     branch row and descending by `agent_row_height`;
//!   - when more agents match than the branch's reveal limit, a single
//!     "+n more" node sits one column past the last agent column.
//!
//! All positions are pure integer arithmetic over the inputs; two calls
//! with identical arguments produce identical diagrams.

use std::collections::HashMap;

use crate::config::LayoutConfig;
use crate::records::types::{Agent, Branch};
use crate::state::{ExpansionSet, RevealState};

use super::types::{
    Diagram, GraphEdge, GraphNode, NodeKind, ROOT_ID, agent_node_id, branch_node_id, more_node_id,
};

pub struct LayoutEngine;

impl LayoutEngine {
    /// Lay out the chart for the given branches and per-branch visible
    /// agents. `agents_by_branch` holds already-filtered agents keyed by
    /// branch id, each list in upstream record order; branches absent from
    /// the map are treated as having no visible agents.
    pub fn layout(
        branches: &[Branch],
        agents_by_branch: &HashMap<u64, Vec<&Agent>>,
        expansion: &ExpansionSet,
        reveal: &RevealState,
        config: &LayoutConfig,
    ) -> Diagram {
        let mut diagram = Diagram::new();

        diagram.nodes.push(GraphNode::new(
            ROOT_ID,
            NodeKind::Root,
            config.root_label.clone(),
            0,
            0,
        ));

        for (i, branch) in branches.iter().enumerate() {
            let list: &[&Agent] = agents_by_branch
                .get(&branch.id)
                .map(|v| v.as_slice())
                .unwrap_or(&[]);
            let count = list.len();
            let y = config.y_base + (i as i64) * config.y_step;

            let label = if count > 0 {
                format!("{} ({})", branch.name, count)
            } else {
                branch.name.clone()
            };
            diagram.nodes.push(GraphNode::new(
                branch_node_id(branch.id),
                NodeKind::Branch,
                label,
                config.x_branch,
                y,
            ));
            diagram.edges.push(GraphEdge::root_to_branch(branch.id));

            // Collapsed branches and branches with nothing visible keep
            // only their branch node and root edge.
            if !expansion.contains(branch.id) || count == 0 {
                continue;
            }

            let limit = reveal.limit_for(branch.id);
            let shown = count.min(limit);
            for (idx, agent) in list[..shown].iter().enumerate() {
                let col = (idx / config.rows_per_column) as i64;
                let row = (idx % config.rows_per_column) as i64;
                let x = config.x_agents + col * config.x_gap;
                let agent_y = y + config.agent_column_base_offset + row * config.agent_row_height;
                diagram.nodes.push(GraphNode::new(
                    agent_node_id(agent.id),
                    NodeKind::Agent,
                    agent.name.clone(),
                    x,
                    agent_y,
                ));
                diagram
                    .edges
                    .push(GraphEdge::branch_to_agent(branch.id, agent.id));
            }

            if count > limit {
                let columns_used = limit.div_ceil(config.rows_per_column) as i64;
                let x = config.x_agents + columns_used * config.x_gap;
                diagram.nodes.push(GraphNode::new(
                    more_node_id(branch.id),
                    NodeKind::More,
                    format!("+{} more", count - limit),
                    x,
                    y - 10,
                ));
                diagram.edges.push(GraphEdge::branch_to_more(branch.id));
            }
        }

        diagram
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::Point;
    use crate::records::types::Role;

    fn agent(id: u64, name: &str, branch_id: u64) -> Agent {
        Agent::new(id, name, Role::Agent, branch_id)
    }

    fn by_branch<'a>(agents: &'a [Agent]) -> HashMap<u64, Vec<&'a Agent>> {
        let mut map: HashMap<u64, Vec<&Agent>> = HashMap::new();
        for a in agents {
            map.entry(a.branch_id).or_default().push(a);
        }
        map
    }

    fn layout_with(
        branches: &[Branch],
        agents: &[Agent],
        expansion: &ExpansionSet,
        reveal: &RevealState,
    ) -> Diagram {
        LayoutEngine::layout(
            branches,
            &by_branch(agents),
            expansion,
            reveal,
            &LayoutConfig::default(),
        )
    }

    // ── Root and branch rows ──────────────────────────────────────────────────

    #[test]
    fn test_empty_inputs_give_root_only() {
        let d = layout_with(&[], &[], &ExpansionSet::new(), &RevealState::default());
        assert_eq!(d.node_count(), 1);
        assert_eq!(d.edge_count(), 0);
        let root = d.node("root").unwrap();
        assert_eq!(root.kind, NodeKind::Root);
        assert_eq!(root.position, Point::new(0, 0));
    }

    #[test]
    fn test_branch_rows_descend_by_step() {
        let branches = vec![Branch::new(1, "North"), Branch::new(2, "South")];
        let d = layout_with(&branches, &[], &ExpansionSet::new(), &RevealState::default());
        assert_eq!(d.node("s-1").unwrap().position, Point::new(0, 100));
        assert_eq!(d.node("s-2").unwrap().position, Point::new(0, 280));
    }

    #[test]
    fn test_every_branch_gets_a_root_edge() {
        let branches = vec![Branch::new(1, "North"), Branch::new(2, "South")];
        let d = layout_with(&branches, &[], &ExpansionSet::new(), &RevealState::default());
        let ids: Vec<&str> = d.edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e-root-s-1", "e-root-s-2"]);
    }

    #[test]
    fn test_branch_label_has_count_when_nonzero() {
        let branches = vec![Branch::new(1, "North")];
        let agents = vec![agent(10, "Ann", 1), agent(11, "Bob", 1)];
        let d = layout_with(&branches, &agents, &ExpansionSet::new(), &RevealState::default());
        assert_eq!(d.node("s-1").unwrap().label, "North (2)");
    }

    #[test]
    fn test_branch_label_plain_when_zero() {
        let branches = vec![Branch::new(1, "North")];
        let d = layout_with(&branches, &[], &ExpansionSet::new(), &RevealState::default());
        assert_eq!(d.node("s-1").unwrap().label, "North");
    }

    // ── Expansion gating ──────────────────────────────────────────────────────

    #[test]
    fn test_collapsed_branch_emits_no_agents() {
        let branches = vec![Branch::new(1, "North")];
        let agents = vec![agent(10, "Ann", 1)];
        let d = layout_with(&branches, &agents, &ExpansionSet::new(), &RevealState::default());
        assert!(d.node("u-10").is_none());
        assert_eq!(d.node_count(), 2);
    }

    #[test]
    fn test_expanded_empty_branch_emits_no_agents() {
        let branches = vec![Branch::new(1, "North")];
        let expansion: ExpansionSet = [1].into_iter().collect();
        let d = layout_with(&branches, &[], &expansion, &RevealState::default());
        assert_eq!(d.node_count(), 2);
        assert!(d.node("more-1").is_none());
    }

    // ── Agent grid ────────────────────────────────────────────────────────────

    #[test]
    fn test_agent_grid_positions() {
        let branches = vec![Branch::new(1, "North")];
        let agents: Vec<Agent> = (0..8).map(|i| agent(10 + i, "A", 1)).collect();
        let expansion: ExpansionSet = [1].into_iter().collect();
        let d = layout_with(&branches, &agents, &expansion, &RevealState::shared(12));

        // first column: rows 0..6 at x = 260, starting 60 above the branch row
        assert_eq!(d.node("u-10").unwrap().position, Point::new(260, 40));
        assert_eq!(d.node("u-11").unwrap().position, Point::new(260, 62));
        assert_eq!(d.node("u-15").unwrap().position, Point::new(260, 150));
        // second column starts at index 6
        assert_eq!(d.node("u-16").unwrap().position, Point::new(420, 40));
        assert_eq!(d.node("u-17").unwrap().position, Point::new(420, 62));
    }

    #[test]
    fn test_second_branch_grid_is_offset_by_row() {
        let branches = vec![Branch::new(1, "North"), Branch::new(2, "South")];
        let agents = vec![agent(20, "Zoe", 2)];
        let expansion: ExpansionSet = [2].into_iter().collect();
        let d = layout_with(&branches, &agents, &expansion, &RevealState::default());
        // branch row y = 280, first agent at 280 - 60
        assert_eq!(d.node("u-20").unwrap().position, Point::new(260, 220));
    }

    // ── Reveal limit / MORE node ──────────────────────────────────────────────

    #[test]
    fn test_no_more_node_at_exact_limit() {
        let branches = vec![Branch::new(1, "North")];
        let agents: Vec<Agent> = (0..12).map(|i| agent(10 + i, "A", 1)).collect();
        let expansion: ExpansionSet = [1].into_iter().collect();
        let d = layout_with(&branches, &agents, &expansion, &RevealState::shared(12));
        assert!(d.node("more-1").is_none());
        assert_eq!(d.nodes.iter().filter(|n| n.kind == NodeKind::Agent).count(), 12);
    }

    #[test]
    fn test_more_node_past_limit() {
        let branches = vec![Branch::new(1, "North")];
        let agents: Vec<Agent> = (0..15).map(|i| agent(10 + i, "A", 1)).collect();
        let expansion: ExpansionSet = [1].into_iter().collect();
        let d = layout_with(&branches, &agents, &expansion, &RevealState::shared(12));

        let more = d.node("more-1").unwrap();
        assert_eq!(more.kind, NodeKind::More);
        assert_eq!(more.label, "+3 more");
        // two full columns shown, more node in the third at y - 10
        assert_eq!(more.position, Point::new(260 + 2 * 160, 90));
        assert!(d.edges.iter().any(|e| e.id == "e-s-1-more"));
        assert_eq!(d.nodes.iter().filter(|n| n.kind == NodeKind::Agent).count(), 12);
    }

    #[test]
    fn test_more_column_rounds_up_for_partial_column() {
        let branches = vec![Branch::new(1, "North")];
        let agents: Vec<Agent> = (0..20).map(|i| agent(10 + i, "A", 1)).collect();
        let expansion: ExpansionSet = [1].into_iter().collect();
        let d = layout_with(&branches, &agents, &expansion, &RevealState::shared(7));
        // ceil(7/6) = 2 columns occupied, more node in the next one
        assert_eq!(d.node("more-1").unwrap().position.x, 260 + 2 * 160);
        assert_eq!(d.node("more-1").unwrap().label, "+13 more");
    }

    #[test]
    fn test_only_first_limit_agents_emitted() {
        let branches = vec![Branch::new(1, "North")];
        let agents = vec![agent(10, "Ann", 1), agent(11, "Bob", 1)];
        let expansion: ExpansionSet = [1].into_iter().collect();
        let d = layout_with(&branches, &agents, &expansion, &RevealState::shared(1));
        assert!(d.node("u-10").is_some());
        assert!(d.node("u-11").is_none());
        assert_eq!(d.node("more-1").unwrap().label, "+1 more");
    }

    // ── Determinism ───────────────────────────────────────────────────────────

    #[test]
    fn test_layout_is_deterministic() {
        let branches = vec![Branch::new(1, "North"), Branch::new(2, "South")];
        let agents: Vec<Agent> = (0..30).map(|i| agent(i, "A", 1 + i % 2)).collect();
        let expansion: ExpansionSet = [1, 2].into_iter().collect();
        let reveal = RevealState::shared(12);
        let a = layout_with(&branches, &agents, &expansion, &reveal);
        let b = layout_with(&branches, &agents, &expansion, &reveal);
        assert_eq!(a, b);
    }

    #[test]
    fn test_node_ids_unique() {
        let branches: Vec<Branch> = (1..=4).map(|i| Branch::new(i, "B")).collect();
        let agents: Vec<Agent> = (0..50).map(|i| agent(100 + i, "A", 1 + i % 4)).collect();
        let expansion: ExpansionSet = (1..=4).collect();
        let d = layout_with(&branches, &agents, &expansion, &RevealState::shared(6));
        let mut ids: Vec<&str> = d.nodes.iter().map(|n| n.id.as_str()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
