//! Plain-text outline of a diagram, for the CLI and for eyeballing builds.
//!
//! This is inspection tooling, not the interactive rendering surface: one
//! line per node, indented by hierarchy, with the node id and position.

use crate::layout::graph::DiagramIndex;
use crate::layout::types::{Diagram, GraphNode, ROOT_ID};

/// Render the diagram as an indented outline.
///
/// ```text
/// Company [root] @ (0, 0)
/// ├─ North (2) [s-1] @ (0, 100)
/// │  ├─ Ann [u-10] @ (260, 40)
/// │  └─ Bob [u-11] @ (260, 62)
/// └─ South [s-2] @ (0, 280)
/// ```
pub fn render_outline(diagram: &Diagram) -> String {
    let index = DiagramIndex::from_diagram(diagram);
    let mut out = String::new();

    let Some(root) = index.root() else {
        return out;
    };
    out.push_str(&node_line(root));
    out.push('\n');

    let branches = index.children(ROOT_ID);
    let branch_count = branches.len();
    for (bi, branch) in branches.iter().enumerate() {
        let last_branch = bi + 1 == branch_count;
        out.push_str(if last_branch { "└─ " } else { "├─ " });
        out.push_str(&node_line(branch));
        out.push('\n');

        let kids = index.children(&branch.id);
        let kid_count = kids.len();
        for (ki, kid) in kids.iter().enumerate() {
            out.push_str(if last_branch { "   " } else { "│  " });
            out.push_str(if ki + 1 == kid_count { "└─ " } else { "├─ " });
            out.push_str(&node_line(kid));
            out.push('\n');
        }
    }

    out
}

fn node_line(node: &GraphNode) -> String {
    format!(
        "{} [{}] @ ({}, {})",
        node.label, node.id, node.position.x, node.position.y
    )
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_diagram;
    use crate::config::LayoutConfig;
    use crate::records::types::{Agent, Branch, Role};
    use crate::state::ViewState;

    fn sample_outline(expand_first: bool) -> String {
        let agents = vec![
            Agent::new(10, "Ann", Role::Agent, 1),
            Agent::new(11, "Bob", Role::Agent, 1),
        ];
        let branches = vec![Branch::new(1, "North"), Branch::new(2, "South")];
        let mut view = ViewState::new();
        if expand_first {
            view.expansion = view.expansion.toggle(1);
        }
        let d = build_diagram(&agents, &branches, &view, &LayoutConfig::default());
        render_outline(&d)
    }

    #[test]
    fn test_collapsed_outline() {
        let out = sample_outline(false);
        assert_eq!(
            out,
            "Company [root] @ (0, 0)\n\
             ├─ North (2) [s-1] @ (0, 100)\n\
             └─ South [s-2] @ (0, 280)\n"
        );
    }

    #[test]
    fn test_expanded_outline_lists_agents() {
        let out = sample_outline(true);
        assert_eq!(
            out,
            "Company [root] @ (0, 0)\n\
             ├─ North (2) [s-1] @ (0, 100)\n\
             │  ├─ Ann [u-10] @ (260, 40)\n\
             │  └─ Bob [u-11] @ (260, 62)\n\
             └─ South [s-2] @ (0, 280)\n"
        );
    }

    #[test]
    fn test_empty_diagram_renders_nothing() {
        assert_eq!(render_outline(&Diagram::new()), "");
    }
}
