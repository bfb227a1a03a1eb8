//! Click handling: node id → view-state transition.
//!
//! The rendering surface reports clicks with nothing but the clicked node's
//! id; the controller classifies the id by its prefix and applies the
//! matching transition. Root and agent nodes are informational — clicking
//! them changes nothing. The controller is plain data handed to whoever
//! owns the surface; there is no global registration.

use crate::layout::types::{BRANCH_PREFIX, MORE_PREFIX};
use crate::state::ViewState;

/// The state transition a click maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Expand or collapse the branch.
    ToggleBranch(u64),
    /// Raise the reveal limit for the branch's view.
    RevealMore(u64),
    /// Root, agent, or unrecognizable id: no state change.
    Ignore,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionController;

impl InteractionController {
    pub fn new() -> Self {
        Self
    }

    /// Classify a clicked node id. Ids whose numeric suffix does not parse
    /// are ignored rather than rejected; clicks never fail.
    pub fn classify(&self, node_id: &str) -> Action {
        if let Some(rest) = node_id.strip_prefix(BRANCH_PREFIX) {
            if let Ok(id) = rest.parse::<u64>() {
                return Action::ToggleBranch(id);
            }
        }
        if let Some(rest) = node_id.strip_prefix(MORE_PREFIX) {
            if let Ok(id) = rest.parse::<u64>() {
                return Action::RevealMore(id);
            }
        }
        Action::Ignore
    }

    /// Apply the transition for a click to the view. Returns true when the
    /// view changed (and the diagram should be rebuilt).
    pub fn apply(&self, view: &mut ViewState, node_id: &str) -> bool {
        match self.classify(node_id) {
            Action::ToggleBranch(id) => {
                view.expansion = view.expansion.toggle(id);
                true
            }
            Action::RevealMore(id) => {
                view.reveal.increment(id);
                true
            }
            Action::Ignore => false,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
