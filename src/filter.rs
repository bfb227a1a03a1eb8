//! Visibility filtering of agent records.
//!
//! Two independent predicates: a role toggle (staff roles only) and a
//! trimmed case-insensitive substring match on the agent name. The filter
//! is stable (input order preserved) and never re-sorts.

use crate::records::types::Agent;

/// Return the agents visible under the given query and role toggle.
///
/// A blank or whitespace-only query matches every name. When `only_staff`
/// is false the role filter is disabled entirely.
pub fn visible_agents<'a>(agents: &'a [Agent], query: &str, only_staff: bool) -> Vec<&'a Agent> {
    let q = query.trim().to_lowercase();
    agents
        .iter()
        .filter(|a| !only_staff || a.role.is_staff())
        .filter(|a| q.is_empty() || a.name.to_lowercase().contains(&q))
        .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
