//! View state: which branches are expanded and how many agents each shows.
//!
//! All of this is owned by a single view context and mutated one click at a
//! time, so the types are small value types with pure transitions where the
//! contract demands purity (`ExpansionSet::toggle`).

use std::collections::{BTreeMap, BTreeSet};

// ─── Pagination constants ────────────────────────────────────────────────────

/// How much a reveal-more click raises a limit.
pub const REVEAL_STEP: usize = 12;
/// Bounds enforced on directly-entered limits (not on increments).
pub const LIMIT_MIN: usize = 6;
pub const LIMIT_MAX: usize = 60;
/// Initial reveal limit.
pub const DEFAULT_LIMIT: usize = 12;

// ─── ExpansionSet ────────────────────────────────────────────────────────────

/// The set of branches currently showing their agents. Starts empty.
///
/// Backed by a `BTreeSet` so iteration (and therefore anything
/// keyed on a snapshot of this set) is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpansionSet(BTreeSet<u64>);

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure toggle: returns a new set with `branch_id` flipped.
    /// Toggling twice returns to the original set.
    #[must_use]
    pub fn toggle(&self, branch_id: u64) -> Self {
        let mut next = self.0.clone();
        if !next.remove(&branch_id) {
            next.insert(branch_id);
        }
        Self(next)
    }

    pub fn contains(&self, branch_id: u64) -> bool {
        self.0.contains(&branch_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<u64> for ExpansionSet {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ─── RevealState ─────────────────────────────────────────────────────────────

/// Reveal limits: how many agents an expanded branch shows before the
/// "+n more" node appears.
///
/// The observed console shares one scalar limit across every branch, so a
/// reveal-more click on one branch raises the cap everywhere. That coupling
/// is preserved as the default (`Shared`); `PerBranch` scopes each
/// increment to the clicked branch instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealState {
    Shared(usize),
    PerBranch {
        default: usize,
        overrides: BTreeMap<u64, usize>,
    },
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Shared(DEFAULT_LIMIT)
    }
}

impl RevealState {
    pub fn shared(limit: usize) -> Self {
        Self::Shared(limit)
    }

    pub fn per_branch(default: usize) -> Self {
        Self::PerBranch {
            default,
            overrides: BTreeMap::new(),
        }
    }

    /// The limit currently in effect for the given branch.
    pub fn limit_for(&self, branch_id: u64) -> usize {
        match self {
            Self::Shared(limit) => *limit,
            Self::PerBranch { default, overrides } => {
                overrides.get(&branch_id).copied().unwrap_or(*default)
            }
        }
    }

    /// Raise the limit by exactly [`REVEAL_STEP`]. In `Shared` mode the
    /// clicked branch is irrelevant; in `PerBranch` mode only that branch's
    /// limit grows. Increments are never clamped.
    pub fn increment(&mut self, branch_id: u64) {
        match self {
            Self::Shared(limit) => *limit += REVEAL_STEP,
            Self::PerBranch { default, overrides } => {
                let entry = overrides.entry(branch_id).or_insert(*default);
                *entry += REVEAL_STEP;
            }
        }
    }

    /// Set the base limit from direct numeric input, clamped to
    /// [`LIMIT_MIN`]..=[`LIMIT_MAX`]. Step-of-2 semantics are the input
    /// surface's job, not this component's.
    pub fn set_limit(&mut self, n: usize) {
        let clamped = n.clamp(LIMIT_MIN, LIMIT_MAX);
        match self {
            Self::Shared(limit) => *limit = clamped,
            Self::PerBranch { default, .. } => *default = clamped,
        }
    }
}

// ─── ViewState ───────────────────────────────────────────────────────────────

/// Everything the user can change about the chart without refetching data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    /// When true, only AGENT and MANAGER roles are shown.
    pub only_staff: bool,
    pub expansion: ExpansionSet,
    pub reveal: RevealState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Fresh view: nothing expanded, staff-only roles, default limit.
    pub fn new() -> Self {
        Self {
            query: String::new(),
            only_staff: true,
            expansion: ExpansionSet::new(),
            reveal: RevealState::default(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
