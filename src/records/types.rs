//! Input record types for the organizational chart.
//!
//! Agents and branches arrive from the admin API as flat JSON records and
//! are immutable once decoded. The hierarchy is fixed at three levels:
//! root → branch → agent.

use serde::{Deserialize, Serialize};

// ─── Role ────────────────────────────────────────────────────────────────────

/// Staff role attached to an agent record.
///
/// Anything other than `"AGENT"` or `"MANAGER"` is preserved verbatim in
/// `Other` so unknown roles round-trip instead of failing the decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Agent,
    Manager,
    Other(String),
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "AGENT" => Role::Agent,
            "MANAGER" => Role::Manager,
            _ => Role::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Agent => "AGENT".to_string(),
            Role::Manager => "MANAGER".to_string(),
            Role::Other(s) => s,
        }
    }
}

impl Role {
    /// True for the roles shown when the agents-only toggle is on.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Agent | Role::Manager)
    }
}

// ─── Agent ───────────────────────────────────────────────────────────────────

/// A staff member belonging to exactly one branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: u64,
    pub name: String,
    pub role: Role,
    pub branch_id: u64,
}

impl Agent {
    pub fn new(id: u64, name: impl Into<String>, role: Role, branch_id: u64) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            branch_id,
        }
    }
}

// ─── Branch ──────────────────────────────────────────────────────────────────

/// An organizational location owning zero or more agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: u64,
    pub name: String,
}

impl Branch {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_known_strings() {
        assert_eq!(Role::from("AGENT".to_string()), Role::Agent);
        assert_eq!(Role::from("MANAGER".to_string()), Role::Manager);
    }

    #[test]
    fn test_role_from_unknown_string() {
        let r = Role::from("ADMIN".to_string());
        assert_eq!(r, Role::Other("ADMIN".to_string()));
    }

    #[test]
    fn test_role_round_trips_unknown() {
        let r = Role::from("SUPERVISOR".to_string());
        assert_eq!(String::from(r), "SUPERVISOR");
    }

    #[test]
    fn test_role_is_staff() {
        assert!(Role::Agent.is_staff());
        assert!(Role::Manager.is_staff());
        assert!(!Role::Other("ADMIN".to_string()).is_staff());
    }

    #[test]
    fn test_agent_new() {
        let a = Agent::new(10, "Ann", Role::Agent, 1);
        assert_eq!(a.id, 10);
        assert_eq!(a.name, "Ann");
        assert_eq!(a.role, Role::Agent);
        assert_eq!(a.branch_id, 1);
    }

    #[test]
    fn test_branch_new() {
        let b = Branch::new(1, "North");
        assert_eq!(b.id, 1);
        assert_eq!(b.name, "North");
    }

    #[test]
    fn test_agent_deserializes_camel_case() {
        let a: Agent =
            serde_json::from_str(r#"{"id":10,"name":"Ann","role":"AGENT","branchId":1}"#).unwrap();
        assert_eq!(a, Agent::new(10, "Ann", Role::Agent, 1));
    }

    #[test]
    fn test_agent_unknown_role_decodes() {
        let a: Agent =
            serde_json::from_str(r#"{"id":3,"name":"Eve","role":"ADMIN","branchId":2}"#).unwrap();
        assert_eq!(a.role, Role::Other("ADMIN".to_string()));
    }

    #[test]
    fn test_branch_deserializes() {
        let b: Branch = serde_json::from_str(r#"{"id":1,"name":"North"}"#).unwrap();
        assert_eq!(b, Branch::new(1, "North"));
    }
}
