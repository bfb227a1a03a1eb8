/// Configuration for the chart geometry.
///
/// All coordinates are integer pixels in the rendering surface's space.
/// Identical configuration plus identical inputs must always produce an
/// identical diagram, so nothing here is derived at runtime.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Label of the synthetic root node.
    pub root_label: String,
    /// Vertical offset of the first branch row.
    pub y_base: i64,
    /// Vertical distance between consecutive branch rows.
    pub y_step: i64,
    /// Horizontal position of the branch column.
    pub x_branch: i64,
    /// Horizontal position of the first agent column.
    pub x_agents: i64,
    /// Horizontal distance between agent columns.
    pub x_gap: i64,
    /// Agents stacked per column before wrapping to the next one.
    pub rows_per_column: usize,
    /// Vertical distance between agents within a column.
    pub agent_row_height: i64,
    /// Vertical offset of a branch's first agent row relative to the branch.
    pub agent_column_base_offset: i64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            root_label: "Company".to_string(),
            y_base: 100,
            y_step: 180,
            x_branch: 0,
            x_agents: 260,
            x_gap: 160,
            rows_per_column: 6,
            agent_row_height: 22,
            agent_column_base_offset: -60,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let c = LayoutConfig::default();
        assert_eq!(c.y_base, 100);
        assert_eq!(c.y_step, 180);
        assert_eq!(c.x_branch, 0);
        assert_eq!(c.x_agents, 260);
        assert_eq!(c.x_gap, 160);
        assert_eq!(c.rows_per_column, 6);
        assert_eq!(c.agent_row_height, 22);
        assert_eq!(c.agent_column_base_offset, -60);
    }
}
