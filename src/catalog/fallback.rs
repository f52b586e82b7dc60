//! Fixed offline tool table.
//!
//! Served whenever the catalog service cannot be reached or answers with
//! something unrecognizable. Built once per process and never mutated.

use super::tool::Tool;
use crate::types::ToolId;
use std::sync::OnceLock;

static FALLBACK_TOOLS: OnceLock<Vec<Tool>> = OnceLock::new();

/// The fallback table, in display order.
pub fn fallback_tools() -> &'static [Tool] {
    FALLBACK_TOOLS.get_or_init(|| {
        vec![
            Tool::new("1", "Power Drill", "Tools", "Good", true),
            Tool::new("2", "Hammer", "Tools", "Fair", true),
            Tool::new("3", "Ladder", "Equipment", "Good", false),
            Tool::new("4", "Camping Tent", "Camping", "Fair", true),
            Tool::new("5", "Electric Saw", "Tools", "Good", false),
        ]
    })
}

/// Look up a fallback tool by string-equal id.
pub fn find_fallback_tool(id: &ToolId) -> Option<&'static Tool> {
    fallback_tools().iter().find(|t| &t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_contents() {
        let tools = fallback_tools();
        assert_eq!(tools.len(), 5);
        let ids: Vec<&str> = tools.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert!(tools.iter().all(|t| !t.name.is_empty() && !t.category.is_empty()));
    }

    #[test]
    fn test_table_is_shared() {
        assert!(std::ptr::eq(fallback_tools(), fallback_tools()));
    }

    #[test]
    fn test_find_normalizes_numeric_ids() {
        let tool = find_fallback_tool(&ToolId::from(3u32)).unwrap();
        assert_eq!(tool.name, "Ladder");
        assert!(!tool.available);

        assert!(find_fallback_tool(&ToolId::from("999")).is_none());
        assert!(find_fallback_tool(&ToolId::from("03")).is_none());
    }
}
