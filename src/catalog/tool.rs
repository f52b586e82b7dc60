//! Tool records and client-side listing helpers.

use crate::types::ToolId;
use serde::{Deserialize, Serialize};

/// Number of tools shown on the catalog's front page.
pub const FEATURED_COUNT: usize = 3;

/// A lendable tool. All five fields are required on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub id: ToolId,
    pub name: String,
    pub category: String,
    pub condition: String,
    pub available: bool,
}

impl Tool {
    pub fn new(
        id: impl Into<ToolId>,
        name: impl Into<String>,
        category: impl Into<String>,
        condition: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            condition: condition.into(),
            available,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Unavailable"
        }
    }

    /// `"{category} • {condition}"`
    pub fn summary_line(&self) -> String {
        format!("{} • {}", self.category, self.condition)
    }

    /// Whether a borrow request may be started for this tool.
    pub fn is_borrowable(&self) -> bool {
        self.available
    }
}

/// Client-side listing filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolFilter {
    pub available_only: bool,
    /// Case-insensitive category match.
    pub category: Option<String>,
}

impl ToolFilter {
    pub fn matches(&self, tool: &Tool) -> bool {
        if self.available_only && !tool.available {
            return false;
        }
        match &self.category {
            Some(category) => tool.category.eq_ignore_ascii_case(category.trim()),
            None => true,
        }
    }

    /// Keep matching tools, preserving order.
    pub fn apply<'a>(&self, tools: &'a [Tool]) -> Vec<&'a Tool> {
        tools.iter().filter(|t| self.matches(t)).collect()
    }
}

/// First `n` tools of a listing, in listing order.
pub fn featured_tools(tools: &[Tool], n: usize) -> &[Tool] {
    &tools[..n.min(tools.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn drill() -> Tool {
        Tool::new("1", "Power Drill", "Tools", "Good", true)
    }

    #[test]
    fn test_decode_numeric_id() {
        let tool: Tool = serde_json::from_value(json!({
            "id": 2, "name": "Hammer", "category": "Tools", "condition": "Fair", "available": true
        }))
        .unwrap();
        assert_eq!(tool.id, "2");
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let tool: Tool = serde_json::from_value(json!({
            "id": "1", "name": "Power Drill", "category": "Tools", "condition": "Good",
            "available": true, "owner": "sam"
        }))
        .unwrap();
        assert_eq!(tool, drill());
    }

    #[test]
    fn test_decode_requires_all_fields() {
        let missing = json!({"id": "1", "name": "Power Drill", "category": "Tools", "available": true});
        assert!(serde_json::from_value::<Tool>(missing).is_err());

        let bad_available = json!({
            "id": "1", "name": "Power Drill", "category": "Tools", "condition": "Good", "available": "yes"
        });
        assert!(serde_json::from_value::<Tool>(bad_available).is_err());
    }

    #[test]
    fn test_labels() {
        let mut tool = drill();
        assert_eq!(tool.status_label(), "Available");
        assert_eq!(tool.summary_line(), "Tools • Good");
        assert!(tool.is_borrowable());

        tool.available = false;
        assert_eq!(tool.status_label(), "Unavailable");
        assert!(!tool.is_borrowable());
    }

    #[test]
    fn test_filter() {
        let tools = vec![
            drill(),
            Tool::new("3", "Ladder", "Equipment", "Good", false),
            Tool::new("4", "Camping Tent", "Camping", "Fair", true),
        ];

        let all = ToolFilter::default().apply(&tools);
        assert_eq!(all.len(), 3);

        let available = ToolFilter {
            available_only: true,
            category: None,
        }
        .apply(&tools);
        let ids: Vec<&str> = available.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);

        let camping = ToolFilter {
            available_only: false,
            category: Some("camping".into()),
        }
        .apply(&tools);
        assert_eq!(camping.len(), 1);
        assert_eq!(camping[0].name, "Camping Tent");
    }

    #[test]
    fn test_featured_tools_clamps() {
        let tools = vec![drill(), Tool::new("2", "Hammer", "Tools", "Fair", true)];
        assert_eq!(featured_tools(&tools, FEATURED_COUNT).len(), 2);
        assert_eq!(featured_tools(&tools, 1)[0].name, "Power Drill");
        assert!(featured_tools(&[], FEATURED_COUNT).is_empty());
    }
}
