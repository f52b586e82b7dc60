//! Borrow request payloads and acknowledgments.

use crate::types::{Error, Result, ToolId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A request to borrow one tool for a date range.
///
/// Submission accepts any serializable payload; this type is the shape the
/// front end sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowRequest {
    pub tool_id: ToolId,
    pub requester: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl BorrowRequest {
    pub fn new(
        tool_id: impl Into<ToolId>,
        requester: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            tool_id: tool_id.into(),
            requester: requester.into(),
            start_date,
            end_date,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.tool_id.as_str().trim().is_empty() {
            return Err(Error::validation("tool_id cannot be empty"));
        }
        if self.requester.trim().is_empty() {
            return Err(Error::validation("requester cannot be empty"));
        }
        if self.end_date < self.start_date {
            return Err(Error::validation(format!(
                "end_date {} is before start_date {}",
                self.end_date, self.start_date
            )));
        }
        Ok(())
    }

    /// Inclusive length of the borrowing period in days.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Acknowledgment substituted when a submission cannot reach the service.
pub fn simulated_ack() -> Value {
    json!({ "ok": true, "mocked": true })
}

/// Whether an acknowledgment carries the simulated marker.
pub fn is_simulated(ack: &Value) -> bool {
    ack.get("mocked").and_then(Value::as_bool).unwrap_or(false)
}
