use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// A stored, immutable record of one generated daily schedule.
///
/// Rows are append-only: no update or delete path exists anywhere in
/// the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,
    /// RFC3339 UTC timestamp assigned at insert.
    pub created_at: String,
    pub content: String,
}

impl Plan {
    /// Timestamp formatted for the history panel (`YYYY-MM-DD HH:MM:SS`).
    pub fn created_at_display(&self) -> String {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }
}
