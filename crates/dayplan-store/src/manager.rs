use std::sync::Mutex;

use rusqlite::Connection;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::types::Plan;

/// Append-only log of generated plans.
///
/// Thread-safe: wraps the SQLite connection in a Mutex. Each request
/// performs at most one insert and one read-all.
pub struct PlanStore {
    db: Mutex<Connection>,
}

impl PlanStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Mutex::new(conn),
        }
    }

    /// Persist a generated plan. The id and timestamp are assigned here.
    pub fn insert(&self, content: &str) -> Result<Plan> {
        if content.trim().is_empty() {
            return Err(StoreError::EmptyContent);
        }

        let db = self.db.lock().unwrap();
        let now = chrono::Utc::now().to_rfc3339();
        db.execute(
            "INSERT INTO schedules (created_at, content) VALUES (?1, ?2)",
            rusqlite::params![now, content],
        )?;
        let id = db.last_insert_rowid();
        debug!(id, chars = content.len(), "stored plan");

        Ok(Plan {
            id,
            created_at: now,
            content: content.to_string(),
        })
    }

    /// All plans, newest first. Same-timestamp rows keep reverse insertion
    /// order (id tie-break).
    pub fn list_all_desc(&self) -> Result<Vec<Plan>> {
        let db = self.db.lock().unwrap();
        let mut stmt = db.prepare(
            "SELECT id, created_at, content FROM schedules
             ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Plan {
                id: row.get(0)?,
                created_at: row.get(1)?,
                content: row.get(2)?,
            })
        })?;

        let mut plans = Vec::new();
        for plan in rows {
            plans.push(plan?);
        }
        Ok(plans)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;

    fn store() -> PlanStore {
        let conn = Connection::open_in_memory().expect("open");
        init_db(&conn).expect("init");
        PlanStore::new(conn)
    }

    #[test]
    fn insert_assigns_id_and_timestamp() {
        let store = store();
        let plan = store.insert("7:00 AM: wake up").expect("insert");
        assert_eq!(plan.id, 1);
        assert_eq!(plan.content, "7:00 AM: wake up");
        assert!(!plan.created_at.is_empty());
    }

    #[test]
    fn list_returns_reverse_insertion_order() {
        let store = store();
        for i in 1..=5 {
            store.insert(&format!("plan {i}")).expect("insert");
        }

        let plans = store.list_all_desc().expect("list");
        assert_eq!(plans.len(), 5);
        // Inserts land within the same second; the id tie-break keeps
        // exact reverse insertion order.
        let ids: Vec<i64> = plans.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
        assert_eq!(plans[0].content, "plan 5");
        assert_eq!(plans[4].content, "plan 1");
    }

    #[test]
    fn empty_history_lists_empty() {
        let store = store();
        assert!(store.list_all_desc().expect("list").is_empty());
    }

    #[test]
    fn empty_content_is_rejected() {
        let store = store();
        assert!(matches!(
            store.insert(""),
            Err(StoreError::EmptyContent)
        ));
        assert!(matches!(
            store.insert("   \n\t"),
            Err(StoreError::EmptyContent)
        ));
        assert!(store.list_all_desc().expect("list").is_empty());
    }

    #[test]
    fn init_db_is_idempotent() {
        let conn = Connection::open_in_memory().expect("open");
        init_db(&conn).expect("first init");
        init_db(&conn).expect("second init");
    }

    #[test]
    fn plans_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("plans.db");

        {
            let conn = Connection::open(&path).expect("open");
            init_db(&conn).expect("init");
            let store = PlanStore::new(conn);
            store.insert("persisted plan").expect("insert");
        }

        let conn = Connection::open(&path).expect("reopen");
        init_db(&conn).expect("re-init");
        let store = PlanStore::new(conn);
        let plans = store.list_all_desc().expect("list");
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].content, "persisted plan");
    }
}
