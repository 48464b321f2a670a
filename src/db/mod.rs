mod schema;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Utc;
use rusqlite::Connection;
use thiserror::Error;
use uuid::Uuid;

use crate::models::*;

/// Storage failure: the store is unreachable or rejected the operation.
///
/// This is the only error kind the feedback store surfaces. Callers get an
/// immediate failure; no retry is attempted at this layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
}

/// Handle to the feedback store.
///
/// Constructed once at startup and cloned into each request handler, so the
/// connection's lifetime is scoped to the handle rather than living in
/// process-global state.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Database path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "policybot")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let db_path = dirs.data_dir().join("feedback.db");
        Self::open(db_path)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("database lock poisoned");
        schema::run_migrations(&conn)
    }

    /// Insert a feedback record, assigning `id` and `created_at`.
    ///
    /// One row, one statement; there is no multi-document invariant to
    /// protect, so no transaction is needed.
    pub fn insert_feedback(&self, input: SubmitFeedbackInput) -> Result<FeedbackRecord, StoreError> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let id = Uuid::new_v4();
        let now = Utc::now();

        conn.execute(
            "INSERT INTO feedback (id, question, answer, comment, rating, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            (
                id.to_string(),
                &input.question,
                &input.answer,
                &input.comment,
                input.rating,
                now.to_rfc3339(),
            ),
        )?;

        Ok(FeedbackRecord {
            id,
            question: input.question,
            answer: input.answer,
            comment: input.comment,
            rating: input.rating,
            created_at: now,
        })
    }

    /// The most recently created records, newest first, at most `limit`.
    ///
    /// Insertion order (rowid) breaks `created_at` ties so two submits in
    /// the same instant still list in submit order.
    pub fn recent_feedback(&self, limit: u32) -> Result<Vec<FeedbackRecord>, StoreError> {
        let conn = self.conn.lock().expect("database lock poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, question, answer, comment, rating, created_at
             FROM feedback ORDER BY created_at DESC, rowid DESC LIMIT ?",
        )?;

        let records = stmt
            .query_map([limit as i64], |row| {
                Ok(FeedbackRecord {
                    id: parse_uuid(row.get::<_, String>(0)?),
                    question: row.get(1)?,
                    answer: row.get(2)?,
                    comment: row.get(3)?,
                    rating: row.get(4)?,
                    created_at: parse_datetime(row.get::<_, String>(5)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }
}

fn parse_uuid(s: String) -> Uuid {
    Uuid::parse_str(&s).unwrap_or_else(|_| Uuid::nil())
}

fn parse_datetime(s: String) -> chrono::DateTime<Utc> {
    chrono::DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
