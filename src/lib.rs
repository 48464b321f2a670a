//! Feedback capture service for the PolicyBot insurance Q&A assistant.
//!
//! A small stateless HTTP service: clients submit a comment (optionally
//! with the question/answer pair it is about and a 1-5 rating), the
//! service persists a timestamped record, and a read path returns the most
//! recent entries newest first. Records are append-only; there is no
//! update or delete.

pub mod api;
pub mod db;
pub mod models;
pub mod policy;
