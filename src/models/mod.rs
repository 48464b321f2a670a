//! Domain models for the feedback service.
//!
//! # Core Concepts
//!
//! - [`FeedbackRecord`]: the sole persisted entity — a user comment (with
//!   optional rating) tied to the question/answer pair it is about.
//!   Records are write-once: created via submit, never updated or deleted.
//! - [`SubmitFeedbackInput`]: the wire shape accepted by the submit
//!   endpoint. Server-assigned fields (`id`, `created_at`) are absent here
//!   and unknown fields are rejected outright.
//! - Policy types ([`PublishedPolicy`], [`PolicyQuery`]): the contract of
//!   the external policy/query backend. Consumed only; nothing here is
//!   stored by this service.

mod feedback;
mod policy;

pub use feedback::*;
pub use policy::*;
