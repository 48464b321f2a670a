use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ratings are a 1-5 scale when present.
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// A single piece of user feedback about a chatbot answer.
///
/// Records are append-only: they get a server-assigned `id` and
/// `created_at` on insert and are never mutated or deleted afterwards.
/// `created_at` descending defines the natural read order (newest first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: Uuid,
    /// The question the user asked, if the client supplied it.
    pub question: Option<String>,
    /// The answer the assistant gave for that question.
    pub answer: Option<String>,
    /// Free-form feedback text. The primary payload.
    pub comment: String,
    /// 1-5 rating, if given.
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Input for submitting feedback.
///
/// `id` and `created_at` are server-assigned and intentionally absent;
/// `deny_unknown_fields` rejects bodies that try to smuggle them (or
/// anything else) in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmitFeedbackInput {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub comment: String,
    pub rating: Option<i32>,
}

impl SubmitFeedbackInput {
    /// Check the rating bound. Comments may be empty; a rating outside
    /// 1-5 is the only value-level rejection.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(rating) = self.rating {
            if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(format!(
                    "rating must be between {} and {}",
                    MIN_RATING, MAX_RATING
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(rating: Option<i32>) -> SubmitFeedbackInput {
        SubmitFeedbackInput {
            question: None,
            answer: None,
            comment: "great".to_string(),
            rating,
        }
    }

    #[test]
    fn accepts_missing_rating() {
        assert!(input(None).validate().is_ok());
    }

    #[test]
    fn accepts_ratings_in_range() {
        for rating in MIN_RATING..=MAX_RATING {
            assert!(input(Some(rating)).validate().is_ok());
        }
    }

    #[test]
    fn rejects_ratings_out_of_range() {
        assert!(input(Some(0)).validate().is_err());
        assert!(input(Some(6)).validate().is_err());
        assert!(input(Some(-3)).validate().is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        let body = r#"{"comment":"hi","created_at":"2024-01-01T00:00:00Z"}"#;
        let result: Result<SubmitFeedbackInput, _> = serde_json::from_str(body);
        assert!(result.is_err());
    }
}
