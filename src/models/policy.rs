use serde::{Deserialize, Serialize};

/// A policy document published to end users by the policy backend.
///
/// The triple (`insurance_type`, `policy_name`, `policy_year`) identifies a
/// policy version; `id` is the backend's own document id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedPolicy {
    pub id: String,
    /// e.g. "Health", "Motor", "Travel"
    pub insurance_type: String,
    pub policy_name: String,
    pub policy_year: String,
    pub published: bool,
}

/// A batch of natural-language questions against one published policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyQuery {
    pub insurance_type: String,
    pub policy_name: String,
    pub policy_year: String,
    pub questions: Vec<String>,
}

/// Answers parallel to the submitted questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyQueryResponse {
    pub answers: Vec<String>,
}
