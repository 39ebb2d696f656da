use serde::{Deserialize, Serialize};
use surrealdb::{sql::Thing, Datetime};
use validator::Validate;

use crate::{
    helpers::thing_helpers::{serialize_id, serialize_opt_id},
    validators::request_validator::RequestModel,
};

#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, strum_macros::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SuggestionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SuggestionStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Only these can be the outcome of a review.
    pub fn is_review_outcome(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct EditSuggestion {
    #[serde(serialize_with = "serialize_id")]
    pub id: Thing,
    #[serde(serialize_with = "serialize_id")]
    pub song_id: Thing,
    #[serde(default, serialize_with = "serialize_opt_id")]
    pub lyrics_id: Option<Thing>,
    pub suggested_content: String,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: SuggestionStatus,
    #[serde(serialize_with = "serialize_id")]
    pub suggested_by: Thing,
    #[serde(default, serialize_with = "serialize_opt_id")]
    pub reviewed_by: Option<Thing>,
    pub created_at: Datetime,
    pub updated_at: Datetime,
}

/// Row content for `CREATE edit_suggestion`.
#[derive(Debug, Serialize, Clone)]
pub struct NewEditSuggestion {
    pub song_id: Thing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lyrics_id: Option<Thing>,
    pub suggested_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub suggested_by: Thing,
}

#[derive(Debug, Serialize)]
pub(crate) struct PendingEditSuggestion {
    #[serde(flatten)]
    pub suggestion: NewEditSuggestion,
    pub status: SuggestionStatus,
}

impl From<NewEditSuggestion> for PendingEditSuggestion {
    fn from(suggestion: NewEditSuggestion) -> Self {
        Self {
            suggestion,
            status: SuggestionStatus::Pending,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewEditSuggestionPayload {
    #[validate(length(min = 1))]
    pub song_id: String,
    #[validate(length(min = 1))]
    pub lyrics_id: Option<String>,
    #[validate(length(min = 1, max = 50000))]
    pub suggested_content: String,
    #[validate(length(max = 2000))]
    pub reason: Option<String>,
}

impl RequestModel for NewEditSuggestionPayload {
    const INVALID_MESSAGE: &'static str = "Invalid suggestion data";
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReviewPayload {
    pub status: Option<String>,
}

impl RequestModel for ReviewPayload {
    const INVALID_MESSAGE: &'static str = "Invalid status";
}
