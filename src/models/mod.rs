pub mod activity;
pub mod edit_suggestion;
pub mod favorite;
pub mod lyrics;
pub mod song;
pub mod user;

use serde::Serialize;
use surrealdb::Datetime;

/// Partial update merged into a row together with a fresh `updated_at`.
#[derive(Debug, Serialize, Clone)]
pub struct Stamped<T> {
    #[serde(flatten)]
    pub changes: T,
    pub updated_at: Datetime,
}

impl<T> Stamped<T> {
    pub fn now(changes: T) -> Self {
        Self {
            changes,
            updated_at: Datetime::from(chrono::Utc::now()),
        }
    }
}
