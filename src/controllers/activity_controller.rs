use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::Result, helpers::query_helpers::PageQuery, models::activity::ActivityItem, AppState,
};

const DEFAULT_ACTIVITY_LIMIT: u32 = 10;

pub struct ActivityController;

impl ActivityController {
    pub async fn get_recent_activity(
        State(state): State<AppState>,
        Query(query): Query<PageQuery>,
    ) -> Result<Json<Vec<ActivityItem>>> {
        let activity = state
            .storage
            .get_recent_activity(query.limit_or(DEFAULT_ACTIVITY_LIMIT))
            .await?;

        Ok(Json(activity))
    }
}
