use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{Error, Result},
    helpers::thing_helpers::{create_lyrics_thing, create_song_thing, create_user_thing},
    middlewares::mw_auth::Ctx,
    models::edit_suggestion::{
        EditSuggestion, NewEditSuggestion, NewEditSuggestionPayload, ReviewPayload,
        SuggestionStatus,
    },
    validators::request_validator::ValidatedJson,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct SuggestionsQuery {
    pub status: Option<String>,
}

pub struct EditSuggestionController;

impl EditSuggestionController {
    pub async fn get_edit_suggestions(
        State(state): State<AppState>,
        Query(query): Query<SuggestionsQuery>,
    ) -> Result<Json<Vec<EditSuggestion>>> {
        let status = match query.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(SuggestionStatus::parse(raw).ok_or(Error::InvalidInput {
                reason: format!("Unknown status filter '{raw}'"),
            })?),
        };

        let suggestions = state.storage.get_edit_suggestions(status).await?;

        Ok(Json(suggestions))
    }

    pub async fn create_edit_suggestion(
        State(state): State<AppState>,
        ctx: Ctx,
        ValidatedJson(payload): ValidatedJson<NewEditSuggestionPayload>,
    ) -> Result<(StatusCode, Json<EditSuggestion>)> {
        let suggestion = NewEditSuggestion {
            song_id: create_song_thing(&payload.song_id),
            lyrics_id: payload.lyrics_id.as_deref().map(create_lyrics_thing),
            suggested_content: payload.suggested_content,
            reason: payload.reason,
            suggested_by: create_user_thing(&ctx.user_id),
        };

        let created = state.storage.create_edit_suggestion(suggestion).await?;

        Ok((StatusCode::CREATED, Json(created)))
    }

    /// Reviews a suggestion. Only `approved` and `rejected` are accepted.
    pub async fn update_edit_suggestion_status(
        State(state): State<AppState>,
        ctx: Ctx,
        Path(suggestion_id): Path<String>,
        ValidatedJson(payload): ValidatedJson<ReviewPayload>,
    ) -> Result<Json<EditSuggestion>> {
        let raw = payload.status.unwrap_or_default();
        let status = SuggestionStatus::parse(&raw)
            .filter(|status| status.is_review_outcome())
            .ok_or(Error::InvalidSuggestionStatus { status: raw })?;

        let suggestion = state
            .storage
            .update_edit_suggestion_status(&suggestion_id, status, &ctx.user_id)
            .await?;

        tracing::info!(
            "Edit suggestion {} marked {} by {}",
            suggestion_id,
            status.as_ref(),
            ctx.user_id
        );

        Ok(Json(suggestion))
    }
}
