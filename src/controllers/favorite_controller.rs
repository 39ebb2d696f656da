use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{Error, Result},
    helpers::thing_helpers::{create_song_thing, create_user_thing},
    middlewares::mw_auth::Ctx,
    models::favorite::{Favorite, FavoriteCheck, FavoritePayload, FavoriteWithSong, NewFavorite},
    validators::request_validator::ValidatedJson,
    AppState,
};

pub struct FavoriteController;

impl FavoriteController {
    pub async fn get_favorites(
        State(state): State<AppState>,
        ctx: Ctx,
    ) -> Result<Json<Vec<FavoriteWithSong>>> {
        let favorites = state.storage.get_user_favorites(&ctx.user_id).await?;

        Ok(Json(favorites))
    }

    pub async fn add_favorite(
        State(state): State<AppState>,
        ctx: Ctx,
        ValidatedJson(payload): ValidatedJson<FavoritePayload>,
    ) -> Result<(StatusCode, Json<Favorite>)> {
        let song_id = payload
            .song_id
            .filter(|id| !id.trim().is_empty())
            .ok_or(Error::InvalidInput {
                reason: "Song ID is required".to_string(),
            })?;

        let favorite = state
            .storage
            .add_favorite(NewFavorite {
                user_id: create_user_thing(&ctx.user_id),
                song_id: create_song_thing(song_id.trim()),
            })
            .await?;

        Ok((StatusCode::CREATED, Json(favorite)))
    }

    pub async fn remove_favorite(
        State(state): State<AppState>,
        ctx: Ctx,
        Path(song_id): Path<String>,
    ) -> Result<StatusCode> {
        state
            .storage
            .remove_favorite(&ctx.user_id, &song_id)
            .await?;

        Ok(StatusCode::NO_CONTENT)
    }

    pub async fn check_favorite(
        State(state): State<AppState>,
        ctx: Ctx,
        Path(song_id): Path<String>,
    ) -> Result<Json<FavoriteCheck>> {
        let is_favorite = state.storage.is_favorite(&ctx.user_id, &song_id).await?;

        Ok(Json(FavoriteCheck { is_favorite }))
    }
}
