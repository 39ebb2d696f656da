use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{Error, Result},
    helpers::thing_helpers::create_user_thing,
    middlewares::mw_auth::Ctx,
    models::lyrics::{NewLyricsPayload, SongLyrics, UpdateLyricsPayload},
    validators::request_validator::ValidatedJson,
    AppState,
};

pub struct LyricsController;

impl LyricsController {
    pub async fn get_song_lyrics(
        State(state): State<AppState>,
        Path(song_id): Path<String>,
    ) -> Result<Json<Vec<SongLyrics>>> {
        let lyrics = state.storage.get_song_lyrics(&song_id).await?;

        Ok(Json(lyrics))
    }

    pub async fn create_song_lyrics(
        State(state): State<AppState>,
        ctx: Ctx,
        Path(song_id): Path<String>,
        ValidatedJson(payload): ValidatedJson<NewLyricsPayload>,
    ) -> Result<(StatusCode, Json<SongLyrics>)> {
        let song = state
            .storage
            .get_song(&song_id)
            .await?
            .ok_or(Error::SongNotFound { id: song_id })?;

        let new_lyrics = payload.into_new_lyrics(song.id, Some(create_user_thing(&ctx.user_id)));
        let lyrics = state.storage.create_song_lyrics(new_lyrics).await?;

        Ok((StatusCode::CREATED, Json(lyrics)))
    }

    pub async fn update_song_lyrics(
        State(state): State<AppState>,
        Path(lyrics_id): Path<String>,
        ValidatedJson(payload): ValidatedJson<UpdateLyricsPayload>,
    ) -> Result<Json<SongLyrics>> {
        let lyrics = state
            .storage
            .update_song_lyrics(&lyrics_id, payload.into())
            .await?
            .ok_or(Error::LyricsNotFound { id: lyrics_id })?;

        Ok(Json(lyrics))
    }
}
