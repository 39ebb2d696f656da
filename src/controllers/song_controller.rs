use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    error::{Error, Result},
    helpers::{
        query_helpers::{coerce_limit, PageQuery},
        thing_helpers::create_user_thing,
    },
    middlewares::mw_auth::Ctx,
    models::song::{NewSongPayload, Song, SongWithLyrics, UpdateSongPayload},
    validators::request_validator::ValidatedJson,
    AppState,
};

const DEFAULT_PAGE_SIZE: u32 = 20;
const DEFAULT_POPULAR_LIMIT: u32 = 10;
const DEFAULT_SEARCH_LIMIT: u32 = 20;
const MIN_SEARCH_CHARS: usize = 2;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub limit: Option<String>,
}

pub struct SongController;

impl SongController {
    pub async fn get_songs(
        State(state): State<AppState>,
        Query(query): Query<PageQuery>,
    ) -> Result<Json<Vec<Song>>> {
        let songs = state
            .storage
            .get_songs(query.limit_or(DEFAULT_PAGE_SIZE), query.offset())
            .await?;

        Ok(Json(songs))
    }

    pub async fn get_popular_songs(
        State(state): State<AppState>,
        Query(query): Query<PageQuery>,
    ) -> Result<Json<Vec<Song>>> {
        let songs = state
            .storage
            .get_popular_songs(query.limit_or(DEFAULT_POPULAR_LIMIT))
            .await?;

        Ok(Json(songs))
    }

    /// Queries under two characters (ignoring surrounding whitespace) never
    /// reach the store. Longer ones are passed through as given.
    pub async fn search_songs(
        State(state): State<AppState>,
        Query(params): Query<SearchQuery>,
    ) -> Result<Json<Vec<Song>>> {
        let term = params.q.as_deref().unwrap_or_default();

        if term.trim().chars().count() < MIN_SEARCH_CHARS {
            return Ok(Json(Vec::new()));
        }

        let limit = coerce_limit(params.limit.as_deref(), DEFAULT_SEARCH_LIMIT);
        let songs = state.storage.search_songs(term, limit).await?;

        Ok(Json(songs))
    }

    /// Returns the song as read, then counts the view.
    pub async fn get_song(
        State(state): State<AppState>,
        Path(song_id): Path<String>,
    ) -> Result<Json<SongWithLyrics>> {
        let song = state
            .storage
            .get_song_with_lyrics(&song_id)
            .await?
            .ok_or(Error::SongNotFound {
                id: song_id.clone(),
            })?;

        state.storage.increment_view_count(&song_id).await?;

        Ok(Json(song))
    }

    pub async fn create_song(
        State(state): State<AppState>,
        ctx: Ctx,
        ValidatedJson(payload): ValidatedJson<NewSongPayload>,
    ) -> Result<(StatusCode, Json<Song>)> {
        let new_song = payload.into_new_song(Some(create_user_thing(&ctx.user_id)));
        let song = state.storage.create_song(new_song).await?;

        tracing::info!("Song {} created by {}", song.id, ctx.user_id);

        Ok((StatusCode::CREATED, Json(song)))
    }

    pub async fn update_song(
        State(state): State<AppState>,
        ctx: Ctx,
        Path(song_id): Path<String>,
        ValidatedJson(payload): ValidatedJson<UpdateSongPayload>,
    ) -> Result<Json<Song>> {
        let song = state
            .storage
            .update_song(&song_id, payload.into())
            .await?
            .ok_or(Error::SongNotFound { id: song_id })?;

        tracing::info!("Song {} updated by {}", song.id, ctx.user_id);

        Ok(Json(song))
    }
}
