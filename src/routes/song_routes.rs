use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::{
    controllers::{lyrics_controller::LyricsController, song_controller::SongController},
    AppState,
};

pub struct SongRoutes;

impl SongRoutes {
    pub fn public() -> Router<AppState> {
        Router::new()
            .route("/songs", get(SongController::get_songs))
            .route("/songs/popular", get(SongController::get_popular_songs))
            .route("/songs/search", get(SongController::search_songs))
            .route("/songs/{song_id}", get(SongController::get_song))
            .route(
                "/songs/{song_id}/lyrics",
                get(LyricsController::get_song_lyrics),
            )
    }

    pub fn protected() -> Router<AppState> {
        Router::new()
            .route("/songs", post(SongController::create_song))
            .route("/songs/{song_id}", patch(SongController::update_song))
            .route(
                "/songs/{song_id}/lyrics",
                post(LyricsController::create_song_lyrics),
            )
            .route(
                "/lyrics/{lyrics_id}",
                patch(LyricsController::update_song_lyrics),
            )
    }
}
