use axum::{
    routing::{delete, get},
    Router,
};

use crate::{controllers::favorite_controller::FavoriteController, AppState};

pub struct FavoriteRoutes;

impl FavoriteRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new()
            .route(
                "/favorites",
                get(FavoriteController::get_favorites).post(FavoriteController::add_favorite),
            )
            .route(
                "/favorites/{song_id}",
                delete(FavoriteController::remove_favorite),
            )
            .route(
                "/favorites/{song_id}/check",
                get(FavoriteController::check_favorite),
            )
    }
}
