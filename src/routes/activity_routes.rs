use axum::{routing::get, Router};

use crate::{controllers::activity_controller::ActivityController, AppState};

pub struct ActivityRoutes;

impl ActivityRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new().route("/activity", get(ActivityController::get_recent_activity))
    }
}
