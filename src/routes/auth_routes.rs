use axum::{routing::get, Router};

use crate::{controllers::auth_controller::AuthController, AppState};

pub struct AuthRoutes;

impl AuthRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new().route("/auth/user", get(AuthController::get_current_user))
    }
}
