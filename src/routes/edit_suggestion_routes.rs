use axum::{
    routing::{get, patch},
    Router,
};

use crate::{controllers::edit_suggestion_controller::EditSuggestionController, AppState};

pub struct EditSuggestionRoutes;

impl EditSuggestionRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new()
            .route(
                "/edit-suggestions",
                get(EditSuggestionController::get_edit_suggestions)
                    .post(EditSuggestionController::create_edit_suggestion),
            )
            .route(
                "/edit-suggestions/{suggestion_id}",
                patch(EditSuggestionController::update_edit_suggestion_status),
            )
    }
}
