use axum::{extract::State, Json};

use crate::{
    error::{Error, Result},
    middlewares::mw_auth::Ctx,
    models::user::User,
    AppState,
};

pub struct AuthController;

impl AuthController {
    pub async fn get_current_user(
        State(state): State<AppState>,
        ctx: Ctx,
    ) -> Result<Json<User>> {
        let user = state
            .storage
            .get_user(&ctx.user_id)
            .await?
            .ok_or(Error::UserNotFound { id: ctx.user_id })?;

        Ok(Json(user))
    }
}
