use axum::body::Body;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::{header, request::Parts};
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::models::Claims;
use crate::auth::token_service::TokenService;
use crate::error::{Error, Result};
use crate::models::user::UpsertUser;
use crate::AppState;

/// Caller identity, placed in request extensions by `mw_auth`.
#[derive(Debug, Clone)]
pub struct Ctx {
    pub user_id: String,
}

impl Ctx {
    pub fn new(user_id: String) -> Self {
        Self { user_id }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Ctx {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<Ctx>()
            .cloned()
            .ok_or(Error::AuthFailCtxNotInRequestExt)
    }
}

pub async fn mw_auth(
    State(app_state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(Error::AuthFailNoAuthToken)?;

    let token = header_value
        .to_str()
        .ok()
        .and_then(|str| str.strip_prefix("Bearer "))
        .ok_or(Error::AuthFailTokenWrongFormat)?;

    let claims: Claims = TokenService::validate_token(token, &app_state.auth_config)?;

    sync_user(&app_state, &claims).await?;

    let ctx = Ctx::new(claims.sub);
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}

/// Keeps the stored profile in line with what the identity provider asserts.
/// Writes only when the row is missing or stale.
async fn sync_user(app_state: &AppState, claims: &Claims) -> Result<()> {
    let profile = UpsertUser::from(claims);

    let stored = app_state.storage.get_user(&profile.id).await?;
    if stored.as_ref().is_some_and(|user| profile.matches(user)) {
        return Ok(());
    }

    tracing::debug!("Syncing profile for user {}", profile.id);
    app_state.storage.upsert_user(profile).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ctx_read_from_extensions() {
        let mut req = axum::http::Request::builder().body(Body::empty()).unwrap();
        req.extensions_mut().insert(Ctx::new("user-1".to_string()));
        let (mut parts, _) = req.into_parts();

        let ctx = Ctx::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(ctx.user_id, "user-1");
    }

    #[tokio::test]
    async fn test_ctx_missing_is_rejected() {
        let req = axum::http::Request::builder().body(Body::empty()).unwrap();
        let (mut parts, _) = req.into_parts();

        let err = Ctx::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert!(matches!(err, Error::AuthFailCtxNotInRequestExt));
    }
}
