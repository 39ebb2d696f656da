use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub type Result<T> = core::result::Result<T, Error>;

/// One field-level validation failure, as reported to the client.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize, strum_macros::AsRefStr)]
#[serde(tag = "type", content = "data")]
pub enum Error {
    // -- Config errors.
    MissingEnvVar { name: String },
    InvalidConfig { reason: String },

    // -- Auth errors.
    AuthFailNoAuthToken,
    AuthFailTokenWrongFormat,
    AuthFailCtxNotInRequestExt,
    InvalidToken(String),

    // -- Request errors.
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },
    InvalidInput { reason: String },
    InvalidSuggestionStatus { status: String },
    SuggestionAlreadyReviewed { id: String },

    // -- Model errors.
    UserNotFound { id: String },
    SongNotFound { id: String },
    LyricsNotFound { id: String },
    EditSuggestionNotFound { id: String },
    ReferenceNotFound { table: String, id: String },

    DbError(String),
    Io(String),
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, client_error) = self.client_status_and_error();

        if status_code.is_server_error() {
            tracing::error!("request failed: {}", self);
        }

        let mut response_body = serde_json::json!({
            "message": self.client_message(),
            "error": client_error.as_ref(),
        });

        if let Self::Validation { errors, .. } = &self {
            response_body["errors"] = serde_json::json!(errors);
        }

        (status_code, Json(response_body)).into_response()
    }
}

impl Error {
    pub fn client_status_and_error(&self) -> (StatusCode, ClientError) {
        match self {
            Self::AuthFailNoAuthToken
            | Self::AuthFailTokenWrongFormat
            | Self::AuthFailCtxNotInRequestExt
            | Self::InvalidToken(_) => (StatusCode::UNAUTHORIZED, ClientError::NO_AUTH),

            Self::Validation { .. }
            | Self::InvalidInput { .. }
            | Self::InvalidSuggestionStatus { .. }
            | Self::SuggestionAlreadyReviewed { .. } => {
                (StatusCode::BAD_REQUEST, ClientError::INVALID_PARAMS)
            }

            Self::UserNotFound { .. }
            | Self::SongNotFound { .. }
            | Self::LyricsNotFound { .. }
            | Self::EditSuggestionNotFound { .. } => {
                (StatusCode::NOT_FOUND, ClientError::RESOURCE_NOT_FOUND)
            }

            Self::MissingEnvVar { .. }
            | Self::InvalidConfig { .. }
            | Self::ReferenceNotFound { .. }
            | Self::DbError(_)
            | Self::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ClientError::SERVICE_ERROR,
            ),
        }
    }

    /// Message safe to show to the client. Server-side details never leak.
    pub fn client_message(&self) -> String {
        match self {
            Self::AuthFailNoAuthToken
            | Self::AuthFailTokenWrongFormat
            | Self::AuthFailCtxNotInRequestExt
            | Self::InvalidToken(_) => "Unauthorized".to_string(),

            Self::Validation { message, .. } => message.clone(),
            Self::InvalidInput { reason } => reason.clone(),
            Self::InvalidSuggestionStatus { .. } => "Invalid status".to_string(),
            Self::SuggestionAlreadyReviewed { .. } => {
                "Edit suggestion has already been reviewed".to_string()
            }

            Self::UserNotFound { .. } => "User not found".to_string(),
            Self::SongNotFound { .. } => "Song not found".to_string(),
            Self::LyricsNotFound { .. } => "Lyrics not found".to_string(),
            Self::EditSuggestionNotFound { .. } => "Edit suggestion not found".to_string(),

            _ => "Internal server error".to_string(),
        }
    }
}

#[derive(Debug, strum_macros::AsRefStr)]
#[allow(non_camel_case_types)]
pub enum ClientError {
    NO_AUTH,
    INVALID_PARAMS,
    SERVICE_ERROR,
    RESOURCE_NOT_FOUND,
}

impl From<surrealdb::Error> for Error {
    fn from(err: surrealdb::Error) -> Self {
        Error::DbError(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for Error {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Error::InvalidToken(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (Error::AuthFailNoAuthToken, StatusCode::UNAUTHORIZED),
            (
                Error::InvalidSuggestionStatus {
                    status: "pending".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (Error::SongNotFound { id: "x".into() }, StatusCode::NOT_FOUND),
            (
                Error::ReferenceNotFound {
                    table: "song".into(),
                    id: "x".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (Error::DbError("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.client_status_and_error().0, expected, "{error}");
        }
    }

    #[test]
    fn test_server_errors_hide_details() {
        let error = Error::DbError("connection refused on 10.0.0.3".into());
        assert_eq!(error.client_message(), "Internal server error");
    }

    #[tokio::test]
    async fn test_validation_body_carries_field_errors() {
        let error = Error::Validation {
            message: "Invalid song data".into(),
            errors: vec![FieldError {
                field: "title".into(),
                code: "length".into(),
                message: None,
            }],
        };

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Invalid song data");
        assert_eq!(body["error"], "INVALID_PARAMS");
        assert_eq!(body["errors"][0]["field"], "title");
    }
}
