use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use lazy_regex::regex_is_match;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{Error, FieldError};

pub const MAX_TAGS: usize = 20;
pub const MAX_TAG_LEN: usize = 50;

/// Typed request body with the message reported when it fails validation.
pub trait RequestModel: DeserializeOwned + Validate {
    const INVALID_MESSAGE: &'static str;

    /// Runs the explicit validation step. Either the model is fit to reach
    /// storage, or the caller gets every field error at once.
    fn check(&self) -> Result<(), Error> {
        self.validate()
            .map_err(|errors| validation_error(Self::INVALID_MESSAGE, &errors))
    }
}

/// JSON body extractor: deserialize, then validate, before the handler runs.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: RequestModel,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| body_error(T::INVALID_MESSAGE, rejection))?;

        value.check()?;

        Ok(ValidatedJson(value))
    }
}

fn body_error(message: &str, rejection: JsonRejection) -> Error {
    Error::Validation {
        message: message.to_string(),
        errors: vec![FieldError {
            field: "body".to_string(),
            code: "invalid_json".to_string(),
            message: Some(rejection.body_text()),
        }],
    }
}

pub fn validation_error(message: &str, errors: &ValidationErrors) -> Error {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: to_camel_case(field),
                code: error.code.to_string(),
                message: error.message.as_ref().map(|m| m.to_string()),
            })
        })
        .collect();
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));

    Error::Validation {
        message: message.to_string(),
        errors: field_errors,
    }
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Language names such as "English", "Español" or "Chinese (Simplified)".
pub fn validate_language(language: &str) -> Result<(), ValidationError> {
    if regex_is_match!(r"^\p{L}[\p{L}\p{M} ()'\-]{0,49}$", language) {
        Ok(())
    } else {
        let mut error = ValidationError::new("language");
        error.message = Some("must be a language name of at most 50 letters".into());
        Err(error)
    }
}

pub fn validate_tags(tags: &[String]) -> Result<(), ValidationError> {
    if tags.len() > MAX_TAGS {
        let mut error = ValidationError::new("tags");
        error.message = Some(format!("at most {MAX_TAGS} tags are allowed").into());
        return Err(error);
    }

    for tag in tags {
        if tag.trim().is_empty() || tag.chars().count() > MAX_TAG_LEN {
            let mut error = ValidationError::new("tags");
            error.message = Some(format!("tags must be 1 to {MAX_TAG_LEN} characters").into());
            return Err(error);
        }
    }

    Ok(())
}
