//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use common::AppError;

/// JSON extractor that automatically validates the payload.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        value.validate().map_err(|e| {
            let message =
                first_message(&e).unwrap_or_else(|| "Validation failed".to_string());
            AppError::validation(message)
        })?;

        Ok(ValidatedJson(value))
    }
}

/// First validation message, descending into nested payloads.
fn first_message(errors: &ValidationErrors) -> Option<String> {
    errors.errors().values().find_map(|kind| match kind {
        ValidationErrorsKind::Field(field) => field
            .iter()
            .find_map(|error| error.message.as_ref().map(|msg| msg.to_string())),
        ValidationErrorsKind::Struct(inner) => first_message(inner),
        ValidationErrorsKind::List(items) => items.values().find_map(|inner| first_message(inner)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Inner {
        #[validate(length(min = 1, message = "faculty can not be empty"))]
        faculty: String,
    }

    #[derive(Validate)]
    struct Outer {
        #[validate(nested)]
        inner: Inner,
    }

    #[test]
    fn nested_message_is_surfaced() {
        let outer = Outer {
            inner: Inner {
                faculty: String::new(),
            },
        };

        let errors = outer.validate().unwrap_err();

        assert_eq!(first_message(&errors).as_deref(), Some("faculty can not be empty"));
    }
}
