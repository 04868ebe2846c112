//! Request extractors.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use super::error::{AppError, FieldError};

/// JSON body extractor that reports which field failed to deserialize.
///
/// Content-type, syntax and size checks are delegated to [`Json`]; only the
/// typed deserialization step runs through `serde_path_to_error`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<serde_json::Value>::from_request(req, state).await?;
        let data = serde_path_to_error::deserialize(value).map_err(|err| {
            let message = err.inner().to_string();
            let field = field_name(&err.path().to_string(), &message);
            AppError::Validation {
                message: format!("{}: {}", field, message),
                errors: vec![FieldError { field, message }],
            }
        })?;
        Ok(Self(data))
    }
}

/// Resolve the offending field from the error path and message.
///
/// A missing field is reported at the enclosing object, so its name is
/// taken from serde's "missing field `x`" message instead.
pub fn field_name(path: &str, message: &str) -> String {
    if path != "." {
        return path.to_string();
    }
    message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
        .map(str::to_string)
        .unwrap_or_else(|| "body".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_uses_path_when_present() {
        assert_eq!(field_name("focus_areas[1]", "invalid type"), "focus_areas[1]");
    }

    #[test]
    fn test_field_name_from_missing_field_message() {
        assert_eq!(field_name(".", "missing field `name`"), "name");
    }

    #[test]
    fn test_field_name_falls_back_to_body() {
        assert_eq!(field_name(".", "invalid type: string, expected a map"), "body");
    }
}
