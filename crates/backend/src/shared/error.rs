use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::actions::ActionError;
use contracts::system::auth::AuthError;
use serde_json::json;
use thiserror::Error;

/// Error type of every JSON handler. Renders as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("record was modified (expected version {expected}, current {actual})")]
    VersionConflict { expected: i32, actual: i32 },
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::VersionConflict { .. } => StatusCode::CONFLICT,
            ApiError::Action(ActionError::NotAvailable(_) | ActionError::Transition(_)) => {
                StatusCode::CONFLICT
            }
            ApiError::Action(ActionError::MissingParam(_) | ActionError::InvalidParam(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            tracing::error!("{:#}", e);
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::state_machine::TransitionError;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::NotFound("job".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::VersionConflict {
                expected: 1,
                actual: 2
            }
            .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(ActionError::NotAvailable("approve")).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(ActionError::Transition(TransitionError {
                from: "closed",
                to: "open"
            }))
            .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(ActionError::MissingParam("target")).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(AuthError::InvalidCredentials).status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_internal_error_hides_details() {
        let err = ApiError::from(anyhow::anyhow!("disk on fire"));
        assert_eq!(err.to_string(), "internal server error");
    }
}
