use axum::{
    http::StatusCode,
    response::{IntoResponse, Response}
};
use anyhow;

use finance_tracker::core::InvalidTransaction;

pub(crate) enum ServerError{
    NotFound(String),
    Rejected(InvalidTransaction),
    InternalError(anyhow::Error)
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) =>
                (StatusCode::NOT_FOUND, format!("Resource not found: {}", msg)).into_response(),
            Self::Rejected(err) =>
                (StatusCode::UNPROCESSABLE_ENTITY, format!("Transaction rejected: {}", err)).into_response(),
            Self::InternalError(err) => {
                log::error!("request failed: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Internal error: {}", err)).into_response()
            }
        }
    }
}

impl<E> From<E> for ServerError
where
    E: Into<anyhow::Error>
{
    fn from(err: E) -> Self {
        Self::InternalError(err.into())
    }
}
