use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Page ID {0} not found")]
    NotFound(i32),
    #[error("No page or route matches {0:?}")]
    NoRoute(String),
    #[error("A page with alias {0:?} already exists")]
    AliasTaken(String),
    #[error("Page title must contain at least one letter or digit")]
    InvalidTitle,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) | Self::NoRoute(_) => {
                error_response(StatusCode::NOT_FOUND, "Page not found")
            }
            Self::AliasTaken(_) => error_response(StatusCode::CONFLICT, self.to_string()),
            Self::InvalidTitle => error_response(StatusCode::BAD_REQUEST, self.to_string()),
        }
    }
}
