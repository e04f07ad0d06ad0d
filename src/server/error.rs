//! API error to status mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::error::Error as _;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request carries no visitor identifier")]
    MissingVisitor,

    #[error("Error encountered accessing the visitor store")]
    Store(#[from] StoreError),

    #[error("Stored scroll record is not valid JSON")]
    CorruptRecord(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingVisitor => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::CorruptRecord(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    /// Status only, never a body
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}: {:?}", self, self.source());
        }
        status.into_response()
    }
}
