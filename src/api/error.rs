use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::model::AddressError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No wallet is logged in")]
    WalletNotLoggedIn,

    #[error("Invalid {field} address: {source}")]
    InvalidAddress {
        field: &'static str,
        source: AddressError,
    },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Missing keyword")]
    MissingKeyword,

    #[error("Error: Please supply a valid list of nodes")]
    MissingNodes,

    #[error("Invalid block: {0}")]
    InvalidBlock(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::WalletNotLoggedIn => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidAddress { .. }
            | ApiError::InvalidAmount(_)
            | ApiError::MissingKeyword
            | ApiError::MissingNodes
            | ApiError::InvalidBlock(_)
            | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        })
    }
}
