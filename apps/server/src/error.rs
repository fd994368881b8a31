use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use backfolio_core::errors::Error as CoreError;
use backfolio_market_data::MarketDataError;

pub type ApiResult<T> = Result<T, ApiError>;

/// The three client-visible failure classes of the API.
///
/// Requests that cannot be served with the available data (missing tickers,
/// too few common trading days) are unprocessable; malformed inputs are bad
/// requests; everything else is an opaque internal error whose details go
/// to the log, not the client.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unprocessable(String),
    Internal(anyhow::Error),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Engine(engine) => ApiError::Unprocessable(engine.to_string()),
            CoreError::Validation(validation) => ApiError::BadRequest(validation.to_string()),
            other => ApiError::Internal(other.into()),
        }
    }
}

impl From<MarketDataError> for ApiError {
    fn from(err: MarketDataError) -> Self {
        if err.is_not_found() {
            ApiError::Unprocessable(err.to_string())
        } else {
            ApiError::Internal(err.into())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Unprocessable(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            ApiError::Internal(err) => {
                tracing::error!("Internal error serving backtest request: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
