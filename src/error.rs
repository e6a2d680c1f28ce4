//! Transport-level errors. Grading itself cannot fail; these are raised before
//! evaluation starts and rendered as `{ "error": "..." }` with a client-error status.

use axum::{
  http::{header, HeaderValue, StatusCode},
  response::{IntoResponse, Response},
  Json,
};
use thiserror::Error;

use crate::protocol::ErrorOut;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
  #[error("Method not allowed")]
  MethodNotAllowed,

  /// Missing body, unparsable body, or a `sentences` field that is not an object.
  #[error("No sentences provided")]
  NoSentences,
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      ApiError::NoSentences => StatusCode::BAD_REQUEST,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let mut res = (status, Json(ErrorOut { error: self.to_string() })).into_response();
    if self == ApiError::MethodNotAllowed {
      res.headers_mut().insert(header::ALLOW, HeaderValue::from_static("POST"));
    }
    res
  }
}
