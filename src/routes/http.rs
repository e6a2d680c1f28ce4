//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs basic request/result info (never the submitted text).

use std::sync::Arc;
use axum::{body::Bytes, extract::State, http::Method, response::IntoResponse, Json};
use tracing::{info, instrument, warn};

use crate::domain::BatchResult;
use crate::error::ApiError;
use crate::logic::grade_batch;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state, body), fields(body_len = body.len()))]
pub async fn http_post_check_sentences(
  State(state): State<Arc<AppState>>,
  body: Bytes,
) -> Result<Json<BatchResult>, ApiError> {
  let submissions = CheckSentencesIn::from_body(&body).into_submissions().map_err(|e| {
    warn!(target: "grading", error = %e, "Rejected check-sentences request");
    e
  })?;
  let result = grade_batch(&state.rules, &state.messages, &submissions);
  info!(target: "grading", total = result.total, max_total = result.max_total, percent = result.percent, "HTTP check-sentences graded");
  Ok(Json(result))
}

#[instrument(level = "info", skip_all, fields(%method))]
pub async fn http_method_not_allowed(method: Method) -> ApiError {
  warn!(target: "grading", %method, "Method not allowed on check-sentences");
  ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
  use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
  };
  use serde_json::{json, Value};
  use tower::ServiceExt;

  use super::*;
  use crate::config::parse_grader_config;
  use crate::routes::build_router;

  fn app() -> Router {
    build_router(Arc::new(AppState::default()))
  }

  async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  fn post_json(body: &str) -> Request<Body> {
    Request::post("/api/check-sentences")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap()
  }

  #[tokio::test]
  async fn health_is_ok() {
    let (status, body) = send(app(), Request::get("/api/v1/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
  }

  #[tokio::test]
  async fn other_methods_are_rejected() {
    for method in ["GET", "PUT", "DELETE", "PATCH"] {
      let req = Request::builder().method(method).uri("/api/check-sentences").body(Body::empty()).unwrap();
      let res = app().oneshot(req).await.unwrap();
      assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
      assert_eq!(res.headers()[header::ALLOW], "POST");
      let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
      let body: Value = serde_json::from_slice(&bytes).unwrap();
      assert_eq!(body, json!({ "error": "Method not allowed" }));
    }
  }

  #[tokio::test]
  async fn missing_sentences_is_bad_request() {
    for body in ["", "{}", "garbage", r#"{"sentences": null}"#, r#"{"sentences": "s1"}"#] {
      let (status, json_body) = send(app(), post_json(body)).await;
      assert_eq!(status, StatusCode::BAD_REQUEST, "{body:?}");
      assert_eq!(json_body, json!({ "error": "No sentences provided" }));
    }
  }

  #[tokio::test]
  async fn grades_configured_exercises() {
    let body = json!({
      "sentences": {
        "s1": "I stayed home because it was raining heavily outside today.",
        "extra": "Ignored entirely."
      }
    })
    .to_string();
    let (status, v) = send(app(), post_json(&body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["total"], 5);
    assert_eq!(v["maxTotal"], 15);
    assert_eq!(v["percent"], 33);
    assert_eq!(v["scores"]["s1"]["level"], "ok");
    assert_eq!(v["scores"]["s1"]["messages"].as_array().unwrap().len(), 3);
    assert_eq!(v["scores"]["s2"], json!({ "score": 0, "messages": ["❗ Please write a sentence."] }));
    assert_eq!(v["scores"]["s3"]["score"], 0);
    assert!(v["scores"].get("extra").is_none());
  }

  #[tokio::test]
  async fn full_batch_scores() {
    let body = json!({
      "sentences": {
        "s1": "I stayed home because it was raining heavily outside today.",
        "s2": "Although it was cold, we walked to the park together.",
        "s3": "If I had more money, I would buy a small house near the sea."
      }
    })
    .to_string();
    let (_, v) = send(app(), post_json(&body)).await;
    // s3 has no required word, so it tops out at 4.
    assert_eq!(v["total"], 14);
    assert_eq!(v["scores"]["s3"]["score"], 4);
    assert_eq!(v["percent"], 93);
    assert_eq!(v["scores"]["s3"]["messages"][1], "✅ It looks like a second conditional sentence.");
  }

  #[tokio::test]
  async fn empty_rule_table_scores_zero_percent() {
    let cfg = parse_grader_config("[rules]\n").unwrap();
    let app = build_router(Arc::new(AppState::from_config(Some(cfg))));
    let (status, v) = send(app, post_json(r#"{"sentences": {"s1": "Hello there."}}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v, json!({ "scores": {}, "total": 0, "maxTotal": 0, "percent": 0 }));
  }
}
