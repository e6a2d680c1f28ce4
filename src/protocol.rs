//! Public HTTP protocol structs (serde ready) and request-body extraction.
//! The response payload itself is `domain::BatchResult`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Body of `POST /api/check-sentences`.
#[derive(Debug, Default)]
pub struct CheckSentencesIn {
    pub sentences: Option<Value>,
}

impl CheckSentencesIn {
    /// Lenient body parsing: an empty or malformed body reads as `{}`.
    pub fn from_body(bytes: &[u8]) -> Self {
        let sentences = match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(mut body)) => body.remove("sentences"),
            _ => None,
        };
        Self { sentences }
    }

    /// Submitted texts by exercise id. Non-string values are dropped so they
    /// grade as missing (empty) submissions.
    pub fn into_submissions(self) -> Result<BTreeMap<String, String>, ApiError> {
        match self.sentences {
            Some(Value::Object(map)) => Ok(map
                .into_iter()
                .filter_map(|(id, v)| match v {
                    Value::String(s) => Some((id, s)),
                    _ => None,
                })
                .collect()),
            _ => Err(ApiError::NoSentences),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorOut {
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
