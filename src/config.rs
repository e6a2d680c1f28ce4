//! Loading grader configuration (rule table + feedback templates) from TOML.
//!
//! Expected schema:
//!
//! ```toml
//! [rules.s1]
//! min_words = 8
//! required_words = ["because"]
//! require_conditional = false
//!
//! [messages]
//! length_full = "✅ Good length ({count} words)."
//! ```
//!
//! A `rules` table replaces the built-in table entirely. Every `messages` key is optional.

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::RuleTable;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct GraderConfig {
  #[serde(default)]
  pub rules: Option<RuleTable>,
  #[serde(default)]
  pub messages: Messages,
}

/// Feedback templates. `{count}` is the word count, `{words}` the comma-joined
/// required alternatives.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Messages {
  pub missing_config: String,
  pub empty_submission: String,
  // Word count
  pub length_full: String,
  pub length_partial: String,
  pub length_none: String,
  // Required word
  pub required_found: String,
  pub required_missing: String,
  // Second conditional
  pub conditional_found: String,
  pub conditional_missing: String,
  // Terminal punctuation
  pub punctuation_ok: String,
  pub punctuation_missing: String,
}

impl Default for Messages {
  fn default() -> Self {
    Self {
      missing_config: "No configuration found for this sentence.".into(),
      empty_submission: "❗ Please write a sentence.".into(),
      length_full: "✅ Good length ({count} words).".into(),
      length_partial: "⚠️ A bit short ({count} words). Try to add more detail.".into(),
      length_none: "❌ Too short ({count} words). Try to write a longer sentence.".into(),
      required_found: "✅ You used the target word/structure.".into(),
      required_missing: "❌ You didn’t use the target word. Try to include: {words}".into(),
      conditional_found: "✅ It looks like a second conditional sentence.".into(),
      conditional_missing: "❌ Use 'if' + past and 'would' + verb for the second conditional.".into(),
      punctuation_ok: "✅ Good punctuation at the end.".into(),
      punctuation_missing: "⚠️ Add a full stop or question mark at the end.".into(),
    }
  }
}

pub fn parse_grader_config(s: &str) -> Result<GraderConfig, toml::de::Error> {
  toml::from_str::<GraderConfig>(s)
}

/// Attempt to load `GraderConfig` from RULES_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_grader_config_from_env() -> Option<GraderConfig> {
  let path = std::env::var("RULES_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_grader_config(&s) {
      Ok(cfg) => {
        info!(target: "sentence_check", %path, "Loaded grader config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "sentence_check", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "sentence_check", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}
