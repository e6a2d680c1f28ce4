//! Domain models: per-exercise rule configuration, structured check outcomes,
//! and the graded results returned to clients.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Highest score a single exercise can earn.
pub const MAX_SCORE: u32 = 5;

/// Grading parameters for one exercise. Loaded once at startup, never mutated.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RuleConfig {
  /// Word count needed for full length credit.
  #[serde(default)] pub min_words: usize,
  /// Keyword/phrase alternatives; any one of them satisfies the check.
  /// Empty disables the check.
  #[serde(default)] pub required_words: Vec<String>,
  /// Enables the "if ... would" structure check.
  #[serde(default)] pub require_conditional: bool,
}

/// Process-wide rule table keyed by exercise identifier.
pub type RuleTable = BTreeMap<String, RuleConfig>;

/// Credit tier of a single check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
  Full,
  Partial,
  None,
}

/// Which check produced an outcome, with the data its feedback needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Check {
  WordCount { count: usize },
  RequiredWord { alternatives: Vec<String> },
  Conditional,
  Punctuation,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOutcome {
  pub check: Check,
  pub tier: Tier,
  pub delta: u32,
}

/// Coarse bucket derived from the final score.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Level {
  Error,
  Warn,
  Ok,
}

impl Level {
  pub fn from_score(score: u32) -> Self {
    if score >= 4 {
      Level::Ok
    } else if score >= 2 {
      Level::Warn
    } else {
      Level::Error
    }
  }
}

/// Scoring decision for one exercise, before any feedback text is attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Evaluation {
  /// No rule configuration exists for the identifier.
  MissingConfig,
  /// Nothing left after normalization.
  EmptySubmission,
  Graded {
    checks: Vec<CheckOutcome>,
    score: u32,
    level: Level,
  },
}

impl Evaluation {
  pub fn score(&self) -> u32 {
    match self {
      Evaluation::Graded { score, .. } => *score,
      _ => 0,
    }
  }
}

/// Rendered per-exercise result as sent to clients.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GradeResult {
  pub score: u32,
  pub messages: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub level: Option<Level>,
}

/// Full response payload for one batch of submissions.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
  pub scores: BTreeMap<String, GradeResult>,
  pub total: u32,
  pub max_total: u32,
  pub percent: u32,
}
