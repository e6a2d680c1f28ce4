//! Sentence grading core, shared by every transport.
//!
//! This includes:
//!   - `evaluate`: the ordered rule checks for one exercise (pure scoring decision)
//!   - `render`: turning a decision into feedback strings via `Messages`
//!   - `grade_batch`: grading every configured exercise and aggregating totals

use std::collections::BTreeMap;

use tracing::{debug, info, instrument};

use crate::config::Messages;
use crate::domain::{
  BatchResult, Check, CheckOutcome, Evaluation, GradeResult, Level, RuleConfig, RuleTable, Tier, MAX_SCORE,
};
use crate::util::{fill_template, normalize, words};

const TERMINAL_MARKS: [char; 3] = ['.', '?', '!'];

/// Run the fixed check sequence for one submission.
///
/// Order: word count, required word (if configured), conditional (if
/// configured), punctuation. Missing config or an empty normalized text
/// short-circuit before any check runs.
pub fn evaluate(config: Option<&RuleConfig>, raw: Option<&str>) -> Evaluation {
  let Some(cfg) = config else {
    return Evaluation::MissingConfig;
  };

  let cleaned = normalize(raw);
  if cleaned.is_empty() {
    return Evaluation::EmptySubmission;
  }

  let mut checks = Vec::with_capacity(4);
  checks.push(word_count_check(&cleaned, cfg.min_words));
  if !cfg.required_words.is_empty() {
    checks.push(required_word_check(&cleaned, &cfg.required_words));
  }
  if cfg.require_conditional {
    checks.push(conditional_check(&cleaned));
  }
  checks.push(punctuation_check(raw.unwrap_or_default()));

  // 2+2+1+1 is reachable when both optional checks are enabled.
  let accumulated: u32 = checks.iter().map(|c| c.delta).sum();
  let score = accumulated.min(MAX_SCORE);

  Evaluation::Graded { checks, score, level: Level::from_score(score) }
}

fn word_count_check(cleaned: &str, min_words: usize) -> CheckOutcome {
  let count = words(cleaned).count();
  let (tier, delta) = if count >= min_words {
    (Tier::Full, 2)
  } else if count >= min_words / 2 {
    (Tier::Partial, 1)
  } else {
    (Tier::None, 0)
  };
  CheckOutcome { check: Check::WordCount { count }, tier, delta }
}

fn required_word_check(cleaned: &str, alternatives: &[String]) -> CheckOutcome {
  let found = alternatives.iter().any(|w| cleaned.contains(w.as_str()));
  let (tier, delta) = if found { (Tier::Full, 2) } else { (Tier::None, 0) };
  CheckOutcome { check: Check::RequiredWord { alternatives: alternatives.to_vec() }, tier, delta }
}

/// Substring presence of both markers, anywhere and in any order.
fn conditional_check(cleaned: &str) -> CheckOutcome {
  let found = cleaned.contains("if") && cleaned.contains("would");
  let (tier, delta) = if found { (Tier::Full, 1) } else { (Tier::None, 0) };
  CheckOutcome { check: Check::Conditional, tier, delta }
}

/// Looks at the raw text: normalization strips the marks this check needs.
fn punctuation_check(raw: &str) -> CheckOutcome {
  let ends_well = raw.trim().ends_with(TERMINAL_MARKS);
  let (tier, delta) = if ends_well { (Tier::Full, 1) } else { (Tier::None, 0) };
  CheckOutcome { check: Check::Punctuation, tier, delta }
}

/// Attach feedback text to a scoring decision.
pub fn render(evaluation: &Evaluation, messages: &Messages) -> GradeResult {
  let (lines, level) = match evaluation {
    Evaluation::MissingConfig => (vec![messages.missing_config.clone()], None),
    Evaluation::EmptySubmission => (vec![messages.empty_submission.clone()], None),
    Evaluation::Graded { checks, level, .. } => {
      (checks.iter().map(|c| check_message(c, messages)).collect(), Some(*level))
    }
  };
  GradeResult { score: evaluation.score(), messages: lines, level }
}

fn check_message(outcome: &CheckOutcome, m: &Messages) -> String {
  match (&outcome.check, outcome.tier) {
    (Check::WordCount { count }, tier) => {
      let tpl = match tier {
        Tier::Full => &m.length_full,
        Tier::Partial => &m.length_partial,
        Tier::None => &m.length_none,
      };
      fill_template(tpl, &[("count", count.to_string().as_str())])
    }
    (Check::RequiredWord { .. }, Tier::Full) => m.required_found.clone(),
    (Check::RequiredWord { alternatives }, _) => {
      fill_template(&m.required_missing, &[("words", alternatives.join(", ").as_str())])
    }
    (Check::Conditional, Tier::Full) => m.conditional_found.clone(),
    (Check::Conditional, _) => m.conditional_missing.clone(),
    (Check::Punctuation, Tier::Full) => m.punctuation_ok.clone(),
    (Check::Punctuation, _) => m.punctuation_missing.clone(),
  }
}

/// Evaluate and render one exercise.
pub fn grade_one(rules: &RuleTable, messages: &Messages, id: &str, raw: Option<&str>) -> GradeResult {
  render(&evaluate(rules.get(id), raw), messages)
}

/// Grade every configured exercise. Identifiers only present in `submissions`
/// are ignored; configured ones without a submission grade as empty text.
#[instrument(level = "info", skip_all, fields(configured = rules.len(), submitted = submissions.len()))]
pub fn grade_batch(rules: &RuleTable, messages: &Messages, submissions: &BTreeMap<String, String>) -> BatchResult {
  let mut scores = BTreeMap::new();
  let mut total = 0;
  let mut max_total = 0;

  for id in rules.keys() {
    let raw = submissions.get(id).map(String::as_str);
    let result = grade_one(rules, messages, id, raw);
    debug!(
      target: "grading",
      %id,
      text_len = raw.map_or(0, str::len),
      score = result.score,
      level = ?result.level,
      "Exercise graded"
    );
    total += result.score;
    max_total += MAX_SCORE;
    scores.insert(id.clone(), result);
  }

  let percent = percent_of(total, max_total);
  info!(target: "grading", total, max_total, percent, "Batch graded");
  BatchResult { scores, total, max_total, percent }
}

/// `round(100 * total / max_total)` with halves rounded up; 0 when nothing is configured.
pub fn percent_of(total: u32, max_total: u32) -> u32 {
  if max_total == 0 {
    return 0;
  }
  (200 * total + max_total) / (2 * max_total)
}
