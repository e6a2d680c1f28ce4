//! Built-in reference rule table used when no TOML rules are configured.

use crate::domain::{RuleConfig, RuleTable};

fn rule(min_words: usize, required_words: &[&str], require_conditional: bool) -> RuleConfig {
  RuleConfig {
    min_words,
    required_words: required_words.iter().map(|w| w.to_string()).collect(),
    require_conditional,
  }
}

/// Three sentence tasks: a "because" sentence, an "although" sentence and a
/// second conditional.
pub fn seed_rules() -> RuleTable {
  RuleTable::from([
    ("s1".to_string(), rule(8, &["because"], false)),
    ("s2".to_string(), rule(8, &["although"], false)),
    ("s3".to_string(), rule(10, &[], true)),
  ])
}
