//! Application state: the rule table and feedback templates.
//!
//! Both are built once at startup (TOML config if provided, otherwise the
//! built-in seeds) and only ever read afterwards, so handlers share them
//! through an `Arc` without locking.

use tracing::{info, instrument, warn};

use crate::config::{load_grader_config_from_env, GraderConfig, Messages};
use crate::domain::RuleTable;
use crate::seeds::seed_rules;

#[derive(Clone, Debug)]
pub struct AppState {
    pub rules: RuleTable,
    pub messages: Messages,
}

impl AppState {
    /// Build state from env: load TOML config and fall back to seeds.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        Self::from_config(load_grader_config_from_env())
    }

    pub fn from_config(cfg: Option<GraderConfig>) -> Self {
        let (rules, messages) = match cfg {
            Some(GraderConfig { rules: Some(rules), messages }) => (rules, messages),
            Some(GraderConfig { rules: None, messages }) => (seed_rules(), messages),
            None => (seed_rules(), Messages::default()),
        };

        if rules.is_empty() {
            warn!(target: "sentence_check", "Rule table is empty; every batch will score 0 of 0");
        }
        for (id, rule) in &rules {
            info!(
                target: "sentence_check",
                %id,
                min_words = rule.min_words,
                required_words = ?rule.required_words,
                require_conditional = rule.require_conditional,
                "Configured exercise"
            );
        }

        Self { rules, messages }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(None)
    }
}
