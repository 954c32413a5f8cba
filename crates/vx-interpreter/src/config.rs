//! Interpreter configuration, loadable from TOML.
//!
//! Every section is optional. A missing section keeps the built-in table; a
//! present one replaces it wholesale (tables are never merged, since their
//! order is part of the matching contract).

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use vx_protocol::{CorrectionRule, IntentDefinition, MetaCommandDefinition, Thresholds};

use crate::defaults;
use crate::error::{ConfigError, ConfigResult};

/// Everything the engine needs, fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    pub thresholds: Thresholds,
    pub corrections: Vec<CorrectionRule>,
    pub meta_commands: Vec<MetaCommandDefinition>,
    pub intents: Vec<IntentDefinition>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            corrections: defaults::corrections(),
            meta_commands: defaults::meta_commands(),
            intents: defaults::intents(),
        }
    }
}

impl InterpreterConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(contents)?;
        Ok(config)
    }

    /// Check every table for shapes the engine cannot use.
    pub fn validate(&self) -> ConfigResult<()> {
        check_unit("thresholds.word_similarity", self.thresholds.word_similarity)?;
        check_unit("thresholds.meta_command", self.thresholds.meta_command)?;
        check_unit("thresholds.task_floor", self.thresholds.task_floor)?;

        self.validate_corrections()?;
        self.validate_meta_commands()?;
        self.validate_intents()
    }

    fn validate_corrections(&self) -> ConfigResult<()> {
        for rule in &self.corrections {
            if rule.pattern.trim().is_empty() {
                return Err(ConfigError::EmptyEntry {
                    owner: format!("correction -> `{}`", rule.replacement),
                    field: "pattern",
                });
            }
            if rule.pattern.trim() != rule.pattern {
                return Err(ConfigError::Padded {
                    owner: "corrections".into(),
                    field: "pattern",
                    value: rule.pattern.clone(),
                });
            }
            if rule.replacement.trim().is_empty() {
                return Err(ConfigError::EmptyEntry {
                    owner: format!("correction `{}`", rule.pattern),
                    field: "replacement",
                });
            }
        }

        // Replacements are never rewritten within a pass, so a second pass is
        // a no-op only if no replacement can help form any pattern.
        for rule in &self.corrections {
            let replacement = rule.replacement.to_lowercase();
            for other in &self.corrections {
                let pattern = other.pattern.to_lowercase();
                if can_form(&replacement, &pattern) {
                    return Err(ConfigError::NonIdempotent {
                        pattern: rule.pattern.clone(),
                        replacement: rule.replacement.clone(),
                        other: other.pattern.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    fn validate_meta_commands(&self) -> ConfigResult<()> {
        let mut seen = HashSet::new();
        for cmd in &self.meta_commands {
            if cmd.action.trim().is_empty() {
                return Err(ConfigError::EmptyEntry {
                    owner: "meta_commands".into(),
                    field: "action",
                });
            }
            if !seen.insert(cmd.action.as_str()) {
                return Err(ConfigError::Duplicate {
                    kind: "meta command",
                    name: cmd.action.clone(),
                });
            }
            if cmd.triggers.is_empty() {
                return Err(ConfigError::Missing {
                    kind: "meta command",
                    name: cmd.action.clone(),
                    field: "triggers",
                });
            }
            if cmd.triggers.iter().any(|t| t.trim().is_empty()) {
                return Err(ConfigError::EmptyEntry {
                    owner: format!("meta command `{}`", cmd.action),
                    field: "trigger",
                });
            }
        }
        Ok(())
    }

    fn validate_intents(&self) -> ConfigResult<()> {
        let mut seen = HashSet::new();
        for intent in &self.intents {
            if intent.name.trim().is_empty() {
                return Err(ConfigError::EmptyEntry {
                    owner: "intents".into(),
                    field: "name",
                });
            }
            if !seen.insert(intent.name.as_str()) {
                return Err(ConfigError::Duplicate {
                    kind: "intent",
                    name: intent.name.clone(),
                });
            }
            if intent.keywords.is_empty() {
                return Err(ConfigError::Missing {
                    kind: "intent",
                    name: intent.name.clone(),
                    field: "keywords",
                });
            }
            if intent.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::EmptyEntry {
                    owner: format!("intent `{}`", intent.name),
                    field: "keyword",
                });
            }
            if intent.objects.iter().any(|o| o.trim().is_empty()) {
                return Err(ConfigError::EmptyEntry {
                    owner: format!("intent `{}`", intent.name),
                    field: "object",
                });
            }
            check_unit(&format!("intents.{}.floor", intent.name), intent.floor)?;
        }
        Ok(())
    }
}

/// Whether `replacement`, with words around it, can make up `pattern`.
///
/// True if either contains the other, or if whole words at one end of the
/// replacement are the words at the opposite end of the pattern.
fn can_form(replacement: &str, pattern: &str) -> bool {
    if replacement.contains(pattern) || pattern.contains(replacement) {
        return true;
    }
    let r: Vec<&str> = replacement.split_whitespace().collect();
    let p: Vec<&str> = pattern.split_whitespace().collect();
    (1..r.len().min(p.len()))
        .any(|k| r[r.len() - k..] == p[..k] || r[..k] == p[p.len() - k..])
}

fn check_unit(name: &str, value: f64) -> ConfigResult<()> {
    // Rejects NaN as well.
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Threshold {
            name: name.to_string(),
            value,
        })
    }
}
