//! Meta-command detection: phrases that drive the interface, not the agent.
//!
//! Resolution is first-qualifying-match. Commands are visited in declared
//! order, and each command's triggers in declared order; the first trigger
//! that is either contained in the text or close enough to the whole text
//! wins, even if a later trigger would have matched better. Table order is
//! therefore part of the configuration contract.

use vx_protocol::{MetaCommandDefinition, MetaCommandMatch};

use crate::similarity::similarity;

#[derive(Debug, Clone)]
pub struct MetaCommandMatcher {
    commands: Vec<MetaCommandDefinition>,
    threshold: f64,
}

impl MetaCommandMatcher {
    /// `threshold` is the minimum whole-text similarity for a fuzzy hit.
    pub fn new(commands: &[MetaCommandDefinition], threshold: f64) -> Self {
        let commands = commands
            .iter()
            .map(|c| MetaCommandDefinition {
                action: c.action.clone(),
                triggers: c
                    .triggers
                    .iter()
                    .map(|t| t.trim().to_lowercase())
                    .filter(|t| !t.is_empty())
                    .collect(),
            })
            .collect();
        Self {
            commands,
            threshold,
        }
    }

    /// Detect a meta-command in already-corrected text.
    pub fn detect(&self, normalized: &str) -> Option<MetaCommandMatch> {
        for cmd in &self.commands {
            for trigger in &cmd.triggers {
                if normalized.contains(trigger.as_str()) {
                    return Some(MetaCommandMatch {
                        action: cmd.action.clone(),
                        confidence: 1.0,
                    });
                }

                let score = similarity(normalized, trigger);
                if score >= self.threshold {
                    tracing::trace!(action = %cmd.action, trigger = %trigger, score, "fuzzy meta-command hit");
                    return Some(MetaCommandMatch {
                        action: cmd.action.clone(),
                        confidence: score,
                    });
                }
            }
        }
        None
    }
}
