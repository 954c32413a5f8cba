use serde::{Deserialize, Serialize};

/// Literal phrase substitution applied by the error corrector.
///
/// Matching is case-insensitive: the corrector lowercases both the text and
/// the pattern before replacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionRule {
    /// Phrase as it tends to come out of speech-to-text (e.g. "exit cute").
    pub pattern: String,
    /// What the phrase should read as (e.g. "execute").
    pub replacement: String,
}

impl CorrectionRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// A UI-control action and the phrases that trigger it.
///
/// Trigger order matters: the matcher returns the first qualifying phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaCommandDefinition {
    /// Action name forwarded to the host interface (e.g. "reset").
    pub action: String,
    /// Lowercase trigger phrases, in match priority order.
    pub triggers: Vec<String>,
}

impl MetaCommandDefinition {
    pub fn new(action: impl Into<String>, triggers: &[&str]) -> Self {
        Self {
            action: action.into(),
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// A task intent scored by the intent classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentDefinition {
    /// Intent name reported downstream (e.g. "file_read").
    pub name: String,
    /// Verbs that signal the intent. At least one must hit for the intent to qualify.
    pub keywords: Vec<String>,
    /// Nouns that reinforce the intent; they count at half weight.
    #[serde(default)]
    pub objects: Vec<String>,
    /// Minimum confidence for this intent to qualify.
    #[serde(default = "default_intent_floor")]
    pub floor: f64,
}

fn default_intent_floor() -> f64 {
    0.6
}

impl IntentDefinition {
    pub fn new(name: impl Into<String>, keywords: &[&str], objects: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            objects: objects.iter().map(|o| o.to_string()).collect(),
            floor: default_intent_floor(),
        }
    }

    /// Override the confidence floor (higher-precision intents use 0.7).
    pub fn with_floor(mut self, floor: f64) -> Self {
        self.floor = floor;
        self
    }
}

/// Similarity and confidence cut-offs used across the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum per-word similarity for a keyword/object to count.
    #[serde(default = "default_word_similarity")]
    pub word_similarity: f64,
    /// Minimum whole-utterance similarity for a fuzzy meta-command hit.
    #[serde(default = "default_meta_command")]
    pub meta_command: f64,
    /// Global floor a classified intent must reach to become a task.
    #[serde(default = "default_task_floor")]
    pub task_floor: f64,
}

fn default_word_similarity() -> f64 {
    0.7
}

fn default_meta_command() -> f64 {
    0.85
}

fn default_task_floor() -> f64 {
    0.5
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            word_similarity: default_word_similarity(),
            meta_command: default_meta_command(),
            task_floor: default_task_floor(),
        }
    }
}
