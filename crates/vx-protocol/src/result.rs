use serde::{Deserialize, Serialize};

/// A detected UI-control command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaCommandMatch {
    /// Action name from the matched definition.
    pub action: String,
    /// 1.0 for a substring hit, otherwise the fuzzy similarity (0.0 - 1.0).
    pub confidence: f64,
}

/// A classified task intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentMatch {
    /// Intent name from the matched definition.
    pub intent: String,
    /// Classifier confidence, clamped to 0.0 - 1.0.
    pub confidence: f64,
}

/// Outcome of interpreting one utterance. Exactly one variant applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InterpretationResult {
    /// Blank input. Nothing to forward.
    Empty,
    /// Interface control; never forwarded to the agent.
    MetaCommand {
        action: String,
        confidence: f64,
        original_text: String,
    },
    /// A recognised task, forwarded with an annotated prompt.
    Task {
        original_text: String,
        corrected_text: String,
        intent: String,
        confidence: f64,
        file_paths: Vec<String>,
        enhanced_prompt: String,
    },
    /// Free-form conversation; the safe fallback.
    Conversation {
        original_text: String,
        corrected_text: String,
        file_paths: Vec<String>,
        enhanced_prompt: String,
    },
}

/// Discriminant of [`InterpretationResult`], handy for logging and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Empty,
    MetaCommand,
    Task,
    Conversation,
}

impl ResultKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::MetaCommand => "meta_command",
            Self::Task => "task",
            Self::Conversation => "conversation",
        }
    }
}

impl std::fmt::Display for ResultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InterpretationResult {
    pub fn kind(&self) -> ResultKind {
        match self {
            Self::Empty => ResultKind::Empty,
            Self::MetaCommand { .. } => ResultKind::MetaCommand,
            Self::Task { .. } => ResultKind::Task,
            Self::Conversation { .. } => ResultKind::Conversation,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Text to forward to the conversational agent, if any.
    pub fn enhanced_prompt(&self) -> Option<&str> {
        match self {
            Self::Task {
                enhanced_prompt, ..
            }
            | Self::Conversation {
                enhanced_prompt, ..
            } => Some(enhanced_prompt),
            Self::Empty | Self::MetaCommand { .. } => None,
        }
    }

    /// Confidence of the decision, where the variant carries one.
    pub fn confidence(&self) -> Option<f64> {
        match self {
            Self::MetaCommand { confidence, .. } | Self::Task { confidence, .. } => {
                Some(*confidence)
            }
            Self::Empty | Self::Conversation { .. } => None,
        }
    }

    /// Paths mentioned in the utterance (empty for meta-commands and blank input).
    pub fn file_paths(&self) -> &[String] {
        match self {
            Self::Task { file_paths, .. } | Self::Conversation { file_paths, .. } => file_paths,
            Self::Empty | Self::MetaCommand { .. } => &[],
        }
    }
}
