//! Single-pass interpretation of one utterance.
//!
//! Blank input short-circuits to `Empty`; a meta-command short-circuits to
//! `MetaCommand`; everything else is classified and forwarded as either a
//! `Task` (annotated prompt) or a `Conversation` (plain corrected prompt).

use vx_protocol::{InterpretationResult, Thresholds};

use crate::config::InterpreterConfig;
use crate::corrector::Corrector;
use crate::error::ConfigResult;
use crate::intent::IntentClassifier;
use crate::meta::MetaCommandMatcher;
use crate::paths::PathExtractor;

/// Stateless interpreter built once from an immutable configuration.
///
/// Holds no interior mutability, so a shared reference can be used from any
/// number of threads at once.
#[derive(Debug, Clone)]
pub struct Interpreter {
    corrector: Corrector,
    meta: MetaCommandMatcher,
    classifier: IntentClassifier,
    extractor: PathExtractor,
    thresholds: Thresholds,
}

impl Interpreter {
    /// Validate `config` and build the engine.
    pub fn new(config: &InterpreterConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Engine over the built-in tables.
    pub fn with_defaults() -> Self {
        Self::build(&InterpreterConfig::default())
    }

    fn build(config: &InterpreterConfig) -> Self {
        let thresholds = config.thresholds;
        tracing::debug!(
            corrections = config.corrections.len(),
            meta_commands = config.meta_commands.len(),
            intents = config.intents.len(),
            "interpreter built"
        );
        Self {
            corrector: Corrector::new(&config.corrections),
            meta: MetaCommandMatcher::new(&config.meta_commands, thresholds.meta_command),
            classifier: IntentClassifier::new(&config.intents, thresholds.word_similarity),
            extractor: PathExtractor::new(),
            thresholds,
        }
    }

    pub fn corrector(&self) -> &Corrector {
        &self.corrector
    }

    pub fn meta_matcher(&self) -> &MetaCommandMatcher {
        &self.meta
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Interpret one utterance. Never fails.
    pub fn interpret(&self, text: &str) -> InterpretationResult {
        if text.trim().is_empty() {
            return InterpretationResult::Empty;
        }

        // The matcher works on corrected text; the same correction feeds
        // classification when no meta-command is found.
        let corrected = self.corrector.correct(text);

        if let Some(hit) = self.meta.detect(&corrected) {
            tracing::debug!(action = %hit.action, confidence = hit.confidence, "meta-command detected");
            return InterpretationResult::MetaCommand {
                action: hit.action,
                confidence: hit.confidence,
                original_text: text.to_string(),
            };
        }

        let intent = self.classifier.classify(&corrected);
        // Paths come from the original text so casing and punctuation survive.
        let file_paths = self.extractor.extract(text);

        match intent {
            Some(m) if m.confidence >= self.thresholds.task_floor => {
                tracing::debug!(
                    intent = %m.intent,
                    confidence = m.confidence,
                    paths = file_paths.len(),
                    "task classified"
                );
                let enhanced_prompt = annotate(&corrected, &m.intent, &file_paths);
                InterpretationResult::Task {
                    original_text: text.to_string(),
                    corrected_text: corrected,
                    intent: m.intent,
                    confidence: m.confidence,
                    file_paths,
                    enhanced_prompt,
                }
            }
            other => {
                if let Some(m) = other {
                    tracing::debug!(
                        intent = %m.intent,
                        confidence = m.confidence,
                        floor = self.thresholds.task_floor,
                        "intent below task floor, falling back to conversation"
                    );
                }
                InterpretationResult::Conversation {
                    original_text: text.to_string(),
                    enhanced_prompt: corrected.clone(),
                    corrected_text: corrected,
                    file_paths,
                }
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Append the bracketed intent/files annotation to a task prompt.
fn annotate(corrected: &str, intent: &str, file_paths: &[String]) -> String {
    if file_paths.is_empty() {
        format!("{corrected} [intent: {intent}]")
    } else {
        format!("{corrected} [intent: {intent}; files: {}]", file_paths.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vx_protocol::{IntentDefinition, MetaCommandDefinition, ResultKind};

    fn interpret(text: &str) -> InterpretationResult {
        Interpreter::with_defaults().interpret(text)
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(interpret(""), InterpretationResult::Empty);
        assert_eq!(interpret("   "), InterpretationResult::Empty);
        assert_eq!(interpret("\t\n "), InterpretationResult::Empty);
    }

    #[test]
    fn reset_by_substring() {
        match interpret("reset the conversation") {
            InterpretationResult::MetaCommand {
                action,
                confidence,
                original_text,
            } => {
                assert_eq!(action, "reset");
                assert_eq!(confidence, 1.0);
                assert_eq!(original_text, "reset the conversation");
            }
            other => panic!("expected meta command, got {other:?}"),
        }
    }

    #[test]
    fn clear_is_reset() {
        match interpret("clear") {
            InterpretationResult::MetaCommand { action, .. } => assert_eq!(action, "reset"),
            other => panic!("expected meta command, got {other:?}"),
        }
    }

    #[test]
    fn meta_command_matches_after_correction() {
        // Casing and padding are normalized before matching.
        match interpret("  Scroll Up ") {
            InterpretationResult::MetaCommand {
                action,
                original_text,
                ..
            } => {
                assert_eq!(action, "scroll_up");
                assert_eq!(original_text, "  Scroll Up ");
            }
            other => panic!("expected meta command, got {other:?}"),
        }
    }

    #[test]
    fn misheard_read_becomes_file_read_task() {
        match interpret("red the file server.js") {
            InterpretationResult::Task {
                original_text,
                corrected_text,
                intent,
                confidence,
                file_paths,
                enhanced_prompt,
            } => {
                assert_eq!(original_text, "red the file server.js");
                assert_eq!(corrected_text, "read the file server.js");
                assert_eq!(intent, "file_read");
                assert_eq!(confidence, 0.75);
                assert_eq!(file_paths, vec!["server.js"]);
                assert_eq!(
                    enhanced_prompt,
                    "read the file server.js [intent: file_read; files: server.js]"
                );
            }
            other => panic!("expected task, got {other:?}"),
        }
    }

    #[test]
    fn task_without_paths_has_intent_only_annotation() {
        let result = interpret("open a new term null");
        assert_eq!(result.kind(), ResultKind::Task);
        assert_eq!(
            result.enhanced_prompt(),
            Some("open a new terminal [intent: terminal]")
        );
    }

    #[test]
    fn unrelated_speech_is_conversation() {
        match interpret("the quick brown fox jumps") {
            InterpretationResult::Conversation {
                corrected_text,
                file_paths,
                enhanced_prompt,
                ..
            } => {
                assert_eq!(corrected_text, "the quick brown fox jumps");
                assert!(file_paths.is_empty());
                assert_eq!(enhanced_prompt, corrected_text);
            }
            other => panic!("expected conversation, got {other:?}"),
        }
    }

    #[test]
    fn conversation_keeps_paths_without_annotation() {
        let result = interpret("what do you think about Cargo.toml");
        assert_eq!(result.kind(), ResultKind::Conversation);
        assert_eq!(result.file_paths(), ["Cargo.toml".to_string()]);
        assert_eq!(
            result.enhanced_prompt(),
            Some("what do you think about cargo.toml")
        );
    }

    #[test]
    fn paths_keep_original_casing() {
        let result = interpret("Red the file ./src/App.TSX");
        assert_eq!(result.kind(), ResultKind::Task);
        assert_eq!(result.file_paths(), ["./src/App.TSX".to_string()]);
    }

    #[test]
    fn meta_command_wins_over_task() {
        // Also reads like a file_read task, but "clear" is a reset trigger.
        let result = interpret("clear and read the file server.js");
        assert_eq!(result.kind(), ResultKind::MetaCommand);
        assert!(result.file_paths().is_empty());
    }

    #[test]
    fn global_floor_demotes_qualifying_intent() {
        let config = InterpreterConfig {
            intents: vec![IntentDefinition::new("broad", &["deploy", "ship", "release"], &[])
                .with_floor(0.0)],
            thresholds: Thresholds {
                task_floor: 0.9,
                ..Thresholds::default()
            },
            ..InterpreterConfig::default()
        };
        let engine = Interpreter::new(&config).unwrap();
        // 2.0 / 3 qualifies for the intent but stays under the 0.9 global floor.
        assert_eq!(engine.interpret("deploy").kind(), ResultKind::Conversation);
    }

    #[test]
    fn custom_tables_drive_decisions() {
        let config = InterpreterConfig {
            meta_commands: vec![MetaCommandDefinition::new("mute", &["mute"])],
            intents: vec![IntentDefinition::new("deploy", &["deploy"], &["release"])],
            ..InterpreterConfig::default()
        };
        let engine = Interpreter::new(&config).unwrap();
        assert_eq!(engine.interpret("mute please").kind(), ResultKind::MetaCommand);
        // "reset" is no longer a meta-command under this table.
        assert_eq!(engine.interpret("reset").kind(), ResultKind::Conversation);
        match engine.interpret("deploy the release") {
            InterpretationResult::Task { intent, confidence, .. } => {
                assert_eq!(intent, "deploy");
                assert_eq!(confidence, 1.0);
            }
            other => panic!("expected task, got {other:?}"),
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = InterpreterConfig {
            thresholds: Thresholds {
                meta_command: 2.0,
                ..Thresholds::default()
            },
            ..InterpreterConfig::default()
        };
        assert!(Interpreter::new(&config).is_err());
    }

    #[test]
    fn never_panics_on_odd_input() {
        let engine = Interpreter::with_defaults();
        let long = "read the file server.js ".repeat(2_000);
        let inputs = [
            "日本語のテキスト",
            "ÉCRIS le fichier ./données/été.txt",
            "\u{0}\u{7f}",
            "////",
            "./",
            "..",
            long.as_str(),
        ];
        for text in inputs {
            let result = engine.interpret(text);
            if let Some(c) = result.confidence() {
                assert!((0.0..=1.0).contains(&c), "{text:?} -> {c}");
            }
        }
    }

    #[test]
    fn identical_input_identical_output() {
        let engine = Interpreter::with_defaults();
        let text = "exit cute the script ./build.sh";
        assert_eq!(engine.interpret(text), engine.interpret(text));
    }
}
