//! Utterance interpretation engine for VoxCue.
//!
//! Turns short, noisy speech-to-text utterances into one structured
//! `InterpretationResult`: UI meta-commands are detected first, then the
//! corrected text is scored against task intents and scanned for file paths.
//! Matching is approximate (normalized edit distance) so homophones and
//! mis-segmented words still land.

pub mod config;
pub mod corrector;
pub mod defaults;
pub mod engine;
pub mod error;
pub mod intent;
pub mod meta;
pub mod paths;
pub mod similarity;

// Re-export key types for convenience
pub use config::InterpreterConfig;
pub use corrector::Corrector;
pub use engine::Interpreter;
pub use error::{ConfigError, ConfigResult};
pub use intent::{IntentClassifier, IntentScore};
pub use meta::MetaCommandMatcher;
pub use paths::{PathExtractor, extract_paths};
pub use similarity::{edit_distance, similarity};
