//! Shared test harness for E2E integration tests.
//!
//! Builds interpreters from TOML the same way the CLI does, and drives the
//! CLI session loop over in-memory buffers.

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

use vx_cli::config::CliConfig;
use vx_cli::session::{self, SessionStats};
use vx_interpreter::Interpreter;
use vx_protocol::{InterpretationEnvelope, InterpretationResult};

/// Interpreter plus output settings, as the CLI would assemble them.
pub struct TestHarness {
    pub config: CliConfig,
    pub interpreter: Interpreter,
}

impl TestHarness {
    /// Harness over the built-in tables.
    pub fn with_defaults() -> Self {
        let config = CliConfig::default();
        let interpreter = Interpreter::new(&config.interpreter).unwrap();
        Self {
            config,
            interpreter,
        }
    }

    /// Harness loaded from TOML text written to a temporary file.
    pub fn from_toml(toml: &str) -> Self {
        let file = write_config(toml);
        let config = CliConfig::from_file(file.path().to_str().unwrap()).unwrap();
        let interpreter = Interpreter::new(&config.interpreter).unwrap();
        Self {
            config,
            interpreter,
        }
    }

    pub fn interpret(&self, text: &str) -> InterpretationResult {
        self.interpreter.interpret(text)
    }

    /// Feed `input` through the CLI session loop and parse every emitted envelope.
    pub async fn run_session(&self, input: &str) -> (SessionStats, Vec<InterpretationEnvelope>) {
        let mut out = Vec::new();
        let stats = session::run(&self.interpreter, &self.config.output, input.as_bytes(), &mut out)
            .await
            .unwrap();
        let envelopes = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        (stats, envelopes)
    }
}

/// Write TOML to a temp file that lives as long as the returned handle.
pub fn write_config(toml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(toml.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
