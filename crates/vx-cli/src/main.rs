//! VoxCue CLI: interprets transcribed utterances from stdin.
//!
//! Each input line is one utterance; each output line is a JSON
//! `InterpretationEnvelope`. Logs go to stderr so stdout stays parseable.

use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use vx_cli::config::CliConfig;
use vx_cli::session;
use vx_interpreter::Interpreter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "vx-cli starting");

    // ── Load config ─────────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let config = CliConfig::from_file(&path)?;
            tracing::info!(path = %path, "config loaded");
            config
        }
        None => {
            tracing::info!("no config path given, using built-in tables");
            CliConfig::default()
        }
    };

    // ── Build interpreter ───────────────────────────────────────
    let interpreter = Interpreter::new(&config.interpreter)?;
    tracing::info!(
        meta_commands = config.interpreter.meta_commands.len(),
        intents = config.interpreter.intents.len(),
        "interpreter ready"
    );

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tokio::select! {
        stats = session::run(&interpreter, &config.output, stdin, stdout) => {
            let stats = stats?;
            tracing::info!(
                lines = stats.lines,
                meta_commands = stats.meta_commands,
                tasks = stats.tasks,
                conversations = stats.conversations,
                "input closed"
            );
        }
        // Graceful shutdown on SIGINT
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    tracing::info!("vx-cli stopped");
    Ok(())
}
