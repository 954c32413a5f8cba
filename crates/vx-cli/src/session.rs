//! Line loop: one utterance per input line, one envelope per output line.

use std::time::Instant;

use chrono::Utc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use vx_interpreter::Interpreter;
use vx_protocol::{InterpretationEnvelope, ResultKind};

use crate::config::OutputConfig;

/// Per-kind counts for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub lines: u64,
    pub empty: u64,
    pub meta_commands: u64,
    pub tasks: u64,
    pub conversations: u64,
}

impl SessionStats {
    fn record(&mut self, kind: ResultKind) {
        self.lines += 1;
        match kind {
            ResultKind::Empty => self.empty += 1,
            ResultKind::MetaCommand => self.meta_commands += 1,
            ResultKind::Task => self.tasks += 1,
            ResultKind::Conversation => self.conversations += 1,
        }
    }
}

/// Interpret one line and wrap the result with timing metadata.
pub fn interpret_line(interpreter: &Interpreter, line: &str) -> InterpretationEnvelope {
    let received_at = Utc::now();
    let start = Instant::now();
    let result = interpreter.interpret(line);
    let latency_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

    tracing::info!(kind = %result.kind(), latency_us, "utterance interpreted");
    InterpretationEnvelope::new(received_at, latency_us, result)
}

/// Serialize an envelope, or `None` if the output settings suppress it.
pub fn render(envelope: &InterpretationEnvelope, output: &OutputConfig) -> anyhow::Result<Option<String>> {
    if output.skip_empty && envelope.result.is_empty() {
        return Ok(None);
    }
    let json = if output.pretty {
        serde_json::to_string_pretty(envelope)?
    } else {
        serde_json::to_string(envelope)?
    };
    Ok(Some(json))
}

/// Drive the loop until `reader` hits EOF.
pub async fn run<R, W>(
    interpreter: &Interpreter,
    output: &OutputConfig,
    reader: R,
    mut writer: W,
) -> anyhow::Result<SessionStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut stats = SessionStats::default();
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let envelope = interpret_line(interpreter, &line);
        stats.record(envelope.result.kind());

        if let Some(json) = render(&envelope, output)? {
            writer.write_all(json.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
    }

    Ok(stats)
}
