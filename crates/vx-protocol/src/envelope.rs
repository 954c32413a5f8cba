use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::result::InterpretationResult;

/// Record emitted for every interpreted utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretationEnvelope {
    /// Unique record ID (UUIDv7 for time-sortability).
    pub id: Uuid,
    /// When the utterance was received.
    pub received_at: DateTime<Utc>,
    /// Time spent interpreting, in microseconds.
    pub latency_us: u64,
    /// The interpretation itself.
    pub result: InterpretationResult,
}

impl InterpretationEnvelope {
    pub fn new(received_at: DateTime<Utc>, latency_us: u64, result: InterpretationResult) -> Self {
        Self {
            id: Uuid::now_v7(),
            received_at,
            latency_us,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_roundtrip() {
        let env = InterpretationEnvelope::new(Utc::now(), 42, InterpretationResult::Empty);
        let json = serde_json::to_string(&env).unwrap();
        let back: InterpretationEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, env.id);
        assert_eq!(back.latency_us, 42);
        assert!(back.result.is_empty());
    }

    #[test]
    fn envelope_ids_are_unique_v7() {
        let first = InterpretationEnvelope::new(Utc::now(), 0, InterpretationResult::Empty);
        let second = InterpretationEnvelope::new(Utc::now(), 0, InterpretationResult::Empty);
        assert_ne!(first.id, second.id);
        assert_eq!(first.id.get_version_num(), 7);
    }
}
