use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::fill::fill_model::FillOutcome;

/// One JSONL record per field offered to a fill pass.
#[derive(Debug, Serialize)]
pub struct FillTraceEvent {
    pub timestamp_ms: u128,
    pub step: u64,

    pub field: String,
    pub fingerprint: String,
    pub control: String,

    pub field_type: Option<String>,
    pub source: Option<String>,

    pub filled: bool,
    pub skip_reason: Option<String>,
}

impl FillTraceEvent {
    pub fn now(step: u64, outcome: &FillOutcome) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            step,
            field: outcome.field.key(),
            fingerprint: text_fingerprint(&outcome.field.haystack),
            control: format!("{:?}", outcome.field.control),
            field_type: outcome.field_type.map(|t| t.to_string()),
            source: None,
            filled: outcome.filled,
            skip_reason: outcome.skip_reason.map(|r| format!("{:?}", r)),
        }
    }

    pub fn with_source(mut self, outcome: &FillOutcome) -> Self {
        if outcome.filled {
            self.source = Some(format!("{:?}", outcome.source));
        }
        self
    }
}

/// SHA-1 of the normalized haystack, stable across runs for identical markup.
pub fn text_fingerprint(text: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
