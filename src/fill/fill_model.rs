use serde::Serialize;

use crate::field::field_model::{FieldDescriptor, SemanticFieldType};
use crate::resolve::resolver::ValueSource;

/// Why a field was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    Disabled,
    ReadOnly,
    AlreadyFilled,
    UnsupportedControl,
    NoOptions,
    NoValue,
}

/// Result of offering one field to the filler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillOutcome {
    pub field: FieldDescriptor,
    pub field_type: Option<SemanticFieldType>,
    pub filled: bool,
    pub value_applied: Option<String>,
    pub source: ValueSource,
    pub skip_reason: Option<SkipReason>,
}

impl FillOutcome {
    pub fn skipped(field: &FieldDescriptor, reason: SkipReason) -> Self {
        Self {
            field: field.clone(),
            field_type: None,
            filled: false,
            value_applied: None,
            source: ValueSource::None,
            skip_reason: Some(reason),
        }
    }

    pub fn applied(field: &FieldDescriptor, value: String) -> Self {
        Self {
            field: field.clone(),
            field_type: None,
            filled: true,
            value_applied: Some(value),
            source: ValueSource::None,
            skip_reason: None,
        }
    }
}

/// Aggregate of one fill pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FillSummary {
    pub total_fields: usize,
    pub filled_count: usize,
    pub outcomes: Vec<FillOutcome>,
}

impl FillSummary {
    pub fn push(&mut self, outcome: FillOutcome) {
        self.total_fields += 1;
        if outcome.filled {
            self.filled_count += 1;
        }
        self.outcomes.push(outcome);
    }

    /// User-facing confirmation, if any should be shown.
    pub fn confirmation_message(&self) -> Option<String> {
        if self.filled_count > 0 {
            Some(format!("Auto-filled {} field(s)", self.filled_count))
        } else if self.total_fields == 0 {
            Some("No form fields found".to_string())
        } else {
            None
        }
    }
}
