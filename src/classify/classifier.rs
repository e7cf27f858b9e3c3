use tracing::debug;

use crate::classify::catalog::{CATALOG, PatternRule};
use crate::field::extractor::normalize;
use crate::field::field_model::{FieldDescriptor, SemanticFieldType};

/// Which cue satisfied a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchCue {
    Pattern(&'static str),
    Autocomplete(&'static str),
    InputType(&'static str),
    Label(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub field_type: SemanticFieldType,
    pub cue: MatchCue,
}

fn match_rule(rule: &PatternRule, haystack: &str, autocomplete: &str, input_type: &str, label: &str) -> Option<MatchCue> {
    if rule.exclude.iter().any(|p| haystack.contains(p)) {
        return None;
    }

    if let Some(p) = rule.include.iter().copied().find(|p| haystack.contains(p)) {
        return Some(MatchCue::Pattern(p));
    }

    if !autocomplete.is_empty() {
        if let Some(h) = rule.autocomplete_hints.iter().copied().find(|h| autocomplete.contains(h)) {
            return Some(MatchCue::Autocomplete(h));
        }
    }

    if let Some(t) = rule.exact_input_type {
        if input_type == t {
            return Some(MatchCue::InputType(t));
        }
    }

    if !label.is_empty() {
        if let Some(phrase) = rule.label_phrases.iter().copied().find(|p| label.contains(p)) {
            return Some(MatchCue::Label(phrase));
        }
    }

    None
}

/// Classify against `rules`, first match wins.
pub fn classify_with(rules: &[PatternRule], descriptor: &FieldDescriptor) -> Option<Classification> {
    let autocomplete = normalize(&descriptor.autocomplete);
    let label = descriptor.label_text.to_lowercase();

    rules.iter().find_map(|rule| {
        match_rule(rule, &descriptor.haystack, &autocomplete, &descriptor.input_type, &label).map(|cue| {
            Classification {
                field_type: rule.field_type,
                cue,
            }
        })
    })
}

pub fn classify_detailed(descriptor: &FieldDescriptor) -> Option<Classification> {
    let result = classify_with(CATALOG, descriptor);

    debug!(
        field = %descriptor.key(),
        haystack = %descriptor.haystack,
        result = ?result,
        "classified field"
    );

    result
}

/// Semantic type of a field, or `None` when no rule matches.
pub fn classify(descriptor: &FieldDescriptor) -> Option<SemanticFieldType> {
    classify_detailed(descriptor).map(|c| c.field_type)
}
