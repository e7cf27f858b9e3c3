use tracing::debug;

use crate::field::extractor::FieldHandle;
use crate::field::field_model::{ControlKind, FieldDescriptor, SelectOption};
use crate::fill::fill_model::{FillOutcome, SkipReason};
use crate::fill::notify::{ChangeNotifier, FieldEvent};
use crate::resolve::generators;
use crate::resolve::random::RandomSource;
use crate::settings::settings_model::{FillStrategy, UserSettings};

const INPUT_AND_CHANGE: &[FieldEvent] = &[FieldEvent::Input, FieldEvent::Change];
const CHANGE_ONLY: &[FieldEvent] = &[FieldEvent::Change];

/// Reason a field must not be touched, checked before anything is resolved.
pub fn skip_reason(descriptor: &FieldDescriptor) -> Option<SkipReason> {
    if descriptor.disabled {
        Some(SkipReason::Disabled)
    } else if descriptor.read_only {
        Some(SkipReason::ReadOnly)
    } else if descriptor.has_value() {
        Some(SkipReason::AlreadyFilled)
    } else {
        None
    }
}

// ============================================================================
// Select option choice
// ============================================================================

/// First candidate index, past a leading placeholder option.
pub fn placeholder_offset(options: &[SelectOption]) -> usize {
    match options.first() {
        Some(first)
            if options.len() > 1
                && (first.value.is_empty()
                    || first.text.contains("Select")
                    || first.text.contains("Choose")) =>
        {
            1
        }
        _ => 0,
    }
}

/// First option at or after `start` whose text or value contains `wanted`.
fn find_matching(options: &[SelectOption], start: usize, wanted: &str) -> Option<usize> {
    let wanted = wanted.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }

    options
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, o)| o.text.to_lowercase().contains(&wanted) || o.value.to_lowercase().contains(&wanted))
        .map(|(i, _)| i)
}

/// Index to select under `strategy`, or `None` for an empty select.
pub fn choose_option_index(
    options: &[SelectOption],
    strategy: FillStrategy,
    resolved: &str,
    rng: &mut dyn RandomSource,
) -> Option<usize> {
    if options.is_empty() {
        return None;
    }

    let start = placeholder_offset(options);

    let index = match strategy {
        FillStrategy::First => start,
        FillStrategy::Random => rng.between(start, options.len()),
        FillStrategy::Matching => {
            find_matching(options, start, resolved).unwrap_or_else(|| rng.between(start, options.len()))
        }
    };

    Some(index)
}

// ============================================================================
// Filling
// ============================================================================

/// Apply `resolved` to the live field according to its control kind.
///
/// Disabled, read-only and already-filled fields are returned untouched.
/// Every applied change is reported to `notifier` exactly once.
pub fn fill<H: FieldHandle + ?Sized>(
    field: &mut H,
    descriptor: &FieldDescriptor,
    resolved: &str,
    settings: &UserSettings,
    rng: &mut dyn RandomSource,
    notifier: &mut dyn ChangeNotifier,
) -> FillOutcome {
    if let Some(reason) = skip_reason(descriptor) {
        debug!(field = %descriptor.key(), reason = ?reason, "skipping field");
        return FillOutcome::skipped(descriptor, reason);
    }

    let key = descriptor.key();

    let (applied, events) = match &descriptor.control {
        kind if kind.is_text_like() => {
            if resolved.is_empty() {
                return FillOutcome::skipped(descriptor, SkipReason::NoValue);
            }
            field.set_value(resolved);
            (resolved.to_string(), INPUT_AND_CHANGE)
        }

        ControlKind::Textarea => {
            let text = if resolved.is_empty() {
                generators::textarea_text(&[&descriptor.name, &descriptor.id])
            } else {
                resolved.to_string()
            };
            field.set_value(&text);
            (text, INPUT_AND_CHANGE)
        }

        ControlKind::Checkbox => {
            let now = !descriptor.checked;
            field.set_checked(now);
            (now.to_string(), CHANGE_ONLY)
        }

        ControlKind::Radio => {
            field.set_checked(true);
            ("true".to_string(), CHANGE_ONLY)
        }

        ControlKind::Date => {
            let date = if resolved.is_empty() {
                generators::today()
            } else {
                resolved.to_string()
            };
            field.set_value(&date);
            (date, CHANGE_ONLY)
        }

        ControlKind::Number => {
            let number = if resolved.is_empty() {
                generators::number(rng)
            } else {
                resolved.to_string()
            };
            field.set_value(&number);
            (number, CHANGE_ONLY)
        }

        ControlKind::Select => {
            let options = descriptor.options.as_deref().unwrap_or(&[]);
            let Some(index) = choose_option_index(options, settings.fill_strategy, resolved, rng) else {
                return FillOutcome::skipped(descriptor, SkipReason::NoOptions);
            };
            field.set_selected_index(index);
            (options[index].value.clone(), CHANGE_ONLY)
        }

        _ => return FillOutcome::skipped(descriptor, SkipReason::UnsupportedControl),
    };

    notifier.field_changed(&key, events);
    debug!(field = %key, value = %applied, "filled field");

    FillOutcome::applied(descriptor, applied)
}
