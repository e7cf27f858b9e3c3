use tracing::{debug, info};

use crate::classify::classifier::classify;
use crate::field::extractor::{FieldHandle, LabelLookup, extract_descriptor};
use crate::field::field_model::{ControlKind, SemanticFieldType};
use crate::field::page::{FillScope, PageSnapshot, select_targets};
use crate::fill::fill_model::{FillOutcome, FillSummary};
use crate::fill::filler::{fill, skip_reason};
use crate::fill::notify::ChangeNotifier;
use crate::resolve::random::RandomSource;
use crate::resolve::resolver::{ResolvedValue, resolve_detailed};
use crate::settings::settings_model::UserSettings;
use crate::settings::store::SettingsSource;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::FillTraceEvent;

/// Semantic type whose value the filler consumes for a control.
///
/// Date and number controls always take a date or number. Unclassified
/// text-like controls fall back to generic text; unclassified textareas and
/// selects resolve to nothing and use their own fallbacks.
pub fn value_type_for(control: &ControlKind, classified: Option<SemanticFieldType>) -> Option<SemanticFieldType> {
    match control {
        ControlKind::Date => Some(SemanticFieldType::Date),
        ControlKind::Number => Some(SemanticFieldType::Number),
        ControlKind::Checkbox | ControlKind::Radio | ControlKind::Unsupported(_) => None,
        ControlKind::Textarea | ControlKind::Select => classified,
        _ => Some(classified.unwrap_or(SemanticFieldType::GenericText)),
    }
}

/// Whether the caller should start a pass as soon as a page loads.
pub fn should_fill_on_load(settings: &UserSettings) -> bool {
    settings.auto_fill_on_load
}

/// One sequential pass over a set of fields against a fixed settings snapshot.
pub struct FillPass<'a> {
    settings: &'a UserSettings,
    rng: &'a mut dyn RandomSource,
    notifier: &'a mut dyn ChangeNotifier,
    tracer: Option<&'a TraceLogger>,
    step: u64,
}

impl<'a> FillPass<'a> {
    pub fn new(
        settings: &'a UserSettings,
        rng: &'a mut dyn RandomSource,
        notifier: &'a mut dyn ChangeNotifier,
    ) -> Self {
        Self {
            settings,
            rng,
            notifier,
            tracer: None,
            step: 0,
        }
    }

    pub fn with_tracer(mut self, tracer: &'a TraceLogger) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Extract, classify, resolve and fill a single field.
    pub fn fill_field<H: FieldHandle + ?Sized>(&mut self, field: &mut H, labels: &dyn LabelLookup) -> FillOutcome {
        let descriptor = extract_descriptor(field, labels);

        let outcome = if let Some(reason) = skip_reason(&descriptor) {
            debug!(field = %descriptor.key(), reason = ?reason, "skipping field");
            FillOutcome::skipped(&descriptor, reason)
        } else {
            let classified = classify(&descriptor);
            let resolved = value_type_for(&descriptor.control, classified)
                .map(|t| resolve_detailed(t, &descriptor, self.settings, &mut *self.rng))
                .unwrap_or_else(ResolvedValue::empty);

            let mut outcome = fill(
                field,
                &descriptor,
                &resolved.value,
                self.settings,
                &mut *self.rng,
                &mut *self.notifier,
            );
            outcome.field_type = classified;
            if outcome.filled {
                outcome.source = resolved.source;
            }
            outcome
        };

        self.step += 1;
        if let Some(tracer) = self.tracer {
            tracer.log(&FillTraceEvent::now(self.step, &outcome).with_source(&outcome));
        }

        outcome
    }

    /// Fill every field in order. Each field counts toward `total_fields`.
    pub fn run<'f, H, I>(&mut self, fields: I, labels: &dyn LabelLookup) -> FillSummary
    where
        H: FieldHandle + ?Sized + 'f,
        I: IntoIterator<Item = &'f mut H>,
    {
        let mut summary = FillSummary::default();

        for field in fields {
            let outcome = self.fill_field(field, labels);
            summary.push(outcome);
        }

        info!(
            total = summary.total_fields,
            filled = summary.filled_count,
            "fill pass complete"
        );

        summary
    }

    /// Fill the candidates of `page` that fall within `scope`. Radio groups
    /// end with a single checked member.
    pub fn fill_page(&mut self, page: &mut PageSnapshot, scope: &FillScope) -> FillSummary {
        let PageSnapshot { labels, fields, .. } = &mut *page;
        let targets = select_targets(fields, scope);
        debug!(scope = ?scope, targets = targets.len(), "selected fill targets");
        let summary = self.run(targets, &*labels);

        page.settle_radio_groups();
        summary
    }
}

/// Load a settings snapshot, then fill `page` in the scope implied by
/// `trigger_id` and the snapshot's `fill_all_fields` flag.
pub fn run_fill_pass(
    source: &dyn SettingsSource,
    page: &mut PageSnapshot,
    trigger_id: Option<&str>,
    rng: &mut dyn RandomSource,
    notifier: &mut dyn ChangeNotifier,
) -> FillSummary {
    let settings = source.load();
    let scope = page.scope_for_trigger(trigger_id, settings.fill_all_fields);
    FillPass::new(&settings, rng, notifier).fill_page(page, &scope)
}
