use tracing::info;

use crate::classify::classifier::classify_detailed;
use crate::cli::config::AppConfig;
use crate::error::{AutofillError, Result};
use crate::field::extractor::extract_descriptor;
use crate::field::page::{FillScope, PageSnapshot};
use crate::fill::fill_model::FillSummary;
use crate::fill::notify::TracingNotifier;
use crate::fill::pass::FillPass;
use crate::resolve::random::{RandomSource, SeededRandom, ThreadRandom};
use crate::settings::settings_model::{FillStrategy, UserSettings};
use crate::settings::store::{FileSettings, SettingsSource};
use crate::trace::logger::TraceLogger;

/// Options of the `fill` subcommand after merging CLI args and config.
#[derive(Debug, Default)]
pub struct FillArgs {
    pub page: String,
    pub settings: Option<String>,
    pub form: Option<String>,
    pub trigger: Option<String>,
    pub strategy: Option<FillStrategy>,
    pub seed: Option<u64>,
    pub output: Option<String>,
    pub trace: Option<String>,
}

pub fn load_page(path: &str) -> Result<PageSnapshot> {
    let content = std::fs::read_to_string(path).map_err(|source| AutofillError::Read {
        path: path.to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| AutofillError::PageParse {
        path: path.to_string(),
        source,
    })
}

pub fn save_page(page: &PageSnapshot, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(page).map_err(AutofillError::PageSerialize)?;
    std::fs::write(path, json).map_err(|source| AutofillError::Write {
        path: path.to_string(),
        source,
    })
}

/// Settings precedence: `--settings` file, then config file, then `--strategy`.
pub fn resolve_settings(args: &FillArgs, config: &AppConfig) -> UserSettings {
    let mut settings = match &args.settings {
        Some(path) => FileSettings::new(path).load(),
        None => config.settings.clone(),
    };

    if let Some(strategy) = args.strategy {
        settings.fill_strategy = strategy;
    }

    settings
}

pub fn resolve_scope(page: &PageSnapshot, args: &FillArgs, settings: &UserSettings) -> FillScope {
    match &args.form {
        Some(form) => FillScope::Container(form.clone()),
        None => page.scope_for_trigger(args.trigger.as_deref(), settings.fill_all_fields),
    }
}

// ============================================================================
// fill subcommand
// ============================================================================

pub fn cmd_fill(args: &FillArgs, config: &AppConfig) -> Result<FillSummary> {
    let mut page = load_page(&args.page)?;
    let settings = resolve_settings(args, config);
    let scope = resolve_scope(&page, args, &settings);

    if let FillScope::Container(form) = &scope {
        let known = page.fields.iter().any(|f| f.form_id.as_deref() == Some(form.as_str()));
        if !known {
            return Err(AutofillError::InvalidArgument(format!(
                "no fields belong to form '{}'",
                form
            )));
        }
    }

    let mut rng: Box<dyn RandomSource> = match args.seed.or(config.seed) {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    };

    let tracer = match args.trace.as_deref().or(config.trace.as_deref()) {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    info!(page = %args.page, strategy = ?settings.fill_strategy, "starting fill pass");

    let mut notifier = TracingNotifier;
    let summary = FillPass::new(&settings, rng.as_mut(), &mut notifier)
        .with_tracer(&tracer)
        .fill_page(&mut page, &scope);

    for outcome in &summary.outcomes {
        let kind = outcome
            .field_type
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());
        match (&outcome.value_applied, outcome.skip_reason) {
            (Some(value), _) => println!("  {:<28} {:<14} = {}", outcome.field.key(), kind, value),
            (None, Some(reason)) => println!("  {:<28} {:<14} skipped ({:?})", outcome.field.key(), kind, reason),
            (None, None) => println!("  {:<28} {:<14} skipped", outcome.field.key(), kind),
        }
    }

    if let Some(message) = summary.confirmation_message() {
        println!("{}", message);
    }

    if let Some(path) = &args.output {
        save_page(&page, path)?;
    }

    Ok(summary)
}

// ============================================================================
// classify subcommand
// ============================================================================

pub fn cmd_classify(page_path: &str) -> Result<()> {
    let page = load_page(page_path)?;

    for field in page.fields.iter().filter(|f| f.is_candidate()) {
        let descriptor = extract_descriptor(field, &page.labels);
        match classify_detailed(&descriptor) {
            Some(c) => println!("  {:<28} {:<14} via {:?}", descriptor.key(), c.field_type, c.cue),
            None => println!("  {:<28} -", descriptor.key()),
        }
    }

    Ok(())
}
