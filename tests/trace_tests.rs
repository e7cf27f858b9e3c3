use form_autofill::field::page::FillScope;
use form_autofill::fill::notify::NullNotifier;
use form_autofill::fill::pass::FillPass;
use form_autofill::resolve::random::SequenceRandom;
use form_autofill::settings::settings_model::FillStrategy;
use form_autofill::trace::logger::TraceLogger;
use form_autofill::trace::trace::text_fingerprint;

use crate::common::fixtures::{full_settings, registration_page, temp_path};

mod common;

#[test]
fn fingerprint_is_stable_sha1_hex() {
    let a = text_fingerprint("firstnamefirstname");
    let b = text_fingerprint("firstnamefirstname");
    assert_eq!(a, b);
    assert_eq!(a.len(), 40);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, text_fingerprint("lastname"));
}

#[test]
fn pass_writes_one_trace_line_per_field() {
    let path = temp_path("trace.jsonl");
    let _ = std::fs::remove_file(&path);

    let settings = full_settings(FillStrategy::First);
    let tracer = TraceLogger::new(&path);
    assert!(tracer.is_enabled());

    let mut page = registration_page();
    let mut rng = SequenceRandom::zeros();
    let mut notifier = NullNotifier;
    let summary = FillPass::new(&settings, &mut rng, &mut notifier)
        .with_tracer(&tracer)
        .fill_page(&mut page, &FillScope::Page);

    let content = std::fs::read_to_string(&path).expect("trace written");
    let lines: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid JSON line"))
        .collect();

    assert_eq!(lines.len(), summary.total_fields);
    assert_eq!(lines[0]["step"], 1);
    assert_eq!(lines[0]["field"], "#fn");
    assert_eq!(lines[0]["field_type"], "firstName");
    assert_eq!(lines[0]["source"], "Profile");
    assert_eq!(lines[0]["filled"], true);
    assert!(lines[0]["skip_reason"].is_null());

    let _ = std::fs::remove_file(path);
}

#[test]
fn unopenable_trace_file_disables_logging() {
    let dir = temp_path("trace-dir");
    std::fs::create_dir_all(&dir).unwrap();

    // a directory cannot be opened for appending
    let tracer = TraceLogger::new(&dir);
    assert!(!tracer.is_enabled());

    let _ = std::fs::remove_dir(dir);
}
