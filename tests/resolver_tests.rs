use chrono::NaiveDate;

use form_autofill::field::field_model::SemanticFieldType;
use form_autofill::field::page::PageField;
use form_autofill::resolve::random::{SeededRandom, SequenceRandom};
use form_autofill::resolve::resolver::{ValueSource, resolve, resolve_detailed};
use form_autofill::settings::settings_model::{FillStrategy, UserSettings};

use crate::common::fixtures::{descriptor, full_settings, text};

mod common;

fn is_plain_email(value: &str) -> bool {
    let Some((user, domain)) = value.split_once('@') else {
        return false;
    };
    !user.is_empty()
        && !domain.is_empty()
        && user.chars().all(|c| c.is_ascii_lowercase())
        && domain.chars().all(|c| c.is_ascii_lowercase() || c == '.')
}

// =========================================================================
// Profile-backed values
// =========================================================================

#[test]
fn email_prefers_profile() {
    let settings = full_settings(FillStrategy::First);
    let d = descriptor(&text("user_email"));
    let mut rng = SequenceRandom::zeros();

    let resolved = resolve_detailed(SemanticFieldType::Email, &d, &settings, &mut rng);
    assert_eq!(resolved.value, "ada@example.org");
    assert_eq!(resolved.source, ValueSource::Profile);
}

#[test]
fn email_falls_back_to_synthetic() {
    let settings = UserSettings::default();
    let d = descriptor(&text("user_email"));
    let mut rng = SeededRandom::new(11);

    for _ in 0..25 {
        let value = resolve(SemanticFieldType::Email, &d, &settings, &mut rng);
        assert!(is_plain_email(&value), "unexpected synthetic email {:?}", value);
    }
}

#[test]
fn blank_profile_value_counts_as_missing() {
    let mut settings = UserSettings::default();
    settings.profile.first_name = "   ".into();
    let d = descriptor(&text("first_name"));
    let mut rng = SequenceRandom::zeros();

    let resolved = resolve_detailed(SemanticFieldType::FirstName, &d, &settings, &mut rng);
    assert_eq!(resolved.value, "John");
    assert_eq!(resolved.source, ValueSource::Synthetic);
}

#[test]
fn profile_and_address_fields_map_one_to_one() {
    let settings = full_settings(FillStrategy::First);
    let d = descriptor(&text("x"));
    let mut rng = SequenceRandom::zeros();

    let cases = [
        (SemanticFieldType::FirstName, "Ada"),
        (SemanticFieldType::LastName, "Lovelace"),
        (SemanticFieldType::Phone, "+15550001111"),
        (SemanticFieldType::LinkedIn, "https://www.linkedin.com/in/ada"),
        (SemanticFieldType::StreetAddress, "12 Analytical Way"),
        (SemanticFieldType::City, "London"),
        (SemanticFieldType::State, "NY"),
        (SemanticFieldType::ZipCode, "10001"),
        (SemanticFieldType::Country, "United Kingdom"),
    ];

    for (field_type, expected) in cases {
        assert_eq!(resolve(field_type, &d, &settings, &mut rng), expected, "{}", field_type);
    }
}

#[test]
fn full_name_joins_profile_names() {
    let mut settings = full_settings(FillStrategy::First);
    let d = descriptor(&text("name"));
    let mut rng = SequenceRandom::zeros();

    assert_eq!(resolve(SemanticFieldType::FullName, &d, &settings, &mut rng), "Ada Lovelace");

    settings.profile.last_name.clear();
    assert_eq!(resolve(SemanticFieldType::FullName, &d, &settings, &mut rng), "Ada");

    settings.profile.first_name.clear();
    assert_eq!(resolve(SemanticFieldType::FullName, &d, &settings, &mut rng), "John Smith");
}

// =========================================================================
// Synthetic values
// =========================================================================

#[test]
fn synthetic_values_come_from_pools() {
    let settings = UserSettings::default();
    let d = descriptor(&text("x"));
    let mut rng = SequenceRandom::zeros();

    assert_eq!(resolve(SemanticFieldType::Email, &d, &settings, &mut rng), "john@example.com");
    assert_eq!(resolve(SemanticFieldType::City, &d, &settings, &mut rng), "New York");
    assert_eq!(resolve(SemanticFieldType::State, &d, &settings, &mut rng), "CA");
    assert_eq!(resolve(SemanticFieldType::Country, &d, &settings, &mut rng), "United States");
    assert_eq!(
        resolve(SemanticFieldType::LinkedIn, &d, &settings, &mut rng),
        "https://www.linkedin.com/in/john-smith"
    );
    assert_eq!(resolve(SemanticFieldType::Phone, &d, &settings, &mut rng), "+11001001000");
    assert_eq!(resolve(SemanticFieldType::ZipCode, &d, &settings, &mut rng), "10000");
}

#[test]
fn password_is_fixed_even_with_profile() {
    let settings = full_settings(FillStrategy::First);
    let d = descriptor(&PageField::input("password"));
    let mut rng = SeededRandom::new(5);

    let resolved = resolve_detailed(SemanticFieldType::Password, &d, &settings, &mut rng);
    assert_eq!(resolved.value, "Password123!");
    assert_eq!(resolved.source, ValueSource::Fixed);
}

#[test]
fn generic_text_prefers_name_then_id_then_placeholder() {
    let settings = UserSettings::default();
    let mut rng = SequenceRandom::zeros();

    let by_name = descriptor(&PageField::input("text").with_name("nickname").with_id("nick"));
    assert_eq!(
        resolve(SemanticFieldType::GenericText, &by_name, &settings, &mut rng),
        "Sample text for nickname"
    );

    let by_id = descriptor(&PageField::input("text").with_id("nick").with_placeholder("Nick"));
    assert_eq!(
        resolve(SemanticFieldType::GenericText, &by_id, &settings, &mut rng),
        "Sample text for nick"
    );

    let by_placeholder = descriptor(&PageField::input("text").with_placeholder("Nick"));
    assert_eq!(
        resolve(SemanticFieldType::GenericText, &by_placeholder, &settings, &mut rng),
        "Sample text for Nick"
    );

    let anonymous = descriptor(&PageField::input("text"));
    assert_eq!(
        resolve(SemanticFieldType::GenericText, &anonymous, &settings, &mut rng),
        "Sample text for field"
    );
}

#[test]
fn date_is_today_in_iso_format() {
    let settings = UserSettings::default();
    let d = descriptor(&PageField::input("date"));
    let mut rng = SequenceRandom::zeros();

    let value = resolve(SemanticFieldType::Date, &d, &settings, &mut rng);
    let parsed = NaiveDate::parse_from_str(&value, "%Y-%m-%d").expect("ISO date");
    assert_eq!(value.len(), 10);
    assert_eq!(parsed, chrono::Local::now().date_naive());
}

#[test]
fn number_is_below_one_hundred() {
    let settings = UserSettings::default();
    let d = descriptor(&PageField::input("number"));
    let mut rng = SeededRandom::new(99);

    for _ in 0..50 {
        let n: u32 = resolve(SemanticFieldType::Number, &d, &settings, &mut rng)
            .parse()
            .expect("integer");
        assert!(n < 100);
    }
}

#[test]
fn checkable_types_resolve_to_nothing() {
    let settings = full_settings(FillStrategy::First);
    let d = descriptor(&PageField::input("checkbox"));
    let mut rng = SequenceRandom::zeros();

    let resolved = resolve_detailed(SemanticFieldType::Checkbox, &d, &settings, &mut rng);
    assert_eq!(resolved.value, "");
    assert_eq!(resolved.source, ValueSource::None);
    assert_eq!(resolve(SemanticFieldType::Radio, &d, &settings, &mut rng), "");
}
