use std::path::PathBuf;

use form_autofill::field::extractor::{NoLabels, extract_descriptor};
use form_autofill::field::field_model::{FieldDescriptor, SelectOption};
use form_autofill::field::page::{LabelElement, LabelIndex, PageField, PageSnapshot};
use form_autofill::settings::settings_model::{AddressInfo, FillStrategy, Profile, UserSettings};

pub fn descriptor(field: &PageField) -> FieldDescriptor {
    extract_descriptor(field, &NoLabels)
}

pub fn text(name: &str) -> PageField {
    PageField::input("text").with_name(name)
}

pub fn options(texts: &[(&str, &str)]) -> Vec<SelectOption> {
    texts.iter().map(|(t, v)| SelectOption::new(*t, *v)).collect()
}

/// `["-- Select --", "CA", "NY", "TX"]` with an empty placeholder value.
pub fn state_select() -> PageField {
    PageField::select(options(&[
        ("-- Select --", ""),
        ("CA", "CA"),
        ("NY", "NY"),
        ("TX", "TX"),
    ]))
    .with_name("state")
    .with_id("state")
}

pub fn full_settings(strategy: FillStrategy) -> UserSettings {
    UserSettings {
        auto_fill_on_load: false,
        fill_all_fields: true,
        fill_strategy: strategy,
        profile: Profile {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.org".into(),
            phone: "+15550001111".into(),
            linked_in: "https://www.linkedin.com/in/ada".into(),
        },
        address_info: AddressInfo {
            street_address: "12 Analytical Way".into(),
            city: "London".into(),
            state: "NY".into(),
            zip_code: "10001".into(),
            country: "United Kingdom".into(),
        },
    }
}

/// Signup form plus a separate newsletter form and some page chrome.
pub fn registration_page() -> PageSnapshot {
    PageSnapshot {
        url: Some("https://example.com/signup".into()),
        title: "Create account".into(),
        labels: LabelIndex(vec![
            LabelElement {
                for_id: "fn".into(),
                text: "First Name".into(),
            },
            LabelElement {
                for_id: "ln".into(),
                text: "Last Name".into(),
            },
        ]),
        fields: vec![
            PageField::input("text").with_id("fn").in_form("signup"),
            PageField::input("text").with_id("ln").in_form("signup"),
            PageField::input("email").with_name("email").in_form("signup"),
            PageField::input("tel").with_name("phone").in_form("signup"),
            state_select().in_form("signup"),
            PageField::select(options(&[
                ("Choose a country", "none"),
                ("United States", "US"),
                ("United Kingdom", "GB"),
            ]))
            .with_name("country")
            .in_form("signup"),
            PageField::textarea().with_name("bio").in_form("signup"),
            PageField::input("checkbox").with_name("terms").with_value("on").in_form("signup"),
            PageField::input("hidden").with_name("csrf").with_value("token").in_form("signup"),
            PageField::input("submit").with_value("Sign up").in_form("signup"),
            PageField::input("email").with_id("newsletter-email").in_form("newsletter"),
        ],
    }
}

pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("form-autofill-{}-{}", std::process::id(), name))
}
