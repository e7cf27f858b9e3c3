use serde::Serialize;
use tracing::debug;

use crate::field::field_model::{FieldDescriptor, SemanticFieldType};
use crate::resolve::generators;
use crate::resolve::random::RandomSource;
use crate::settings::settings_model::UserSettings;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueSource {
    Profile,
    Synthetic,
    Fixed,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedValue {
    pub value: String,
    pub source: ValueSource,
}

impl ResolvedValue {
    fn profile(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
            source: ValueSource::Profile,
        }
    }

    fn synthetic(value: String) -> Self {
        Self {
            value,
            source: ValueSource::Synthetic,
        }
    }

    fn fixed(value: String) -> Self {
        Self {
            value,
            source: ValueSource::Fixed,
        }
    }

    pub fn empty() -> Self {
        Self {
            value: String::new(),
            source: ValueSource::None,
        }
    }
}

fn profile_or(stored: &str, rng: &mut dyn RandomSource, generate: fn(&mut dyn RandomSource) -> String) -> ResolvedValue {
    if stored.trim().is_empty() {
        ResolvedValue::synthetic(generate(rng))
    } else {
        ResolvedValue::profile(stored)
    }
}

/// Value for `field_type`, from the profile when present, else synthetic.
pub fn resolve_detailed(
    field_type: SemanticFieldType,
    descriptor: &FieldDescriptor,
    settings: &UserSettings,
    rng: &mut dyn RandomSource,
) -> ResolvedValue {
    let profile = &settings.profile;
    let address = &settings.address_info;

    let resolved = match field_type {
        SemanticFieldType::FirstName => profile_or(&profile.first_name, rng, generators::first_name),
        SemanticFieldType::LastName => profile_or(&profile.last_name, rng, generators::last_name),
        SemanticFieldType::Email => profile_or(&profile.email, rng, generators::email),
        SemanticFieldType::Phone => profile_or(&profile.phone, rng, generators::phone),
        SemanticFieldType::LinkedIn => profile_or(&profile.linked_in, rng, generators::linkedin),

        SemanticFieldType::FullName => {
            let joined = format!("{} {}", profile.first_name.trim(), profile.last_name.trim());
            profile_or(joined.trim(), rng, generators::full_name)
        }

        SemanticFieldType::StreetAddress => profile_or(&address.street_address, rng, generators::street_address),
        SemanticFieldType::City => profile_or(&address.city, rng, generators::city),
        SemanticFieldType::State => profile_or(&address.state, rng, generators::state),
        SemanticFieldType::ZipCode => profile_or(&address.zip_code, rng, generators::zip_code),
        SemanticFieldType::Country => profile_or(&address.country, rng, generators::country),

        SemanticFieldType::Password => ResolvedValue::fixed(generators::PASSWORD.to_string()),

        SemanticFieldType::GenericText => ResolvedValue::synthetic(generators::sample_text(&[
            &descriptor.name,
            &descriptor.id,
            &descriptor.placeholder,
        ])),

        SemanticFieldType::Date => ResolvedValue::fixed(generators::today()),
        SemanticFieldType::Number => ResolvedValue::synthetic(generators::number(rng)),

        SemanticFieldType::Checkbox | SemanticFieldType::Radio => ResolvedValue::empty(),
    };

    debug!(
        field = %descriptor.key(),
        field_type = %field_type,
        source = ?resolved.source,
        "resolved value"
    );

    resolved
}

pub fn resolve(
    field_type: SemanticFieldType,
    descriptor: &FieldDescriptor,
    settings: &UserSettings,
    rng: &mut dyn RandomSource,
) -> String {
    resolve_detailed(field_type, descriptor, settings, rng).value
}
