use crate::resolve::random::RandomSource;

// ============================================================================
// Candidate pools
// ============================================================================

pub const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Michael", "Emma", "William", "Olivia", "James", "Sofia", "Robert", "Emily",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Martinez", "Wilson",
];

pub const EMAIL_USERS: &[&str] = &["john", "jane", "user", "test", "contact", "info", "support", "admin"];

pub const EMAIL_DOMAINS: &[&str] = &["example.com", "test.com", "mail.com", "domain.com", "company.net"];

pub const STREETS: &[&str] = &["Main St", "Oak Ave", "Maple Rd", "Park Blvd", "Cedar Ln"];

pub const CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia", "San Antonio", "San Diego",
];

pub const STATES: &[&str] = &["CA", "NY", "TX", "FL", "IL", "PA", "OH", "GA", "NC", "MI"];

pub const COUNTRIES: &[&str] = &["United States"];

pub const LINKEDIN_SLUGS: &[&str] = &["john-smith", "jane-doe", "alex-taylor", "sam-lee", "chris-morgan"];

pub const PASSWORD: &str = "Password123!";

// ============================================================================
// Generators
// ============================================================================

pub fn first_name(rng: &mut dyn RandomSource) -> String {
    rng.pick(FIRST_NAMES).to_string()
}

pub fn last_name(rng: &mut dyn RandomSource) -> String {
    rng.pick(LAST_NAMES).to_string()
}

pub fn full_name(rng: &mut dyn RandomSource) -> String {
    let first = rng.pick(FIRST_NAMES);
    let last = rng.pick(LAST_NAMES);
    format!("{} {}", first, last)
}

pub fn email(rng: &mut dyn RandomSource) -> String {
    let user = rng.pick(EMAIL_USERS);
    let domain = rng.pick(EMAIL_DOMAINS);
    format!("{}@{}", user, domain)
}

/// `+1` followed by ten digits.
pub fn phone(rng: &mut dyn RandomSource) -> String {
    format!(
        "+1{}{}{}",
        rng.between(100, 1000),
        rng.between(100, 1000),
        rng.between(1000, 10000)
    )
}

pub fn linkedin(rng: &mut dyn RandomSource) -> String {
    format!("https://www.linkedin.com/in/{}", rng.pick(LINKEDIN_SLUGS))
}

pub fn street_address(rng: &mut dyn RandomSource) -> String {
    let number = rng.between(1, 1001);
    format!("{} {}", number, rng.pick(STREETS))
}

pub fn city(rng: &mut dyn RandomSource) -> String {
    rng.pick(CITIES).to_string()
}

pub fn state(rng: &mut dyn RandomSource) -> String {
    rng.pick(STATES).to_string()
}

pub fn zip_code(rng: &mut dyn RandomSource) -> String {
    rng.between(10000, 100000).to_string()
}

pub fn country(rng: &mut dyn RandomSource) -> String {
    rng.pick(COUNTRIES).to_string()
}

pub fn number(rng: &mut dyn RandomSource) -> String {
    rng.below(100).to_string()
}

pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Text for an unclassified field, named after its first non-empty identifier.
pub fn sample_text(candidates: &[&str]) -> String {
    let subject = candidates
        .iter()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .unwrap_or("field");
    format!("Sample text for {}", subject)
}

pub fn textarea_text(candidates: &[&str]) -> String {
    let subject = candidates
        .iter()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .unwrap_or("textarea");
    format!(
        "Sample text for {} field. This is automatically generated content.",
        subject
    )
}
