use crate::field::field_model::SemanticFieldType;

/// Matching cues for one semantic type.
///
/// Include, exclude and autocomplete patterns are compared against normalized
/// text (`[a-z0-9]` only). Label phrases are compared against the lower-cased
/// label text, spaces included.
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub field_type: SemanticFieldType,
    pub include: &'static [&'static str],
    pub exclude: &'static [&'static str],
    pub autocomplete_hints: &'static [&'static str],
    pub label_phrases: &'static [&'static str],
    pub exact_input_type: Option<&'static str>,
}

/// Rules in evaluation order. The first matching rule wins, so reordering
/// entries changes classification results.
pub static CATALOG: &[PatternRule] = &[
    PatternRule {
        field_type: SemanticFieldType::FirstName,
        include: &["firstname", "fname", "givenname", "forename"],
        exclude: &["lastname", "lname", "surname", "familyname"],
        autocomplete_hints: &["givenname"],
        label_phrases: &["first name", "given name", "forename"],
        exact_input_type: None,
    },
    PatternRule {
        field_type: SemanticFieldType::LastName,
        include: &["lastname", "lname", "surname", "familyname"],
        // "fullname" contains "lname"
        exclude: &["firstname", "fname", "givenname", "fullname"],
        autocomplete_hints: &["familyname"],
        label_phrases: &["last name", "family name", "surname"],
        exact_input_type: None,
    },
    PatternRule {
        field_type: SemanticFieldType::Email,
        include: &["email", "courriel"],
        exclude: &[],
        autocomplete_hints: &["email"],
        label_phrases: &["email", "e-mail"],
        exact_input_type: Some("email"),
    },
    PatternRule {
        field_type: SemanticFieldType::Phone,
        include: &["phone", "mobile", "telephone", "cellnumber"],
        exclude: &[],
        autocomplete_hints: &["tel"],
        label_phrases: &["phone", "mobile"],
        exact_input_type: Some("tel"),
    },
    PatternRule {
        field_type: SemanticFieldType::LinkedIn,
        include: &["linkedin"],
        exclude: &[],
        autocomplete_hints: &[],
        label_phrases: &["linkedin"],
        exact_input_type: None,
    },
    PatternRule {
        field_type: SemanticFieldType::StreetAddress,
        include: &["street", "addressline", "address1", "address"],
        // "address-level1/2" autocomplete tokens belong to state and city
        exclude: &["email", "ipaddress", "addresslevel"],
        autocomplete_hints: &["streetaddress", "addressline1"],
        label_phrases: &["street", "address"],
        exact_input_type: None,
    },
    PatternRule {
        field_type: SemanticFieldType::City,
        include: &["city", "town", "locality"],
        exclude: &[],
        autocomplete_hints: &["addresslevel2"],
        label_phrases: &["city", "town"],
        exact_input_type: None,
    },
    PatternRule {
        field_type: SemanticFieldType::State,
        include: &["state", "province", "region"],
        // "United States" placeholders on country fields
        exclude: &["country", "statement"],
        autocomplete_hints: &["addresslevel1"],
        label_phrases: &["state", "province", "region"],
        exact_input_type: None,
    },
    PatternRule {
        field_type: SemanticFieldType::ZipCode,
        include: &["zip", "postal", "postcode"],
        exclude: &[],
        autocomplete_hints: &["postalcode"],
        label_phrases: &["zip", "postal code", "postcode"],
        exact_input_type: None,
    },
    PatternRule {
        field_type: SemanticFieldType::Country,
        include: &["country"],
        exclude: &[],
        autocomplete_hints: &["country", "countryname"],
        label_phrases: &["country"],
        exact_input_type: None,
    },
    PatternRule {
        field_type: SemanticFieldType::Password,
        include: &["password", "passwd", "pwd"],
        exclude: &[],
        autocomplete_hints: &["currentpassword", "newpassword"],
        label_phrases: &["password"],
        exact_input_type: Some("password"),
    },
    PatternRule {
        field_type: SemanticFieldType::FullName,
        include: &["fullname", "name"],
        exclude: &["username", "company", "organization", "nickname", "filename"],
        autocomplete_hints: &["name"],
        label_phrases: &["full name", "your name", "name"],
        exact_input_type: None,
    },
    PatternRule {
        field_type: SemanticFieldType::Date,
        include: &["birthdate", "dateofbirth"],
        exclude: &[],
        autocomplete_hints: &["bday"],
        label_phrases: &["date of birth", "birth date"],
        exact_input_type: Some("date"),
    },
    PatternRule {
        field_type: SemanticFieldType::Number,
        include: &["quantity"],
        exclude: &[],
        autocomplete_hints: &[],
        label_phrases: &["quantity"],
        exact_input_type: Some("number"),
    },
    PatternRule {
        field_type: SemanticFieldType::Checkbox,
        include: &[],
        exclude: &[],
        autocomplete_hints: &[],
        label_phrases: &[],
        exact_input_type: Some("checkbox"),
    },
    PatternRule {
        field_type: SemanticFieldType::Radio,
        include: &[],
        exclude: &[],
        autocomplete_hints: &[],
        label_phrases: &[],
        exact_input_type: Some("radio"),
    },
];

pub fn rule_for(field_type: SemanticFieldType) -> Option<&'static PatternRule> {
    CATALOG.iter().find(|r| r.field_type == field_type)
}
