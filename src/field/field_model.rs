use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Control kinds
// ============================================================================

/// Native control kind, derived from the element's tag name and input type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlKind {
    Text,
    Email,
    Tel,
    Url,
    Search,
    Password,
    Checkbox,
    Radio,
    Date,
    Number,
    Textarea,
    Select,
    Unsupported(String),
}

impl ControlKind {
    pub fn from_element(tag_name: &str, input_type: &str) -> Self {
        match tag_name {
            "textarea" => return ControlKind::Textarea,
            "select" => return ControlKind::Select,
            "input" => {}
            other => return ControlKind::Unsupported(other.to_string()),
        }

        match input_type {
            "" | "text" => ControlKind::Text,
            "email" => ControlKind::Email,
            "tel" => ControlKind::Tel,
            "url" => ControlKind::Url,
            "search" => ControlKind::Search,
            "password" => ControlKind::Password,
            "checkbox" => ControlKind::Checkbox,
            "radio" => ControlKind::Radio,
            "date" => ControlKind::Date,
            "number" => ControlKind::Number,
            other => ControlKind::Unsupported(other.to_string()),
        }
    }

    /// Controls that take a typed string value verbatim.
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            ControlKind::Text
                | ControlKind::Email
                | ControlKind::Tel
                | ControlKind::Url
                | ControlKind::Search
                | ControlKind::Password
        )
    }
}

// ============================================================================
// Semantic field types
// ============================================================================

/// Inferred real-world meaning of a field. A field carries at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SemanticFieldType {
    FirstName,
    LastName,
    FullName,
    Email,
    Phone,
    LinkedIn,
    StreetAddress,
    City,
    State,
    ZipCode,
    Country,
    Password,
    GenericText,
    Date,
    Number,
    Checkbox,
    Radio,
}

impl SemanticFieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticFieldType::FirstName => "firstName",
            SemanticFieldType::LastName => "lastName",
            SemanticFieldType::FullName => "fullName",
            SemanticFieldType::Email => "email",
            SemanticFieldType::Phone => "phone",
            SemanticFieldType::LinkedIn => "linkedIn",
            SemanticFieldType::StreetAddress => "streetAddress",
            SemanticFieldType::City => "city",
            SemanticFieldType::State => "state",
            SemanticFieldType::ZipCode => "zipCode",
            SemanticFieldType::Country => "country",
            SemanticFieldType::Password => "password",
            SemanticFieldType::GenericText => "genericText",
            SemanticFieldType::Date => "date",
            SemanticFieldType::Number => "number",
            SemanticFieldType::Checkbox => "checkbox",
            SemanticFieldType::Radio => "radio",
        }
    }
}

impl fmt::Display for SemanticFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ============================================================================
// Field descriptor
// ============================================================================

/// One `<option>` of a select element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub text: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

/// Read-only view of one page element, rebuilt for every classification.
///
/// Free-text attributes keep their original case; `haystack` holds the
/// normalized concatenation used for pattern matching.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub tag_name: String,
    pub input_type: String,
    pub control: ControlKind,
    pub name: String,
    pub id: String,
    pub placeholder: String,
    pub aria_label: String,
    pub label_text: String,
    pub autocomplete: String,
    pub current_value: String,
    pub checked: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub options: Option<Vec<SelectOption>>,
    pub haystack: String,
}

impl FieldDescriptor {
    pub fn has_value(&self) -> bool {
        !self.current_value.trim().is_empty()
    }

    /// Short human-readable key: id, then name, then tag.
    pub fn key(&self) -> String {
        if !self.id.is_empty() {
            format!("#{}", self.id)
        } else if !self.name.is_empty() {
            format!("[name={}]", self.name)
        } else {
            self.tag_name.clone()
        }
    }
}
