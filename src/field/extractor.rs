use crate::field::field_model::{ControlKind, FieldDescriptor, SelectOption};

// ============================================================================
// Live field contract
// ============================================================================

/// DOM-like accessors and mutators for one live form control.
///
/// Accessors return empty strings for absent attributes. `tag_name` and
/// `input_type` may be returned in any case; the extractor lower-cases them.
pub trait FieldHandle {
    fn tag_name(&self) -> String;
    fn input_type(&self) -> String;
    fn name(&self) -> String;
    fn id(&self) -> String;
    fn placeholder(&self) -> String;
    fn aria_label(&self) -> String;
    fn autocomplete(&self) -> String;
    fn value(&self) -> String;
    fn checked(&self) -> bool;
    fn disabled(&self) -> bool;
    fn read_only(&self) -> bool;

    /// Text of the nearest enclosing `<label>`, if any.
    fn ancestor_label(&self) -> Option<String>;

    /// Options of a select element; empty for everything else.
    fn options(&self) -> Vec<SelectOption>;

    /// Explicitly selected option of a select element.
    fn selected_index(&self) -> Option<usize>;

    fn set_value(&mut self, value: &str);
    fn set_checked(&mut self, checked: bool);
    fn set_selected_index(&mut self, index: usize);
}

/// Resolves `<label for=id>` elements on the page.
pub trait LabelLookup {
    fn label_for(&self, id: &str) -> Option<String>;
}

/// Lookup for pages without any `<label for>` elements.
pub struct NoLabels;

impl LabelLookup for NoLabels {
    fn label_for(&self, _id: &str) -> Option<String> {
        None
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Lower-case and drop every character outside `[a-z0-9]`.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

/// Label text: `label[for=id]`, enclosing label, aria-label, placeholder.
pub fn resolve_label<H: FieldHandle + ?Sized>(field: &H, labels: &dyn LabelLookup) -> String {
    let id = field.id();

    let explicit = if id.is_empty() {
        None
    } else {
        non_blank(labels.label_for(&id))
    };

    explicit
        .or_else(|| non_blank(field.ancestor_label()))
        .or_else(|| non_blank(Some(field.aria_label())))
        .or_else(|| non_blank(Some(field.placeholder())))
        .unwrap_or_default()
}

fn current_value<H: FieldHandle + ?Sized>(field: &H, control: &ControlKind, options: &[SelectOption]) -> String {
    match control {
        // a checked box is never blank; "on" is the DOM default value
        ControlKind::Checkbox | ControlKind::Radio => {
            if !field.checked() {
                String::new()
            } else {
                let value = field.value();
                if value.trim().is_empty() { "on".to_string() } else { value }
            }
        }
        ControlKind::Select => field
            .selected_index()
            .and_then(|i| options.get(i))
            .map(|o| o.value.clone())
            .unwrap_or_default(),
        _ => field.value(),
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Build a fresh descriptor from the live field.
pub fn extract_descriptor<H: FieldHandle + ?Sized>(field: &H, labels: &dyn LabelLookup) -> FieldDescriptor {
    let tag_name = field.tag_name().to_lowercase();
    let input_type = field.input_type().to_lowercase();
    let control = ControlKind::from_element(&tag_name, &input_type);

    let name = field.name();
    let id = field.id();
    let placeholder = field.placeholder();
    let autocomplete = field.autocomplete();
    let label_text = resolve_label(field, labels);

    let haystack = [&name, &id, &placeholder, &label_text, &autocomplete]
        .iter()
        .map(|s| normalize(s))
        .collect::<String>();

    let options = if control == ControlKind::Select {
        Some(field.options())
    } else {
        None
    };

    let current_value = current_value(field, &control, options.as_deref().unwrap_or(&[]));

    FieldDescriptor {
        tag_name,
        input_type,
        control,
        name,
        id,
        placeholder,
        aria_label: field.aria_label(),
        label_text,
        autocomplete,
        current_value,
        checked: field.checked(),
        disabled: field.disabled(),
        read_only: field.read_only(),
        options,
        haystack,
    }
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn normalize_collapses_punctuation() {
        assert_eq!(normalize("E-Mail"), "email");
        assert_eq!(normalize("first_name"), "firstname");
        assert_eq!(normalize("Zip Code #2"), "zipcode2");
        assert_eq!(normalize("  "), "");
    }
}
