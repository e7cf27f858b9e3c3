use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::field::extractor::{FieldHandle, LabelLookup};
use crate::field::field_model::SelectOption;

/// Input types never offered to a fill pass.
const NON_CANDIDATE_TYPES: [&str; 5] = ["hidden", "submit", "button", "reset", "image"];

/// One form control as captured by the page extraction script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageField {
    pub tag: String,
    pub r#type: Option<String>,
    pub name: Option<String>,
    pub id: Option<String>,
    pub placeholder: Option<String>,
    pub aria_label: Option<String>,
    pub autocomplete: Option<String>,
    pub value: String,
    pub checked: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub options: Vec<SelectOption>,
    pub selected_index: Option<usize>,
    /// Text of the enclosing `<label>` element, when the control sits inside one.
    pub ancestor_label: Option<String>,
    pub form_id: Option<String>,
}

impl PageField {
    pub fn input(input_type: &str) -> Self {
        Self {
            tag: "input".into(),
            r#type: Some(input_type.into()),
            ..Default::default()
        }
    }

    pub fn textarea() -> Self {
        Self {
            tag: "textarea".into(),
            ..Default::default()
        }
    }

    pub fn select(options: Vec<SelectOption>) -> Self {
        Self {
            tag: "select".into(),
            options,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_autocomplete(mut self, autocomplete: &str) -> Self {
        self.autocomplete = Some(autocomplete.into());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.into();
        self
    }

    pub fn in_form(mut self, form_id: &str) -> Self {
        self.form_id = Some(form_id.into());
        self
    }

    /// Whether a page scan offers this element to a fill pass.
    pub fn is_candidate(&self) -> bool {
        match self.tag.to_lowercase().as_str() {
            "textarea" | "select" => true,
            "input" => {
                let t = self.r#type.as_deref().unwrap_or("").to_lowercase();
                !NON_CANDIDATE_TYPES.contains(&t.as_str())
            }
            _ => false,
        }
    }

    fn is_radio(&self) -> bool {
        self.tag.eq_ignore_ascii_case("input")
            && self
                .r#type
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case("radio"))
    }

    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.selected_index.and_then(|i| self.options.get(i))
    }
}

impl FieldHandle for PageField {
    fn tag_name(&self) -> String {
        self.tag.clone()
    }

    fn input_type(&self) -> String {
        self.r#type.clone().unwrap_or_default()
    }

    fn name(&self) -> String {
        self.name.clone().unwrap_or_default()
    }

    fn id(&self) -> String {
        self.id.clone().unwrap_or_default()
    }

    fn placeholder(&self) -> String {
        self.placeholder.clone().unwrap_or_default()
    }

    fn aria_label(&self) -> String {
        self.aria_label.clone().unwrap_or_default()
    }

    fn autocomplete(&self) -> String {
        self.autocomplete.clone().unwrap_or_default()
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn checked(&self) -> bool {
        self.checked
    }

    fn disabled(&self) -> bool {
        self.disabled
    }

    fn read_only(&self) -> bool {
        self.read_only
    }

    fn ancestor_label(&self) -> Option<String> {
        self.ancestor_label.clone()
    }

    fn options(&self) -> Vec<SelectOption> {
        self.options.clone()
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    fn set_selected_index(&mut self, index: usize) {
        if let Some(option) = self.options.get(index) {
            self.value = option.value.clone();
            self.selected_index = Some(index);
        }
    }
}

/// A `<label for=...>` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelElement {
    pub for_id: String,
    pub text: String,
}

/// Label elements of a page, looked up by their `for` attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelIndex(pub Vec<LabelElement>);

impl LabelLookup for LabelIndex {
    fn label_for(&self, id: &str) -> Option<String> {
        self.0
            .iter()
            .find(|l| l.for_id == id)
            .map(|l| l.text.clone())
    }
}

/// Which fields of a page a pass should touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillScope {
    Page,
    Container(String),
}

/// Fields and labels of one page, as captured by the extraction script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSnapshot {
    pub url: Option<String>,
    pub title: String,
    pub labels: LabelIndex,
    pub fields: Vec<PageField>,
}

impl PageSnapshot {
    /// Scope for a trigger: the trigger's form when not filling everything.
    pub fn scope_for_trigger(&self, trigger_id: Option<&str>, fill_all_fields: bool) -> FillScope {
        if fill_all_fields {
            return FillScope::Page;
        }

        trigger_id
            .and_then(|id| self.fields.iter().find(|f| f.id.as_deref() == Some(id)))
            .and_then(|f| f.form_id.clone())
            .map(FillScope::Container)
            .unwrap_or(FillScope::Page)
    }

    /// Leave at most one checked radio per `name` within a form, keeping the
    /// last in document order, as sequential clicks in a browser would.
    pub fn settle_radio_groups(&mut self) {
        let mut seen: HashSet<(String, Option<String>)> = HashSet::new();

        for field in self.fields.iter_mut().rev() {
            if !field.checked || !field.is_radio() {
                continue;
            }
            let Some(name) = field.name.clone().filter(|n| !n.is_empty()) else {
                continue;
            };
            if !seen.insert((name, field.form_id.clone())) {
                field.checked = false;
            }
        }
    }
}

/// Mutable candidates within scope, in document order.
pub fn select_targets<'a>(fields: &'a mut [PageField], scope: &FillScope) -> Vec<&'a mut PageField> {
    fields
        .iter_mut()
        .filter(|f| f.is_candidate())
        .filter(|f| match scope {
            FillScope::Page => true,
            FillScope::Container(form) => f.form_id.as_deref() == Some(form.as_str()),
        })
        .collect()
}
