//! Form field classification and fill-value resolution.
//!
//! A fill pass takes one field at a time through four stages:
//! descriptor extraction (`field::extractor`), classification against the
//! pattern catalog (`classify`), value resolution from the user profile or
//! synthetic data (`resolve`), and application to the live control
//! (`fill::filler`). `fill::pass` ties the stages together.

pub mod classify;
pub mod cli;
pub mod error;
pub mod field;
pub mod fill;
pub mod resolve;
pub mod settings;
pub mod trace;

pub use classify::classifier::classify;
pub use field::extractor::{FieldHandle, LabelLookup, extract_descriptor};
pub use field::field_model::{ControlKind, FieldDescriptor, SelectOption, SemanticFieldType};
pub use fill::fill_model::{FillOutcome, FillSummary};
pub use fill::pass::{FillPass, run_fill_pass};
pub use resolve::resolver::resolve;
pub use settings::settings_model::{FillStrategy, UserSettings};
