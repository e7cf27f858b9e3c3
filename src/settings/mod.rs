pub mod settings_model;
pub mod store;
