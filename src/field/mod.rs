pub mod extractor;
pub mod field_model;
pub mod page;
