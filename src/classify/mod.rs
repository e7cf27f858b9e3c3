pub mod catalog;
pub mod classifier;
