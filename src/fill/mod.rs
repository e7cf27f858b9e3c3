pub mod fill_model;
pub mod filler;
pub mod notify;
pub mod pass;
