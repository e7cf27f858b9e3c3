pub mod generators;
pub mod random;
pub mod resolver;
