//! Configuration management module

pub mod loader;
pub mod validation;

pub use loader::Config;
pub use validation::ConfigValidator;
