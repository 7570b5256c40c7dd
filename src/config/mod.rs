//! Configuration management module
//!
//! Responsible for loading and validating application configuration from
//! environment variables and an optional .env file

pub mod settings;

pub use settings::Settings;
