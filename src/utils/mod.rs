//! Utilities module
//!
//! Contains error handling and other utility tools

pub mod error;
