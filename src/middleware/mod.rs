//! Middleware module
//!
//! Contains HTTP middleware for request logging

pub mod logging;
