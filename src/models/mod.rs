//! Data models module
//!
//! Defines the trip planning contract and the Gemini API wire types

pub mod gemini;
pub mod trip;
