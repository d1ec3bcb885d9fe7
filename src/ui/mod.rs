//! Terminal and JSON output helpers for the binary

pub mod error;
pub mod json;
