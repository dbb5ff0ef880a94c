//! Utility modules
//!
//! Pure helper functions for validation and formatting.

pub mod formatting;
pub mod validation;
