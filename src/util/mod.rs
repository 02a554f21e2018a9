//! Utility functions.
//!
//! This module provides helpers for rendering read values as text.

mod formatters;

pub use formatters::{format_scalar, format_value};
