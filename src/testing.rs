//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so the cross-representation suites don't
//! each reinvent "the same name, built both ways".

#![doc(hidden)]

use crate::name::{ArrayName, StringName};
use crate::types::Delimiter;

/// Build an array-backed name over the canonical `.` delimiter.
pub fn array_name(components: &[&str]) -> ArrayName {
    ArrayName::with_default_delimiter(components.iter().map(|c| (*c).to_string()).collect())
}

/// Build a string-backed name over the canonical `.` delimiter.
///
/// Panics on ill-masked text; fixtures are trusted input.
pub fn string_name(text: &str) -> StringName {
    StringName::with_default_delimiter(text).expect("fixture text must be well-masked")
}

/// The same logical name, built through both representations.
pub fn twin_names(components: &[&str]) -> (ArrayName, StringName) {
    let array = array_name(components);
    let string = StringName::from_components(components, Delimiter::default());
    (array, string)
}
