// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The array-backed representation: components stored pre-split.
//!
//! `ArrayName` holds its components as a `Vec<String>` of raw, unmasked
//! strings. Any string is a valid component — including the empty string —
//! so the component invariant is guaranteed by construction rather than
//! checked at runtime. The zero-component name is the empty vector, a state
//! distinct from one empty component.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::contract::ContractViolation;
use crate::grammar::{self, DEFAULT_DELIMITER};
use crate::name::{structurally_equal, Name, StringName};
use crate::types::Delimiter;

/// A name backed by a pre-split component array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrayName {
    components: Vec<String>,
    delimiter: Delimiter,
}

impl ArrayName {
    /// A name over raw components with the given delimiter.
    pub fn new(components: Vec<String>, delimiter: Delimiter) -> Self {
        ArrayName {
            components,
            delimiter,
        }
    }

    /// A name over raw components with the canonical `.` delimiter.
    pub fn with_default_delimiter(components: Vec<String>) -> Self {
        ArrayName::new(components, Delimiter::default())
    }

    /// The zero-component name.
    pub fn empty(delimiter: Delimiter) -> Self {
        ArrayName::new(Vec::new(), delimiter)
    }

    /// Parse a data-string (masked, `.`-joined) back into components.
    ///
    /// Ill-masked input is a precondition violation. Empty input denotes one
    /// empty component; the zero-component name has no data-string spelling
    /// of its own and is only reachable through [`ArrayName::empty`].
    pub fn from_data_string(text: &str) -> Result<Self, ContractViolation> {
        match grammar::split_masked(text, DEFAULT_DELIMITER) {
            Ok(components) => Ok(ArrayName::with_default_delimiter(components)),
            Err(flaw) => Err(ContractViolation::precondition(format!(
                "ill-masked data string: {}",
                flaw
            ))),
        }
    }

    /// The raw components, in order.
    pub fn components(&self) -> &[String] {
        &self.components
    }
}

impl Name for ArrayName {
    fn raw_component_count(&self) -> usize {
        self.components.len()
    }

    fn raw_component(&self, i: usize) -> Cow<'_, str> {
        Cow::Borrowed(self.components[i].as_str())
    }

    fn raw_components(&self) -> Vec<String> {
        self.components.clone()
    }

    fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    fn rebuild(&self, components: Vec<String>) -> Self {
        ArrayName::new(components, self.delimiter)
    }

    // Raw strings are unconstrained and the delimiter is validated by its
    // type: invalid states are unrepresentable here.
    fn state_flaw(&self) -> Option<String> {
        None
    }
}

impl PartialEq for ArrayName {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for ArrayName {}

impl PartialEq<StringName> for ArrayName {
    fn eq(&self, other: &StringName) -> bool {
        structurally_equal(self, other)
    }
}

impl Hash for ArrayName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(self.raw_data_string().as_bytes());
    }
}

impl fmt::Display for ArrayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_data_string())
    }
}

impl From<&StringName> for ArrayName {
    fn from(name: &StringName) -> Self {
        ArrayName::new(name.raw_components(), name.delimiter())
    }
}
