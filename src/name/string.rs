// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The string-backed representation: one delimited text, parsed on demand.
//!
//! `StringName` keeps its components masked relative to — and joined with —
//! the name's *own* delimiter, exactly as a caller would hand them in, plus
//! an explicit component count. The count is what makes the empty text
//! unambiguous: `("", 0)` is the zero-component name, `("", 1)` is one empty
//! component. Without it the two states collapse into the same backing
//! string and the representation could not honor the distinction the
//! array-backed form expresses naturally.
//!
//! Parsing text follows the mature reading: empty input denotes one empty
//! component. The zero-component state is reachable through
//! [`StringName::empty`], through `remove` of the last component, or through
//! conversion from an empty [`ArrayName`].
//!
//! Unlike the array-backed form, this representation *can* hold corrupt
//! state — a backing text with a dangling escape, or a count that disagrees
//! with the text (say, smuggled in through deserialization). `state_flaw`
//! validates eagerly, so every checked operation reports such corruption as
//! an invariant violation before touching the text.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::contract::ContractViolation;
use crate::grammar;
use crate::name::{structurally_equal, ArrayName, Name};
use crate::types::Delimiter;

/// A name backed by a single delimited string, split on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringName {
    text: String,
    components: usize,
    delimiter: Delimiter,
}

impl StringName {
    /// Parse masked, delimiter-joined text into a name.
    ///
    /// The text is taken as masked relative to `delimiter`: `\.` is a
    /// literal dot inside a component, `\\` a literal escape, and every
    /// unescaped delimiter separates components. For text without escapes
    /// this is a plain split. Ill-masked text is a precondition violation.
    ///
    /// Empty text denotes one empty component.
    pub fn new(text: &str, delimiter: Delimiter) -> Result<Self, ContractViolation> {
        let components = match grammar::component_count(text, delimiter.get()) {
            Ok(count) => count,
            Err(flaw) => {
                return Err(ContractViolation::precondition(format!(
                    "ill-masked name text: {}",
                    flaw
                )))
            }
        };

        Ok(StringName {
            text: text.to_string(),
            components,
            delimiter,
        })
    }

    /// Parse text with the canonical `.` delimiter.
    pub fn with_default_delimiter(text: &str) -> Result<Self, ContractViolation> {
        StringName::new(text, Delimiter::default())
    }

    /// The zero-component name.
    pub fn empty(delimiter: Delimiter) -> Self {
        StringName {
            text: String::new(),
            components: 0,
            delimiter,
        }
    }

    /// Build from raw components, masking each relative to `delimiter`.
    pub fn from_components<S: AsRef<str>>(components: &[S], delimiter: Delimiter) -> Self {
        StringName {
            text: grammar::join_masked(components, delimiter.get()),
            components: components.len(),
            delimiter,
        }
    }

    #[cfg(test)]
    pub(crate) fn corrupt_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[cfg(test)]
    pub(crate) fn corrupt_count(&mut self, components: usize) {
        self.components = components;
    }
}

impl Name for StringName {
    fn raw_component_count(&self) -> usize {
        self.components
    }

    // Parse-on-demand accessors. These are contract-free and must not fail:
    // corruption is reported by state_flaw before any checked operation gets
    // here, so the fallbacks below are unreachable through the public API.

    fn raw_component(&self, i: usize) -> Cow<'_, str> {
        match grammar::split_masked(&self.text, self.delimiter.get()) {
            Ok(mut parts) if i < parts.len() => Cow::Owned(parts.swap_remove(i)),
            _ => Cow::Borrowed(""),
        }
    }

    fn raw_components(&self) -> Vec<String> {
        if self.components == 0 {
            return Vec::new();
        }
        grammar::split_masked(&self.text, self.delimiter.get()).unwrap_or_default()
    }

    fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    fn rebuild(&self, components: Vec<String>) -> Self {
        StringName::from_components(&components, self.delimiter)
    }

    fn state_flaw(&self) -> Option<String> {
        let parsed = match grammar::component_count(&self.text, self.delimiter.get()) {
            Ok(count) => count,
            Err(flaw) => return Some(format!("backing text is ill-masked: {}", flaw)),
        };

        // Empty text legitimately reads as zero components or one empty
        // component; the count field picks the reading.
        let consistent = if self.text.is_empty() {
            self.components <= 1
        } else {
            self.components == parsed
        };

        if consistent {
            None
        } else {
            Some(format!(
                "component count {} disagrees with backing text ({} parsed)",
                self.components, parsed
            ))
        }
    }
}

impl PartialEq for StringName {
    fn eq(&self, other: &Self) -> bool {
        structurally_equal(self, other)
    }
}

impl Eq for StringName {}

impl PartialEq<ArrayName> for StringName {
    fn eq(&self, other: &ArrayName) -> bool {
        structurally_equal(self, other)
    }
}

impl Hash for StringName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(self.raw_data_string().as_bytes());
    }
}

impl fmt::Display for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_data_string())
    }
}

impl From<&ArrayName> for StringName {
    fn from(name: &ArrayName) -> Self {
        StringName::from_components(name.components(), name.delimiter())
    }
}
