// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks shared by both name representations.
//!
//! The one type that matters here is [`Delimiter`]: a validated newtype over
//! `char`. Rather than trusting every call site to remember that the escape
//! character cannot delimit, the check happens once at construction and the
//! type carries the proof from there on.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Delimiter**: never the escape character `\`. A delimiter equal to the
//!   escape character would make `\\` ambiguous between "escaped escape" and
//!   "escaped delimiter", and the grammar unreadable.
//! - **Delimiter**: never empty — guaranteed by `char` itself.
//!
//! Serde deserialization goes through the same validation
//! (`try_from = "char"`), so a bad delimiter cannot be smuggled in through a
//! serialized name either.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::contract::ContractViolation;
use crate::grammar::{DEFAULT_DELIMITER, ESCAPE_CHARACTER};

/// A validated component delimiter.
///
/// Use [`Delimiter::try_new`] for runtime-validated construction; `default()`
/// gives the canonical `.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
#[repr(transparent)]
pub struct Delimiter(char);

impl Delimiter {
    /// Create a delimiter, rejecting the escape character.
    pub fn try_new(delimiter: char) -> Result<Self, ContractViolation> {
        if delimiter == ESCAPE_CHARACTER {
            return Err(ContractViolation::precondition(format!(
                "delimiter must not be the escape character {:?}",
                ESCAPE_CHARACTER
            )));
        }
        Ok(Delimiter(delimiter))
    }

    /// Get the underlying character.
    #[inline]
    pub fn get(self) -> char {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter(DEFAULT_DELIMITER)
    }
}

impl TryFrom<char> for Delimiter {
    type Error = ContractViolation;

    fn try_from(delimiter: char) -> Result<Self, Self::Error> {
        Delimiter::try_new(delimiter)
    }
}

impl From<Delimiter> for char {
    fn from(delimiter: Delimiter) -> Self {
        delimiter.0
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
