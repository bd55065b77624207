// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `Name` trait: one contract layer shared by both representations.
//!
//! A name is an ordered sequence of raw string components plus a delimiter.
//! The trait splits that idea into two layers:
//!
//! 1. **Primitives** each representation supplies: `raw_component_count`,
//!    `raw_component`, `raw_components`, `delimiter`, `rebuild`, and
//!    `state_flaw`. These are contract-free and must not recurse into the
//!    checked operations.
//! 2. **Provided operations** implemented here once, in terms of the
//!    primitives. Every one of them brackets its work with invariant checks
//!    and routes every check through [`contract::enforce`], so escaping,
//!    equality, and hashing logic is never re-derived per representation.
//!
//! Mutation is pure: `set_component`, `insert`, `append`, `remove`, and
//! `concat` return a new owned value and leave the receiver (and any
//! argument) untouched. Equality and hashing are structural and
//! delimiter-independent — a name knows its components, not its rendering.
//!
//! | Operation         | Precondition        | Postcondition                    |
//! |-------------------|---------------------|----------------------------------|
//! | `component(i)`    | `i < count`         | —                                |
//! | `set_component`   | `i < count`         | component `i` equals argument    |
//! | `insert(i, c)`    | `i <= count`        | count +1, component `i` is `c`   |
//! | `append(c)`       | —                   | via `insert(count, c)`           |
//! | `remove(i)`       | `i < count`         | count −1, never negative         |
//! | `concat(other)`   | —                   | count = sum of operand counts    |
//! | `clone_name()`    | —                   | result equals the receiver       |

mod array;
mod string;

pub use array::ArrayName;
pub use string::StringName;

use std::borrow::Cow;

use crate::contract::{enforce, Category, ContractViolation};
use crate::grammar::{self, DEFAULT_DELIMITER};
use crate::types::Delimiter;

/// Structural, delimiter-independent comparison over the raw primitives.
///
/// Shared by `is_equal`, the `PartialEq` impls, and the clone postcondition.
pub(crate) fn structurally_equal<A: Name, B: Name>(a: &A, b: &B) -> bool {
    let count = a.raw_component_count();
    count == b.raw_component_count() && (0..count).all(|i| a.raw_component(i) == b.raw_component(i))
}

/// A hierarchical, delimiter-separated sequence of string components.
///
/// Implementations supply the raw primitives; all contract-checked behavior
/// is provided. See the module docs for the operation table.
pub trait Name: Sized {
    // =========================================================================
    // REPRESENTATION PRIMITIVES (contract-free)
    // =========================================================================

    /// Number of components, without contract checks.
    fn raw_component_count(&self) -> usize;

    /// The raw (unmasked) component at `i`, without contract checks.
    ///
    /// `i` must be in bounds; the checked operations guarantee that before
    /// calling down here.
    fn raw_component(&self, i: usize) -> Cow<'_, str>;

    /// All raw components, without contract checks.
    ///
    /// Representations with a cheaper bulk path than per-index access
    /// should override this.
    fn raw_components(&self) -> Vec<String> {
        (0..self.raw_component_count())
            .map(|i| self.raw_component(i).into_owned())
            .collect()
    }

    /// This name's configured delimiter.
    fn delimiter(&self) -> Delimiter;

    /// A new value of the same representation and delimiter, holding
    /// `components`.
    fn rebuild(&self, components: Vec<String>) -> Self;

    /// Describe the receiver's state corruption, if any.
    ///
    /// `None` means the invariant holds. Representations whose invalid
    /// states are unrepresentable simply return `None`.
    fn state_flaw(&self) -> Option<String>;

    // =========================================================================
    // CONTRACT BRACKETS
    // =========================================================================

    /// Assert the class invariant, dispatching any flaw by category.
    fn check_invariant(&self) -> Result<(), ContractViolation> {
        let flaw = self.state_flaw();
        enforce(
            Category::Invariant,
            flaw.is_some(),
            flaw.as_deref().unwrap_or_default(),
        )
    }

    /// Assert that `i` addresses a component (or, with `allow_end`, the
    /// append position one past the last component).
    fn check_index(&self, i: usize, allow_end: bool) -> Result<(), ContractViolation> {
        let count = self.raw_component_count();
        let out_of_bounds = if allow_end { i > count } else { i >= count };
        enforce(
            Category::Precondition,
            out_of_bounds,
            &format!("index {} out of bounds for {} components", i, count),
        )
    }

    /// Re-check the invariant on behalf of a caller.
    ///
    /// Corruption detected here was caused elsewhere, so it is reported as
    /// a [`ServiceFailure`](ContractViolation::ServiceFailure) wrapping the
    /// underlying invariant violation, not as an invariant violation of the
    /// servicing call.
    fn verify_in_service(&self, context: &str) -> Result<(), ContractViolation> {
        match self.check_invariant() {
            Ok(()) => Ok(()),
            Err(violation) => Err(ContractViolation::service_failure(
                format!("{}: name is no longer serviceable", context),
                violation,
            )),
        }
    }

    // =========================================================================
    // CHECKED OPERATIONS
    // =========================================================================

    /// Count of components.
    fn component_count(&self) -> Result<usize, ContractViolation> {
        self.check_invariant()?;
        let count = self.raw_component_count();
        self.check_invariant()?;
        Ok(count)
    }

    /// Whether this name has zero components.
    ///
    /// Distinct from having one empty component.
    fn is_empty(&self) -> Result<bool, ContractViolation> {
        Ok(self.component_count()? == 0)
    }

    /// The raw component at `i`.
    fn component(&self, i: usize) -> Result<String, ContractViolation> {
        self.check_invariant()?;
        self.check_index(i, false)?;
        let value = self.raw_component(i).into_owned();
        self.check_invariant()?;
        Ok(value)
    }

    /// A new name with component `i` replaced by `component`.
    fn set_component(&self, i: usize, component: &str) -> Result<Self, ContractViolation> {
        self.check_invariant()?;
        self.check_index(i, false)?;

        let mut components = self.raw_components();
        components[i] = component.to_string();
        let result = self.rebuild(components);

        result.check_invariant()?;
        enforce(
            Category::Postcondition,
            result.raw_component(i) != component,
            "replaced component does not match its argument",
        )?;
        self.check_invariant()?;
        Ok(result)
    }

    /// A new name with `component` inserted before index `i`.
    ///
    /// `i == count` is the append position.
    fn insert(&self, i: usize, component: &str) -> Result<Self, ContractViolation> {
        self.check_invariant()?;
        self.check_index(i, true)?;

        let before = self.raw_component_count();
        let mut components = self.raw_components();
        components.insert(i, component.to_string());
        let result = self.rebuild(components);

        result.check_invariant()?;
        enforce(
            Category::Postcondition,
            result.raw_component_count() != before + 1,
            "insert must grow the component count by one",
        )?;
        enforce(
            Category::Postcondition,
            result.raw_component(i) != component,
            "inserted component does not match its argument",
        )?;
        self.check_invariant()?;
        Ok(result)
    }

    /// A new name with `component` appended.
    fn append(&self, component: &str) -> Result<Self, ContractViolation> {
        self.insert(self.raw_component_count(), component)
    }

    /// A new name with component `i` deleted.
    fn remove(&self, i: usize) -> Result<Self, ContractViolation> {
        self.check_invariant()?;
        self.check_index(i, false)?;

        let before = self.raw_component_count();
        let mut components = self.raw_components();
        components.remove(i);
        let result = self.rebuild(components);

        result.check_invariant()?;
        enforce(
            Category::Postcondition,
            result.raw_component_count() + 1 != before,
            "remove must shrink the component count by exactly one",
        )?;
        self.check_invariant()?;
        Ok(result)
    }

    /// A new name with every component of `other` appended, in order.
    ///
    /// Both operands are left untouched; the result keeps the receiver's
    /// delimiter.
    fn concat<N: Name>(&self, other: &N) -> Result<Self, ContractViolation> {
        self.check_invariant()?;
        other.check_invariant()?;

        let own = self.raw_component_count();
        let theirs = other.raw_component_count();
        let mut components = self.raw_components();
        components.extend(other.raw_components());
        let result = self.rebuild(components);

        result.check_invariant()?;
        enforce(
            Category::Postcondition,
            result.raw_component_count() != own + theirs,
            "concatenation must carry both operands' components",
        )?;
        self.check_invariant()?;
        Ok(result)
    }

    /// Structural equality: same component count, pairwise-equal components.
    ///
    /// Delimiter-independent, and defined across representations — a
    /// string-backed name equals an array-backed name with the same
    /// components.
    fn is_equal<N: Name>(&self, other: &N) -> Result<bool, ContractViolation> {
        self.check_invariant()?;
        other.check_invariant()?;
        let equal = structurally_equal(self, other);
        self.check_invariant()?;
        Ok(equal)
    }

    /// A CRC-32 of the data-string encoding.
    ///
    /// Equal names produce equal codes, across representations and across
    /// repeated calls.
    fn hash_code(&self) -> Result<u32, ContractViolation> {
        self.check_invariant()?;
        let code = crc32fast::hash(self.raw_data_string().as_bytes());
        self.check_invariant()?;
        Ok(code)
    }

    /// A value equal to, but independent of, the receiver.
    fn clone_name(&self) -> Result<Self, ContractViolation> {
        self.check_invariant()?;
        let result = self.rebuild(self.raw_components());
        result.check_invariant()?;
        enforce(
            Category::Postcondition,
            !structurally_equal(self, &result),
            "clone must equal its original",
        )?;
        self.check_invariant()?;
        Ok(result)
    }

    /// Raw, unmasked join with this name's own delimiter.
    ///
    /// Lossy if components contain the delimiter, by design — this is the
    /// display form, not the serialization form.
    fn as_string(&self) -> Result<String, ContractViolation> {
        self.as_string_with(self.delimiter())
    }

    /// Raw, unmasked join with a caller-chosen delimiter.
    fn as_string_with(&self, delimiter: Delimiter) -> Result<String, ContractViolation> {
        self.check_invariant()?;
        let rendered = self
            .raw_components()
            .join(&delimiter.get().to_string());
        self.check_invariant()?;
        Ok(rendered)
    }

    /// Masked join with the canonical default delimiter.
    ///
    /// Re-parsing the result with matching unmasking rules reconstructs the
    /// same logical components, whatever this name's own delimiter is.
    fn as_data_string(&self) -> Result<String, ContractViolation> {
        self.check_invariant()?;
        let rendered = self.raw_data_string();
        self.check_invariant()?;
        Ok(rendered)
    }

    /// The data-string rendering without contract checks.
    ///
    /// Infallible; used by `Display` and `Hash` impls, which cannot report
    /// violations.
    fn raw_data_string(&self) -> String {
        grammar::join_masked(&self.raw_components(), DEFAULT_DELIMITER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait-level behavior that must hold whichever representation backs the
    // name. The representation-specific suites live in array.rs/string.rs,
    // and the cross-representation suite in lib.rs.

    fn names() -> (ArrayName, StringName) {
        let array = ArrayName::with_default_delimiter(vec!["oss".into(), "cs".into(), "de".into()]);
        let string = StringName::with_default_delimiter("oss.cs.de").unwrap();
        (array, string)
    }

    #[test]
    fn append_is_insert_at_the_end() {
        let (array, string) = names();

        let appended = array.append("www").unwrap();
        let inserted = array.insert(3, "www").unwrap();
        assert!(appended.is_equal(&inserted).unwrap());

        let appended = string.append("www").unwrap();
        assert_eq!(appended.as_string().unwrap(), "oss.cs.de.www");
    }

    #[test]
    fn insert_accepts_the_append_position_and_rejects_past_it() {
        let (array, string) = names();

        assert!(array.insert(3, "x").is_ok());
        let err = array.insert(4, "x").unwrap_err();
        assert!(matches!(err, ContractViolation::Precondition { .. }));

        assert!(string.insert(3, "x").is_ok());
        let err = string.insert(4, "x").unwrap_err();
        assert!(matches!(err, ContractViolation::Precondition { .. }));
    }

    #[test]
    fn component_and_remove_reject_the_append_position() {
        let (array, string) = names();

        assert!(matches!(
            array.component(3).unwrap_err(),
            ContractViolation::Precondition { .. }
        ));
        assert!(matches!(
            string.remove(3).unwrap_err(),
            ContractViolation::Precondition { .. }
        ));
    }

    #[test]
    fn mutators_leave_the_receiver_untouched() {
        let (array, string) = names();

        let _ = array.set_component(1, "x").unwrap();
        let _ = array.remove(0).unwrap();
        assert_eq!(array.as_string().unwrap(), "oss.cs.de");

        let _ = string.set_component(1, "x").unwrap();
        let _ = string.remove(0).unwrap();
        assert_eq!(string.as_string().unwrap(), "oss.cs.de");
    }

    #[test]
    fn concat_sums_component_counts_and_keeps_operands() {
        let (array, string) = names();

        let combined = array.concat(&string).unwrap();
        assert_eq!(combined.component_count().unwrap(), 6);
        assert_eq!(array.component_count().unwrap(), 3);
        assert_eq!(string.component_count().unwrap(), 3);
    }

    #[test]
    fn clone_name_equals_its_original() {
        let (array, string) = names();

        assert!(array.clone_name().unwrap().is_equal(&array).unwrap());
        assert!(string.clone_name().unwrap().is_equal(&string).unwrap());
    }

    #[test]
    fn verify_in_service_passes_for_consistent_state() {
        let (array, string) = names();
        assert!(array.verify_in_service("directory listing").is_ok());
        assert!(string.verify_in_service("directory listing").is_ok());
    }

    #[test]
    fn verify_in_service_wraps_corruption_in_a_service_failure() {
        let (_, mut string) = names();
        string.corrupt_text("oss.cs\\");

        let err = string.verify_in_service("directory listing").unwrap_err();
        assert!(matches!(err, ContractViolation::ServiceFailure { .. }));
        assert!(matches!(
            err.trigger(),
            Some(ContractViolation::Invariant { .. })
        ));
    }
}
