//! Hierarchical, delimiter-based name values with contract enforcement.
//!
//! This crate provides a small value abstraction: a *name* is an ordered
//! sequence of string components separated by a configurable delimiter,
//! where the delimiter or the escape character may appear literally inside
//! a component if masked. Two interchangeable representations back it, and
//! every public operation is bracketed by precondition, postcondition, and
//! invariant checks dispatched by category.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────────┐
//! │  grammar.rs │────▶│ name/mod.rs  │────▶│ name/array.rs        │
//! │ (mask,      │     │ (Name trait: │     │ name/string.rs       │
//! │  split)     │     │  contracts)  │     │ (representations)    │
//! └─────────────┘     └──────────────┘     └──────────────────────┘
//!        │                   │                        │
//!        ▼                   ▼                        ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        contract.rs                          │
//! │   (Category, ContractViolation, the enforce() dispatcher)   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # The two representations
//!
//! | Type         | Backing                          | Invariant checking       |
//! |--------------|----------------------------------|--------------------------|
//! | `ArrayName`  | pre-split `Vec<String>`          | unrepresentable states   |
//! | `StringName` | masked text + component count    | eager, every operation   |
//!
//! Both satisfy the same contract, render byte-identical data-strings for
//! equal content, compare equal across representations, and hash alike.
//!
//! # Usage
//!
//! ```
//! use nomen::{ArrayName, Name, StringName};
//!
//! let array = ArrayName::with_default_delimiter(vec!["oss".into(), "fau.de".into()]);
//! let string = StringName::with_default_delimiter("oss.fau\\.de")?;
//!
//! assert!(array.is_equal(&string)?);
//! assert_eq!(array.as_data_string()?, "oss.fau\\.de");
//! assert_eq!(string.component(1)?, "fau.de");
//!
//! // Mutation is pure: the receiver is never touched.
//! let renamed = string.set_component(0, "www")?;
//! assert_eq!(string.as_string()?, "oss.fau.de");
//! assert_eq!(renamed.as_string()?, "www.fau.de");
//! # Ok::<(), nomen::ContractViolation>(())
//! ```

// Module declarations
pub mod contract;
pub mod grammar;
mod name;
#[doc(hidden)]
pub mod testing;
mod types;

// Re-exports for public API
pub use contract::{enforce, Category, ContractViolation};
pub use grammar::{
    join_masked, mask, split_masked, unmask, GrammarError, DEFAULT_DELIMITER, ESCAPE_CHARACTER,
};
pub use name::{ArrayName, Name, StringName};
pub use types::Delimiter;
