// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The contract layer: violation taxonomy and the assertion dispatcher.
//!
//! Every precondition, postcondition, and invariant check in this crate flows
//! through [`enforce`]. Call sites state *which* contract they are checking
//! via [`Category`]; the mapping from category to violation kind lives here
//! and nowhere else. Tests can therefore assert on the category of a failure
//! without caring which representation produced it.
//!
//! # Taxonomy
//!
//! | Variant          | Meaning                                    | Who is at fault   |
//! |------------------|--------------------------------------------|-------------------|
//! | `Precondition`   | bad index, ill-masked input                | the caller        |
//! | `Postcondition`  | an operation broke its own guarantee       | this crate        |
//! | `Invariant`      | internal state is corrupt                  | whoever bypassed the constructors |
//! | `ServiceFailure` | corruption observed while serving a caller | see its trigger   |
//!
//! Violations are values, not panics. Nothing in this crate recovers from
//! one — detection and reporting are the contract's job, and every operation
//! surfaces the violation to its immediate caller through `Result`.

use std::fmt;

/// The three contract categories a check can state.
///
/// `ServiceFailure` is deliberately absent: it is never dispatched directly,
/// only constructed by wrapping an `Invariant` violation after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// The caller handed us something the operation does not accept.
    Precondition,
    /// The operation's result fails its stated guarantee.
    Postcondition,
    /// The receiver's internal state is inconsistent.
    Invariant,
}

/// A contract violation, tagged by category.
///
/// Each variant carries a human-readable message; `ServiceFailure`
/// additionally embeds the [`Invariant`](ContractViolation::Invariant)
/// violation that triggered it, so diagnostics chain through
/// [`std::error::Error::source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// Caller error. Never recovered internally, always surfaced as-is.
    Precondition { message: String },
    /// Implementation defect: a result failed its own postcondition.
    Postcondition { message: String },
    /// Corrupted internal state, detected by the object itself.
    Invariant { message: String },
    /// An invariant breach observed from *outside* the method that caused
    /// it, e.g. discovered while servicing an unrelated call. The trigger
    /// is the originating invariant violation.
    ServiceFailure {
        message: String,
        trigger: Box<ContractViolation>,
    },
}

impl ContractViolation {
    /// Shorthand constructor for a precondition violation.
    pub fn precondition(message: impl Into<String>) -> Self {
        ContractViolation::Precondition {
            message: message.into(),
        }
    }

    /// Shorthand constructor for a postcondition violation.
    pub fn postcondition(message: impl Into<String>) -> Self {
        ContractViolation::Postcondition {
            message: message.into(),
        }
    }

    /// Shorthand constructor for an invariant violation.
    pub fn invariant(message: impl Into<String>) -> Self {
        ContractViolation::Invariant {
            message: message.into(),
        }
    }

    /// Wrap an invariant violation observed on behalf of a caller.
    ///
    /// The trigger must be an `Invariant` violation — a service failure
    /// reports corruption someone else caused, nothing more.
    pub fn service_failure(message: impl Into<String>, trigger: ContractViolation) -> Self {
        debug_assert!(
            matches!(trigger, ContractViolation::Invariant { .. }),
            "service failure must be triggered by an invariant violation"
        );
        ContractViolation::ServiceFailure {
            message: message.into(),
            trigger: Box::new(trigger),
        }
    }

    /// The human-readable message, without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            ContractViolation::Precondition { message }
            | ContractViolation::Postcondition { message }
            | ContractViolation::Invariant { message }
            | ContractViolation::ServiceFailure { message, .. } => message,
        }
    }

    /// Whether a lower-level violation is chained to this one.
    pub fn has_trigger(&self) -> bool {
        self.trigger().is_some()
    }

    /// The chained lower-level violation, if any.
    pub fn trigger(&self) -> Option<&ContractViolation> {
        match self {
            ContractViolation::ServiceFailure { trigger, .. } => Some(trigger),
            _ => None,
        }
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::Precondition { message } => {
                write!(f, "precondition violated: {}", message)
            }
            ContractViolation::Postcondition { message } => {
                write!(f, "postcondition violated: {}", message)
            }
            ContractViolation::Invariant { message } => {
                write!(f, "invariant violated: {}", message)
            }
            ContractViolation::ServiceFailure { message, trigger } => {
                write!(f, "service failure: {} ({})", message, trigger)
            }
        }
    }
}

impl std::error::Error for ContractViolation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContractViolation::ServiceFailure { trigger, .. } => Some(trigger.as_ref()),
            _ => None,
        }
    }
}

/// The assertion dispatcher.
///
/// A no-op when `violated` is false; otherwise produces the violation kind
/// bound to `category`. The mapping is fixed and total:
/// precondition → `Precondition`, postcondition → `Postcondition`,
/// invariant → `Invariant`.
///
/// # Example
///
/// ```
/// use nomen::contract::{enforce, Category, ContractViolation};
///
/// assert!(enforce(Category::Precondition, false, "never fires").is_ok());
///
/// let err = enforce(Category::Precondition, true, "index 4 out of bounds").unwrap_err();
/// assert!(matches!(err, ContractViolation::Precondition { .. }));
/// ```
pub fn enforce(category: Category, violated: bool, message: &str) -> Result<(), ContractViolation> {
    if !violated {
        return Ok(());
    }

    Err(match category {
        Category::Precondition => ContractViolation::precondition(message),
        Category::Postcondition => ContractViolation::postcondition(message),
        Category::Invariant => ContractViolation::invariant(message),
    })
}
