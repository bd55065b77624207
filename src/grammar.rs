// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The escaping grammar: masking, unmasking, and escape-aware splitting.
//!
//! A *masked* component can carry the delimiter or the escape character as
//! literal content. Masking is relative to one delimiter `d` and uses the
//! fixed escape character `\`:
//!
//! - `\` in the component becomes `\\`
//! - `d` in the component becomes `\d`
//!
//! Nothing else is ever escaped. The grammar is strict in the other
//! direction: while unmasking, an escape must be followed by the escape
//! character or the delimiter. A trailing escape or an escape before any
//! other character is ill-masked input, reported as [`GrammarError`] with
//! the byte offset of the offending escape. Parsing boundaries turn that
//! into a precondition violation; state checks turn it into an invariant
//! violation.
//!
//! All functions here are contract-free. The contract bracketing lives in
//! the name layer, which calls down into this module.

use std::fmt;

/// The canonical delimiter, used by the data-string form regardless of a
/// name's own delimiter.
pub const DEFAULT_DELIMITER: char = '.';

/// The fixed escape character. Not user-configurable.
pub const ESCAPE_CHARACTER: char = '\\';

/// Ill-masked text, with the byte offset of the escape that broke it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarError {
    /// The text ends in the middle of an escape sequence.
    DanglingEscape { at: usize },
    /// An escape is followed by a character that is neither the escape
    /// character nor the delimiter.
    StrayEscape { at: usize, found: char },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::DanglingEscape { at } => {
                write!(f, "dangling escape at byte {}", at)
            }
            GrammarError::StrayEscape { at, found } => {
                write!(f, "stray escape before {:?} at byte {}", found, at)
            }
        }
    }
}

impl std::error::Error for GrammarError {}

/// Mask one raw component relative to `delimiter`.
///
/// Doubles every escape character and prefixes every occurrence of the
/// delimiter with the escape character. Any raw string is maskable; this
/// never fails.
pub fn mask(component: &str, delimiter: char) -> String {
    let mut masked = String::with_capacity(component.len() * 2);

    for ch in component.chars() {
        if ch == ESCAPE_CHARACTER || ch == delimiter {
            masked.push(ESCAPE_CHARACTER);
        }
        masked.push(ch);
    }

    masked
}

/// Unmask one masked component relative to `delimiter`.
///
/// The inverse of [`mask`] for well-masked input. An unescaped delimiter is
/// a component boundary and must not appear inside a single component, so it
/// is reported as a stray escape's dual: ill-masked input.
pub fn unmask(masked: &str, delimiter: char) -> Result<String, GrammarError> {
    let mut raw = String::with_capacity(masked.len());
    let mut chars = masked.char_indices();

    while let Some((at, ch)) = chars.next() {
        if ch == ESCAPE_CHARACTER {
            match chars.next() {
                Some((_, next)) if next == ESCAPE_CHARACTER || next == delimiter => raw.push(next),
                Some((_, found)) => return Err(GrammarError::StrayEscape { at, found }),
                None => return Err(GrammarError::DanglingEscape { at }),
            }
        } else if ch == delimiter {
            // A bare delimiter cannot be component content.
            return Err(GrammarError::StrayEscape { at, found: ch });
        } else {
            raw.push(ch);
        }
    }

    Ok(raw)
}

/// Split masked, delimiter-joined text into raw (unmasked) components.
///
/// Splits at unescaped delimiters only, unmasking as it goes. Empty text
/// yields one empty component, matching the splitting identity
/// `join(split(t)) == t` — interpreting empty text as *zero* components is
/// a representation-level decision, not a grammar-level one.
pub fn split_masked(text: &str, delimiter: char) -> Result<Vec<String>, GrammarError> {
    let mut components = Vec::new();
    let mut current = String::new();
    let mut chars = text.char_indices();

    while let Some((at, ch)) = chars.next() {
        if ch == ESCAPE_CHARACTER {
            match chars.next() {
                Some((_, next)) if next == ESCAPE_CHARACTER || next == delimiter => {
                    current.push(next);
                }
                Some((_, found)) => return Err(GrammarError::StrayEscape { at, found }),
                None => return Err(GrammarError::DanglingEscape { at }),
            }
        } else if ch == delimiter {
            components.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }

    components.push(current);
    Ok(components)
}

/// Mask each component and join with `delimiter`. The inverse of
/// [`split_masked`] for any component list.
pub fn join_masked<S: AsRef<str>>(components: &[S], delimiter: char) -> String {
    let mut joined = String::new();

    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            joined.push(delimiter);
        }
        joined.push_str(&mask(component.as_ref(), delimiter));
    }

    joined
}

/// Check masked text without allocating: every escape must be followed by
/// the escape character or the delimiter.
pub fn well_masked(text: &str, delimiter: char) -> Result<(), GrammarError> {
    let mut chars = text.char_indices();

    while let Some((at, ch)) = chars.next() {
        if ch == ESCAPE_CHARACTER {
            match chars.next() {
                Some((_, next)) if next == ESCAPE_CHARACTER || next == delimiter => {}
                Some((_, found)) => return Err(GrammarError::StrayEscape { at, found }),
                None => return Err(GrammarError::DanglingEscape { at }),
            }
        }
    }

    Ok(())
}

/// Count the components of masked, delimiter-joined text without splitting
/// it: unescaped delimiters + 1.
pub fn component_count(text: &str, delimiter: char) -> Result<usize, GrammarError> {
    let mut count = 1usize;
    let mut chars = text.char_indices();

    while let Some((at, ch)) = chars.next() {
        if ch == ESCAPE_CHARACTER {
            match chars.next() {
                Some((_, next)) if next == ESCAPE_CHARACTER || next == delimiter => {}
                Some((_, found)) => return Err(GrammarError::StrayEscape { at, found }),
                None => return Err(GrammarError::DanglingEscape { at }),
            }
        } else if ch == delimiter {
            count += 1;
        }
    }

    Ok(count)
}
