// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for data-string parsing.
//!
//! The data-string is the canonical serialization of a name. If parsing
//! panics on malformed input or a successful parse fails to re-encode
//! exactly, the representation-equivalence contract is broken.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nomen::{ArrayName, ContractViolation, Name, StringName};

/// The fuzzer throws garbage text at both parsers. They should return Ok
/// or a precondition violation, but never crash. For valid parses, the
/// round-trip must reproduce the input byte for byte.
fuzz_target!(|data: &[u8]| {
    // Only valid UTF-8 can reach the parsers through the public API
    let text = match std::str::from_utf8(data) {
        Ok(text) => text,
        Err(_) => return,
    };

    match ArrayName::from_data_string(text) {
        Ok(name) => {
            // Property 1: a successful parse re-encodes byte-identically
            let reencoded = name
                .as_data_string()
                .expect("freshly parsed name must satisfy its invariant");
            assert_eq!(
                reencoded, text,
                "data-string round-trip must be exact: {:?} != {:?}",
                reencoded, text
            );

            // Property 2: the string-backed representation accepts the same
            // text and agrees on content and hash
            let string = StringName::with_default_delimiter(text)
                .expect("text the array parser accepts must parse string-backed too");
            assert!(string.is_equal(&name).unwrap());
            assert_eq!(string.hash_code().unwrap(), name.hash_code().unwrap());
            assert_eq!(string.as_data_string().unwrap(), reencoded);
        }
        Err(violation) => {
            // Property 3: rejection is always a precondition violation
            // (ill-masked input is the caller's mistake, nothing else)
            assert!(
                matches!(violation, ContractViolation::Precondition { .. }),
                "parse failure must be a precondition violation, got {}",
                violation
            );

            // Property 4: both parsers agree on what is ill-masked
            assert!(StringName::with_default_delimiter(text).is_err());
        }
    }
});
