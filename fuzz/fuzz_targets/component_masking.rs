// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the masking grammar.
//!
//! Masking is the foundation of the data-string format. If the round-trip
//! fails for some component/delimiter pair, equal names stop rendering
//! equal data-strings and everything built on top breaks.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nomen::{join_masked, mask, split_masked, unmask, ESCAPE_CHARACTER};

fuzz_target!(|input: (Vec<String>, char)| {
    let (components, delimiter) = input;
    if delimiter == ESCAPE_CHARACTER {
        // The one delimiter the grammar rejects by construction.
        return;
    }

    for component in &components {
        // Property 1: any raw component masks without panicking, and
        // unmasking inverts it exactly
        let masked = mask(component, delimiter);
        assert_eq!(
            unmask(&masked, delimiter).expect("mask output must be well-masked"),
            *component
        );

        // Property 2: masked output carries no bare delimiter, so it splits
        // back as a single component
        let parts = split_masked(&masked, delimiter).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], *component);
    }

    // Property 3: join then split recovers every component in order,
    // whatever the components contain
    if !components.is_empty() {
        let joined = join_masked(&components, delimiter);
        let split = split_masked(&joined, delimiter).expect("join output must be well-masked");
        assert_eq!(split, components);
    }
});
