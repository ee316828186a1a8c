// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Estimated visit time per stop category.

/// Visit minutes for a category with no entry in [`VISIT_MINUTES`].
pub const DEFAULT_VISIT_MINUTES: u32 = 120;

/// Lower-cased category label to minutes spent at the stop.
pub const VISIT_MINUTES: &[(&str, u32)] = &[
    ("temple", 90),
    ("beach", 180),
    ("mountain", 240),
    ("city", 300),
    ("park", 150),
    ("museum", 120),
    ("waterfall", 120),
    ("historical", 90),
    ("cultural", 120),
    ("adventure", 300),
    ("wildlife", 180),
];

/// Look up the visit time for a category, case-insensitively.
///
/// Missing or unrecognised categories fall back to [`DEFAULT_VISIT_MINUTES`].
pub fn visit_minutes(category: Option<&str>) -> u32 {
    let Some(category) = category else {
        return DEFAULT_VISIT_MINUTES;
    };
    let category = category.to_lowercase();

    VISIT_MINUTES
        .iter()
        .find(|(label, _)| *label == category)
        .map(|(_, minutes)| *minutes)
        .unwrap_or(DEFAULT_VISIT_MINUTES)
}
