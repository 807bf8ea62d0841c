// SPDX-License-Identifier: MPL-2.0
//! Display-name rules applied to raw catalog strings.

/// Uppercases the first character and leaves the rest untouched.
#[must_use]
pub fn capitalize_first(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Splits on `-`, capitalizes every segment and joins them with a space.
///
/// Empty segments are preserved, so `"a--b"` becomes `"A  B"`.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}
