//! Wildcard pattern matching.
//!
//! Patterns and windows are compared char by char. A wildcard in the pattern
//! matches any char except the boundary marker; a wildcard in a substitution
//! echoes the window char at the same offset.

use lexc_foundation::{BOUNDARY, WILDCARD};

/// Returns true if `pattern` matches `window` exactly, position by position.
///
/// The lengths must agree; a window cut short by the end of the word never
/// matches.
#[must_use]
pub fn matches(pattern: &[char], window: &[char]) -> bool {
    pattern.len() == window.len()
        && pattern
            .iter()
            .zip(window)
            .all(|(&p, &w)| p == w || (p == WILDCARD && w != BOUNDARY))
}

/// Returns true if the pattern contains at least one wildcard.
#[must_use]
pub fn has_wildcard(pattern: &[char]) -> bool {
    pattern.contains(&WILDCARD)
}

/// Resolves the wildcard slots of a substitution against the matched window.
///
/// A wildcard over a boundary marker stays a literal wildcard. A wildcard
/// past the end of the window produces nothing.
#[must_use]
pub fn echo(substitution: &[char], window: &[char]) -> Vec<char> {
    substitution
        .iter()
        .enumerate()
        .filter_map(|(offset, &c)| {
            if c != WILDCARD {
                return Some(c);
            }
            match window.get(offset) {
                Some(&w) if w != BOUNDARY => Some(w),
                Some(_) => Some(c),
                None => None,
            }
        })
        .collect()
}
