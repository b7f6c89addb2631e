//! Reserved symbols shared by the transducer, the rule front end, and the sampler.
//!
//! None of these may be used as category symbols.

/// Word boundary marker.
///
/// Wrapped around every word before transduction and every candidate before
/// illegal-sequence checks. Wildcards never match it.
pub const BOUNDARY: char = '^';

/// Null symbol. A substitution containing it deletes the matched text.
pub const NULL: char = '∅';

/// Wildcard symbol. Matches any non-boundary char in a pattern and echoes the
/// matched char when used in a substitution.
pub const WILDCARD: char = '_';

/// Name of the lect every language document always carries.
pub const GENERAL_LECT: &str = "General";

/// Returns true if `symbol` is one of the reserved markers.
#[must_use]
pub const fn is_reserved(symbol: char) -> bool {
    matches!(symbol, BOUNDARY | NULL | WILDCARD)
}
