//! Case-insensitive variant name comparison.
//!
//! Projection and dispatch both compare names through [`names_match`], so a
//! name that survives exclusion is matched by the dispatcher under exactly
//! the same rule.

/// The comparison key for a variant name: its full Unicode lowercase form.
///
/// Generated dispatchers compare against this key after lowercasing the
/// requested variation name once.
pub fn match_key(name: &str) -> String {
    name.to_lowercase()
}

/// Case-insensitive name equality.
pub fn names_match(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    match_key(a) == match_key(b)
}
