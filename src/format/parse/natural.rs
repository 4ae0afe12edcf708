//! Natural ("human") ordering of text.
//!
//! Digit runs compare by numeric value, so `"plane_2"` sorts before
//! `"plane_10"`. Comparison is delegated to [`natord::compare`].

use std::cmp::Ordering;

/// Compare two strings in natural order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natord::compare(a, b)
}

/// Sort strings in place in natural order.
pub fn natural_sort<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}
