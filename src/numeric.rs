//! Counter coercion for the textual `likes` / `views` / `comments` fields.

use regex::Regex;
use std::sync::OnceLock;

static LEADING_NUMBER: OnceLock<Regex> = OnceLock::new();

fn leading_number() -> &'static Regex {
    LEADING_NUMBER.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").unwrap()
    })
}

/// Read the leading numeric prefix of a counter (`"12abc"` -> 12).
///
/// Returns `None` for empty, non-numeric, negative or non-finite input; `None`
/// loses every comparison in `exceeds` and `outranks`.
pub fn coerce_counter(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let m = leading_number().find(s)?;
    let v: f64 = m.as_str().parse().ok()?;
    if !v.is_finite() || v < 0.0 { return None; }
    Some(v)
}

/// `raw > threshold`, false when `raw` does not coerce.
#[inline]
pub fn exceeds(raw: &str, threshold: f64) -> bool {
    coerce_counter(raw).is_some_and(|v| v > threshold)
}

/// `challenger > incumbent` over coerced counters.
///
/// A blank incumbent counts as 0 so any positive challenger beats it; any other
/// non-coercing value on either side compares false.
#[inline]
pub fn outranks(challenger: &str, incumbent: &str) -> bool {
    let incumbent = if incumbent.trim().is_empty() { Some(0.0) } else { coerce_counter(incumbent) };
    match (coerce_counter(challenger), incumbent) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}
