//! Flavor text cleanup.
//!
//! API flavor text is copied from game cartridges and contains hard line
//! breaks, form feeds, and doubled spaces.

/// Replace every whitespace run (including `\n`, `\r` and `\u{c}`) with a
/// single space and trim both ends.
pub fn normalize_flavor_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
