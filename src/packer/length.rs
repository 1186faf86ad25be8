//! The length model every packing decision is measured against.
//!
//! A construct serializes as `(LEFT<sep>RIGHT)`, so its length is the two
//! wrapping parens plus the separator plus both comma-joined segments. The
//! `left_len` and `right_len` inputs are lengths of the *joined* strings, not
//! sums of token lengths: the commas between tokens count.

/// Number of characters contributed by the wrapping `(` and `)`.
pub const BRACKET_OVERHEAD: usize = 2;

/// Serialized length of a construct with the given segment lengths.
///
/// This formula is the single source of truth for all length decisions in
/// the packer; precondition checks, the greedy grouping loop, and the final
/// defensive re-check all call it.
pub fn construct_length(left_len: usize, right_len: usize, sep_len: usize) -> usize {
    BRACKET_OVERHEAD + sep_len + left_len + right_len
}

/// Character count of a string, as used everywhere in the length model.
///
/// Counted in `char`s rather than bytes so multi-byte input (Cyrillic token
/// lists are the common case upstream) is measured the way a reader counts
/// characters.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
