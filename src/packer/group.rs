//! Greedy grouping of floating tokens into length-bounded constructs.
//!
//! Every construct repeats the full fixed (left) token list and carries one
//! contiguous run of floating (right) tokens. The grouping walk is a single
//! left-to-right pass: a group is flushed as soon as its construct crosses
//! `min_len`, or just before a token would push it past `max_len`. Favoring
//! many near-minimum groups over few near-maximum ones is the intended
//! policy, not an accident.

use crate::packer::length::{char_len, construct_length};
use crate::packer::normalize::preprocess;
use crate::utils::error::TokpackError;

/// Join character for tokens inside a segment.
const INNER_SEP: &str = ",";

/// One validated packing request.
///
/// Consumed by [`PackRequest::pack`]; no state survives the call. Concurrent
/// requests need no coordination since packing touches only local buffers.
#[derive(Debug, Clone)]
pub struct PackRequest {
    /// Fixed token list, repeated unchanged in every construct.
    pub left: Vec<String>,
    /// Floating token list, partitioned across constructs in order.
    pub right: Vec<String>,
    /// Target lower bound on construct length. The final group may fall
    /// short of it; every other group meets it.
    pub min_len: usize,
    /// Hard upper bound on construct length. Never exceeded.
    pub max_len: usize,
    /// Literal separator inserted between the left and right segments.
    /// Taken verbatim; any auto-wrapping happens in the calling layer.
    pub separator: String,
}

impl PackRequest {
    pub fn new(
        left: Vec<String>,
        right: Vec<String>,
        min_len: usize,
        max_len: usize,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            left,
            right,
            min_len,
            max_len,
            separator: separator.into(),
        }
    }

    /// Run the packing algorithm over this request.
    pub fn pack(&self) -> Result<Vec<String>, TokpackError> {
        pack(
            &self.left,
            &self.right,
            self.min_len,
            self.max_len,
            &self.separator,
        )
    }
}

/// Pack `right` tokens into bracketed constructs around the fixed `left`
/// list, each construct serializing to at most `max_len` characters.
///
/// Fails fast, before any grouping work, when the request is provably
/// infeasible: inverted bounds, an empty side, a comma-bearing token, or a
/// single right token that cannot fit a construct even alone.
pub fn pack(
    left: &[String],
    right: &[String],
    min_len: usize,
    max_len: usize,
    separator: &str,
) -> Result<Vec<String>, TokpackError> {
    if min_len > max_len {
        return Err(TokpackError::MinExceedsMax { min_len, max_len });
    }

    let left = preprocess(left);
    let right = preprocess(right);

    if left.is_empty() {
        return Err(TokpackError::empty_left());
    }
    if right.is_empty() {
        return Err(TokpackError::empty_right());
    }

    // Comma is the join character inside both segments; a token carrying one
    // would produce groups that cannot be read back unambiguously.
    for token in left.iter().chain(right.iter()) {
        if token.contains(',') {
            return Err(TokpackError::CommaInToken {
                token: token.clone(),
            });
        }
    }

    let left_joined = left.join(INNER_SEP);
    let left_len = char_len(&left_joined);
    let sep_len = char_len(separator);

    // A token that cannot fit even in a construct of its own makes the whole
    // request infeasible; report it up front instead of mid-walk.
    for token in &right {
        let token_len = char_len(token);
        if construct_length(left_len, token_len, sep_len) > max_len {
            return Err(TokpackError::TokenTooLong {
                token: token.clone(),
                length: token_len,
                max_len,
            });
        }
    }

    let groups = split_right_tokens(&right, left_len, min_len, max_len, sep_len);
    tracing::debug!(
        "packed {} right tokens into {} groups (left_len={}, sep_len={})",
        right.len(),
        groups.len(),
        left_len,
        sep_len
    );

    let mut constructs = Vec::with_capacity(groups.len());
    for group in groups {
        // Re-validated even though the per-token precondition should make
        // this unreachable; tripping it means the grouping walk is broken.
        let total_len = construct_length(left_len, char_len(&group), sep_len);
        if total_len > max_len {
            return Err(TokpackError::LimitExceeded {
                limit: max_len,
                actual: total_len,
            });
        }
        constructs.push(format!("({left_joined}{separator}{group})"));
    }

    Ok(constructs)
}

/// Partition `right` into contiguous comma-joined groups.
///
/// Single O(n) pass. Every token is assumed to fit a construct alone (the
/// caller has already verified this), so a token that overflows the current
/// buffer simply starts the next one.
fn split_right_tokens(
    right: &[String],
    left_len: usize,
    min_len: usize,
    max_len: usize,
    sep_len: usize,
) -> Vec<String> {
    let mut groups = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut buffer_len = 0;

    for token in right {
        let token_len = char_len(token);
        let extra = if buffer.is_empty() { 0 } else { 1 };
        let projected_len = buffer_len + extra + token_len;

        if construct_length(left_len, projected_len, sep_len) > max_len {
            if !buffer.is_empty() {
                groups.push(buffer.join(INNER_SEP));
            }
            buffer = vec![token.as_str()];
            buffer_len = token_len;
        } else {
            buffer.push(token.as_str());
            buffer_len = projected_len;
            if construct_length(left_len, buffer_len, sep_len) >= min_len {
                groups.push(buffer.join(INNER_SEP));
                buffer = Vec::new();
                buffer_len = 0;
            }
        }
    }

    // The trailing group is emitted even when it falls short of min_len.
    if !buffer.is_empty() {
        groups.push(buffer.join(INNER_SEP));
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_single_token_groups_when_min_is_crossed_immediately() {
        // left "a,b" = 3 chars, sep ")*(" = 3 chars, each token = 1 char:
        // every construct is 2 + 3 + 3 + 1 = 9, which crosses min_len=8
        // right after the first token, so each token flushes alone.
        let constructs = pack(
            &toks(&["a", "b"]),
            &toks(&["x", "y", "z", "w"]),
            8,
            12,
            ")*(",
        )
        .unwrap();

        assert_eq!(
            constructs,
            vec!["(a,b)*(x)", "(a,b)*(y)", "(a,b)*(z)", "(a,b)*(w)"]
        );
        for c in &constructs {
            assert_eq!(c.chars().count(), 9);
        }
    }

    #[test]
    fn test_min_len_zero_fragments_maximally() {
        // min_len=0 is satisfied by any non-empty buffer, so every token
        // flushes on arrival: one construct per right token.
        let constructs = pack(
            &toks(&["team"]),
            &toks(&["alpha", "beta", "gamma"]),
            0,
            100,
            ")-(",
        )
        .unwrap();

        assert_eq!(
            constructs,
            vec!["(team)-(alpha)", "(team)-(beta)", "(team)-(gamma)"]
        );
    }

    #[test]
    fn test_groups_accumulate_until_min_len() {
        // left "ab" = 2, sep = 1, overhead = 2 -> fixed cost 5.
        // min_len 12 means a group needs right_len >= 7: "xx,yy,zz" would be
        // 8 but "xx,yy" is 5, so the walk takes three tokens per group.
        let constructs = pack(
            &toks(&["ab"]),
            &toks(&["xx", "yy", "zz", "qq"]),
            12,
            30,
            "|",
        )
        .unwrap();

        assert_eq!(constructs, vec!["(ab|xx,yy,zz)", "(ab|qq)"]);
    }

    #[test]
    fn test_overflow_starts_a_new_group() {
        // Fixed cost 2 + 1 + 2 = 5; max_len 12 leaves room for right_len 7.
        // "aaaa,bbbb" projects to 9 > 7, so "bbbb" starts a fresh buffer.
        let constructs = pack(&toks(&["ab"]), &toks(&["aaaa", "bbbb"]), 11, 12, "|").unwrap();
        assert_eq!(constructs, vec!["(ab|aaaa)", "(ab|bbbb)"]);
    }

    #[test]
    fn test_trailing_group_may_fall_short_of_min_len() {
        // Fixed cost 5; min_len 11 needs right_len >= 6. "xx,yy" (5) never
        // reaches it, and the walk ends: the remainder flushes under-sized.
        let constructs = pack(&toks(&["ab"]), &toks(&["xx", "yy"]), 11, 12, "|").unwrap();
        assert_eq!(constructs, vec!["(ab|xx,yy)"]);
        assert!(constructs[0].chars().count() < 11);
    }

    #[test]
    fn test_min_greater_than_max_fails_before_grouping() {
        let err = pack(&toks(&["a"]), &toks(&["b"]), 500, 100, "*").unwrap_err();
        assert!(matches!(
            err,
            TokpackError::MinExceedsMax {
                min_len: 500,
                max_len: 100
            }
        ));
    }

    #[test]
    fn test_empty_parts_fail() {
        let err = pack(&[], &toks(&["b"]), 0, 10, "*").unwrap_err();
        assert!(matches!(
            err,
            TokpackError::EmptyPart {
                part: crate::utils::error::Part::Left
            }
        ));

        let err = pack(&toks(&["a"]), &[], 0, 10, "*").unwrap_err();
        assert!(matches!(
            err,
            TokpackError::EmptyPart {
                part: crate::utils::error::Part::Right
            }
        ));
    }

    #[test]
    fn test_whitespace_only_tokens_count_as_empty() {
        let err = pack(&toks(&["  ", "\t"]), &toks(&["b"]), 0, 10, "*").unwrap_err();
        assert!(matches!(err, TokpackError::EmptyPart { .. }));
    }

    #[test]
    fn test_oversized_token_fails_fast_and_names_it() {
        let long = "q".repeat(200);
        let err = pack(&toks(&["a"]), &toks(&[&long]), 0, 50, "*").unwrap_err();
        match err {
            TokpackError::TokenTooLong {
                token,
                length,
                max_len,
            } => {
                assert_eq!(token, long);
                assert_eq!(length, 200);
                assert_eq!(max_len, 50);
            }
            other => panic!("expected TokenTooLong, got {other}"),
        }
    }

    #[test]
    fn test_comma_in_token_is_rejected() {
        let err = pack(&toks(&["a"]), &toks(&["x,y"]), 0, 50, "*").unwrap_err();
        assert!(matches!(err, TokpackError::CommaInToken { token } if token == "x,y"));
    }

    #[test]
    fn test_separator_is_taken_verbatim() {
        // Unbalanced parens in the separator are fine; the packer does not
        // inspect separator syntax.
        let constructs = pack(&toks(&["a"]), &toks(&["b"]), 0, 20, "(((").unwrap();
        assert_eq!(constructs, vec!["(a(((b)"]);
    }

    #[test]
    fn test_empty_separator_is_legal_at_this_layer() {
        let constructs = pack(&toks(&["a"]), &toks(&["b"]), 0, 20, "").unwrap();
        assert_eq!(constructs, vec!["(ab)"]);
    }

    #[test]
    fn test_right_tokens_partition_completely_in_order() {
        let right: Vec<String> = (0..40).map(|i| format!("tok{i}")).collect();
        let constructs = pack(&toks(&["fixed"]), &right, 30, 40, ")*(").unwrap();

        // Recover the right groups from each construct and compare against
        // the original list: nothing lost, duplicated, or reordered.
        let mut recovered = Vec::new();
        for c in &constructs {
            let inner = c
                .strip_prefix("(fixed)*(")
                .and_then(|rest| rest.strip_suffix(')'))
                .expect("construct shape");
            recovered.extend(inner.split(',').map(str::to_string));
        }
        assert_eq!(recovered, right);

        for c in &constructs {
            assert!(c.chars().count() <= 40, "{c} exceeds max_len");
        }
        for c in &constructs[..constructs.len() - 1] {
            assert!(c.chars().count() >= 30, "{c} below min_len");
        }
    }

    #[test]
    fn test_multibyte_tokens_measured_in_chars() {
        // Three Cyrillic tokens of 3 chars each; byte-based counting would
        // reject them against this max_len.
        let constructs = pack(
            &toks(&["\u{43c}\u{447}\u{441}"]),
            &toks(&["\u{434}\u{43e}\u{43c}", "\u{43a}\u{43e}\u{442}"]),
            0,
            10,
            "*",
        )
        .unwrap();
        assert_eq!(constructs.len(), 2);
        for c in &constructs {
            assert!(c.chars().count() <= 10);
        }
    }

    #[test]
    fn test_determinism() {
        let left = toks(&["base", "fixed"]);
        let right: Vec<String> = (0..25).map(|i| format!("item{i}")).collect();
        let first = pack(&left, &right, 40, 60, ")/1(").unwrap();
        let second = pack(&left, &right, 40, 60, ")/1(").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pack_request_delegates() {
        let request = PackRequest::new(toks(&["a", "b"]), toks(&["x"]), 8, 12, ")*(");
        assert_eq!(request.pack().unwrap(), vec!["(a,b)*(x)"]);
    }
}
