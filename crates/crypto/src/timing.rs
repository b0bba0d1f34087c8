//! Constant-time operations for security.

use subtle::{Choice, ConstantTimeEq};

/// Compare a locally computed MAC against a received one in constant time.
///
/// Every index of `expected` is visited whatever the contents of `received`, so
/// the running time depends on `expected.len()` only and not on where the first
/// mismatch occurs. A length mismatch fails the comparison but does not end it
/// early.
///
/// # Arguments
/// * `expected` - The locally recomputed value
/// * `received` - The value taken from the request
///
/// # Returns
/// true if both are byte-for-byte equal, false otherwise
pub fn constant_time_compare(expected: &[u8], received: &[u8]) -> bool {
    compare_observed(expected, received, |_| {})
}

/// Comparison loop with a hook called once per visited index.
pub(crate) fn compare_observed(
    expected: &[u8],
    received: &[u8],
    mut on_step: impl FnMut(usize),
) -> bool {
    let mut equal = Choice::from(u8::from(expected.len() == received.len()));

    for (i, byte) in expected.iter().enumerate() {
        on_step(i);
        let step = match received.get(i) {
            Some(other) => byte.ct_eq(other),
            None => Choice::from(0),
        };
        equal &= step;
    }

    equal.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_steps(expected: &[u8], received: &[u8]) -> (bool, usize) {
        let mut steps = 0;
        let equal = compare_observed(expected, received, |_| steps += 1);
        (equal, steps)
    }

    #[test]
    fn test_equal_slices() {
        assert!(constant_time_compare(b"hello", b"hello"));
    }

    #[test]
    fn test_different_slices() {
        assert!(!constant_time_compare(b"hello", b"world"));
    }

    #[test]
    fn test_different_lengths() {
        assert!(!constant_time_compare(b"hello", b"hi"));
        assert!(!constant_time_compare(b"hi", b"hello"));
    }

    #[test]
    fn test_received_prefix_of_expected() {
        assert!(!constant_time_compare(b"abcdef", b"abc"));
    }

    #[test]
    fn test_expected_prefix_of_received() {
        assert!(!constant_time_compare(b"abc", b"abcdef"));
    }

    #[test]
    fn test_empty_slices() {
        assert!(constant_time_compare(b"", b""));
        assert!(!constant_time_compare(b"", b"a"));
    }

    #[test]
    fn test_visits_every_index_regardless_of_mismatch_position() {
        let expected = b"0123456789abcdef";

        let (eq, steps) = count_steps(expected, b"0123456789abcdef");
        assert!(eq);
        assert_eq!(steps, expected.len());

        let (eq, steps) = count_steps(expected, b"X123456789abcdef");
        assert!(!eq);
        assert_eq!(steps, expected.len());

        let (eq, steps) = count_steps(expected, b"0123456789abcdeX");
        assert!(!eq);
        assert_eq!(steps, expected.len());
    }

    #[test]
    fn test_visits_every_index_when_received_is_short_or_long() {
        let expected = b"0123456789";

        let (_, steps) = count_steps(expected, b"");
        assert_eq!(steps, expected.len());

        let (_, steps) = count_steps(expected, b"0123456789-and-more");
        assert_eq!(steps, expected.len());
    }

    #[test]
    fn test_steps_are_visited_in_order() {
        let mut visited = Vec::new();
        compare_observed(b"abcd", b"zzzz", |i| visited.push(i));
        assert_eq!(visited, vec![0, 1, 2, 3]);
    }
}
