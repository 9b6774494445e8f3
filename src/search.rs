//! Segment lookup over monotone tables.

/// Finds the segment start `i` in `[0, size - 2]` for a predicate that is
/// `true` on `[0, k)` and `false` on `[k, size)`.
///
/// The result is `k - 1` clamped to the valid segment range, so that both
/// `i` and `i + 1` are valid indices. A predicate that is `true` everywhere
/// yields `size - 2`, one that is `false` everywhere yields `0`.
///
/// If `pred` is not monotone the result is unspecified but deterministic.
///
/// # Panics
/// If `size < 2` this will panic when the code is built with debug
/// assertions enabled. Release builds return `0`.
///
/// # Examples
/// ```
/// use cubic_spline_sampling::find_interval;
///
/// let nodes = [0.0, 1.0, 2.0, 3.0];
///
/// assert_eq!(find_interval(nodes.len(), |i| nodes[i] <= 1.5), 1);
/// assert_eq!(find_interval(nodes.len(), |i| nodes[i] <= 9.0), 2);
/// ```
#[inline]
pub fn find_interval<P>(size: usize, mut pred: P) -> usize
where
    P: FnMut(usize) -> bool,
{
    debug_assert!(size >= 2, "find_interval() needs at least 2 entries. Found: {size}.");

    let mut first = 0;
    let mut len = size;
    while len > 0 {
        let half = len >> 1;
        let middle = first + half;
        if pred(middle) {
            first = middle + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }

    first.saturating_sub(1).min(size.saturating_sub(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range() {
        let a: [f32; 10] = core::array::from_fn(|i| i as f32);

        assert_eq!(find_interval(a.len(), |i| a[i] <= -1.0), 0);
        assert_eq!(find_interval(a.len(), |i| a[i] <= 100.0), a.len() - 2);
    }

    #[test]
    fn finds_every_segment() {
        let a: [f32; 10] = core::array::from_fn(|i| i as f32);

        for i in 0..a.len() - 1 {
            let x = i as f32;
            assert_eq!(find_interval(a.len(), |j| a[j] <= x), i);
            assert_eq!(find_interval(a.len(), |j| a[j] <= x + 0.5), i);
            if i > 0 {
                assert_eq!(find_interval(a.len(), |j| a[j] <= x - 0.5), i - 1);
            }
        }
    }

    #[test]
    fn two_entries() {
        assert_eq!(find_interval(2, |_| true), 0);
        assert_eq!(find_interval(2, |_| false), 0);
    }

    #[test]
    fn non_monotone_predicate_is_deterministic() {
        let pattern = [true, false, true, false, true, false, true];
        let first = find_interval(pattern.len(), |i| pattern[i]);
        let second = find_interval(pattern.len(), |i| pattern[i]);

        assert_eq!(first, second);
        assert!(first <= pattern.len() - 2);
    }
}
