//! NumPy-like array operations.

/// Cumulative sum with a leading zero, i.e. `numpy.cumsum([0] + values)`.
///
/// The result has length `values.len() + 1` and is monotonically
/// non-decreasing, so consecutive entries describe half-open ranges.
/// Returns `None` if the running sum overflows `usize`.
pub fn checked_cumsum(values: &[usize]) -> Option<Vec<usize>> {
    let mut out = Vec::with_capacity(values.len() + 1);
    let mut acc = 0usize;
    out.push(acc);
    for &v in values {
        acc = acc.checked_add(v)?;
        out.push(acc);
    }
    Some(out)
}

/// Label every index of the half-open ranges described by `boundaries`
/// with the index of the range it falls into.
///
/// Equivalent to filling `out[boundaries[i]..boundaries[i + 1]] = i` for all
/// `i` on an array of length `boundaries.last()`.
pub fn fill_ranges(boundaries: &[usize]) -> Vec<usize> {
    let len = boundaries.last().copied().unwrap_or(0);
    let mut out = vec![0usize; len];
    for (i, window) in boundaries.windows(2).enumerate() {
        out[window[0]..window[1]].fill(i);
    }
    out
}

/// Count occurrences of each label in `0..n_labels`, i.e.
/// `numpy.bincount(labels, minlength=n_labels)`.
///
/// Labels outside the range are ignored.
pub fn bincount(labels: impl IntoIterator<Item = usize>, n_labels: usize) -> Vec<usize> {
    let mut counts = vec![0usize; n_labels];
    for label in labels {
        if let Some(count) = counts.get_mut(label) {
            *count += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumsum() {
        assert_eq!(checked_cumsum(&[2, 0, 3]), Some(vec![0, 2, 2, 5]));
    }

    #[test]
    fn test_cumsum_empty() {
        assert_eq!(checked_cumsum(&[]), Some(vec![0]));
    }

    #[test]
    fn test_cumsum_overflow() {
        assert_eq!(checked_cumsum(&[usize::MAX, 1]), None);
        assert_eq!(checked_cumsum(&[usize::MAX]), Some(vec![0, usize::MAX]));
    }

    #[test]
    fn test_fill_ranges() {
        let boundaries = checked_cumsum(&[2, 0, 3]).unwrap();
        assert_eq!(fill_ranges(&boundaries), vec![0, 0, 2, 2, 2]);
    }

    #[test]
    fn test_fill_ranges_no_slots() {
        assert!(fill_ranges(&[0]).is_empty());
        assert!(fill_ranges(&[]).is_empty());
    }

    #[test]
    fn test_bincount() {
        assert_eq!(bincount(vec![2, 0, 2, 7], 4), vec![1, 0, 2, 0]);
    }
}
