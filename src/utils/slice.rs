//! Partitioning a sequence into predicate-delimited runs.

/// Splits `items` into contiguous runs, starting a new run at every element for which
/// `predicate` returns `true`.
///
/// The first run always begins at index 0, whether or not the predicate holds for the
/// first element. The runs borrow from `items` and together cover it exactly, in order.
/// An empty input produces no runs.
///
/// # Examples
///
/// ```rust
/// use graphical::utils::slice_by;
///
/// let runs = slice_by(&[1, 2, 10, 3, 20, 21], |&x| x >= 10);
/// assert_eq!(runs, vec![&[1, 2][..], &[10, 3][..], &[20][..], &[21][..]]);
/// ```
pub fn slice_by<T, F>(items: &[T], mut predicate: F) -> Vec<&[T]>
where
    F: FnMut(&T) -> bool,
{
    let mut runs = Vec::new();
    if items.is_empty() {
        return runs;
    }

    let mut start = 0;
    for (index, item) in items.iter().enumerate().skip(1) {
        if predicate(item) {
            runs.push(&items[start..index]);
            start = index;
        }
    }
    runs.push(&items[start..]);

    runs
}
