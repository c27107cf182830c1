//! Iterator for Boolean functions.

use crate::BooleanFunction;
use std::iter::FusedIterator;

/// Iterator over the successive outputs $f(0), f(1), \ldots, f(2^n - 1)$ of a Boolean function.
///
/// Example:
/// ```rust
/// use boolean_function_metrics::BooleanFunction;
///
/// let boolean_function = BooleanFunction::from_hex_string_truth_table("1e", 3).unwrap();
/// let mut iterator = boolean_function.iter();
/// assert_eq!(iterator.len(), 8);
/// assert_eq!(iterator.next(), Some(false));
/// assert_eq!(iterator.next(), Some(true));
/// assert_eq!(iterator.next(), Some(true));
/// assert_eq!(iterator.next(), Some(true));
/// assert_eq!(iterator.next(), Some(true));
/// assert_eq!(iterator.next(), Some(false));
/// assert_eq!(iterator.next(), Some(false));
/// assert_eq!(iterator.next(), Some(false));
/// assert_eq!(iterator.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct BooleanFunctionIterator<'a> {
    current_index: usize,
    inner_bool_func: &'a BooleanFunction,
}

impl<'a> BooleanFunctionIterator<'a> {
    pub(crate) fn new(bool_func: &'a BooleanFunction) -> Self {
        BooleanFunctionIterator {
            current_index: 0,
            inner_bool_func: bool_func,
        }
    }
}

impl Iterator for BooleanFunctionIterator<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.inner_bool_func.truth_table_len() {
            return None;
        }
        let result = self.inner_bool_func.compute(self.current_index);
        self.current_index += 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.inner_bool_func.truth_table_len() - self.current_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BooleanFunctionIterator<'_> {}

impl FusedIterator for BooleanFunctionIterator<'_> {}
