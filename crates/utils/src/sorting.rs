// Copyright 2024 Arrange Developers

use itertools::Itertools;

/// Returns whether the given values are sorted in ascending order.
pub fn is_sorted_ascending<T: PartialOrd + Clone>(values: impl Iterator<Item = T>) -> bool {
	!values.tuple_windows().any(|(a, b)| a > b)
}

/// Returns whether the given values never increase from one element to the next.
pub fn is_non_increasing<T: PartialOrd + Clone>(values: impl Iterator<Item = T>) -> bool {
	!values.tuple_windows().any(|(a, b)| a < b)
}
