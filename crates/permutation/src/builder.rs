// Copyright 2024 Arrange Developers

use crate::Permutation;

/// Returns the permutation of one shuffle step on a sequence of length `n`: even source
/// positions first, then odd source positions, each group in ascending order.
///
/// For example, for `n = 6`:
/// [0, 1, 2, 3, 4, 5] -> [0, 2, 4, 1, 3, 5]
pub fn deinterleave_permutation(n: usize) -> Permutation {
	let sources = (0..n).step_by(2).chain((1..n).step_by(2)).collect();
	Permutation::from_sources_unchecked(sources)
}
