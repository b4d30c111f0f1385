// Copyright 2024 Arrange Developers

use arrange_utils::bail;
use tracing::{instrument, trace};

use crate::{deinterleave_permutation, Error};

/// Shuffles `sequence` `iterations` times, where one shuffle moves the odd-indexed elements
/// behind the even-indexed ones.
///
/// The step permutation is raised to the `iterations`-th power and applied once, so the cost is
/// `O(n log iterations)` rather than `O(n * iterations)`.
#[instrument(skip_all, fields(len = sequence.len(), iterations = iterations), level = "debug")]
pub fn shuffle_slice<T: Clone>(sequence: &[T], iterations: u64) -> Vec<T> {
	if iterations == 0 {
		return sequence.to_vec();
	}
	let perm = deinterleave_permutation(sequence.len()).pow(iterations);
	trace!(sources = ?perm.sources(), "shuffle permutation");
	perm.gather(sequence)
}

/// Shuffles the characters of `sequence` `iterations` times.
///
/// ## Throws
///
/// * [`Error::InvalidIterationCount`] if `iterations` is negative or does not fit in a `u64`
///
/// ## Example
///
/// ```
/// use arrange_permutation::shuffle;
///
/// assert_eq!(shuffle("012345", 1).unwrap(), "024135");
/// assert_eq!(shuffle("qwerty", 2).unwrap(), "qtrewy");
/// assert!(shuffle("qwerty", -1).is_err());
/// ```
pub fn shuffle<I: TryInto<u64>>(sequence: &str, iterations: I) -> Result<String, Error> {
	let Ok(iterations) = TryInto::<u64>::try_into(iterations) else {
		bail!(Error::InvalidIterationCount);
	};
	let chars = sequence.chars().collect::<Vec<_>>();
	Ok(shuffle_slice(&chars, iterations).into_iter().collect())
}

/// One shuffle step done directly: even-indexed elements, then odd-indexed elements.
pub fn deinterleave_step<T: Clone>(sequence: &[T]) -> Vec<T> {
	sequence
		.iter()
		.step_by(2)
		.chain(sequence.iter().skip(1).step_by(2))
		.cloned()
		.collect()
}

/// Reference shuffle that performs every step one after another. Runs in `O(n * iterations)`.
pub fn shuffle_naive<T: Clone>(sequence: &[T], iterations: u64) -> Vec<T> {
	let mut current = sequence.to_vec();
	for _ in 0..iterations {
		current = deinterleave_step(&current);
	}
	current
}
