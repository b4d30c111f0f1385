// Copyright 2024 Arrange Developers

use arrange_utils::ensure;
use tracing::instrument;

use crate::Error;

/// A bijection on the positions `0..n` of a sequence.
///
/// The permutation is stored as the list of source positions: applying it to a sequence `s`
/// produces `out[i] = s[sources[i]]`.
///
/// Composition is written on the source lists: `(a ∘ b)[i] = a[b[i]]`. Because applying gathers
/// from the input, `a.compose(&b)` applied to `s` equals applying `a` to `s` first and then `b`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
	sources: Vec<usize>,
}

impl Permutation {
	/// Creates a permutation from a list of source positions.
	///
	/// ## Throws
	///
	/// * [`Error::IndexOutOfRange`] if some index is not below `sources.len()`
	/// * [`Error::DuplicateIndex`] if some index appears twice
	pub fn new(sources: Vec<usize>) -> Result<Self, Error> {
		let len = sources.len();
		let mut seen = vec![false; len];
		for &index in &sources {
			ensure!(index < len, Error::IndexOutOfRange { index, len });
			ensure!(!seen[index], Error::DuplicateIndex { index });
			seen[index] = true;
		}
		Ok(Self { sources })
	}

	pub(crate) fn from_sources_unchecked(sources: Vec<usize>) -> Self {
		debug_assert!(Self::new(sources.clone()).is_ok());
		Self { sources }
	}

	pub fn identity(n: usize) -> Self {
		Self {
			sources: (0..n).collect(),
		}
	}

	pub fn len(&self) -> usize {
		self.sources.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sources.is_empty()
	}

	pub fn is_identity(&self) -> bool {
		self.sources.iter().enumerate().all(|(i, &source)| i == source)
	}

	pub fn sources(&self) -> &[usize] {
		&self.sources
	}

	pub fn into_sources(self) -> Vec<usize> {
		self.sources
	}

	/// Returns `self ∘ other`, i.e. `out[i] = self[other[i]]`: the permutation that applies `self`
	/// first, then `other`.
	///
	/// ## Throws
	///
	/// * [`Error::IncorrectArgumentLength`] if the permutations have different lengths
	pub fn compose(&self, other: &Self) -> Result<Self, Error> {
		ensure!(
			self.len() == other.len(),
			Error::IncorrectArgumentLength {
				arg: "other".into(),
				expected: self.len(),
			}
		);
		Ok(self.compose_unchecked(other))
	}

	fn compose_unchecked(&self, other: &Self) -> Self {
		Self {
			sources: other.sources.iter().map(|&i| self.sources[i]).collect(),
		}
	}

	/// Raises the permutation to the power `exponent` by repeated squaring.
	///
	/// This takes `O(n log exponent)` time. `pow(0)` is the identity.
	#[instrument(
		"Permutation::pow",
		skip_all,
		fields(len = self.len(), exponent = exponent),
		level = "debug"
	)]
	pub fn pow(&self, exponent: u64) -> Self {
		let mut result = Self::identity(self.len());
		let mut base = self.clone();
		let mut exponent = exponent;
		while exponent > 0 {
			if exponent & 1 == 1 {
				result = result.compose_unchecked(&base);
			}
			base = base.compose_unchecked(&base);
			exponent >>= 1;
		}
		result
	}

	pub fn inverse(&self) -> Self {
		let mut sources = vec![0; self.len()];
		for (i, &source) in self.sources.iter().enumerate() {
			sources[source] = i;
		}
		Self { sources }
	}

	/// Applies the permutation to `sequence`, returning a new sequence with
	/// `out[i] = sequence[self[i]]`.
	///
	/// ## Throws
	///
	/// * [`Error::IncorrectArgumentLength`] if `sequence` is not as long as the permutation
	pub fn apply<T: Clone>(&self, sequence: &[T]) -> Result<Vec<T>, Error> {
		ensure!(
			sequence.len() == self.len(),
			Error::IncorrectArgumentLength {
				arg: "sequence".into(),
				expected: self.len(),
			}
		);
		Ok(self.gather(sequence))
	}

	pub(crate) fn gather<T: Clone>(&self, sequence: &[T]) -> Vec<T> {
		debug_assert_eq!(sequence.len(), self.len());
		self.sources.iter().map(|&i| sequence[i].clone()).collect()
	}

	/// Lengths of the disjoint cycles, in order of their smallest position.
	pub fn cycle_lengths(&self) -> Vec<usize> {
		let mut visited = vec![false; self.len()];
		let mut lengths = Vec::new();
		for start in 0..self.len() {
			if visited[start] {
				continue;
			}
			let mut length = 0;
			let mut current = start;
			while !visited[current] {
				visited[current] = true;
				current = self.sources[current];
				length += 1;
			}
			lengths.push(length);
		}
		lengths
	}

	/// The smallest positive `k` with `self.pow(k)` equal to the identity, or `None` if it does
	/// not fit in a `u64`.
	pub fn order(&self) -> Option<u64> {
		self.cycle_lengths()
			.into_iter()
			.try_fold(1u64, |acc, length| {
				let length = length as u64;
				(acc / gcd(acc, length)).checked_mul(length)
			})
	}
}

impl TryFrom<Vec<usize>> for Permutation {
	type Error = Error;

	fn try_from(sources: Vec<usize>) -> Result<Self, Self::Error> {
		Self::new(sources)
	}
}

impl AsRef<[usize]> for Permutation {
	fn as_ref(&self) -> &[usize] {
		&self.sources
	}
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
	while b != 0 {
		let r = a % b;
		a = b;
		b = r;
	}
	a
}

#[cfg(test)]
mod tests {
	use super::*;

	fn perm(sources: &[usize]) -> Permutation {
		Permutation::new(sources.to_vec()).unwrap()
	}

	#[test]
	fn test_new_rejects_non_bijections() {
		assert_eq!(
			Permutation::new(vec![0, 3, 1]),
			Err(Error::IndexOutOfRange { index: 3, len: 3 })
		);
		assert_eq!(Permutation::new(vec![1, 0, 1]), Err(Error::DuplicateIndex { index: 1 }));
		assert!(Permutation::new(vec![]).unwrap().is_empty());
	}

	#[test]
	fn test_compose_direction() {
		// a swaps the first two positions, b swaps the last two; they do not commute.
		let a = perm(&[1, 0, 2]);
		let b = perm(&[0, 2, 1]);

		assert_eq!(a.compose(&b).unwrap().sources(), &[1, 2, 0]);
		assert_eq!(b.compose(&a).unwrap().sources(), &[2, 0, 1]);

		// Applying a ∘ b equals applying a first, then b.
		let seq = ['x', 'y', 'z'];
		let a_then_b = b.apply(&a.apply(&seq).unwrap()).unwrap();
		let b_then_a = a.apply(&b.apply(&seq).unwrap()).unwrap();
		assert_eq!(a_then_b, vec!['y', 'z', 'x']);
		assert_eq!(b_then_a, vec!['z', 'x', 'y']);
		assert_eq!(a.compose(&b).unwrap().apply(&seq).unwrap(), a_then_b);
		assert_eq!(b.compose(&a).unwrap().apply(&seq).unwrap(), b_then_a);
	}

	#[test]
	fn test_conversions() {
		let p = Permutation::try_from(vec![2, 0, 1]).unwrap();
		assert_eq!(p.as_ref(), &[2, 0, 1]);
		assert_eq!(p.clone().into_sources(), vec![2, 0, 1]);
		assert_eq!(
			Permutation::try_from(vec![0, 0]),
			Err(Error::DuplicateIndex { index: 0 })
		);
	}

	#[test]
	fn test_compose_length_mismatch() {
		let err = perm(&[1, 0]).compose(&perm(&[0, 1, 2])).unwrap_err();
		assert_eq!(
			err,
			Error::IncorrectArgumentLength {
				arg: "other".into(),
				expected: 2
			}
		);
	}

	#[test]
	fn test_pow_small_exponents() {
		let p = perm(&[0, 2, 4, 1, 3, 5]);
		assert!(p.pow(0).is_identity());
		assert_eq!(p.pow(1), p);
		assert_eq!(p.pow(2).sources(), &[0, 4, 3, 2, 1, 5]);
		assert_eq!(p.pow(3).sources(), &[0, 3, 1, 4, 2, 5]);
		assert!(p.pow(4).is_identity());
	}

	#[test]
	fn test_pow_large_exponent() {
		let p = perm(&[0, 2, 4, 1, 3, 5]);
		assert_eq!(p.pow(u64::MAX), p.pow(u64::MAX % 4));
	}

	#[test]
	fn test_inverse() {
		let p = perm(&[2, 0, 3, 1]);
		assert!(p.compose(&p.inverse()).unwrap().is_identity());
		assert!(p.inverse().compose(&p).unwrap().is_identity());
	}

	#[test]
	fn test_apply_length_mismatch() {
		let p = perm(&[1, 0]);
		assert!(matches!(p.apply(&[1, 2, 3]), Err(Error::IncorrectArgumentLength { expected: 2, .. })));
		assert_eq!(p.apply(&["a", "b"]).unwrap(), vec!["b", "a"]);
	}

	#[test]
	fn test_cycles_and_order() {
		let p = perm(&[1, 2, 0, 4, 3, 5]);
		assert_eq!(p.cycle_lengths(), vec![3, 2, 1]);
		assert_eq!(p.order(), Some(6));
		assert_eq!(Permutation::identity(0).order(), Some(1));
		assert_eq!(Permutation::identity(4).order(), Some(1));
	}
}
