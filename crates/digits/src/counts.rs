// Copyright 2024 Arrange Developers

use std::iter;

/// A multiset of decimal digits, kept as one counter per digit value.
///
/// Every method taking a `digit` requires `digit < 10`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitCounts([usize; 10]);

impl DigitCounts {
	pub const fn new() -> Self {
		Self([0; 10])
	}

	pub fn insert(&mut self, digit: u8) {
		debug_assert!(digit < 10, "{digit} is not a decimal digit");
		self.0[usize::from(digit)] += 1;
	}

	/// Removes one occurrence of `digit`. Returns `false` if there was none.
	pub fn remove(&mut self, digit: u8) -> bool {
		debug_assert!(digit < 10, "{digit} is not a decimal digit");
		let count = &mut self.0[usize::from(digit)];
		if *count == 0 {
			return false;
		}
		*count -= 1;
		true
	}

	pub fn count(&self, digit: u8) -> usize {
		debug_assert!(digit < 10, "{digit} is not a decimal digit");
		self.0[usize::from(digit)]
	}

	pub fn len(&self) -> usize {
		self.0.iter().sum()
	}

	pub fn is_empty(&self) -> bool {
		self.0.iter().all(|&count| count == 0)
	}

	/// The smallest digit in the multiset that is strictly greater than `digit`.
	pub fn smallest_above(&self, digit: u8) -> Option<u8> {
		debug_assert!(digit < 10, "{digit} is not a decimal digit");
		(digit.saturating_add(1)..10).find(|&candidate| self.count(candidate) > 0)
	}

	/// Every digit of the multiset, smallest first.
	pub fn into_ascending(self) -> impl Iterator<Item = u8> {
		(0..10u8).flat_map(move |digit| iter::repeat(digit).take(self.count(digit)))
	}
}

impl FromIterator<u8> for DigitCounts {
	fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
		let mut counts = Self::new();
		counts.extend(iter);
		counts
	}
}

impl Extend<u8> for DigitCounts {
	fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
		for digit in iter {
			self.insert(digit);
		}
	}
}
