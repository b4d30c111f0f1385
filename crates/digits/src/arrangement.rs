// Copyright 2024 Arrange Developers

use arrange_utils::{bail, sorting::is_sorted_ascending};
use tracing::{debug, instrument};

use crate::{DigitCounts, Digits, Error};

impl Digits {
	/// Returns the smallest arrangement of these digits that is strictly greater, or `None` if
	/// the digits are already in non-increasing order.
	///
	/// The digits are scanned from the least significant end while they keep rising. The first
	/// digit that falls below the running maximum is the pivot. It is replaced by the smallest
	/// larger digit found to its right, and the remaining digits are written out in ascending
	/// order.
	#[instrument(
		"Digits::next_greater_arrangement",
		skip_all,
		fields(len = self.as_slice().len()),
		level = "debug"
	)]
	pub fn next_greater_arrangement(&self) -> Option<Self> {
		let digits = self.as_slice();

		// Digits right of the pivot; after the swap, the digits right of the new pivot digit.
		let mut tail = DigitCounts::new();
		let mut current_max = None;
		let mut pivot = None;
		for (position, &digit) in digits.iter().enumerate().rev() {
			if current_max.is_some_and(|max| digit < max) {
				pivot = Some(position);
				break;
			}
			current_max = current_max.max(Some(digit));
			tail.insert(digit);
		}

		let Some(pivot) = pivot else {
			debug!("digits are non-increasing");
			return None;
		};
		let pivot_digit = digits[pivot];
		let successor = tail.smallest_above(pivot_digit)?;
		tail.remove(successor);
		tail.insert(pivot_digit);
		debug!(pivot, pivot_digit, successor, "found pivot");

		let mut next = Vec::with_capacity(digits.len());
		next.extend_from_slice(&digits[..pivot]);
		next.push(successor);
		next.extend(tail.into_ascending());
		debug_assert_eq!(next.len(), digits.len());
		debug_assert!(is_sorted_ascending(next[pivot + 1..].iter()));

		Some(Self(next))
	}
}

/// Returns the smallest integer greater than `number` written with the same digits, or `number`
/// itself when no such integer exists.
///
/// ## Throws
///
/// * [`Error::InvalidNumber`] if `number` is not positive or does not fit in a `u64`
/// * [`Error::Overflow`] if the next arrangement is larger than `u64::MAX`
///
/// ## Example
///
/// ```
/// use arrange_digits::next_greater_arrangement;
///
/// assert_eq!(next_greater_arrangement(12345).unwrap(), 12354);
/// assert_eq!(next_greater_arrangement(321321).unwrap(), 322113);
/// assert_eq!(next_greater_arrangement(54321).unwrap(), 54321);
/// assert!(next_greater_arrangement(0).is_err());
/// ```
pub fn next_greater_arrangement<N: TryInto<u64>>(number: N) -> Result<u64, Error> {
	let Ok(number) = TryInto::<u64>::try_into(number) else {
		bail!(Error::InvalidNumber);
	};
	let digits = Digits::try_from(number)?;
	match digits.next_greater_arrangement() {
		Some(next) => next.to_u64(),
		None => Ok(number),
	}
}
