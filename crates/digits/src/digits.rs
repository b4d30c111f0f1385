// Copyright 2024 Arrange Developers

use std::{fmt, str::FromStr};

use arrange_utils::{bail, ensure};

use crate::{DigitCounts, Error};

/// The decimal digits of a positive integer, most significant first.
///
/// The list is never empty and never starts with a zero. There is no upper bound on its length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digits(pub(crate) Vec<u8>);

impl Digits {
	/// ## Throws
	///
	/// * [`Error::EmptyDigits`]
	/// * [`Error::DigitOutOfRange`] if some value is above 9
	/// * [`Error::InvalidNumber`] if every digit is zero
	/// * [`Error::LeadingZero`]
	pub fn new(digits: Vec<u8>) -> Result<Self, Error> {
		ensure!(!digits.is_empty(), Error::EmptyDigits);
		if let Some(position) = digits.iter().position(|&digit| digit > 9) {
			bail!(Error::DigitOutOfRange {
				position,
				digit: digits[position],
			});
		}
		if digits[0] == 0 {
			ensure!(digits.iter().any(|&digit| digit != 0), Error::InvalidNumber);
			bail!(Error::LeadingZero);
		}
		Ok(Self(digits))
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	pub fn counts(&self) -> DigitCounts {
		self.0.iter().copied().collect()
	}

	/// Recomposes the digits into an integer.
	///
	/// ## Throws
	///
	/// * [`Error::Overflow`] if the value is larger than `u64::MAX`
	pub fn to_u64(&self) -> Result<u64, Error> {
		self.0
			.iter()
			.try_fold(0u64, |acc, &digit| acc.checked_mul(10)?.checked_add(u64::from(digit)))
			.ok_or_else(|| Error::Overflow {
				digits: self.to_string(),
				bits: u64::BITS,
			})
	}
}

impl TryFrom<u64> for Digits {
	type Error = Error;

	fn try_from(number: u64) -> Result<Self, Self::Error> {
		ensure!(number > 0, Error::InvalidNumber);
		let mut digits = Vec::with_capacity(20);
		let mut rest = number;
		while rest > 0 {
			digits.push((rest % 10) as u8);
			rest /= 10;
		}
		digits.reverse();
		Ok(Self(digits))
	}
}

impl FromStr for Digits {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let digits = s
			.chars()
			.enumerate()
			.map(|(position, character)| {
				character
					.to_digit(10)
					.map(|digit| digit as u8)
					.ok_or(Error::InvalidCharacter {
						position,
						character,
					})
			})
			.collect::<Result<Vec<_>, _>>()?;
		Self::new(digits)
	}
}

impl fmt::Display for Digits {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for &digit in &self.0 {
			write!(f, "{digit}")?;
		}
		Ok(())
	}
}
