// Copyright 2024 Arrange Developers

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("expected a positive integer within the supported range")]
	InvalidNumber,
	#[error("the digit list is empty")]
	EmptyDigits,
	#[error("character {character:?} at position {position} is not a decimal digit")]
	InvalidCharacter { position: usize, character: char },
	#[error("value {digit} at position {position} is not a decimal digit")]
	DigitOutOfRange { position: usize, digit: u8 },
	#[error("the digit list has a leading zero")]
	LeadingZero,
	#[error("{digits} does not fit in a {bits}-bit integer")]
	Overflow { digits: String, bits: u32 },
}
