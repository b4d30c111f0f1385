// Copyright 2024 Arrange Developers

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("argument {arg} does not have expected length {expected}")]
	IncorrectArgumentLength { arg: String, expected: usize },
	#[error("index {index} is out of range for a permutation of length {len}")]
	IndexOutOfRange { index: usize, len: usize },
	#[error("index {index} appears more than once, the index list is not a bijection")]
	DuplicateIndex { index: usize },
	#[error("iteration count must be non-negative and fit in 64 bits")]
	InvalidIterationCount,
}
