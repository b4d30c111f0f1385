// Copyright 2024 Arrange Developers

use arrange_digits::{next_greater_arrangement, DigitCounts, Digits};
use arrange_utils::sorting::is_non_increasing;
use itertools::Itertools;
use proptest::prelude::*;

fn digit_counts(number: u64) -> DigitCounts {
	Digits::try_from(number).unwrap().counts()
}

/// Tries every ordering of the digits and keeps the smallest one above `number`.
fn brute_force_next(number: u64) -> u64 {
	let digits = number.to_string().chars().collect::<Vec<_>>();
	digits
		.iter()
		.permutations(digits.len())
		.map(|arrangement| arrangement.into_iter().collect::<String>())
		.filter(|arrangement| !arrangement.starts_with('0'))
		.map(|arrangement| arrangement.parse::<u64>().unwrap())
		.filter(|&candidate| candidate > number)
		.min()
		.unwrap_or(number)
}

#[test]
fn test_exhaustive_up_to_four_digits() {
	for number in 1..10_000u64 {
		assert_eq!(next_greater_arrangement(number), Ok(brute_force_next(number)), "{number}");
	}
}

#[test]
fn test_descending_digits_unchanged() {
	for number in [9u64, 21, 54321, 987654321, 9876543210] {
		assert_eq!(next_greater_arrangement(number), Ok(number));
	}
}

#[test]
fn test_huge_digit_string() {
	let input = format!("{}{}", "9".repeat(60), "12");
	let next = input
		.parse::<Digits>()
		.unwrap()
		.next_greater_arrangement()
		.unwrap();
	assert_eq!(next.to_string(), format!("{}{}", "9".repeat(60), "21"));

	let descending = format!("{}{}", "9".repeat(60), "8".repeat(60));
	assert!(descending
		.parse::<Digits>()
		.unwrap()
		.next_greater_arrangement()
		.is_none());
}

proptest! {
	#[test]
	fn test_matches_brute_force(number in 1u64..1_000_000) {
		prop_assert_eq!(next_greater_arrangement(number).unwrap(), brute_force_next(number));
	}

	#[test]
	fn test_result_keeps_digit_multiset(number in 1u64..=u64::MAX / 10) {
		let next = next_greater_arrangement(number).unwrap();
		prop_assert!(next >= number);
		prop_assert_eq!(digit_counts(next), digit_counts(number));
		if next == number {
			let digits = Digits::try_from(number).unwrap();
			prop_assert!(is_non_increasing(digits.as_slice().iter()));
		}
	}

	#[test]
	fn test_digits_result_is_greater(s in "[1-9][0-9]{0,80}") {
		let digits = s.parse::<Digits>().unwrap();
		match digits.next_greater_arrangement() {
			Some(next) => {
				prop_assert_eq!(next.as_slice().len(), digits.as_slice().len());
				prop_assert!(next.as_slice() > digits.as_slice());
				prop_assert_eq!(next.counts(), digits.counts());
			}
			None => prop_assert!(is_non_increasing(digits.as_slice().iter())),
		}
	}

	#[test]
	fn test_rejects_non_positive(number in i64::MIN..=0) {
		prop_assert!(next_greater_arrangement(number).is_err());
	}
}
