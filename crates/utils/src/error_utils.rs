// Copyright 2024 Arrange Developers

/// Returns early with the given error, converted into the function's error type.
///
/// With the `bail_panic` feature enabled this panics instead, which gives a backtrace at the
/// point where an invalid argument was detected.
#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err);
	};
}

#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into());
	};
}

#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}
