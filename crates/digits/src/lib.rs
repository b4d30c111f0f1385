// Copyright 2024 Arrange Developers

//! Next greater digit arrangement.
//!
//! Given a positive integer, [`next_greater_arrangement`] finds the smallest larger integer made
//! of exactly the same decimal digits, or returns the input when no such integer exists. The
//! work happens on [`Digits`], which has no width limit; the integer entry point converts to and
//! from `u64`.

mod arrangement;
mod counts;
mod digits;
mod error;

pub use arrangement::*;
pub use counts::*;
pub use digits::*;
pub use error::*;
