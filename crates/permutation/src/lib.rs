// Copyright 2024 Arrange Developers

//! Index permutations and the iterated deinterleave shuffle built on top of them.
//!
//! A [`Permutation`] maps every output position to the source position that supplies it. One
//! shuffle step moves the odd-indexed elements of a sequence behind the even-indexed ones; that
//! step is the permutation returned by [`deinterleave_permutation`]. Shuffling `k` times is a
//! single application of that permutation raised to the `k`-th power, which
//! [`Permutation::pow`] computes by repeated squaring.

mod builder;
mod error;
mod permutation;
mod shuffle;

pub use builder::*;
pub use error::*;
pub use permutation::*;
pub use shuffle::*;
