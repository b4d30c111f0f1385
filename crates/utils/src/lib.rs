// Copyright 2024 Arrange Developers

//! Shared plumbing for the `arrange` crates: early-return macros, environment flags, tracing
//! setup and small ordering helpers.

pub mod env;
pub mod error_utils;
pub mod sorting;
pub mod tracing;
