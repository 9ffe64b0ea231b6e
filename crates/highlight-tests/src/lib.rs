//! Integration test crate for Highlight Studio.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on multiple highlight crates to verify they work together.

#[cfg(test)]
mod editing;

#[cfg(test)]
mod persistence;
