//! Test utilities and helpers for the symcount project.
//!
//! This crate provides:
//! - Data generation for synthetic symbolic sequences and pattern sets
//! - A brute-force reference counter to check index results against
//!
//! # Usage
//!
//! This crate is intended for use within the symcount test suite only.

pub mod data_gen;
pub mod naive;
