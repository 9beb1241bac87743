//! Common test utilities for Deckhand CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Assertion macros: `assert_output_contains!`, `assert_file_contains!`

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod windows;

pub use env::*;
pub use windows::*;
