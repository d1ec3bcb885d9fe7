//! Common test utilities for Terramena CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project and home directories plus CLI runners
//! - Fixtures: Terraform state documents and fake tool scripts

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
