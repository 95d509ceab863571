//! Common test utilities for dayn CLI tests.
//!
//! Provides `TestEnv`, an isolated puzzle repository under a temp directory
//! with the stub template in place, plus helpers to run the dayn binary.

#![allow(dead_code)]

pub mod env;

pub use env::*;
