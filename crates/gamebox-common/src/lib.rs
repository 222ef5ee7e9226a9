//! # gamebox-common
//!
//! Shared error definitions, domain newtypes, configuration models, and
//! constants used across the gamebox workspace.
//!
//! This crate is the leaf of the dependency graph — it depends on no other
//! internal crate and provides the foundational primitives that the session
//! and CLI crates build upon.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
