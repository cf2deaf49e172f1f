//! growlist CLI library.
//!
//! This crate provides the command-line driver for the growlist array.
//! The public modules are primarily exposed for testing purposes.

pub mod cli;
pub mod commands;
pub mod common;
