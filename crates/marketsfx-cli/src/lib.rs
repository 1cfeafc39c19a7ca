//! marketsfx CLI library.
//!
//! Holds the command implementations so they can be driven from tests
//! without spawning the binary.

pub mod commands;
