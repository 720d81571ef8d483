//! CLI module for argument parsing.

pub mod args;
