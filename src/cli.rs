//! Command line interface for the lexigraph utilities.

pub mod args;
pub mod commands;
pub mod output;
