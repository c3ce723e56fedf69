//! Subcommand implementations.

pub mod document;
pub mod pages;
pub mod text;
