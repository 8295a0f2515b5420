//! Error types for the scanner.
//!
//! Every error carries the source position it was raised at, a short
//! name for diagnostics and an optional tip rendered next to it.

pub mod errors;

#[cfg(test)]
mod tests;
