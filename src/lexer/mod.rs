//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Reading the source one character at a time with line/column tracking
//! - Interning lexemes in a shared symbol table
//! - Recognition of reserved words, identifiers, numeric literals and operators
//! - Skipping whitespace and `//` comments

pub mod lexer;
pub mod source;
pub mod symbols;
pub mod tokens;
