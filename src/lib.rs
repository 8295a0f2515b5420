#![allow(clippy::module_inception)]

use std::{fmt::Display, path::Path, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A point in a source file: 1-based line, 0-based column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Where a token sits in its line. `end` is the column of the last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
    pub line: u32,
}

pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split_inclusive('\n')
        .nth(line as usize - 1)
        .map(|text| text.trim_end_matches(['\n', '\r']))
}

/// Numbered echo of a source file, one `  N. text` row per line.
pub fn format_listing(source: &str) -> String {
    let mut listing = String::new();

    for (index, line) in source.lines().enumerate() {
        listing.push_str(&format!("{:>3}. {}\n", index + 1, line));
    }

    listing
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: IllegalLexeme (`@` is not a valid operator or separator)
        -> factorial.x
           |
        20 | j = @;
           | ----^
    */

    let position = error.get_position();
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", position.file));

    let Some(line_text) = get_line_at_position(source, position.line) else {
        return rendered;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace) + 1;
    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
}

pub fn display_error(error: &Error, file: &Path) {
    match std::fs::read_to_string(file) {
        Ok(source) => print!("{}", render_error(error, &source)),
        Err(_) => print!("{}", render_error(error, "")),
    }
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (&string[start..], start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    const SOURCE: &str = "Hello, world!\nsecond\n\n   Testing { }\n";

    #[test]
    fn test_get_line_at_position() {
        assert_eq!(super::get_line_at_position(SOURCE, 1), Some("Hello, world!"));
        assert_eq!(super::get_line_at_position(SOURCE, 4), Some("   Testing { }"));
        assert_eq!(super::get_line_at_position(SOURCE, 3), Some(""));
        assert_eq!(super::get_line_at_position(SOURCE, 0), None);
        assert_eq!(super::get_line_at_position(SOURCE, 9), None);
    }

    #[test]
    fn test_format_listing() {
        let listing = super::format_listing("program {\n}\n");
        assert_eq!(listing, "  1. program {\n  2. }\n");
    }

    #[test]
    fn test_render_error_points_at_column() {
        let error = Error::new(
            ErrorImpl::IllegalLexeme {
                lexeme: "@".to_string(),
            },
            Position::new(4, 11, Rc::new("test.x".to_string())),
        );

        let rendered = super::render_error(&error, SOURCE);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: IllegalLexeme (`@` is not a valid operator or separator)"
        );
        assert_eq!(lines[1], "-> test.x");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "4 | Testing { }");
        // column 11 minus three stripped spaces lands under the opening brace
        assert_eq!(lines[4], "  | --------^");
    }

    #[test]
    fn test_render_error_without_source_line() {
        let error = Error::new(
            ErrorImpl::ResourceAlreadyClosed,
            Position::new(0, 0, Rc::new("test.x".to_string())),
        );

        let rendered = super::render_error(&error, SOURCE);
        assert_eq!(rendered.lines().count(), 2);
    }
}
