use std::{fs, path::Path, rc::Rc};

use log::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Result of pulling one character from a [`SourceReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextChar {
    Char(char),
    EndOfInput,
}

/// Character-at-a-time view over a single source text.
///
/// `lineno` and `position` describe the most recently read character. A
/// newline belongs to the line it ends; the character after it opens the
/// next line at column 0.
#[derive(Debug)]
pub struct SourceReader {
    text: Vec<char>,
    cursor: usize,
    file: Rc<String>,
    lineno: u32,
    position: u32,
    prior_end_line: bool,
    closed: bool,
}

impl SourceReader {
    pub fn open(path: &Path) -> Result<SourceReader, Error> {
        let file = Rc::new(path.to_string_lossy().into_owned());

        let text = fs::read_to_string(path).map_err(|err| {
            Error::new(
                ErrorImpl::SourceUnavailable {
                    path: file.to_string(),
                    reason: err.to_string(),
                },
                Position::new(0, 0, Rc::clone(&file)),
            )
        })?;

        debug!("opened {} ({} bytes)", file, text.len());
        Ok(SourceReader::new(&text, file))
    }

    pub fn from_source(source: &str, file: Option<String>) -> SourceReader {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        SourceReader::new(source, file_name)
    }

    fn new(source: &str, file: Rc<String>) -> SourceReader {
        SourceReader {
            text: source.chars().collect(),
            cursor: 0,
            file,
            lineno: 0,
            position: 0,
            prior_end_line: true,
            closed: false,
        }
    }

    pub fn read(&mut self) -> Result<NextChar, Error> {
        if self.closed {
            return Err(Error::new(
                ErrorImpl::ResourceAlreadyClosed,
                Position::new(self.lineno, self.position, Rc::clone(&self.file)),
            ));
        }

        let Some(&ch) = self.text.get(self.cursor) else {
            return Ok(NextChar::EndOfInput);
        };
        self.cursor += 1;

        if self.prior_end_line {
            self.lineno += 1;
            self.position = 0;
            self.prior_end_line = false;
        } else {
            self.position += 1;
        }

        if ch == '\n' {
            self.prior_end_line = true;
        }

        Ok(NextChar::Char(ch))
    }

    /// The character the next `read` would return, without consuming it.
    pub fn peek(&self) -> Option<char> {
        if self.closed {
            return None;
        }

        self.text.get(self.cursor).copied()
    }

    pub fn get_position(&self) -> u32 {
        self.position
    }

    pub fn get_lineno(&self) -> u32 {
        self.lineno
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn close(&mut self) {
        if self.closed {
            return;
        }

        self.closed = true;
        self.text = Vec::new();
        debug!("closed {}", self.file);
    }
}
