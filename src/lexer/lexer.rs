use std::{path::Path, rc::Rc};

use lazy_static::lazy_static;
use log::{debug, error, trace};
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    source::{NextChar, SourceReader},
    symbols::SymbolTable,
    tokens::{Symbol, Token, TokenKind},
};

lazy_static! {
    static ref NUMBER_LIT: Regex = Regex::new(r"^(?:[0-9]*\.[0-9]+|[0-9]+\.[0-9]*)$").unwrap();
    static ref SCIENTIFIC_LIT: Regex =
        Regex::new(r"^[+-]?([0-9]+\.[0-9]+|[0-9]+\.|\.[0-9]+|[0-9]+)([eE][+-]?[0-9]+)?$").unwrap();
}

/// Characters of the token being scanned and the columns they cover.
struct Lexeme {
    text: String,
    line: u32,
    start: u32,
    end: u32,
}

impl Lexeme {
    fn starting_at(line: u32, column: u32) -> Lexeme {
        Lexeme {
            text: String::new(),
            line,
            start: column,
            end: column,
        }
    }

    fn into_token(self, symbol: Rc<Symbol>) -> Token {
        MK_TOKEN!(symbol, self.start, self.end, self.line)
    }
}

pub struct Lexer {
    source: Option<SourceReader>,
    symbols: Rc<SymbolTable>,
    file: Rc<String>,
    // lookahead; None once the input is exhausted
    ch: Option<char>,
    line: u32,
    column: u32,
    at_eof: bool,
}

impl Lexer {
    pub fn new(source: SourceReader, symbols: Rc<SymbolTable>) -> Result<Lexer, Error> {
        let mut lexer = Lexer {
            file: Rc::clone(source.file()),
            source: Some(source),
            symbols,
            ch: None,
            line: 0,
            column: 0,
            at_eof: false,
        };

        lexer.advance()?;
        Ok(lexer)
    }

    pub fn open(path: &Path, symbols: Rc<SymbolTable>) -> Result<Lexer, Error> {
        Lexer::new(SourceReader::open(path)?, symbols)
    }

    pub fn from_source(
        source: &str,
        file: Option<String>,
        symbols: Rc<SymbolTable>,
    ) -> Result<Lexer, Error> {
        Lexer::new(SourceReader::from_source(source, file), symbols)
    }

    pub fn symbols(&self) -> &Rc<SymbolTable> {
        &self.symbols
    }

    pub fn at_eof(&self) -> bool {
        self.at_eof
    }

    /// Pulls the next token. `Ok(None)` marks the end of the stream and is
    /// returned on every call after it. An illegal lexeme is reported once
    /// as an `Err` and ends the stream.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        loop {
            if self.at_eof {
                self.close();
                return Ok(None);
            }

            while self.ch.is_some_and(char::is_whitespace) {
                self.advance()?;
            }

            let Some(ch) = self.ch else {
                self.at_eof = true;
                continue;
            };

            let lexeme = Lexeme::starting_at(self.line, self.column);

            let token = if is_identifier_start(ch) {
                self.scan_identifier(lexeme)?
            } else if ch.is_ascii_digit()
                || (ch == '.' && self.peek().is_some_and(|next| next.is_ascii_digit()))
            {
                self.scan_number(lexeme)?
            } else {
                match self.scan_operator(lexeme)? {
                    Some(token) => token,
                    None => continue,
                }
            };

            trace!("{}:{} {} {:?}", token.line(), token.left_position(), token.kind(), token.lexeme());
            return Ok(Some(token));
        }
    }

    /// Ends the stream early. The source is released exactly once, whether
    /// here or when scanning runs off the end.
    pub fn close(&mut self) {
        self.at_eof = true;
        self.ch = None;

        if let Some(mut source) = self.source.take() {
            source.close();
        }
    }

    fn advance(&mut self) -> Result<(), Error> {
        self.ch = match self.source.as_mut() {
            Some(source) => match source.read()? {
                NextChar::Char(ch) => {
                    self.line = source.get_lineno();
                    self.column = source.get_position();
                    Some(ch)
                }
                NextChar::EndOfInput => None,
            },
            None => None,
        };

        Ok(())
    }

    fn peek(&self) -> Option<char> {
        self.source.as_ref().and_then(SourceReader::peek)
    }

    fn take(&mut self, lexeme: &mut Lexeme) -> Result<(), Error> {
        if let Some(ch) = self.ch {
            lexeme.text.push(ch);
            lexeme.end = self.column;
        }

        self.advance()
    }

    fn take_digits(&mut self, lexeme: &mut Lexeme) -> Result<(), Error> {
        while self.ch.is_some_and(|ch| ch.is_ascii_digit()) {
            self.take(lexeme)?;
        }

        Ok(())
    }

    fn scan_identifier(&mut self, mut lexeme: Lexeme) -> Result<Token, Error> {
        while self.ch.is_some_and(is_identifier_part) {
            self.take(&mut lexeme)?;
        }

        let symbol = self.resolve(&lexeme, TokenKind::Identifier)?;
        Ok(lexeme.into_token(symbol))
    }

    fn scan_number(&mut self, mut lexeme: Lexeme) -> Result<Token, Error> {
        self.take_digits(&mut lexeme)?;

        if self.ch == Some('.') {
            self.take(&mut lexeme)?;
            self.take_digits(&mut lexeme)?;
        }

        if matches!(self.ch, Some('e' | 'E')) {
            self.take(&mut lexeme)?;

            if matches!(self.ch, Some('+' | '-')) {
                self.take(&mut lexeme)?;
            }

            self.take_digits(&mut lexeme)?;
        }

        let symbol = self.resolve(&lexeme, classify_numeric(&lexeme.text))?;
        Ok(lexeme.into_token(symbol))
    }

    /// Longest match over one and two characters. Returns `None` when the
    /// match was a comment that has been skipped.
    fn scan_operator(&mut self, mut lexeme: Lexeme) -> Result<Option<Token>, Error> {
        self.take(&mut lexeme)?;

        if let Some(second) = self.ch {
            let pair = format!("{}{}", lexeme.text, second);

            if let Some(symbol) = self.symbols.lookup(&pair) {
                self.take(&mut lexeme)?;

                if symbol.kind() == TokenKind::Comment {
                    self.skip_comment(lexeme.line)?;
                    return Ok(None);
                }

                return Ok(Some(lexeme.into_token(symbol)));
            }
        }

        match self.symbols.lookup(&lexeme.text) {
            Some(symbol) => Ok(Some(lexeme.into_token(symbol))),
            None => {
                error!("******** illegal character: {}", lexeme.text);

                let position = Position::new(lexeme.line, lexeme.start, Rc::clone(&self.file));
                self.close();

                Err(Error::new(
                    ErrorImpl::IllegalLexeme {
                        lexeme: lexeme.text,
                    },
                    position,
                ))
            }
        }
    }

    fn skip_comment(&mut self, line: u32) -> Result<(), Error> {
        debug!("skipping comment on line {}", line);

        while self.ch.is_some() && self.line == line {
            self.advance()?;
        }

        Ok(())
    }

    fn resolve(&self, lexeme: &Lexeme, kind: TokenKind) -> Result<Rc<Symbol>, Error> {
        self.symbols.intern(&lexeme.text, kind).ok_or_else(|| {
            Error::new(
                ErrorImpl::IllegalLexeme {
                    lexeme: lexeme.text.clone(),
                },
                Position::new(lexeme.line, lexeme.start, Rc::clone(&self.file)),
            )
        })
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

fn is_identifier_part(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

/// Integer, decimal or scientific, judged on the literal text alone. A
/// literal that fails a check keeps the classification it had before it.
pub fn classify_numeric(literal: &str) -> TokenKind {
    let (mantissa, has_exponent) = match literal.find(['e', 'E']) {
        Some(index) => (&literal[..index], true),
        None => (literal, false),
    };

    let mut kind = TokenKind::Integer;

    if mantissa.contains('.') && NUMBER_LIT.is_match(mantissa) {
        kind = TokenKind::NumberLit;
    }

    if has_exponent && SCIENTIFIC_LIT.is_match(literal) {
        kind = TokenKind::ScientificLit;
    }

    kind
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let lex = Lexer::from_source(&source, file, SymbolTable::seeded())?;
    lex.collect()
}
