use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, rc::Rc};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("program", TokenKind::Program);
        map.insert("int", TokenKind::Int);
        map.insert("boolean", TokenKind::Boolean);
        map.insert("number", TokenKind::Number);
        map.insert("scientific", TokenKind::Scientific);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("function", TokenKind::Function);
        map.insert("return", TokenKind::Return);
        map
    };

    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("{", TokenKind::LeftBrace);
        map.insert("}", TokenKind::RightBrace);
        map.insert("(", TokenKind::LeftParen);
        map.insert(")", TokenKind::RightParen);
        map.insert(",", TokenKind::Comma);
        map.insert("=", TokenKind::Assign);
        map.insert("==", TokenKind::Equal);
        map.insert("!=", TokenKind::NotEqual);
        map.insert("<", TokenKind::Less);
        map.insert("<=", TokenKind::LessEqual);
        map.insert(">", TokenKind::Greater);
        map.insert(">=", TokenKind::GreaterEqual);
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Minus);
        map.insert("|", TokenKind::Or);
        map.insert("&", TokenKind::And);
        map.insert("*", TokenKind::Multiply);
        map.insert("/", TokenKind::Divide);
        map.insert("//", TokenKind::Comment);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Integer,       // 12
    NumberLit,     // 12.5, 12., .5
    ScientificLit, // 1.5e-3

    // Reserved
    Program,
    Int,
    Boolean,
    Number,
    Scientific,
    If,
    Then,
    Else,
    While,
    Function,
    Return,

    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    Comma,

    Assign,   // =
    Equal,    // ==
    NotEqual, // !=
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    Plus,
    Minus,
    Or,
    And,
    Multiply,
    Divide,

    Comment, // never emitted

    BogusToken,
}

impl TokenKind {
    pub fn is_reserved(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Integer | TokenKind::NumberLit | TokenKind::ScientificLit
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The interned form of a lexeme. Symbols are only created by a
/// [`SymbolTable`](super::symbols::SymbolTable), one per distinct lexeme.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    lexeme: String,
    kind: TokenKind,
}

impl Symbol {
    pub(super) fn new(lexeme: &str, kind: TokenKind) -> Self {
        Symbol {
            lexeme: lexeme.to_string(),
            kind,
        }
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    symbol: Rc<Symbol>,
    span: Span,
}

impl Token {
    pub fn new(symbol: Rc<Symbol>, span: Span) -> Self {
        Token { symbol, span }
    }

    pub fn symbol(&self) -> &Rc<Symbol> {
        &self.symbol
    }

    pub fn kind(&self) -> TokenKind {
        self.symbol.kind()
    }

    pub fn lexeme(&self) -> &str {
        self.symbol.lexeme()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn left_position(&self) -> u32 {
        self.span.start
    }

    pub fn right_position(&self) -> u32 {
        self.span.end
    }

    pub fn line(&self) -> u32 {
        self.span.line
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>6} {:>6}   line: {:>3}   {:<14} {}",
            self.span.start,
            self.span.end,
            self.span.line,
            self.kind().to_string(),
            self.lexeme()
        )
    }
}
