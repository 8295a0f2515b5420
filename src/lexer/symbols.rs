//! Interning registry for lexemes.
//!
//! A [`SymbolTable`] hands out exactly one [`Symbol`] per distinct lexeme.
//! It starts empty; [`SymbolTable::seed`] declares the reserved words and
//! every valid operator/separator, and from then on the table is the only
//! authority on which of those lexemes exist. Entries are never removed or
//! changed once inserted.

use std::{
    cell::RefCell,
    collections::{hash_map::Entry, HashMap},
    rc::Rc,
};

use log::debug;

use super::tokens::{Symbol, TokenKind, OPERATOR_LOOKUP, RESERVED_LOOKUP};

/// Shared by every scanner that holds an `Rc` to it. Interior mutability
/// keeps `intern` usable through a shared reference.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: RefCell<HashMap<String, Rc<Symbol>>>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    /// A table that has already been through [`SymbolTable::seed`].
    pub fn seeded() -> Rc<SymbolTable> {
        let table = SymbolTable::new();
        table.seed();
        Rc::new(table)
    }

    /// Declares every reserved word and operator. Safe to call again; the
    /// existing entries win.
    pub fn seed(&self) {
        for (lexeme, kind) in RESERVED_LOOKUP.iter().chain(OPERATOR_LOOKUP.iter()) {
            self.declare(lexeme, *kind);
        }

        debug!("symbol table seeded with {} entries", self.len());
    }

    /// Returns the symbol registered for `lexeme`, registering it with `kind`
    /// on first sight. A `BogusToken` probe never registers anything: it
    /// only finds what is already declared.
    pub fn intern(&self, lexeme: &str, kind: TokenKind) -> Option<Rc<Symbol>> {
        let mut symbols = self.symbols.borrow_mut();

        if let Some(symbol) = symbols.get(lexeme) {
            return Some(Rc::clone(symbol));
        }

        if kind == TokenKind::BogusToken {
            return None;
        }

        let symbol = Rc::new(Symbol::new(lexeme, kind));
        symbols.insert(lexeme.to_string(), Rc::clone(&symbol));
        Some(symbol)
    }

    pub fn lookup(&self, lexeme: &str) -> Option<Rc<Symbol>> {
        self.intern(lexeme, TokenKind::BogusToken)
    }

    pub fn contains(&self, lexeme: &str) -> bool {
        self.symbols.borrow().contains_key(lexeme)
    }

    pub fn len(&self) -> usize {
        self.symbols.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.borrow().is_empty()
    }

    fn declare(&self, lexeme: &str, kind: TokenKind) {
        if let Entry::Vacant(entry) = self.symbols.borrow_mut().entry(lexeme.to_string()) {
            entry.insert(Rc::new(Symbol::new(lexeme, kind)));
        }
    }
}
