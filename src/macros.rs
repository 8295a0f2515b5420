//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token from a symbol and its span

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$symbol` - The interned `Rc<Symbol>`
/// * `$start` - Column of the first character
/// * `$end` - Column of the last character
/// * `$line` - Line the token sits on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(symbol, 4, 6, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($symbol:expr, $start:expr, $end:expr, $line:expr) => {
        $crate::lexer::tokens::Token::new(
            $symbol,
            $crate::Span {
                start: $start,
                end: $end,
                line: $line,
            },
        )
    };
}
