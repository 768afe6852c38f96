//! Character classes recognized by the Lox scanner.
//!
//! Lox source is ASCII-only outside string literals: identifiers and numbers
//! never contain non-ASCII characters.

/// Checks if a character is an ASCII decimal digit.
///
/// # Example
///
/// ```
/// use loxc_lex::chars::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(!is_digit('a'));
/// assert!(!is_digit('٣')); // Arabic-Indic digit three
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character can start an identifier: `[A-Za-z_]`.
///
/// # Example
///
/// ```
/// use loxc_lex::chars::is_alpha;
///
/// assert!(is_alpha('a'));
/// assert!(is_alpha('_'));
/// assert!(!is_alpha('1'));
/// assert!(!is_alpha('α'));
/// ```
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier: `[A-Za-z0-9_]`.
#[inline]
pub fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}
