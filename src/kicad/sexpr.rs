//! S-expression tree and pretty printer for KiCad files.
//!
//! KiCad stores footprints as nested lists where bare symbols (`fp_line`,
//! `thru_hole`) are distinct from quoted strings (`"F.SilkS"`). The printer
//! follows the layout KiCad itself writes:
//!
//! ```text
//! (fp_line
//! 	(start 0 0)
//! 	(end 4.08 0)
//! 	(stroke
//! 		(width 0.1)
//! 		(type default)
//! 	)
//! 	(layer "F.Fab")
//! )
//! ```
//!
//! A list whose children are all atoms stays on one line. Any other list
//! keeps its leading atoms on the opening line and puts every following
//! child on its own, one tab deeper.

use std::fmt::{self, Write};

/// Number of decimal places kept when printing numbers.
const NUMBER_PRECISION: usize = 6;

/// An S-expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum SExpr {
    /// Bare symbol, printed without quotes.
    Symbol(String),
    /// String literal, printed quoted and escaped.
    String(String),
    /// Numeric literal.
    Number(f64),
    /// Parenthesised list.
    List(Vec<SExpr>),
}

impl SExpr {
    /// Creates a numeric literal.
    #[must_use]
    pub const fn num(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a bare symbol.
    #[must_use]
    pub fn sym(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates a quoted string.
    #[must_use]
    pub fn str(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Creates a list headed by the symbol `head`, followed by `items`.
    #[must_use]
    pub fn node(head: &str, items: impl IntoIterator<Item = Self>) -> Self {
        let mut list = vec![Self::sym(head)];
        list.extend(items);
        Self::List(list)
    }

    /// Returns true for anything that is not a list.
    #[must_use]
    pub const fn is_atom(&self) -> bool {
        !matches!(self, Self::List(_))
    }

    /// Returns the symbol name, if this is a symbol.
    #[must_use]
    pub fn as_sym(&self) -> Option<&str> {
        match self {
            Self::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the string contents, if this is a string literal.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number, if this is a numeric literal.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the list items, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the head symbol of a list.
    #[must_use]
    pub fn head(&self) -> Option<&str> {
        self.as_list()?.first()?.as_sym()
    }

    /// Returns the first child list headed by `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_list()?.iter().find(|item| item.head() == Some(key))
    }

    /// Returns every child list headed by `key`.
    #[must_use]
    pub fn get_all(&self, key: &str) -> Vec<&Self> {
        self.as_list()
            .map(|items| items.iter().filter(|item| item.head() == Some(key)).collect())
            .unwrap_or_default()
    }

    /// Renders the expression in KiCad's multi-line layout, with a trailing newline.
    #[must_use]
    pub fn to_pretty_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_pretty(&mut out, 0);
        out.push('\n');
        out
    }

    fn write_pretty(&self, out: &mut String, depth: usize) -> fmt::Result {
        let Self::List(items) = self else {
            return write!(out, "{self}");
        };

        if items.iter().all(Self::is_atom) {
            return write!(out, "{self}");
        }

        out.push('(');
        let leading = items.iter().take_while(|item| item.is_atom()).count();
        for (i, atom) in items[..leading].iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            write!(out, "{atom}")?;
        }
        for item in &items[leading..] {
            out.push('\n');
            push_indent(out, depth + 1);
            item.write_pretty(out, depth + 1)?;
        }
        out.push('\n');
        push_indent(out, depth);
        out.push(')');
        Ok(())
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push('\t');
    }
}

/// Formats a number the way KiCad does: fixed precision, no trailing zeros.
#[must_use]
pub fn format_number(value: f64) -> String {
    let mut text = format!("{value:.NUMBER_PRECISION$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            _ => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// Compact single-line rendering.
impl fmt::Display for SExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(s) => f.write_str(s),
            Self::String(s) => write_quoted(f, s),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::List(items) => {
                f.write_char('(')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(')')
            }
        }
    }
}

impl From<f64> for SExpr {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for SExpr {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for SExpr {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
