// this module is transparently re-exported by its parent `term`
//
// Implement the Display trait for terms, using the N-Triples syntax.

use std::fmt::{self, Write};

use super::*;

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => fmt::Display::fmt(iri, f),
            Term::BlankNode(bn) => fmt::Display::fmt(bn, f),
            Term::Literal(lit) => fmt::Display::fmt(lit, f),
        }
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

/// NB: the scope is not rendered,
/// so blank nodes from different scopes may be displayed identically.
impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.id())
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        quoted_string(f, self.lexical_form())?;
        f.write_char('"')?;
        match self.kind() {
            LiteralKind::Plain => Ok(()),
            LiteralKind::Typed(dt) => write!(f, "^^{dt}"),
            LiteralKind::Lang(tag) => write!(f, "@{tag}"),
        }
    }
}

fn quoted_string<W: Write>(w: &mut W, txt: &str) -> fmt::Result {
    for c in txt.chars() {
        match c {
            '\u{08}' => w.write_str("\\b")?,
            '\t' => w.write_str("\\t")?,
            '\n' => w.write_str("\\n")?,
            '\u{0C}' => w.write_str("\\f")?,
            '\r' => w.write_str("\\r")?,
            '"' => w.write_str("\\\"")?,
            '\\' => w.write_str("\\\\")?,
            '\u{00}'..='\u{1F}' | '\u{7F}' => write!(w, "\\u{:04X}", c as u32)?,
            '\u{FFFE}' => w.write_str("\\uFFFE")?,
            '\u{FFFF}' => w.write_str("\\uFFFF")?,
            _ => w.write_char(c)?,
        }
    }
    Ok(())
}
