//! Indentation-aware text emission for generated units.
//!
//! The writer owns the output buffer and the current indentation level; the
//! indentation unit comes from the formatting configuration, so layout
//! follows externally supplied preferences while content stays byte-stable
//! for a fixed input shape.

use quote::ToTokens;

use crate::format::FormatConfig;

/// Accumulates indented lines of generated source text.
pub(crate) struct CodeWriter {
    out: String,
    unit: String,
    level: usize,
}

impl CodeWriter {
    pub(crate) fn new(config: &FormatConfig) -> Self {
        Self {
            out: String::new(),
            unit: config.indent_unit(),
            level: 0,
        }
    }

    /// Writes one line at the current indentation level.
    pub(crate) fn line(&mut self, text: &str) {
        for _ in 0..self.level {
            self.out.push_str(&self.unit);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Writes an empty separator line carrying no indentation.
    pub(crate) fn blank(&mut self) {
        self.out.push('\n');
    }

    pub(crate) fn indent(&mut self) {
        self.level += 1;
    }

    pub(crate) fn outdent(&mut self) {
        debug_assert!(self.level > 0, "unbalanced outdent");
        self.level = self.level.saturating_sub(1);
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

/// Renders syntax-tree tokens as compact source text.
///
/// Token streams print with single spaces between every token
/// (`Vec < String >`); the tidy pass below collapses the separators that make
/// type and generics text unreadable. Only type and generics positions are
/// rendered this way, so the replacements never touch expression text.
pub(crate) fn tokens_text(tokens: &impl ToTokens) -> String {
    let mut text = tokens.to_token_stream().to_string();
    for (from, to) in [
        (" :: ", "::"),
        (":: ", "::"),
        (" ::", "::"),
        (" < ", "<"),
        ("< ", "<"),
        (" <", "<"),
        (" >", ">"),
        (" ,", ","),
        ("& ", "&"),
        (" : ", ": "),
        (" ;", ";"),
    ] {
        text = text.replace(from, to);
    }
    text
}

/// Renders the bare argument list of a generics clause (`<T, U>`), or the
/// empty string for non-generic declarations.
pub(crate) fn generic_args_text(generics: &syn::Generics) -> String {
    if generics.params.is_empty() {
        return String::new();
    }
    let args = generics
        .params
        .iter()
        .map(|param| match param {
            syn::GenericParam::Lifetime(lt) => lt.lifetime.to_string(),
            syn::GenericParam::Type(ty) => ty.ident.to_string(),
            syn::GenericParam::Const(konst) => konst.ident.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("<{args}>")
}
