//! Marker annotation parsing and the marker-definition unit.
//!
//! The `#[record_behavior]` marker opts a declaration in to generation and
//! may carry configuration flags, currently `skip_default_constructor`.
//! Unknown keys are discarded so callers keep compiling when new flags
//! appear; a duplicated marker is an error because the annotation is usable
//! at most once per declaration.
//!
//! The marker-definition unit emitted once per pass carries standalone copies
//! of everything generated units reference, so the artifact set is
//! self-contained when merged back into the producing compilation.

use record_behavior_runtime::RecordBehaviorOptions;
use syn::parenthesized;
use syn::Token;

use crate::assemble::GeneratedUnit;
use crate::discover;
use crate::format::FormatConfig;
use crate::writer::CodeWriter;

/// File name of the marker-definition unit.
pub(crate) const DEFINITION_UNIT_NAME: &str = "record_behavior.rs";

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &syn::meta::ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<proc_macro2::TokenStream>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Extracts the configuration flags from a declaration's marker.
///
/// Unknown flags are intentionally discarded for forwards compatibility;
/// repeating the marker is rejected.
pub(crate) fn parse_marker(attrs: &[syn::Attribute]) -> syn::Result<RecordBehaviorOptions> {
    let markers = discover::marker_attrs(attrs);
    if let Some(repeated) = markers.get(1) {
        return Err(syn::Error::new_spanned(
            repeated,
            "`#[record_behavior]` may appear at most once per declaration",
        ));
    }

    let mut options = RecordBehaviorOptions::NONE;
    for attr in markers {
        if matches!(attr.meta, syn::Meta::Path(_)) {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip_default_constructor") {
                options |= RecordBehaviorOptions::SKIP_DEFAULT_CONSTRUCTOR;
                Ok(())
            } else {
                discard_unknown(&meta)
            }
        })?;
    }
    Ok(options)
}

/// Emits the single per-pass marker-definition unit.
pub(crate) fn definition_unit(config: &FormatConfig) -> GeneratedUnit {
    let mut w = CodeWriter::new(config);
    w.line(&format!(
        "// @generated by {} {}",
        crate::GENERATOR_NAME,
        crate::GENERATOR_VERSION,
    ));
    w.line("//! Marker definitions and support items for record-behavior generated units.");
    w.line("//!");
    w.line("//! Merge this unit as a crate-root `record_behavior` module. The");
    w.line("//! `#[record_behavior]` marker opts a type declaration in to derived value");
    w.line("//! semantics; it applies to struct declarations, at most once per");
    w.line("//! declaration, and is not inherited. Recognised flags:");
    w.line("//! `skip_default_constructor`.");
    w.blank();

    w.line("/// Configuration flags carried by the `#[record_behavior]` marker.");
    w.line("#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]");
    w.line("pub struct RecordBehaviorOptions(pub u32);");
    w.blank();
    w.line("impl RecordBehaviorOptions {");
    w.indent();
    w.line("pub const NONE: Self = Self(0);");
    w.line("pub const SKIP_DEFAULT_CONSTRUCTOR: Self = Self(1);");
    w.outdent();
    w.line("}");
    w.blank();

    w.line("/// Print-hook capability for generated string conversion.");
    w.line("///");
    w.line("/// Appends `name = value` pairs for every participating field, separated");
    w.line("/// by `\", \"`, in declaration order, and reports whether anything was");
    w.line("/// appended.");
    w.line("pub trait FieldPrint {");
    w.indent();
    w.line("fn print_fields(&self, out: &mut ::std::string::String) -> bool;");
    w.outdent();
    w.line("}");

    for arity in 1_usize..=8 {
        let params = (1..=arity)
            .map(|n| format!("T{n}: ::core::hash::Hash"))
            .collect::<Vec<_>>()
            .join(", ");
        let args = (1..=arity)
            .map(|n| format!("v{n}: &T{n}"))
            .collect::<Vec<_>>()
            .join(", ");
        w.blank();
        w.line("/// Bounded-arity hash-combine primitive.");
        w.line(&format!("pub fn combine{arity}<{params}>({args}) -> u64 {{"));
        w.indent();
        w.line("let mut hasher = ::std::collections::hash_map::DefaultHasher::new();");
        w.line(&format!(
            "::core::hash::Hasher::write_u8(&mut hasher, {arity}u8);"
        ));
        for n in 1..=arity {
            w.line(&format!("::core::hash::Hash::hash(v{n}, &mut hasher);"));
        }
        w.line("::core::hash::Hasher::finish(&hasher)");
        w.outdent();
        w.line("}");
    }

    GeneratedUnit {
        name: DEFINITION_UNIT_NAME.to_owned(),
        text: w.finish(),
    }
}
