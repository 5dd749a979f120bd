//! Synthesis of derived members for one analyzed candidate.
//!
//! Emits the complete member set deterministically, always in the same
//! order: default constructor, copy constructor, all-fields constructor,
//! instance equality, general equality, hash, string conversion, print hook,
//! deconstruction. Equality and hashing draw on the same eligible-field list
//! in the same order, which keeps the derived pair consistent; the all-fields
//! constructor and deconstruction mirror each other positionally.
//!
//! Units are intended to be `include!`-merged into the module declaring the
//! type; support items are referenced through the marker-definition unit as
//! `crate::record_behavior::*`.

use heck::ToSnakeCase;

use record_behavior_runtime::RecordBehaviorOptions;

use crate::analyze::CandidateType;
use crate::assemble::GeneratedUnit;
use crate::format::FormatConfig;
use crate::writer::{generic_args_text, tokens_text, CodeWriter};

const BOUND_DEFAULT: &str = "::core::default::Default";
const BOUND_CLONE: &str = "::core::clone::Clone";
const BOUND_PARTIAL_EQ: &str = "::core::cmp::PartialEq";
const BOUND_HASH: &str = "::core::hash::Hash";
const BOUND_DISPLAY: &str = "::core::fmt::Display";

/// Bounded fan-in of the hash-combine primitive; field hashes are folded in
/// groups of at most this many values.
const HASH_GROUP_SIZE: usize = 8;

/// Derives the output unit name for a candidate's simple name.
pub(crate) fn unit_name(simple_name: &syn::Ident) -> String {
    format!("{}_record_behavior.rs", simple_name.to_string().to_snake_case())
}

/// Produces the generated unit for one analyzed candidate.
pub(crate) fn synthesize(candidate: &CandidateType, config: &FormatConfig) -> GeneratedUnit {
    let mut w = CodeWriter::new(config);
    w.line(&format!(
        "// @generated by {} {}",
        crate::GENERATOR_NAME,
        crate::GENERATOR_VERSION,
    ));
    w.line(&format!(
        "// Derived value semantics for `{}`.",
        candidate.qualified_name,
    ));
    w.line("// Merge with `include!` from the module declaring the type.");

    let skip_default = candidate.has_default
        || candidate
            .options
            .contains(RecordBehaviorOptions::SKIP_DEFAULT_CONSTRUCTOR);
    if !skip_default {
        w.blank();
        emit_default(&mut w, candidate);
    }
    if !candidate.has_clone {
        w.blank();
        emit_clone(&mut w, candidate);
    }
    w.blank();
    emit_new(&mut w, candidate);
    w.blank();
    emit_eq(&mut w, candidate);
    w.blank();
    emit_dyn_eq(&mut w, candidate);
    w.blank();
    emit_hash(&mut w, candidate);
    w.blank();
    emit_display(&mut w, candidate);
    w.blank();
    emit_print_hook(&mut w, candidate);
    w.blank();
    emit_deconstruct(&mut w, candidate);

    GeneratedUnit {
        name: unit_name(&candidate.simple_name),
        text: w.finish(),
    }
}

/// Rendered generics pieces of one impl header.
struct ImplHeader {
    /// `<T: Bound, U: Bound>` or the empty string.
    params: String,
    /// `<T, U>` or the empty string.
    args: String,
    /// ` where ...` or the empty string.
    where_clause: String,
}

fn impl_header(candidate: &CandidateType, bound: Option<&str>) -> ImplHeader {
    let generics = &candidate.generics;
    let params = if generics.params.is_empty() {
        String::new()
    } else {
        let list = generics
            .params
            .iter()
            .map(|param| param_text(param, bound))
            .collect::<Vec<_>>()
            .join(", ");
        format!("<{list}>")
    };
    let where_clause = generics
        .where_clause
        .as_ref()
        .map(|clause| format!(" {}", tokens_text(clause)))
        .unwrap_or_default();
    ImplHeader {
        params,
        args: generic_args_text(generics),
        where_clause,
    }
}

fn param_text(param: &syn::GenericParam, bound: Option<&str>) -> String {
    match param {
        syn::GenericParam::Lifetime(lifetime) => tokens_text(lifetime),
        syn::GenericParam::Type(type_param) => {
            // Defaults are not permitted in impl headers.
            let mut type_param = type_param.clone();
            type_param.eq_token = None;
            type_param.default = None;
            let mut text = tokens_text(&type_param);
            if let Some(bound) = bound {
                text.push_str(if type_param.bounds.is_empty() { ": " } else { " + " });
                text.push_str(bound);
            }
            text
        }
        syn::GenericParam::Const(const_param) => {
            let mut const_param = const_param.clone();
            const_param.eq_token = None;
            const_param.default = None;
            tokens_text(&const_param)
        }
    }
}

fn trait_impl_line(candidate: &CandidateType, trait_path: &str, bound: Option<&str>) -> String {
    let header = impl_header(candidate, bound);
    format!(
        "impl{} {trait_path} for {}{}{} {{",
        header.params, candidate.simple_name, header.args, header.where_clause,
    )
}

fn inherent_impl_line(candidate: &CandidateType, bound: Option<&str>) -> String {
    let header = impl_header(candidate, bound);
    format!(
        "impl{} {}{}{} {{",
        header.params, candidate.simple_name, header.args, header.where_clause,
    )
}

/// Writes a `Self { ... }` literal, chaining to the default constructor for
/// the fields generation does not participate in.
fn emit_self_literal(w: &mut CodeWriter, field_lines: &[String], chain_to_default: bool) {
    w.line("Self {");
    w.indent();
    for line in field_lines {
        w.line(line);
    }
    if chain_to_default {
        w.line("..Self::default()");
    }
    w.outdent();
    w.line("}");
}

fn emit_default(w: &mut CodeWriter, c: &CandidateType) {
    w.line("#[automatically_derived]");
    w.line(&trait_impl_line(c, BOUND_DEFAULT, Some(BOUND_DEFAULT)));
    w.indent();
    w.line("fn default() -> Self {");
    w.indent();
    let lines: Vec<String> = c
        .all_fields
        .iter()
        .map(|ident| format!("{ident}: ::core::default::Default::default(),"))
        .collect();
    emit_self_literal(w, &lines, false);
    w.outdent();
    w.line("}");
    w.outdent();
    w.line("}");
}

fn emit_clone(w: &mut CodeWriter, c: &CandidateType) {
    let bound = if c.has_ineligible {
        format!("{BOUND_CLONE} + {BOUND_DEFAULT}")
    } else {
        BOUND_CLONE.to_owned()
    };
    w.line("#[automatically_derived]");
    w.line(&trait_impl_line(c, BOUND_CLONE, Some(&bound)));
    w.indent();
    w.line("fn clone(&self) -> Self {");
    w.indent();
    let lines: Vec<String> = c
        .fields
        .iter()
        .map(|field| format!("{ident}: self.{ident}.clone(),", ident = field.ident))
        .collect();
    emit_self_literal(w, &lines, c.has_ineligible);
    w.outdent();
    w.line("}");
    w.outdent();
    w.line("}");
}

fn emit_new(w: &mut CodeWriter, c: &CandidateType) {
    let params = c
        .fields
        .iter()
        .map(|field| format!("{}: {}", field.ident, tokens_text(&field.ty)))
        .collect::<Vec<_>>()
        .join(", ");
    let bound = c.has_ineligible.then_some(BOUND_DEFAULT);
    w.line("#[automatically_derived]");
    w.line(&inherent_impl_line(c, bound));
    w.indent();
    w.line(&format!("pub fn new({params}) -> Self {{"));
    w.indent();
    let lines: Vec<String> = c
        .fields
        .iter()
        .map(|field| format!("{},", field.ident))
        .collect();
    emit_self_literal(w, &lines, c.has_ineligible);
    w.outdent();
    w.line("}");
    w.outdent();
    w.line("}");
}

fn emit_eq(w: &mut CodeWriter, c: &CandidateType) {
    let comparisons = c
        .fields
        .iter()
        .map(|field| format!("self.{ident} == other.{ident}", ident = field.ident))
        .collect::<Vec<_>>()
        .join(" && ");
    w.line("#[automatically_derived]");
    w.line(&trait_impl_line(c, BOUND_PARTIAL_EQ, Some(BOUND_PARTIAL_EQ)));
    w.indent();
    w.line("fn eq(&self, other: &Self) -> bool {");
    w.indent();
    w.line(&format!("::core::ptr::eq(self, other) || ({comparisons})"));
    w.outdent();
    w.line("}");
    w.outdent();
    w.line("}");
}

fn emit_dyn_eq(w: &mut CodeWriter, c: &CandidateType) {
    let bound = format!("{BOUND_PARTIAL_EQ} + 'static");
    w.line("#[automatically_derived]");
    w.line(&inherent_impl_line(c, Some(&bound)));
    w.indent();
    w.line("pub fn dyn_eq(&self, other: &dyn ::core::any::Any) -> bool {");
    w.indent();
    w.line("other.downcast_ref::<Self>().is_some_and(|item| self == item)");
    w.outdent();
    w.line("}");
    w.outdent();
    w.line("}");
}

fn emit_hash(w: &mut CodeWriter, c: &CandidateType) {
    w.line("#[automatically_derived]");
    w.line(&trait_impl_line(c, BOUND_HASH, Some(BOUND_HASH)));
    w.indent();
    w.line("fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {");
    w.indent();
    let groups: Vec<_> = c.fields.chunks(HASH_GROUP_SIZE).collect();
    for (index, group) in groups.iter().enumerate() {
        let args = group
            .iter()
            .map(|field| format!("&self.{}", field.ident))
            .collect::<Vec<_>>()
            .join(", ");
        w.line(&format!(
            "let group{index} = crate::record_behavior::combine{}({args});",
            group.len(),
        ));
    }
    if groups.len() == 1 {
        w.line("state.write_u64(group0);");
    } else {
        let folded = (0..groups.len())
            .map(|index| format!("&group{index}"))
            .collect::<Vec<_>>()
            .join(", ");
        w.line(&format!(
            "state.write_u64(crate::record_behavior::combine{}({folded}));",
            groups.len(),
        ));
    }
    w.outdent();
    w.line("}");
    w.outdent();
    w.line("}");
}

fn emit_display(w: &mut CodeWriter, c: &CandidateType) {
    w.line("#[automatically_derived]");
    w.line(&trait_impl_line(c, BOUND_DISPLAY, Some(BOUND_DISPLAY)));
    w.indent();
    w.line("fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {");
    w.indent();
    w.line("let mut printed = ::std::string::String::new();");
    if c.overridable {
        w.line("let _ = crate::record_behavior::FieldPrint::print_fields(self, &mut printed);");
    } else {
        w.line("let _ = self.print_fields(&mut printed);");
    }
    w.line(&format!("f.write_str(\"{}\")?;", c.simple_name));
    w.line("f.write_str(\" { \")?;");
    w.line("f.write_str(&printed)?;");
    w.line("f.write_str(\" } \")");
    w.outdent();
    w.line("}");
    w.outdent();
    w.line("}");
}

fn emit_print_hook(w: &mut CodeWriter, c: &CandidateType) {
    w.line("#[automatically_derived]");
    if c.overridable {
        w.line(&trait_impl_line(
            c,
            "crate::record_behavior::FieldPrint",
            Some(BOUND_DISPLAY),
        ));
    } else {
        w.line(&inherent_impl_line(c, Some(BOUND_DISPLAY)));
    }
    w.indent();
    w.line("fn print_fields(&self, out: &mut ::std::string::String) -> bool {");
    w.indent();
    w.line("use ::core::fmt::Write as _;");
    for (index, field) in c.fields.iter().enumerate() {
        let prefix = if index == 0 { "" } else { ", " };
        w.line(&format!(
            "let _ = ::core::write!(out, \"{prefix}{ident} = {{}}\", self.{ident});",
            ident = field.ident,
        ));
    }
    w.line("true");
    w.outdent();
    w.line("}");
    w.outdent();
    w.line("}");
}

fn emit_deconstruct(w: &mut CodeWriter, c: &CandidateType) {
    let types: Vec<String> = c.fields.iter().map(|field| tokens_text(&field.ty)).collect();
    let idents: Vec<String> = c.fields.iter().map(|field| field.ident.to_string()).collect();
    let (tuple_ty, tuple_expr) = if types.len() == 1 {
        (format!("({},)", types[0]), format!("({},)", idents[0]))
    } else {
        (
            format!("({})", types.join(", ")),
            format!("({})", idents.join(", ")),
        )
    };
    let pattern = if c.has_ineligible {
        format!("let Self {{ {}, .. }} = self;", idents.join(", "))
    } else {
        format!("let Self {{ {} }} = self;", idents.join(", "))
    };
    w.line("#[automatically_derived]");
    w.line(&inherent_impl_line(c, None));
    w.indent();
    w.line(&format!("pub fn deconstruct(self) -> {tuple_ty} {{"));
    w.indent();
    w.line(&pattern);
    w.line(&tuple_expr);
    w.outdent();
    w.line("}");
    w.outdent();
    w.line("}");
}
