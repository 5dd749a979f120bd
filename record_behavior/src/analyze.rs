//! Eligibility analysis: from discovered candidate to typed model.
//!
//! Consumes one discovered declaration at a time and either produces the
//! [`CandidateType`] model the synthesizer runs on, or excludes the
//! declaration. Every exclusion gate is a silent skip: no
//! diagnostic is surfaced, only a `tracing` debug event. Marker misuse is the
//! exception; it is a per-candidate error the assembler isolates.
//!
//! Collisions with hand-written members beyond the inventoried constructor
//! shapes are deliberately not checked here; they surface downstream when the
//! merged compilation builds.

use record_behavior_runtime::RecordBehaviorOptions;

use crate::discover::{Candidate, DeclKind};
use crate::error::RecordBehaviorError;
use crate::marker;
use crate::snapshot::Snapshot;
use crate::writer::generic_args_text;

/// Immutability class of an eligible field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mutability {
    /// Plain field; never changes after construction.
    Frozen,
    /// Write-once cell (`OnceCell` / `OnceLock`); settled after construction.
    SetOnce,
}

/// One participating member of a candidate type, in declaration order.
#[derive(Debug)]
pub(crate) struct EligibleField {
    pub(crate) ident: syn::Ident,
    pub(crate) ty: syn::Type,
    pub(crate) mutability: Mutability,
}

/// Analyzed shape of one annotated declaration, ready for synthesis.
///
/// Constructed fresh per generation pass and never mutated afterwards; the
/// synthesizer only reads it.
#[derive(Debug)]
pub(crate) struct CandidateType {
    pub(crate) simple_name: syn::Ident,
    /// `crate::`-rooted display path, for logs and unit headers.
    pub(crate) qualified_name: String,
    pub(crate) generics: syn::Generics,
    pub(crate) generic_arity: usize,
    pub(crate) overridable: bool,
    /// Eligible fields in declaration order.
    pub(crate) fields: Vec<EligibleField>,
    /// Every field ident in declaration order, eligible or not; the
    /// zero-argument constructor must initialise all of them.
    pub(crate) all_fields: Vec<syn::Ident>,
    pub(crate) has_ineligible: bool,
    /// Existing-constructor inventory: a zero-argument constructor
    /// (`Default`) is already declared or derived.
    pub(crate) has_default: bool,
    /// Existing-constructor inventory: a copy constructor (`Clone`) is
    /// already declared or derived.
    pub(crate) has_clone: bool,
    pub(crate) options: RecordBehaviorOptions,
}

/// Analyzes one candidate, returning `None` for silent exclusions.
///
/// # Errors
///
/// Returns [`RecordBehaviorError::Marker`] when the marker annotation itself
/// is misused (repeated on the declaration).
pub(crate) fn analyze(
    candidate: &Candidate,
    snapshot: &Snapshot,
) -> Result<Option<CandidateType>, RecordBehaviorError> {
    let name = candidate.ident.to_string();
    let options =
        marker::parse_marker(&candidate.attrs).map_err(|source| RecordBehaviorError::Marker {
            type_name: name.clone(),
            source,
        })?;

    let Some(strukt) = &candidate.strukt else {
        tracing::debug!(type_name = %name, kind = ?candidate.kind, "skipped: not an augmentable declaration");
        return Ok(None);
    };
    let named = match &strukt.fields {
        syn::Fields::Unit => {
            tracing::debug!(type_name = %name, "skipped: no instance state");
            return Ok(None);
        }
        syn::Fields::Unnamed(_) => {
            tracing::debug!(type_name = %name, "skipped: not an augmentable declaration");
            return Ok(None);
        }
        syn::Fields::Named(named) => named,
    };
    debug_assert_eq!(candidate.kind, DeclKind::Struct);

    let mut fields = Vec::new();
    let mut all_fields = Vec::new();
    let mut has_ineligible = false;
    for field in &named.named {
        // Inside `Fields::Named` every field carries an ident.
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        all_fields.push(ident.clone());
        match immutability(&field.ty) {
            Some(mutability) => fields.push(EligibleField {
                ident,
                ty: field.ty.clone(),
                mutability,
            }),
            None => has_ineligible = true,
        }
    }
    if fields.is_empty() {
        tracing::debug!(type_name = %name, "skipped: no eligible fields");
        return Ok(None);
    }

    if implements_trait(snapshot, strukt, "PartialEq") {
        tracing::debug!(type_name = %name, "skipped: already declares value equality");
        return Ok(None);
    }

    let qualified_name = qualified_name(candidate, strukt);
    let overridable = matches!(strukt.vis, syn::Visibility::Public(_));

    Ok(Some(CandidateType {
        simple_name: strukt.ident.clone(),
        qualified_name,
        generic_arity: strukt.generics.type_params().count(),
        generics: strukt.generics.clone(),
        overridable,
        fields,
        all_fields,
        has_ineligible,
        has_default: implements_trait(snapshot, strukt, "Default"),
        has_clone: implements_trait(snapshot, strukt, "Clone"),
        options,
    }))
}

/// Type-path segments whose values can change after construction.
const INTERIOR_MUTABLE: &[&str] = &["Cell", "RefCell", "UnsafeCell", "Mutex", "RwLock"];

/// Write-once wrappers; settled after construction, so still eligible.
const SET_ONCE: &[&str] = &["OnceCell", "OnceLock"];

/// Classifies a field type, or returns `None` for ineligible (mutable)
/// fields. Matching is shallow, by the outermost type-path segment.
fn immutability(ty: &syn::Type) -> Option<Mutability> {
    let syn::Type::Path(path) = ty else {
        return Some(Mutability::Frozen);
    };
    let last = path.path.segments.last()?.ident.to_string();
    if INTERIOR_MUTABLE.contains(&last.as_str()) || last.starts_with("Atomic") {
        return None;
    }
    if SET_ONCE.contains(&last.as_str()) {
        return Some(Mutability::SetOnce);
    }
    Some(Mutability::Frozen)
}

fn qualified_name(candidate: &Candidate, strukt: &syn::ItemStruct) -> String {
    let mut path = String::from("crate");
    for segment in &candidate.module_path {
        path.push_str("::");
        path.push_str(segment);
    }
    format!(
        "{path}::{}{}",
        strukt.ident,
        generic_args_text(&strukt.generics),
    )
}

/// Whether the snapshot already supplies `trait_name` for the struct, either
/// through its derive list or through an impl anywhere in the snapshot.
///
/// Matching is name-based: last path segment against the declaration ident.
/// No type resolution happens, so a same-named impl for an unrelated type in
/// another module also counts.
fn implements_trait(snapshot: &Snapshot, strukt: &syn::ItemStruct, trait_name: &str) -> bool {
    if derives_trait(&strukt.attrs, trait_name) {
        return true;
    }
    let mut found = false;
    snapshot.for_each_item(|item| {
        let syn::Item::Impl(imp) = item else { return };
        let Some((_, trait_path, _)) = &imp.trait_ else {
            return;
        };
        let Some(last) = trait_path.segments.last() else {
            return;
        };
        if last.ident != trait_name {
            return;
        }
        if let syn::Type::Path(self_ty) = imp.self_ty.as_ref()
            && let Some(self_last) = self_ty.path.segments.last()
            && self_last.ident == strukt.ident
        {
            found = true;
        }
    });
    found
}

fn derives_trait(attrs: &[syn::Attribute], trait_name: &str) -> bool {
    let mut found = false;
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last()
                && last.ident == trait_name
            {
                found = true;
            }
            Ok(())
        });
    }
    found
}
