//! Discovery of marker-annotated type declarations.
//!
//! Walks every type declaration in the snapshot, including those nested in
//! inline modules, and collects the ones carrying `#[record_behavior]` by
//! exact bare-ident match. No inheritance-style or path-qualified matching is
//! performed, and no shape analysis happens here; everything beyond marker
//! presence is deferred to the analyzer.

use syn::visit::{self, Visit};

use crate::snapshot::Snapshot;

/// Exact name of the marker annotation.
pub(crate) const MARKER: &str = "record_behavior";

/// Declaration kind of a discovered candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DeclKind {
    /// Named-field or unit struct.
    Struct,
    /// Tuple struct.
    TupleStruct,
    /// Enum declaration.
    Enum,
    /// Union, trait, or type-alias declaration.
    Other,
}

/// One marker-carrying declaration awaiting analysis.
pub(crate) struct Candidate {
    pub(crate) ident: syn::Ident,
    pub(crate) kind: DeclKind,
    /// Inline-module path from the source root ("namespace").
    pub(crate) module_path: Vec<String>,
    pub(crate) attrs: Vec<syn::Attribute>,
    /// Present for struct kinds; the analyzer needs the field list.
    pub(crate) strukt: Option<syn::ItemStruct>,
}

/// Discovered candidates, partitioned by declaration kind.
#[derive(Default)]
pub(crate) struct DiscoverySet {
    pub(crate) structs: Vec<Candidate>,
    pub(crate) tuple_structs: Vec<Candidate>,
    pub(crate) enums: Vec<Candidate>,
    pub(crate) other: Vec<Candidate>,
}

impl DiscoverySet {
    /// All candidates in deterministic order: kind-major, then source order.
    pub(crate) fn all(&self) -> impl Iterator<Item = &Candidate> {
        self.structs
            .iter()
            .chain(&self.tuple_structs)
            .chain(&self.enums)
            .chain(&self.other)
    }
}

/// Returns the marker attributes carried by `attrs`.
pub(crate) fn marker_attrs(attrs: &[syn::Attribute]) -> Vec<&syn::Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(MARKER))
        .collect()
}

/// Scans the snapshot for marker-annotated declarations.
pub(crate) fn discover(snapshot: &Snapshot) -> DiscoverySet {
    let mut scan = MarkerScan {
        path: Vec::new(),
        set: DiscoverySet::default(),
    };
    for source in snapshot.sources() {
        scan.visit_file(&source.file);
    }
    tracing::debug!(
        structs = scan.set.structs.len(),
        tuple_structs = scan.set.tuple_structs.len(),
        enums = scan.set.enums.len(),
        other = scan.set.other.len(),
        "discovered marker-annotated declarations",
    );
    scan.set
}

struct MarkerScan {
    path: Vec<String>,
    set: DiscoverySet,
}

impl MarkerScan {
    fn candidate(
        &self,
        ident: &syn::Ident,
        kind: DeclKind,
        attrs: &[syn::Attribute],
        strukt: Option<&syn::ItemStruct>,
    ) -> Candidate {
        Candidate {
            ident: ident.clone(),
            kind,
            module_path: self.path.clone(),
            attrs: attrs.to_vec(),
            strukt: strukt.cloned(),
        }
    }
}

impl<'ast> Visit<'ast> for MarkerScan {
    fn visit_item_mod(&mut self, node: &'ast syn::ItemMod) {
        self.path.push(node.ident.to_string());
        visit::visit_item_mod(self, node);
        self.path.pop();
    }

    fn visit_item_struct(&mut self, node: &'ast syn::ItemStruct) {
        if marker_attrs(&node.attrs).is_empty() {
            return;
        }
        let kind = match node.fields {
            syn::Fields::Unnamed(_) => DeclKind::TupleStruct,
            syn::Fields::Named(_) | syn::Fields::Unit => DeclKind::Struct,
        };
        let candidate = self.candidate(&node.ident, kind, &node.attrs, Some(node));
        match kind {
            DeclKind::TupleStruct => self.set.tuple_structs.push(candidate),
            _ => self.set.structs.push(candidate),
        }
    }

    fn visit_item_enum(&mut self, node: &'ast syn::ItemEnum) {
        if !marker_attrs(&node.attrs).is_empty() {
            self.set
                .enums
                .push(self.candidate(&node.ident, DeclKind::Enum, &node.attrs, None));
        }
    }

    fn visit_item_union(&mut self, node: &'ast syn::ItemUnion) {
        if !marker_attrs(&node.attrs).is_empty() {
            self.set
                .other
                .push(self.candidate(&node.ident, DeclKind::Other, &node.attrs, None));
        }
    }

    fn visit_item_trait(&mut self, node: &'ast syn::ItemTrait) {
        if !marker_attrs(&node.attrs).is_empty() {
            self.set
                .other
                .push(self.candidate(&node.ident, DeclKind::Other, &node.attrs, None));
        }
    }

    fn visit_item_type(&mut self, node: &'ast syn::ItemType) {
        if !marker_attrs(&node.attrs).is_empty() {
            self.set
                .other
                .push(self.candidate(&node.ident, DeclKind::Other, &node.attrs, None));
        }
    }
}
