//! Immutable snapshot of declared program shape.
//!
//! A generation pass runs over a [`Snapshot`] taken at pass start: a set of
//! named sources parsed with [`syn::parse_file`]. Nothing in the pipeline
//! mutates the snapshot; discovery and analysis only read it.

use crate::error::RecordBehaviorError;

/// One named, parsed source in the snapshot.
pub(crate) struct SourceFile {
    pub(crate) name: String,
    pub(crate) file: syn::File,
}

/// The declared program shape a generation pass operates on.
#[derive(Default)]
pub struct Snapshot {
    sources: Vec<SourceFile>,
}

impl Snapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a single source into a fresh snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`RecordBehaviorError::Parse`] when `text` is not valid Rust
    /// source.
    pub fn parse_str(text: &str) -> Result<Self, RecordBehaviorError> {
        let mut snapshot = Self::new();
        snapshot.add_source("<snapshot>", text)?;
        Ok(snapshot)
    }

    /// Parses `text` and appends it to the snapshot under `name`.
    ///
    /// Source order is preserved and determines discovery order.
    ///
    /// # Errors
    ///
    /// Returns [`RecordBehaviorError::Parse`] when `text` is not valid Rust
    /// source.
    pub fn add_source(
        &mut self,
        name: impl Into<String>,
        text: &str,
    ) -> Result<(), RecordBehaviorError> {
        let name = name.into();
        let file = syn::parse_file(text).map_err(|source| RecordBehaviorError::Parse {
            name: name.clone(),
            source,
        })?;
        self.sources.push(SourceFile { name, file });
        Ok(())
    }

    pub(crate) fn sources(&self) -> &[SourceFile] {
        &self.sources
    }

    /// Visits every item in every source, recursing into inline modules.
    pub(crate) fn for_each_item(&self, mut visit: impl FnMut(&syn::Item)) {
        fn walk(items: &[syn::Item], visit: &mut impl FnMut(&syn::Item)) {
            for item in items {
                visit(item);
                if let syn::Item::Mod(module) = item
                    && let Some((_, nested)) = &module.content
                {
                    walk(nested, visit);
                }
            }
        }
        for source in &self.sources {
            walk(&source.file.items, &mut visit);
        }
    }
}
