//! Error types produced by the generation pass.
//!
//! Eligibility gates are silent skips and never surface here; the
//! variants below cover pass-level failures (unparseable snapshot sources,
//! format-setting extraction) and per-candidate marker misuse, which the
//! assembler isolates per type.

use thiserror::Error;

/// Errors that can occur while running a generation pass.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecordBehaviorError {
    /// A snapshot source failed to parse.
    #[error("failed to parse snapshot source '{name}': {source}")]
    Parse {
        /// Name of the offending source.
        name: String,
        #[source]
        source: syn::Error,
    },

    /// The marker annotation on a candidate declaration is malformed.
    #[error("invalid `#[record_behavior]` marker on `{type_name}`: {source}")]
    Marker {
        /// Simple name of the annotated declaration.
        type_name: String,
        #[source]
        source: syn::Error,
    },

    /// Two candidates resolved to the same output unit name.
    #[error("unit `{unit}` for `{type_name}` collides with a previously emitted unit")]
    UnitNameCollision {
        /// Simple name of the later candidate.
        type_name: String,
        /// The contested unit file name.
        unit: String,
    },

    /// Error while gathering formatting settings from providers.
    #[error("failed to gather format settings: {0}")]
    Format(#[from] figment::Error),
}
