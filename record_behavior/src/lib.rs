//! Derives value-type semantics for immutable aggregates from their declared
//! shape.
//!
//! A generation pass consumes an immutable [`Snapshot`] of Rust source,
//! discovers declarations carrying the `#[record_behavior]` marker, analyzes
//! their eligible (immutable-after-construction) field sets, and synthesizes
//! a complete, internally consistent bundle of derived members per type:
//! constructors, structural equality, a consistent hash, string rendering
//! through an overridable print hook, and positional deconstruction. The
//! pass is a pure function: no I/O, no shared mutable state, byte-identical
//! output for identical input shape.
//!
//! ```rust
//! use record_behavior::{generate, FormatConfig, Snapshot};
//!
//! let snapshot = Snapshot::parse_str(
//!     "#[record_behavior] pub struct Pet { name: String }",
//! )?;
//! let artifacts = generate(&snapshot, &FormatConfig::default());
//! assert!(artifacts.unit("pet_record_behavior.rs").is_some());
//! # Ok::<(), record_behavior::RecordBehaviorError>(())
//! ```
//!
//! Eligibility gates are silent skips: a static-like, tuple-shaped,
//! fieldless, or already-equality-bearing declaration produces no unit and no
//! diagnostic. Collisions between generated and hand-written members are not
//! prevented here; they surface when the merged compilation builds.

mod analyze;
mod assemble;
mod discover;
mod error;
mod format;
mod marker;
mod snapshot;
mod synthesize;
mod writer;

pub use assemble::{generate, GeneratedSet, GeneratedUnit, UnitFailure};
pub use error::RecordBehaviorError;
pub use format::{FormatConfig, IndentStyle};
pub use snapshot::Snapshot;

/// Items generated units lean on, re-exported for embedders and tests.
pub use record_behavior_runtime as runtime;

pub(crate) const GENERATOR_NAME: &str = "record-behavior";
pub(crate) const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");
