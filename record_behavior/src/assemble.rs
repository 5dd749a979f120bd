//! Output assembly: drives analysis and synthesis per candidate.
//!
//! A generation pass is a pure function from snapshot shape to an artifact
//! set: one marker-definition unit per pass plus one generated unit per
//! eligible candidate. Unit names derive from simple type names, so two
//! same-named candidates in different modules contest one name; the earlier
//! candidate keeps it and the later one is recorded as a failure. Failures
//! are isolated per candidate; one misused marker or contested name never
//! suppresses output for any other type, nor the marker unit.
//! Identical snapshot shape and formatting settings yield byte-identical
//! output, so the artifact set is reproducible and cacheable.

use crate::analyze;
use crate::discover;
use crate::error::RecordBehaviorError;
use crate::format::FormatConfig;
use crate::marker;
use crate::snapshot::Snapshot;
use crate::synthesize;

/// One self-contained generated source unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// File name the unit should be emitted under.
    pub name: String,
    /// Complete unit text; all-or-nothing, never partial.
    pub text: String,
}

/// A per-candidate failure the pass recorded without aborting.
#[derive(Debug)]
pub struct UnitFailure {
    /// Simple name of the candidate that failed.
    pub type_name: String,
    /// What went wrong.
    pub error: RecordBehaviorError,
}

/// Complete artifact set of one generation pass.
#[derive(Debug, Default)]
pub struct GeneratedSet {
    /// Emitted units: the marker-definition unit first, then one unit per
    /// eligible candidate in discovery order.
    pub units: Vec<GeneratedUnit>,
    /// Isolated per-candidate failures.
    pub failures: Vec<UnitFailure>,
}

impl GeneratedSet {
    /// Looks a unit up by its file name.
    #[must_use]
    pub fn unit(&self, name: &str) -> Option<&GeneratedUnit> {
        self.units.iter().find(|unit| unit.name == name)
    }
}

/// Runs one generation pass over `snapshot`.
///
/// Always emits exactly one marker-definition unit, regardless of how many
/// candidates exist (including none).
#[must_use]
pub fn generate(snapshot: &Snapshot, config: &FormatConfig) -> GeneratedSet {
    let mut set = GeneratedSet {
        units: vec![marker::definition_unit(config)],
        failures: Vec::new(),
    };

    let discovered = discover::discover(snapshot);
    for candidate in discovered.all() {
        match analyze::analyze(candidate, snapshot) {
            Ok(Some(model)) => {
                let unit = synthesize::synthesize(&model, config);
                if set.unit(&unit.name).is_some() {
                    tracing::warn!(unit = %unit.name, type_name = %model.qualified_name, "unit name collision; candidate dropped");
                    set.failures.push(UnitFailure {
                        type_name: candidate.ident.to_string(),
                        error: RecordBehaviorError::UnitNameCollision {
                            type_name: candidate.ident.to_string(),
                            unit: unit.name,
                        },
                    });
                } else {
                    tracing::debug!(unit = %unit.name, type_name = %model.qualified_name, "emitted unit");
                    set.units.push(unit);
                }
            }
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(type_name = %candidate.ident, %error, "candidate failed; continuing");
                set.failures.push(UnitFailure {
                    type_name: candidate.ident.to_string(),
                    error,
                });
            }
        }
    }
    set
}
