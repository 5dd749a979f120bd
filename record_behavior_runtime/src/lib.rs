//! Support items referenced by `record-behavior` generated units.
//!
//! Generated source is self-contained: the marker-definition unit emitted by
//! the pipeline carries standalone copies of everything in this crate. The
//! crate exists so the pipeline can share the options model and so tests can
//! compile generated-shaped code against the same items the emitted marker
//! unit provides.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Print-hook capability for generated string conversion.
///
/// Implementations append `name = value` pairs for every participating field,
/// separated by `", "`, in declaration order, and report whether anything was
/// appended. The generated `Display` impl calls this hook, so a wrapper type
/// can extend the printed content by delegating to the inner hook from its
/// own implementation.
pub trait FieldPrint {
    /// Appends the printable field text to `out`.
    fn print_fields(&self, out: &mut String) -> bool;
}

/// Configuration flags carried by the `#[record_behavior]` marker.
///
/// The flag set is a plain bit set so future options compose with `|`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordBehaviorOptions(u32);

impl RecordBehaviorOptions {
    /// No options; the default behaviour.
    pub const NONE: Self = Self(0);

    /// Suppresses emission of the zero-argument constructor.
    pub const SKIP_DEFAULT_CONSTRUCTOR: Self = Self(1);

    /// Returns `true` when every bit of `flag` is set in `self`.
    #[must_use]
    pub const fn contains(self, flag: Self) -> bool {
        self.0 & flag.0 == flag.0
    }
}

impl std::ops::BitOr for RecordBehaviorOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for RecordBehaviorOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

macro_rules! define_combine {
    ($name:ident, $arity:literal => $($value:ident: $param:ident),+) => {
        /// Combines the hashes of its arguments into one value.
        ///
        /// Part of the bounded-arity combine primitive (`combine1` through
        /// `combine8`). Generated hash impls partition fields into groups of
        /// at most eight, call one of these per group, and fold the group
        /// values with the same primitive. The arity participates in the
        /// hash so differently shaped groups of equal values stay distinct.
        pub fn $name<$($param: Hash),+>($($value: &$param),+) -> u64 {
            let mut hasher = DefaultHasher::new();
            hasher.write_u8($arity);
            $( $value.hash(&mut hasher); )+
            hasher.finish()
        }
    };
}

define_combine!(combine1, 1u8 => v1: T1);
define_combine!(combine2, 2u8 => v1: T1, v2: T2);
define_combine!(combine3, 3u8 => v1: T1, v2: T2, v3: T3);
define_combine!(combine4, 4u8 => v1: T1, v2: T2, v3: T3, v4: T4);
define_combine!(combine5, 5u8 => v1: T1, v2: T2, v3: T3, v4: T4, v5: T5);
define_combine!(combine6, 6u8 => v1: T1, v2: T2, v3: T3, v4: T4, v5: T5, v6: T6);
define_combine!(combine7, 7u8 => v1: T1, v2: T2, v3: T3, v4: T4, v5: T5, v6: T6, v7: T7);
define_combine!(combine8, 8u8 => v1: T1, v2: T2, v3: T3, v4: T4, v5: T5, v6: T6, v7: T7, v8: T8);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn combine_is_deterministic_for_fixed_inputs() {
        let first = combine2(&"Luna", &7u32);
        let second = combine2(&"Luna", &7u32);
        assert_eq!(first, second);
    }

    #[test]
    fn combine_depends_on_every_argument() {
        assert_ne!(combine2(&"Luna", &7u32), combine2(&"Luna", &8u32));
        assert_ne!(combine2(&"Luna", &7u32), combine2(&"Nova", &7u32));
    }

    #[test]
    fn arity_distinguishes_equal_prefixes() {
        // A one-value group must not collide with a two-value group whose
        // second value hashes to nothing extra.
        assert_ne!(combine1(&""), combine2(&"", &""));
    }

    #[test]
    fn two_level_fold_is_stable() {
        let group0 = combine8(&1, &2, &3, &4, &5, &6, &7, &8);
        let group1 = combine1(&9);
        let folded = combine2(&group0, &group1);
        assert_eq!(folded, combine2(&group0, &group1));
    }

    #[rstest]
    #[case(RecordBehaviorOptions::NONE, false)]
    #[case(RecordBehaviorOptions::SKIP_DEFAULT_CONSTRUCTOR, true)]
    fn options_report_contained_flags(#[case] options: RecordBehaviorOptions, #[case] skip: bool) {
        assert_eq!(
            options.contains(RecordBehaviorOptions::SKIP_DEFAULT_CONSTRUCTOR),
            skip,
        );
        assert!(options.contains(RecordBehaviorOptions::NONE));
    }

    #[test]
    fn options_compose_with_bitor() {
        let mut options = RecordBehaviorOptions::NONE;
        options |= RecordBehaviorOptions::SKIP_DEFAULT_CONSTRUCTOR;
        assert!(options.contains(RecordBehaviorOptions::SKIP_DEFAULT_CONSTRUCTOR));
        assert_eq!(
            options,
            RecordBehaviorOptions::NONE | RecordBehaviorOptions::SKIP_DEFAULT_CONSTRUCTOR,
        );
    }

    struct Wrapper {
        label: String,
    }

    impl FieldPrint for Wrapper {
        fn print_fields(&self, out: &mut String) -> bool {
            use std::fmt::Write as _;
            let _ = write!(out, "label = {}", self.label);
            true
        }
    }

    #[test]
    fn print_hook_appends_field_text() {
        let wrapper = Wrapper {
            label: "Luna".to_owned(),
        };
        let mut out = String::new();
        assert!(wrapper.print_fields(&mut out));
        assert_eq!(out, "label = Luna");
    }
}
