//! Property-based tests for the equivalence check.
//!
//! Generates units whose fields mix literal and computed initializers and
//! verifies that checks are repeatable and that the reported heavy load
//! matches what the light strategy cannot answer on its own.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use decl_build::StandardConstructor;
use decl_check::{EquivalenceChecker, LoadExpectation, RecordingSink};
use decl_ir::{BinaryOp, ConstExpr, FieldDecl, Modifiers, PrimitiveType, SourceUnit, TypeDecl, TypeRef};
use proptest::prelude::*;

/// (is final, initializer is computed)
type FieldShape = (bool, bool);

fn unit_strategy() -> impl Strategy<Value = Vec<Vec<FieldShape>>> {
    prop::collection::vec(
        prop::collection::vec((any::<bool>(), any::<bool>()), 0..5),
        0..4,
    )
}

fn build_unit(classes: &[Vec<FieldShape>]) -> SourceUnit {
    let mut unit = SourceUnit::new("src/gen/Gen.kt").with_package("gen");
    for (i, fields) in classes.iter().enumerate() {
        let mut decl = TypeDecl::class(format!("C{i}"));
        for (j, (is_final, computed)) in fields.iter().enumerate() {
            let flags = if *is_final {
                Modifiers::STATIC | Modifiers::FINAL
            } else {
                Modifiers::STATIC
            };
            let init = if *computed {
                ConstExpr::binary(BinaryOp::Add, ConstExpr::int(j as i64), ConstExpr::int(1))
            } else {
                ConstExpr::int(j as i64)
            };
            decl = decl.with_field(
                FieldDecl::new(format!("f{j}"), TypeRef::Primitive(PrimitiveType::Int))
                    .with_modifiers(flags)
                    .with_initializer(init),
            );
        }
        unit = unit.with_type(decl);
    }
    unit
}

fn needs_heavy(classes: &[Vec<FieldShape>]) -> bool {
    classes
        .iter()
        .flatten()
        .any(|(is_final, computed)| *is_final && *computed)
}

proptest! {
    #[test]
    fn check_is_repeatable(classes in unit_strategy()) {
        let unit = build_unit(&classes);
        let checker = EquivalenceChecker::new(StandardConstructor, RecordingSink::new());

        let first = checker.check(&unit, LoadExpectation::NoConstraint);
        let second = checker.check(&unit, LoadExpectation::NoConstraint);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, Ok(needs_heavy(&classes)));
        prop_assert!(checker.sink().is_empty());
    }

    #[test]
    fn forbidden_load_fails_exactly_when_needed(classes in unit_strategy()) {
        let unit = build_unit(&classes);
        let checker = EquivalenceChecker::new(StandardConstructor, RecordingSink::new());

        let result = checker.check(&unit, LoadExpectation::RequireNotLoaded);
        prop_assert_eq!(result.is_err(), needs_heavy(&classes));
        prop_assert_eq!(checker.sink().failures().len(), usize::from(needs_heavy(&classes)));
    }
}
