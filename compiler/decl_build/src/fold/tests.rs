use super::*;
use decl_ir::{PrimitiveType, TypeRef};

fn int_ty() -> TypeRef {
    TypeRef::Primitive(PrimitiveType::Int)
}

fn constant(name: &str, init: ConstExpr) -> FieldDecl {
    FieldDecl::new(name, int_ty())
        .with_modifiers(Modifiers::STATIC | Modifiers::FINAL)
        .with_initializer(init)
}

fn fold_in(owner: &TypeDecl, name: &str) -> Option<ConstantValue> {
    let field = owner.field(name)?;
    fold_constant(owner, field)
}

#[test]
fn literal_folds() {
    let owner = TypeDecl::class("A").with_field(constant("X", ConstExpr::int(4)));
    assert_eq!(fold_in(&owner, "X"), Some(ConstantValue::Int(4)));
}

#[test]
fn non_final_field_is_not_constant() {
    let owner = TypeDecl::class("A").with_field(
        FieldDecl::new("X", int_ty())
            .with_modifiers(Modifiers::STATIC)
            .with_initializer(ConstExpr::int(4)),
    );
    assert_eq!(fold_in(&owner, "X"), None);
}

#[test]
fn field_without_initializer_is_not_constant() {
    let owner = TypeDecl::class("A")
        .with_field(FieldDecl::new("X", int_ty()).with_modifiers(Modifiers::FINAL));
    assert_eq!(fold_in(&owner, "X"), None);
}

#[test]
fn arithmetic_and_references() {
    let owner = TypeDecl::class("A")
        .with_field(constant("BASE", ConstExpr::int(10)))
        .with_field(constant(
            "DERIVED",
            ConstExpr::binary(
                BinaryOp::Mul,
                ConstExpr::reference("BASE"),
                ConstExpr::Neg(Box::new(ConstExpr::int(3))),
            ),
        ));
    assert_eq!(fold_in(&owner, "DERIVED"), Some(ConstantValue::Int(-30)));
}

#[test]
fn string_concatenation() {
    let owner = TypeDecl::class("A").with_field(constant(
        "S",
        ConstExpr::binary(BinaryOp::Add, ConstExpr::string("v"), ConstExpr::int(2)),
    ));
    assert_eq!(fold_in(&owner, "S"), Some(ConstantValue::Str("v2".into())));
}

#[test]
fn widening_to_long_and_double() {
    let owner = TypeDecl::class("A")
        .with_field(constant(
            "L",
            ConstExpr::binary(
                BinaryOp::Add,
                ConstExpr::int(1),
                ConstExpr::Literal(ConstantValue::Long(2)),
            ),
        ))
        .with_field(constant(
            "D",
            ConstExpr::binary(
                BinaryOp::Div,
                ConstExpr::int(1),
                ConstExpr::Literal(ConstantValue::Double(4.0)),
            ),
        ));
    assert_eq!(fold_in(&owner, "L"), Some(ConstantValue::Long(3)));
    assert_eq!(fold_in(&owner, "D"), Some(ConstantValue::Double(0.25)));
}

#[test]
fn int_overflow_wraps() {
    let owner = TypeDecl::class("A")
        .with_field(constant(
            "X",
            ConstExpr::binary(BinaryOp::Add, ConstExpr::int(i64::from(i32::MAX)), ConstExpr::int(1)),
        ))
        .with_field(constant(
            "Y",
            ConstExpr::binary(BinaryOp::Div, ConstExpr::int(i64::from(i32::MIN)), ConstExpr::int(-1)),
        ))
        .with_field(constant(
            "Z",
            ConstExpr::Neg(Box::new(ConstExpr::int(i64::from(i32::MIN)))),
        ));
    assert_eq!(fold_in(&owner, "X"), Some(ConstantValue::Int(i64::from(i32::MIN))));
    assert_eq!(fold_in(&owner, "Y"), Some(ConstantValue::Int(i64::from(i32::MIN))));
    assert_eq!(fold_in(&owner, "Z"), Some(ConstantValue::Int(i64::from(i32::MIN))));
}

#[test]
fn long_overflow_wraps() {
    let owner = TypeDecl::class("A").with_field(constant(
        "X",
        ConstExpr::binary(
            BinaryOp::Mul,
            ConstExpr::Literal(ConstantValue::Long(i64::MAX)),
            ConstExpr::int(2),
        ),
    ));
    assert_eq!(fold_in(&owner, "X"), Some(ConstantValue::Long(-2)));
}

#[test]
fn division_by_zero_is_not_constant() {
    let owner = TypeDecl::class("A")
        .with_field(constant(
            "X",
            ConstExpr::binary(BinaryOp::Div, ConstExpr::int(1), ConstExpr::int(0)),
        ))
        .with_field(constant(
            "Y",
            ConstExpr::binary(BinaryOp::Rem, ConstExpr::int(1), ConstExpr::int(0)),
        ));
    assert_eq!(fold_in(&owner, "X"), None);
    assert_eq!(fold_in(&owner, "Y"), None);
}

#[test]
fn reference_cycle_is_not_constant() {
    let owner = TypeDecl::class("A")
        .with_field(constant("X", ConstExpr::reference("Y")))
        .with_field(constant("Y", ConstExpr::reference("X")));
    assert_eq!(fold_in(&owner, "X"), None);
    assert_eq!(fold_in(&owner, "Y"), None);
}

#[test]
fn same_field_referenced_twice_is_not_a_cycle() {
    let owner = TypeDecl::class("A")
        .with_field(constant("X", ConstExpr::int(2)))
        .with_field(constant(
            "Y",
            ConstExpr::binary(BinaryOp::Add, ConstExpr::reference("X"), ConstExpr::reference("X")),
        ));
    assert_eq!(fold_in(&owner, "Y"), Some(ConstantValue::Int(4)));
}

#[test]
fn reference_to_unknown_or_mutable_field() {
    let owner = TypeDecl::class("A")
        .with_field(FieldDecl::new("M", int_ty()).with_initializer(ConstExpr::int(1)))
        .with_field(constant("X", ConstExpr::reference("M")))
        .with_field(constant("Y", ConstExpr::reference("MISSING")));
    assert_eq!(fold_in(&owner, "X"), None);
    assert_eq!(fold_in(&owner, "Y"), None);
}

#[test]
fn enum_constant_is_never_constant() {
    let mut red = FieldDecl::enum_constant("RED", TypeRef::class("Color"));
    red.initializer = Some(ConstExpr::int(0));
    let owner = TypeDecl::enumeration("Color").with_field(red);
    assert_eq!(fold_in(&owner, "RED"), None);
}

#[test]
fn negating_bool_is_not_constant() {
    let owner = TypeDecl::class("A").with_field(constant(
        "X",
        ConstExpr::Neg(Box::new(ConstExpr::Literal(ConstantValue::Bool(true)))),
    ));
    assert_eq!(fold_in(&owner, "X"), None);
}
