use super::*;
use decl_ir::{BinaryOp, ConstExpr, Modifiers, PrimitiveType};

fn int() -> TypeRef {
    TypeRef::Primitive(PrimitiveType::Int)
}

fn constant(name: &str, init: ConstExpr) -> FieldDecl {
    FieldDecl::new(name, int())
        .with_modifiers(Modifiers::STATIC | Modifiers::FINAL)
        .with_initializer(init)
}

fn folded() -> ConstExpr {
    ConstExpr::binary(BinaryOp::Add, ConstExpr::int(1), ConstExpr::int(2))
}

#[test]
fn fast_strategy() {
    let decl = TypeDecl::class("A");
    let class = LightClass::new(&decl, "p.A");
    assert_eq!(class.strategy(), Strategy::Fast);
    assert_eq!(class.qualified_name(), "p.A");
    assert!(!class.is_heavy_loaded());
}

#[test]
fn literal_constant_does_not_load_heavy() {
    let decl = TypeDecl::class("A").with_field(constant("X", ConstExpr::int(7)));
    let class = LightClass::new(&decl, "A");
    let fields = class.fields();
    assert_eq!(fields[0].constant_value(), Some(ConstantValue::Int(7)));
    assert!(!class.is_heavy_loaded());
}

#[test]
fn non_final_field_does_not_load_heavy() {
    let decl = TypeDecl::class("A").with_field(
        FieldDecl::new("x", int()).with_initializer(folded()),
    );
    let class = LightClass::new(&decl, "A");
    assert_eq!(class.fields()[0].constant_value(), None);
    assert!(!class.is_heavy_loaded());
}

#[test]
fn computed_constant_loads_heavy() {
    let decl = TypeDecl::class("A").with_field(constant("X", folded()));
    let class = LightClass::new(&decl, "A");
    assert!(!class.is_heavy_loaded());
    assert_eq!(class.fields()[0].constant_value(), Some(ConstantValue::Int(3)));
    assert!(class.is_heavy_loaded());
}

#[test]
fn heavy_flag_is_monotonic() {
    let decl = TypeDecl::class("A")
        .with_field(constant("X", folded()))
        .with_field(constant("Y", ConstExpr::int(1)));
    let class = LightClass::new(&decl, "A");
    let fields = class.fields();
    let _ = fields[0].constant_value();
    assert!(class.is_heavy_loaded());
    let _ = fields[1].constant_value();
    assert!(class.is_heavy_loaded());
}

#[test]
fn nested_realization_is_visible_from_top_level() {
    let decl = TypeDecl::class("Outer").with_nested(
        TypeDecl::class("Mid").with_nested(TypeDecl::class("Inner").with_field(constant("X", folded()))),
    );
    let class = LightClass::new(&decl, "p.Outer");
    let mid = class.nested()[0];
    let inner = mid.nested()[0];
    assert_eq!(inner.qualified_name(), "p.Outer.Mid.Inner");
    assert!(!class.is_heavy_loaded());

    assert_eq!(inner.fields()[0].constant_value(), Some(ConstantValue::Int(3)));
    assert!(class.is_heavy_loaded());
}

#[test]
fn methods_come_from_source() {
    let decl = TypeDecl::interface("I")
        .with_method(decl_ir::MethodDecl::new("size", int()));
    let class = LightClass::new(&decl, "I");
    let methods = class.methods();
    assert_eq!(methods.len(), 1);
    assert_eq!(methods[0].name(), "size");
    assert!(!class.is_heavy_loaded());
}
