use super::*;
use decl_ir::{ConstExpr, Modifiers, PrimitiveType};

fn sample() -> TypeDecl {
    TypeDecl::class("Outer")
        .with_field(
            FieldDecl::new("N", TypeRef::Primitive(PrimitiveType::Int))
                .with_modifiers(Modifiers::STATIC | Modifiers::FINAL)
                .with_initializer(ConstExpr::int(3)),
        )
        .with_nested(
            TypeDecl::class("Mid").with_nested(TypeDecl::interface("Leaf")),
        )
        .with_nested(TypeDecl::enumeration("Other"))
}

#[test]
fn reference_strategy() {
    let class = ResolvedClass::resolve(&sample(), "p.Outer");
    assert_eq!(class.strategy(), Strategy::Reference);
}

#[test]
fn nested_classes_get_dotted_qualified_names() {
    let class = ResolvedClass::resolve(&sample(), "p.Outer");
    let leaf = class.nested_at(&[0, 0]).unwrap();
    assert_eq!(leaf.qualified_name(), "p.Outer.Mid.Leaf");
    assert_eq!(leaf.kind(), ClassKind::Interface);
    assert_eq!(class.nested_at(&[1]).unwrap().qualified_name(), "p.Outer.Other");
}

#[test]
fn nested_at_empty_path_is_self() {
    let class = ResolvedClass::resolve(&sample(), "p.Outer");
    assert_eq!(class.nested_at(&[]).map(ClassRepr::name), Some("Outer"));
}

#[test]
fn nested_at_out_of_range() {
    let class = ResolvedClass::resolve(&sample(), "p.Outer");
    assert!(class.nested_at(&[5]).is_none());
    assert!(class.nested_at(&[0, 0, 0]).is_none());
}

#[test]
fn constants_are_folded_eagerly() {
    let class = ResolvedClass::resolve(&sample(), "p.Outer");
    assert_eq!(class.field("N").unwrap().constant, Some(ConstantValue::Int(3)));
    let fields = class.fields();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].constant_value(), Some(ConstantValue::Int(3)));
}

#[test]
fn members_exposed_through_repr() {
    let decl = TypeDecl::interface("I")
        .with_method(MethodDecl::new("run", TypeRef::Primitive(PrimitiveType::Void)));
    let class = ResolvedClass::resolve(&decl, "I");
    let methods = class.methods();
    assert_eq!(methods.len(), 1);
    assert_eq!(methods[0].name(), "run");
    assert!(class.nested().is_empty());
}
