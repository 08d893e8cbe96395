//! Reference strategy: fully resolved, eagerly built classes.

use decl_ir::{
    ClassKind, ClassRepr, ConstantValue, FieldDecl, FieldRepr, MethodDecl, MethodRepr,
    ModifierList, Strategy, TypeDecl, TypeParam, TypeRef, VariableRepr,
};

use crate::fold_constant;

/// A field with its constant value already folded.
#[derive(Clone, PartialEq, Debug)]
pub struct ResolvedField {
    pub name: String,
    pub ty: TypeRef,
    pub modifiers: ModifierList,
    pub constant: Option<ConstantValue>,
    pub enum_constant: bool,
}

impl ResolvedField {
    fn resolve(owner: &TypeDecl, field: &FieldDecl) -> Self {
        ResolvedField {
            name: field.name.clone(),
            ty: field.ty.clone(),
            modifiers: field.modifiers.clone(),
            constant: fold_constant(owner, field),
            enum_constant: field.enum_constant,
        }
    }
}

impl VariableRepr for ResolvedField {
    fn name(&self) -> &str {
        &self.name
    }

    fn ty(&self) -> &TypeRef {
        &self.ty
    }

    fn modifiers(&self) -> &ModifierList {
        &self.modifiers
    }

    fn is_varargs(&self) -> bool {
        false
    }

    fn constant_value(&self) -> Option<ConstantValue> {
        self.constant.clone()
    }
}

impl FieldRepr for ResolvedField {
    fn is_enum_constant(&self) -> bool {
        self.enum_constant
    }
}

/// A class with every member materialized.
#[derive(Clone, PartialEq, Debug)]
pub struct ResolvedClass {
    name: String,
    qualified_name: String,
    kind: ClassKind,
    modifiers: ModifierList,
    type_params: Vec<TypeParam>,
    extends: Vec<TypeRef>,
    implements: Vec<TypeRef>,
    fields: Vec<ResolvedField>,
    methods: Vec<MethodDecl>,
    nested: Vec<ResolvedClass>,
}

impl ResolvedClass {
    /// Resolve `decl` and everything nested in it.
    pub fn resolve(decl: &TypeDecl, qualified_name: &str) -> Self {
        tracing::trace!(class = qualified_name, "resolving class");
        ResolvedClass {
            name: decl.name.clone(),
            qualified_name: qualified_name.to_owned(),
            kind: decl.kind,
            modifiers: decl.modifiers.clone(),
            type_params: decl.type_params.clone(),
            extends: decl.extends.clone(),
            implements: decl.implements.clone(),
            fields: decl
                .fields
                .iter()
                .map(|field| ResolvedField::resolve(decl, field))
                .collect(),
            methods: decl.methods.clone(),
            nested: decl
                .nested
                .iter()
                .map(|inner| {
                    let name = format!("{qualified_name}.{}", inner.name);
                    ResolvedClass::resolve(inner, &name)
                })
                .collect(),
        }
    }

    /// The class reached by following nested-class indices from `self`.
    pub fn nested_at(&self, path: &[usize]) -> Option<&ResolvedClass> {
        path.iter()
            .try_fold(self, |class, &index| class.nested.get(index))
    }

    pub fn field(&self, name: &str) -> Option<&ResolvedField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl ClassRepr for ResolvedClass {
    fn strategy(&self) -> Strategy {
        Strategy::Reference
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    fn kind(&self) -> ClassKind {
        self.kind
    }

    fn modifiers(&self) -> &ModifierList {
        &self.modifiers
    }

    fn type_params(&self) -> &[TypeParam] {
        &self.type_params
    }

    fn extends_list(&self) -> &[TypeRef] {
        &self.extends
    }

    fn implements_list(&self) -> &[TypeRef] {
        &self.implements
    }

    fn fields(&self) -> Vec<&dyn FieldRepr> {
        self.fields.iter().map(|f| f as &dyn FieldRepr).collect()
    }

    fn methods(&self) -> Vec<&dyn MethodRepr> {
        self.methods.iter().map(|m| m as &dyn MethodRepr).collect()
    }

    fn nested(&self) -> Vec<&dyn ClassRepr> {
        self.nested.iter().map(|c| c as &dyn ClassRepr).collect()
    }
}

#[cfg(test)]
mod tests;
