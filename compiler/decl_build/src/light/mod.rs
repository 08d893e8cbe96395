//! Fast strategy: light classes answered from source.
//!
//! A [`LightClass`] is a view over a [`TypeDecl`]. Names, modifiers, type
//! lists and methods come straight from source. The only thing it cannot
//! answer by itself is a folded constant: for those it realizes the heavy
//! backing, a [`ResolvedClass`] of the whole top-level declaration, once.
//! Nested light classes share their top-level class's backing, so one
//! realization anywhere in the tree is visible from the top.

use std::cell::OnceCell;
use std::rc::Rc;

use decl_ir::{
    ClassKind, ClassRepr, ConstantValue, FastClassRepr, FieldDecl, FieldRepr, MethodRepr,
    ModifierList, Strategy, TypeDecl, TypeParam, TypeRef, VariableRepr,
};

use crate::fold::is_constant_candidate;
use crate::ResolvedClass;

/// Lazily realized resolved form of a top-level declaration.
struct HeavyBacking<'a> {
    decl: &'a TypeDecl,
    qualified_name: String,
    resolved: OnceCell<ResolvedClass>,
}

impl HeavyBacking<'_> {
    fn get(&self) -> &ResolvedClass {
        self.resolved.get_or_init(|| {
            tracing::debug!(class = %self.qualified_name, "realizing heavy backing");
            ResolvedClass::resolve(self.decl, &self.qualified_name)
        })
    }

    fn is_loaded(&self) -> bool {
        self.resolved.get().is_some()
    }
}

/// A field view of a [`LightClass`].
pub struct LightField<'a> {
    decl: &'a FieldDecl,
    /// Nested-class indices from the top-level class to the owner.
    owner_path: Rc<[usize]>,
    heavy: Rc<HeavyBacking<'a>>,
}

impl LightField<'_> {
    fn resolved_constant(&self) -> Option<ConstantValue> {
        self.heavy
            .get()
            .nested_at(&self.owner_path)?
            .field(&self.decl.name)?
            .constant
            .clone()
    }
}

impl VariableRepr for LightField<'_> {
    fn name(&self) -> &str {
        &self.decl.name
    }

    fn ty(&self) -> &TypeRef {
        &self.decl.ty
    }

    fn modifiers(&self) -> &ModifierList {
        &self.decl.modifiers
    }

    fn is_varargs(&self) -> bool {
        false
    }

    fn constant_value(&self) -> Option<ConstantValue> {
        if !is_constant_candidate(self.decl) {
            return None;
        }
        let init = self.decl.initializer.as_ref()?;
        match init.as_literal() {
            Some(literal) => Some(literal.clone()),
            None => self.resolved_constant(),
        }
    }
}

impl FieldRepr for LightField<'_> {
    fn is_enum_constant(&self) -> bool {
        self.decl.enum_constant
    }
}

/// A class view that defers resolution until it is unavoidable.
pub struct LightClass<'a> {
    decl: &'a TypeDecl,
    qualified_name: String,
    heavy: Rc<HeavyBacking<'a>>,
    fields: Vec<LightField<'a>>,
    nested: Vec<LightClass<'a>>,
}

impl<'a> LightClass<'a> {
    /// A light class for the top-level declaration `decl`.
    pub fn new(decl: &'a TypeDecl, qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let heavy = Rc::new(HeavyBacking {
            decl,
            qualified_name: qualified_name.clone(),
            resolved: OnceCell::new(),
        });
        LightClass::view(decl, qualified_name, Vec::new(), &heavy)
    }

    fn view(
        decl: &'a TypeDecl,
        qualified_name: String,
        path: Vec<usize>,
        heavy: &Rc<HeavyBacking<'a>>,
    ) -> Self {
        let nested = decl
            .nested
            .iter()
            .enumerate()
            .map(|(index, inner)| {
                let mut inner_path = path.clone();
                inner_path.push(index);
                let inner_name = format!("{qualified_name}.{}", inner.name);
                LightClass::view(inner, inner_name, inner_path, heavy)
            })
            .collect();

        let owner_path: Rc<[usize]> = path.into();
        let fields = decl
            .fields
            .iter()
            .map(|field| LightField {
                decl: field,
                owner_path: Rc::clone(&owner_path),
                heavy: Rc::clone(heavy),
            })
            .collect();

        LightClass {
            decl,
            qualified_name,
            heavy: Rc::clone(heavy),
            fields,
            nested,
        }
    }
}

impl ClassRepr for LightClass<'_> {
    fn strategy(&self) -> Strategy {
        Strategy::Fast
    }

    fn name(&self) -> &str {
        &self.decl.name
    }

    fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    fn kind(&self) -> ClassKind {
        self.decl.kind
    }

    fn modifiers(&self) -> &ModifierList {
        &self.decl.modifiers
    }

    fn type_params(&self) -> &[TypeParam] {
        &self.decl.type_params
    }

    fn extends_list(&self) -> &[TypeRef] {
        &self.decl.extends
    }

    fn implements_list(&self) -> &[TypeRef] {
        &self.decl.implements
    }

    fn fields(&self) -> Vec<&dyn FieldRepr> {
        self.fields.iter().map(|f| f as &dyn FieldRepr).collect()
    }

    fn methods(&self) -> Vec<&dyn MethodRepr> {
        self.decl
            .methods
            .iter()
            .map(|m| m as &dyn MethodRepr)
            .collect()
    }

    fn nested(&self) -> Vec<&dyn ClassRepr> {
        self.nested.iter().map(|c| c as &dyn ClassRepr).collect()
    }
}

impl FastClassRepr for LightClass<'_> {
    fn is_heavy_loaded(&self) -> bool {
        self.heavy.is_loaded()
    }
}

#[cfg(test)]
mod tests;
