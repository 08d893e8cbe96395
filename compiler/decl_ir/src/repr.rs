//! Representation capability traits.
//!
//! A construction strategy turns a [`TypeDecl`](crate::TypeDecl) into
//! something implementing [`ClassRepr`]. Consumers are written against these
//! traits only, never against a concrete strategy.

use crate::{ClassKind, ConstantValue, MethodDecl, ModifierList, ParamDecl, TypeParam, TypeRef};

/// Which construction strategy produced a representation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Strategy {
    /// Fully resolved, eagerly built.
    Reference,
    /// Lightweight, possibly backed by a lazily built heavy representation.
    Fast,
}

/// A field, parameter or other variable.
pub trait VariableRepr {
    fn name(&self) -> &str;
    fn ty(&self) -> &TypeRef;
    fn modifiers(&self) -> &ModifierList;
    fn is_varargs(&self) -> bool;
    /// Statically known value of the variable, if any.
    fn constant_value(&self) -> Option<ConstantValue>;
}

pub trait FieldRepr: VariableRepr {
    fn is_enum_constant(&self) -> bool;
}

pub trait MethodRepr {
    fn name(&self) -> &str;
    /// `None` for constructors.
    fn return_type(&self) -> Option<&TypeRef>;
    fn modifiers(&self) -> &ModifierList;
    fn type_params(&self) -> &[TypeParam];
    fn params(&self) -> &[ParamDecl];
    fn throws(&self) -> &[TypeRef];
    fn is_varargs(&self) -> bool;
    /// Default value text, present only for annotation elements.
    fn default_value(&self) -> Option<&str>;
}

/// The observable surface of one class declaration.
pub trait ClassRepr {
    fn strategy(&self) -> Strategy;
    fn name(&self) -> &str;
    fn qualified_name(&self) -> &str;
    fn kind(&self) -> ClassKind;
    fn modifiers(&self) -> &ModifierList;
    fn type_params(&self) -> &[TypeParam];
    fn extends_list(&self) -> &[TypeRef];
    fn implements_list(&self) -> &[TypeRef];
    /// Fields including enum constants, in the strategy's own order.
    fn fields(&self) -> Vec<&dyn FieldRepr>;
    fn methods(&self) -> Vec<&dyn MethodRepr>;
    fn nested(&self) -> Vec<&dyn ClassRepr>;
}

/// A [`Strategy::Fast`] representation.
pub trait FastClassRepr: ClassRepr {
    /// Whether the heavy backing representation has been realized.
    ///
    /// Starts `false`, may become `true` while the representation is
    /// queried, and never goes back.
    fn is_heavy_loaded(&self) -> bool;
}

impl VariableRepr for ParamDecl {
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
        self.varargs
    }

    fn constant_value(&self) -> Option<ConstantValue> {
        None
    }
}

impl MethodRepr for MethodDecl {
    fn name(&self) -> &str {
        &self.name
    }

    fn return_type(&self) -> Option<&TypeRef> {
        self.return_type.as_ref()
    }

    fn modifiers(&self) -> &ModifierList {
        &self.modifiers
    }

    fn type_params(&self) -> &[TypeParam] {
        &self.type_params
    }

    fn params(&self) -> &[ParamDecl] {
        &self.params
    }

    fn throws(&self) -> &[TypeRef] {
        &self.throws
    }

    fn is_varargs(&self) -> bool {
        MethodDecl::is_varargs(self)
    }

    fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}
