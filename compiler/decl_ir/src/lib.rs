//! Declaration model for equivalence checking.
//!
//! Describes compiled class declarations two ways:
//!
//! - **Source declarations** ([`TypeDecl`], [`FieldDecl`], [`MethodDecl`]) as
//!   they appear in a parsed [`SourceUnit`].
//! - **Representations** ([`ClassRepr`] and friends): the capability set a
//!   construction strategy exposes for one declaration. The checker and the
//!   renderer only ever see representations.
//!
//! # Modules
//!
//! - [`modifiers`]: keyword modifiers, annotations and modifier lists
//! - [`types`]: type references and their canonical text
//! - [`constant`]: constant values and initializer expressions
//! - [`decl`]: source-level declarations
//! - [`unit`]: parsed source units
//! - [`repr`]: representation capability traits

pub mod constant;
pub mod decl;
pub mod modifiers;
pub mod repr;
pub mod types;
pub mod unit;

pub use constant::{BinaryOp, ConstExpr, ConstantValue};
pub use decl::{ClassKind, FieldDecl, MethodDecl, ParamDecl, TypeDecl};
pub use modifiers::{Annotation, AnnotationAttr, ModifierList, Modifiers};
pub use repr::{ClassRepr, FastClassRepr, FieldRepr, MethodRepr, Strategy, VariableRepr};
pub use types::{PrimitiveType, TypeParam, TypeRef, WildcardBound};
pub use unit::{Declaration, SourceUnit};
