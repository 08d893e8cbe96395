//! Construction strategies for class representations.
//!
//! Two strategies build a [`ClassRepr`](decl_ir::ClassRepr) from the same
//! source declaration:
//!
//! - [`ResolvedClass`]: the reference strategy. Everything is materialized
//!   up front, including folded field constants.
//! - [`LightClass`]: the fast strategy. Answers from source where it can and
//!   realizes a [`ResolvedClass`] of the top-level declaration (the heavy
//!   backing) only for questions it cannot answer cheaply.
//!
//! [`StandardConstructor`] pairs the two behind the
//! [`DeclarationConstructor`] seam.

mod constructor;
pub mod fold;
mod light;
mod resolved;

pub use constructor::{ConstructionError, DeclarationConstructor, StandardConstructor};
pub use fold::fold_constant;
pub use light::{LightClass, LightField};
pub use resolved::{ResolvedClass, ResolvedField};
