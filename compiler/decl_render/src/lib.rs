//! Canonical Renderer
//!
//! Renders a [`ClassRepr`](decl_ir::ClassRepr) to a deterministic text form
//! used purely for equivalence comparison. Two representations of the same
//! declaration render identically exactly when their observable surfaces
//! agree.
//!
//! # Ordering
//!
//! Fields, methods and nested classes are sorted by their rendered text, so
//! strategies may enumerate members in any order. Enum constants keep
//! declaration order: it is part of the enum's contract.
//!
//! # Modules
//!
//! - [`emitter`]: string buffer with join helpers
//! - [`render`]: the rendering rules

pub mod emitter;
pub mod render;

pub use emitter::{prepend_indent, StringEmitter, INDENT};
pub use render::{
    render_annotation, render_class, render_method, render_modifiers, render_ref_list,
    render_type, render_type_params, render_variable, ModifierOwner,
};
