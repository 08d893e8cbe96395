//! Rendering rules.
//!
//! Layout of a rendered class:
//!
//! ```text
//! <modifiers><keyword> <name> /* <qualified name>*/<type params><extends><implements> {
//! <enum constants, declaration order>;
//!
//! <fields, sorted>
//! <methods, sorted>
//! <nested classes, sorted>}
//! ```

use decl_ir::{
    Annotation, ClassKind, ClassRepr, FieldRepr, MethodRepr, ModifierList, TypeParam, TypeRef,
    VariableRepr,
};

use crate::emitter::{prepend_indent, StringEmitter, INDENT};

/// What kind of owner a modifier list belongs to.
///
/// Parameter annotations stay on the parameter's line; everyone else's
/// annotations each take a line of their own.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ModifierOwner {
    Parameter,
    Declaration,
}

/// `@qualified.Name(attr1=val1, attr2=?)`
pub fn render_annotation(annotation: &Annotation) -> String {
    let mut out = StringEmitter::new();
    out.emit("@");
    out.emit(&annotation.qualified_name);
    out.emit("(");
    out.emit_separated(&annotation.attributes, ", ", |out, attr| {
        out.emit(&attr.name);
        out.emit("=");
        out.emit(attr.value.as_deref().unwrap_or("?"));
    });
    out.emit(")");
    out.output()
}

/// Annotations, then keyword modifiers in canonical order, each followed by
/// a space.
pub fn render_modifiers(modifiers: &ModifierList, owner: ModifierOwner) -> String {
    let mut out = StringEmitter::new();
    for annotation in &modifiers.annotations {
        out.emit(&render_annotation(annotation));
        match owner {
            ModifierOwner::Parameter => out.emit_space(),
            ModifierOwner::Declaration => out.emit_newline(),
        }
    }
    for keyword in modifiers.flags.keywords() {
        out.emit(keyword);
        out.emit_space();
    }
    out.output()
}

pub fn render_type(ty: &TypeRef) -> String {
    ty.canonical_text()
}

/// ` keyword T1, T2`, or nothing for an empty list.
pub fn render_ref_list(types: &[TypeRef], keyword: &str) -> String {
    if types.is_empty() {
        return String::new();
    }
    let mut out = StringEmitter::new();
    out.emit_space();
    out.emit(keyword);
    out.emit_space();
    out.emit_separated(types, ", ", |out, ty| out.emit(&render_type(ty)));
    out.output()
}

/// `<modifiers><type> <name>` with vararg and constant-value suffixes.
///
/// The vararg suffix only applies to parameters.
pub fn render_variable<V: VariableRepr + ?Sized>(variable: &V, owner: ModifierOwner) -> String {
    let mut out = StringEmitter::new();
    out.emit(&render_modifiers(variable.modifiers(), owner));
    out.emit(&render_type(variable.ty()));
    out.emit_space();
    out.emit(variable.name());
    if owner == ModifierOwner::Parameter && variable.is_varargs() {
        out.emit(" /* vararg */");
    }
    if let Some(value) = variable.constant_value() {
        out.emit(&format!(" /* constant value {value} */"));
    }
    out.output()
}

/// `<T, U extends A & B> `, or nothing without type parameters.
pub fn render_type_params(params: &[TypeParam]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let mut out = StringEmitter::new();
    out.emit("<");
    out.emit_separated(params, ", ", |out, param| {
        out.emit(&param.name);
        if !param.bounds.is_empty() {
            out.emit(" extends ");
            out.emit_separated(&param.bounds, " & ", |out, bound| out.emit(&render_type(bound)));
        }
    });
    out.emit("> ");
    out.output()
}

/// One method signature, terminated by `;`.
///
/// Parameters render as `<modifiers><type>`; their names are not part of a
/// method's comparable surface.
pub fn render_method<M: MethodRepr + ?Sized>(method: &M) -> String {
    let mut out = StringEmitter::new();
    out.emit(&render_modifiers(method.modifiers(), ModifierOwner::Declaration));
    if method.is_varargs() {
        out.emit("/* vararg */ ");
    }
    out.emit(&render_type_params(method.type_params()));
    if let Some(ty) = method.return_type() {
        out.emit(&render_type(ty));
    }
    out.emit_space();
    out.emit(method.name());
    out.emit("(");
    out.emit_separated(method.params(), ", ", |out, param| {
        out.emit(&render_modifiers(&param.modifiers, ModifierOwner::Parameter));
        out.emit(&render_type(&param.ty));
    });
    out.emit(")");
    if let Some(default) = method.default_value() {
        out.emit(" default ");
        out.emit(default);
    }
    let throws = method.throws();
    if !throws.is_empty() {
        out.emit(" throws ");
        out.emit_separated(throws, ", ", |out, ty| out.emit(&render_type(ty)));
    }
    out.emit(";");
    out.output()
}

/// Render a class and, recursively, its nested classes.
pub fn render_class<C: ClassRepr + ?Sized>(class: &C) -> String {
    let mut out = StringEmitter::new();
    out.emit(&render_modifiers(class.modifiers(), ModifierOwner::Declaration));
    out.emit(class.kind().keyword());
    out.emit_space();
    out.emit(class.name());
    out.emit(" /* ");
    out.emit(class.qualified_name());
    out.emit("*/");
    out.emit(&render_type_params(class.type_params()));
    out.emit(&render_ref_list(class.extends_list(), "extends"));
    out.emit(&render_ref_list(class.implements_list(), "implements"));
    out.emit(" {");
    out.emit_newline();

    let fields = class.fields();
    if class.kind() == ClassKind::Enum {
        let constants = fields.iter().filter(|f| f.is_enum_constant());
        out.emit_separated(constants, ",\n", |out, constant| out.emit(constant.name()));
        out.emit(";\n\n");
    }

    let field_blocks = fields
        .iter()
        .filter(|f| !f.is_enum_constant())
        .map(|f| render_field_block(*f));
    emit_sorted(&mut out, field_blocks);

    let method_blocks = class
        .methods()
        .into_iter()
        .map(|m| format!("{}\n\n", prepend_indent(&render_method(m), INDENT)));
    emit_sorted(&mut out, method_blocks);

    let nested_blocks = class
        .nested()
        .into_iter()
        .map(|c| prepend_indent(&render_class(c), INDENT));
    emit_sorted(&mut out, nested_blocks);

    out.emit("}");
    out.output()
}

fn render_field_block(field: &dyn FieldRepr) -> String {
    format!(
        "{};\n\n",
        prepend_indent(&render_variable(field, ModifierOwner::Declaration), INDENT)
    )
}

/// Emit member blocks in lexicographic order of their text.
fn emit_sorted(out: &mut StringEmitter, blocks: impl Iterator<Item = String>) {
    let mut blocks: Vec<String> = blocks.collect();
    blocks.sort_unstable();
    for block in &blocks {
        out.emit(block);
    }
}
