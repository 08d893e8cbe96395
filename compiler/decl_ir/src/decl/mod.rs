//! Source-level declarations.
//!
//! These are the declarations as parsed, before any construction strategy
//! has looked at them. Field initializers are kept as expressions; folding
//! them into constant values is the job of a construction strategy.

use crate::{ConstExpr, ModifierList, Modifiers, TypeParam, TypeRef};

/// Classification of a type declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    AnnotationType,
}

impl ClassKind {
    /// Keyword introducing a declaration of this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::Enum => "enum",
            ClassKind::AnnotationType => "@interface",
        }
    }
}

/// A field or enum constant.
#[derive(Clone, PartialEq, Debug)]
pub struct FieldDecl {
    pub name: String,
    pub ty: TypeRef,
    pub modifiers: ModifierList,
    pub initializer: Option<ConstExpr>,
    pub enum_constant: bool,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        FieldDecl {
            name: name.into(),
            ty,
            modifiers: ModifierList::default(),
            initializer: None,
            enum_constant: false,
        }
    }

    /// An enum constant of the enum `enum_type`.
    pub fn enum_constant(name: impl Into<String>, enum_type: TypeRef) -> Self {
        FieldDecl {
            name: name.into(),
            ty: enum_type,
            modifiers: ModifierList::new(Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL),
            initializer: None,
            enum_constant: true,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: impl Into<ModifierList>) -> Self {
        self.modifiers = modifiers.into();
        self
    }

    #[must_use]
    pub fn with_initializer(mut self, initializer: ConstExpr) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

/// A method or constructor parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParamDecl {
    pub name: String,
    pub ty: TypeRef,
    pub modifiers: ModifierList,
    pub varargs: bool,
}

impl ParamDecl {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        ParamDecl {
            name: name.into(),
            ty,
            modifiers: ModifierList::default(),
            varargs: false,
        }
    }

    /// A trailing variadic parameter; `elem` is wrapped as `elem...`.
    pub fn varargs(name: impl Into<String>, elem: TypeRef) -> Self {
        ParamDecl {
            name: name.into(),
            ty: TypeRef::ellipsis(elem),
            modifiers: ModifierList::default(),
            varargs: true,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: impl Into<ModifierList>) -> Self {
        self.modifiers = modifiers.into();
        self
    }
}

/// A method, constructor or annotation element.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MethodDecl {
    pub name: String,
    /// `None` for constructors.
    pub return_type: Option<TypeRef>,
    pub modifiers: ModifierList,
    pub type_params: Vec<TypeParam>,
    pub params: Vec<ParamDecl>,
    pub throws: Vec<TypeRef>,
    /// Default value source text of an annotation element.
    pub default_value: Option<String>,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        MethodDecl {
            name: name.into(),
            return_type: Some(return_type),
            modifiers: ModifierList::default(),
            type_params: Vec::new(),
            params: Vec::new(),
            throws: Vec::new(),
            default_value: None,
        }
    }

    pub fn constructor(name: impl Into<String>) -> Self {
        MethodDecl {
            return_type: None,
            ..MethodDecl::new(name, TypeRef::Primitive(crate::PrimitiveType::Void))
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: impl Into<ModifierList>) -> Self {
        self.modifiers = modifiers.into();
        self
    }

    #[must_use]
    pub fn with_type_param(mut self, param: TypeParam) -> Self {
        self.type_params.push(param);
        self
    }

    #[must_use]
    pub fn with_param(mut self, param: ParamDecl) -> Self {
        self.params.push(param);
        self
    }

    #[must_use]
    pub fn with_throws(mut self, ty: TypeRef) -> Self {
        self.throws.push(ty);
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// A method is variadic when its last parameter is.
    pub fn is_varargs(&self) -> bool {
        self.params.last().is_some_and(|p| p.varargs)
    }
}

/// A class, interface, enum or annotation type declaration.
#[derive(Clone, PartialEq, Debug)]
pub struct TypeDecl {
    pub name: String,
    pub kind: ClassKind,
    pub modifiers: ModifierList,
    pub type_params: Vec<TypeParam>,
    pub extends: Vec<TypeRef>,
    pub implements: Vec<TypeRef>,
    pub fields: Vec<FieldDecl>,
    pub methods: Vec<MethodDecl>,
    pub nested: Vec<TypeDecl>,
    /// The declaration did not parse cleanly.
    pub has_errors: bool,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        TypeDecl {
            name: name.into(),
            kind,
            modifiers: ModifierList::default(),
            type_params: Vec::new(),
            extends: Vec::new(),
            implements: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            nested: Vec::new(),
            has_errors: false,
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        TypeDecl::new(name, ClassKind::Class)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        TypeDecl::new(name, ClassKind::Interface)
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        TypeDecl::new(name, ClassKind::Enum)
    }

    pub fn annotation_type(name: impl Into<String>) -> Self {
        TypeDecl::new(name, ClassKind::AnnotationType)
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: impl Into<ModifierList>) -> Self {
        self.modifiers = modifiers.into();
        self
    }

    #[must_use]
    pub fn with_type_param(mut self, param: TypeParam) -> Self {
        self.type_params.push(param);
        self
    }

    #[must_use]
    pub fn with_extends(mut self, ty: TypeRef) -> Self {
        self.extends.push(ty);
        self
    }

    #[must_use]
    pub fn with_implements(mut self, ty: TypeRef) -> Self {
        self.implements.push(ty);
        self
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    #[must_use]
    pub fn with_nested(mut self, nested: TypeDecl) -> Self {
        self.nested.push(nested);
        self
    }

    #[must_use]
    pub fn with_errors(mut self) -> Self {
        self.has_errors = true;
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }
}
