//! Type references and their canonical text.
//!
//! The canonical text is fully qualified and includes type annotations, so
//! two representations that resolve a type the same way always render it the
//! same way.

use std::fmt::{self, Write};

/// Primitive types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveType {
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Void => "void",
        }
    }
}

/// Bound of a wildcard type argument.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum WildcardBound {
    /// `?`
    Unbounded,
    /// `? extends T`
    Extends(Box<TypeRef>),
    /// `? super T`
    Super(Box<TypeRef>),
}

/// A reference to a type as it appears in a signature.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeRef {
    Primitive(PrimitiveType),
    /// A class type, e.g. `java.util.List<java.lang.String>`.
    Class {
        qualified_name: String,
        args: Vec<TypeRef>,
        /// Qualified names of type annotations.
        annotations: Vec<String>,
    },
    /// A reference to a type parameter in scope.
    TypeParam(String),
    Array(Box<TypeRef>),
    /// Variadic parameter type, `T...`.
    Ellipsis(Box<TypeRef>),
    Wildcard(WildcardBound),
}

impl TypeRef {
    /// A non-generic, unannotated class type.
    pub fn class(qualified_name: impl Into<String>) -> Self {
        TypeRef::Class {
            qualified_name: qualified_name.into(),
            args: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// A class type with type arguments.
    pub fn generic(qualified_name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Class {
            qualified_name: qualified_name.into(),
            args,
            annotations: Vec::new(),
        }
    }

    pub fn param(name: impl Into<String>) -> Self {
        TypeRef::TypeParam(name.into())
    }

    pub fn array(elem: TypeRef) -> Self {
        TypeRef::Array(Box::new(elem))
    }

    pub fn ellipsis(elem: TypeRef) -> Self {
        TypeRef::Ellipsis(Box::new(elem))
    }

    /// Adds a type annotation. No effect on non-class types.
    #[must_use]
    pub fn annotated(mut self, annotation: impl Into<String>) -> Self {
        if let TypeRef::Class { annotations, .. } = &mut self {
            annotations.push(annotation.into());
        }
        self
    }

    /// Fully qualified, annotation-aware text of this type.
    pub fn canonical_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(p) => f.write_str(p.keyword()),
            TypeRef::Class {
                qualified_name,
                args,
                annotations,
            } => {
                for annotation in annotations {
                    write!(f, "@{annotation} ")?;
                }
                f.write_str(qualified_name)?;
                if !args.is_empty() {
                    f.write_char('<')?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_char(',')?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_char('>')?;
                }
                Ok(())
            }
            TypeRef::TypeParam(name) => f.write_str(name),
            TypeRef::Array(elem) => write!(f, "{elem}[]"),
            TypeRef::Ellipsis(elem) => write!(f, "{elem}..."),
            TypeRef::Wildcard(WildcardBound::Unbounded) => f.write_char('?'),
            TypeRef::Wildcard(WildcardBound::Extends(bound)) => write!(f, "? extends {bound}"),
            TypeRef::Wildcard(WildcardBound::Super(bound)) => write!(f, "? super {bound}"),
        }
    }
}

/// A declared type parameter, `T extends A & B`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeParam {
    pub name: String,
    pub bounds: Vec<TypeRef>,
}

impl TypeParam {
    pub fn new(name: impl Into<String>) -> Self {
        TypeParam {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_bound(mut self, bound: TypeRef) -> Self {
        self.bounds.push(bound);
        self
    }
}
