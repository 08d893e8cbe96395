//! Keyword modifiers and annotations.
//!
//! Every declaration that can carry modifiers owns a [`ModifierList`]: the
//! annotations in declaration order plus a [`Modifiers`] flag set.

use bitflags::bitflags;

bitflags! {
    /// Keyword modifiers of a class, member or parameter.
    ///
    /// The flag values carry no ordering meaning; rendering order is
    /// [`Modifiers::CANONICAL_ORDER`].
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Modifiers: u16 {
        const PUBLIC = 1 << 0;
        const ABSTRACT = 1 << 1;
        const STATIC = 1 << 2;
        const PRIVATE = 1 << 3;
        const PROTECTED = 1 << 4;
        /// No explicit visibility keyword.
        const PACKAGE_LOCAL = 1 << 5;
        const FINAL = 1 << 6;
        const NATIVE = 1 << 7;
        const SYNCHRONIZED = 1 << 8;
        const TRANSIENT = 1 << 9;
        const VOLATILE = 1 << 10;
        const STRICTFP = 1 << 11;
        /// Interface default method.
        const DEFAULT = 1 << 12;
        const OPEN = 1 << 13;
        const TRANSITIVE = 1 << 14;
    }
}

impl Modifiers {
    /// Keyword modifiers paired with their keyword, in rendering order.
    pub const CANONICAL_ORDER: [(Modifiers, &'static str); 15] = [
        (Modifiers::PUBLIC, "public"),
        (Modifiers::ABSTRACT, "abstract"),
        (Modifiers::STATIC, "static"),
        (Modifiers::PRIVATE, "private"),
        (Modifiers::PROTECTED, "protected"),
        (Modifiers::PACKAGE_LOCAL, "packageLocal"),
        (Modifiers::FINAL, "final"),
        (Modifiers::NATIVE, "native"),
        (Modifiers::SYNCHRONIZED, "synchronized"),
        (Modifiers::TRANSIENT, "transient"),
        (Modifiers::VOLATILE, "volatile"),
        (Modifiers::STRICTFP, "strictfp"),
        (Modifiers::DEFAULT, "default"),
        (Modifiers::OPEN, "open"),
        (Modifiers::TRANSITIVE, "transitive"),
    ];

    /// Keywords of the set modifiers in canonical order.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        Self::CANONICAL_ORDER
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, keyword)| keyword)
    }
}

/// One `name=value` pair of an annotation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AnnotationAttr {
    pub name: String,
    /// Literal source text of the value, `None` if it has none.
    pub value: Option<String>,
}

impl AnnotationAttr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        AnnotationAttr {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// An attribute whose value is not a literal.
    pub fn without_value(name: impl Into<String>) -> Self {
        AnnotationAttr {
            name: name.into(),
            value: None,
        }
    }
}

/// An annotation application such as `@java.lang.Deprecated(since="9")`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Annotation {
    pub qualified_name: String,
    pub attributes: Vec<AnnotationAttr>,
}

impl Annotation {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Annotation {
            qualified_name: qualified_name.into(),
            attributes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attr(mut self, attr: AnnotationAttr) -> Self {
        self.attributes.push(attr);
        self
    }
}

/// Annotations plus keyword modifiers of one owner.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ModifierList {
    pub annotations: Vec<Annotation>,
    pub flags: Modifiers,
}

impl ModifierList {
    pub fn new(flags: Modifiers) -> Self {
        ModifierList {
            annotations: Vec::new(),
            flags,
        }
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn has(&self, flag: Modifiers) -> bool {
        self.flags.contains(flag)
    }
}

impl From<Modifiers> for ModifierList {
    fn from(flags: Modifiers) -> Self {
        ModifierList::new(flags)
    }
}
