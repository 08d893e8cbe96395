//! Parsed source units.

use crate::TypeDecl;

/// A top-level declaration of a source unit.
#[derive(Clone, PartialEq, Debug)]
pub enum Declaration {
    Type(TypeDecl),
    /// A top-level function. Not a class; skipped by class-level checks.
    Function(String),
    /// A top-level property. Not a class; skipped by class-level checks.
    Property(String),
}

/// A parsed source file.
#[derive(Clone, PartialEq, Debug)]
pub struct SourceUnit {
    /// Identifying path, used in failure reports.
    pub path: String,
    pub package: Option<String>,
    pub declarations: Vec<Declaration>,
}

impl SourceUnit {
    pub fn new(path: impl Into<String>) -> Self {
        SourceUnit {
            path: path.into(),
            package: None,
            declarations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    #[must_use]
    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    #[must_use]
    pub fn with_type(self, decl: TypeDecl) -> Self {
        self.with_declaration(Declaration::Type(decl))
    }

    /// Top-level type declarations in source order.
    ///
    /// Nested types are not included; they are reached through their
    /// enclosing declaration.
    pub fn type_declarations(&self) -> impl Iterator<Item = &TypeDecl> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Type(ty) => Some(ty),
            Declaration::Function(_) | Declaration::Property(_) => None,
        })
    }

    /// Qualified name of a top-level type declared in this unit.
    pub fn qualified_name_of(&self, decl: &TypeDecl) -> String {
        match &self.package {
            Some(package) if !package.is_empty() => format!("{package}.{}", decl.name),
            _ => decl.name.clone(),
        }
    }

    /// Whether `decl` is one of this unit's top-level type declarations.
    pub fn declares(&self, decl: &TypeDecl) -> bool {
        self.type_declarations().any(|d| std::ptr::eq(d, decl))
    }
}
