//! The dual declaration constructor seam.

use decl_ir::{ClassRepr, FastClassRepr, SourceUnit, TypeDecl};
use thiserror::Error;

use crate::{LightClass, ResolvedClass};

/// A construction strategy failed outright.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum ConstructionError {
    #[error("`{declaration}` is not a top-level type declaration of `{unit}`")]
    MissingDeclaration { unit: String, declaration: String },
}

/// Builds both representations of a top-level declaration.
pub trait DeclarationConstructor {
    /// The reference representation. Always present for a well-formed
    /// declaration.
    fn reference<'a>(
        &self,
        unit: &'a SourceUnit,
        decl: &'a TypeDecl,
    ) -> Result<Box<dyn ClassRepr + 'a>, ConstructionError>;

    /// The fast representation, or `None` if the fast strategy does not
    /// model this declaration.
    fn fast<'a>(
        &self,
        unit: &'a SourceUnit,
        decl: &'a TypeDecl,
    ) -> Result<Option<Box<dyn FastClassRepr + 'a>>, ConstructionError>;
}

/// [`ResolvedClass`] as reference, [`LightClass`] as fast.
///
/// Declarations with parse errors get no light class.
#[derive(Copy, Clone, Default, Debug)]
pub struct StandardConstructor;

impl StandardConstructor {
    fn ensure_declared(unit: &SourceUnit, decl: &TypeDecl) -> Result<(), ConstructionError> {
        if unit.declares(decl) {
            Ok(())
        } else {
            Err(ConstructionError::MissingDeclaration {
                unit: unit.path.clone(),
                declaration: decl.name.clone(),
            })
        }
    }
}

impl DeclarationConstructor for StandardConstructor {
    fn reference<'a>(
        &self,
        unit: &'a SourceUnit,
        decl: &'a TypeDecl,
    ) -> Result<Box<dyn ClassRepr + 'a>, ConstructionError> {
        Self::ensure_declared(unit, decl)?;
        let qualified_name = unit.qualified_name_of(decl);
        Ok(Box::new(ResolvedClass::resolve(decl, &qualified_name)))
    }

    fn fast<'a>(
        &self,
        unit: &'a SourceUnit,
        decl: &'a TypeDecl,
    ) -> Result<Option<Box<dyn FastClassRepr + 'a>>, ConstructionError> {
        Self::ensure_declared(unit, decl)?;
        if decl.has_errors {
            tracing::debug!(declaration = %decl.name, "no light class for declaration with errors");
            return Ok(None);
        }
        Ok(Some(Box::new(LightClass::new(decl, unit.qualified_name_of(decl)))))
    }
}
