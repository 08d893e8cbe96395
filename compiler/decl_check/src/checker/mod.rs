//! The equivalence check.
//!
//! For each top-level class of a unit, in source order:
//!
//! 1. Build and render the reference representation; it must not come from
//!    the fast strategy.
//! 2. Build and render the fast representation (empty text when there is
//!    none), then read its heavy-loaded flag. A forbidden load fails right
//!    away, naming the declaration that caused it.
//!
//! The renderings are joined with a blank line and compared as whole texts.
//! A required load that never happened fails last.

use decl_build::{DeclarationConstructor, StandardConstructor};
use decl_ir::{SourceUnit, Strategy, TypeDecl};
use decl_render::render_class;

use crate::{AssertionSink, CheckError, CheckFailure, LoadExpectation, PanicSink};

/// Separator between the renderings of consecutive top-level classes.
const DECLARATION_SEPARATOR: &str = "\n\n";

/// Heavy-load observation for one fast representation.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DeclarationLoad {
    pub declaration: String,
    pub heavy_loaded: bool,
}

/// Outcome of a successful check.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct CheckReport {
    pub reference_text: String,
    pub fast_text: String,
    /// Whether any fast representation realized its heavy backing.
    pub heavy_loaded: bool,
    /// One entry per fast representation that was built.
    pub loads: Vec<DeclarationLoad>,
}

/// Compares reference and fast representations built by `C`, reporting
/// failures to `S`.
pub struct EquivalenceChecker<C, S> {
    constructor: C,
    sink: S,
}

impl EquivalenceChecker<StandardConstructor, PanicSink> {
    /// Standard strategies, failures panic.
    pub fn standard() -> Self {
        EquivalenceChecker::new(StandardConstructor, PanicSink)
    }
}

impl<C: DeclarationConstructor, S: AssertionSink> EquivalenceChecker<C, S> {
    pub fn new(constructor: C, sink: S) -> Self {
        EquivalenceChecker { constructor, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Check `unit`; returns whether any heavy backing was realized.
    pub fn check(&self, unit: &SourceUnit, expectation: LoadExpectation) -> Result<bool, CheckError> {
        self.check_with_report(unit, expectation)
            .map(|report| report.heavy_loaded)
    }

    /// Check `unit` and keep both renderings and per-class load state.
    #[tracing::instrument(level = "debug", skip_all, fields(unit = %unit.path, ?expectation))]
    pub fn check_with_report(
        &self,
        unit: &SourceUnit,
        expectation: LoadExpectation,
    ) -> Result<CheckReport, CheckError> {
        let declarations: Vec<&TypeDecl> = unit.type_declarations().collect();

        let reference_text = self.render_reference(unit, &declarations)?;

        let mut report = CheckReport {
            reference_text,
            ..CheckReport::default()
        };
        let mut fast_texts = Vec::with_capacity(declarations.len());
        for decl in &declarations {
            let Some(fast) = self.constructor.fast(unit, decl)? else {
                tracing::trace!(declaration = %decl.name, "no fast representation");
                fast_texts.push(String::new());
                continue;
            };
            fast_texts.push(render_class(&*fast));

            let loaded = fast.is_heavy_loaded();
            report.heavy_loaded |= loaded;
            report.loads.push(DeclarationLoad {
                declaration: fast.qualified_name().to_owned(),
                heavy_loaded: loaded,
            });
            if loaded && expectation == LoadExpectation::RequireNotLoaded {
                return Err(self.fail(CheckFailure::UnexpectedEagerLoad {
                    unit: unit.path.clone(),
                    declaration: fast.qualified_name().to_owned(),
                }));
            }
        }
        report.fast_text = fast_texts.join(DECLARATION_SEPARATOR);

        if report.reference_text != report.fast_text {
            tracing::warn!(unit = %unit.path, "fast rendering differs from reference rendering");
            return Err(self.fail(CheckFailure::RenderMismatch {
                unit: unit.path.clone(),
                reference: report.reference_text,
                fast: report.fast_text,
            }));
        }

        if expectation == LoadExpectation::RequireLoaded && !report.heavy_loaded {
            return Err(self.fail(CheckFailure::MissingEagerLoad {
                unit: unit.path.clone(),
            }));
        }

        tracing::debug!(heavy_loaded = report.heavy_loaded, "representations are equivalent");
        Ok(report)
    }

    fn render_reference(
        &self,
        unit: &SourceUnit,
        declarations: &[&TypeDecl],
    ) -> Result<String, CheckError> {
        let mut texts = Vec::with_capacity(declarations.len());
        for decl in declarations {
            let reference = self.constructor.reference(unit, decl)?;
            if reference.strategy() == Strategy::Fast {
                return Err(self.fail(CheckFailure::ReferenceIsFast {
                    declaration: reference.qualified_name().to_owned(),
                }));
            }
            texts.push(render_class(&*reference));
        }
        Ok(texts.join(DECLARATION_SEPARATOR))
    }

    fn fail(&self, failure: CheckFailure) -> CheckError {
        self.sink.fail(&failure);
        CheckError::Failure(failure)
    }
}

/// Check `unit` with the standard strategies; failures panic.
///
/// Returns whether any heavy backing was realized. Only collaborator errors
/// come back as `Err`.
pub fn check_equivalence(
    unit: &SourceUnit,
    expectation: impl Into<LoadExpectation>,
) -> Result<bool, CheckError> {
    EquivalenceChecker::standard().check(unit, expectation.into())
}
