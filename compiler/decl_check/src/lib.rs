//! Declaration equivalence checking.
//!
//! Verifies that the fast representation of every top-level class in a
//! source unit renders exactly like the reference representation, and that
//! the fast strategy realized its heavy backing only when the caller
//! allowed it.
//!
//! ```text
//! let loaded = check_equivalence(&unit, LoadExpectation::RequireNotLoaded)?;
//! ```
//!
//! Divergence is reported through an [`AssertionSink`]. [`PanicSink`] turns
//! every failure into a test panic; [`RecordingSink`] keeps them for
//! inspection.

mod checker;
mod expectation;
mod failure;
mod sink;

pub use checker::{check_equivalence, CheckReport, DeclarationLoad, EquivalenceChecker};
pub use expectation::LoadExpectation;
pub use failure::{CheckError, CheckFailure};
pub use sink::{AssertionSink, PanicSink, RecordingSink};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=decl_check=debug`
/// or `RUST_LOG=decl_build=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
