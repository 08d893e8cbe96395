//! Assertion sinks: where check failures are reported.

use std::cell::RefCell;

use crate::CheckFailure;

/// Receives the failure that terminates a check.
///
/// Called exactly once per failed check, before the failure is returned to
/// the caller.
pub trait AssertionSink {
    fn fail(&self, failure: &CheckFailure);
}

/// Fails the running test by panicking with the failure message.
#[derive(Copy, Clone, Default, Debug)]
pub struct PanicSink;

impl AssertionSink for PanicSink {
    fn fail(&self, failure: &CheckFailure) {
        panic!("{failure}");
    }
}

/// Keeps reported failures for later inspection.
#[derive(Default, Debug)]
pub struct RecordingSink {
    failures: RefCell<Vec<CheckFailure>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> Vec<CheckFailure> {
        self.failures.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.borrow().is_empty()
    }

    pub fn into_failures(self) -> Vec<CheckFailure> {
        self.failures.into_inner()
    }
}

impl AssertionSink for RecordingSink {
    fn fail(&self, failure: &CheckFailure) {
        self.failures.borrow_mut().push(failure.clone());
    }
}

impl<S: AssertionSink + ?Sized> AssertionSink for &S {
    fn fail(&self, failure: &CheckFailure) {
        (**self).fail(failure);
    }
}
