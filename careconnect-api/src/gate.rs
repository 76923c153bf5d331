//! One in-flight submission per form instance.
//!
//! The UI disables the submit control while a submission runs; this gate is
//! that flag. There is no queue and no cancellation: a second attempt while
//! one is pending simply gets nothing.

use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct SubmitGate {
    pending: AtomicBool,
}

/// Held for the duration of a submission; dropping it re-enables the gate.
#[derive(Debug)]
pub struct InFlight<'gate> {
    gate: &'gate SubmitGate,
}

impl SubmitGate {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Returns the guard for this submission, or `None` while another one
    /// is still in flight.
    #[must_use]
    pub fn begin(&self) -> Option<InFlight<'_>> {
        if self.pending.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(InFlight { gate: self })
        }
    }

    /// Whether the submit control should currently be disabled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.gate.pending.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_submission_is_refused_while_pending() {
        let gate = SubmitGate::new();
        let in_flight = gate.begin().unwrap();
        assert!(gate.is_pending());
        assert!(gate.begin().is_none());
        drop(in_flight);
        assert!(!gate.is_pending());
        assert!(gate.begin().is_some());
    }
}
