//! Evaluation trace: what each case did during one match operation.
//!
//! The trace mirrors the registration order of cases and records, per
//! case, how far it got and why it stopped. Use
//! [`match_value_with_trace`](crate::match_value_with_trace) or
//! [`MatchContext::with_trace`](crate::MatchContext::with_trace) to
//! collect one; the untraced path records nothing and pays nothing.
//!
//! # Tracing never changes evaluation
//!
//! The trace records only evaluations that actually ran. A case skipped
//! because an earlier case committed shows up as
//! [`CaseOutcome::Skipped`] with zero guard evaluations; the trace does
//! not re-run it to find out what it would have done.
//!
//! # Example
//!
//! ```
//! use casus::prelude::*;
//!
//! let subject = 9_i32;
//! let (result, trace) = match_value_with_trace(&subject, |m| {
//!     m.case_value::<i32, _>([1, 2]).then(|_| "listed");
//!     m.case_type::<i32>().and(|n| *n > 5).then(|_| "big");
//!     m.otherwise(|| "other");
//! });
//!
//! assert_eq!(result.unwrap(), "big");
//! assert_eq!(trace.committed, Some(1));
//! assert_eq!(trace.cases[0].outcome, CaseOutcome::NoMatch);
//! assert_eq!(trace.cases[1].guards_passed, 1);
//! assert_eq!(trace.cases[2].outcome, CaseOutcome::Skipped);
//! ```

/// How far one case got, and why it stopped there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOutcome {
    /// An earlier case had already committed; nothing was evaluated.
    Skipped,
    /// The subject was absent or not of the case's subject type.
    TypeMismatch,
    /// The extractor (or value/absent test) said no.
    NoMatch,
    /// The case went live but a guard predicate returned `false`.
    GuardFailed,
    /// The case went live, passed its guards, but never reached `then`.
    Extracted,
    /// The case's handler ran and its result was committed.
    Committed,
}

/// One case's entry in a [`MatchTrace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseTrace {
    /// Position in registration order (0-based).
    pub index: usize,
    /// Label of the case entry point, e.g. `"case_single(One)"`.
    pub case: String,
    /// Number of guard predicates that ran and passed.
    pub guards_passed: usize,
    /// Where evaluation of this case ended.
    pub outcome: CaseOutcome,
}

/// Trace of one full match operation.
///
/// `committed` is the registration index of the case whose handler ran,
/// or `None` when the operation ended unmatched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTrace {
    /// One entry per registered case, in registration order.
    pub cases: Vec<CaseTrace>,
    /// Index of the committed case, if any.
    pub committed: Option<usize>,
}

impl MatchTrace {
    /// An empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if some case committed a result.
    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.committed.is_some()
    }

    /// The committed case's entry, if any.
    #[must_use]
    pub fn committed_case(&self) -> Option<&CaseTrace> {
        self.committed.and_then(|index| self.cases.get(index))
    }

    pub(crate) fn record_case(&mut self, case: String, outcome: CaseOutcome) {
        let index = self.cases.len();
        self.cases.push(CaseTrace {
            index,
            case,
            guards_passed: 0,
            outcome,
        });
    }

    // The builder hooks below always target the most recent case: arms
    // run strictly in registration order and hold the context exclusively
    // while they do.

    pub(crate) fn guard_passed(&mut self) {
        if let Some(case) = self.cases.last_mut() {
            case.guards_passed += 1;
        }
    }

    pub(crate) fn guard_failed(&mut self) {
        if let Some(case) = self.cases.last_mut() {
            case.outcome = CaseOutcome::GuardFailed;
        }
    }

    pub(crate) fn committed_now(&mut self) {
        if let Some(case) = self.cases.last_mut() {
            case.outcome = CaseOutcome::Committed;
            self.committed = Some(case.index);
        }
    }
}
