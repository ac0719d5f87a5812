//! Match context: registers cases in order and commits the first result.
//!
//! A [`MatchContext`] wraps one erased subject and evaluates case arms
//! against it, first match wins. Each `case_*` method checks the
//! committed flag, downcasts the subject, runs the extractor, and hands
//! a live or dead arm back to the caller; the arm's `then` commits the
//! handler result. Once a result is committed every later case is
//! skipped before its extractor runs.
//!
//! [`match_value`] is the usual entry point; [`match_value_with_trace`]
//! additionally reports what every case did.
//!
//! ```
//! use casus::prelude::*;
//!
//! let subject = String::from("level=debug");
//! let result = match_value(&subject, |m| {
//!     m.case_value::<String, _>(["ping"]).then(|_| "pong".to_string());
//!     m.case_type::<String>()
//!         .and(|s| s.contains('='))
//!         .then(|s| format!("pair: {s}"));
//!     m.otherwise(|| "unrecognized".to_string());
//! });
//!
//! assert_eq!(result.unwrap(), "pair: level=debug");
//! ```

use crate::arm::{AbsentArm, Arm0, Arm1, Arm2, Arm3};
use crate::extractor::{EmptyExtractor, PairExtractor, SingleExtractor, TripleExtractor};
use crate::subject::{IntoSubject, Subject};
use crate::trace::{CaseOutcome, MatchTrace};
use crate::MatchError;
use std::any::{self, Any};
use std::fmt;

/// One match operation over one subject.
///
/// Created by [`match_value`] / [`match_value_with_trace`], or directly
/// via [`MatchContext::new`] when the caller wants to drive the cases
/// and call [`finish`](MatchContext::finish) itself.
///
/// `'s` is the subject borrow: extracted references handed to guards
/// and handlers live as long as the subject does, not as long as the
/// context does, so a handler may return a reference into the subject.
pub struct MatchContext<'s, R> {
    subject: Subject<'s>,
    result: Option<R>,
    trace: Option<MatchTrace>,
}

impl<'s, R> MatchContext<'s, R> {
    /// Context over `subject` with tracing disabled.
    pub fn new(subject: impl IntoSubject<'s>) -> Self {
        Self {
            subject: subject.into_subject(),
            result: None,
            trace: None,
        }
    }

    /// Context over `subject` that records a [`MatchTrace`] as cases run.
    pub fn with_trace(subject: impl IntoSubject<'s>) -> Self {
        Self {
            subject: subject.into_subject(),
            result: None,
            trace: Some(MatchTrace::new()),
        }
    }

    /// Whether some case has already committed a result.
    #[inline]
    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.result.is_some()
    }

    /// The erased subject under match, for diagnostics.
    #[inline]
    #[must_use]
    pub fn subject(&self) -> Subject<'s> {
        self.subject
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Case entry points
    // ═══════════════════════════════════════════════════════════════════════

    /// Case that matches when `extractor` accepts the subject, binding no
    /// values.
    ///
    /// The arm is dead if a result is already committed, the subject is
    /// not an `S`, or the extractor rejects it.
    pub fn case_empty<S, E>(&mut self, extractor: &E) -> Arm0<'_, 's, S, R>
    where
        S: Any,
        E: EmptyExtractor<S> + ?Sized,
    {
        let label = || format!("case_empty({extractor:?})");
        if self.is_committed() {
            self.trace_case(CaseOutcome::Skipped, label);
            return Arm0::dead();
        }
        let subject = match self.subject.downcast_ref::<S>() {
            Some(subject) => subject,
            None => {
                self.trace_case(CaseOutcome::TypeMismatch, label);
                return Arm0::dead();
            }
        };
        if extractor.matches(subject) {
            self.trace_case(CaseOutcome::Extracted, label);
            Arm0::live(self, subject)
        } else {
            self.trace_case(CaseOutcome::NoMatch, label);
            Arm0::dead()
        }
    }

    /// Case that binds the one value `extractor` pulls out of the
    /// subject.
    pub fn case_single<S, E>(&mut self, extractor: &E) -> Arm1<'_, 's, S, E::Out, R>
    where
        S: Any,
        E: SingleExtractor<S> + ?Sized,
    {
        let label = || format!("case_single({extractor:?})");
        if self.is_committed() {
            self.trace_case(CaseOutcome::Skipped, label);
            return Arm1::dead();
        }
        let subject = match self.subject.downcast_ref::<S>() {
            Some(subject) => subject,
            None => {
                self.trace_case(CaseOutcome::TypeMismatch, label);
                return Arm1::dead();
            }
        };
        match extractor.extract(subject) {
            Some(value) => {
                self.trace_case(CaseOutcome::Extracted, label);
                Arm1::live(self, subject, value)
            }
            None => {
                self.trace_case(CaseOutcome::NoMatch, label);
                Arm1::dead()
            }
        }
    }

    /// Case that binds the two values `extractor` pulls out of the
    /// subject.
    pub fn case_pair<S, E>(&mut self, extractor: &E) -> Arm2<'_, 's, S, E::First, E::Second, R>
    where
        S: Any,
        E: PairExtractor<S> + ?Sized,
    {
        let label = || format!("case_pair({extractor:?})");
        if self.is_committed() {
            self.trace_case(CaseOutcome::Skipped, label);
            return Arm2::dead();
        }
        let subject = match self.subject.downcast_ref::<S>() {
            Some(subject) => subject,
            None => {
                self.trace_case(CaseOutcome::TypeMismatch, label);
                return Arm2::dead();
            }
        };
        match extractor.extract(subject) {
            Some((first, second)) => {
                self.trace_case(CaseOutcome::Extracted, label);
                Arm2::live(self, subject, first, second)
            }
            None => {
                self.trace_case(CaseOutcome::NoMatch, label);
                Arm2::dead()
            }
        }
    }

    /// Case that binds the three values `extractor` pulls out of the
    /// subject.
    pub fn case_triple<S, E>(
        &mut self,
        extractor: &E,
    ) -> Arm3<'_, 's, S, E::First, E::Second, E::Third, R>
    where
        S: Any,
        E: TripleExtractor<S> + ?Sized,
    {
        let label = || format!("case_triple({extractor:?})");
        if self.is_committed() {
            self.trace_case(CaseOutcome::Skipped, label);
            return Arm3::dead();
        }
        let subject = match self.subject.downcast_ref::<S>() {
            Some(subject) => subject,
            None => {
                self.trace_case(CaseOutcome::TypeMismatch, label);
                return Arm3::dead();
            }
        };
        match extractor.extract(subject) {
            Some((first, second, third)) => {
                self.trace_case(CaseOutcome::Extracted, label);
                Arm3::live(self, subject, first, second, third)
            }
            None => {
                self.trace_case(CaseOutcome::NoMatch, label);
                Arm3::dead()
            }
        }
    }

    /// Case that matches any subject of type `T`.
    ///
    /// The typed subject is the single argument of the arm's guards and
    /// handler:
    ///
    /// ```
    /// use casus::prelude::*;
    ///
    /// let subject = 14_u32;
    /// let result = match_value(&subject, |m| {
    ///     m.case_type::<u32>().and(|n| n % 2 == 0).then(|n| n / 2);
    ///     m.case_type::<u32>().then(|n| *n);
    /// });
    /// assert_eq!(result.unwrap(), 7);
    /// ```
    pub fn case_type<T: Any>(&mut self) -> Arm0<'_, 's, T, R> {
        let label = || format!("case_type::<{}>", any::type_name::<T>());
        if self.is_committed() {
            self.trace_case(CaseOutcome::Skipped, label);
            return Arm0::dead();
        }
        match self.subject.downcast_ref::<T>() {
            Some(subject) => {
                self.trace_case(CaseOutcome::Extracted, label);
                Arm0::live(self, subject)
            }
            None => {
                self.trace_case(CaseOutcome::TypeMismatch, label);
                Arm0::dead()
            }
        }
    }

    /// Case that matches a subject of type `T` equal to any of `values`.
    ///
    /// Candidates may be a different type than the subject as long as
    /// `T: PartialEq` over them, so string subjects compare against
    /// `&str` literals directly. `T` is rarely inferable from the
    /// candidates alone; name it with a turbofish:
    ///
    /// ```
    /// use casus::prelude::*;
    ///
    /// let subject = String::from("yes");
    /// let result = match_value(&subject, |m| {
    ///     m.case_value::<String, _>(["yes", "y"]).then(|_| true);
    ///     m.case_value::<String, _>(["no", "n"]).then(|_| false);
    /// });
    /// assert!(result.unwrap());
    /// ```
    ///
    /// An absent subject matches no value case; route it through
    /// [`case_absent`](MatchContext::case_absent). A typed "null" such
    /// as `Option::<u32>::None` is an ordinary subject of type
    /// `Option<u32>` and can be listed here as a candidate.
    pub fn case_value<T, I>(&mut self, values: I) -> Arm0<'_, 's, T, R>
    where
        T: Any + PartialEq<I::Item>,
        I: IntoIterator,
    {
        let label = || format!("case_value::<{}>", any::type_name::<T>());
        if self.is_committed() {
            self.trace_case(CaseOutcome::Skipped, label);
            return Arm0::dead();
        }
        let subject = match self.subject.downcast_ref::<T>() {
            Some(subject) => subject,
            None => {
                self.trace_case(CaseOutcome::TypeMismatch, label);
                return Arm0::dead();
            }
        };
        if values.into_iter().any(|candidate| *subject == candidate) {
            self.trace_case(CaseOutcome::Extracted, label);
            Arm0::live(self, subject)
        } else {
            self.trace_case(CaseOutcome::NoMatch, label);
            Arm0::dead()
        }
    }

    /// Case that matches only an absent subject.
    ///
    /// Guards and the handler take no arguments; there is nothing to
    /// bind.
    pub fn case_absent(&mut self) -> AbsentArm<'_, 's, R> {
        let label = || String::from("case_absent");
        if self.is_committed() {
            self.trace_case(CaseOutcome::Skipped, label);
            return AbsentArm::dead();
        }
        if self.subject.is_absent() {
            self.trace_case(CaseOutcome::Extracted, label);
            AbsentArm::live(self)
        } else {
            self.trace_case(CaseOutcome::NoMatch, label);
            AbsentArm::dead()
        }
    }

    /// Catch-all: commits `action()` unless a result is already
    /// committed.
    ///
    /// `otherwise` matches unconditionally, so placing it anywhere but
    /// last makes every later case unreachable.
    pub fn otherwise(&mut self, action: impl FnOnce() -> R) {
        let label = || String::from("otherwise");
        if self.is_committed() {
            self.trace_case(CaseOutcome::Skipped, label);
            return;
        }
        self.trace_case(CaseOutcome::Extracted, label);
        let result = action();
        self.commit(result);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Completion
    // ═══════════════════════════════════════════════════════════════════════

    /// The committed result, or [`MatchError`] if no case matched.
    pub fn finish(self) -> Result<R, MatchError> {
        match self.result {
            Some(result) => Ok(result),
            None => Err(error_for(self.subject)),
        }
    }

    /// Like [`finish`](MatchContext::finish), also returning the trace.
    ///
    /// A context built with [`new`](MatchContext::new) recorded nothing
    /// and yields an empty trace.
    pub fn finish_with_trace(self) -> (Result<R, MatchError>, MatchTrace) {
        let Self {
            subject,
            result,
            trace,
        } = self;
        let outcome = match result {
            Some(result) => Ok(result),
            None => Err(error_for(subject)),
        };
        (outcome, trace.unwrap_or_default())
    }

    pub(crate) fn commit(&mut self, result: R) {
        self.result = Some(result);
        if let Some(trace) = &mut self.trace {
            trace.committed_now();
        }
    }

    fn trace_case(&mut self, outcome: CaseOutcome, label: impl FnOnce() -> String) {
        if let Some(trace) = &mut self.trace {
            trace.record_case(label(), outcome);
        }
    }

    pub(crate) fn trace_guard_passed(&mut self) {
        if let Some(trace) = &mut self.trace {
            trace.guard_passed();
        }
    }

    pub(crate) fn trace_guard_failed(&mut self) {
        if let Some(trace) = &mut self.trace {
            trace.guard_failed();
        }
    }
}

impl<R> fmt::Debug for MatchContext<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchContext")
            .field("subject", &self.subject)
            .field("committed", &self.is_committed())
            .field("tracing", &self.trace.is_some())
            .finish()
    }
}

fn error_for(subject: Subject<'_>) -> MatchError {
    MatchError {
        subject: format!("{subject:?}"),
        type_name: subject.type_name(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Entry points
// ═══════════════════════════════════════════════════════════════════════════

/// Match `subject` against the cases registered by `cases`, first match
/// wins.
///
/// The subject is usually a reference, but anything implementing
/// [`IntoSubject`] works, including `Option<&S>` and
/// [`Subject::absent`] for a subject that is not there at all.
///
/// # Errors
///
/// Returns [`MatchError`] when no case committed a result.
pub fn match_value<'s, R>(
    subject: impl IntoSubject<'s>,
    cases: impl FnOnce(&mut MatchContext<'s, R>),
) -> Result<R, MatchError> {
    let mut ctx = MatchContext::new(subject);
    cases(&mut ctx);
    ctx.finish()
}

/// [`match_value`] with a [`MatchTrace`] of what every case did.
///
/// Tracing never changes which case commits; it only records the
/// evaluations that happened anyway.
pub fn match_value_with_trace<'s, R>(
    subject: impl IntoSubject<'s>,
    cases: impl FnOnce(&mut MatchContext<'s, R>),
) -> (Result<R, MatchError>, MatchTrace) {
    let mut ctx = MatchContext::with_trace(subject);
    cases(&mut ctx);
    ctx.finish_with_trace()
}
