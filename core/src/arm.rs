//! Case arms: the live/dead builder chain between a case entry point and
//! its handler.
//!
//! Every `case_*` method on [`MatchContext`] returns an arm. A live arm
//! holds the typed subject and the extracted values; a dead arm holds
//! nothing. Both accept the same `and`/`then` calls, so a chain reads the
//! same whether or not the case matched:
//!
//! - `and` on a live arm runs the guard; `false` kills the arm.
//! - `and` on a dead arm returns a dead arm without evaluating the guard.
//! - `then` on a live arm runs the handler and commits its result;
//!   `then` on a dead arm does nothing.
//!
//! Death is one-way. Once an arm is dead, no later guard can revive it,
//! and the positional meaning of each guard is preserved: in
//! `case().and(a).and(b)`, `b` runs only if `a` passed.
//!
//! An arm borrows the match context exclusively, so guards and handlers
//! cannot re-enter the same match operation. Starting a fresh
//! [`match_value`](crate::match_value) inside a handler is fine.
//!
//! There is one arm type per extractor arity ([`Arm0`] through [`Arm3`])
//! plus [`AbsentArm`] for the subject-less absent case. Guards receive
//! the subject and extracted values by reference; handlers receive the
//! subject by reference and the extracted values by value.

use crate::context::MatchContext;
use std::fmt;

/// Arm of a zero-value case.
///
/// Returned by [`case_empty`](MatchContext::case_empty),
/// [`case_type`](MatchContext::case_type) and
/// [`case_value`](MatchContext::case_value). Guards and the handler
/// receive the typed subject.
#[must_use = "a case arm does nothing until `then` is called"]
pub struct Arm0<'c, 's, S, R> {
    state: Option<Live0<'c, 's, S, R>>,
}

struct Live0<'c, 's, S, R> {
    ctx: &'c mut MatchContext<'s, R>,
    subject: &'s S,
}

impl<'c, 's, S, R> Arm0<'c, 's, S, R> {
    pub(crate) fn live(ctx: &'c mut MatchContext<'s, R>, subject: &'s S) -> Self {
        Self {
            state: Some(Live0 { ctx, subject }),
        }
    }

    pub(crate) fn dead() -> Self {
        Self { state: None }
    }

    /// Narrow the case with a guard predicate.
    ///
    /// On a live arm the guard runs against the typed subject; `false`
    /// kills the arm. On a dead arm the guard is not evaluated.
    pub fn and(mut self, guard: impl FnOnce(&'s S) -> bool) -> Self {
        if let Some(live) = self.state.take() {
            if guard(live.subject) {
                live.ctx.trace_guard_passed();
                return Self { state: Some(live) };
            }
            live.ctx.trace_guard_failed();
        }
        Self { state: None }
    }

    /// Run the handler and commit its result if the arm is live.
    ///
    /// Checks the committed flag once more right before running; a dead
    /// arm ignores the handler entirely.
    pub fn then(self, handler: impl FnOnce(&'s S) -> R) {
        if let Some(live) = self.state {
            if !live.ctx.is_committed() {
                let result = handler(live.subject);
                live.ctx.commit(result);
            }
        }
    }
}

impl<S, R> fmt::Debug for Arm0<'_, '_, S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arm0")
            .field("live", &self.state.is_some())
            .finish()
    }
}

/// Arm of a single-value case.
///
/// Returned by [`case_single`](MatchContext::case_single). Guards see the
/// extracted value by reference; the handler takes it by value.
#[must_use = "a case arm does nothing until `then` is called"]
pub struct Arm1<'c, 's, S, A, R> {
    state: Option<Live1<'c, 's, S, A, R>>,
}

struct Live1<'c, 's, S, A, R> {
    ctx: &'c mut MatchContext<'s, R>,
    subject: &'s S,
    value: A,
}

impl<'c, 's, S, A, R> Arm1<'c, 's, S, A, R> {
    pub(crate) fn live(ctx: &'c mut MatchContext<'s, R>, subject: &'s S, value: A) -> Self {
        Self {
            state: Some(Live1 {
                ctx,
                subject,
                value,
            }),
        }
    }

    pub(crate) fn dead() -> Self {
        Self { state: None }
    }

    /// Narrow the case with a guard predicate over the subject and the
    /// extracted value.
    ///
    /// On a dead arm the guard is not evaluated.
    pub fn and(mut self, guard: impl FnOnce(&'s S, &A) -> bool) -> Self {
        if let Some(live) = self.state.take() {
            if guard(live.subject, &live.value) {
                live.ctx.trace_guard_passed();
                return Self { state: Some(live) };
            }
            live.ctx.trace_guard_failed();
        }
        Self { state: None }
    }

    /// Run the handler on the subject and extracted value, committing the
    /// result if the arm is live.
    pub fn then(self, handler: impl FnOnce(&'s S, A) -> R) {
        if let Some(live) = self.state {
            if !live.ctx.is_committed() {
                let result = handler(live.subject, live.value);
                live.ctx.commit(result);
            }
        }
    }
}

impl<S, A, R> fmt::Debug for Arm1<'_, '_, S, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arm1")
            .field("live", &self.state.is_some())
            .finish()
    }
}

/// Arm of a two-value case.
///
/// Returned by [`case_pair`](MatchContext::case_pair).
#[must_use = "a case arm does nothing until `then` is called"]
pub struct Arm2<'c, 's, S, A, B, R> {
    state: Option<Live2<'c, 's, S, A, B, R>>,
}

struct Live2<'c, 's, S, A, B, R> {
    ctx: &'c mut MatchContext<'s, R>,
    subject: &'s S,
    first: A,
    second: B,
}

impl<'c, 's, S, A, B, R> Arm2<'c, 's, S, A, B, R> {
    pub(crate) fn live(
        ctx: &'c mut MatchContext<'s, R>,
        subject: &'s S,
        first: A,
        second: B,
    ) -> Self {
        Self {
            state: Some(Live2 {
                ctx,
                subject,
                first,
                second,
            }),
        }
    }

    pub(crate) fn dead() -> Self {
        Self { state: None }
    }

    /// Narrow the case with a guard predicate over the subject and both
    /// extracted values.
    ///
    /// On a dead arm the guard is not evaluated.
    pub fn and(mut self, guard: impl FnOnce(&'s S, &A, &B) -> bool) -> Self {
        if let Some(live) = self.state.take() {
            if guard(live.subject, &live.first, &live.second) {
                live.ctx.trace_guard_passed();
                return Self { state: Some(live) };
            }
            live.ctx.trace_guard_failed();
        }
        Self { state: None }
    }

    /// Run the handler on the subject and both extracted values,
    /// committing the result if the arm is live.
    pub fn then(self, handler: impl FnOnce(&'s S, A, B) -> R) {
        if let Some(live) = self.state {
            if !live.ctx.is_committed() {
                let result = handler(live.subject, live.first, live.second);
                live.ctx.commit(result);
            }
        }
    }
}

impl<S, A, B, R> fmt::Debug for Arm2<'_, '_, S, A, B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arm2")
            .field("live", &self.state.is_some())
            .finish()
    }
}

/// Arm of a three-value case.
///
/// Returned by [`case_triple`](MatchContext::case_triple).
#[must_use = "a case arm does nothing until `then` is called"]
pub struct Arm3<'c, 's, S, A, B, C, R> {
    state: Option<Live3<'c, 's, S, A, B, C, R>>,
}

struct Live3<'c, 's, S, A, B, C, R> {
    ctx: &'c mut MatchContext<'s, R>,
    subject: &'s S,
    first: A,
    second: B,
    third: C,
}

impl<'c, 's, S, A, B, C, R> Arm3<'c, 's, S, A, B, C, R> {
    pub(crate) fn live(
        ctx: &'c mut MatchContext<'s, R>,
        subject: &'s S,
        first: A,
        second: B,
        third: C,
    ) -> Self {
        Self {
            state: Some(Live3 {
                ctx,
                subject,
                first,
                second,
                third,
            }),
        }
    }

    pub(crate) fn dead() -> Self {
        Self { state: None }
    }

    /// Narrow the case with a guard predicate over the subject and all
    /// three extracted values.
    ///
    /// On a dead arm the guard is not evaluated.
    pub fn and(mut self, guard: impl FnOnce(&'s S, &A, &B, &C) -> bool) -> Self {
        if let Some(live) = self.state.take() {
            if guard(live.subject, &live.first, &live.second, &live.third) {
                live.ctx.trace_guard_passed();
                return Self { state: Some(live) };
            }
            live.ctx.trace_guard_failed();
        }
        Self { state: None }
    }

    /// Run the handler on the subject and all three extracted values,
    /// committing the result if the arm is live.
    pub fn then(self, handler: impl FnOnce(&'s S, A, B, C) -> R) {
        if let Some(live) = self.state {
            if !live.ctx.is_committed() {
                let result = handler(live.subject, live.first, live.second, live.third);
                live.ctx.commit(result);
            }
        }
    }
}

impl<S, A, B, C, R> fmt::Debug for Arm3<'_, '_, S, A, B, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arm3")
            .field("live", &self.state.is_some())
            .finish()
    }
}

/// Arm of the absent case.
///
/// Returned by [`case_absent`](MatchContext::case_absent). There is no
/// subject to pass, so guards and the handler take no arguments.
#[must_use = "a case arm does nothing until `then` is called"]
pub struct AbsentArm<'c, 's, R> {
    ctx: Option<&'c mut MatchContext<'s, R>>,
}

impl<'c, 's, R> AbsentArm<'c, 's, R> {
    pub(crate) fn live(ctx: &'c mut MatchContext<'s, R>) -> Self {
        Self { ctx: Some(ctx) }
    }

    pub(crate) fn dead() -> Self {
        Self { ctx: None }
    }

    /// Narrow the case with a zero-argument guard.
    ///
    /// On a dead arm the guard is not evaluated.
    pub fn and(mut self, guard: impl FnOnce() -> bool) -> Self {
        if let Some(ctx) = self.ctx.take() {
            if guard() {
                ctx.trace_guard_passed();
                return Self { ctx: Some(ctx) };
            }
            ctx.trace_guard_failed();
        }
        Self { ctx: None }
    }

    /// Run the handler and commit its result if the arm is live.
    pub fn then(self, handler: impl FnOnce() -> R) {
        if let Some(ctx) = self.ctx {
            if !ctx.is_committed() {
                let result = handler();
                ctx.commit(result);
            }
        }
    }
}

impl<R> fmt::Debug for AbsentArm<'_, '_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbsentArm")
            .field("live", &self.ctx.is_some())
            .finish()
    }
}
