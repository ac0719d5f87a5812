//! `Subject`: the type-erased view of the value being matched.
//!
//! A match operation does not know the subject's concrete type up front.
//! Each case names the type it expects and the subject either is that type
//! or the case goes dead. `Subject` erases the concrete type behind
//! `dyn Any` while keeping two things the engine needs for diagnostics:
//! the type name and a way to render the value.
//!
//! # Borrowed, not owned
//!
//! A `Subject` borrows the value for the duration of one match operation.
//! It is `Copy`, and [`downcast_ref`](Subject::downcast_ref) returns
//! references tied to the borrowed value's lifetime, not to the `Subject`
//! itself. Handlers can therefore return references into the subject.
//!
//! # Absent subjects
//!
//! [`Subject::absent`] carries no value at all. An absent subject fails
//! every typed case and is matched only by
//! [`case_absent`](crate::MatchContext::case_absent).

use std::any::{self, Any};
use std::fmt;

/// Type-erased borrowed view of a match subject.
///
/// Built from any sized `Any + Debug` value, or absent. The concrete type
/// is recovered per case via [`downcast_ref`](Self::downcast_ref).
///
/// Subject types must be `'static` (the value is borrowed, but its type
/// cannot itself contain non-static references).
///
/// # Example
///
/// ```
/// use casus::Subject;
///
/// let value = String::from("hello");
/// let subject = Subject::of(&value);
///
/// assert_eq!(subject.downcast_ref::<String>().map(String::as_str), Some("hello"));
/// assert!(subject.downcast_ref::<i32>().is_none());
/// assert!(!subject.is_absent());
/// ```
#[derive(Clone, Copy)]
pub struct Subject<'s> {
    value: Option<&'s dyn Any>,
    debug: Option<fn(&dyn Any, &mut fmt::Formatter<'_>) -> fmt::Result>,
    type_name: &'static str,
}

/// Renders the erased value with the `Debug` impl of its construction type.
fn debug_erased<S: Any + fmt::Debug>(
    value: &dyn Any,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    match value.downcast_ref::<S>() {
        Some(value) => fmt::Debug::fmt(value, f),
        None => f.write_str("<opaque>"),
    }
}

impl<'s> Subject<'s> {
    /// Wrap a borrowed value as a match subject.
    ///
    /// Captures the value's type name and `Debug` rendering for
    /// diagnostics; neither is consulted on the match hot path.
    pub fn of<S: Any + fmt::Debug>(value: &'s S) -> Self {
        Self {
            value: Some(value),
            debug: Some(debug_erased::<S>),
            type_name: any::type_name::<S>(),
        }
    }

    /// The subject that carries no value.
    ///
    /// Fails every typed case; matched by
    /// [`case_absent`](crate::MatchContext::case_absent) only.
    #[must_use]
    pub fn absent() -> Self {
        Self {
            value: None,
            debug: None,
            type_name: "<absent>",
        }
    }

    /// Returns `true` if this subject carries no value.
    #[inline]
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Try to view the subject as a `T`.
    ///
    /// Returns `None` when the subject is absent or is not exactly `T`.
    /// The returned reference borrows the underlying value, not this
    /// `Subject`, so it outlives any particular copy of the view:
    ///
    /// ```
    /// use casus::Subject;
    ///
    /// let value = String::from("persistent");
    /// let borrowed: &String;
    /// {
    ///     let subject = Subject::of(&value);
    ///     borrowed = subject.downcast_ref::<String>().unwrap();
    /// }
    /// assert_eq!(borrowed, "persistent");
    /// ```
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&'s T> {
        self.value.and_then(|value| value.downcast_ref::<T>())
    }

    /// Returns `true` if the subject is present and is exactly a `T`.
    #[inline]
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.value.is_some_and(|value| value.is::<T>())
    }

    /// The subject's concrete type name, or `"<absent>"`.
    ///
    /// Diagnostic only. The string comes from [`std::any::type_name`] and
    /// its exact form is not guaranteed across compiler versions.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Subject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.value, self.debug) {
            (Some(value), Some(debug)) => debug(value, f),
            _ => f.write_str("<absent>"),
        }
    }
}

/// Conversion into a [`Subject`] at the start of a match operation.
///
/// Lets [`match_value`](crate::match_value) accept a plain reference, an
/// optional reference, or a prepared `Subject` with one entry point.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a match subject",
    label = "not a subject",
    note = "pass a reference to a sized `Debug` value (`&S`), an `Option<&S>`, or a `Subject` built with `Subject::of` / `Subject::absent`"
)]
pub trait IntoSubject<'s> {
    /// Convert into the erased subject view.
    fn into_subject(self) -> Subject<'s>;
}

impl<'s, S: Any + fmt::Debug> IntoSubject<'s> for &'s S {
    fn into_subject(self) -> Subject<'s> {
        Subject::of(self)
    }
}

/// `None` becomes the absent subject.
impl<'s, S: Any + fmt::Debug> IntoSubject<'s> for Option<&'s S> {
    fn into_subject(self) -> Subject<'s> {
        match self {
            Some(value) => Subject::of(value),
            None => Subject::absent(),
        }
    }
}

impl<'s> IntoSubject<'s> for Subject<'s> {
    fn into_subject(self) -> Subject<'s> {
        self
    }
}
