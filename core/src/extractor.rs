//! The extractor protocol: pluggable shape tests over a typed subject.
//!
//! An extractor answers one question about a subject of a known type: does
//! it have my shape, and if so, what comes out of it? The four traits
//! cover arities zero through three:
//!
//! - [`EmptyExtractor`]: shape test only, nothing extracted
//! - [`SingleExtractor`]: shape test plus one extracted value
//! - [`PairExtractor`]: shape test plus two extracted values
//! - [`TripleExtractor`]: shape test plus three extracted values
//!
//! Extractors are pure and stateless: they never see the match context,
//! never learn whether a previous case matched, and can be shared freely
//! across concurrent match operations. A subject that does not have the
//! extractor's shape is an ordinary `false`/`None`, never a panic; panics
//! are reserved for genuine faults and propagate to the caller unchanged.
//!
//! Ready-made implementations live in [`seq`](crate::seq) (sequence
//! shapes over `Vec<T>`) and [`text`](crate::text) (string shapes).

use std::fmt::Debug;

/// Shape test with no extracted values.
///
/// The zero-arity end of the protocol: the case matches when `matches`
/// returns `true`, and the handler receives only the typed subject.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` so extractors can be shared
/// across concurrent match operations.
///
/// # Example
///
/// ```
/// use casus::EmptyExtractor;
///
/// #[derive(Debug)]
/// struct Zero;
///
/// impl EmptyExtractor<i32> for Zero {
///     fn matches(&self, subject: &i32) -> bool {
///         *subject == 0
///     }
/// }
///
/// assert!(Zero.matches(&0));
/// assert!(!Zero.matches(&7));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `EmptyExtractor<{S}>`",
    label = "this type cannot test the shape of `{S}`",
    note = "EmptyExtractor<S> is a shape test with no extracted values",
    note = "implement it for the exact subject type the case names (e.g. EmptyExtractor<Vec<i32>>, EmptyExtractor<String>)"
)]
pub trait EmptyExtractor<S>: Send + Sync + Debug {
    /// Returns `true` if the subject has this extractor's shape.
    fn matches(&self, subject: &S) -> bool;
}

// Blanket implementation for boxed extractors
#[diagnostic::do_not_recommend]
impl<S> EmptyExtractor<S> for Box<dyn EmptyExtractor<S>> {
    fn matches(&self, subject: &S) -> bool {
        (**self).matches(subject)
    }
}

/// Shape test extracting one value.
///
/// `extract` returns `Some(value)` when the subject has the shape, `None`
/// otherwise. The extracted value is owned by the case arm and handed to
/// the handler by value.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` so extractors can be shared
/// across concurrent match operations.
///
/// # Example
///
/// ```
/// use casus::SingleExtractor;
///
/// /// Extracts the payload of a one-element vector.
/// #[derive(Debug)]
/// struct Only;
///
/// impl SingleExtractor<Vec<i32>> for Only {
///     type Out = i32;
///
///     fn extract(&self, subject: &Vec<i32>) -> Option<i32> {
///         match subject.as_slice() {
///             [only] => Some(*only),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Only.extract(&vec![5]), Some(5));
/// assert_eq!(Only.extract(&vec![1, 2]), None);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `SingleExtractor<{S}>`",
    label = "this type cannot extract one value from `{S}`",
    note = "SingleExtractor<S> tests the subject's shape and extracts a single value",
    note = "implement it for the exact subject type the case names (e.g. SingleExtractor<Vec<i32>>, SingleExtractor<String>)"
)]
pub trait SingleExtractor<S>: Send + Sync + Debug {
    /// The extracted value's type.
    type Out;

    /// Returns the extracted value, or `None` if the shape does not match.
    fn extract(&self, subject: &S) -> Option<Self::Out>;
}

// Blanket implementation for boxed extractors
#[diagnostic::do_not_recommend]
impl<S, Out> SingleExtractor<S> for Box<dyn SingleExtractor<S, Out = Out>> {
    type Out = Out;

    fn extract(&self, subject: &S) -> Option<Out> {
        (**self).extract(subject)
    }
}

/// Shape test extracting two values.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` so extractors can be shared
/// across concurrent match operations.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `PairExtractor<{S}>`",
    label = "this type cannot extract two values from `{S}`",
    note = "PairExtractor<S> tests the subject's shape and extracts two values",
    note = "implement it for the exact subject type the case names (e.g. PairExtractor<Vec<i32>>)"
)]
pub trait PairExtractor<S>: Send + Sync + Debug {
    /// The first extracted value's type.
    type First;
    /// The second extracted value's type.
    type Second;

    /// Returns both extracted values, or `None` if the shape does not match.
    fn extract(&self, subject: &S) -> Option<(Self::First, Self::Second)>;
}

// Blanket implementation for boxed extractors
#[diagnostic::do_not_recommend]
impl<S, First, Second> PairExtractor<S> for Box<dyn PairExtractor<S, First = First, Second = Second>> {
    type First = First;
    type Second = Second;

    fn extract(&self, subject: &S) -> Option<(First, Second)> {
        (**self).extract(subject)
    }
}

/// Shape test extracting three values.
///
/// The largest arity in the protocol. Shapes that would need more values
/// are better expressed as one extracted composite value.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` so extractors can be shared
/// across concurrent match operations.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `TripleExtractor<{S}>`",
    label = "this type cannot extract three values from `{S}`",
    note = "TripleExtractor<S> tests the subject's shape and extracts three values",
    note = "implement it for the exact subject type the case names (e.g. TripleExtractor<Vec<i32>>)"
)]
pub trait TripleExtractor<S>: Send + Sync + Debug {
    /// The first extracted value's type.
    type First;
    /// The second extracted value's type.
    type Second;
    /// The third extracted value's type.
    type Third;

    /// Returns all three extracted values, or `None` if the shape does not match.
    fn extract(&self, subject: &S) -> Option<(Self::First, Self::Second, Self::Third)>;
}

// Blanket implementation for boxed extractors
#[diagnostic::do_not_recommend]
impl<S, First, Second, Third> TripleExtractor<S>
    for Box<dyn TripleExtractor<S, First = First, Second = Second, Third = Third>>
{
    type First = First;
    type Second = Second;
    type Third = Third;

    fn extract(&self, subject: &S) -> Option<(First, Second, Third)> {
        (**self).extract(subject)
    }
}
