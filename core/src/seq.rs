//! Sequence shapes: extractors that match a `Vec` subject by length.
//!
//! Each shape is a unit struct implementing the extractor trait of its
//! arity. Bound elements are cloned out of the subject and the `*Rest`
//! shapes bind the tail as a fresh `Vec`, so handlers own what they
//! receive and the subject is never touched.
//!
//! The element type rarely pins itself down from the shape alone; name
//! it on the handler's subject or value parameter, the same place the
//! result of the extraction is used:
//!
//! ```
//! use casus::prelude::*;
//!
//! fn sum(values: &Vec<i64>) -> i64 {
//!     match_value(values, |m| {
//!         m.case_empty(&seq::Empty).then(|_: &Vec<i64>| 0);
//!         m.case_pair(&seq::OneAndRest)
//!             .then(|_, head: i64, rest| head + sum(&rest));
//!     })
//!     .unwrap()
//! }
//!
//! assert_eq!(sum(&vec![1, 2, 3, 4]), 10);
//! assert_eq!(sum(&Vec::new()), 0);
//! ```

use crate::extractor::{EmptyExtractor, PairExtractor, SingleExtractor, TripleExtractor};

/// Matches the empty list, binding nothing.
///
/// The only shape with no `Clone` requirement on the element type.
#[derive(Debug, Clone, Copy)]
pub struct Empty;

impl<T> EmptyExtractor<Vec<T>> for Empty {
    fn matches(&self, subject: &Vec<T>) -> bool {
        subject.is_empty()
    }
}

/// Matches a list with exactly one element, binding it.
#[derive(Debug, Clone, Copy)]
pub struct One;

impl<T: Clone> SingleExtractor<Vec<T>> for One {
    type Out = T;

    fn extract(&self, subject: &Vec<T>) -> Option<T> {
        match subject.as_slice() {
            [only] => Some(only.clone()),
            _ => None,
        }
    }
}

/// Matches a non-empty list, binding the head and the tail.
///
/// A one-element list matches with an empty tail.
#[derive(Debug, Clone, Copy)]
pub struct OneAndRest;

impl<T: Clone> PairExtractor<Vec<T>> for OneAndRest {
    type First = T;
    type Second = Vec<T>;

    fn extract(&self, subject: &Vec<T>) -> Option<(T, Vec<T>)> {
        match subject.as_slice() {
            [head, rest @ ..] => Some((head.clone(), rest.to_vec())),
            [] => None,
        }
    }
}

/// Matches a list with exactly two elements, binding both.
#[derive(Debug, Clone, Copy)]
pub struct Two;

impl<T: Clone> PairExtractor<Vec<T>> for Two {
    type First = T;
    type Second = T;

    fn extract(&self, subject: &Vec<T>) -> Option<(T, T)> {
        match subject.as_slice() {
            [first, second] => Some((first.clone(), second.clone())),
            _ => None,
        }
    }
}

/// Matches a list with at least two elements, binding the first two and
/// the tail.
///
/// A two-element list matches with an empty tail.
#[derive(Debug, Clone, Copy)]
pub struct TwoAndRest;

impl<T: Clone> TripleExtractor<Vec<T>> for TwoAndRest {
    type First = T;
    type Second = T;
    type Third = Vec<T>;

    fn extract(&self, subject: &Vec<T>) -> Option<(T, T, Vec<T>)> {
        match subject.as_slice() {
            [first, second, rest @ ..] => {
                Some((first.clone(), second.clone(), rest.to_vec()))
            }
            _ => None,
        }
    }
}
