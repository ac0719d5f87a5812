//! casus - structural pattern matching with extractors, guards, and
//! first-match-wins cases
//!
//! A match operation takes one subject, erases its type, and runs it
//! through cases in registration order. The first case whose shape fits
//! (and whose guards pass) commits its handler's result; every later
//! case is skipped before its extractor is consulted.
//!
//! # Architecture
//!
//! - [`Subject`]: the erased subject, a present value or nothing at all
//! - [`EmptyExtractor`] / [`SingleExtractor`] / [`PairExtractor`] /
//!   [`TripleExtractor`]: the shape protocol, one trait per arity
//! - [`MatchContext`]: one match operation with registration order,
//!   first-match-wins, and commitment
//! - [`Arm0`] through [`Arm3`] and [`AbsentArm`]: live/dead guard chains
//!   between a case and its handler
//! - [`seq`] / [`text`]: ready-made shapes over `Vec` and string
//!   subjects
//! - [`MatchTrace`]: optional per-case evaluation report
//!
//! # Key Design Insights
//!
//! 1. **Type erasure at the subject**: [`Subject`] erases the type once;
//!    every case re-types it independently, so one match freely mixes
//!    cases over unrelated types and the mismatches just fall through.
//!
//! 2. **Commitment short-circuits**: the first handler that runs wins.
//!    Cases registered after the commit are skipped before their
//!    extractor is consulted, so extractors past the match are never
//!    evaluated at all.
//!
//! 3. **Dead arms stay inert**: a case that fails yields a dead arm that
//!    absorbs `and` and `then` without evaluating the guards or the
//!    handler. A chain reads the same whether or not it matched.
//!
//! # Example
//!
//! ```
//! use casus::prelude::*;
//!
//! let command = vec!["push".to_string(), "origin".to_string(), "main".to_string()];
//!
//! let plan = match_value(&command, |m| {
//!     m.case_empty(&seq::Empty)
//!         .then(|_: &Vec<String>| "show help".to_string());
//!     m.case_single(&seq::One)
//!         .then(|_, verb: String| format!("run {verb} with defaults"));
//!     m.case_pair(&seq::OneAndRest)
//!         .and(|_: &Vec<String>, verb, _| verb == "push")
//!         .then(|_, _, args| format!("push to {}", args.join(" ")));
//!     m.otherwise(|| "unknown command".to_string());
//! });
//!
//! assert_eq!(plan.unwrap(), "push to origin main");
//! ```
//!
//! When no case matches and no [`otherwise`](MatchContext::otherwise) is
//! registered, the operation returns [`MatchError`] carrying a rendering
//! of the subject.

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod arm;
mod context;
mod extractor;
mod subject;
mod trace;

pub mod seq;
pub mod text;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

// Core types
pub use arm::{AbsentArm, Arm0, Arm1, Arm2, Arm3};
pub use context::{match_value, match_value_with_trace, MatchContext};
pub use subject::{IntoSubject, Subject};

// Extractor protocol
pub use extractor::{EmptyExtractor, PairExtractor, SingleExtractor, TripleExtractor};

// Trace types
pub use trace::{CaseOutcome, CaseTrace, MatchTrace};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use casus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Arms
        AbsentArm,
        Arm0,
        Arm1,
        Arm2,
        Arm3,
        // Trace types
        CaseOutcome,
        CaseTrace,
        // Extractor protocol
        EmptyExtractor,
        IntoSubject,
        // Core types
        MatchContext,
        // Errors
        MatchError,
        MatchTrace,
        PairExtractor,
        SingleExtractor,
        Subject,
        TripleExtractor,
        // Entry points
        match_value,
        match_value_with_trace,
        // Shape modules
        seq,
        text,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// No case matched the subject.
///
/// The single failure mode of a match operation: every case fell
/// through and no [`otherwise`](MatchContext::otherwise) was registered.
/// Guards and handlers do not return errors; anything they raise is a
/// panic and propagates out of the match untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchError {
    /// The subject rendered with the `Debug` impl of its construction
    /// type, or `"<absent>"` for an absent subject.
    pub subject: String,
    /// The subject's type name as [`std::any::type_name`] renders it,
    /// or `"<absent>"`. Diagnostic only; the exact form is not
    /// guaranteed across compiler versions.
    pub type_name: &'static str,
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no case matched the subject: {}", self.subject)
    }
}

impl std::error::Error for MatchError {}
