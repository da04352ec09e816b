// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Recoverable errors of the library.
//!
//! Malformed intervals are not errors: they are normalized into the empty or NaN sentinel. Errors are kept for the textual syntax and for operations that have no sound default.

use std::fmt;
use thiserror::Error;

/// Failure to read an interval or an interval union from its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIntervalError {
  #[error("expected an opening bracket `(` or `[`")]
  MissingLeftBracket,
  #[error("expected `,` between the boundaries of an interval")]
  MissingComma,
  #[error("expected a closing bracket `)` or `]`")]
  MissingRightBracket,
  #[error("invalid interval boundary `{0}`")]
  InvalidBoundary(String),
  #[error("interval union is not terminated by `;`")]
  Unterminated,
  #[error("unexpected input `{0}` after the interval")]
  TrailingInput(String),
}

/// Failure of a type-erased operation between measurable sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
  #[error("no union is known between `{lhs}` and `{rhs}`; declare a relation between the two set types")]
  UnknownUnion { lhs: &'static str, rhs: &'static str },
  #[error("`{0}` has no registered formatter; wrap a value of this type in a `MeasurableSet` to register it")]
  MissingFormatter(&'static str),
  #[error("`{0}` has no known complement")]
  UnknownComplement(&'static str),
  #[error(transparent)]
  Format(#[from] fmt::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributionError {
  #[error("conditioning a continuous distribution on a non-empty event of Lebesgue measure zero is not supported")]
  NullConditioningEvent,
}
