// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Interval with independently open or closed endpoints.
//!
//! Either endpoint may be infinite. A closed infinite endpoint (`[-inf` or `inf]`) means the point at infinity belongs to the interval, which is how the extended real line is represented. Construction never fails: an interval with a NaN boundary or an invalid bracket becomes the NaN sentinel `(NaN,NaN]`, and an interval without any point becomes the canonical empty interval `(0,0)`.
//!
//! # Examples
//!
//! ```rust
//! use measurable::Interval;
//!
//! let i = Interval::new(0.0, true, 1.0, false);
//! assert!(i.contains(&0.0));
//! assert!(!i.contains(&1.0));
//! assert_eq!(i.to_string(), "[0,1)");
//! assert_eq!(Interval::new(1.0, false, 1.0, true), Interval::empty());
//! assert!(Interval::new(f64::NAN, true, 1.0, true).is_nan());
//! ```

use crate::error::ParseIntervalError;
use crate::ops::{cmp_lower, cmp_upper, Boundary, Hull, Whole};
use gcollections::kind::Collection;
use gcollections::ops::{Contains, Empty, Intersection, IsEmpty};
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Copy, Clone)]
pub struct Interval<B> {
  lower: B,
  upper: B,
  lower_closed: bool,
  upper_closed: bool
}

impl<B: Boundary> Interval<B>
{
  pub fn new(lower: B, lower_closed: bool, upper: B, upper_closed: bool) -> Interval<B> {
    if lower.is_nan() || upper.is_nan() {
      Interval::nan()
    }
    else if lower > upper || (lower == upper && !(lower_closed && upper_closed)) {
      Interval::empty()
    }
    else {
      Interval { lower, upper, lower_closed, upper_closed }
    }
  }

  /// Builds an interval from its textual brackets. Any bracket other than `(`, `[` on the left and `)`, `]` on the right gives the NaN interval.
  pub fn from_brackets(left: char, lower: B, upper: B, right: char) -> Interval<B> {
    match (left, right) {
      ('(' | '[', ')' | ']') => Interval::new(lower, left == '[', upper, right == ']'),
      _ => Interval::nan()
    }
  }

  pub fn open(lower: B, upper: B) -> Interval<B> {
    Interval::new(lower, false, upper, false)
  }

  pub fn closed(lower: B, upper: B) -> Interval<B> {
    Interval::new(lower, true, upper, true)
  }

  pub fn singleton(x: B) -> Interval<B> {
    Interval::closed(x, x)
  }

  pub fn empty() -> Interval<B> {
    Interval {
      lower: B::zero(),
      upper: B::zero(),
      lower_closed: false,
      upper_closed: false
    }
  }

  pub fn nan() -> Interval<B> {
    Interval {
      lower: B::nan(),
      upper: B::nan(),
      lower_closed: false,
      upper_closed: true
    }
  }

  /// The real line `(-inf,inf)`, or the extended real line `[-inf,inf]`.
  pub fn universal(extended: bool) -> Interval<B> {
    Interval::new(B::neg_infinity(), extended, B::infinity(), extended)
  }

  pub fn lower(&self) -> B {
    self.lower
  }

  pub fn upper(&self) -> B {
    self.upper
  }

  pub fn is_lower_closed(&self) -> bool {
    self.lower_closed
  }

  pub fn is_upper_closed(&self) -> bool {
    self.upper_closed
  }

  pub fn left_bracket(&self) -> char {
    if self.lower_closed { '[' } else { '(' }
  }

  pub fn right_bracket(&self) -> char {
    if self.upper_closed { ']' } else { ')' }
  }

  /// False for the NaN interval.
  pub fn is_empty(&self) -> bool {
    self.lower > self.upper
      || (self.lower == self.upper && !(self.lower_closed && self.upper_closed))
  }

  pub fn is_nan(&self) -> bool {
    self.lower.is_nan()
  }

  pub fn is_singleton(&self) -> bool {
    self.lower == self.upper && self.lower_closed && self.upper_closed
  }

  pub fn contains(&self, x: &B) -> bool {
    let x = *x;
    (self.lower < x && x < self.upper)
      || (x == self.lower && self.lower_closed)
      || (x == self.upper && self.upper_closed)
  }

  pub(crate) fn cmp_lower(&self, other: &Interval<B>) -> Ordering {
    cmp_lower(self.lower, self.lower_closed, other.lower, other.lower_closed)
  }

  pub(crate) fn cmp_upper(&self, other: &Interval<B>) -> Ordering {
    cmp_upper(self.upper, self.upper_closed, other.upper, other.upper_closed)
  }
}

impl<B: Boundary> PartialEq for Interval<B>
{
  fn eq(&self, other: &Interval<B>) -> bool {
    self.lower == other.lower
      && self.upper == other.upper
      && self.lower_closed == other.lower_closed
      && self.upper_closed == other.upper_closed
  }

  // A NaN interval is neither equal nor different to anything, itself included.
  #[allow(clippy::partialeq_ne_impl)]
  fn ne(&self, other: &Interval<B>) -> bool {
    !(self.is_nan() || other.is_nan()) && !self.eq(other)
  }
}

impl<B: Boundary> Collection for Interval<B>
{
  type Item = B;
}

impl<B: Boundary> Contains for Interval<B>
{
  fn contains(&self, value: &B) -> bool {
    Interval::contains(self, value)
  }
}

impl<B: Boundary> IsEmpty for Interval<B>
{
  fn is_empty(&self) -> bool {
    Interval::is_empty(self)
  }
}

impl<B: Boundary> Empty for Interval<B>
{
  fn empty() -> Interval<B> {
    Interval::empty()
  }
}

impl<B: Boundary> Whole for Interval<B>
{
  fn whole(extended: bool) -> Interval<B> {
    Interval::universal(extended)
  }
}

impl<B: Boundary> Intersection for Interval<B>
{
  type Output = Interval<B>;

  fn intersection(&self, rhs: &Interval<B>) -> Interval<B> {
    if self.is_nan() || rhs.is_nan() {
      return Interval::nan();
    }
    let lower = if self.cmp_lower(rhs) == Ordering::Less { rhs } else { self };
    let upper = if self.cmp_upper(rhs) == Ordering::Greater { rhs } else { self };
    Interval::new(lower.lower, lower.lower_closed, upper.upper, upper.upper_closed)
  }
}

impl<B: Boundary> Hull for Interval<B>
{
  type Output = Interval<B>;

  fn hull(&self, rhs: &Interval<B>) -> Interval<B> {
    if self.is_nan() || rhs.is_nan() {
      Interval::nan()
    }
    else if self.is_empty() {
      *rhs
    }
    else if rhs.is_empty() {
      *self
    }
    else {
      let lower = if self.cmp_lower(rhs) == Ordering::Greater { rhs } else { self };
      let upper = if self.cmp_upper(rhs) == Ordering::Less { rhs } else { self };
      Interval::new(lower.lower, lower.lower_closed, upper.upper, upper.upper_closed)
    }
  }
}

impl<B: Boundary> Display for Interval<B>
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    write!(formatter, "{}{},{}{}", self.left_bracket(), self.lower, self.upper, self.right_bracket())
  }
}

fn is_delimiter(c: char) -> bool {
  matches!(c, '(' | '[' | ')' | ']' | ',' | ';')
}

fn is_right_bracket(c: char) -> bool {
  c == ')' || c == ']'
}

fn parse_boundary<B: Boundary>(text: &str) -> Result<B, ParseIntervalError> {
  let text = text.trim();
  text.parse::<B>()
    .map_err(|_| ParseIntervalError::InvalidBoundary(text.to_string()))
}

/// Reads one interval at the start of `input`, skipping leading whitespace, and returns it with the remaining input.
pub fn parse_prefix<B: Boundary>(input: &str) -> Result<(Interval<B>, &str), ParseIntervalError> {
  let input = input.trim_start();
  let left = match input.chars().next() {
    Some(c @ '(') | Some(c @ '[') => c,
    _ => return Err(ParseIntervalError::MissingLeftBracket)
  };
  let rest = &input[1..];

  let comma = match rest.find(is_delimiter) {
    Some(i) if rest[i..].starts_with(',') => i,
    _ => return Err(ParseIntervalError::MissingComma)
  };
  let lower = parse_boundary::<B>(&rest[..comma])?;
  let rest = &rest[comma + 1..];

  let close = match rest.find(is_delimiter) {
    Some(i) if rest[i..].starts_with(is_right_bracket) => i,
    _ => return Err(ParseIntervalError::MissingRightBracket)
  };
  let upper = parse_boundary::<B>(&rest[..close])?;
  let right = rest.as_bytes()[close] as char;

  Ok((Interval::from_brackets(left, lower, upper, right), &rest[close + 1..]))
}

impl<B: Boundary> FromStr for Interval<B>
{
  type Err = ParseIntervalError;

  fn from_str(s: &str) -> Result<Interval<B>, ParseIntervalError> {
    let (interval, rest) = parse_prefix(s)?;
    let rest = rest.trim();
    if rest.is_empty() {
      Ok(interval)
    }
    else {
      Err(ParseIntervalError::TrailingInput(rest.to_string()))
    }
  }
}

impl<B: Boundary> Serialize for Interval<B>
{
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de, B: Boundary> Deserialize<'de> for Interval<B>
{
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Interval<B>, D::Error> {
    let text = String::deserialize(deserializer)?;
    text.parse().map_err(de::Error::custom)
  }
}
