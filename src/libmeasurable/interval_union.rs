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

//! Finite union of intervals over the extended real line.
//!
//! The intervals are stored sorted by lower endpoint and maximally coalesced: two stored intervals never overlap and never touch at a point covered by one of them. For example `(0,1] U (1,2)` is stored as `{(0,2)}` while `(0,1) U (1,2)` stays `{(0,1), (1,2)}` since `1` belongs to neither. Since this representation is unique, equality is a plain comparison of the stored intervals.
//!
//! The empty sequence is the null set. A union containing a NaN interval collapses to the NaN union, which absorbs every operation and is neither equal nor different to anything.
//!
//! # Examples
//!
//! ```rust
//! use measurable::{Interval, IntervalUnion};
//! use measurable::gcollections::ops::*;
//!
//! let a = IntervalUnion::from_intervals(vec![
//!   Interval::from_brackets('(', 0.0, 1.0, ']'),
//!   Interval::from_brackets('(', 1.0, 2.0, ')')]);
//! assert_eq!(a.to_string(), "(0,2);");
//!
//! let b: IntervalUnion<f64> = "[1,3];".parse().unwrap();
//! assert_eq!((&a & &b).to_string(), "[1,2);");
//! assert_eq!((&a | &b).to_string(), "(0,3];");
//! assert_eq!(a.complement().to_string(), "(-inf,0][2,inf);");
//! ```

use crate::error::ParseIntervalError;
use crate::interval::{self, Interval};
use crate::measurable_set::{MeasurableSet, MeasurableSetImpl};
use crate::measures::Count;
use crate::ops::{Boundary, Hull, Whole};
use crate::registry::Registrar;
use crate::sets::RealNumbers;
use gcollections::kind::Collection;
use gcollections::ops::{Complement, Contains, Empty, Intersection, IsEmpty, Union};
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::iter::FromIterator;
use std::ops::{BitAnd, BitOr, Not};
use std::slice;
use std::str::FromStr;
use trilean::SKleene;

#[derive(Debug, Clone)]
pub struct IntervalUnion<B> {
  intervals: Vec<Interval<B>>
}

impl<B: Boundary> IntervalUnion<B>
{
  pub fn empty() -> IntervalUnion<B> {
    IntervalUnion { intervals: vec![] }
  }

  pub fn nan() -> IntervalUnion<B> {
    IntervalUnion { intervals: vec![Interval::nan()] }
  }

  pub fn universal(extended: bool) -> IntervalUnion<B> {
    IntervalUnion::from(Interval::universal(extended))
  }

  /// Sorts and coalesces arbitrary intervals. Empty intervals are dropped and a single NaN interval makes the whole union NaN.
  pub fn from_intervals<I>(intervals: I) -> IntervalUnion<B> where
   I: IntoIterator<Item=Interval<B>>
  {
    let mut intervals: Vec<Interval<B>> = intervals.into_iter()
      .filter(|i| !i.is_empty())
      .collect();
    if intervals.iter().any(|i| i.is_nan()) {
      return IntervalUnion::nan();
    }
    intervals.sort_by(|a, b| a.cmp_lower(b));
    let mut res = IntervalUnion::empty();
    for i in intervals {
      res.join_or_push(i);
    }
    res
  }

  pub fn is_empty(&self) -> bool {
    self.intervals.is_empty()
  }

  pub fn is_nan(&self) -> bool {
    self.intervals.len() == 1 && self.intervals[0].is_nan()
  }

  pub fn interval_count(&self) -> usize {
    self.intervals.len()
  }

  pub fn iter(&self) -> slice::Iter<'_, Interval<B>> {
    self.intervals.iter()
  }

  pub fn contains(&self, x: &B) -> bool {
    if self.is_nan() {
      return false;
    }
    let idx = self.intervals.partition_point(|i| i.upper() < *x);
    self.intervals.get(idx).map_or(false, |i| i.contains(x))
  }

  /// Complement relative to the extended real line `[-inf,inf]` when `extended` is set, and to `(-inf,inf)` otherwise.
  pub fn invert(&self, extended: bool) -> IntervalUnion<B> {
    if self.is_nan() {
      return IntervalUnion::nan();
    }
    let mut res = IntervalUnion::empty();
    let mut lower = B::neg_infinity();
    let mut lower_closed = extended;
    for i in &self.intervals {
      res.push_gap(Interval::new(lower, lower_closed, i.lower(), !i.is_lower_closed()));
      lower = i.upper();
      lower_closed = !i.is_upper_closed();
    }
    res.push_gap(Interval::new(lower, lower_closed, B::infinity(), extended));
    res
  }

  /// True if one of the infinite points belongs to the union.
  pub fn touches_infinity(&self) -> bool {
    match (self.intervals.first(), self.intervals.last()) {
      (Some(front), Some(back)) if !self.is_nan() =>
        (front.is_lower_closed() && front.lower() == B::neg_infinity())
          || (back.is_upper_closed() && back.upper() == B::infinity()),
      _ => false
    }
  }

  pub fn kleene_eq(&self, other: &IntervalUnion<B>) -> SKleene {
    if self.is_nan() || other.is_nan() {
      SKleene::Unknown
    }
    else if self.intervals == other.intervals {
      SKleene::True
    }
    else {
      SKleene::False
    }
  }

  pub fn is_subset(&self, other: &IntervalUnion<B>) -> SKleene {
    self.intersection(other).kleene_eq(self)
  }

  /// Reads one union terminated by `;` at the start of `input` and returns it with the remaining input.
  pub fn parse_prefix(input: &str) -> Result<(IntervalUnion<B>, &str), ParseIntervalError> {
    let mut rest = input.trim_start();
    let mut intervals = vec![];
    loop {
      if let Some(tail) = rest.strip_prefix(';') {
        return Ok((IntervalUnion::from_intervals(intervals), tail));
      }
      if rest.is_empty() {
        return Err(ParseIntervalError::Unterminated);
      }
      let (i, tail) = interval::parse_prefix(rest)?;
      intervals.push(i);
      rest = tail.trim_start();
    }
  }

  fn push_gap(&mut self, gap: Interval<B>) {
    if !gap.is_empty() {
      self.join_or_push(gap);
    }
  }

  fn join_or_push(&mut self, x: Interval<B>) {
    debug_assert!(!x.is_empty() && !x.is_nan(), "Cannot push an empty or NaN interval.");
    debug_assert!(self.intervals.last().map_or(true, |back| back.cmp_lower(&x) != Ordering::Greater),
      "This operation is only for pushing interval to the back of the array, possibly overlapping with the last element.");
    let joint = match self.intervals.last() {
      Some(back) if joinable(back, &x) => {
        let joint = back.hull(&x);
        self.intervals.pop();
        joint
      }
      _ => x
    };
    self.intervals.push(joint);
  }
}

// `second` starts after `first`; they join if they overlap or if their common point belongs to one of them.
fn joinable<B: Boundary>(first: &Interval<B>, second: &Interval<B>) -> bool {
  second.lower() < first.upper()
    || (second.lower() == first.upper() && (first.is_upper_closed() || second.is_lower_closed()))
}

impl<B: Boundary> From<Interval<B>> for IntervalUnion<B>
{
  fn from(i: Interval<B>) -> IntervalUnion<B> {
    IntervalUnion::from_intervals(vec![i])
  }
}

impl<B: Boundary> FromIterator<Interval<B>> for IntervalUnion<B>
{
  fn from_iter<I: IntoIterator<Item=Interval<B>>>(iter: I) -> IntervalUnion<B> {
    IntervalUnion::from_intervals(iter)
  }
}

impl<'a, B: Boundary> IntoIterator for &'a IntervalUnion<B>
{
  type Item = &'a Interval<B>;
  type IntoIter = slice::Iter<'a, Interval<B>>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<B: Boundary> PartialEq for IntervalUnion<B>
{
  fn eq(&self, other: &IntervalUnion<B>) -> bool {
    self.kleene_eq(other) == SKleene::True
  }

  #[allow(clippy::partialeq_ne_impl)]
  fn ne(&self, other: &IntervalUnion<B>) -> bool {
    self.kleene_eq(other) == SKleene::False
  }
}

impl<B: Boundary> Collection for IntervalUnion<B>
{
  type Item = B;
}

impl<B: Boundary> Contains for IntervalUnion<B>
{
  fn contains(&self, value: &B) -> bool {
    IntervalUnion::contains(self, value)
  }
}

impl<B: Boundary> IsEmpty for IntervalUnion<B>
{
  fn is_empty(&self) -> bool {
    IntervalUnion::is_empty(self)
  }
}

impl<B: Boundary> Empty for IntervalUnion<B>
{
  fn empty() -> IntervalUnion<B> {
    IntervalUnion::empty()
  }
}

impl<B: Boundary> Whole for IntervalUnion<B>
{
  fn whole(extended: bool) -> IntervalUnion<B> {
    IntervalUnion::universal(extended)
  }
}

impl<B: Boundary> Intersection for IntervalUnion<B>
{
  type Output = IntervalUnion<B>;

  fn intersection(&self, rhs: &IntervalUnion<B>) -> IntervalUnion<B> {
    if self.is_nan() || rhs.is_nan() {
      return IntervalUnion::nan();
    }
    let (a, b) = (&self.intervals, &rhs.intervals);
    let mut res = IntervalUnion::empty();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
      let x = a[i].intersection(&b[j]);
      if !x.is_empty() {
        res.join_or_push(x);
      }
      // advance the one with the lowest upper bound.
      match a[i].cmp_upper(&b[j]) {
        Ordering::Less => i += 1,
        Ordering::Greater => j += 1,
        Ordering::Equal => { i += 1; j += 1; }
      }
    }
    res
  }
}

impl<B: Boundary> Union for IntervalUnion<B>
{
  type Output = IntervalUnion<B>;

  fn union(&self, rhs: &IntervalUnion<B>) -> IntervalUnion<B> {
    if self.is_nan() || rhs.is_nan() {
      return IntervalUnion::nan();
    }
    let (a, b) = (&self.intervals, &rhs.intervals);
    let mut res = IntervalUnion::empty();
    let (mut i, mut j) = (0, 0);
    while i < a.len() || j < b.len() {
      let take_left = j == b.len()
        || (i < a.len() && a[i].cmp_lower(&b[j]) != Ordering::Greater);
      if take_left {
        res.join_or_push(a[i]);
        i += 1;
      }
      else {
        res.join_or_push(b[j]);
        j += 1;
      }
    }
    res
  }
}

/// The complement is taken on the extended real line when the union contains one of the infinite points, and on the real line otherwise.
impl<B: Boundary> Complement for IntervalUnion<B>
{
  fn complement(&self) -> IntervalUnion<B> {
    self.invert(self.touches_infinity())
  }
}

forward_all_binop!(impl<B: Boundary> BitAnd for IntervalUnion<B>, bitand => intersection);
forward_all_binop!(impl<B: Boundary> BitOr for IntervalUnion<B>, bitor => union);

impl<B: Boundary> Not for IntervalUnion<B>
{
  type Output = IntervalUnion<B>;

  fn not(self) -> IntervalUnion<B> {
    self.complement()
  }
}

impl<'a, B: Boundary> Not for &'a IntervalUnion<B>
{
  type Output = IntervalUnion<B>;

  fn not(self) -> IntervalUnion<B> {
    self.complement()
  }
}

impl<B: Boundary> Intersection<RealNumbers> for IntervalUnion<B>
{
  type Output = IntervalUnion<B>;

  fn intersection(&self, _rhs: &RealNumbers) -> IntervalUnion<B> {
    self.intersection(&IntervalUnion::<B>::universal(false))
  }
}

impl<B: Boundary> Intersection<IntervalUnion<B>> for RealNumbers
{
  type Output = IntervalUnion<B>;

  fn intersection(&self, rhs: &IntervalUnion<B>) -> IntervalUnion<B> {
    rhs.intersection(self)
  }
}

impl<B: Boundary> Union<RealNumbers> for IntervalUnion<B>
{
  type Output = IntervalUnion<B>;

  fn union(&self, _rhs: &RealNumbers) -> IntervalUnion<B> {
    self.union(&IntervalUnion::<B>::universal(false))
  }
}

impl<B: Boundary> Union<IntervalUnion<B>> for RealNumbers
{
  type Output = IntervalUnion<B>;

  fn union(&self, rhs: &IntervalUnion<B>) -> IntervalUnion<B> {
    rhs.union(self)
  }
}

impl<B: Boundary> MeasurableSetImpl for IntervalUnion<B>
{
  fn register_type(registrar: &mut Registrar<'_, Self>) {
    registrar.relate::<RealNumbers>();
  }

  /// Infinite as soon as one interval is not reduced to a point. The point `-inf` is not counted.
  fn counting_measure(&self) -> Count {
    if self.is_nan() {
      return Count::Undefined;
    }
    let mut points = 0;
    for i in &self.intervals {
      if !i.is_singleton() {
        return Count::Infinite;
      }
      if i.lower() != B::neg_infinity() {
        points += 1;
      }
    }
    Count::Finite(points)
  }

  fn lebesgue_measure(&self) -> f64 {
    if self.is_nan() {
      return f64::NAN;
    }
    self.intervals.iter()
      .filter(|i| !i.is_singleton())
      .map(|i| (i.upper() - i.lower()).to_f64().unwrap_or(f64::NAN))
      .sum()
  }

  fn absolute_complement(&self) -> Option<MeasurableSet> {
    Some(MeasurableSet::new(self.complement()))
  }
}

impl<B: Boundary> Display for IntervalUnion<B>
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    if self.intervals.is_empty() {
      write!(formatter, "{}", Interval::<B>::empty())?;
    }
    for i in &self.intervals {
      write!(formatter, "{}", i)?;
    }
    write!(formatter, ";")
  }
}

impl<B: Boundary> FromStr for IntervalUnion<B>
{
  type Err = ParseIntervalError;

  fn from_str(s: &str) -> Result<IntervalUnion<B>, ParseIntervalError> {
    let (union, rest) = IntervalUnion::parse_prefix(s)?;
    let rest = rest.trim();
    if rest.is_empty() {
      Ok(union)
    }
    else {
      Err(ParseIntervalError::TrailingInput(rest.to_string()))
    }
  }
}

impl<B: Boundary> Serialize for IntervalUnion<B>
{
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de, B: Boundary> Deserialize<'de> for IntervalUnion<B>
{
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<IntervalUnion<B>, D::Error> {
    let text = String::deserialize(deserializer)?;
    text.parse().map_err(de::Error::custom)
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::{Rng, SeedableRng};
  use serde_test::{assert_tokens, Token};

  const inf: f64 = f64::INFINITY;

  type Bracketed = (char, f64, f64, char);

  fn make_union(intervals: Vec<Bracketed>) -> IntervalUnion<f64> {
    intervals.into_iter()
      .map(|(l, a, b, r)| Interval::from_brackets(l, a, b, r))
      .collect()
  }

  fn test_binary_op_sym<F>(test_id: String, a: Vec<Bracketed>, b: Vec<Bracketed>, op: F, expected: Vec<Bracketed>) where
    F: Fn(&IntervalUnion<f64>, &IntervalUnion<f64>) -> IntervalUnion<f64>
  {
    let a = make_union(a);
    let b = make_union(b);
    let expected = make_union(expected);
    let result = op(&a, &b);
    assert!(result == expected, "{} | {} is different from the expected value: {}.", test_id, result, expected);
    let result = op(&b, &a);
    assert!(result == expected, "{} (sym) | {} is different from the expected value: {}.", test_id, result, expected);
  }

  #[test]
  fn canonical_form() {
    let cases = vec![
      (1, vec![('(', -1.0, 0.0, ']'), ('(', 0.0, 1.0, ']')], "(-1,1];"),
      (2, vec![('(', 0.0, 1.0, ')'), ('(', 1.0, 2.0, ')')], "(0,1)(1,2);"),
      (3, vec![('(', 0.0, 1.0, ']'), ('(', 1.0, 2.0, ')')], "(0,2);"),
      (4, vec![('[', 4.0, 5.0, ']'), ('[', 0.0, 1.0, ']'), ('(', 0.5, 2.0, ')')], "[0,2)[4,5];"),
      (5, vec![('(', 2.0, 1.0, ')'), ('[', 3.0, 3.0, ')')], "(0,0);"),
      (6, vec![('[', -inf, -inf, ']'), ('(', -inf, 0.0, ')')], "[-inf,0);"),
      (7, vec![('[', 0.0, 1.0, ']'), ('(', f64::NAN, 1.0, ')')], "(NaN,NaN];"),
      (8, vec![('<', 0.0, 1.0, ']')], "(NaN,NaN];")
    ];
    for (id, intervals, expected) in cases {
      assert_eq!(make_union(intervals).to_string(), expected, "test #{} of canonical form", id);
    }
    assert!(make_union(vec![('(', -1.0, 0.0, ']'), ('(', 0.0, 1.0, ']')]) == make_union(vec![('(', -1.0, 1.0, ']')]));
    assert!(make_union(vec![('(', 0.0, 1.0, ')'), ('(', 1.0, 2.0, ')')]) != make_union(vec![('(', 0.0, 2.0, ')')]));
    assert!(make_union(vec![('(', 0.0, 1.0, ']'), ('(', 1.0, 2.0, ']')]) == make_union(vec![('(', 0.0, 2.0, ']')]));
  }

  #[test]
  fn test_contains() {
    let u = make_union(vec![('[', 0.0, 1.0, ')'), ('(', 1.0, 2.0, ']'), ('[', 5.0, inf, ']')]);
    for x in &[0.0, 0.5, 1.5, 2.0, 5.0, 1e10, inf] {
      assert!(u.contains(x), "{} is not contained inside {}, but it should.", x, u);
    }
    for x in &[-1.0, 1.0, 3.0, -inf, f64::NAN] {
      assert!(!u.contains(x), "{} is contained inside {}, but it should not.", x, u);
    }
    assert!(!IntervalUnion::<f64>::empty().contains(&0.0));
    assert!(!IntervalUnion::<f64>::nan().contains(&0.0));
  }

  #[test]
  fn test_union() {
    let sym_cases = vec![
      ("union1", vec![('(', 0.0, 1.0, ']')], vec![('(', 1.0, 2.0, ']')], vec![('(', 0.0, 2.0, ']')]),
      ("union2", vec![('(', 0.0, 1.0, ')')], vec![('(', 1.0, 2.0, ')')], vec![('(', 0.0, 1.0, ')'), ('(', 1.0, 2.0, ')')]),
      ("union3", vec![('[', 0.0, 1.0, ')')], vec![('[', 1.0, 2.0, ']')], vec![('[', 0.0, 2.0, ']')]),
      ("union4", vec![('(', 0.0, 1.0, ']')], vec![('(', 1.0, 2.0, ')')], vec![('(', 0.0, 2.0, ')')]),
      ("union5", vec![('[', 0.0, 1.0, ']'), ('[', 4.0, 5.0, ']')], vec![('[', 2.0, 3.0, ']')],
        vec![('[', 0.0, 1.0, ']'), ('[', 2.0, 3.0, ']'), ('[', 4.0, 5.0, ']')]),
      ("union6", vec![('[', 0.0, 1.0, ']'), ('[', 4.0, 5.0, ']')], vec![('(', 1.0, 4.0, ')')], vec![('[', 0.0, 5.0, ']')]),
      ("union7", vec![], vec![('[', 0.0, 1.0, ']')], vec![('[', 0.0, 1.0, ']')]),
      ("union8", vec![('(', -inf, 0.0, ')')], vec![('[', 0.0, inf, ')')], vec![('(', -inf, inf, ')')]),
      ("union9", vec![('[', 0.0, 0.0, ']')], vec![('(', 0.0, 1.0, ')')], vec![('[', 0.0, 1.0, ')')]),
      ("union10", vec![('[', 0.0, 10.0, ']')], vec![('[', 1.0, 2.0, ']'), ('[', 3.0, 11.0, ')')], vec![('[', 0.0, 11.0, ')')])
    ];

    for (id, a, b, expected) in sym_cases {
      test_binary_op_sym(id.to_string(), a, b, |x, y| x.union(y), expected);
    }
  }

  #[test]
  fn test_intersection() {
    let sym_cases = vec![
      ("intersection1", vec![('[', 0.0, 2.0, ']')], vec![('[', 1.0, 3.0, ']')], vec![('[', 1.0, 2.0, ']')]),
      ("intersection2", vec![('[', 0.0, 1.0, ']'), ('[', 2.0, 3.0, ']')], vec![('[', 0.5, 2.5, ']')],
        vec![('[', 0.5, 1.0, ']'), ('[', 2.0, 2.5, ']')]),
      ("intersection3", vec![('[', 0.0, 1.0, ')')], vec![('[', 1.0, 2.0, ']')], vec![]),
      ("intersection4", vec![('[', 0.0, 1.0, ']')], vec![('[', 1.0, 2.0, ']')], vec![('[', 1.0, 1.0, ']')]),
      ("intersection5", vec![('(', -inf, inf, ')')], vec![('[', 0.0, 1.0, ']'), ('(', 2.0, 3.0, ')')],
        vec![('[', 0.0, 1.0, ']'), ('(', 2.0, 3.0, ')')]),
      ("intersection6", vec![('[', 0.0, 1.0, ']'), ('[', 2.0, 3.0, ']'), ('[', 4.0, 5.0, ']')], vec![('[', 1.0, 4.0, ']')],
        vec![('[', 1.0, 1.0, ']'), ('[', 2.0, 3.0, ']'), ('[', 4.0, 4.0, ']')]),
      ("intersection7", vec![('[', 0.0, 10.0, ']')], vec![('[', 1.0, 2.0, ']'), ('[', 3.0, 4.0, ']')],
        vec![('[', 1.0, 2.0, ']'), ('[', 3.0, 4.0, ']')]),
      ("intersection8", vec![], vec![('[', 1.0, 2.0, ']')], vec![]),
      ("intersection9", vec![('(', -inf, inf, ')')], vec![('[', -inf, 0.0, ']')], vec![('(', -inf, 0.0, ']')])
    ];

    for (id, a, b, expected) in sym_cases {
      test_binary_op_sym(id.to_string(), a, b, |x, y| x.intersection(y), expected);
    }
  }

  #[test]
  fn test_complement() {
    let cases = vec![
      (1, vec![], false, vec![('(', -inf, inf, ')')]),
      (2, vec![], true, vec![('[', -inf, inf, ']')]),
      (3, vec![('[', 0.0, 1.0, ']')], false, vec![('(', -inf, 0.0, ')'), ('(', 1.0, inf, ')')]),
      (4, vec![('(', 0.0, 1.0, ')'), ('(', 1.0, 2.0, ')')], false,
        vec![('(', -inf, 0.0, ']'), ('[', 1.0, 1.0, ']'), ('[', 2.0, inf, ')')]),
      (5, vec![('(', -inf, 0.0, ']')], true, vec![('[', -inf, -inf, ']'), ('(', 0.0, inf, ']')]),
      (6, vec![('[', -inf, inf, ']')], true, vec![]),
      (7, vec![('[', 0.0, 1.0, ']')], true, vec![('[', -inf, 0.0, ')'), ('(', 1.0, inf, ']')])
    ];
    for (id, a, extended, expected) in cases {
      let result = make_union(a).invert(extended);
      let expected = make_union(expected);
      assert!(result == expected, "test #{} of invert | {} is different from the expected value: {}.", id, result, expected);
    }

    assert_eq!(make_union(vec![('[', -inf, 0.0, ']')]).complement().to_string(), "(0,inf];");
    assert_eq!(make_union(vec![('[', 0.0, 1.0, ']')]).complement().to_string(), "(-inf,0)(1,inf);");
    assert_eq!((!IntervalUnion::<f64>::empty()).to_string(), "(-inf,inf);");
    assert!(IntervalUnion::<f64>::nan().invert(true).is_nan());
    assert!(IntervalUnion::<f64>::nan().complement().is_nan());

    let half_line = make_union(vec![('[', 0.0, inf, ']')]);
    assert!(half_line.complement().complement() == half_line);
    let both_ends = make_union(vec![('[', -inf, 0.0, ']'), ('[', 1.0, inf, ']')]);
    assert_eq!(both_ends.complement().to_string(), "(0,1);");
    assert_eq!(both_ends.complement().complement().to_string(), "(-inf,0][1,inf);");
  }

  #[test]
  fn nan_absorbs() {
    let nan = IntervalUnion::<f64>::nan();
    let a = make_union(vec![('[', 0.0, 1.0, ']')]);
    let empty = IntervalUnion::empty();
    for other in &[a, empty, IntervalUnion::universal(true), nan.clone()] {
      assert!((&nan | other).is_nan());
      assert!((other | &nan).is_nan());
      assert!((&nan & other).is_nan());
      assert!((other & &nan).is_nan());
      assert!(!(&nan == other) && !(&nan != other));
      assert!(!(other == &nan) && !(other != &nan));
      assert_eq!(nan.kleene_eq(other), SKleene::Unknown);
      assert_eq!(other.is_subset(&nan), SKleene::Unknown);
    }
    assert!(!nan.is_empty());
    assert_eq!(nan.counting_measure(), Count::Undefined);
    assert!(nan.lebesgue_measure().is_nan());
  }

  #[test]
  fn subset() {
    let a = make_union(vec![('[', 0.0, 1.0, ')')]);
    let b = make_union(vec![('[', 0.0, 1.0, ']'), ('[', 2.0, 3.0, ']')]);
    assert_eq!(a.is_subset(&b), SKleene::True);
    assert_eq!(b.is_subset(&a), SKleene::False);
    assert_eq!(IntervalUnion::empty().is_subset(&a), SKleene::True);
    assert_eq!(a.kleene_eq(&a), SKleene::True);
  }

  #[test]
  fn measures() {
    let cases = vec![
      (1, vec![('[', 0.0, 1.0, ']'), ('[', 2.0, 2.0, ']')], Count::Infinite, 1.0),
      (2, vec![('[', 1.0, 1.0, ']'), ('[', 2.0, 2.0, ']')], Count::Finite(2), 0.0),
      (3, vec![], Count::Finite(0), 0.0),
      (4, vec![('[', 0.0, inf, ')')], Count::Infinite, inf),
      (5, vec![('[', -inf, -inf, ']'), ('[', 3.0, 3.0, ']')], Count::Finite(1), 0.0),
      (6, vec![('(', 0.0, 0.5, ')'), ('(', 1.0, 3.0, ']')], Count::Infinite, 2.5),
      (7, vec![('[', 3.0, 3.0, ']'), ('[', inf, inf, ']')], Count::Finite(2), 0.0),
      (8, vec![('[', inf, inf, ']')], Count::Finite(1), 0.0)
    ];
    for (id, a, count, lebesgue) in cases {
      let a = make_union(a);
      assert_eq!(a.counting_measure(), count, "test #{} of counting measure", id);
      assert_eq!(a.lebesgue_measure(), lebesgue, "test #{} of lebesgue measure", id);
    }
  }

  #[test]
  fn real_numbers_relation() {
    let a = make_union(vec![('[', -inf, 0.0, ']'), ('[', inf, inf, ']')]);
    assert_eq!(a.intersection(&RealNumbers).to_string(), "(-inf,0];");
    assert_eq!(RealNumbers.intersection(&a).to_string(), "(-inf,0];");
    assert_eq!(a.union(&RealNumbers).to_string(), "[-inf,inf];");
    assert_eq!(RealNumbers.union(&IntervalUnion::<f64>::empty()).to_string(), "(-inf,inf);");
  }

  #[test]
  fn display_and_parse() {
    assert_eq!(IntervalUnion::<f64>::empty().to_string(), "(0,0);");
    assert_eq!(IntervalUnion::<f64>::nan().to_string(), "(NaN,NaN];");
    assert_eq!(" [0 , 1 ) (2,3] ;".parse::<IntervalUnion<f64>>().map(|u| u.to_string()), Ok("[0,1)(2,3];".to_string()));
    assert_eq!("(0,0);".parse::<IntervalUnion<f64>>(), Ok(IntervalUnion::empty()));
    assert_eq!(";".parse::<IntervalUnion<f64>>(), Ok(IntervalUnion::empty()));
    assert!("(NaN,NaN];".parse::<IntervalUnion<f64>>().map(|u| u.is_nan()).unwrap_or(false));
    assert_eq!("(0,1]".parse::<IntervalUnion<f64>>(), Err(ParseIntervalError::Unterminated));
    assert_eq!("(0,1]; x".parse::<IntervalUnion<f64>>(), Err(ParseIntervalError::TrailingInput("x".to_string())));
    assert_eq!("(0,1] 2".parse::<IntervalUnion<f64>>(), Err(ParseIntervalError::MissingLeftBracket));
  }

  #[test]
  fn parse_several_unions() {
    let buffer = "(0,1];\n[2,3](4,5);\n(0,0);";
    let (a, rest) = IntervalUnion::<f64>::parse_prefix(buffer).unwrap();
    let (b, rest) = IntervalUnion::<f64>::parse_prefix(rest).unwrap();
    let (c, rest) = IntervalUnion::<f64>::parse_prefix(rest).unwrap();
    assert_eq!(a, make_union(vec![('(', 0.0, 1.0, ']')]));
    assert_eq!(b, make_union(vec![('[', 2.0, 3.0, ']'), ('(', 4.0, 5.0, ')')]));
    assert!(c.is_empty());
    assert_eq!(rest, "");
  }

  #[test]
  fn serde_textual_form() {
    assert_tokens(&make_union(vec![('(', 0.0, 1.0, ']'), ('[', 2.0, 3.0, ']')]), &[Token::Str("(0,1][2,3];")]);
    assert_tokens(&IntervalUnion::<f64>::empty(), &[Token::Str("(0,0);")]);
  }

  fn random_union(rng: &mut StdRng) -> IntervalUnion<f64> {
    let points = [-inf, -2.0, -1.0, -0.5, 0.0, 1.0, 2.0, inf];
    let count = rng.gen_range(0..5);
    (0..count).map(|_| {
      let a = points[rng.gen_range(0..points.len())];
      let b = points[rng.gen_range(0..points.len())];
      Interval::new(a.min(b), rng.gen(), a.max(b), rng.gen())
    }).collect()
  }

  fn check_set(a: &IntervalUnion<f64>) {
    let empty = IntervalUnion::empty();
    let whole = IntervalUnion::universal(true);
    let c = a.invert(true);
    assert_eq!(a.to_string().parse::<IntervalUnion<f64>>().as_ref(), Ok(a));
    assert_eq!(&c.invert(true), a);
    assert_eq!(&(a | &empty), a);
    assert_eq!(a & &empty, empty);
    assert_eq!(&(a | a), a);
    assert_eq!(&(a & a), a);
    assert_eq!(a | &c, whole);
    assert_eq!(a & &c, empty);
    assert_eq!(a | &whole, whole);
    assert_eq!(&(a & &whole), a);
    if !a.touches_infinity() {
      let real_line = IntervalUnion::universal(false);
      let c = a.invert(false);
      assert_eq!(&c.invert(false), a);
      assert_eq!(a | &c, real_line);
      assert_eq!(a & &c, empty);
    }
  }

  fn check_pair(a: &IntervalUnion<f64>, b: &IntervalUnion<f64>) {
    let a_or_b = a | b;
    let a_and_b = a & b;
    assert_eq!(a_or_b, b | a);
    assert_eq!(a_and_b, b & a);
    assert_eq!(&(a | &a_and_b), a);
    assert_eq!(&(a & &a_or_b), a);
    assert_eq!(a_or_b.invert(true), a.invert(true) & b.invert(true));
    assert_eq!(a_and_b.invert(true), a.invert(true) | b.invert(true));
    if !(a.touches_infinity() || b.touches_infinity()) {
      assert_eq!(a_or_b.invert(false), a.invert(false) & b.invert(false));
      assert_eq!(a_and_b.invert(false), a.invert(false) | b.invert(false));
    }
    assert_eq!(a_and_b == *a, a_or_b == *b);
    assert_eq!(a.is_subset(b), a.kleene_eq(&a_and_b));
  }

  fn check_triple(a: &IntervalUnion<f64>, b: &IntervalUnion<f64>, c: &IntervalUnion<f64>) {
    assert_eq!((a | b) | c, a | (b | c));
    assert_eq!((a & b) & c, a & (b & c));
    assert_eq!(a | (b & c), (a | b) & (a | c));
    assert_eq!(a & (b | c), (a & b) | (a & c));
  }

  #[test]
  fn algebraic_laws() {
    let mut rng = StdRng::seed_from_u64(0x1eb5);
    for _ in 0..300 {
      let a = random_union(&mut rng);
      let b = random_union(&mut rng);
      let c = random_union(&mut rng);
      for x in &[&a, &b, &c] {
        check_set(x);
      }
      check_pair(&a, &b);
      check_pair(&b, &c);
      check_pair(&a, &a);
      check_triple(&a, &b, &c);
      check_triple(&c, &a, &b);
    }
  }
}
