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

//! Finite sets of ordered elements.
//!
//! Elements are kept sorted and without duplicates, so two finite sets are equal exactly when they hold the same elements. Finite sets of integers are related to the number sets: a finite set of unsigned integers is a subset of `ℕ`, and any finite set of integers is a subset of `ℤ` and `ℝ`. Signed sets only intersect with `ℕ`, since their union is not representable.
//!
//! # Examples
//!
//! ```rust
//! use measurable::sets::*;
//!
//! let digits = finite_set(vec![-3i32, 1, 4, 1, 5]);
//! assert_eq!(digits.to_string(), "{-3, 1, 4, 5}");
//! assert_eq!((&digits & &natural_numbers()).to_string(), "{1, 4, 5}");
//! assert_eq!(&digits | &integers(), integers());
//! ```

use crate::measurable_set::MeasurableSetImpl;
use crate::measures::Count;
use crate::registry::Registrar;
use crate::sets::{Integers, NaturalNumbers, RealNumbers};
use gcollections::kind::Collection;
use gcollections::ops::{Contains, Empty, Intersection, IsEmpty, Union};
use num_traits::{PrimInt, Unsigned};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FromIterator;
use std::slice;

/// Type of the elements of a [`FiniteSet`](struct.FiniteSet.html).
///
/// `register_relations` declares the relations of `FiniteSet<Self>` with other set types.
pub trait Element: Ord + Clone + Debug + Display + 'static
{
  fn register_relations(_registrar: &mut Registrar<'_, FiniteSet<Self>>) {}
}

macro_rules! unsigned_element {
  ( $( $t: ty ),* ) => {$(
    impl Element for $t {
      fn register_relations(registrar: &mut Registrar<'_, FiniteSet<$t>>) {
        registrar
          .relate::<NaturalNumbers>()
          .relate::<Integers>()
          .relate::<RealNumbers>();
      }
    }
  )*}
}

macro_rules! signed_element {
  ( $( $t: ty ),* ) => {$(
    impl Element for $t {
      fn register_relations(registrar: &mut Registrar<'_, FiniteSet<$t>>) {
        registrar
          .relate_intersection::<NaturalNumbers>()
          .relate::<Integers>()
          .relate::<RealNumbers>();
      }
    }
  )*}
}

unsigned_element!(u8, u16, u32, u64, u128, usize);
signed_element!(i8, i16, i32, i64, i128, isize);

impl Element for String {}
impl Element for &'static str {}
impl Element for char {}
impl Element for bool {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FiniteSet<T> {
  elements: Vec<T>
}

impl<T: Ord> FiniteSet<T>
{
  pub fn new<I: IntoIterator<Item=T>>(elements: I) -> FiniteSet<T> {
    let mut elements: Vec<T> = elements.into_iter().collect();
    elements.sort();
    elements.dedup();
    FiniteSet { elements }
  }

  pub fn empty() -> FiniteSet<T> {
    FiniteSet { elements: vec![] }
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn contains(&self, value: &T) -> bool {
    self.elements.binary_search(value).is_ok()
  }

  /// Elements in increasing order.
  pub fn iter(&self) -> slice::Iter<'_, T> {
    self.elements.iter()
  }
}

impl<T: Ord> FromIterator<T> for FiniteSet<T>
{
  fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> FiniteSet<T> {
    FiniteSet::new(iter)
  }
}

impl<'a, T> IntoIterator for &'a FiniteSet<T>
{
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.elements.iter()
  }
}

impl<T> Collection for FiniteSet<T>
{
  type Item = T;
}

impl<T: Ord> Contains for FiniteSet<T>
{
  fn contains(&self, value: &T) -> bool {
    FiniteSet::contains(self, value)
  }
}

impl<T: Ord> IsEmpty for FiniteSet<T>
{
  fn is_empty(&self) -> bool {
    FiniteSet::is_empty(self)
  }
}

impl<T: Ord> Empty for FiniteSet<T>
{
  fn empty() -> FiniteSet<T> {
    FiniteSet::empty()
  }
}

impl<T: Ord + Clone> Intersection for FiniteSet<T>
{
  type Output = FiniteSet<T>;

  fn intersection(&self, rhs: &FiniteSet<T>) -> FiniteSet<T> {
    let (a, b) = (&self.elements, &rhs.elements);
    let mut elements = vec![];
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
      match a[i].cmp(&b[j]) {
        Ordering::Less => i += 1,
        Ordering::Greater => j += 1,
        Ordering::Equal => {
          elements.push(a[i].clone());
          i += 1;
          j += 1;
        }
      }
    }
    FiniteSet { elements }
  }
}

impl<T: Ord + Clone> Union for FiniteSet<T>
{
  type Output = FiniteSet<T>;

  fn union(&self, rhs: &FiniteSet<T>) -> FiniteSet<T> {
    let (a, b) = (&self.elements, &rhs.elements);
    let mut elements = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
      match a[i].cmp(&b[j]) {
        Ordering::Less => { elements.push(a[i].clone()); i += 1; }
        Ordering::Greater => { elements.push(b[j].clone()); j += 1; }
        Ordering::Equal => {
          elements.push(a[i].clone());
          i += 1;
          j += 1;
        }
      }
    }
    elements.extend_from_slice(&a[i..]);
    elements.extend_from_slice(&b[j..]);
    FiniteSet { elements }
  }
}

// Only the non-negative integers are natural numbers.
impl<T: Element + PrimInt> Intersection<NaturalNumbers> for FiniteSet<T>
{
  type Output = FiniteSet<T>;

  fn intersection(&self, _: &NaturalNumbers) -> FiniteSet<T> {
    FiniteSet { elements: self.elements.iter().copied().filter(|x| *x >= T::zero()).collect() }
  }
}

impl<T: Element + PrimInt> Intersection<FiniteSet<T>> for NaturalNumbers
{
  type Output = FiniteSet<T>;

  fn intersection(&self, rhs: &FiniteSet<T>) -> FiniteSet<T> {
    rhs.intersection(self)
  }
}

impl<T: Element + PrimInt + Unsigned> Union<NaturalNumbers> for FiniteSet<T>
{
  type Output = NaturalNumbers;

  fn union(&self, _: &NaturalNumbers) -> NaturalNumbers {
    NaturalNumbers
  }
}

impl<T: Element + PrimInt + Unsigned> Union<FiniteSet<T>> for NaturalNumbers
{
  type Output = NaturalNumbers;

  fn union(&self, _: &FiniteSet<T>) -> NaturalNumbers {
    NaturalNumbers
  }
}

// Every integer belongs to `$numbers`.
macro_rules! integer_superset {
  ($numbers:ident) => {
    impl<T: Element + PrimInt> Intersection<$numbers> for FiniteSet<T> {
      type Output = FiniteSet<T>;
      fn intersection(&self, _: &$numbers) -> FiniteSet<T> { self.clone() }
    }

    impl<T: Element + PrimInt> Intersection<FiniteSet<T>> for $numbers {
      type Output = FiniteSet<T>;
      fn intersection(&self, rhs: &FiniteSet<T>) -> FiniteSet<T> { rhs.clone() }
    }

    impl<T: Element + PrimInt> Union<$numbers> for FiniteSet<T> {
      type Output = $numbers;
      fn union(&self, _: &$numbers) -> $numbers { $numbers }
    }

    impl<T: Element + PrimInt> Union<FiniteSet<T>> for $numbers {
      type Output = $numbers;
      fn union(&self, _: &FiniteSet<T>) -> $numbers { $numbers }
    }
  }
}

integer_superset!(Integers);
integer_superset!(RealNumbers);

impl<T: Element> MeasurableSetImpl for FiniteSet<T>
{
  fn register_type(registrar: &mut Registrar<'_, Self>) {
    T::register_relations(registrar);
  }

  fn counting_measure(&self) -> Count {
    Count::Finite(self.len())
  }

  fn lebesgue_measure(&self) -> f64 {
    0.0
  }
}

impl<T: Display> Display for FiniteSet<T>
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    formatter.write_str("{")?;
    for (i, x) in self.elements.iter().enumerate() {
      if i > 0 {
        formatter.write_str(", ")?;
      }
      write!(formatter, "{}", x)?;
    }
    formatter.write_str("}")
  }
}
