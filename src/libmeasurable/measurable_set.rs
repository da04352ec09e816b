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

//! Type-erased handle over any measurable set.
//!
//! A `MeasurableSet` can hold a value of any type implementing [`MeasurableSetImpl`](trait.MeasurableSetImpl.html). Two handles are combined by looking up the operator registered for the pair of their concrete types. When there is none, the default policies declared by the two types are tried in turn, the left one first. If no policy applies either, the intersection conservatively gives the null set while the union fails with [`DispatchError::UnknownUnion`](../error/enum.DispatchError.html).
//!
//! Handles are cheap to clone: clones share the same immutable set. They are bound to the thread that created them.
//!
//! # Examples
//!
//! ```rust
//! use measurable::{MeasurableSet, sets::*};
//!
//! let z = MeasurableSet::new(Integers);
//! let n = MeasurableSet::new(NaturalNumbers);
//! assert_eq!(&z & &n, n);
//! assert_eq!((&z | &n).to_string(), "ℤ");
//!
//! let a = MeasurableSet::new(FiniteSet::new(vec![1, 2, 3]));
//! let b = MeasurableSet::new(FiniteSet::new(vec![3, 4, 5]));
//! assert_eq!((&a & &b).to_string(), "{3}");
//! assert_eq!((&a | &b).to_string(), "{1, 2, 3, 4, 5}");
//! ```

use crate::error::DispatchError;
use crate::measures::Count;
use crate::registry::{self, Operation, Registrar};
use crate::sets::NullSet;
use gcollections::ops::{Intersection, Union};
use log::trace;
use std::any::{type_name, Any};
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{BitAnd, BitOr};
use std::rc::Rc;

/// Concrete measurable set type.
///
/// `register_type` declares, through the [`Registrar`](../registry/struct.Registrar.html), the default policies of the type and the set types it has operators with. It is called when the type is first wrapped in a `MeasurableSet`, then each time another type is registered.
///
/// The registry of the thread is borrowed while `register_type` runs. The hook must only use its `Registrar`: creating a `MeasurableSet` or calling a function of the [`registry`](../registry/index.html) module from it panics.
pub trait MeasurableSetImpl:
  Any + Clone + PartialEq + Debug + Display
  + Intersection<Self, Output=Self> + Union<Self, Output=Self>
{
  fn register_type(_registrar: &mut Registrar<'_, Self>) {}

  fn counting_measure(&self) -> Count;

  fn lebesgue_measure(&self) -> f64;

  /// Complement relative to the universe of the set, if it can be represented.
  fn absolute_complement(&self) -> Option<MeasurableSet> {
    None
  }
}

trait ErasedSet: Debug
{
  fn as_any(&self) -> &dyn Any;
  fn counting_measure(&self) -> Count;
  fn lebesgue_measure(&self) -> f64;
  fn absolute_complement(&self) -> Option<MeasurableSet>;
  fn type_name(&self) -> &'static str;
  fn dyn_eq(&self, other: &dyn Any) -> bool;
}

impl<T: MeasurableSetImpl> ErasedSet for T
{
  fn as_any(&self) -> &dyn Any {
    self
  }

  fn counting_measure(&self) -> Count {
    <T as MeasurableSetImpl>::counting_measure(self)
  }

  fn lebesgue_measure(&self) -> f64 {
    <T as MeasurableSetImpl>::lebesgue_measure(self)
  }

  fn absolute_complement(&self) -> Option<MeasurableSet> {
    <T as MeasurableSetImpl>::absolute_complement(self)
  }

  fn type_name(&self) -> &'static str {
    type_name::<T>()
  }

  fn dyn_eq(&self, other: &dyn Any) -> bool {
    other.downcast_ref::<T>().map_or(false, |other| self == other)
  }
}

#[derive(Clone)]
pub struct MeasurableSet {
  set: Rc<dyn ErasedSet>,
  type_index: usize
}

impl MeasurableSet
{
  /// Wraps `set`, registering its type on first use.
  pub fn new<T: MeasurableSetImpl>(set: T) -> MeasurableSet {
    let type_index = registry::register_if_absent::<T>();
    MeasurableSet { set: Rc::new(set), type_index }
  }

  // Results of registered operators: the type gets an index but is not registered.
  pub(crate) fn unregistered<T: MeasurableSetImpl>(set: T) -> MeasurableSet {
    let type_index = registry::allocate_index::<T>();
    MeasurableSet { set: Rc::new(set), type_index }
  }

  pub fn type_index(&self) -> usize {
    self.type_index
  }

  pub fn type_name(&self) -> &'static str {
    self.set.type_name()
  }

  pub fn is<T: Any>(&self) -> bool {
    self.set.as_any().is::<T>()
  }

  pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
    self.set.as_any().downcast_ref::<T>()
  }

  /// Never fails: sets of unrelated types without default policy have an empty intersection.
  pub fn intersection(&self, rhs: &MeasurableSet) -> MeasurableSet {
    self.dispatch(Operation::Intersection, rhs)
      .unwrap_or_else(|| {
        trace!("no intersection between `{}` and `{}`, the null set is assumed", self.type_name(), rhs.type_name());
        MeasurableSet::new(NullSet)
      })
  }

  pub fn union(&self, rhs: &MeasurableSet) -> Result<MeasurableSet, DispatchError> {
    self.dispatch(Operation::Union, rhs)
      .ok_or(DispatchError::UnknownUnion { lhs: self.type_name(), rhs: rhs.type_name() })
  }

  fn union_or_panic(&self, rhs: &MeasurableSet) -> MeasurableSet {
    match self.union(rhs) {
      Ok(set) => set,
      Err(e) => panic!("{}", e)
    }
  }

  pub fn complement(&self) -> Result<MeasurableSet, DispatchError> {
    self.set.absolute_complement()
      .ok_or_else(|| DispatchError::UnknownComplement(self.type_name()))
  }

  pub fn counting_measure(&self) -> Count {
    self.set.counting_measure()
  }

  pub fn lebesgue_measure(&self) -> f64 {
    self.set.lebesgue_measure()
  }

  /// Writes the set with the formatter registered for its type.
  pub fn print(&self, out: &mut dyn fmt::Write) -> Result<(), DispatchError> {
    let format = registry::with_registry(|registry| registry.formatter(self.type_index))
      .ok_or_else(|| DispatchError::MissingFormatter(self.type_name()))?;
    format(self.set.as_any(), out)?;
    Ok(())
  }

  fn dispatch(&self, op: Operation, rhs: &MeasurableSet) -> Option<MeasurableSet> {
    let (pairwise, this_default, other_default) =
      registry::with_registry(|registry| registry.lookup(op, self.type_index, rhs.type_index));
    if let Some(f) = pairwise {
      Some(f(self.set.as_any(), rhs.set.as_any()))
    }
    else if let Some(f) = this_default {
      Some(f(self, rhs))
    }
    else if let Some(f) = other_default {
      Some(f(rhs, self))
    }
    else {
      None
    }
  }
}

impl<T: MeasurableSetImpl> From<T> for MeasurableSet
{
  fn from(set: T) -> MeasurableSet {
    MeasurableSet::new(set)
  }
}

impl PartialEq for MeasurableSet
{
  fn eq(&self, other: &MeasurableSet) -> bool {
    if self.type_index == other.type_index {
      return self.set.dyn_eq(other.set.as_any());
    }
    let (this_default, other_default) = registry::with_registry(|registry|
      (registry.default_equality(self.type_index), registry.default_equality(other.type_index)));
    match (this_default, other_default) {
      (Some(f), _) => f(self, other),
      (None, Some(f)) => f(other, self),
      (None, None) => false
    }
  }
}

forward_all_binop!(BitAnd for MeasurableSet, bitand => intersection);
forward_all_binop!(BitOr for MeasurableSet, bitor => union_or_panic);

/// Panics if the type of the set has no registered formatter.
impl Display for MeasurableSet
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    match self.print(formatter) {
      Ok(()) => Ok(()),
      Err(DispatchError::Format(e)) => Err(e),
      Err(e) => panic!("{}", e)
    }
  }
}

impl Debug for MeasurableSet
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    formatter.debug_struct("MeasurableSet")
      .field("set", &self.set)
      .field("type_index", &self.type_index)
      .finish()
  }
}

pub fn intersection(a: &MeasurableSet, b: &MeasurableSet) -> MeasurableSet {
  a.intersection(b)
}

pub fn union(a: &MeasurableSet, b: &MeasurableSet) -> Result<MeasurableSet, DispatchError> {
  a.union(b)
}

pub fn complement(a: &MeasurableSet) -> Result<MeasurableSet, DispatchError> {
  a.complement()
}

pub fn counting_measure(a: &MeasurableSet) -> Count {
  a.counting_measure()
}

pub fn lebesgue_measure(a: &MeasurableSet) -> f64 {
  a.lebesgue_measure()
}
