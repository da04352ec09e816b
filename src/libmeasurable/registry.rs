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

//! Per-thread registry of measurable set types and of the operators between them.
//!
//! Every concrete set type receives a small index the first time it is seen, either because a value of this type is wrapped in a [`MeasurableSet`](../measurable_set/struct.MeasurableSet.html) or because an operator produced it. Indices are dense, start at zero, and are never reused during the life of the thread.
//!
//! A type is *registered* when it is wrapped for the first time. Registration runs the type's `register_type` hook, which declares default policies and relations with other set types. A relation between `T` and `U` is only stored once both types are registered: when the second one arrives, the hooks of all previously registered types are replayed with the newcomer so that a relation declared on either side is filled in. Hence pairwise operators exist for exactly the related pairs of types registered in the running thread.
//!
//! # Examples
//!
//! ```rust
//! use measurable::registry;
//! use measurable::sets::{Integers, NaturalNumbers};
//!
//! let z = registry::register::<Integers>();
//! assert_eq!(registry::register::<Integers>(), z);
//! assert!(registry::is_registered::<Integers>());
//! assert!(!registry::is_registered::<NaturalNumbers>());
//! ```

use crate::measurable_set::{MeasurableSet, MeasurableSetImpl};
use crate::operator_table::OperatorTable;
use bit_set::BitSet;
use gcollections::ops::{Intersection, Union};
use log::{debug, trace};
use std::any::{type_name, Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// Initial size of every dimension of the operator tables.
pub const INITIAL_TABLE_SIZE: usize = 8;

pub type PairwiseFn = fn(&dyn Any, &dyn Any) -> MeasurableSet;
/// Called with the set of the type that declared the policy first.
pub type DefaultFn = fn(&MeasurableSet, &MeasurableSet) -> MeasurableSet;
pub type EqualityFn = fn(&MeasurableSet, &MeasurableSet) -> bool;
pub type FormatFn = fn(&dyn Any, &mut dyn fmt::Write) -> fmt::Result;

type Hook = fn(&mut Registry, usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Operation {
  Intersection,
  Union
}

pub(crate) struct Registry {
  indices: HashMap<TypeId, usize>,
  registered: BitSet,
  hooks: Vec<Hook>,
  intersections: OperatorTable<PairwiseFn, 2>,
  unions: OperatorTable<PairwiseFn, 2>,
  default_intersections: OperatorTable<DefaultFn, 1>,
  default_unions: OperatorTable<DefaultFn, 1>,
  default_equalities: OperatorTable<EqualityFn, 1>,
  formatters: OperatorTable<FormatFn, 1>
}

thread_local! {
  static REGISTRY: RefCell<Registry> = RefCell::new(Registry::new());
}

/// Runs `f` on the registry of the current thread. `f` must not reach the registry again.
pub(crate) fn with_registry<F, R>(f: F) -> R where
  F: FnOnce(&mut Registry) -> R
{
  REGISTRY.with(|registry| f(&mut registry.borrow_mut()))
}

/// Registers `T` if it is not yet registered and returns its index.
pub fn register<T: MeasurableSetImpl>() -> usize {
  register_if_absent::<T>()
}

pub(crate) fn register_if_absent<T: MeasurableSetImpl>() -> usize {
  with_registry(|registry| registry.register::<T>())
}

/// Index of `T`, allocated without registering the type.
pub(crate) fn allocate_index<T: 'static>() -> usize {
  with_registry(|registry| registry.allocate::<T>())
}

pub fn is_registered<T: 'static>() -> bool {
  with_registry(|registry| {
    registry.index_of::<T>()
      .map_or(false, |idx| registry.registered.contains(idx))
  })
}

/// `None` if `T` was never seen in this thread.
pub fn type_index<T: 'static>() -> Option<usize> {
  with_registry(|registry| registry.index_of::<T>())
}

impl Registry
{
  fn new() -> Registry {
    Registry {
      indices: HashMap::new(),
      registered: BitSet::new(),
      hooks: vec![],
      intersections: OperatorTable::with_sizes([INITIAL_TABLE_SIZE; 2]),
      unions: OperatorTable::with_sizes([INITIAL_TABLE_SIZE; 2]),
      default_intersections: OperatorTable::with_sizes([INITIAL_TABLE_SIZE]),
      default_unions: OperatorTable::with_sizes([INITIAL_TABLE_SIZE]),
      default_equalities: OperatorTable::with_sizes([INITIAL_TABLE_SIZE]),
      formatters: OperatorTable::with_sizes([INITIAL_TABLE_SIZE])
    }
  }

  fn index_of<T: 'static>(&self) -> Option<usize> {
    self.indices.get(&TypeId::of::<T>()).copied()
  }

  fn allocate<T: 'static>(&mut self) -> usize {
    let next = self.indices.len();
    *self.indices.entry(TypeId::of::<T>()).or_insert(next)
  }

  fn register<T: MeasurableSetImpl>(&mut self) -> usize {
    let idx = self.allocate::<T>();
    if self.registered.contains(idx) {
      return idx;
    }
    T::register_type(&mut Registrar::new(self, idx, None));
    self.intersections.register([idx, idx], intersect_pair::<T, T>);
    self.unions.register([idx, idx], unite_pair::<T, T>);
    self.formatters.register([idx], format_set::<T>);
    self.registered.insert(idx);
    let hooks = self.hooks.clone();
    for hook in hooks {
      hook(self, idx);
    }
    self.hooks.push(replay_hook::<T>);
    debug!("measurable set type `{}` registered with index {}", type_name::<T>(), idx);
    idx
  }

  /// Pairwise operator of `(lhs, rhs)`, then the default policies of `lhs` and of `rhs`.
  pub(crate) fn lookup(&self, op: Operation, lhs: usize, rhs: usize)
    -> (Option<PairwiseFn>, Option<DefaultFn>, Option<DefaultFn>)
  {
    let (pairwise, defaults) = match op {
      Operation::Intersection => (&self.intersections, &self.default_intersections),
      Operation::Union => (&self.unions, &self.default_unions)
    };
    (pairwise.get([lhs, rhs]).copied(), defaults.get([lhs]).copied(), defaults.get([rhs]).copied())
  }

  pub(crate) fn default_equality(&self, idx: usize) -> Option<EqualityFn> {
    self.default_equalities.get([idx]).copied()
  }

  pub(crate) fn formatter(&self, idx: usize) -> Option<FormatFn> {
    self.formatters.get([idx]).copied()
  }
}

fn replay_hook<T: MeasurableSetImpl>(registry: &mut Registry, newcomer: usize) {
  if let Some(idx) = registry.index_of::<T>() {
    T::register_type(&mut Registrar::new(registry, idx, Some(newcomer)));
  }
}

fn intersect_pair<T, U>(lhs: &dyn Any, rhs: &dyn Any) -> MeasurableSet where
  T: Intersection<U> + 'static,
  U: 'static,
  <T as Intersection<U>>::Output: MeasurableSetImpl
{
  match (lhs.downcast_ref::<T>(), rhs.downcast_ref::<U>()) {
    (Some(lhs), Some(rhs)) => MeasurableSet::unregistered(lhs.intersection(rhs)),
    _ => unreachable!("intersection registered for `{}` and `{}` received other types", type_name::<T>(), type_name::<U>())
  }
}

fn unite_pair<T, U>(lhs: &dyn Any, rhs: &dyn Any) -> MeasurableSet where
  T: Union<U> + 'static,
  U: 'static,
  <T as Union<U>>::Output: MeasurableSetImpl
{
  match (lhs.downcast_ref::<T>(), rhs.downcast_ref::<U>()) {
    (Some(lhs), Some(rhs)) => MeasurableSet::unregistered(lhs.union(rhs)),
    _ => unreachable!("union registered for `{}` and `{}` received other types", type_name::<T>(), type_name::<U>())
  }
}

fn format_set<T: MeasurableSetImpl>(set: &dyn Any, out: &mut dyn fmt::Write) -> fmt::Result {
  match set.downcast_ref::<T>() {
    Some(set) => write!(out, "{}", set),
    None => Err(fmt::Error)
  }
}

/// Declares the default policies of `T` and its relations with other set types.
///
/// It is handed to [`MeasurableSetImpl::register_type`](../measurable_set/trait.MeasurableSetImpl.html#method.register_type) when `T` is registered, and again each time another type is registered afterwards. Default policies are only recorded the first time, and relations are only recorded with types that are already registered.
pub struct Registrar<'a, T> {
  registry: &'a mut Registry,
  index: usize,
  newcomer: Option<usize>,
  phantom: PhantomData<fn() -> T>
}

impl<'a, T: MeasurableSetImpl> Registrar<'a, T>
{
  fn new(registry: &'a mut Registry, index: usize, newcomer: Option<usize>) -> Registrar<'a, T> {
    Registrar { registry, index, newcomer, phantom: PhantomData }
  }

  fn initial(&self) -> bool {
    self.newcomer.is_none()
  }

  /// Intersecting `T` with a set of an unrelated type gives the `T` set.
  pub fn default_intersection_this(&mut self) -> &mut Self {
    if self.initial() {
      self.registry.default_intersections.register([self.index], |this, _| this.clone());
    }
    self
  }

  /// Intersecting `T` with a set of an unrelated type gives the other set.
  pub fn default_intersection_other(&mut self) -> &mut Self {
    if self.initial() {
      self.registry.default_intersections.register([self.index], |_, other| other.clone());
    }
    self
  }

  pub fn default_union_this(&mut self) -> &mut Self {
    if self.initial() {
      self.registry.default_unions.register([self.index], |this, _| this.clone());
    }
    self
  }

  pub fn default_union_other(&mut self) -> &mut Self {
    if self.initial() {
      self.registry.default_unions.register([self.index], |_, other| other.clone());
    }
    self
  }

  /// Equality with sets of other types. `f` receives the `T` set first.
  pub fn default_equality(&mut self, f: EqualityFn) -> &mut Self {
    if self.initial() {
      self.registry.default_equalities.register([self.index], f);
    }
    self
  }

  /// Intersection and union with `U`, in both directions.
  pub fn relate<U>(&mut self) -> &mut Self where
    U: MeasurableSetImpl,
    T: Intersection<U> + Union<U>,
    U: Intersection<T> + Union<T>,
    <T as Intersection<U>>::Output: MeasurableSetImpl,
    <T as Union<U>>::Output: MeasurableSetImpl,
    <U as Intersection<T>>::Output: MeasurableSetImpl,
    <U as Union<T>>::Output: MeasurableSetImpl
  {
    if let Some(other) = self.partner::<U>() {
      let this = self.index;
      self.registry.unions.register([this, other], unite_pair::<T, U>);
      self.registry.unions.register([other, this], unite_pair::<U, T>);
      self.relate_intersection_at::<U>(other);
    }
    self
  }

  /// Intersection with `U` in both directions, for pairs whose union is not representable.
  pub fn relate_intersection<U>(&mut self) -> &mut Self where
    U: MeasurableSetImpl,
    T: Intersection<U>,
    U: Intersection<T>,
    <T as Intersection<U>>::Output: MeasurableSetImpl,
    <U as Intersection<T>>::Output: MeasurableSetImpl
  {
    if let Some(other) = self.partner::<U>() {
      self.relate_intersection_at::<U>(other);
    }
    self
  }

  fn relate_intersection_at<U>(&mut self, other: usize) where
    U: MeasurableSetImpl,
    T: Intersection<U>,
    U: Intersection<T>,
    <T as Intersection<U>>::Output: MeasurableSetImpl,
    <U as Intersection<T>>::Output: MeasurableSetImpl
  {
    let this = self.index;
    self.registry.intersections.register([this, other], intersect_pair::<T, U>);
    self.registry.intersections.register([other, this], intersect_pair::<U, T>);
    trace!("`{}` related to `{}`", type_name::<T>(), type_name::<U>());
  }

  // Index of `U` when the relation with `U` must be recorded now.
  fn partner<U: 'static>(&self) -> Option<usize> {
    let other = self.registry.index_of::<U>()?;
    let ready = match self.newcomer {
      None => self.registry.registered.contains(other),
      Some(newcomer) => newcomer == other
    };
    if ready { Some(other) } else { None }
  }
}
