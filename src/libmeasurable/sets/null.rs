// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::measurable_set::{MeasurableSet, MeasurableSetImpl};
use crate::measures::Count;
use crate::registry::Registrar;
use crate::sets::UniversalSet;
use gcollections::ops::{Intersection, Union};
use std::fmt::{self, Display, Formatter};

/// The set without elements. It is equal to any set with a counting measure of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullSet;

impl Intersection for NullSet
{
  type Output = NullSet;

  fn intersection(&self, _rhs: &NullSet) -> NullSet {
    NullSet
  }
}

impl Union for NullSet
{
  type Output = NullSet;

  fn union(&self, _rhs: &NullSet) -> NullSet {
    NullSet
  }
}

impl MeasurableSetImpl for NullSet
{
  fn register_type(registrar: &mut Registrar<'_, Self>) {
    registrar
      .default_intersection_this()
      .default_union_other()
      .default_equality(|_, other| other.counting_measure() == Count::Finite(0));
  }

  fn counting_measure(&self) -> Count {
    Count::Finite(0)
  }

  fn lebesgue_measure(&self) -> f64 {
    0.0
  }

  fn absolute_complement(&self) -> Option<MeasurableSet> {
    Some(MeasurableSet::new(UniversalSet))
  }
}

impl Display for NullSet
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    formatter.write_str("∅")
  }
}
