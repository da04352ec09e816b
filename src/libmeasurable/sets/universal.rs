// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::measurable_set::{MeasurableSet, MeasurableSetImpl};
use crate::measures::Count;
use crate::registry::Registrar;
use crate::sets::NullSet;
use gcollections::ops::{Intersection, Union};
use std::fmt::{self, Display, Formatter};

/// The set containing everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UniversalSet;

impl Intersection for UniversalSet
{
  type Output = UniversalSet;

  fn intersection(&self, _rhs: &UniversalSet) -> UniversalSet {
    UniversalSet
  }
}

impl Union for UniversalSet
{
  type Output = UniversalSet;

  fn union(&self, _rhs: &UniversalSet) -> UniversalSet {
    UniversalSet
  }
}

impl MeasurableSetImpl for UniversalSet
{
  fn register_type(registrar: &mut Registrar<'_, Self>) {
    registrar
      .default_intersection_other()
      .default_union_this();
  }

  fn counting_measure(&self) -> Count {
    Count::Infinite
  }

  fn lebesgue_measure(&self) -> f64 {
    f64::INFINITY
  }

  fn absolute_complement(&self) -> Option<MeasurableSet> {
    Some(MeasurableSet::new(NullSet))
  }
}

impl Display for UniversalSet
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    formatter.write_str("U")
  }
}
