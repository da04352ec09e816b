// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The number sets `ℕ ⊆ ℤ ⊆ ℝ`.

use crate::measurable_set::MeasurableSetImpl;
use crate::measures::Count;
use crate::registry::Registrar;
use gcollections::ops::{Intersection, Union};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NaturalNumbers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Integers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RealNumbers;

macro_rules! number_set {
  ($set:ident, $symbol:expr) => {
    impl Intersection for $set {
      type Output = $set;
      fn intersection(&self, _: &$set) -> $set { $set }
    }

    impl Union for $set {
      type Output = $set;
      fn union(&self, _: &$set) -> $set { $set }
    }

    impl Display for $set {
      fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str($symbol)
      }
    }
  }
}

// `$small` is a subset of `$large`.
macro_rules! number_inclusion {
  ($small:ident, $large:ident) => {
    impl Intersection<$large> for $small {
      type Output = $small;
      fn intersection(&self, _: &$large) -> $small { $small }
    }

    impl Intersection<$small> for $large {
      type Output = $small;
      fn intersection(&self, _: &$small) -> $small { $small }
    }

    impl Union<$large> for $small {
      type Output = $large;
      fn union(&self, _: &$large) -> $large { $large }
    }

    impl Union<$small> for $large {
      type Output = $large;
      fn union(&self, _: &$small) -> $large { $large }
    }
  }
}

number_set!(NaturalNumbers, "ℕ");
number_set!(Integers, "ℤ");
number_set!(RealNumbers, "ℝ");

number_inclusion!(NaturalNumbers, Integers);
number_inclusion!(NaturalNumbers, RealNumbers);
number_inclusion!(Integers, RealNumbers);

impl MeasurableSetImpl for NaturalNumbers
{
  fn counting_measure(&self) -> Count {
    Count::Infinite
  }

  fn lebesgue_measure(&self) -> f64 {
    0.0
  }
}

impl MeasurableSetImpl for Integers
{
  fn register_type(registrar: &mut Registrar<'_, Self>) {
    registrar.relate::<NaturalNumbers>();
  }

  fn counting_measure(&self) -> Count {
    Count::Infinite
  }

  fn lebesgue_measure(&self) -> f64 {
    0.0
  }
}

impl MeasurableSetImpl for RealNumbers
{
  fn register_type(registrar: &mut Registrar<'_, Self>) {
    registrar
      .relate::<NaturalNumbers>()
      .relate::<Integers>();
  }

  fn counting_measure(&self) -> Count {
    Count::Infinite
  }

  fn lebesgue_measure(&self) -> f64 {
    f64::INFINITY
  }
}
