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

//! Measures over measurable sets and the uniform distribution.
//!
//! The counting measure of a set is its number of elements, it is infinite as soon as the set contains a non-degenerate interval. The Lebesgue measure is the total length of a set and is zero for every countable set.
//!
//! # Examples
//!
//! ```rust
//! use measurable::{MeasurableSet, UniformDistribution};
//! use measurable::sets::FiniteSet;
//!
//! let die = UniformDistribution::new(FiniteSet::new(1..=6));
//! let low = MeasurableSet::new(FiniteSet::new(vec![1, 2, 3]));
//! assert_eq!(die.probability(&low), 0.5);
//! ```

use crate::error::DistributionError;
use crate::measurable_set::MeasurableSet;
use std::fmt::{self, Display, Formatter};

/// Value of the counting measure. `Undefined` is the measure of sets holding a NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Count {
  Finite(usize),
  Infinite,
  Undefined
}

impl Count
{
  pub fn to_f64(self) -> f64 {
    match self {
      Count::Finite(n) => n as f64,
      Count::Infinite => f64::INFINITY,
      Count::Undefined => f64::NAN
    }
  }

  pub fn is_zero(self) -> bool {
    self == Count::Finite(0)
  }
}

impl Display for Count
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    match *self {
      Count::Finite(n) => write!(formatter, "{}", n),
      Count::Infinite => formatter.write_str("inf"),
      Count::Undefined => formatter.write_str("NaN")
    }
  }
}

/// Uniform probability over a sample space.
///
/// A sample space of Lebesgue measure zero is discrete: the probability of an event is the ratio of the counting measures. Otherwise it is continuous and the ratio of the Lebesgue measures is used. An empty sample space gives probability zero to every event.
#[derive(Clone, Debug)]
pub struct UniformDistribution {
  sample_space: MeasurableSet
}

impl UniformDistribution
{
  pub fn new<S: Into<MeasurableSet>>(sample_space: S) -> UniformDistribution {
    UniformDistribution { sample_space: sample_space.into() }
  }

  pub fn sample_space(&self) -> &MeasurableSet {
    &self.sample_space
  }

  pub fn probability(&self, event: &MeasurableSet) -> f64 {
    let space_count = self.sample_space.counting_measure();
    if space_count.is_zero() {
      return 0.0;
    }
    let outcomes = event.intersection(&self.sample_space);
    let space_length = self.sample_space.lebesgue_measure();
    if space_length == 0.0 {
      outcomes.counting_measure().to_f64() / space_count.to_f64()
    }
    else {
      outcomes.lebesgue_measure() / space_length
    }
  }

  /// Probability of `event` knowing that `given` occurred.
  ///
  /// Conditioning a continuous distribution on a non-empty event of length zero is not supported and fails with `NullConditioningEvent`.
  pub fn conditional_probability(&self, event: &MeasurableSet, given: &MeasurableSet)
    -> Result<f64, DistributionError>
  {
    let given_count = given.counting_measure();
    let non_empty = match given_count {
      Count::Finite(n) => n > 0,
      Count::Infinite => true,
      Count::Undefined => false
    };
    if non_empty && given.lebesgue_measure() == 0.0 && self.sample_space.lebesgue_measure() > 0.0 {
      return Err(DistributionError::NullConditioningEvent);
    }
    let both = event.intersection(given);
    Ok(self.probability(&both) / self.probability(given))
  }
}
