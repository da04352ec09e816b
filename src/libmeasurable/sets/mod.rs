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

//! Concrete measurable sets.
//!
//! Each set type only knows the operators with its natural relatives (`ℕ ⊆ ℤ ⊆ ℝ`, finite sets of integers and the number sets, interval unions and `ℝ`). The null set and the universal set rely on default policies instead, so that they combine with any other set type.

pub mod finite;
pub mod null;
pub mod numbers;
pub mod universal;

pub use self::finite::{Element, FiniteSet};
pub use self::null::NullSet;
pub use self::numbers::{Integers, NaturalNumbers, RealNumbers};
pub use self::universal::UniversalSet;

use crate::measurable_set::MeasurableSet;

pub fn null_set() -> MeasurableSet {
  MeasurableSet::new(NullSet)
}

pub fn universal_set() -> MeasurableSet {
  MeasurableSet::new(UniversalSet)
}

pub fn natural_numbers() -> MeasurableSet {
  MeasurableSet::new(NaturalNumbers)
}

pub fn integers() -> MeasurableSet {
  MeasurableSet::new(Integers)
}

pub fn real_numbers() -> MeasurableSet {
  MeasurableSet::new(RealNumbers)
}

pub fn finite_set<T, I>(elements: I) -> MeasurableSet where
 T: Element,
 I: IntoIterator<Item=T>
{
  MeasurableSet::new(FiniteSet::new(elements))
}
