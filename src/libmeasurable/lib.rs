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

//! This library proposes an algebra of measurable sets. Sets of different kinds (unions of real intervals, the number sets, finite sets and the null and universal sets) are combined through a single type-erased handle, [`MeasurableSet`](measurable_set/struct.MeasurableSet.html), which finds at run time the operator registered for the concrete types of its operands.
//!
//! The interval part works on floating point boundaries with open or closed ends, and unions of intervals are kept in a canonical form so that two equal sets have the same representation. Measures (counting and Lebesgue) and a uniform distribution are built on top of the handle.
//!
//! # Examples
//!
//! ```rust
//! use measurable::{IntervalUnion, MeasurableSet};
//! use measurable::sets::*;
//!
//! let a: IntervalUnion<f64> = "[0,1)(2,3];".parse().unwrap();
//! let b: IntervalUnion<f64> = "[1,2];".parse().unwrap();
//! assert_eq!((&a | &b).to_string(), "[0,3];");
//!
//! let n = natural_numbers();
//! assert_eq!(&integers() & &n, n);
//! assert!((&MeasurableSet::new(a) & &finite_set(vec!['x'])).is::<NullSet>());
//! ```
//!
//! For more examples see the [interval union module](interval_union/index.html) and the [measurable set module](measurable_set/index.html).
//!
//! # References
//! * [Boost Interval Arithmetic Library](http://www.boost.org/doc/libs/1_57_0/libs/numeric/interval/doc/interval.html)
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)
//!

#[macro_use]
mod macros;

pub mod error;
pub mod interval;
pub mod interval_union;
pub mod measurable_set;
pub mod measures;
pub mod operator_table;
pub mod ops;
pub mod registry;
pub mod sets;

pub use gcollections;

pub use error::{DispatchError, DistributionError, ParseIntervalError};
pub use interval::Interval;
pub use interval_union::IntervalUnion;
pub use measurable_set::{complement, counting_measure, intersection, lebesgue_measure, union};
pub use measurable_set::{MeasurableSet, MeasurableSetImpl};
pub use measures::{Count, UniformDistribution};
