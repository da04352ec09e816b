// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval and bound specific operations.

use num_traits::Float;
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::str::FromStr;

pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

pub trait Whole
{
  /// With `extended` set, both infinities belong to the result.
  fn whole(extended: bool) -> Self;
}

/// Numeric type of an interval boundary.
///
/// It must represent both infinities and NaN, and its `Display` output must be accepted by its `FromStr` implementation so that printed intervals can be read back.
pub trait Boundary : Float + Debug + Display + FromStr + 'static
{}

impl<B> Boundary for B where
 B: Float + Debug + Display + FromStr + 'static
{}

/// Orders two lower endpoints. At equal values the closed endpoint comes first since it covers more.
pub fn cmp_lower<B: Boundary>(a: B, a_closed: bool, b: B, b_closed: bool) -> Ordering {
  a.partial_cmp(&b)
    .unwrap_or(Ordering::Equal)
    .then_with(|| b_closed.cmp(&a_closed))
}

/// Orders two upper endpoints. At equal values the open endpoint comes first.
pub fn cmp_upper<B: Boundary>(a: B, a_closed: bool, b: B, b_closed: bool) -> Ordering {
  a.partial_cmp(&b)
    .unwrap_or(Ordering::Equal)
    .then_with(|| a_closed.cmp(&b_closed))
}
