// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Dense table of functions indexed by a tuple of type indices.
//!
//! Entries are stored row-major: the last index varies fastest. The table grows on registration by doubling every dimension too small for the new entry. Growing only the first dimension appends storage without moving anything; any other growth moves every entry to its new offset.

use log::debug;
use std::mem;

#[derive(Debug, Clone)]
pub struct OperatorTable<F, const N: usize> {
  sizes: [usize; N],
  functions: Vec<Option<F>>
}

impl<F, const N: usize> OperatorTable<F, N>
{
  pub fn new() -> OperatorTable<F, N> {
    OperatorTable::with_sizes([0; N])
  }

  pub fn with_sizes(sizes: [usize; N]) -> OperatorTable<F, N> {
    OperatorTable {
      sizes,
      functions: empty_storage(sizes.iter().product())
    }
  }

  pub fn sizes(&self) -> [usize; N] {
    self.sizes
  }

  /// `None` for an unregistered entry, including out of range indices.
  pub fn get(&self, indices: [usize; N]) -> Option<&F> {
    let in_range = indices.iter().zip(self.sizes.iter()).all(|(i, s)| i < s);
    if in_range {
      self.functions.get(offset(&self.sizes, &indices)).and_then(Option::as_ref)
    }
    else {
      None
    }
  }

  /// Stores `f` at `indices`, replacing any previous entry.
  pub fn register(&mut self, indices: [usize; N], f: F) {
    let mut sizes = self.sizes;
    for (size, &idx) in sizes.iter_mut().zip(indices.iter()) {
      while *size <= idx {
        *size = (*size * 2).max(1);
      }
    }
    if sizes != self.sizes {
      debug!("operator table grows from {:?} to {:?}", self.sizes, sizes);
      if sizes[1..] == self.sizes[1..] {
        self.functions.resize_with(sizes.iter().product(), || None);
      }
      else {
        self.reflow(sizes);
      }
      self.sizes = sizes;
    }
    let at = offset(&self.sizes, &indices);
    self.functions[at] = Some(f);
  }

  fn reflow(&mut self, sizes: [usize; N]) {
    let mut functions = empty_storage(sizes.iter().product());
    let old = mem::take(&mut self.functions);
    for (at, f) in old.into_iter().enumerate() {
      if let Some(f) = f {
        let indices = unflatten(&self.sizes, at);
        functions[offset(&sizes, &indices)] = Some(f);
      }
    }
    self.functions = functions;
  }
}

impl<F, const N: usize> Default for OperatorTable<F, N>
{
  fn default() -> OperatorTable<F, N> {
    OperatorTable::new()
  }
}

fn empty_storage<F>(len: usize) -> Vec<Option<F>> {
  (0..len).map(|_| None).collect()
}

fn offset<const N: usize>(sizes: &[usize; N], indices: &[usize; N]) -> usize {
  indices.iter()
    .zip(sizes.iter())
    .fold(0, |acc, (idx, size)| acc * size + idx)
}

// precondition: every size is non-zero.
fn unflatten<const N: usize>(sizes: &[usize; N], mut at: usize) -> [usize; N] {
  let mut indices = [0; N];
  for d in (0..N).rev() {
    indices[d] = at % sizes[d];
    at /= sizes[d];
  }
  indices
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::seq::SliceRandom;
  use rand::SeedableRng;

  #[test]
  fn offsets_are_row_major() {
    let sizes = [4, 3, 2];
    assert_eq!(offset(&sizes, &[0, 0, 1]), 1);
    assert_eq!(offset(&sizes, &[0, 1, 0]), 2);
    assert_eq!(offset(&sizes, &[1, 0, 0]), 6);
    assert_eq!(offset(&sizes, &[3, 2, 1]), 23);
    for at in 0..24 {
      assert_eq!(offset(&sizes, &unflatten(&sizes, at)), at);
    }
  }

  #[test]
  fn lookup_outside_the_table() {
    let mut table: OperatorTable<&str, 2> = OperatorTable::with_sizes([2, 2]);
    table.register([1, 1], "a");
    assert_eq!(table.get([1, 1]), Some(&"a"));
    assert_eq!(table.get([0, 1]), None);
    assert_eq!(table.get([2, 0]), None);
    assert_eq!(table.get([0, 7]), None);
    assert_eq!(OperatorTable::<u8, 1>::new().get([0]), None);
  }

  #[test]
  fn doubling_keeps_entries() {
    let mut table = OperatorTable::with_sizes([8, 8]);
    for i in 0..8 {
      for j in 0..8 {
        table.register([i, j], i * 100 + j);
      }
    }
    table.register([10, 3], 1003);
    assert_eq!(table.sizes(), [16, 8]);
    table.register([2, 12], 212);
    assert_eq!(table.sizes(), [16, 16]);
    for i in 0..8 {
      for j in 0..8 {
        assert_eq!(table.get([i, j]), Some(&(i * 100 + j)), "entry ({}, {}) was lost", i, j);
      }
    }
    assert_eq!(table.get([10, 3]), Some(&1003));
    assert_eq!(table.get([2, 12]), Some(&212));
    assert_eq!(table.get([12, 2]), None);
    table.register([3, 3], 0);
    assert_eq!(table.get([3, 3]), Some(&0));
  }

  fn shuffled_registration<const N: usize>(side: usize, seed: u64) {
    let mut all: Vec<[usize; N]> = vec![[0; N]];
    for d in 0..N {
      all = all.into_iter()
        .flat_map(|indices| (0..side).map(move |k| { let mut x = indices; x[d] = k; x }))
        .collect();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    all.shuffle(&mut rng);

    let mut table = OperatorTable::new();
    for (rank, indices) in all.iter().enumerate() {
      table.register(*indices, rank);
      assert_eq!(table.get(*indices), Some(&rank));
    }
    for (rank, indices) in all.iter().enumerate() {
      assert_eq!(table.get(*indices), Some(&rank), "entry {:?} was lost", indices);
    }
    for size in &table.sizes() {
      assert!(size.is_power_of_two() && *size >= side);
    }
  }

  #[test]
  fn random_registration_order() {
    for seed in 0..5 {
      shuffled_registration::<1>(37, seed);
      shuffled_registration::<2>(11, seed);
      shuffled_registration::<3>(6, seed);
    }
  }
}
