// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Inspired by the macros from the BigUint impl. (doc.rust-lang.org/num/src/num/bigint.rs.html#235-280)
// Implements an operator trait for every combination of owned and borrowed operands by forwarding to `$method(&self, &rhs) -> $res`.
macro_rules! forward_all_binop {
  (impl<$($bn:ident: $bound:path),*> $imp:ident for $res:ty, $op:ident => $method:ident) => {
    impl<'a, 'b, $($bn: $bound),*> $imp<&'b $res> for &'a $res {
      type Output = $res;

      fn $op(self, other: &'b $res) -> $res {
        self.$method(other)
      }
    }

    impl<$($bn: $bound),*> $imp<$res> for $res {
      type Output = $res;

      fn $op(self, other: $res) -> $res {
        (&self).$method(&other)
      }
    }

    impl<'a, $($bn: $bound),*> $imp<$res> for &'a $res {
      type Output = $res;

      fn $op(self, other: $res) -> $res {
        self.$method(&other)
      }
    }

    impl<'b, $($bn: $bound),*> $imp<&'b $res> for $res {
      type Output = $res;

      fn $op(self, other: &'b $res) -> $res {
        (&self).$method(other)
      }
    }
  };
  ($imp:ident for $res:ty, $op:ident => $method:ident) => {
    forward_all_binop!(impl<> $imp for $res, $op => $method);
  };
}
