#![forbid(unsafe_code)]

//! Euclidean algorithm
//!
//! Remainders follow truncated division (Rust's `%`): the remainder takes the
//! sign of the dividend. As a consequence the sign of the result depends on the
//! operands, e.g. `gcd(-12, 8) == -4` while `gcd(12, -8) == 4`. The magnitude is
//! always the mathematical GCD, except for `gcd(i32::MIN, 0)` whose magnitude
//! does not fit in an `i32`.

use serde::Serialize;

/// One `(a, b)` pair visited while reducing towards `b == 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reduction {
    pub a: i32,
    pub b: i32,
}

impl Reduction {
    /// Returns true once the second operand has reached zero
    pub fn is_terminal(&self) -> bool {
        self.b == 0
    }

    /// The pair this reduction steps to, or `None` if it is terminal
    pub fn next(&self) -> Option<Reduction> {
        if self.is_terminal() {
            return None;
        }
        Some(Reduction {
            a: self.b,
            // i32::MIN % -1 overflows; the wrapped remainder is 0
            b: self.a.wrapping_rem(self.b),
        })
    }
}

/// Computes the greatest common divisor of `a` and `b`
///
/// `gcd(a, 0) == a`, `gcd(0, b) == b` and `gcd(0, 0) == 0`.
pub fn gcd(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        (a, b) = (b, a.wrapping_rem(b));
    }
    a
}

/// Iterates over every reduction visited by [`gcd`], starting with `(a, b)` and
/// ending with the terminal `(gcd, 0)` pair
pub fn reductions(a: i32, b: i32) -> Reductions {
    Reductions {
        current: Some(Reduction { a, b }),
    }
}

/// Iterator returned by [`reductions`]
#[derive(Debug, Clone)]
pub struct Reductions {
    current: Option<Reduction>,
}

impl Iterator for Reductions {
    type Item = Reduction;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = current.next();
        Some(current)
    }
}

impl std::iter::FusedIterator for Reductions {}
