/*!

Next-value functions for `Seq::with`.

A pattern computes an element from the one right before it, so applying it to a
sequence that starts with `1` produces `1, 2, 3, ...` for `Incr`, or `1, 2, 4, ...`
for `Mult`.

*/

use num_traits::One;
use std::ops::{Add, Mul, Sub};

/// Computes the next element of a sequence from the previous one.
pub trait Pattern<T> {
    fn next(&self, prev: &T) -> T;
}

impl<T, F> Pattern<T> for F where F: Fn(&T) -> T {
    #[inline(always)]
    fn next(&self, prev: &T) -> T {
        self(prev)
    }
}

/// Incremental sequence (e.g. 1, 2, 3, 4, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incr<T> {
    by: T,
}

impl<T> Incr<T> {
    pub fn by(by: T) -> Incr<T> {
        Incr { by }
    }
}

impl<T> Default for Incr<T> where T: One {
    fn default() -> Self {
        Incr { by: T::one() }
    }
}

impl<T> Pattern<T> for Incr<T> where T: Add<Output=T> + Clone {
    fn next(&self, prev: &T) -> T {
        prev.clone() + self.by.clone()
    }
}

/// Decremental sequence (e.g. 100, 99, 98, 97, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decr<T> {
    by: T,
}

impl<T> Decr<T> {
    pub fn by(by: T) -> Decr<T> {
        Decr { by }
    }
}

impl<T> Default for Decr<T> where T: One {
    fn default() -> Self {
        Decr { by: T::one() }
    }
}

impl<T> Pattern<T> for Decr<T> where T: Sub<Output=T> + Clone {
    fn next(&self, prev: &T) -> T {
        prev.clone() - self.by.clone()
    }
}

/// Geometric sequence (e.g. 1, 2, 4, 8, ...). Doubles by default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mult<T> {
    by: T,
}

impl<T> Mult<T> {
    pub fn by(by: T) -> Mult<T> {
        Mult { by }
    }
}

impl<T> Default for Mult<T> where T: One + Add<Output=T> {
    fn default() -> Self {
        Mult { by: T::one() + T::one() }
    }
}

impl<T> Pattern<T> for Mult<T> where T: Mul<Output=T> + Clone {
    fn next(&self, prev: &T) -> T {
        prev.clone() * self.by.clone()
    }
}

#[cfg(test)]
mod pattern_tests {
    use super::{Decr, Incr, Mult, Pattern};

    #[test]
    fn defaults() {
        assert_eq!(8, Incr::default().next(&7));
        assert_eq!(6, Decr::default().next(&7));
        assert_eq!(14, Mult::default().next(&7));
    }

    #[test]
    fn custom_step() {
        assert_eq!(17u8, Incr::by(10u8).next(&7));
        assert_eq!(-3i64, Decr::by(10i64).next(&7));
        assert_eq!(21, Mult::by(3).next(&7));
    }

    #[test]
    fn works_for_floats() {
        assert_eq!(1.5, Incr::by(0.5).next(&1.0));
        assert_eq!(5.0, Mult::<f64>::default().next(&2.5));
    }

    #[test]
    fn closures_are_patterns() {
        let square = |v: &u32| v * v;
        assert_eq!(49, square.next(&7));
    }
}
