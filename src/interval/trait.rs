//! The interface shared by all interval and interval class types.
//!
//! Intervals are elements of a module over the integers: they can be added, subtracted, negated,
//! and multiplied with integers. Every concrete representation (spelled, MIDI, frequency)
//! implements the same traits, so that generic code like
//! [transpose_by][crate::pitch::transpose_by] works unchanged on all of them.

use std::{fmt, ops};

use num_traits::Zero;

/// The module operations and musical direction of an interval (or interval class) type.
pub trait Interval:
    Copy
    + fmt::Debug
    + PartialEq
    + Zero
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Neg<Output = Self>
    + ops::Mul<i64, Output = Self>
{
    /// The additive identity. Same as [Zero::zero], but reads better in musical code.
    fn unison() -> Self {
        Self::zero()
    }

    /// One octave. For interval classes, this is the [unison][Interval::unison].
    fn octave() -> Self;

    /// `n` octaves.
    fn n_octaves(n: i64) -> Self {
        Self::octave() * n
    }

    /// The direction of the interval by musical convention: `1` for upward, `-1` for downward,
    /// and `0` only for the unison.
    ///
    /// Interval classes don't have a direction of their own; they report the direction of the
    /// shorter of their two representatives. Each class type documents how it breaks ties.
    fn sign(&self) -> i8;

    /// The interval if it is upward or neutral, its inverse otherwise.
    fn abs(&self) -> Self {
        if self.sign() < 0 {
            -*self
        } else {
            *self
        }
    }

    /// Repeated addition, extended to negative `n` by negation.
    fn scale(self, n: i64) -> Self {
        self * n
    }
}

/// Interval types that have a corresponding class type under octave equivalence.
pub trait ToClass: Interval {
    type Class: IntervalClass<Instance = Self>;

    /// Forget the octave. This is a module homomorphism: `(a + b).ic() == a.ic() + b.ic()`.
    fn ic(&self) -> Self::Class;
}

/// Interval classes, i.e. intervals modulo the octave.
pub trait IntervalClass: Interval {
    type Instance: ToClass<Class = Self>;

    /// The canonical representative of this class in interval space, shifted by `octaves`.
    ///
    /// Always `c.embed(n).ic() == c`.
    fn embed(&self, octaves: i64) -> Self::Instance;
}

/// Interval types that know a chromatic semitone.
pub trait Chromatic: Interval {
    fn chromsemi() -> Self;
}

/// Interval types with a notion of "step".
pub trait Stepwise: Interval {
    fn is_step(&self) -> bool;
}

/// Implements `i64 * I` for a concrete interval type, mirroring its `I * i64`.
macro_rules! impl_scalar_mul {
    ($t:ty) => {
        impl std::ops::Mul<$t> for i64 {
            type Output = $t;
            fn mul(self, x: $t) -> $t {
                x * self
            }
        }
    };
}
pub(crate) use impl_scalar_mul;
