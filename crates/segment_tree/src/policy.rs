//! Aggregation policies (identity element + associative combine).
//!
//! A policy is a stateless type-level description of what "aggregate" means
//! for a [`SegmentTree`](crate::SegmentTree). Policies are never instantiated;
//! the tree calls their associated functions directly.

use std::fmt;
use std::marker::PhantomData;
use std::ops::BitXor;

/// A monoid over `Value`.
///
/// Implementations must guarantee, exactly and not just approximately:
///
/// - `combine(a, combine(b, c)) == combine(combine(a, b), c)`
/// - `combine(x, identity()) == combine(identity(), x) == x`
///
/// Neither law is checked at runtime. A policy that breaks them yields wrong
/// aggregates, not a panic.
pub trait AggregatePolicy {
    type Value: Clone;

    fn identity() -> Self::Value;

    fn combine(a: &Self::Value, b: &Self::Value) -> Self::Value;
}

/// Primitive integers usable with the stock policies.
pub trait PrimInt: Copy + Ord + BitXor<Output = Self> + fmt::Debug {
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;

    fn wrapping_add(self, rhs: Self) -> Self;
}

macro_rules! impl_prim_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl PrimInt for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const ZERO: Self = 0;

                #[inline(always)]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }
            }
        )*
    };
}

impl_prim_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Range minimum. Identity is `T::MAX`.
pub struct Min<T>(PhantomData<fn() -> T>);

impl<T: PrimInt> AggregatePolicy for Min<T> {
    type Value = T;

    #[inline(always)]
    fn identity() -> T {
        T::MAX
    }

    #[inline(always)]
    fn combine(a: &T, b: &T) -> T {
        *a.min(b)
    }
}

/// Range maximum. Identity is `T::MIN`.
pub struct Max<T>(PhantomData<fn() -> T>);

impl<T: PrimInt> AggregatePolicy for Max<T> {
    type Value = T;

    #[inline(always)]
    fn identity() -> T {
        T::MIN
    }

    #[inline(always)]
    fn combine(a: &T, b: &T) -> T {
        *a.max(b)
    }
}

/// Range sum with two's-complement wrap-around.
pub struct Sum<T>(PhantomData<fn() -> T>);

impl<T: PrimInt> AggregatePolicy for Sum<T> {
    type Value = T;

    #[inline(always)]
    fn identity() -> T {
        T::ZERO
    }

    #[inline(always)]
    fn combine(a: &T, b: &T) -> T {
        a.wrapping_add(*b)
    }
}

pub struct Xor<T>(PhantomData<fn() -> T>);

impl<T: PrimInt> AggregatePolicy for Xor<T> {
    type Value = T;

    #[inline(always)]
    fn identity() -> T {
        T::ZERO
    }

    #[inline(always)]
    fn combine(a: &T, b: &T) -> T {
        *a ^ *b
    }
}

/// Range gcd over `u64`. `gcd(0, x) == x`, so zero is the identity.
#[derive(Clone, Copy, Debug)]
pub enum Gcd {}

impl AggregatePolicy for Gcd {
    type Value = u64;

    #[inline(always)]
    fn identity() -> u64 {
        0
    }

    #[inline(always)]
    fn combine(a: &u64, b: &u64) -> u64 {
        gcd_binary(*a, *b)
    }
}

fn gcd_binary(mut a: u64, mut b: u64) -> u64 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();

    loop {
        b >>= b.trailing_zeros();
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            return a << shift;
        }
    }
}
