/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Range and membership checks over the integer fields of a document
//!
//! Fields come in several widths, [`CoerceInt`] brings them to a common `i64`
//! so a single check works for all of them.

/// Conversion of a field value to a comparable integer.
///
/// `i64`, `i32`, `i16`, `u8` and `isize` convert directly.
/// The other primitive numbers implement the trait but always coerce to `0`,
/// callers of the checks below only hand in the supported widths.
pub trait CoerceInt {
    fn coerce_int(&self) -> i64;
}

macro_rules! coerce_direct {
    ($($int_type:ty),*) => {
        $(
            impl CoerceInt for $int_type {
                #[inline(always)]
                fn coerce_int(&self) -> i64 {
                    *self as i64
                }
            }
        )*
    };
}

macro_rules! coerce_zero {
    ($($int_type:ty),*) => {
        $(
            impl CoerceInt for $int_type {
                #[inline(always)]
                fn coerce_int(&self) -> i64 {
                    0
                }
            }
        )*
    };
}

coerce_direct!(i64, i32, i16, u8, isize);
coerce_zero!(i8, u16, u32, u64, usize, i128, u128, f32, f64, bool);

impl<T: CoerceInt + ?Sized> CoerceInt for &T {
    #[inline(always)]
    fn coerce_int(&self) -> i64 {
        (**self).coerce_int()
    }
}

/// Return true if `min <= value <= max` once `value` is coerced
pub fn in_range<T: CoerceInt>(value: T, min: i64, max: i64) -> bool {
    (min..=max).contains(&value.coerce_int())
}

/// Return true if the coerced `value` equals one of `candidates`
pub fn value_is<T: CoerceInt>(value: T, candidates: &[i64]) -> bool {
    let value = value.coerce_int();
    candidates.contains(&value)
}

/// Return true if `value` equals one of `candidates`
pub fn string_value_is(value: &str, candidates: &[&str]) -> bool {
    candidates.contains(&value)
}
