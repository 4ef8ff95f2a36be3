//! This module contains the implementation of string conversion.

extern crate alloc;

use super::float::{Category, Float};
use super::magnitude::{Magnitude, LIMB_BITS};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Display;

impl Float {
    /// Convert the number into a large integer, and the number of decimal
    /// digits that follow the decimal point.
    fn convert_to_integer(&self) -> (Magnitude, usize) {
        let mut mantissa = self.get_mantissa().clone();
        let exp = self.get_exp();

        if exp >= 0 {
            // The number is already an integer, just align it.
            mantissa.shift_limbs_left(exp as usize);
            return (mantissa, 0);
        }

        // The number is not yet an integer, we need to convert it using
        // the method:
        // mmmmm * 5^(e) * 10 ^(-e) == mmmmm * 2 ^ (-e);
        // where e is the number of fractional bits. This is exact.
        let bits = exp.unsigned_abs() as usize * LIMB_BITS;
        let e5 = Magnitude::from_u64(5).powi(bits as u64);
        mantissa.inplace_mul(&e5);
        (mantissa, bits)
    }

    fn convert_normal_to_string(&self) -> String {
        let (integer, frac_digits) = self.convert_to_integer();

        let mut buff: Vec<char> = integer
            .to_decimal_digits()
            .into_iter()
            .map(|d| char::from(b'0' + d))
            .collect();

        if frac_digits == 0 {
            return String::from_iter(buff);
        }

        // Add the leading zeros, and make room to place the point.
        while buff.len() <= frac_digits {
            buff.insert(0, '0');
        }
        buff.insert(buff.len() - frac_digits, '.');
        while buff.last() == Some(&'0') {
            buff.pop();
        }
        if buff.last() == Some(&'.') {
            buff.pop();
        }
        String::from_iter(buff)
    }

    /// Convert the number to an exact decimal string. Numbers with a
    /// fractional part print all of their digits, so the output of values
    /// with very negative exponents can be long.
    fn convert_to_string(&self) -> String {
        let body = match self.get_category() {
            Category::NaN => return String::from("NaN"),
            Category::Infinity => String::from("Inf"),
            Category::Zero => String::from("0"),
            Category::Normal => self.convert_normal_to_string(),
        };

        let mut result = String::new();
        if self.is_negative() {
            result.push('-');
        }
        result.push_str(&body);
        result
    }
}

impl Display for Float {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.convert_to_string())
    }
}

impl Display for Magnitude {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_decimal())
    }
}

impl Magnitude {
    /// Prints the number as a decimal number.
    pub fn as_decimal(&self) -> String {
        let digits = self.to_decimal_digits();
        digits.into_iter().map(|d| char::from(b'0' + d)).collect()
    }

    /// Prints the number as a sequence of bits.
    pub fn as_binary(&self) -> String {
        let mut sb = String::new();

        if self.is_zero() {
            return String::from("0");
        }
        let top_non_zero = self.limb_count() - 1;

        for i in 0..=top_non_zero {
            let mut part = self.get_part(i);
            // Don't print leading zeros for the first word.
            if i == top_non_zero {
                while part > 0 {
                    let last = if part & 0x1 == 1 { '1' } else { '0' };
                    sb.insert(0, last);
                    part /= 2;
                }
                continue;
            }

            // Print leading zeros for the rest of the words.
            for _ in 0..64 {
                let last = if part & 0x1 == 1 { '1' } else { '0' };
                sb.insert(0, last);
                part /= 2;
            }
        }
        sb
    }
}

#[cfg(test)]
use alloc::string::ToString;

#[test]
fn test_convert_to_string() {
    use crate::Sign;

    assert_eq!(Float::nan(Sign::Negative).to_string(), "NaN");
    assert_eq!(Float::inf(Sign::Positive).to_string(), "Inf");
    assert_eq!(Float::inf(Sign::Negative).to_string(), "-Inf");
    assert_eq!(Float::zero(Sign::Positive).to_string(), "0");
    assert_eq!(Float::zero(Sign::Negative).to_string(), "-0");

    assert_eq!(Float::from_u64(90210).to_string(), "90210");
    assert_eq!(Float::from_i64(-300).to_string(), "-300");
    assert_eq!(Float::from_f64(0.5).to_string(), "0.5");
    assert_eq!(Float::from_f64(-1.5).to_string(), "-1.5");
    assert_eq!(Float::from_f64(0.125).to_string(), "0.125");
    assert_eq!(Float::from_f64(1234.0625).to_string(), "1234.0625");

    // One limb above the point.
    let r = Float::new(Sign::Positive, 1, Magnitude::one());
    assert_eq!(r.to_string(), "18446744073709551616");

    // One limb below the point: 2^-64.
    let r = Float::new(Sign::Positive, -1, Magnitude::one());
    assert_eq!(r.to_string(), "0.0000000000000000000542101086242752217003726400434970855712890625");
}

#[test]
fn test_print_division() {
    // 1/3 with the default precision, truncated.
    let third = Float::div_values(&Float::from_u64(1), &Float::from_u64(3));
    assert!(third.to_string().starts_with("0.33333333333333333333333333333333333333"));

    // Pentium FDIV check, 4195835 / 3145727.
    let a = Float::from_u64(4_195_835);
    let b = Float::from_u64(3_145_727);
    let res = Float::div_values(&a, &b);
    assert!(res.to_string().starts_with("1.333820449136241002"));

    let neg = Float::div_values(&a.neg(), &b);
    assert!(neg.to_string().starts_with("-1.333820449136241002"));
}

#[test]
fn test_print_sqrt() {
    let two = Float::from_u64(2);
    let root = two.sqrt();
    assert!(root.to_string().starts_with("1.4142135623730950488016887242096980785"));
}

#[test]
fn test_magnitude_to_string() {
    let val = 0b101110011010011111010101011110000000101011110101;
    let bi = Magnitude::from_parts(&[val, val]);
    assert_eq!(
        bi.as_binary(),
        "101110011010011111010101011110000000101011110101\
         0000000000000000\
         101110011010011111010101011110000000101011110101"
    );
    assert_eq!(Magnitude::zero().as_binary(), "0");
    assert_eq!(Magnitude::from_u64(5).as_binary(), "101");
}

#[test]
fn test_magnitude_to_decimal() {
    let mut num = Magnitude::one();
    for i in 1..41 {
        let term = Magnitude::from_u64(i);
        num.inplace_mul(&term);
    }

    assert_eq!(
        num.as_decimal(),
        "815915283247897734345611269596115894272000000000"
    );
    assert_eq!(num.to_string(), num.as_decimal());
    assert_eq!(Magnitude::zero().as_decimal(), "0");
}
