//! This module contains the unsigned limb vector that holds the mantissa of a
//! float. A magnitude is a number written in radix 2^64: the limbs are stored
//! least significant first.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Sub};

/// The number of bits in a single limb. The radix of the float exponent is
/// 2^LIMB_BITS, so shifting a mantissa by one digit moves it by one limb.
pub const LIMB_BITS: usize = u64::BITS as usize;

/// Operands with at least this many limbs on both sides are multiplied with
/// the Karatsuba algorithm.
const KARATSUBA_THRESHOLD: usize = 48;

/// The largest power of ten that fits in a limb, used when printing.
const DECIMAL_CHUNK: u64 = 10_000_000_000_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 19;

/// An arbitrary-size unsigned number, used as the mantissa of the float.
///
/// The number is kept in canonical form: the top limb is never zero, and the
/// value zero has no limbs at all. Equal values therefore have equal limbs.
///
/// # Examples
///
/// ```
///    use scalefloat::Magnitude;
///
///    let x = Magnitude::from_u64(1995);
///    let y = Magnitude::from_u64(90210);
///
///    let z = x * y;
///    let z = z.powi(10);
///
///    // Prints: 3564312949426686000....
///    println!("{}", z.as_decimal());
/// ```
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Magnitude {
    limbs: Vec<u64>,
}

impl Magnitude {
    /// Create a new zero number.
    pub fn zero() -> Self {
        Magnitude { limbs: Vec::new() }
    }

    /// Create a new number with the value 1.
    pub fn one() -> Self {
        Self::from_u64(1)
    }

    pub fn from_u64(val: u64) -> Self {
        Self::from_limbs(vec![val])
    }

    pub fn from_u128(val: u128) -> Self {
        Self::from_limbs(vec![val as u64, (val >> 64) as u64])
    }

    /// Construct a number from the limbs in `parts`, least significant first.
    pub fn from_parts(parts: &[u64]) -> Self {
        Self::from_limbs(parts.to_vec())
    }

    fn from_limbs(limbs: Vec<u64>) -> Self {
        let mut x = Magnitude { limbs };
        x.normalize();
        x
    }

    /// Create a pseudorandom number with `parts` limbs. The random number
    /// generator is initialized with `seed`.
    pub fn pseudorandom(parts: usize, seed: u32) -> Self {
        use crate::utils::Lfsr;
        Self::from_limbs(Lfsr::new_with_seed(seed).take(parts).collect())
    }

    /// Returns 2^`bit`.
    fn power_of_two(bit: usize) -> Self {
        let mut limbs = vec![0; bit / LIMB_BITS];
        limbs.push(1 << (bit % LIMB_BITS));
        Magnitude { limbs }
    }

    /// Drop the zero limbs at the top.
    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    /// Returns the number of significant limbs. Zero has no limbs.
    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    /// Returns the limb at index `idx`, or zero above the top limb.
    pub fn get_part(&self, idx: usize) -> u64 {
        self.limbs.get(idx).copied().unwrap_or(0)
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Returns the value if it fits in 64 bits.
    pub fn to_u64(&self) -> Option<u64> {
        match self.limbs[..] {
            [] => Some(0),
            [lo] => Some(lo),
            _ => None,
        }
    }

    /// Returns the value if it fits in 128 bits.
    pub fn to_u128(&self) -> Option<u128> {
        match self.limbs[..] {
            [] => Some(0),
            [lo] => Some(lo as u128),
            [lo, hi] => Some(lo as u128 | (hi as u128) << 64),
            _ => None,
        }
    }

    /// Returns the number of bits that are needed to write the number. Zero
    /// needs no bits.
    pub fn bit_length(&self) -> usize {
        match self.limbs.last() {
            Some(top) => self.limbs.len() * LIMB_BITS - top.leading_zeros() as usize,
            None => 0,
        }
    }

    /// Returns the number of zero limbs at the bottom of the number. Zero
    /// reports no trailing limbs.
    pub fn trailing_zero_limbs(&self) -> usize {
        self.limbs.iter().take_while(|&&l| l == 0).count()
    }

    /// Multiply the number by radix^`limbs` (insert zero limbs at the
    /// bottom).
    pub fn shift_limbs_left(&mut self, limbs: usize) {
        if limbs == 0 || self.is_zero() {
            return;
        }
        self.limbs.splice(0..0, core::iter::repeat(0).take(limbs));
    }

    /// Divide the number by radix^`limbs`, dropping the lowest limbs.
    pub fn shift_limbs_right(&mut self, limbs: usize) {
        let limbs = limbs.min(self.limbs.len());
        self.limbs.drain(0..limbs);
    }

    /// Divide the number by two, dropping the lowest bit.
    fn halve(&mut self) {
        let mut carry = 0;
        for limb in self.limbs.iter_mut().rev() {
            let low_bit = *limb << (LIMB_BITS - 1);
            *limb = (*limb >> 1) | carry;
            carry = low_bit;
        }
        self.normalize();
    }

    /// Add `rhs` to this number.
    pub fn inplace_add(&mut self, rhs: &Self) {
        add_into(&mut self.limbs, &rhs.limbs, 0);
        self.normalize();
    }

    /// Subtract `rhs` from this number, and return true if the subtraction
    /// borrowed. A borrowing subtraction leaves the difference modulo
    /// radix^n, where n is the longer of the two lengths.
    #[must_use]
    pub fn inplace_sub(&mut self, rhs: &Self) -> bool {
        if self.limbs.len() < rhs.limbs.len() {
            self.limbs.resize(rhs.limbs.len(), 0);
        }
        let borrow = sub_from(&mut self.limbs, &rhs.limbs);
        self.normalize();
        borrow
    }

    /// Subtract `rhs`, which must not be larger than this number.
    fn sub_exact(&mut self, rhs: &Self) {
        let borrow = self.inplace_sub(rhs);
        debug_assert!(!borrow, "subtracting a larger magnitude");
    }

    /// Multiply this number by `rhs`.
    pub fn inplace_mul(&mut self, rhs: &Self) {
        self.limbs = mul_limbs(&self.limbs, &rhs.limbs);
        self.normalize();
    }

    /// Divide this number by `divisor`, keep the quotient and return the
    /// remainder. The divisor must not be zero.
    pub fn inplace_div(&mut self, divisor: &Self) -> Self {
        assert!(!divisor.is_zero(), "division by zero");
        if *self < *divisor {
            return core::mem::take(self);
        }
        if let [d] = divisor.limbs[..] {
            return Self::from_u64(self.div_rem_limb(d));
        }
        let (quotient, remainder) = div_rem_limbs(&self.limbs, &divisor.limbs);
        *self = Self::from_limbs(quotient);
        Self::from_limbs(remainder)
    }

    fn div_truncate(&mut self, divisor: &Self) {
        let _remainder = self.inplace_div(divisor);
    }

    /// Divide this number by the single limb `d` and return the remainder.
    fn div_rem_limb(&mut self, d: u64) -> u64 {
        let mut rem = 0u64;
        for limb in self.limbs.iter_mut().rev() {
            let cur = (rem as u128) << 64 | *limb as u128;
            *limb = (cur / d as u128) as u64;
            rem = (cur % d as u128) as u64;
        }
        self.normalize();
        rem
    }

    /// Raise this number to the power of `exp` and return the value.
    pub fn powi(&self, exp: u64) -> Self {
        let mut result = Self::one();
        let bits = u64::BITS - exp.leading_zeros();
        for bit in (0..bits).rev() {
            result = &result * &result;
            if (exp >> bit) & 1 == 1 {
                result.inplace_mul(self);
            }
        }
        result
    }

    /// Returns the largest number whose square is not larger than this
    /// number.
    pub fn isqrt(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        // Start the Newton iteration above the root, at 2^ceil(bits/2), and
        // walk down until the sequence stops decreasing.
        let mut x = Self::power_of_two((self.bit_length() + 1) / 2);
        loop {
            let mut y = self.clone();
            y.div_truncate(&x);
            y.inplace_add(&x);
            y.halve();
            if y >= x {
                return x;
            }
            x = y;
        }
    }

    /// Returns the decimal digits of the number, most significant first.
    /// Zero is the single digit 0.
    pub(crate) fn to_decimal_digits(&self) -> Vec<u8> {
        let mut num = self.clone();
        let mut digits = Vec::new();
        while !num.is_zero() {
            let mut chunk = num.div_rem_limb(DECIMAL_CHUNK);
            // Only the top chunk drops its leading zeros.
            let count = if num.is_zero() {
                (chunk.ilog10() + 1) as usize
            } else {
                DECIMAL_CHUNK_DIGITS
            };
            for _ in 0..count {
                digits.push((chunk % 10) as u8);
                chunk /= 10;
            }
        }
        if digits.is_empty() {
            digits.push(0);
        }
        digits.reverse();
        digits
    }

    #[cfg(feature = "std")]
    pub fn dump(&self) {
        use std::println;
        println!("[{}]", self.as_binary());
    }
}

/// Adds `rhs * radix^offset` into `acc`, growing it as needed.
fn add_into(acc: &mut Vec<u64>, rhs: &[u64], offset: usize) {
    if rhs.is_empty() {
        return;
    }
    if acc.len() < offset + rhs.len() {
        acc.resize(offset + rhs.len(), 0);
    }
    let mut carry = false;
    for (a, &r) in acc[offset..].iter_mut().zip(rhs) {
        let (sum, c1) = a.overflowing_add(r);
        let (sum, c2) = sum.overflowing_add(carry as u64);
        *a = sum;
        carry = c1 || c2;
    }
    for a in acc[offset + rhs.len()..].iter_mut() {
        if !carry {
            return;
        }
        let (sum, c) = a.overflowing_add(1);
        *a = sum;
        carry = c;
    }
    if carry {
        acc.push(1);
    }
}

/// Subtracts `rhs` from `acc` in place and returns the borrow out of the top
/// limb of `acc`.
fn sub_from(acc: &mut [u64], rhs: &[u64]) -> bool {
    let mut borrow = false;
    for (i, a) in acc.iter_mut().enumerate() {
        if i >= rhs.len() && !borrow {
            break;
        }
        let r = rhs.get(i).copied().unwrap_or(0);
        let (diff, b1) = a.overflowing_sub(r);
        let (diff, b2) = diff.overflowing_sub(borrow as u64);
        *a = diff;
        borrow = b1 || b2;
    }
    borrow || rhs.iter().skip(acc.len()).any(|&r| r != 0)
}

fn mul_schoolbook(lhs: &[u64], rhs: &[u64]) -> Vec<u64> {
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u64; lhs.len() + rhs.len()];
    for (i, &x) in lhs.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &y) in rhs.iter().enumerate() {
            let t = x as u128 * y as u128 + out[i + j] as u128 + carry as u128;
            out[i + j] = t as u64;
            carry = (t >> 64) as u64;
        }
        out[i + rhs.len()] = carry;
    }
    out
}

/// Multiplies two limb sequences. The result may have zero limbs at the top.
fn mul_limbs(lhs: &[u64], rhs: &[u64]) -> Vec<u64> {
    if lhs.len().min(rhs.len()) < KARATSUBA_THRESHOLD {
        return mul_schoolbook(lhs, rhs);
    }

    // Split both operands at the same limb: x = x1 * R^half + x0.
    let half = lhs.len().max(rhs.len()) / 2;
    let (a0, a1) = lhs.split_at(half.min(lhs.len()));
    let (b0, b1) = rhs.split_at(half.min(rhs.len()));

    let low = mul_limbs(a0, b0);
    let high = mul_limbs(a1, b1);

    // (a0 + a1) * (b0 + b1) - low - high = a0 * b1 + a1 * b0.
    let mut a_sum = a0.to_vec();
    add_into(&mut a_sum, a1, 0);
    let mut b_sum = b0.to_vec();
    add_into(&mut b_sum, b1, 0);
    let mut middle = mul_limbs(&a_sum, &b_sum);
    let borrow_low = sub_from(&mut middle, &low);
    let borrow_high = sub_from(&mut middle, &high);
    debug_assert!(!borrow_low && !borrow_high);

    let mut out = low;
    add_into(&mut out, &middle, half);
    add_into(&mut out, &high, 2 * half);
    out
}

/// Shifts the limbs left by `shift` bits. The result has one more limb than
/// the input, holding the bits that were shifted out.
fn shl_bits(x: &[u64], shift: u32) -> Vec<u64> {
    let mut out = Vec::with_capacity(x.len() + 1);
    let mut carry = 0;
    for &limb in x {
        if shift == 0 {
            out.push(limb);
            continue;
        }
        out.push(limb << shift | carry);
        carry = limb >> (u64::BITS - shift);
    }
    out.push(carry);
    out
}

fn shr_bits(x: &[u64], shift: u32) -> Vec<u64> {
    if shift == 0 {
        return x.to_vec();
    }
    let mut out = vec![0; x.len()];
    for i in 0..x.len() {
        let above = x.get(i + 1).map_or(0, |&h| h << (u64::BITS - shift));
        out[i] = x[i] >> shift | above;
    }
    out
}

/// Long division of limb sequences, with a divisor of at least two limbs
/// that is not larger than the dividend. Each quotient limb is estimated
/// from the top two limbs of the remainder and the top limb of the
/// normalized divisor, and then corrected (Knuth, TAOCP vol. 2, 4.3.1 D).
/// Returns the quotient and the remainder.
fn div_rem_limbs(dividend: &[u64], divisor: &[u64]) -> (Vec<u64>, Vec<u64>) {
    let n = divisor.len();
    debug_assert!(n >= 2 && dividend.len() >= n);

    // Normalize so that the top bit of the divisor is set. This keeps every
    // estimate at most two above the true quotient limb.
    let shift = divisor[n - 1].leading_zeros();
    let mut v = shl_bits(divisor, shift);
    v.pop();
    let mut u = shl_bits(dividend, shift);

    let m = dividend.len() - n;
    let mut quotient = vec![0u64; m + 1];
    let v_top = v[n - 1] as u128;
    let v_next = v[n - 2] as u128;
    let radix = 1u128 << 64;

    for j in (0..=m).rev() {
        let top = (u[j + n] as u128) << 64 | u[j + n - 1] as u128;
        let mut qhat = top / v_top;
        let mut rhat = top % v_top;
        while qhat >= radix || qhat * v_next > (rhat << 64 | u[j + n - 2] as u128) {
            qhat -= 1;
            rhat += v_top;
            if rhat >= radix {
                break;
            }
        }

        // Subtract qhat * v from the window of u that starts at limb j.
        let mut carry = 0u128;
        let mut borrow = false;
        for i in 0..n {
            let product = qhat * v[i] as u128 + carry;
            carry = product >> 64;
            let (diff, b1) = u[i + j].overflowing_sub(product as u64);
            let (diff, b2) = diff.overflowing_sub(borrow as u64);
            u[i + j] = diff;
            borrow = b1 || b2;
        }
        let (diff, b1) = u[j + n].overflowing_sub(carry as u64);
        let (diff, b2) = diff.overflowing_sub(borrow as u64);
        u[j + n] = diff;

        // The estimate was one too large: add the divisor back.
        if b1 || b2 {
            qhat -= 1;
            let mut carry = false;
            for i in 0..n {
                let (sum, c1) = u[i + j].overflowing_add(v[i]);
                let (sum, c2) = sum.overflowing_add(carry as u64);
                u[i + j] = sum;
                carry = c1 || c2;
            }
            u[j + n] = u[j + n].wrapping_add(carry as u64);
        }
        quotient[j] = qhat as u64;
    }

    let remainder = shr_bits(&u[..n], shift);
    (quotient, remainder)
}

/// Computes `a * radix^shift + b`.
pub fn add_shifted(a: &Magnitude, b: &Magnitude, shift: usize) -> Magnitude {
    let mut res = b.clone();
    add_into(&mut res.limbs, &a.limbs, shift);
    res.normalize();
    res
}

/// Computes `a * radix^shift - b`. The caller guarantees that the scaled `a`
/// is not smaller than `b`.
pub fn sub_shifted(a: &Magnitude, b: &Magnitude, shift: usize) -> Magnitude {
    let mut res = a.clone();
    res.shift_limbs_left(shift);
    res.sub_exact(b);
    res
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical numbers with more limbs are larger.
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

macro_rules! declare_operator {
    ($trait_name:ident,
     $func_name:ident,
     $func_impl_name:ident) => {
        // Self + &Self
        impl $trait_name<&Magnitude> for Magnitude {
            type Output = Magnitude;
            fn $func_name(mut self, rhs: &Magnitude) -> Magnitude {
                self.$func_impl_name(rhs);
                self
            }
        }

        // Self + Self
        impl $trait_name for Magnitude {
            type Output = Magnitude;
            fn $func_name(self, rhs: Magnitude) -> Magnitude {
                self.$func_name(&rhs)
            }
        }

        // &Self + &Self
        impl $trait_name for &Magnitude {
            type Output = Magnitude;
            fn $func_name(self, rhs: Self) -> Magnitude {
                self.clone().$func_name(rhs)
            }
        }
    };
}

declare_operator!(Add, add, inplace_add);
declare_operator!(Sub, sub, sub_exact);
declare_operator!(Mul, mul, inplace_mul);
declare_operator!(Div, div, div_truncate);

#[test]
fn test_canonical_form() {
    let x = Magnitude::from_parts(&[5, 0, 0, 0]);
    assert_eq!(x.limb_count(), 1);
    assert_eq!(x, Magnitude::from_u64(5));
    assert_eq!(x.get_part(3), 0);

    let z = Magnitude::from_parts(&[0, 0]);
    assert!(z.is_zero());
    assert_eq!(z, Magnitude::zero());
    assert_eq!(z, Magnitude::default());
    assert_eq!(z.limb_count(), 0);
    assert_eq!(z.to_u64(), Some(0));
    assert_eq!(Magnitude::from_u128(9).limb_count(), 1);
    assert_eq!(Magnitude::from_u128(1 << 64).limb_count(), 2);
    assert_eq!(Magnitude::from_u128(1 << 64).to_u64(), None);
    assert_eq!(Magnitude::from_parts(&[1, 2, 3]).to_u128(), None);

    // Subtraction that cancels the top limb drops it.
    let mut a = Magnitude::from_parts(&[0, 1]);
    let borrow = a.inplace_sub(&Magnitude::one());
    assert!(!borrow);
    assert_eq!(a.limb_count(), 1);
    assert_eq!(a.to_u64(), Some(u64::MAX));
}

#[test]
fn test_bit_length() {
    assert_eq!(Magnitude::zero().bit_length(), 0);
    assert_eq!(Magnitude::one().bit_length(), 1);
    assert_eq!(Magnitude::from_u64(0xffffffff00000000).bit_length(), 64);
    for i in 0..200 {
        let x = Magnitude::power_of_two(i);
        assert_eq!(x.bit_length(), i + 1);
        assert_eq!(x.limb_count(), i / 64 + 1);
    }
}

#[test]
fn test_limb_shifts() {
    let mut x = Magnitude::from_u64(7);
    x.shift_limbs_left(3);
    assert_eq!(x.limb_count(), 4);
    assert_eq!(x.trailing_zero_limbs(), 3);
    assert_eq!(x.get_part(3), 7);
    x.shift_limbs_right(2);
    assert_eq!(x.limb_count(), 2);
    assert_eq!(x.get_part(1), 7);
    x.shift_limbs_right(5);
    assert!(x.is_zero());

    // Shifting zero keeps it canonical.
    let mut z = Magnitude::zero();
    z.shift_limbs_left(4);
    assert!(z.is_zero());
    assert_eq!(z.trailing_zero_limbs(), 0);
}

#[test]
fn test_halve() {
    let mut x = Magnitude::from_parts(&[3, 1]);
    x.halve();
    assert_eq!(x.to_u64(), Some(1 << 63 | 1));
    x.halve();
    assert_eq!(x.to_u64(), Some(1 << 62));
    let mut one = Magnitude::one();
    one.halve();
    assert!(one.is_zero());
}

#[test]
fn test_add_sub_carries() {
    let mut x = Magnitude::from_u64(0xffffffff00000000);
    x.inplace_add(&Magnitude::from_u64(0xffffffff));
    assert_eq!(x.to_u64(), Some(u64::MAX));
    x.inplace_add(&Magnitude::from_u64(0xf));
    assert_eq!(x.to_u128(), Some((1 << 64) + 0xe));

    // The carry ripples through a run of full limbs.
    let mut x = Magnitude::from_parts(&[u64::MAX, u64::MAX, u64::MAX]);
    x.inplace_add(&Magnitude::one());
    assert_eq!(x, Magnitude::from_parts(&[0, 0, 0, 1]));

    // And the borrow ripples back.
    let borrow = x.inplace_sub(&Magnitude::one());
    assert!(!borrow);
    assert_eq!(x, Magnitude::from_parts(&[u64::MAX, u64::MAX, u64::MAX]));

    let mut x = Magnitude::from_parts(&[1, 1, 1]);
    let borrow = x.inplace_sub(&Magnitude::from_parts(&[0, 1]));
    assert!(!borrow);
    assert_eq!(x, Magnitude::from_parts(&[1, 0, 1]));

    // A larger right-hand side borrows, from a longer or an equal length.
    let mut x = Magnitude::from_u64(3);
    assert!(x.inplace_sub(&Magnitude::from_parts(&[0, 1])));
    let mut x = Magnitude::from_u64(3);
    assert!(x.inplace_sub(&Magnitude::from_u64(4)));
    assert_eq!(x.to_u64(), Some(u64::MAX));
}

#[test]
fn test_shifted_add_sub() {
    let a = Magnitude::from_u64(50);
    let b = Magnitude::from_u64(30);

    let sum = add_shifted(&a, &b, 2);
    assert_eq!(sum, Magnitude::from_parts(&[30, 0, 50]));

    // 50 * 2^64 - 30.
    let diff = sub_shifted(&a, &b, 1);
    assert_eq!(diff.to_u128(), Some((50u128 << 64) - 30));

    assert!(sub_shifted(&a, &a, 0).is_zero());
    assert_eq!(add_shifted(&a, &b, 0).to_u64(), Some(80));
    assert_eq!(add_shifted(&Magnitude::zero(), &b, 9), b);
    assert_eq!(add_shifted(&a, &Magnitude::zero(), 1).trailing_zero_limbs(), 1);
}

#[test]
fn test_mul_small() {
    let mut x = Magnitude::from_u64(u64::MAX);
    x.inplace_mul(&x.clone());
    x.inplace_mul(&Magnitude::from_u64(25));
    assert_eq!(x, Magnitude::from_parts(&[0x19, 0xffff_ffff_ffff_ffce, 0x18]));

    let mut z = Magnitude::from_u64(77);
    z.inplace_mul(&Magnitude::zero());
    assert!(z.is_zero());
}

#[test]
fn test_karatsuba_agrees_with_schoolbook() {
    use crate::utils::Lfsr;
    let mut ll = Lfsr::new();

    let mut check = |l: usize, r: usize| {
        let a: Vec<u64> = (&mut ll).take(l).collect();
        let b: Vec<u64> = (&mut ll).take(r).collect();
        let fast = Magnitude::from_limbs(mul_limbs(&a, &b));
        let slow = Magnitude::from_limbs(mul_schoolbook(&a, &b));
        assert_eq!(fast, slow, "{} x {} limbs", l, r);
    };

    check(1, 1);
    check(48, 48);
    check(100, 1);
    check(1, 100);
    check(100, 100);
    check(300, 301);
    check(50, 250);
    for i in 48..60 {
        for j in (40..130).step_by(9) {
            check(i, j);
        }
    }
}

#[test]
fn test_div_small() {
    let mut x = Magnitude::from_u64(703);
    let rem = x.inplace_div(&Magnitude::from_u64(7));
    assert_eq!(x.to_u64(), Some(100));
    assert_eq!(rem.to_u64(), Some(3));

    // A divisor above the dividend leaves everything in the remainder.
    let mut x = Magnitude::from_u64(5);
    let rem = x.inplace_div(&Magnitude::from_parts(&[0, 1]));
    assert!(x.is_zero());
    assert_eq!(rem.to_u64(), Some(5));

    // Single limb divisor with a multi-limb dividend.
    let mut x = Magnitude::from_parts(&[7, 6, 5]);
    let rem = x.inplace_div(&Magnitude::from_u64(1 << 32));
    assert_eq!(x, Magnitude::from_parts(&[6 << 32, 5 << 32]));
    assert_eq!(rem.to_u64(), Some(7));
}

#[test]
fn test_div_identity() {
    use crate::utils::Lfsr;
    let mut ll = Lfsr::new_with_seed(99);

    // Check that n = q * d + r and r < d.
    let check = |n: Magnitude, d: Magnitude| {
        let mut q = n.clone();
        let r = q.inplace_div(&d);
        assert!(r < d);
        let mut back = &q * &d;
        back.inplace_add(&r);
        assert_eq!(back, n);
    };

    for (nl, dl) in [(2, 2), (3, 2), (8, 3), (20, 7), (40, 39), (64, 17)] {
        for _ in 0..20 {
            let n = Magnitude::from_limbs((&mut ll).take(nl).collect());
            let d = Magnitude::from_limbs((&mut ll).take(dl).collect());
            if !d.is_zero() {
                check(n, d);
            }
        }
    }

    // Patterns that stress the quotient estimate.
    let max = u64::MAX;
    check(
        Magnitude::from_parts(&[max, max, max, max]),
        Magnitude::from_parts(&[1, max]),
    );
    check(
        Magnitude::from_parts(&[0, 0, 1 << 63, max]),
        Magnitude::from_parts(&[max, 1 << 63]),
    );
    check(
        Magnitude::from_parts(&[0, max - 1, max, 0x7fff_ffff_ffff_ffff]),
        Magnitude::from_parts(&[max, max, 0x8000_0000_0000_0000]),
    );
    check(
        Magnitude::from_parts(&[3, 0, 0, 1]),
        Magnitude::from_parts(&[1, 0, 1]),
    );
}

#[test]
fn test_against_native() {
    use crate::utils::Lfsr;
    let mut ll = Lfsr::new();

    for _ in 0..20000 {
        let a = ll.get64() as u128 | (ll.get64() as u128) << 64;
        let b = ll.get64() as u128 >> (ll.get64() % 64) | (ll.get64() as u128) << 64;
        let (ma, mb) = (Magnitude::from_u128(a), Magnitude::from_u128(b));

        assert_eq!(ma.cmp(&mb), a.cmp(&b));

        let (sum, overflow) = a.overflowing_add(b);
        let msum = &ma + &mb;
        assert_eq!(msum.get_part(0) as u128 | (msum.get_part(1) as u128) << 64, sum);
        assert_eq!(msum.limb_count() > 2, overflow);

        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        let diff = &Magnitude::from_u128(hi) - &Magnitude::from_u128(lo);
        assert_eq!(diff.to_u128(), Some(hi - lo));

        let low = a as u64 as u128;
        let prod = &Magnitude::from_u128(low) * &mb;
        if let Some(native) = low.checked_mul(b) {
            assert_eq!(prod.to_u128(), Some(native));
        }

        if b != 0 {
            let mut q = ma.clone();
            let r = q.inplace_div(&mb);
            assert_eq!(q.to_u128(), Some(a / b));
            assert_eq!(r.to_u128(), Some(a % b));
        }
    }
}

#[test]
fn test_powi() {
    let lookup = [1, 5, 25, 125, 625, 3125, 15625, 78125];
    let five = Magnitude::from_u64(5);
    for (i, val) in lookup.iter().enumerate() {
        assert_eq!(five.powi(i as u64).to_u64(), Some(*val));
    }

    assert_eq!(Magnitude::from_u64(15).powi(16).to_u64(), Some(6568408355712890625));
    assert_eq!(Magnitude::from_u64(3).powi(21).to_u64(), Some(10460353203));
    assert_eq!(Magnitude::from_u64(2).powi(200), Magnitude::power_of_two(200));
    assert!(Magnitude::zero().powi(3).is_zero());
    assert_eq!(Magnitude::zero().powi(0), Magnitude::one());
}

#[test]
fn test_isqrt() {
    for i in 0..300u64 {
        let sq = Magnitude::from_u64(i * i);
        assert_eq!(sq.isqrt().to_u64(), Some(i));
        let above = Magnitude::from_u64(i * i + 2 * i);
        assert_eq!(above.isqrt().to_u64(), Some(i));
    }

    // (2^100 + 3)^2 has an exact root.
    let root = Magnitude::power_of_two(100) + Magnitude::from_u64(3);
    let square = &root * &root;
    assert_eq!(square.isqrt(), root);
    let below = &square - &Magnitude::one();
    assert_eq!(below.isqrt(), &root - &Magnitude::one());
}

#[test]
fn test_decimal_digits() {
    let digits = |x: Magnitude| -> Vec<u8> { x.to_decimal_digits() };
    assert_eq!(digits(Magnitude::zero()), [0]);
    assert_eq!(digits(Magnitude::from_u64(90210)), [9, 0, 2, 1, 0]);

    // Inner chunks keep their leading zeros.
    let x = Magnitude::from_u128(10_000_000_000_000_000_000 * 7 + 42);
    let mut expected: Vec<u8> = vec![7];
    expected.extend(core::iter::repeat(0).take(17));
    expected.extend([4, 2]);
    assert_eq!(digits(x), expected);

    let x = Magnitude::from_u128(123_456_123_456_987_654_987_654);
    assert_eq!(
        digits(x),
        [1, 2, 3, 4, 5, 6, 1, 2, 3, 4, 5, 6, 9, 8, 7, 6, 5, 4, 9, 8, 7, 6, 5, 4]
    );
}

#[test]
fn test_magnitude_operators() {
    type M = Magnitude;
    let x = M::from_u64(10);
    let y = M::from_u64(1);

    let c = ((&x - &y) * x) / M::from_u64(2);
    assert_eq!(c.to_u64(), Some(45));
    assert_eq!((&y + &y).to_u64(), Some(2));
    assert_eq!((M::from_u64(6) * &M::from_u64(7) - M::from_u64(2)).to_u64(), Some(40));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "subtracting a larger magnitude")]
fn test_sub_operator_rejects_larger_rhs() {
    let _ = &Magnitude::from_u64(3) - &Magnitude::from_parts(&[0, 1]);
}
