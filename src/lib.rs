//! ScaleFloat is an arbitrary-precision floating point library. A number is
//! a scaled integer: a sign, an unbounded mantissa and an exponent that counts
//! 64-bit limbs, so the value is `sign * mantissa * 2^(64 * exp)`.
//!
//! Addition, subtraction and multiplication are exact and never round.
//! Division and square root keep a configurable number of fractional limbs
//! and truncate toward zero. Every operation is total: undefined forms such
//! as `0/0` or `inf - inf` evaluate to NaN.
//!
//! ```
//!    use scalefloat::{Float, Sign};
//!
//!    let a = Float::from_u64(100);
//!    let b = Float::from_f64(0.5);
//!    let c = &a * &b + Float::one(Sign::Positive);
//!    assert_eq!(c.to_string(), "51");
//!
//!    let third = &Float::from_u64(1) / &Float::from_u64(3);
//!    assert!(third.to_string().starts_with("0.3333333333"));
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod arithmetic;
mod cast;
mod compare;
mod error;
mod float;
mod functions;
mod magnitude;
mod sign;
mod string;
mod utils;

#[cfg(feature = "python")]
mod py;

pub use self::compare::Comparison;
pub use self::error::{ConversionError, Status};
pub use self::float::{
    Category, Float, Precision, DEFAULT_PRECISION, MAX_EXPONENT_GAP,
};
pub use self::magnitude::{add_shifted, sub_shifted, Magnitude};
pub use self::sign::Sign;
