use crate::{Float, Precision};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::format;
use std::string::String;
use std::string::ToString;

/// A class representing arbitrary precision floating-point numbers.
///
/// The numbers are scaled integers: sign * mantissa * 2^(64 * exp).
/// Addition, subtraction and multiplication are exact. Division and square
/// root keep a configurable number of 64-bit fractional limbs.
#[pyclass]
struct PyFloat {
    inner: Float,
}

#[pymethods]
impl PyFloat {
    /// Create a new floating-point number from a Python float. The
    /// conversion is exact.
    ///
    /// Args:
    ///     val: The f64 value
    #[new]
    fn new(val: f64) -> Self {
        PyFloat {
            inner: Float::from_f64(val),
        }
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
    fn __repr__(&self) -> String {
        format!("Float({})", self.inner)
    }
    /// Returns the mantissa of the float, as a decimal string.
    fn get_mantissa(&self) -> String {
        self.inner.get_mantissa().as_decimal()
    }
    /// Returns the exponent of the float, counted in 64-bit limbs.
    fn get_exponent(&self) -> i64 {
        self.inner.get_exp()
    }
    /// Returns the category of the float.
    fn get_category(&self) -> String {
        format!("{:?}", self.inner.get_category())
    }
    /// Returns true if the Float is negative
    fn is_negative(&self) -> bool {
        self.inner.is_negative()
    }
    /// Returns true if the Float is +-inf.
    fn is_inf(&self) -> bool {
        self.inner.is_inf()
    }
    /// Returns true if the Float is a +- NaN.
    fn is_nan(&self) -> bool {
        self.inner.is_nan()
    }
    /// Returns true if the Float is a +- zero.
    fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }
    /// Returns true if this number is normal (not Zero, Nan, Inf).
    fn is_normal(&self) -> bool {
        self.inner.is_normal()
    }

    fn __add__(&self, other: &PyFloat) -> PyFloat {
        self.add(other)
    }
    fn __sub__(&self, other: &PyFloat) -> PyFloat {
        self.sub(other)
    }
    fn __mul__(&self, other: &PyFloat) -> PyFloat {
        self.mul(other)
    }
    fn __truediv__(&self, other: &PyFloat) -> PyFloat {
        self.div(other)
    }
    fn add(&self, other: &PyFloat) -> PyFloat {
        PyFloat {
            inner: &self.inner + &other.inner,
        }
    }
    fn sub(&self, other: &PyFloat) -> PyFloat {
        PyFloat {
            inner: &self.inner - &other.inner,
        }
    }
    fn mul(&self, other: &PyFloat) -> PyFloat {
        PyFloat {
            inner: &self.inner * &other.inner,
        }
    }
    fn div(&self, other: &PyFloat) -> PyFloat {
        PyFloat {
            inner: &self.inner / &other.inner,
        }
    }
    /// Divide by `other`, keeping `limbs` fractional limbs.
    fn div_with_precision(&self, other: &PyFloat, limbs: usize) -> PyFloat {
        let p = Precision::new(limbs);
        PyFloat {
            inner: Float::div_with_precision(&self.inner, &other.inner, p),
        }
    }
    /// Returns the number raised to the power of `exp` which is an integer.
    fn powi(&self, exp: u64) -> PyFloat {
        PyFloat {
            inner: self.inner.powi(exp),
        }
    }
    /// Returns the square root of the number.
    fn sqrt(&self) -> PyFloat {
        PyFloat {
            inner: self.inner.sqrt(),
        }
    }
    /// Returns the square root of the number, keeping `limbs` fractional
    /// limbs.
    fn sqrt_with_precision(&self, limbs: usize) -> PyFloat {
        PyFloat {
            inner: self.inner.sqrt_with_precision(Precision::new(limbs)),
        }
    }
    /// Returns the absolute value of the number.
    fn abs(&self) -> PyFloat {
        PyFloat {
            inner: self.inner.abs(),
        }
    }
    /// Returns the maximum of two numbers. NaN operands are ignored.
    fn max(&self, other: &PyFloat) -> PyFloat {
        PyFloat {
            inner: self.inner.max(&other.inner),
        }
    }
    /// Returns the minimum of two numbers. NaN operands are ignored.
    fn min(&self, other: &PyFloat) -> PyFloat {
        PyFloat {
            inner: self.inner.min(&other.inner),
        }
    }
    /// Returns the integral part of the number.
    fn trunc(&self) -> PyFloat {
        PyFloat {
            inner: self.inner.trunc(),
        }
    }
    /// Convert the number to an integer. Raises ValueError if the number is
    /// not an integer that fits in 64 bits.
    fn to_int(&self) -> PyResult<i64> {
        i64::try_from(&self.inner)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }
    /// Returns the number with the sign flipped.
    fn neg(&self) -> PyFloat {
        PyFloat {
            inner: self.inner.neg(),
        }
    }
    /// Returns the number with the sign flipped.
    fn __neg__(&self) -> PyFloat {
        self.neg()
    }
    /// Returns true if the number is less than the other number.
    fn __lt__(&self, other: &PyFloat) -> bool {
        self.inner < other.inner
    }
    /// Returns true if the number is less than or equal to the other number.
    fn __le__(&self, other: &PyFloat) -> bool {
        self.inner <= other.inner
    }
    /// Returns true if the number is equal to the other number.
    fn __eq__(&self, other: &PyFloat) -> bool {
        self.inner == other.inner
    }
    /// Returns true if the number is not equal to the other number.
    fn __ne__(&self, other: &PyFloat) -> bool {
        self.inner != other.inner
    }
    /// Returns true if the number is greater than the other number.
    fn __gt__(&self, other: &PyFloat) -> bool {
        self.inner > other.inner
    }
    /// Returns true if the number is greater than or equal to the other number.
    fn __ge__(&self, other: &PyFloat) -> bool {
        self.inner >= other.inner
    }
    /// Prints the number using the internal representation.
    fn dump(&self) {
        self.inner.dump();
    }
} // impl PyFloat

/// Returns a new float with the integer value 'val'.
///
/// Args:
///     val: The integer value
#[pyfunction]
fn from_i64(val: i64) -> PyResult<PyFloat> {
    Ok(PyFloat {
        inner: Float::from_i64(val),
    })
}

/// Returns a new float with the fp64 value 'val'.
///
/// Args:
///     val: The f64 value
#[pyfunction]
fn from_fp64(val: f64) -> PyResult<PyFloat> {
    Ok(PyFloat {
        inner: Float::from_f64(val),
    })
}

#[pymodule]
fn _scalefloat(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyFloat>()?;
    m.add_function(wrap_pyfunction!(from_i64, m)?)?;
    m.add_function(wrap_pyfunction!(from_fp64, m)?)?;
    Ok(())
}
