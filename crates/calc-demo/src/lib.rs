//! Demo calculator with the guard-error semantics tfq demos are built on.
//!
//! The interesting part is the error contract: `divide` and `sqrt` refuse
//! invalid operands with fixed messages instead of returning IEEE-754
//! infinities/NaN, while the infallible operations propagate NaN and
//! Infinity as plain float arithmetic does.

/// Errors raised by the guarded operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
  #[error("Division by zero is not allowed")]
  DivisionByZero,
  #[error("Cannot calculate square root of negative number")]
  NegativeSquareRoot,
}

pub fn add(a: f64, b: f64) -> f64 {
  a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
  a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
  a * b
}

/// Divide `a` by `b`, refusing a zero divisor for every dividend
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
  if b == 0.0 {
    return Err(CalcError::DivisionByZero);
  }
  Ok(a / b)
}

pub fn power(base: f64, exponent: f64) -> f64 {
  base.powf(exponent)
}

/// Square root, refusing negative input rather than returning NaN
pub fn sqrt(x: f64) -> Result<f64, CalcError> {
  if x < 0.0 {
    return Err(CalcError::NegativeSquareRoot);
  }
  Ok(x.sqrt())
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_basic_arithmetic() {
    assert_eq!(add(2.0, 3.0), 5.0);
    assert_eq!(subtract(5.0, 3.0), 2.0);
    assert_eq!(multiply(3.0, 4.0), 12.0);
    assert_eq!(divide(10.0, 2.0), Ok(5.0));
    assert_eq!(power(2.0, 3.0), 8.0);
  }

  #[test]
  fn test_divide_by_zero_message() {
    for a in [0.0, 1.0, -5.0, 100.0, f64::INFINITY] {
      let err = divide(a, 0.0).unwrap_err();
      assert_eq!(err, CalcError::DivisionByZero);
      assert_eq!(err.to_string(), "Division by zero is not allowed");
    }
  }

  #[test]
  fn test_sqrt_guards() {
    let err = sqrt(-1.0).unwrap_err();
    assert_eq!(err, CalcError::NegativeSquareRoot);
    assert_eq!(err.to_string(), "Cannot calculate square root of negative number");

    assert_eq!(sqrt(0.0), Ok(0.0));
    assert_eq!(sqrt(9.0), Ok(3.0));
  }

  #[test]
  fn test_nan_and_infinity_propagation() {
    assert!(add(f64::NAN, 5.0).is_nan());
    assert!(multiply(f64::INFINITY, 0.0).is_nan());
    assert_eq!(add(f64::INFINITY, 1.0), f64::INFINITY);
    assert_eq!(multiply(f64::NEG_INFINITY, 2.0), f64::NEG_INFINITY);
  }

  #[test]
  fn test_negative_exponent_power() {
    assert_eq!(power(2.0, -1.0), 0.5);
  }
}
