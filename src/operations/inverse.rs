use crate::error::{Result, UncertainError};
use crate::uncertain::UncertainValue;
use rust_decimal::Decimal;
use std::ops::Neg;

impl UncertainValue {
    /// Returns `-self` with the same absolute uncertainty.
    ///
    /// A zero value stays zero rather than becoming a negative zero.
    ///
    /// # Example
    /// ```rust
    /// use rust_decimal_macros::dec;
    /// use uncertain_decimal::UncertainValue;
    ///
    /// let x = UncertainValue::new(10, 1, false).unwrap();
    /// assert_eq!(x.additive_inverse().value(), dec!(-10));
    /// assert_eq!(x.additive_inverse().absolute_uncertainty(), dec!(1));
    /// ```
    #[must_use]
    pub fn additive_inverse(&self) -> UncertainValue {
        if self.value.is_zero() {
            return *self;
        }

        UncertainValue {
            value: -self.value,
            ..*self
        }
    }

    /// Returns `1 / self` with the same relative uncertainty.
    ///
    /// # Errors
    /// Returns [`UncertainError::DivisionByZero`] when the value is zero, or
    /// [`UncertainError::Underflow`] when `1 / self` is too small to represent.
    ///
    /// # Example
    /// ```rust
    /// use rust_decimal_macros::dec;
    /// use uncertain_decimal::UncertainValue;
    ///
    /// let x = UncertainValue::new(4, "10%", false).unwrap();
    /// let inverse = x.multiplicative_inverse().unwrap();
    /// assert_eq!(inverse.value(), dec!(0.25));
    /// assert_eq!(inverse.relative_uncertainty(), dec!(0.1));
    /// ```
    pub fn multiplicative_inverse(&self) -> Result<UncertainValue> {
        if self.value.is_zero() {
            tracing::debug!(value = ?self, "multiplicative inverse of zero");
            return Err(UncertainError::DivisionByZero);
        }

        let value = Decimal::ONE
            .checked_div(self.value)
            .ok_or_else(|| UncertainError::overflow("inversion"))?;
        if value.is_zero() {
            return Err(UncertainError::underflow("inversion"));
        }
        UncertainValue::from_relative(value, self.relative)
    }
}

impl Neg for UncertainValue {
    type Output = UncertainValue;

    fn neg(self) -> Self::Output {
        self.additive_inverse()
    }
}

impl Neg for &UncertainValue {
    type Output = UncertainValue;

    fn neg(self) -> Self::Output {
        self.additive_inverse()
    }
}
