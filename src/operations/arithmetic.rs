use crate::error::{Result, UncertainError};
use crate::operand::Operand;
use crate::uncertain::UncertainValue;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// The four arithmetic operations on uncertain values.
///
/// Addition and subtraction add absolute uncertainties. Multiplication and
/// division add relative uncertainties. Errors never cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperation {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOperation {
    /// Applies this operation to `left` and any operand shape.
    ///
    /// # Errors
    /// - [`UncertainError::Parse`] / [`UncertainError::UnsupportedOperand`]
    ///   when the operand cannot be coerced.
    /// - [`UncertainError::DivisionByZero`] when dividing by a zero value.
    /// - [`UncertainError::Overflow`] when the result does not fit.
    /// - [`UncertainError::Underflow`] when nonzero operands give a product
    ///   or quotient too small to represent.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_decimal::{BinaryOperation, UncertainValue};
    ///
    /// let x = UncertainValue::new(10, 1, false).unwrap();
    /// let product = BinaryOperation::Mul.apply(&x, (10, 5)).unwrap();
    /// assert_eq!(product, UncertainValue::new(100, 60, false).unwrap());
    /// ```
    pub fn apply(
        self,
        left: &UncertainValue,
        right: impl Into<Operand>,
    ) -> Result<UncertainValue> {
        let right = right.into().into_uncertain()?;
        self.combine(left, &right).inspect_err(|err| {
            tracing::debug!(operation = %self, ?left, ?right, %err, "operation rejected");
        })
    }

    fn combine(self, left: &UncertainValue, right: &UncertainValue) -> Result<UncertainValue> {
        match self {
            BinaryOperation::Add => {
                let value = checked(left.value.checked_add(right.value), "addition")?;
                sum_absolute(value, left, right)
            }
            BinaryOperation::Sub => {
                let value = checked(left.value.checked_sub(right.value), "subtraction")?;
                sum_absolute(value, left, right)
            }
            BinaryOperation::Mul => {
                let value = checked(left.value.checked_mul(right.value), "multiplication")?;
                if value.is_zero() && !left.value.is_zero() && !right.value.is_zero() {
                    return Err(UncertainError::underflow("multiplication"));
                }
                sum_relative(value, left, right)
            }
            BinaryOperation::Div => {
                if right.value.is_zero() {
                    return Err(UncertainError::DivisionByZero);
                }
                let value = checked(left.value.checked_div(right.value), "division")?;
                if value.is_zero() && !left.value.is_zero() {
                    return Err(UncertainError::underflow("division"));
                }
                sum_relative(value, left, right)
            }
        }
    }

    /// The symbol used when rendering with Unicode
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperation::Add => "+",
            BinaryOperation::Sub => "-",
            BinaryOperation::Mul => "×",
            BinaryOperation::Div => "÷",
        }
    }

    /// The symbol used when rendering with plain ASCII
    #[must_use]
    pub fn ascii_symbol(self) -> &'static str {
        match self {
            BinaryOperation::Add => "+",
            BinaryOperation::Sub => "-",
            BinaryOperation::Mul => "X",
            BinaryOperation::Div => "/",
        }
    }

    /// Whether the operation propagates relative rather than absolute error
    #[must_use]
    pub fn is_multiplicative(self) -> bool {
        matches!(self, BinaryOperation::Mul | BinaryOperation::Div)
    }
}

fn checked(result: Option<Decimal>, operation: &'static str) -> Result<Decimal> {
    result.ok_or_else(|| UncertainError::overflow(operation))
}

fn sum_absolute(
    value: Decimal,
    left: &UncertainValue,
    right: &UncertainValue,
) -> Result<UncertainValue> {
    let absolute = checked(
        left.absolute.checked_add(right.absolute),
        "uncertainty propagation",
    )?;
    UncertainValue::from_absolute(value, absolute)
}

fn sum_relative(
    value: Decimal,
    left: &UncertainValue,
    right: &UncertainValue,
) -> Result<UncertainValue> {
    let relative = checked(
        left.relative.checked_add(right.relative),
        "uncertainty propagation",
    )?;
    UncertainValue::from_relative(value, relative)
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOperation {
    type Err = UncertainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "+" => Ok(BinaryOperation::Add),
            "-" => Ok(BinaryOperation::Sub),
            "*" | "x" | "X" | "×" => Ok(BinaryOperation::Mul),
            "/" | "÷" => Ok(BinaryOperation::Div),
            other => Err(UncertainError::unsupported_operand(format!(
                "operator {other:?}"
            ))),
        }
    }
}

/// Arithmetic with error propagation.
///
/// Each method accepts anything convertible into an [`Operand`]: another
/// `UncertainValue`, a number, a numeric string, `(value, uncertainty)` or
/// `(value, uncertainty, is_relative)`. Neither operand is modified.
impl UncertainValue {
    /// `self + other`, adding absolute uncertainties.
    ///
    /// # Errors
    /// See [`BinaryOperation::apply`].
    ///
    /// # Example
    /// ```rust
    /// use uncertain_decimal::UncertainValue;
    ///
    /// let x = UncertainValue::new(10, 1, false).unwrap();
    /// let y = UncertainValue::new(10, 5, false).unwrap();
    /// assert_eq!(x.add(&y).unwrap(), UncertainValue::new(20, 6, false).unwrap());
    /// assert_eq!(x.add(5).unwrap(), UncertainValue::new(15, 1, false).unwrap());
    /// ```
    pub fn add(&self, other: impl Into<Operand>) -> Result<UncertainValue> {
        BinaryOperation::Add.apply(self, other)
    }

    /// `self - other`, adding absolute uncertainties.
    ///
    /// # Errors
    /// See [`BinaryOperation::apply`].
    ///
    /// # Example
    /// ```rust
    /// use uncertain_decimal::UncertainValue;
    ///
    /// let x = UncertainValue::new(10, 1, false).unwrap();
    /// let y = UncertainValue::new(10, 5, false).unwrap();
    /// assert_eq!(x.subtract(&y).unwrap(), UncertainValue::new(0, 6, false).unwrap());
    /// ```
    pub fn subtract(&self, other: impl Into<Operand>) -> Result<UncertainValue> {
        BinaryOperation::Sub.apply(self, other)
    }

    /// `self * other`, adding relative uncertainties.
    ///
    /// # Errors
    /// See [`BinaryOperation::apply`].
    ///
    /// # Example
    /// ```rust
    /// use rust_decimal_macros::dec;
    /// use uncertain_decimal::UncertainValue;
    ///
    /// let x = UncertainValue::new(10, 1, false).unwrap();
    /// let product = x.multiply((10, "50%")).unwrap();
    /// assert_eq!(product.value(), dec!(100));
    /// assert_eq!(product.absolute_uncertainty(), dec!(60));
    /// ```
    pub fn multiply(&self, other: impl Into<Operand>) -> Result<UncertainValue> {
        BinaryOperation::Mul.apply(self, other)
    }

    /// `self / other`, adding relative uncertainties.
    ///
    /// # Errors
    /// Returns [`UncertainError::DivisionByZero`] when `other` has a zero
    /// value, otherwise see [`BinaryOperation::apply`].
    ///
    /// # Example
    /// ```rust
    /// use rust_decimal_macros::dec;
    /// use uncertain_decimal::UncertainValue;
    ///
    /// let x = UncertainValue::new(10, 1, false).unwrap();
    /// let ratio = x.divide((10, 5)).unwrap();
    /// assert_eq!(ratio.value(), dec!(1));
    /// assert_eq!(ratio.absolute_uncertainty(), dec!(0.6));
    /// ```
    pub fn divide(&self, other: impl Into<Operand>) -> Result<UncertainValue> {
        BinaryOperation::Div.apply(self, other)
    }

    /// `other + self`; addition is symmetric.
    ///
    /// # Errors
    /// See [`BinaryOperation::apply`].
    pub fn reflected_add(&self, other: impl Into<Operand>) -> Result<UncertainValue> {
        self.add(other)
    }

    /// `other - self`, computed as the additive inverse of `self - other`.
    ///
    /// # Errors
    /// See [`BinaryOperation::apply`].
    ///
    /// # Example
    /// ```rust
    /// use uncertain_decimal::UncertainValue;
    ///
    /// let x = UncertainValue::new(10, 1, false).unwrap();
    /// let diff = x.reflected_subtract(4).unwrap();
    /// assert_eq!(diff, UncertainValue::new(-6, 1, false).unwrap());
    /// ```
    pub fn reflected_subtract(&self, other: impl Into<Operand>) -> Result<UncertainValue> {
        Ok(self.subtract(other)?.additive_inverse())
    }

    /// `other * self`; multiplication is symmetric.
    ///
    /// # Errors
    /// See [`BinaryOperation::apply`].
    pub fn reflected_multiply(&self, other: impl Into<Operand>) -> Result<UncertainValue> {
        self.multiply(other)
    }

    /// `other / self`, computed as the multiplicative inverse of
    /// `self / other`.
    ///
    /// Because the quotient is formed as `self / other` first, a zero
    /// `other` fails with [`UncertainError::DivisionByZero`] just as a zero
    /// `self` does.
    ///
    /// # Errors
    /// See [`BinaryOperation::apply`].
    ///
    /// # Example
    /// ```rust
    /// use rust_decimal_macros::dec;
    /// use uncertain_decimal::UncertainValue;
    ///
    /// let x = UncertainValue::new(10, 1, false).unwrap();
    /// let inverse = x.reflected_divide(20).unwrap();
    /// assert_eq!(inverse.value(), dec!(2));
    /// assert_eq!(inverse.relative_uncertainty(), dec!(0.1));
    /// ```
    pub fn reflected_divide(&self, other: impl Into<Operand>) -> Result<UncertainValue> {
        self.divide(other)?.multiplicative_inverse()
    }
}
