use crate::error::{Result, UncertainError};
use crate::scalar::Scalar;
use crate::uncertainty::{UncertaintyForm, resolve_uncertainty};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A measured quantity: an exact decimal value and its uncertainty.
///
/// `UncertainValue` stores both the absolute and the relative uncertainty so
/// that addition and subtraction (which combine absolute errors) and
/// multiplication and division (which combine relative errors) never have to
/// re-derive them. Both are always non-negative and consistent with each
/// other; for a zero value the relative uncertainty is defined as zero.
///
/// Values are immutable. Every operation returns a new instance.
///
/// # Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use uncertain_decimal::UncertainValue;
///
/// let length = UncertainValue::new(10, 1, false).unwrap();
/// assert_eq!(length.absolute_uncertainty(), dec!(1));
/// assert_eq!(length.relative_uncertainty(), dec!(0.1));
///
/// let mass = UncertainValue::new(10, "50%", false).unwrap();
/// assert_eq!(mass.absolute_uncertainty(), dec!(5));
/// ```
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "SerializedValue", into = "SerializedValue")]
pub struct UncertainValue {
    pub(crate) value: Decimal,
    pub(crate) absolute: Decimal,
    pub(crate) relative: Decimal,
}

impl UncertainValue {
    /// Creates an uncertain value from a value and an uncertainty.
    ///
    /// `uncertainty` is absolute unless `is_relative` is set, in which case it
    /// is a fraction of the value. A string with a single `%` (such as
    /// `"5%"`) is always a relative percentage and overrides `is_relative`.
    /// A string without `%` is always absolute.
    ///
    /// # Errors
    /// Returns [`UncertainError::Parse`] if either input is not numeric or
    /// the uncertainty holds more than one `%`.
    ///
    /// # Example
    /// ```rust
    /// use rust_decimal_macros::dec;
    /// use uncertain_decimal::UncertainValue;
    ///
    /// let x = UncertainValue::new("9.81", 0.02, true).unwrap();
    /// assert_eq!(x.absolute_uncertainty(), dec!(0.1962));
    /// ```
    pub fn new(
        value: impl Into<Scalar>,
        uncertainty: impl Into<Scalar>,
        is_relative: bool,
    ) -> Result<Self> {
        let value = value.into().to_decimal()?;
        match resolve_uncertainty(&uncertainty.into(), is_relative)? {
            UncertaintyForm::Absolute(absolute) => Self::from_absolute(value, absolute),
            UncertaintyForm::Relative(relative) => Self::from_relative(value, relative),
        }
    }

    /// Creates a value with no uncertainty.
    #[must_use]
    pub fn exact(value: Decimal) -> Self {
        Self {
            value,
            absolute: Decimal::ZERO,
            relative: Decimal::ZERO,
        }
    }

    /// Creates an uncertain value from an absolute error bound.
    ///
    /// The sign of `absolute` is discarded.
    ///
    /// # Errors
    /// Returns [`UncertainError::Overflow`] if the relative uncertainty does
    /// not fit in a decimal.
    pub fn from_absolute(value: Decimal, absolute: Decimal) -> Result<Self> {
        let absolute = absolute.abs();
        let relative = if value.is_zero() {
            Decimal::ZERO
        } else {
            absolute
                .checked_div(value.abs())
                .ok_or_else(|| UncertainError::overflow("relative uncertainty"))?
        };

        Ok(Self {
            value,
            absolute,
            relative,
        })
    }

    /// Creates an uncertain value from a relative error fraction.
    ///
    /// The sign of `relative` is discarded. A zero value has zero uncertainty
    /// in both forms, whatever fraction is supplied.
    ///
    /// # Errors
    /// Returns [`UncertainError::Overflow`] if the absolute uncertainty does
    /// not fit in a decimal, or [`UncertainError::Underflow`] if a nonzero
    /// fraction would round to an absolute uncertainty of zero.
    pub fn from_relative(value: Decimal, relative: Decimal) -> Result<Self> {
        if value.is_zero() {
            return Ok(Self::exact(value));
        }

        let relative = relative.abs();
        let absolute = relative
            .checked_mul(value.abs())
            .ok_or_else(|| UncertainError::overflow("absolute uncertainty"))?;
        if absolute.is_zero() && !relative.is_zero() {
            return Err(UncertainError::underflow("absolute uncertainty"));
        }

        Ok(Self {
            value,
            absolute,
            relative,
        })
    }

    /// The central value
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// The absolute error bound, never negative
    #[must_use]
    pub fn absolute_uncertainty(&self) -> Decimal {
        self.absolute
    }

    /// The error bound as a fraction of the value, zero for a zero value
    #[must_use]
    pub fn relative_uncertainty(&self) -> Decimal {
        self.relative
    }

    /// Whether the value carries no uncertainty at all
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.absolute.is_zero()
    }

    /// The interval `(value - absolute, value + absolute)`.
    ///
    /// # Errors
    /// Returns [`UncertainError::Overflow`] if either bound does not fit in a
    /// decimal.
    ///
    /// # Example
    /// ```rust
    /// use rust_decimal_macros::dec;
    /// use uncertain_decimal::UncertainValue;
    ///
    /// let x = UncertainValue::new(10, "10%", false).unwrap();
    /// assert_eq!(x.bounds().unwrap(), (dec!(9), dec!(11)));
    /// ```
    pub fn bounds(&self) -> Result<(Decimal, Decimal)> {
        let low = self
            .value
            .checked_sub(self.absolute)
            .ok_or_else(|| UncertainError::overflow("lower bound"))?;
        let high = self
            .value
            .checked_add(self.absolute)
            .ok_or_else(|| UncertainError::overflow("upper bound"))?;
        Ok((low, high))
    }
}

impl From<Decimal> for UncertainValue {
    fn from(value: Decimal) -> Self {
        Self::exact(value)
    }
}

// Two values are equal when they describe the same interval; the relative
// uncertainty follows from these two fields.
impl PartialEq for UncertainValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.absolute == other.absolute
    }
}

impl std::fmt::Debug for UncertainValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "UncertainValue({}, {})",
            self.value.normalize(),
            self.absolute.normalize()
        )
    }
}

#[derive(Serialize, Deserialize)]
struct SerializedValue {
    #[serde(with = "rust_decimal::serde::str")]
    value: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    uncertainty: Decimal,
}

impl TryFrom<SerializedValue> for UncertainValue {
    type Error = UncertainError;

    fn try_from(repr: SerializedValue) -> Result<Self> {
        Self::from_absolute(repr.value, repr.uncertainty)
    }
}

impl From<UncertainValue> for SerializedValue {
    fn from(value: UncertainValue) -> Self {
        Self {
            value: value.value,
            uncertainty: value.absolute,
        }
    }
}
