use crate::error::{Result, UncertainError};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A raw numeric input: an exact decimal, a float, or text still to be parsed.
///
/// `Scalar` is what every constructor and operand accepts in place of a
/// number. Parsing is deferred until the scalar is used so that text such as
/// `"50%"` can be inspected before it is interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// An exact decimal number
    Decimal(Decimal),
    /// A binary floating point number, converted on use
    Float(f64),
    /// A numeric string, possibly carrying a `%` sign
    Text(String),
}

impl Scalar {
    /// Resolve this scalar to an exact decimal.
    ///
    /// Text is trimmed and accepted in plain (`"12.5"`) or scientific
    /// (`"1.25e1"`) notation.
    ///
    /// # Errors
    /// Returns [`UncertainError::Parse`] for non-numeric text, a non-finite
    /// float, or a number outside the decimal range. A nonzero number too
    /// small to represent is out of range rather than zero.
    ///
    /// # Example
    /// ```rust
    /// use rust_decimal_macros::dec;
    /// use uncertain_decimal::Scalar;
    ///
    /// assert_eq!(Scalar::from("2.50").to_decimal().unwrap(), dec!(2.5));
    /// assert_eq!(Scalar::from("1e3").to_decimal().unwrap(), dec!(1000));
    /// assert!(Scalar::from("ten").to_decimal().is_err());
    /// ```
    pub fn to_decimal(&self) -> Result<Decimal> {
        match self {
            Scalar::Decimal(value) => Ok(*value),
            Scalar::Float(value) => float_to_decimal(*value),
            Scalar::Text(text) => parse_decimal_text(text),
        }
    }

    /// The raw text, if this scalar was given as a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(text) => Some(text),
            _ => None,
        }
    }
}

pub(crate) const OUT_OF_RANGE: &str = "outside the representable decimal range";

pub(crate) fn parse_decimal_text(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(UncertainError::parse(text, "empty string"));
    }

    let parsed = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| {
            let reason = if is_numeric_literal(trimmed) {
                OUT_OF_RANGE
            } else {
                "not a decimal number"
            };
            UncertainError::parse(text, reason)
        })?;

    // Plain notation rounds excess fractional digits, possibly down to zero.
    if parsed.is_zero() && has_nonzero_digit(trimmed) {
        return Err(UncertainError::parse(text, OUT_OF_RANGE));
    }
    Ok(parsed)
}

fn float_to_decimal(value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(UncertainError::parse(value.to_string(), "not a finite decimal"));
    }

    match Decimal::try_from(value) {
        Ok(decimal) if !(decimal.is_zero() && value.abs() > 0.0) => Ok(decimal),
        _ => Err(UncertainError::parse(value.to_string(), OUT_OF_RANGE)),
    }
}

/// Whether `text` has the shape of a number: an optional sign, digits with at
/// most one decimal point, and an optional integer exponent.
fn is_numeric_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    let mantissa_ok = mantissa.chars().any(|c| c.is_ascii_digit())
        && mantissa.chars().filter(|&c| c == '.').count() <= 1
        && mantissa
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == '_');
    let exponent_ok = exponent.is_none_or(|exponent| {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
    });
    mantissa_ok && exponent_ok
}

fn has_nonzero_digit(text: &str) -> bool {
    let mantissa = text.split_once(['e', 'E']).map_or(text, |(mantissa, _)| mantissa);
    mantissa.chars().any(|c| matches!(c, '1'..='9'))
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Decimal(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Text(text) => write!(f, "{text:?}"),
        }
    }
}

impl From<Decimal> for Scalar {
    fn from(value: Decimal) -> Self {
        Scalar::Decimal(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

/// Converted through `Decimal::try_from(f32)` at the `f32` precision. A value
/// that has no decimal form is kept as a float so the error surfaces on use.
impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        match Decimal::try_from(value) {
            Ok(decimal) if !(decimal.is_zero() && value.abs() > 0.0) => Scalar::Decimal(decimal),
            _ => Scalar::Float(f64::from(value)),
        }
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Scalar::Text(text.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(text: String) -> Self {
        Scalar::Text(text)
    }
}

macro_rules! scalar_from_integer {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Scalar {
                fn from(value: $int) -> Self {
                    Scalar::Decimal(Decimal::from(value))
                }
            }
        )*
    };
}

scalar_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
