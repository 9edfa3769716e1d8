//! Operand shapes accepted by the arithmetic operations.
//!
//! Every right-hand side is one of: an [`UncertainValue`], a bare number or
//! numeric string, or a tuple of `(value, uncertainty)` or
//! `(value, uncertainty, is_relative)`. [`Operand`] names those shapes
//! explicitly and [`Operand::into_uncertain`] turns any of them into an
//! `UncertainValue` before an operation runs.

use crate::error::{Result, UncertainError};
use crate::scalar::Scalar;
use crate::uncertain::UncertainValue;
use rust_decimal::Decimal;

/// One element of a tuple operand.
#[derive(Debug, Clone, PartialEq)]
pub enum TupleItem {
    /// A value or uncertainty
    Number(Scalar),
    /// An explicit relative flag
    Flag(bool),
}

/// The right-hand side of an arithmetic operation.
///
/// Most callers never name this type: anything convertible into it can be
/// passed straight to [`UncertainValue::add`] and friends.
///
/// # Example
/// ```rust
/// use uncertain_decimal::{Operand, TupleItem, UncertainValue};
///
/// let x = UncertainValue::new(10, 1, false).unwrap();
///
/// // Statically shaped tuples convert directly.
/// let sum = x.add((10, 5)).unwrap();
/// assert_eq!(sum, UncertainValue::new(20, 6, false).unwrap());
///
/// // Dynamically built tuples are checked when used.
/// let odd = Operand::tuple([TupleItem::from(10), TupleItem::from(5), TupleItem::from(1)]);
/// assert!(x.add(odd).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// An existing uncertain value
    Value(UncertainValue),
    /// A number or numeric string, treated as exact
    Scalar(Scalar),
    /// A `(value, uncertainty)` or `(value, uncertainty, is_relative)` tuple
    Tuple(Vec<TupleItem>),
}

impl Operand {
    /// Build a tuple operand from arbitrary items.
    #[must_use]
    pub fn tuple<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TupleItem>,
    {
        Operand::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// A short description of the operand's shape, used in diagnostics.
    #[must_use]
    pub fn shape(&self) -> String {
        match self {
            Operand::Value(_) => "uncertain value".to_owned(),
            Operand::Scalar(_) => "number".to_owned(),
            Operand::Tuple(items) => format!("tuple of length {}", items.len()),
        }
    }

    /// Convert this operand into an uncertain value.
    ///
    /// A bare number is exact. A 2-tuple is `(value, absolute uncertainty)`.
    /// A 3-tuple is `(value, uncertainty, is_relative)`.
    ///
    /// # Errors
    /// - [`UncertainError::Parse`] if a number does not parse, a boolean sits
    ///   where a number belongs, or the third tuple element is not a boolean.
    /// - [`UncertainError::UnsupportedOperand`] for tuples of any length other
    ///   than 2 or 3.
    pub fn into_uncertain(self) -> Result<UncertainValue> {
        let shape = self.shape();
        let value = match self {
            Operand::Value(value) => value,
            Operand::Scalar(scalar) => UncertainValue::exact(scalar.to_decimal()?),
            Operand::Tuple(items) => match items.as_slice() {
                [value, uncertainty] => {
                    UncertainValue::new(number(value)?, number(uncertainty)?, false)?
                }
                [value, uncertainty, flag] => {
                    let TupleItem::Flag(is_relative) = flag else {
                        return Err(UncertainError::parse(
                            describe(flag),
                            "relative flag must be a boolean",
                        ));
                    };
                    UncertainValue::new(number(value)?, number(uncertainty)?, *is_relative)?
                }
                _ => return Err(UncertainError::unsupported_operand(shape)),
            },
        };

        tracing::trace!(%shape, ?value, "coerced operand");
        Ok(value)
    }
}

fn number(item: &TupleItem) -> Result<Scalar> {
    match item {
        TupleItem::Number(scalar) => Ok(scalar.clone()),
        TupleItem::Flag(flag) => Err(UncertainError::parse(
            flag.to_string(),
            "expected a number, found a boolean",
        )),
    }
}

fn describe(item: &TupleItem) -> String {
    match item {
        TupleItem::Number(scalar) => scalar.to_string(),
        TupleItem::Flag(flag) => flag.to_string(),
    }
}

impl From<UncertainValue> for Operand {
    fn from(value: UncertainValue) -> Self {
        Operand::Value(value)
    }
}

impl From<&UncertainValue> for Operand {
    fn from(value: &UncertainValue) -> Self {
        Operand::Value(*value)
    }
}

impl From<Scalar> for Operand {
    fn from(scalar: Scalar) -> Self {
        Operand::Scalar(scalar)
    }
}

impl<A, B> From<(A, B)> for Operand
where
    A: Into<Scalar>,
    B: Into<Scalar>,
{
    fn from((value, uncertainty): (A, B)) -> Self {
        Operand::Tuple(vec![
            TupleItem::Number(value.into()),
            TupleItem::Number(uncertainty.into()),
        ])
    }
}

impl<A, B> From<(A, B, bool)> for Operand
where
    A: Into<Scalar>,
    B: Into<Scalar>,
{
    fn from((value, uncertainty, is_relative): (A, B, bool)) -> Self {
        Operand::Tuple(vec![
            TupleItem::Number(value.into()),
            TupleItem::Number(uncertainty.into()),
            TupleItem::Flag(is_relative),
        ])
    }
}

impl From<bool> for TupleItem {
    fn from(flag: bool) -> Self {
        TupleItem::Flag(flag)
    }
}

impl From<Scalar> for TupleItem {
    fn from(scalar: Scalar) -> Self {
        TupleItem::Number(scalar)
    }
}

macro_rules! numeric_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Scalar(Scalar::from(value))
                }
            }

            impl From<$ty> for TupleItem {
                fn from(value: $ty) -> Self {
                    TupleItem::Number(Scalar::from(value))
                }
            }
        )*
    };
}

numeric_operand!(
    Decimal, f32, f64, &str, String, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize
);
