//! Resolution of raw uncertainty inputs into absolute or relative form.
//!
//! An uncertainty can arrive as a plain number, a number flagged as a relative
//! fraction, or a percentage string. [`resolve_uncertainty`] is the single
//! place that decides which form applies. Precedence, highest first:
//!
//! 1. text with exactly one `%` is a percentage, always relative, and the
//!    relative flag is ignored;
//! 2. text with more than one `%` is rejected;
//! 3. text without `%` is an absolute numeric string, and the relative flag
//!    is ignored;
//! 4. a number is relative when the flag is set, absolute otherwise.
//!
//! The resolved magnitude is always non-negative.

use crate::error::{Result, UncertainError};
use crate::scalar::{OUT_OF_RANGE, Scalar, parse_decimal_text};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const ONE_HUNDRED: Decimal = dec!(100);

/// An uncertainty whose form has been decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UncertaintyForm {
    /// Error bound in the same unit as the value
    Absolute(Decimal),
    /// Error bound as a fraction of the value
    Relative(Decimal),
}

impl UncertaintyForm {
    /// The non-negative magnitude, whatever the form.
    #[must_use]
    pub fn magnitude(&self) -> Decimal {
        match self {
            UncertaintyForm::Absolute(m) | UncertaintyForm::Relative(m) => *m,
        }
    }

    /// Whether this is a relative fraction.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        matches!(self, UncertaintyForm::Relative(_))
    }
}

/// Decide whether `uncertainty` is absolute or relative and parse it.
///
/// # Errors
/// Returns [`UncertainError::Parse`] when the text holds more than one `%`,
/// or when the number itself cannot be parsed.
///
/// # Example
/// ```rust
/// use rust_decimal_macros::dec;
/// use uncertain_decimal::{Scalar, UncertaintyForm, resolve_uncertainty};
///
/// let pct = resolve_uncertainty(&Scalar::from("50%"), false).unwrap();
/// assert_eq!(pct, UncertaintyForm::Relative(dec!(0.5)));
///
/// let abs = resolve_uncertainty(&Scalar::from(-2), false).unwrap();
/// assert_eq!(abs, UncertaintyForm::Absolute(dec!(2)));
/// ```
pub fn resolve_uncertainty(uncertainty: &Scalar, is_relative: bool) -> Result<UncertaintyForm> {
    let form = match uncertainty.as_text() {
        Some(text) => match text.matches('%').count() {
            0 => UncertaintyForm::Absolute(parse_decimal_text(text)?.abs()),
            1 => UncertaintyForm::Relative(parse_percentage(text)?),
            _ => return Err(UncertainError::parse(text, "more than one '%'")),
        },
        None => {
            let magnitude = uncertainty.to_decimal()?.abs();
            if is_relative {
                UncertaintyForm::Relative(magnitude)
            } else {
                UncertaintyForm::Absolute(magnitude)
            }
        }
    };

    tracing::trace!(input = %uncertainty, is_relative, ?form, "resolved uncertainty");
    Ok(form)
}

// The '%' may sit anywhere in the text; it is removed before parsing.
fn parse_percentage(text: &str) -> Result<Decimal> {
    let digits = text.replacen('%', "", 1);
    let percent = parse_decimal_text(&digits).map_err(|err| match err {
        UncertainError::Parse {
            reason: OUT_OF_RANGE,
            ..
        } => UncertainError::parse(text, OUT_OF_RANGE),
        _ => UncertainError::parse(text, "malformed percentage"),
    })?;

    let fraction = percent
        .abs()
        .checked_div(ONE_HUNDRED)
        .ok_or_else(|| UncertainError::overflow("percentage conversion"))?;
    if fraction.is_zero() && !percent.is_zero() {
        return Err(UncertainError::parse(text, OUT_OF_RANGE));
    }
    Ok(fraction)
}
