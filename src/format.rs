//! Textual rendering of uncertain values.
//!
//! Formatting is a pure projection of the stored value and uncertainty. The
//! choice between the Unicode `±` and the ASCII `+/-` is carried by an explicit
//! [`FormatConfig`] rather than any global switch.
//!
//! ```rust
//! use uncertain_decimal::{FormatConfig, UncertainValue};
//!
//! let x = UncertainValue::new(10, "50%", false).unwrap();
//! assert_eq!(x.to_string(), "10 ± 5");
//! assert_eq!(x.to_string_with(&FormatConfig::ascii()), "10 +/- 5");
//! assert_eq!(x.to_relative_string(&FormatConfig::default()), "10 ± 50%");
//! ```

use crate::operations::BinaryOperation;
use crate::uncertain::UncertainValue;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which plus-minus sign to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    /// `±`
    #[default]
    Unicode,
    /// `+/-`
    Ascii,
}

/// Rendering options for uncertain values.
///
/// Deserializes from a table such as `{ "symbol": "ascii" }`; missing fields
/// take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// The plus-minus sign to use
    pub symbol: Symbol,
}

impl FormatConfig {
    /// Render with `±` (the default)
    #[must_use]
    pub const fn unicode() -> Self {
        Self {
            symbol: Symbol::Unicode,
        }
    }

    /// Render with `+/-`
    #[must_use]
    pub const fn ascii() -> Self {
        Self {
            symbol: Symbol::Ascii,
        }
    }

    /// Replace the plus-minus sign
    #[must_use]
    pub const fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = symbol;
        self
    }

    /// The plus-minus sign for this configuration
    #[must_use]
    pub fn plus_minus(&self) -> &'static str {
        match self.symbol {
            Symbol::Unicode => "±",
            Symbol::Ascii => "+/-",
        }
    }

    /// The operator sign for this configuration
    #[must_use]
    pub fn operator(&self, operation: BinaryOperation) -> &'static str {
        match self.symbol {
            Symbol::Unicode => operation.symbol(),
            Symbol::Ascii => operation.ascii_symbol(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    Absolute,
    Relative,
}

/// A borrowed, lazily rendered view of an [`UncertainValue`].
///
/// Returned by [`UncertainValue::display`] and
/// [`UncertainValue::display_relative`].
#[derive(Debug, Clone, Copy)]
pub struct Formatted<'a> {
    value: &'a UncertainValue,
    config: FormatConfig,
    form: Form,
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value.value().normalize();
        let sign = self.config.plus_minus();

        match self.form {
            Form::Absolute => write!(
                f,
                "{value} {sign} {}",
                self.value.absolute_uncertainty().normalize()
            ),
            Form::Relative => {
                let relative = self.value.relative_uncertainty();
                match percent(relative) {
                    Some(percent) => write!(f, "{value} {sign} {percent}%"),
                    None => write!(f, "{value} {sign} {}%", scientific_percent(relative)),
                }
            }
        }
    }
}

impl UncertainValue {
    /// A view rendering `"<value> ± <absolute uncertainty>"`.
    #[must_use]
    pub fn display(&self, config: &FormatConfig) -> Formatted<'_> {
        Formatted {
            value: self,
            config: *config,
            form: Form::Absolute,
        }
    }

    /// A view rendering `"<value> ± <relative uncertainty × 100>%"`.
    #[must_use]
    pub fn display_relative(&self, config: &FormatConfig) -> Formatted<'_> {
        Formatted {
            value: self,
            config: *config,
            form: Form::Relative,
        }
    }

    /// Renders `"<value> ± <absolute uncertainty>"` with the given symbol.
    #[must_use]
    pub fn to_string_with(&self, config: &FormatConfig) -> String {
        self.display(config).to_string()
    }

    /// Renders `"<value> ± <relative uncertainty × 100>%"`.
    ///
    /// # Example
    /// ```rust
    /// use uncertain_decimal::{FormatConfig, UncertainValue};
    ///
    /// let x = UncertainValue::new(10, 1, false).unwrap();
    /// let y = UncertainValue::new(10, 5, false).unwrap();
    /// let ratio = x.divide(&y).unwrap();
    /// assert_eq!(ratio.to_relative_string(&FormatConfig::default()), "1 ± 60%");
    /// assert_eq!(ratio.to_relative_string(&FormatConfig::ascii()), "1 +/- 60%");
    /// ```
    #[must_use]
    pub fn to_relative_string(&self, config: &FormatConfig) -> String {
        self.display_relative(config).to_string()
    }
}

impl fmt::Display for UncertainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(&FormatConfig::default()), f)
    }
}

/// Percentage of `relative` as rendered by the relative form, for callers
/// that lay out their own text.
#[must_use]
pub fn percent(relative: Decimal) -> Option<Decimal> {
    relative.checked_mul(dec!(100)).map(|p| p.normalize())
}

/// `relative × 100` in scientific notation, for percentages too large to hold
/// in a decimal.
fn scientific_percent(relative: Decimal) -> String {
    let relative = relative.normalize();
    let digits = relative.mantissa().unsigned_abs().to_string();
    let significant = digits.trim_end_matches('0');
    if significant.is_empty() {
        return "0".to_owned();
    }

    // One leading digit, then two more places for the percent scaling.
    let exponent =
        i64::try_from(digits.len() + 1).unwrap_or_default() - i64::from(relative.scale());
    let (lead, rest) = significant.split_at(1);
    if rest.is_empty() {
        format!("{lead}e{exponent}")
    } else {
        format!("{lead}.{rest}e{exponent}")
    }
}
