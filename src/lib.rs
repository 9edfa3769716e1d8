//! # uncertain-decimal
//!
//! Exact decimal measurements with the linear error propagation taught in
//! undergraduate lab courses.
//!
//! ## Core Concept: Value ± Error
//!
//! An [`UncertainValue`] pairs a central value with its uncertainty. Sums and
//! differences add absolute uncertainties; products and quotients add relative
//! uncertainties. Errors are treated as independent worst-case bounds, so they
//! never cancel.
//!
//! ```rust
//! use uncertain_decimal::{FormatConfig, UncertainValue};
//!
//! let x = UncertainValue::new(10, 1, false).unwrap(); // 10 ± 1
//! let y = UncertainValue::new(10, 5, false).unwrap(); // 10 ± 5
//!
//! assert_eq!(x.add(&y).unwrap().to_string(), "20 ± 6");
//! assert_eq!(x.subtract(&y).unwrap().to_string(), "0 ± 6");
//! assert_eq!(x.multiply(&y).unwrap().to_string(), "100 ± 60");
//!
//! let ratio = x.divide(&y).unwrap();
//! assert_eq!(ratio.to_string(), "1 ± 0.6");
//! assert_eq!(ratio.to_relative_string(&FormatConfig::default()), "1 ± 60%");
//! ```
//!
//! ## Features
//!
//! - **Exact decimals**: values are `rust_decimal::Decimal`, never binary floats
//! - **Flexible uncertainty input**: absolute, relative fraction, or `"5%"`
//! - **Flexible operands**: other values, numbers, numeric strings, or
//!   `(value, uncertainty[, is_relative])` tuples
//! - **Reflected operations**: `number - value` and `number / value`
//! - **Explicit formatting**: Unicode `±` or ASCII `+/-` per call
//! - **Lab-report output**: worked two-operand calculations via [`report`]

pub mod error;
pub mod format;
pub mod operand;
pub mod operations;
pub mod report;
pub mod scalar;
pub mod uncertain;
pub mod uncertainty;

pub use error::{Result, UncertainError};
pub use format::{FormatConfig, Formatted, Symbol};
pub use operand::{Operand, TupleItem};
pub use operations::BinaryOperation;
pub use report::WorkedExample;
pub use scalar::Scalar;
pub use uncertain::UncertainValue;
pub use uncertainty::{UncertaintyForm, resolve_uncertainty};
