//! Worked two-operand calculations laid out the way a lab report shows them.

use crate::error::Result;
use crate::format::FormatConfig;
use crate::operations::BinaryOperation;
use crate::uncertain::UncertainValue;
use std::fmt;

/// A rendered calculation and its result.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkedExample {
    /// The operation that was performed
    pub operation: BinaryOperation,
    /// The rendered lines, in order
    pub lines: Vec<String>,
    /// The computed value
    pub result: UncertainValue,
}

impl fmt::Display for WorkedExample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Computes `lhs <operation> rhs` and renders each step.
///
/// Addition and subtraction show the operands in absolute form followed by the
/// result. Multiplication and division, which propagate relative error, also
/// show the operands in relative form and give the result in both forms.
///
/// # Errors
/// Propagates any error from the operation itself, such as
/// [`UncertainError::DivisionByZero`](crate::UncertainError::DivisionByZero).
///
/// # Example
/// ```rust
/// use uncertain_decimal::{BinaryOperation, FormatConfig, UncertainValue, report};
///
/// let x = UncertainValue::new(10, 5, false).unwrap();
/// let y = UncertainValue::new(10, 1, false).unwrap();
///
/// let sum = report::worked_example(&x, &y, BinaryOperation::Add, &FormatConfig::default()).unwrap();
/// assert_eq!(sum.to_string(), "(10 ± 5) + (10 ± 1)\n20 ± 6");
///
/// let product = report::worked_example(&x, &y, BinaryOperation::Mul, &FormatConfig::ascii()).unwrap();
/// assert_eq!(
///     product.lines,
///     [
///         "(10 +/- 5) X (10 +/- 1)",
///         "(10 +/- 50%) X (10 +/- 10%)",
///         "100 +/- 60%",
///         "100 +/- 60",
///     ]
/// );
/// ```
pub fn worked_example(
    lhs: &UncertainValue,
    rhs: &UncertainValue,
    operation: BinaryOperation,
    config: &FormatConfig,
) -> Result<WorkedExample> {
    let result = operation.apply(lhs, rhs)?;
    let sign = config.operator(operation);

    let mut lines = vec![format!(
        "({}) {sign} ({})",
        lhs.display(config),
        rhs.display(config)
    )];

    if operation.is_multiplicative() {
        lines.push(format!(
            "({}) {sign} ({})",
            lhs.display_relative(config),
            rhs.display_relative(config)
        ));
        lines.push(result.to_relative_string(config));
    }
    lines.push(result.to_string_with(config));

    Ok(WorkedExample {
        operation,
        lines,
        result,
    })
}
