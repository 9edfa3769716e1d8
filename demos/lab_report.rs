use tracing_subscriber::EnvFilter;
use uncertain_decimal::{BinaryOperation, FormatConfig, Symbol, UncertainValue, report};

/// Lab report walkthrough
///
/// Prints each of the four operations on two measurements, step by step, in
/// the layout used for hand-written lab reports. Pass `--ascii` to render with
/// `+/-` instead of `±`. Set `RUST_LOG=uncertain_decimal=trace` to see how each
/// operand is interpreted.
fn main() -> uncertain_decimal::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let symbol = if std::env::args().any(|arg| arg == "--ascii") {
        Symbol::Ascii
    } else {
        Symbol::Unicode
    };
    let config = FormatConfig::default().with_symbol(symbol);

    println!("Lab Report: Error Propagation");
    println!("=============================\n");

    let x = UncertainValue::new(10, 5, false)?;
    let y = UncertainValue::new(10, 1, false)?;

    for operation in [
        BinaryOperation::Add,
        BinaryOperation::Sub,
        BinaryOperation::Mul,
        BinaryOperation::Div,
    ] {
        let example = report::worked_example(&x, &y, operation, &config)?;
        println!("{example}\n");
    }

    println!("Mixed operands");
    println!("--------------");
    let z = UncertainValue::new(10, 1, false)?;
    println!("  (10 ± 1) + 5            = {}", z.add(5)?.display(&config));
    println!("  (10 ± 1) + (10, 5)      = {}", z.add((10, 5))?.display(&config));
    println!("  (10 ± 1) - (10, 0.5, r) = {}", z.subtract((10, 0.5, true))?.display(&config));
    println!("  (10 ± 1) × (10, 50%)    = {}", z.multiply((10, "50%"))?.display(&config));
    println!("  20 ÷ (10 ± 1)           = {}", z.reflected_divide(20)?.display(&config));

    match z.divide(0) {
        Ok(value) => println!("  (10 ± 1) ÷ 0            = {}", value.display(&config)),
        Err(err) => println!("  (10 ± 1) ÷ 0            -> {err}"),
    }

    Ok(())
}
