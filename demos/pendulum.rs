use rust_decimal_macros::dec;
use uncertain_decimal::{FormatConfig, UncertainValue, format};

/// Measuring g with a simple pendulum
///
/// g = 4π²L / T², where the period T is obtained by timing twenty swings with
/// a hand stopwatch. Shows how the reaction-time error on the stopwatch
/// dominates the final uncertainty.
fn main() -> uncertain_decimal::Result<()> {
    let config = FormatConfig::default();

    println!("⏱️  Pendulum Measurement of g");
    println!("============================\n");

    let length = UncertainValue::new("0.995", "0.002", false)?; // metres, tape measure
    let twenty_swings = UncertainValue::new("40.1", "0.2", false)?; // seconds, reaction time
    let pi = UncertainValue::exact(dec!(3.14159265358979));

    let period = twenty_swings.divide(20)?;
    println!("   Length L:  {} m", length.display(&config));
    println!("   Period T:  {} s", period.display(&config));
    println!("              {}", period.to_relative_string(&config));

    let numerator = pi.multiply(&pi)?.multiply(4)?.multiply(&length)?;
    let g = numerator.divide(period.multiply(&period)?)?;

    println!("\n📐 Result:");
    println!(
        "   g = {} ± {} m/s²",
        g.value().round_dp(3),
        g.absolute_uncertainty().round_dp(3)
    );
    if let Some(percent) = format::percent(g.relative_uncertainty()) {
        println!("     (± {}%)", percent.round_dp(2));
    }

    let (low, high) = g.bounds()?;
    println!("   Interval: [{}, {}]", low.round_dp(3), high.round_dp(3));

    let accepted = dec!(9.81);
    if low <= accepted && accepted <= high {
        println!("   ✅ Consistent with the accepted 9.81 m/s²");
    } else {
        println!("   ⚠️  Accepted 9.81 m/s² lies outside the measured interval");
    }

    Ok(())
}
