//! Integration tests for error propagation through the public API
//!
//! Covers the worked lab examples as well as randomized checks that the
//! propagation rules hold for arbitrary operands.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uncertain_decimal::{BinaryOperation, FormatConfig, UncertainError, UncertainValue};

fn uv(value: i32, uncertainty: i32) -> UncertainValue {
    UncertainValue::new(value, uncertainty, false).unwrap()
}

fn random_decimal(rng: &mut StdRng, nonzero: bool) -> Decimal {
    loop {
        let candidate = Decimal::new(rng.random_range(-100_000..=100_000), 2);
        if !nonzero || !candidate.is_zero() {
            return candidate;
        }
    }
}

fn random_value(rng: &mut StdRng) -> UncertainValue {
    let value = random_decimal(rng, false);
    let uncertainty = Decimal::new(rng.random_range(0..=5_000), 2);
    UncertainValue::from_absolute(value, uncertainty).unwrap()
}

#[test]
fn test_lab_examples() {
    let x = uv(10, 1);
    let y = uv(10, 5);

    assert_eq!(x.add(5).unwrap().to_string(), "15 ± 1");
    assert_eq!(x.add(&y).unwrap(), uv(20, 6));
    assert_eq!(x.subtract(&y).unwrap(), uv(0, 6));

    let product = x.multiply(&y).unwrap();
    assert_eq!(product.value(), dec!(100));
    assert_eq!(product.relative_uncertainty(), dec!(0.6));
    assert_eq!(product.absolute_uncertainty(), dec!(60));

    let ratio = x.divide(&y).unwrap();
    assert_eq!(ratio.value(), dec!(1));
    assert_eq!(ratio.relative_uncertainty(), dec!(0.6));
    assert_eq!(ratio.absolute_uncertainty(), dec!(0.6));
    assert_eq!(ratio.to_relative_string(&FormatConfig::default()), "1 ± 60%");
}

#[test]
fn test_lab_examples_with_tuples() {
    let x = uv(10, 1);

    assert_eq!(x.add((10, 5)).unwrap().to_string(), "20 ± 6");
    assert_eq!(x.subtract((10, 0.5, true)).unwrap().to_string(), "0 ± 6");
    assert_eq!(x.multiply((10, "50%")).unwrap().to_string(), "100 ± 60");

    let y = UncertainValue::new(10, "50%", false).unwrap();
    assert_eq!(x.divide(&y).unwrap().to_string(), "1 ± 0.6");
}

#[test]
fn test_construction_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x1ab);

    for _ in 0..500 {
        let value = random_decimal(&mut rng, true);
        let uncertainty = Decimal::new(rng.random_range(0..=10_000), 3);
        let x = UncertainValue::from_absolute(value, uncertainty).unwrap();

        assert_eq!(x.value(), value);
        assert_eq!(x.absolute_uncertainty(), uncertainty);
        assert_eq!(x.relative_uncertainty(), uncertainty / value.abs());
    }
}

#[test]
fn test_uncertainties_are_never_negative() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let a = random_value(&mut rng);
        let b = random_value(&mut rng);

        for operation in [BinaryOperation::Add, BinaryOperation::Sub, BinaryOperation::Mul] {
            let result = operation.apply(&a, b).unwrap();
            assert!(!result.absolute_uncertainty().is_sign_negative());
            assert!(!result.relative_uncertainty().is_sign_negative());
        }
    }
}

#[test]
fn test_additive_errors_never_cancel() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let a = random_value(&mut rng);
        let b = random_value(&mut rng);
        let expected = a.absolute_uncertainty() + b.absolute_uncertainty();

        assert_eq!(a.add(b).unwrap().absolute_uncertainty(), expected);
        assert_eq!(a.subtract(b).unwrap().absolute_uncertainty(), expected);
        assert_eq!(a.reflected_subtract(b).unwrap().absolute_uncertainty(), expected);
    }
}

#[test]
fn test_multiplicative_errors_add_relative() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..500 {
        let a = random_value(&mut rng);
        let b = random_value(&mut rng);
        let product = a.multiply(b).unwrap();

        if product.value().is_zero() {
            assert!(product.is_exact());
        } else {
            assert_eq!(
                product.relative_uncertainty(),
                a.relative_uncertainty() + b.relative_uncertainty()
            );
        }
    }
}

#[test]
fn test_operations_do_not_mutate_operands() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..200 {
        let a = random_value(&mut rng);
        let b = random_value(&mut rng);
        let snapshot = |v: &UncertainValue| {
            (v.value(), v.absolute_uncertainty(), v.relative_uncertainty())
        };
        let (before_a, before_b) = (snapshot(&a), snapshot(&b));

        let _ = a.add(&b);
        let _ = a.subtract(&b);
        let _ = a.multiply(&b);
        let _ = a.divide(&b);
        let _ = a.reflected_subtract(&b);
        let _ = a.reflected_divide(&b);

        assert_eq!(snapshot(&a), before_a);
        assert_eq!(snapshot(&b), before_b);
    }
}

#[test]
fn test_reflected_operations_match_swapped_operands() {
    let x = uv(8, 2);

    assert_eq!(x.reflected_subtract(20).unwrap(), uv(12, 2));
    assert_eq!(x.reflected_add(20).unwrap(), uv(28, 2));

    let inverse = x.reflected_divide(2).unwrap();
    assert_eq!(inverse.value(), dec!(0.25));
    assert_eq!(inverse.relative_uncertainty(), dec!(0.25));

    let product = x.reflected_multiply(0.5).unwrap();
    assert_eq!(product, uv(4, 1));
}

#[test]
fn test_division_by_zero_value() {
    let x = uv(10, 1);
    assert_eq!(x.divide(uv(0, 3)).unwrap_err(), UncertainError::DivisionByZero);
    assert_eq!(x.divide("0").unwrap_err(), UncertainError::DivisionByZero);
    assert_eq!(
        x.divide((0, 1, true)).unwrap_err(),
        UncertainError::DivisionByZero
    );
}

#[test]
fn test_zero_value_degenerate_case() {
    let zero = UncertainValue::new(0, 5, true).unwrap();
    assert_eq!(zero.relative_uncertainty(), Decimal::ZERO);
    assert_eq!(zero.absolute_uncertainty(), Decimal::ZERO);

    let zero_pct = UncertainValue::new(0, "20%", false).unwrap();
    assert!(zero_pct.is_exact());
}

#[test]
fn test_chained_calculation() {
    // Density of a cylinder: m / (pi r^2 h), all in exact decimals.
    let mass = UncertainValue::new("125.0", "0.5", false).unwrap();
    let radius = UncertainValue::new("1.50", "1%", false).unwrap();
    let height = UncertainValue::new("10.0", "0.1", false).unwrap();

    let area = radius.multiply(&radius).unwrap().multiply("3.14159").unwrap();
    let volume = area.multiply(&height).unwrap();
    let density = mass.divide(&volume).unwrap();

    // 0.4% + 1% + 1% + 1%
    assert_eq!(density.relative_uncertainty(), dec!(0.034));
    assert!(density.value() > dec!(1.76) && density.value() < dec!(1.77));
}
