//! Integration tests for operand coercion and input parsing
//!
//! Every operation accepts the same operand shapes; these tests check that the
//! shapes are interpreted identically across all four operators.

use rust_decimal_macros::dec;
use uncertain_decimal::{
    BinaryOperation, Operand, Scalar, TupleItem, UncertainError, UncertainValue, UncertaintyForm,
    resolve_uncertainty,
};

const OPERATIONS: [BinaryOperation; 4] = [
    BinaryOperation::Add,
    BinaryOperation::Sub,
    BinaryOperation::Mul,
    BinaryOperation::Div,
];

fn samples() -> Vec<UncertainValue> {
    vec![
        UncertainValue::new(10, 1, false).unwrap(),
        UncertainValue::new("-2.5", "0.1", false).unwrap(),
        UncertainValue::new(0, 3, false).unwrap(),
        UncertainValue::new("1e3", "2%", false).unwrap(),
    ]
}

#[test]
fn test_two_tuple_equivalence() {
    let y = UncertainValue::new(10, 5, false).unwrap();

    for x in samples() {
        for operation in OPERATIONS {
            assert_eq!(
                operation.apply(&x, (10, 5)),
                operation.apply(&x, y),
                "{operation} with {x:?}"
            );
        }
    }
}

#[test]
fn test_three_tuple_equivalence() {
    let y = UncertainValue::new(4, 0.25, true).unwrap();

    for x in samples() {
        for operation in OPERATIONS {
            assert_eq!(
                operation.apply(&x, (4, 0.25, true)),
                operation.apply(&x, y),
                "{operation} with {x:?}"
            );
        }
    }
}

#[test]
fn test_scalar_equivalence() {
    let exact = UncertainValue::exact(dec!(2.5));

    for x in samples() {
        for operation in OPERATIONS {
            let expected = operation.apply(&x, exact);
            assert_eq!(operation.apply(&x, dec!(2.5)), expected);
            assert_eq!(operation.apply(&x, 2.5), expected);
            assert_eq!(operation.apply(&x, 2.5_f32), expected);
            assert_eq!(operation.apply(&x, "2.5"), expected);
        }
    }
}

#[test]
fn test_percentage_overrides_relative_flag() {
    let x = UncertainValue::new(10, "50%", false).unwrap();
    let y = UncertainValue::new(10, "50%", true).unwrap();
    assert_eq!(x, y);
    assert_eq!(x.absolute_uncertainty(), dec!(5));

    let tuple = UncertainValue::new(1, 0, false)
        .unwrap()
        .multiply((10, "50%", false))
        .unwrap();
    assert_eq!(tuple.absolute_uncertainty(), dec!(5));
}

#[test]
fn test_plain_string_uncertainty_is_absolute() {
    let x = UncertainValue::new(10, "0.5", true).unwrap();
    assert_eq!(x.absolute_uncertainty(), dec!(0.5));
    assert_eq!(
        resolve_uncertainty(&Scalar::from("0.5"), true).unwrap(),
        UncertaintyForm::Absolute(dec!(0.5))
    );
}

#[test]
fn test_non_boolean_flag_is_parse_error() {
    let x = UncertainValue::new(10, 1, false).unwrap();
    let bad = Operand::tuple([
        TupleItem::from(10),
        TupleItem::from(5),
        TupleItem::from("yes"),
    ]);

    for operation in OPERATIONS {
        assert!(matches!(
            operation.apply(&x, bad.clone()),
            Err(UncertainError::Parse { .. })
        ));
    }
}

#[test]
fn test_tuple_length_is_checked() {
    let x = UncertainValue::new(10, 1, false).unwrap();
    let four = Operand::tuple([
        TupleItem::from(10),
        TupleItem::from(5),
        TupleItem::from(true),
        TupleItem::from(0),
    ]);

    for operation in OPERATIONS {
        assert_eq!(
            operation.apply(&x, four.clone()).unwrap_err(),
            UncertainError::unsupported_operand("tuple of length 4")
        );
    }
}

#[test]
fn test_malformed_inputs() {
    let x = UncertainValue::new(10, 1, false).unwrap();

    for bad in ["", "1,5", "five", "NaN%"] {
        assert!(
            matches!(x.add(bad), Err(UncertainError::Parse { .. })),
            "expected parse error for {bad:?}"
        );
    }

    assert!(matches!(
        x.add((10, "5%%")),
        Err(UncertainError::Parse { .. })
    ));
    assert!(matches!(
        x.add(f64::NAN),
        Err(UncertainError::Parse { .. })
    ));
}

#[test]
fn test_out_of_range_inputs_are_parse_errors() {
    let x = UncertainValue::new(10, 1, false).unwrap();

    for input in ["1e-29", "0.00000000000000000000000000001", "1e40"] {
        assert_eq!(
            x.add(input).unwrap_err(),
            UncertainError::parse(input, "outside the representable decimal range")
        );
    }
    assert!(UncertainValue::new(1.5_f32, 0.25_f32, false).is_ok());
}

#[test]
fn test_operand_errors_and_arithmetic_errors_are_distinct() {
    let zero = UncertainValue::new(0, 0, false).unwrap();
    assert!(matches!(
        UncertainValue::new(1, 0, false).unwrap().divide(("x", 1)),
        Err(UncertainError::Parse { .. })
    ));
    assert_eq!(
        UncertainValue::new(1, 0, false).unwrap().divide(zero),
        Err(UncertainError::DivisionByZero)
    );
}
