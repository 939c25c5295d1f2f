//! Property-based tests for value semantics.
//!
//! These tests use proptest to check the algebraic guarantees of the value
//! layer:
//! 1. Integer division identity: `(a / b) * b + (a % b) == a`
//! 2. No cross-variant equality, including Int vs Float
//! 3. Shared-handle aliasing for arrays and structs

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use phasor_value::{evaluate_binary, BinaryOp, Value, ValueType};
use proptest::prelude::*;

// -- Value Strategies --

/// Generate a scalar (non-heap) value.
fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::int),
        any::<f64>().prop_map(Value::float),
        "[a-z0-9]{0,8}".prop_map(Value::string),
    ]
}

/// Generate an array of scalars, nested up to `depth` levels.
fn array_strategy(depth: u32) -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(depth, 32, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::create_array)
    })
}

fn binary(left: &Value, right: &Value, op: BinaryOp) -> Value {
    evaluate_binary(left, right, op).unwrap()
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Truncating division and remainder reconstruct the dividend.
    #[test]
    fn prop_division_identity(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        prop_assume!(!(a == i64::MIN && b == -1));
        let (a, b) = (Value::int(a), Value::int(b));
        let quotient = binary(&a, &b, BinaryOp::Div);
        let remainder = binary(&a, &b, BinaryOp::Mod);
        let rebuilt = binary(&binary(&quotient, &b, BinaryOp::Mul), &remainder, BinaryOp::Add);
        prop_assert_eq!(rebuilt.as_int(), a.as_int());
    }

    /// An Int never equals a Float, even when numerically identical.
    #[test]
    fn prop_int_never_equals_float(n in -(1_i64 << 52)..(1_i64 << 52)) {
        #[allow(clippy::cast_precision_loss, reason = "range is exactly representable")]
        let float = Value::float(n as f64);
        let int = Value::int(n);
        prop_assert!(!int.equals(&float));
        prop_assert!(!float.equals(&int));
        prop_assert!(int.not_equals(&float));
    }

    /// Values of different variants are never equal.
    #[test]
    fn prop_cross_variant_inequality(a in array_strategy(2), b in array_strategy(2)) {
        if a.value_type() != b.value_type() {
            prop_assert!(!a.equals(&b));
            prop_assert!(a.not_equals(&b));
        }
    }

    /// Equality never fails and `!=` is always its negation.
    #[test]
    fn prop_not_equals_negates_equals(a in array_strategy(2), b in array_strategy(2)) {
        let eq = binary(&a, &b, BinaryOp::Eq);
        let ne = binary(&a, &b, BinaryOp::NotEq);
        prop_assert_eq!(eq.as_bool().unwrap(), !ne.as_bool().unwrap());
    }

    /// An array built from equal parts is equal to its structural copy.
    #[test]
    fn prop_array_equality_is_structural(elements in prop::collection::vec(0_i64..100, 0..8)) {
        let build = || Value::create_array(elements.iter().copied().map(Value::int).collect());
        let (a, b) = (build(), build());
        prop_assert!(a.equals(&b));
        prop_assert!(!a.ptr_eq(&b));
    }

    /// String concatenation preserves both operands in order.
    #[test]
    fn prop_string_concat(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
        let joined = binary(&Value::string(a.clone()), &Value::string(b.clone()), BinaryOp::Add);
        prop_assert_eq!(joined.as_str().unwrap(), format!("{}{}", a, b));
    }

    /// Pushes through any clone of an array are visible through every clone.
    #[test]
    fn prop_array_aliasing(pushes in prop::collection::vec(any::<i64>(), 0..16)) {
        let original = Value::empty_array();
        let alias = original.clone();
        for n in &pushes {
            alias.array_push(Value::int(*n)).unwrap();
        }
        prop_assert_eq!(original.array_len().unwrap(), pushes.len());
        prop_assert!(original.equals(&alias));
    }

    /// Textual projection of an Int round-trips through the decimal parser.
    #[test]
    fn prop_int_display_is_decimal(n in any::<i64>()) {
        prop_assert_eq!(Value::int(n).to_string().parse::<i64>().unwrap(), n);
        prop_assert_eq!(Value::int(n).value_type(), ValueType::Int);
    }
}
