use crate::eval::core::{Evaluation, evaluate, format_value};
use crate::expression::{Op, Token};

fn n(card: usize, value: i32) -> Token {
    Token::Number { card, value }
}

fn o(op: Op) -> Token {
    Token::Operator(op)
}

#[test]
fn test_precedence_multiplication_binds_tighter() {
    // 2 + 3 × 4 - 1 = 13
    let tokens = [
        n(0, 2),
        o(Op::Add),
        n(1, 3),
        o(Op::Mul),
        n(2, 4),
        o(Op::Sub),
        n(3, 1),
    ];
    assert_eq!(evaluate(&tokens), Evaluation::Value(13.0));
}

#[test]
fn test_parentheses_override_precedence() {
    // (2 + 2) × (3 + 3) = 24
    let tokens = [
        o(Op::Open),
        n(0, 2),
        o(Op::Add),
        n(1, 2),
        o(Op::Close),
        o(Op::Mul),
        o(Op::Open),
        n(2, 3),
        o(Op::Add),
        n(3, 3),
        o(Op::Close),
    ];
    assert_eq!(evaluate(&tokens), Evaluation::Value(24.0));
}

#[test]
fn test_partial_expression_is_incomplete() {
    // 3 × 8 is 24 but only two numbers are in play
    let tokens = [n(0, 3), o(Op::Mul), n(1, 8)];
    assert!(evaluate(&tokens).is_incomplete());
}

#[test]
fn test_three_numbers_near_target_is_incomplete() {
    let tokens = [n(0, 3), o(Op::Mul), n(1, 8), o(Op::Mul), n(2, 1)];
    assert!(evaluate(&tokens).is_incomplete());
}

#[test]
fn test_division_by_zero_is_incomplete() {
    // 4 ÷ (2 - 2) + 1
    let tokens = [
        n(0, 4),
        o(Op::Div),
        o(Op::Open),
        n(1, 2),
        o(Op::Sub),
        n(2, 2),
        o(Op::Close),
        o(Op::Add),
        n(3, 1),
    ];
    assert!(evaluate(&tokens).is_incomplete());
}

#[test]
fn test_unclosed_parenthesis_is_incomplete() {
    let tokens = [
        o(Op::Open),
        n(0, 2),
        o(Op::Add),
        n(1, 2),
        o(Op::Mul),
        n(2, 3),
        o(Op::Mul),
        n(3, 2),
    ];
    assert!(evaluate(&tokens).is_incomplete());
}

#[test]
fn test_number_after_close_is_incomplete() {
    // (1 + 2) 3 4 — syntactically adjacent values never evaluate
    let tokens = [
        o(Op::Open),
        n(0, 1),
        o(Op::Add),
        n(1, 2),
        o(Op::Close),
        n(2, 3),
        n(3, 4),
    ];
    assert!(evaluate(&tokens).is_incomplete());
}

#[test]
fn test_empty_parens_are_incomplete() {
    let tokens = [
        o(Op::Open),
        o(Op::Close),
        n(0, 1),
        o(Op::Add),
        n(1, 2),
        o(Op::Add),
        n(2, 3),
        o(Op::Add),
        n(3, 4),
    ];
    assert!(evaluate(&tokens).is_incomplete());
}

#[test]
fn test_division_result_within_tolerance_of_24() {
    // 8 ÷ (3 - 8 ÷ 3) accumulates floating-point error but stays within 1e-3
    let tokens = [
        n(0, 8),
        o(Op::Div),
        o(Op::Open),
        n(1, 3),
        o(Op::Sub),
        n(2, 8),
        o(Op::Div),
        n(3, 3),
        o(Op::Close),
    ];
    let result = evaluate(&tokens);
    let value = result.value();
    assert!(value.is_some());
    if let Some(v) = value {
        assert!((v - 24.0).abs() < 1e-3);
    }
}

#[test]
fn test_evaluate_is_total_over_malformed_streams() {
    // None of these may panic; all are merely incomplete.
    let streams: Vec<Vec<Token>> = vec![
        vec![],
        vec![o(Op::Close)],
        vec![o(Op::Add), n(0, 1), n(1, 1), n(2, 1), n(3, 1)],
        vec![n(0, 1), n(1, 1), n(2, 1), n(3, 1)],
        vec![n(0, 1), o(Op::Mul), o(Op::Mul), n(1, 2), n(2, 3), n(3, 4)],
        vec![o(Op::Open); 8],
    ];
    for tokens in &streams {
        assert!(evaluate(tokens).is_incomplete());
    }
}

#[test]
fn test_format_value_integers_render_plain() {
    assert_eq!(format_value(24.0), "24");
    assert_eq!(format_value(24.000000000000004), "24");
    assert_eq!(format_value(-3.0), "-3");
    assert_eq!(format_value(0.0), "0");
}

#[test]
fn test_format_value_fractions_render_two_decimals() {
    assert_eq!(format_value(3.5), "3.50");
    assert_eq!(format_value(8.0 / 3.0), "2.67");
}
