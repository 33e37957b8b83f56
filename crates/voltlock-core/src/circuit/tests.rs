use super::*;

fn pair(
    left_op: Operator,
    left_val: f64,
    right_op: Operator,
    right_val: f64,
    enabled: bool,
) -> ModifierPair {
    ModifierPair {
        left: Modifier::new(left_op, left_val),
        right: Modifier::new(right_op, right_val),
        enabled,
    }
}

#[test]
fn test_evaluate_identity_when_all_disabled() {
    let mut config = CircuitConfig::new();
    config.start_value = 42.5;
    for p in config.pairs.iter_mut() {
        p.left = Modifier::new(Operator::Mul, 3.0);
        p.right = Modifier::new(Operator::Add, 7.0);
    }
    assert_eq!(evaluate(config.start_value, &config.pairs, Wire::Left), 42.5);
    assert_eq!(
        evaluate(config.start_value, &config.pairs, Wire::Right),
        42.5
    );
}

#[test]
fn test_evaluate_single_operator_laws() {
    let mut pairs: [ModifierPair; PAIR_COUNT] = Default::default();
    pairs[0] = pair(Operator::Add, 5.0, Operator::Sub, 5.0, true);
    assert_eq!(evaluate(10.0, &pairs, Wire::Left), 15.0);
    assert_eq!(evaluate(10.0, &pairs, Wire::Right), 5.0);

    pairs[0] = pair(Operator::Mul, 3.0, Operator::Div, 4.0, true);
    assert_eq!(evaluate(10.0, &pairs, Wire::Left), 30.0);
    assert_eq!(evaluate(10.0, &pairs, Wire::Right), 2.5);
}

#[test]
fn test_evaluate_division_by_zero_is_noop() {
    let mut pairs: [ModifierPair; PAIR_COUNT] = Default::default();
    pairs[0] = pair(Operator::Div, 0.0, Operator::Div, 0.0, true);
    assert_eq!(evaluate(10.0, &pairs, Wire::Left), 10.0);
    assert_eq!(evaluate(10.0, &pairs, Wire::Right), 10.0);
}

#[test]
fn test_evaluate_order_sensitive() {
    // (10 - 2) / 2 = 4, not 10 / 2 - 2 = 3
    let mut pairs: [ModifierPair; PAIR_COUNT] = Default::default();
    pairs[0] = pair(Operator::Sub, 2.0, Operator::Add, 0.0, true);
    pairs[1] = pair(Operator::Div, 2.0, Operator::Add, 0.0, true);
    assert_eq!(evaluate(10.0, &pairs, Wire::Left), 4.0);
}

#[test]
fn test_evaluate_skips_pending_and_empty_operands() {
    let mut pairs: [ModifierPair; PAIR_COUNT] = Default::default();
    pairs[0].enabled = true;
    pairs[0].left.operator = Operator::Mul;
    pairs[0].left.operand = Operand::Pending("abc".to_string());
    pairs[0].right.operator = Operator::Add;
    pairs[0].right.operand = Operand::Value(4.0);
    // Left skips its pending operand, right still applies.
    assert_eq!(evaluate(6.0, &pairs, Wire::Left), 6.0);
    assert_eq!(evaluate(6.0, &pairs, Wire::Right), 10.0);

    pairs[0].left.operand = Operand::Empty;
    assert_eq!(evaluate(6.0, &pairs, Wire::Left), 6.0);
}

#[test]
fn test_evaluate_disabled_pair_skips_both_sides() {
    let mut pairs: [ModifierPair; PAIR_COUNT] = Default::default();
    pairs[0] = pair(Operator::Add, 100.0, Operator::Add, 100.0, false);
    assert_eq!(evaluate(1.0, &pairs, Wire::Left), 1.0);
    assert_eq!(evaluate(1.0, &pairs, Wire::Right), 1.0);
}

#[test]
fn test_evaluate_non_finite_start_treated_as_zero() {
    let mut pairs: [ModifierPair; PAIR_COUNT] = Default::default();
    pairs[0] = pair(Operator::Add, 3.0, Operator::Add, 3.0, true);
    assert_eq!(evaluate(f64::NAN, &pairs, Wire::Left), 3.0);
    assert_eq!(evaluate(f64::INFINITY, &pairs, Wire::Right), 3.0);
}

#[test]
fn test_operator_apply_non_finite_operand_never_reaches_apply() {
    // Operand::as_f64 filters non-finite values before apply is called.
    assert_eq!(Operand::Value(f64::NAN).as_f64(), None);
    assert_eq!(Operand::Value(f64::INFINITY).as_f64(), None);
    assert_eq!(Operand::Value(2.0).as_f64(), Some(2.0));
}

#[test]
fn test_operator_symbols() {
    assert_eq!(Operator::from_symbol('+'), Some(Operator::Add));
    assert_eq!(Operator::from_symbol('-'), Some(Operator::Sub));
    assert_eq!(Operator::from_symbol('*'), Some(Operator::Mul));
    assert_eq!(Operator::from_symbol('/'), Some(Operator::Div));
    assert_eq!(Operator::from_symbol('×'), Some(Operator::Mul));
    assert_eq!(Operator::from_symbol('÷'), Some(Operator::Div));
    assert_eq!(Operator::from_symbol('x'), None);
    assert_eq!(Operator::Mul.symbol(), '*');
}

#[test]
fn test_combination_bits_and_display() {
    let c = Combination::new(0b0000_0001);
    assert!(c.pair_enabled(0));
    assert!(!c.pair_enabled(7));
    assert_eq!(c.to_string(), "10000000");

    let all = Combination::new(u8::MAX);
    assert_eq!(all.to_string(), "11111111");
    assert_eq!(Combination::NONE.to_string(), "00000000");
}

#[test]
fn test_combination_enumerate_ascending_and_exhaustive() {
    let combos: Vec<Combination> = Combination::enumerate().collect();
    assert_eq!(combos.len(), 256);
    assert_eq!(combos[0], Combination::NONE);
    assert_eq!(combos[255], Combination::new(u8::MAX));
    for (index, combo) in combos.iter().enumerate() {
        assert_eq!(combo.bits() as usize, index);
    }
}

#[test]
fn test_apply_combination_only_touches_flags() {
    let mut config = CircuitConfig::new();
    config.pairs[3].left = Modifier::new(Operator::Mul, 2.0);
    let before = config.pairs[3].left.clone();

    config.apply_combination(Combination::new(0b1000_1000));
    assert!(config.pairs[3].enabled);
    assert!(config.pairs[7].enabled);
    assert!(!config.pairs[0].enabled);
    assert_eq!(config.pairs[3].left, before);
    assert_eq!(config.enabled_combination(), Combination::new(0b1000_1000));
}

#[test]
fn test_reset_yields_canonical_empty_state() {
    let mut config = CircuitConfig::new();
    config.start_value = 99.0;
    config.pairs[2] = pair(Operator::Div, 7.0, Operator::Mul, 2.0, true);

    config.reset();
    assert_eq!(config, CircuitConfig::default());
    assert_eq!(config.start_value, 0.0);
    assert!(config.pairs.iter().all(|p| !p.enabled));
    assert!(config
        .pairs
        .iter()
        .all(|p| p.left.operator == Operator::Add && p.left.operand.is_empty()));

    // Idempotent from any starting point.
    config.reset();
    assert_eq!(config, CircuitConfig::default());
}

#[test]
fn test_target_completeness() {
    let mut target = Target::default();
    assert!(!target.is_complete());

    target.left = Some(5.0);
    assert!(!target.is_complete());
    assert_eq!(target.left_value(), Some(5.0));

    target.right = Some(f64::NAN);
    assert!(!target.is_complete());
    assert_eq!(target.right_value(), None);

    target.right = Some(-2.5);
    assert!(target.is_complete());

    target.clear();
    assert!(!target.is_complete());
    assert_eq!(target, Target::default());
}
