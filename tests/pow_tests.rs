use exprtree::{Binding, Var, compile, interp};

#[test]
fn pow_basic() {
    assert_eq!(interp("2^10").unwrap(), 1024.0);
    assert_eq!(interp("pow(2, 10)").unwrap(), 1024.0);
    assert!((interp("9^0.5").unwrap() - 3.0).abs() < 1e-12);
}

#[test]
fn pow_is_right_associative() {
    assert_eq!(interp("2^3^2").unwrap(), 512.0);
    assert_eq!(interp("(2^3)^2").unwrap(), 64.0);
}

#[test]
fn pow_exponent_may_carry_a_sign() {
    assert_eq!(interp("2^-1").unwrap(), 0.5);
    assert_eq!(interp("2^+3").unwrap(), 8.0);
    assert_eq!(interp("2^-1^2").unwrap(), 0.5);
}

#[test]
fn pow_binds_tighter_than_mul() {
    assert_eq!(interp("3*2^2").unwrap(), 12.0);
    assert_eq!(interp("2^2*3").unwrap(), 12.0);
}

#[test]
fn pow_ieee_edge_cases() {
    assert_eq!(interp("0^0").unwrap(), 1.0);
    assert!(interp("(-8)^(1/3)").unwrap().is_nan());
    assert_eq!(interp("0^-1").unwrap(), f64::INFINITY);
    assert_eq!(interp("10^400").unwrap(), f64::INFINITY);
}

#[test]
fn pow_with_variables() {
    let a = Var::new(4.0);
    let expr = compile("a^1.5 + a^2.5", &[Binding::var("a", &a)]).unwrap();
    assert!((expr.eval() - 40.0).abs() < 1e-9);
    a.set(9.0);
    assert!((expr.eval() - 270.0).abs() < 1e-9);
}
