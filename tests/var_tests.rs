use exprtree::{Binding, Var, compile};

#[test]
fn evaluation_is_idempotent() {
    let a = Var::new(0.1);
    let b = Var::new(0.7);
    let expr = compile(
        "sin(a) * b / 3 + a^b - sqrt(b)",
        &[Binding::var("a", &a), Binding::var("b", &b)],
    )
    .unwrap();
    let first = expr.eval();
    let second = expr.eval();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn updates_are_seen_without_recompiling() {
    let x = Var::new(1.0);
    let expr = compile("x * 2", &[Binding::var("x", &x)]).unwrap();
    assert_eq!(expr.eval(), 2.0);
    x.set(21.0);
    assert_eq!(expr.eval(), 42.0);
    x.set(-0.5);
    assert_eq!(expr.eval(), -1.0);
}

#[test]
fn one_var_under_two_names() {
    let x = Var::new(3.0);
    let bindings = [Binding::var("x", &x), Binding::var("alias", &x)];
    let expr = compile("x + alias", &bindings).unwrap();
    assert_eq!(expr.eval(), 6.0);
    assert_eq!(expr.vars(), vec!["x", "alias"]);
}

#[test]
fn var_defaults_to_zero() {
    let v = Var::default();
    assert_eq!(v.get(), 0.0);
    v.set(f64::NAN);
    assert!(v.get().is_nan());
    assert_eq!(format!("{:?}", Var::new(1.5)), "Var(1.5)");
}

#[test]
fn special_values_flow_through() {
    let x = Var::new(f64::INFINITY);
    let expr = compile("x - x", &[Binding::var("x", &x)]).unwrap();
    assert!(expr.eval().is_nan());
    x.set(1.0);
    assert_eq!(expr.eval(), 0.0);
}

#[test]
fn dropping_the_expression_releases_the_borrow() {
    let x = Var::new(1.0);
    {
        let expr = compile("x + 1", &[Binding::var("x", &x)]).unwrap();
        assert_eq!(expr.eval(), 2.0);
    }
    let moved = x;
    assert_eq!(moved.get(), 1.0);
}
