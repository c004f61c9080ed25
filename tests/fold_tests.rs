use exprtree::{Binding, Closure, Native, Var, compile};
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn constant_expression_folds_to_one_node() {
    let expr = compile("2+3*4", &[]).unwrap();
    assert_eq!(expr.constant(), Some(14.0));
    assert_eq!(expr.node_count(), 1);
    assert_eq!(expr.dump().to_string(), "const 14\n");
    assert_eq!(expr.eval(), 14.0);
}

#[test]
fn builtin_calls_on_constants_fold() {
    let expr = compile("sqrt(16) + max(1, 2) * pi", &[]).unwrap();
    assert_eq!(expr.node_count(), 1);
    assert_eq!(expr.constant(), Some(4.0 + 2.0 * std::f64::consts::PI));
}

#[test]
fn variables_block_folding_only_where_they_appear() {
    let x = Var::new(1.0);
    let expr = compile("x + 2*3", &[Binding::var("x", &x)]).unwrap();
    assert_eq!(expr.constant(), None);
    assert_eq!(expr.node_count(), 3);
    assert_eq!(expr.dump().to_string(), "fn2 + pure\n  var x\n  const 6\n");

    let expr = compile("x * (sin(0) + 1)", &[Binding::var("x", &x)]).unwrap();
    assert_eq!(expr.node_count(), 3);
    assert_eq!(expr.eval(), 1.0);
}

#[test]
fn constant_bindings_fold() {
    let bindings = [Binding::constant("k", 2.0)];
    let expr = compile("k * 3 + k", &bindings).unwrap();
    assert_eq!(expr.constant(), Some(8.0));
}

#[test]
fn impure_function_is_kept() {
    let bindings = [Binding::function("sq", Native::F1(|x| x * x))];
    let expr = compile("sq(3)", &bindings).unwrap();
    assert_eq!(expr.constant(), None);
    assert_eq!(expr.node_count(), 2);
    assert_eq!(expr.eval(), 9.0);
}

#[test]
fn pure_function_folds() {
    let bindings = [Binding::function("sq", Native::F1(|x| x * x)).pure()];
    let expr = compile("sq(3) + 1", &bindings).unwrap();
    assert_eq!(expr.constant(), Some(10.0));
}

#[test]
fn impure_closure_runs_at_every_evaluation() {
    let calls = AtomicUsize::new(0);
    let bindings = [Binding::closure(
        "tick",
        Closure::c0(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            1.0
        }),
    )];
    let expr = compile("tick() + 1", &bindings).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(expr.node_count(), 3);
    assert_eq!(expr.eval(), 2.0);
    assert_eq!(expr.eval(), 2.0);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn pure_closure_runs_once_at_compile_time() {
    let calls = AtomicUsize::new(0);
    let bindings = [Binding::closure(
        "tick",
        Closure::c0(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            1.0
        }),
    )
    .pure()];
    let expr = compile("tick + 1", &bindings).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(expr.constant(), Some(2.0));
    expr.eval();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn pure_call_with_variable_argument_is_kept() {
    let x = Var::new(2.0);
    let bindings = [
        Binding::var("x", &x),
        Binding::closure("scale", Closure::c1(|v| v * 10.0)).pure(),
    ];
    let expr = compile("scale(x)", &bindings).unwrap();
    assert_eq!(expr.node_count(), 2);
    assert_eq!(expr.dump().to_string(), "closure1 scale pure\n  var x\n");
    assert_eq!(expr.eval(), 20.0);
}

#[test]
fn vars_lists_names_in_first_appearance_order() {
    let x = Var::new(1.0);
    let y = Var::new(2.0);
    let bindings = [
        Binding::var("x", &x),
        Binding::var("y", &y),
        Binding::constant("k", 3.0),
    ];
    let expr = compile("y + x*y + k + x", &bindings).unwrap();
    assert_eq!(expr.vars(), vec!["y", "x"]);
    assert!(compile("1 + 2", &[]).unwrap().vars().is_empty());
}

#[test]
fn debug_output_uses_the_dump() {
    let expr = compile("-(1)", &[]).unwrap();
    assert_eq!(format!("{:?}", expr), "Expr\nconst -1\n");
}
