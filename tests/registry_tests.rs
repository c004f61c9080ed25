use exprtree::{Binding, FnMeta, Var, compile, function, inventory, registered};

#[function(pure)]
fn double(x: f64) -> f64 {
    x * 2.0
}

#[function]
fn noisy(x: f64, y: f64) -> f64 {
    x - y
}

mod nested {
    use exprtree::function;

    #[function(pure)]
    pub fn cube(x: f64) -> f64 {
        x * x * x
    }
}

#[test]
fn registered_functions_are_all_collected() {
    let metas: Vec<&FnMeta> = inventory::iter::<FnMeta>.into_iter().collect();
    let find = |name: &str| metas.iter().find(|m| m.name == name).copied();

    let d = find("double").unwrap();
    assert!(d.pure);
    assert_eq!(d.native.arity(), 1);

    let n = find("noisy").unwrap();
    assert!(!n.pure);
    assert_eq!(n.native.arity(), 2);

    let c = find("cube").unwrap();
    assert!(c.mod_path.ends_with("nested"));
}

#[test]
fn compile_against_the_registry() {
    let expr = compile("double(cube(2)) + noisy(5, 1)", &registered()).unwrap();
    assert_eq!(expr.eval(), 16.0 + 4.0);
    // double(cube(2)) folded; noisy(5, 1) kept
    assert_eq!(expr.node_count(), 5);
}

#[test]
fn registry_combines_with_caller_bindings() {
    let x = Var::new(3.0);
    let mut bindings = vec![Binding::var("x", &x)];
    bindings.extend(registered());
    let expr = compile("double(x)", &bindings).unwrap();
    assert_eq!(expr.eval(), 6.0);
    x.set(-1.0);
    assert_eq!(expr.eval(), -2.0);
}

#[test]
fn marker_type_lives_beside_the_function() {
    let b: Binding = Binding::native::<nested::cube>();
    assert_eq!(b.name(), "cube");
    assert_eq!(nested::cube(3.0), 27.0);
}
