use crate::ast::Node;
use crate::rt_types::{Closure, Native};

/// Walks the tree, children first and arguments left to right.
///
/// Arity was checked when the tree was built, so argument slices are indexed
/// directly. Offset nodes read NaN when no record is supplied.
pub(crate) fn eval_node<B: ?Sized>(node: &Node<'_, B>, base: Option<&B>) -> f64 {
    match node {
        Node::Const(v) => *v,
        Node::Var { var, .. } => var.get(),
        Node::Offset { get, .. } => match base {
            Some(record) => get(record),
            None => f64::NAN,
        },
        Node::Function { f, args, .. } => {
            let arg = |i: usize| eval_node(&args[i], base);
            match f {
                Native::F0(f) => f(),
                Native::F1(f) => f(arg(0)),
                Native::F2(f) => f(arg(0), arg(1)),
                Native::F3(f) => f(arg(0), arg(1), arg(2)),
                Native::F4(f) => f(arg(0), arg(1), arg(2), arg(3)),
                Native::F5(f) => f(arg(0), arg(1), arg(2), arg(3), arg(4)),
                Native::F6(f) => f(arg(0), arg(1), arg(2), arg(3), arg(4), arg(5)),
                Native::F7(f) => f(arg(0), arg(1), arg(2), arg(3), arg(4), arg(5), arg(6)),
            }
        }
        Node::Closure { f, args, .. } => {
            let arg = |i: usize| eval_node(&args[i], base);
            match f {
                Closure::C0(f) => f(),
                Closure::C1(f) => f(arg(0)),
                Closure::C2(f) => f(arg(0), arg(1)),
                Closure::C3(f) => f(arg(0), arg(1), arg(2)),
                Closure::C4(f) => f(arg(0), arg(1), arg(2), arg(3)),
                Closure::C5(f) => f(arg(0), arg(1), arg(2), arg(3), arg(4)),
                Closure::C6(f) => f(arg(0), arg(1), arg(2), arg(3), arg(4), arg(5)),
                Closure::C7(f) => f(arg(0), arg(1), arg(2), arg(3), arg(4), arg(5), arg(6)),
            }
        }
    }
}
