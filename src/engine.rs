use crate::ast::Node;
use crate::binding::Binding;
use crate::collect::collect_vars;
use crate::dump::Dump;
use crate::error::CompileError;
use crate::eval::eval_node;
use crate::parser::Parser;
use crate::resolver::Scope;
use log::debug;
use std::fmt;

/// Compiles `expression` against `bindings`.
///
/// Constant subexpressions are folded while parsing, so the returned tree
/// only keeps work that depends on variables or impure callbacks. On failure
/// nothing is returned but the error, whose `offset` is the 0-based byte
/// offset of the first offending token.
///
/// Expressions that read fields of a record through offset bindings are
/// compiled with [`compile_with`] instead.
///
/// ```
/// use exprtree::{Binding, Var, compile};
///
/// let x = Var::new(3.0);
/// let expr = compile("2x^2 + 1", &[Binding::var("x", &x)]).unwrap();
/// assert_eq!(expr.eval(), 19.0);
///
/// let err = compile("1 + * 2", &[]).unwrap_err();
/// assert_eq!(err.offset, 4);
/// ```
pub fn compile<'a>(expression: &str, bindings: &[Binding<'a>]) -> Result<Expr<'a>, CompileError> {
    compile_with(expression, bindings)
}

/// Compiles `expression` against bindings whose offsets read from records
/// of type `B`. Evaluate the result with [`Expr::eval_with`].
///
/// ```
/// use exprtree::{Binding, compile_with, field};
///
/// struct Point { x: f64, y: f64 }
///
/// let bindings = [
///     Binding::offset("x", field!(Point, x)),
///     Binding::offset("y", field!(Point, y)),
/// ];
/// let norm = compile_with("sqrt(x^2 + y^2)", &bindings).unwrap();
/// assert_eq!(norm.eval_with(&Point { x: 3.0, y: 4.0 }), 5.0);
/// assert_eq!(norm.eval_with(&Point { x: 6.0, y: 8.0 }), 10.0);
/// ```
pub fn compile_with<'a, B: ?Sized>(
    expression: &str,
    bindings: &[Binding<'a, B>],
) -> Result<Expr<'a, B>, CompileError> {
    let parsed = Parser::new(expression, Scope::new(bindings)).and_then(Parser::parse);
    match parsed {
        Ok(root) => {
            let expr = Expr { root };
            debug!(
                "compiled {:?} into {} node(s)\n{}",
                expression,
                expr.node_count(),
                expr.dump()
            );
            Ok(expr)
        }
        Err(e) => {
            debug!("failed to compile {:?}: {}", expression, e);
            Err(e)
        }
    }
}

/// Compiles an expression without bindings, evaluates it once and drops it.
///
/// Only literals and builtins are available. Use `.unwrap_or(f64::NAN)` for
/// a NaN-on-error result.
///
/// ```
/// assert_eq!(exprtree::interp("sqrt(16) + 2^3").unwrap(), 12.0);
/// assert!(exprtree::interp("1 +").unwrap_or(f64::NAN).is_nan());
/// ```
pub fn interp(expression: &str) -> Result<f64, CompileError> {
    let expr = compile(expression, &[])?;
    Ok(expr.eval())
}

/// A compiled expression.
///
/// The tree borrows every [`Var`](crate::Var) it was bound to for `'a` and
/// reads them at each evaluation. Offset bindings read from the record given
/// to [`eval_with`](Self::eval_with), so one tree can be evaluated against
/// any number of records. Evaluation keeps no state between calls; `Expr` is
/// `Send + Sync` and may be shared by threads. Dropping it releases the tree.
pub struct Expr<'a, B: ?Sized = ()> {
    root: Node<'a, B>,
}

impl<'a, B: ?Sized> Expr<'a, B> {
    /// Evaluates without a record. Offset bindings read as NaN.
    #[inline]
    pub fn eval(&self) -> f64 {
        eval_node(&self.root, None)
    }

    /// Evaluates with offset bindings reading from `record`.
    #[inline]
    pub fn eval_with(&self, record: &B) -> f64 {
        eval_node(&self.root, Some(record))
    }

    /// The value of a fully folded expression.
    pub fn constant(&self) -> Option<f64> {
        match self.root {
            Node::Const(v) => Some(v),
            _ => None,
        }
    }

    /// Number of nodes left after folding.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    /// Variable and offset names the expression reads, in first-appearance order.
    pub fn vars(&self) -> Vec<&str> {
        collect_vars(&self.root)
    }

    pub fn dump(&self) -> Dump<'_, 'a, B> {
        Dump { root: &self.root }
    }

    /// Writes [`dump`](Self::dump) to stdout.
    pub fn print(&self) {
        print!("{}", self.dump());
    }
}

impl<B: ?Sized> fmt::Debug for Expr<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr\n{}", self.dump())
    }
}
