use crate::registry::NativeFunction;
use crate::rt_types::{Closure, Native};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Caller-owned storage for a variable.
///
/// A compiled expression borrows the `Var` for its whole lifetime and reads
/// it on every evaluation, so updating it with [`Var::set`] between
/// evaluations changes the result without recompiling. Reads and writes are
/// relaxed atomics: concurrent use is sound, but ordering a write against
/// another thread's evaluation is up to the caller.
#[derive(Default)]
pub struct Var(AtomicU64);

impl Var {
    pub fn new(value: f64) -> Self {
        Self(AtomicU64::new(value.to_bits()))
    }

    #[inline]
    pub fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn set(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Var").field(&self.get()).finish()
    }
}

/// Reads one field of a caller-defined record `B`.
pub type Accessor<B> = fn(&B) -> f64;

pub(crate) enum Value<'a, B: ?Sized> {
    Var(&'a Var),
    Offset(Accessor<B>),
    Const(f64),
    Function { f: Native, pure: bool },
    Closure { f: Closure<'a>, pure: bool },
}

impl<B: ?Sized> Clone for Value<'_, B> {
    fn clone(&self) -> Self {
        match self {
            Value::Var(v) => Value::Var(v),
            Value::Offset(get) => Value::Offset(*get),
            Value::Const(c) => Value::Const(*c),
            Value::Function { f, pure } => Value::Function { f: *f, pure: *pure },
            Value::Closure { f, pure } => Value::Closure {
                f: f.clone(),
                pure: *pure,
            },
        }
    }
}

/// One name the compiler can resolve, and what it resolves to.
///
/// `B` is the record type offset bindings read from at evaluation time; it
/// defaults to `()` for expressions that only use variables, constants and
/// functions.
///
/// ```
/// use exprtree::{Binding, Native, Var, compile};
///
/// let x = Var::new(2.0);
/// let bindings = [
///     Binding::var("x", &x),
///     Binding::constant("k", 10.0),
///     Binding::function("twice", Native::F1(|v| v * 2.0)).pure(),
/// ];
/// let expr = compile("twice(x) + k", &bindings).unwrap();
/// assert_eq!(expr.eval(), 14.0);
/// x.set(5.0);
/// assert_eq!(expr.eval(), 20.0);
/// ```
pub struct Binding<'a, B: ?Sized = ()> {
    pub(crate) name: Arc<str>,
    pub(crate) value: Value<'a, B>,
}

impl<'a, B: ?Sized> Binding<'a, B> {
    fn new(name: &str, value: Value<'a, B>) -> Self {
        Self {
            name: Arc::from(name),
            value,
        }
    }

    /// Binds `name` to caller-owned storage read on every evaluation.
    pub fn var(name: &str, var: &'a Var) -> Self {
        Self::new(name, Value::Var(var))
    }

    /// Binds `name` to a field of the record passed to [`Expr::eval_with`].
    /// Nothing is read at compile time.
    ///
    /// [`Expr::eval_with`]: crate::Expr::eval_with
    pub fn offset(name: &str, get: Accessor<B>) -> Self {
        Self::new(name, Value::Offset(get))
    }

    /// Binds `name` to a literal. Constants take part in folding.
    pub fn constant(name: &str, value: f64) -> Self {
        Self::new(name, Value::Const(value))
    }

    /// Binds `name` to a native callback. Calls must pass exactly
    /// `f.arity()` arguments.
    pub fn function(name: &str, f: Native) -> Self {
        Self::new(name, Value::Function { f, pure: false })
    }

    /// Binds `name` to a callback carrying its own context.
    pub fn closure(name: &str, f: Closure<'a>) -> Self {
        Self::new(name, Value::Closure { f, pure: false })
    }

    /// Binds a function declared with `#[function]`.
    pub fn native<F: NativeFunction>() -> Self {
        let binding = Self::function(F::NAME, F::native());
        if F::PURE { binding.pure() } else { binding }
    }

    /// Marks a function or closure as pure: same arguments, same result, no
    /// side effects. Calls whose arguments are all constant are then
    /// evaluated once at compile time. Has no effect on other bindings.
    pub fn pure(mut self) -> Self {
        match &mut self.value {
            Value::Function { pure, .. } | Value::Closure { pure, .. } => *pure = true,
            Value::Var(_) | Value::Offset(_) | Value::Const(_) => {}
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of arguments for functions and closures, `None` otherwise.
    pub fn arity(&self) -> Option<usize> {
        match &self.value {
            Value::Function { f, .. } => Some(f.arity()),
            Value::Closure { f, .. } => Some(f.arity()),
            Value::Var(_) | Value::Offset(_) | Value::Const(_) => None,
        }
    }

    pub fn is_pure(&self) -> bool {
        match &self.value {
            Value::Function { pure, .. } | Value::Closure { pure, .. } => *pure,
            Value::Const(_) => true,
            Value::Var(_) | Value::Offset(_) => false,
        }
    }
}

impl<B: ?Sized> Clone for Binding<'_, B> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            value: self.value.clone(),
        }
    }
}

impl<B: ?Sized> fmt::Debug for Binding<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.value {
            Value::Var(v) => format!("var {}", v.get()),
            Value::Offset(_) => "offset".to_string(),
            Value::Const(c) => format!("const {c}"),
            Value::Function { f, pure } => format!("fn{}{}", f.arity(), if *pure { " pure" } else { "" }),
            Value::Closure { f, pure } => {
                format!("closure{}{}", f.arity(), if *pure { " pure" } else { "" })
            }
        };
        write!(f, "Binding({}: {})", self.name, kind)
    }
}
