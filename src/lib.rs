//! Compile arithmetic expressions once, evaluate them many times.
//!
//! Source text is parsed by recursive descent straight into a tree of
//! constants, variable reads and native calls. Pure subexpressions are
//! folded into constants as they are built, so evaluation only walks what
//! actually depends on runtime input.
//!
//! ```
//! use exprtree::{Binding, Closure, Var, compile};
//!
//! let t = Var::new(0.0);
//! let gain = 2.5;
//! let bindings = [
//!     Binding::var("t", &t),
//!     Binding::closure("amp", Closure::c1(move |x| x * gain)),
//! ];
//! let wave = compile("amp(sin(t)) + 2*3", &bindings).unwrap();
//! for step in 0..4 {
//!     t.set(step as f64 * 0.25);
//!     let y = wave.eval();
//!     assert!((y - (2.5 * t.get().sin() + 6.0)).abs() < 1e-12);
//! }
//! ```

mod ast;
mod binding;
mod builtins;
mod collect;
mod dump;
mod engine;
mod error;
mod eval;
mod lexer;
mod macros;
mod optimizer;
mod parser;
mod registry;
mod resolver;
mod rt_types;

pub use binding::{Accessor, Binding, Var};
pub use dump::Dump;
pub use engine::{Expr, compile, compile_with, interp};
pub use error::{CompileError, ErrorClass, ErrorKind};
pub use registry::{FnMeta, NativeFunction, registered};
pub use rt_types::{Closure, Fn0, Fn1, Fn2, Fn3, Fn4, Fn5, Fn6, Fn7, MAX_ARITY, Native};

// Re-export inventory and the #[function] macro for user crates
pub use exprtree_macros::function;
pub use inventory;
