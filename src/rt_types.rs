use std::fmt;
use std::sync::Arc;

/// Largest number of arguments a function or closure binding can take.
pub const MAX_ARITY: usize = 7;

pub type Fn0 = fn() -> f64;
pub type Fn1 = fn(f64) -> f64;
pub type Fn2 = fn(f64, f64) -> f64;
pub type Fn3 = fn(f64, f64, f64) -> f64;
pub type Fn4 = fn(f64, f64, f64, f64) -> f64;
pub type Fn5 = fn(f64, f64, f64, f64, f64) -> f64;
pub type Fn6 = fn(f64, f64, f64, f64, f64, f64) -> f64;
pub type Fn7 = fn(f64, f64, f64, f64, f64, f64, f64) -> f64;

/// A plain native callback. The variant fixes the arity, so a call node
/// always holds exactly as many children as the pointer takes.
///
/// ```
/// use exprtree::Native;
/// let hyp = Native::F2(f64::hypot);
/// assert_eq!(hyp.arity(), 2);
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Native {
    F0(Fn0),
    F1(Fn1),
    F2(Fn2),
    F3(Fn3),
    F4(Fn4),
    F5(Fn5),
    F6(Fn6),
    F7(Fn7),
}

impl Native {
    pub fn arity(&self) -> usize {
        match self {
            Native::F0(_) => 0,
            Native::F1(_) => 1,
            Native::F2(_) => 2,
            Native::F3(_) => 3,
            Native::F4(_) => 4,
            Native::F5(_) => 5,
            Native::F6(_) => 6,
            Native::F7(_) => 7,
        }
    }
}

/// A callback that carries its own context. Whatever the closure captures is
/// handed back to it on every call; it must be safe to read from several
/// threads because one compiled expression may be evaluated concurrently.
#[derive(Clone)]
pub enum Closure<'a> {
    C0(Arc<dyn Fn() -> f64 + Send + Sync + 'a>),
    C1(Arc<dyn Fn(f64) -> f64 + Send + Sync + 'a>),
    C2(Arc<dyn Fn(f64, f64) -> f64 + Send + Sync + 'a>),
    C3(Arc<dyn Fn(f64, f64, f64) -> f64 + Send + Sync + 'a>),
    C4(Arc<dyn Fn(f64, f64, f64, f64) -> f64 + Send + Sync + 'a>),
    C5(Arc<dyn Fn(f64, f64, f64, f64, f64) -> f64 + Send + Sync + 'a>),
    C6(Arc<dyn Fn(f64, f64, f64, f64, f64, f64) -> f64 + Send + Sync + 'a>),
    C7(Arc<dyn Fn(f64, f64, f64, f64, f64, f64, f64) -> f64 + Send + Sync + 'a>),
}

impl<'a> Closure<'a> {
    pub fn c0(f: impl Fn() -> f64 + Send + Sync + 'a) -> Self {
        Closure::C0(Arc::new(f))
    }
    pub fn c1(f: impl Fn(f64) -> f64 + Send + Sync + 'a) -> Self {
        Closure::C1(Arc::new(f))
    }
    pub fn c2(f: impl Fn(f64, f64) -> f64 + Send + Sync + 'a) -> Self {
        Closure::C2(Arc::new(f))
    }
    pub fn c3(f: impl Fn(f64, f64, f64) -> f64 + Send + Sync + 'a) -> Self {
        Closure::C3(Arc::new(f))
    }
    pub fn c4(f: impl Fn(f64, f64, f64, f64) -> f64 + Send + Sync + 'a) -> Self {
        Closure::C4(Arc::new(f))
    }
    pub fn c5(f: impl Fn(f64, f64, f64, f64, f64) -> f64 + Send + Sync + 'a) -> Self {
        Closure::C5(Arc::new(f))
    }
    pub fn c6(f: impl Fn(f64, f64, f64, f64, f64, f64) -> f64 + Send + Sync + 'a) -> Self {
        Closure::C6(Arc::new(f))
    }
    pub fn c7(f: impl Fn(f64, f64, f64, f64, f64, f64, f64) -> f64 + Send + Sync + 'a) -> Self {
        Closure::C7(Arc::new(f))
    }

    pub fn arity(&self) -> usize {
        match self {
            Closure::C0(_) => 0,
            Closure::C1(_) => 1,
            Closure::C2(_) => 2,
            Closure::C3(_) => 3,
            Closure::C4(_) => 4,
            Closure::C5(_) => 5,
            Closure::C6(_) => 6,
            Closure::C7(_) => 7,
        }
    }
}

impl fmt::Debug for Closure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Closure/{}", self.arity())
    }
}
