/// Builds a `Vec<Binding>` from functions declared with `#[function]`.
///
/// ```
/// use exprtree::{bindings, compile, function};
///
/// #[function(pure)]
/// fn sq(x: f64) -> f64 {
///     x * x
/// }
///
/// let expr = compile("sq(3) + 1", &bindings![sq]).unwrap();
/// assert_eq!(expr.constant(), Some(10.0));
/// ```
#[macro_export]
macro_rules! bindings {
    ($($f:path),* $(,)?) => {
        ::std::vec![$($crate::Binding::native::<$f>()),*]
    };
}

/// An accessor reading `field` out of a `ty` record, for
/// [`Binding::offset`](crate::Binding::offset). Numeric fields of any
/// primitive type are widened to `f64`.
///
/// ```
/// use exprtree::{Binding, compile_with, field};
///
/// struct Sample { t: f32, n: u32 }
///
/// let bindings = [
///     Binding::offset("t", field!(Sample, t)),
///     Binding::offset("n", field!(Sample, n)),
/// ];
/// let expr = compile_with("n * t", &bindings).unwrap();
/// assert_eq!(expr.eval_with(&Sample { t: 0.5, n: 8 }), 4.0);
/// ```
#[macro_export]
macro_rules! field {
    ($ty:ty, $field:ident) => {
        (|record: &$ty| record.$field as f64) as fn(&$ty) -> f64
    };
}
