use crate::binding::Binding;
use crate::rt_types::Native;
use log::debug;

/// Implemented by the marker type `#[function]` generates next to each
/// annotated function. The marker shares the function's name, so
/// `Binding::native::<my_fn>()` and `bindings![my_fn]` refer to it directly.
pub trait NativeFunction {
    const NAME: &'static str;
    const PURE: bool;
    fn native() -> Native;
}

/// One `#[function]` submitted to the program-wide registry.
#[derive(Debug, Clone, Copy)]
pub struct FnMeta {
    pub name: &'static str,
    pub native: Native,
    pub pure: bool,
    pub mod_path: &'static str,
}

inventory::collect!(FnMeta);

/// Bindings for every `#[function]` linked into the program.
///
/// Order is unspecified. Two annotated functions with the same name in
/// different modules both appear; the first one passed to `compile` wins.
pub fn registered<'a, B: ?Sized>() -> Vec<Binding<'a, B>> {
    let out: Vec<Binding<'a, B>> = inventory::iter::<FnMeta>
        .into_iter()
        .map(|meta| {
            let binding = Binding::function(meta.name, meta.native);
            if meta.pure { binding.pure() } else { binding }
        })
        .collect();
    debug!("{} registered function(s)", out.len());
    out
}
