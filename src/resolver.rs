use crate::binding::Binding;
use crate::builtins::{self, Builtin};
use log::warn;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// What an identifier in the source text refers to.
pub(crate) enum Symbol<'s, 'a, B: ?Sized> {
    User(&'s Binding<'a, B>),
    Builtin(&'static Builtin),
}

impl<B: ?Sized> Clone for Symbol<'_, '_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized> Copy for Symbol<'_, '_, B> {}

/// Name lookup for one compile call: caller bindings first, then builtins.
///
/// When several bindings share a name the first one wins.
pub(crate) struct Scope<'s, 'a, B: ?Sized> {
    names: HashMap<&'s str, &'s Binding<'a, B>>,
}

impl<'s, 'a, B: ?Sized> Scope<'s, 'a, B> {
    pub(crate) fn new(bindings: &'s [Binding<'a, B>]) -> Self {
        let mut names = HashMap::with_capacity(bindings.len());
        for binding in bindings {
            match names.entry(binding.name()) {
                Entry::Vacant(slot) => {
                    slot.insert(binding);
                }
                Entry::Occupied(_) => {
                    warn!("duplicate binding '{}' ignored; the first one wins", binding.name());
                }
            }
        }
        Self { names }
    }

    pub(crate) fn resolve(&self, ident: &str) -> Option<Symbol<'s, 'a, B>> {
        if let Some(binding) = self.names.get(ident) {
            return Some(Symbol::User(*binding));
        }
        builtins::find(ident).map(Symbol::Builtin)
    }
}
