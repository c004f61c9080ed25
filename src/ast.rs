use crate::binding::{Accessor, Var};
use crate::rt_types::{Closure, Native};
use std::sync::Arc;

/// A node of a compiled expression.
///
/// Every parent owns its children; a call node holds exactly as many as its
/// callback's arity. Pure calls whose arguments are all constants never
/// survive parsing: they are folded into `Const` as soon as they are built.
pub(crate) enum Node<'a, B: ?Sized> {
    /// A literal, a constant binding, or a folded subtree.
    Const(f64),
    /// Caller-owned storage, read at every evaluation.
    Var { name: Arc<str>, var: &'a Var },
    /// A field of the record supplied at evaluation time.
    Offset { name: Arc<str>, get: Accessor<B> },
    /// A plain native callback, operators included.
    Function {
        name: Arc<str>,
        f: Native,
        pure: bool,
        args: Box<[Node<'a, B>]>,
    },
    /// A callback carrying its own context.
    Closure {
        name: Arc<str>,
        f: Closure<'a>,
        pure: bool,
        args: Box<[Node<'a, B>]>,
    },
}

impl<'a, B: ?Sized> Node<'a, B> {
    pub(crate) fn is_const(&self) -> bool {
        matches!(self, Node::Const(_))
    }

    pub(crate) fn children(&self) -> &[Node<'a, B>] {
        match self {
            Node::Const(_) | Node::Var { .. } | Node::Offset { .. } => &[],
            Node::Function { args, .. } | Node::Closure { args, .. } => args,
        }
    }

    pub(crate) fn count(&self) -> usize {
        1 + self.children().iter().map(Node::count).sum::<usize>()
    }
}
