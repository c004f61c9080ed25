use crate::ast::Node;
use crate::eval::eval_node;
use log::trace;

/// Folds a freshly built node whose children are already folded.
///
/// A pure call with only constant arguments is evaluated now and replaced by
/// its value; the arguments are dropped with the old node. Anything reading
/// a variable, an offset or an impure callback is left as is.
pub(crate) fn fold<'a, B: ?Sized>(node: Node<'a, B>) -> Node<'a, B> {
    let foldable = match &node {
        Node::Function {
            pure: true, args, ..
        }
        | Node::Closure {
            pure: true, args, ..
        } => args.iter().all(Node::is_const),
        _ => false,
    };
    if !foldable {
        return node;
    }
    let value = eval_node(&node, None);
    if let Node::Function { name, args, .. } | Node::Closure { name, args, .. } = &node {
        trace!("folded {}/{} into {}", name, args.len(), value);
    }
    Node::Const(value)
}
