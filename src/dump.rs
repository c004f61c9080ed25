use crate::ast::Node;
use std::fmt;

/// Diagnostic rendering of a compiled tree, one node per line, children
/// indented under their parent:
///
/// ```text
/// fn2 + pure
///   var x
///   const 14
/// ```
///
/// This is for humans; it does not round-trip to source syntax.
pub struct Dump<'e, 'a, B: ?Sized> {
    pub(crate) root: &'e Node<'a, B>,
}

impl<B: ?Sized> fmt::Display for Dump<'_, '_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.root, 0)
    }
}

fn write_node<B: ?Sized>(f: &mut fmt::Formatter<'_>, node: &Node<'_, B>, depth: usize) -> fmt::Result {
    write!(f, "{:indent$}", "", indent = depth * 2)?;
    match node {
        Node::Const(v) => writeln!(f, "const {v}")?,
        Node::Var { name, .. } => writeln!(f, "var {name}")?,
        Node::Offset { name, .. } => writeln!(f, "offset {name}")?,
        Node::Function { name, pure, args, .. } => {
            writeln!(f, "fn{} {}{}", args.len(), name, if *pure { " pure" } else { "" })?
        }
        Node::Closure { name, pure, args, .. } => {
            writeln!(f, "closure{} {}{}", args.len(), name, if *pure { " pure" } else { "" })?
        }
    }
    for child in node.children() {
        write_node(f, child, depth + 1)?;
    }
    Ok(())
}
