use crate::ast::Node;
use std::collections::HashSet;

/// Names of the variable and offset bindings a tree reads, in left-to-right
/// first-appearance order.
pub(crate) fn collect_vars<'n, B: ?Sized>(node: &'n Node<'_, B>) -> Vec<&'n str> {
    fn walk<'n, B: ?Sized>(node: &'n Node<'_, B>, seen: &mut HashSet<&'n str>, out: &mut Vec<&'n str>) {
        match node {
            Node::Const(_) => {}
            Node::Var { name, .. } | Node::Offset { name, .. } => {
                let name: &'n str = name;
                if seen.insert(name) {
                    out.push(name);
                }
            }
            Node::Function { args, .. } | Node::Closure { args, .. } => {
                for a in args.iter() {
                    walk(a, seen, out);
                }
            }
        }
    }
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(node, &mut seen, &mut out);
    out
}
