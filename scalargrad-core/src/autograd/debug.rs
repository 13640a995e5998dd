// scalargrad-core/src/autograd/debug.rs

use crate::autograd::graph::Graph;
use crate::autograd::node::{NodeId, Operator};
use std::fmt;

/// Snapshot of one node for console diagnostics, optionally tied to the child it feeds.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeReport {
    pub id: NodeId,
    pub value: f64,
    pub grad: f64,
    pub operator: Operator,
    pub label: String,
    pub child_label: Option<String>,
}

impl fmt::Display for NodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==== Node ====")?;
        writeln!(f, "Value: {}", self.value)?;
        writeln!(f, "Operator: {}", self.operator)?;
        writeln!(f, "Child: {}", self.child_label.as_deref().unwrap_or("--"))?;
        writeln!(f, "Label: {}", self.label)?;
        writeln!(f, "Derivative with respect to L: {}", self.grad)?;
        writeln!(f)
    }
}

impl Graph {
    /// Builds the diagnostic report of `id`, naming `child` as its consumer if given.
    pub fn report(&self, id: NodeId, child: Option<NodeId>) -> NodeReport {
        let node = &self[id];
        NodeReport {
            id,
            value: node.value(),
            grad: node.grad(),
            operator: node.operator(),
            label: node.label().to_string(),
            child_label: child.map(|c| self[c].label().to_string()),
        }
    }

    /// Walks every parent edge depth-first from `root` and reports each parent together
    /// with the child it feeds, descending into a parent before moving to its sibling.
    /// Shared nodes are reported once per edge, so the output grows with the number of
    /// paths, not the number of nodes.
    pub fn trace_to_leaves(&self, root: NodeId) -> Vec<NodeReport> {
        let mut reports = Vec::new();
        let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
        while let Some(top) = stack.last_mut() {
            let (child, cursor) = *top;
            match self[child].parents().get(cursor) {
                Some(&parent) => {
                    top.1 += 1;
                    reports.push(self.report(parent, Some(child)));
                    stack.push((parent, 0));
                }
                None => {
                    stack.pop();
                }
            }
        }
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display_block() {
        let mut g = Graph::new();
        let a = g.leaf(3.0, "a");
        let b = g.leaf(4.0, "b");
        let c = g.mul(a, b, "c");
        g.backward(c);

        let text = g.report(c, None).to_string();
        assert_eq!(
            text,
            "==== Node ====\nValue: 12\nOperator: *\nChild: --\nLabel: c\nDerivative with respect to L: 1\n\n"
        );
        let leaf = g.report(a, Some(c));
        assert_eq!(leaf.child_label.as_deref(), Some("c"));
        assert_eq!(leaf.operator, Operator::None);
        assert!(leaf.to_string().contains("Operator: \n"));
    }

    #[test]
    fn test_trace_to_leaves_reports_every_edge() {
        let mut g = Graph::new();
        let a = g.leaf(3.0, "a");
        let b = g.leaf(4.0, "b");
        let c = g.mul(a, b, "c");
        let d = g.sub(c, a, "d");

        let labels: Vec<(String, Option<String>)> = g
            .trace_to_leaves(d)
            .into_iter()
            .map(|r| (r.label, r.child_label))
            .collect();
        let edge = |p: &str, c: &str| (p.to_string(), Some(c.to_string()));
        assert_eq!(
            labels,
            vec![edge("c", "d"), edge("a", "c"), edge("b", "c"), edge("a", "d")]
        );
    }
}
