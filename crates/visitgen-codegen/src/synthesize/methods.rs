use super::Synthesize;
use crate::{
    ir::{Event, Operation, Step, VisitCall, VisitMethod},
    schema::{Naming, NodeType},
};

impl Synthesize<'_> {
    /// The visitor names the operation for the node type.
    pub(super) fn dispatched_method(&self, node: &NodeType) -> VisitMethod {
        let visit = VisitCall::Visitor(self.visitor_operation(node));
        self.visit_method(node, visit)
    }

    /// The node routes itself to the inner visitor.
    pub(super) fn self_dispatching_method(
        &self,
        node: &NodeType,
        accept: &syn::Ident,
    ) -> VisitMethod {
        let visit = VisitCall::SelfDispatch {
            accept: accept.clone(),
        };
        self.visit_method(node, visit)
    }

    fn visit_method(&self, node: &NodeType, visit: VisitCall) -> VisitMethod {
        let mut steps = vec![self.traverse_hook(node, true), Step::Visit(visit)];

        if self.has_progress_monitor() {
            steps.push(Step::Notify(Event::Visited));
        }

        steps.push(self.traverse_hook(node, false));
        steps.push(Step::Return);

        tracing::trace!(
            node = %node.name,
            self_dispatching = node.category.is_self_dispatching(),
            "synthesized visit method"
        );

        VisitMethod {
            node: node.path.clone(),
            name: node.name.clone(),
            realizes: self.visitor_operation(node),
            steps,
        }
    }

    /// Traverse, then report it. Runs only when `traverse_first == when`, so
    /// emitting it once for each value yields the pre- and post-order sites.
    fn traverse_hook(&self, node: &NodeType, when: bool) -> Step {
        let mut body = vec![Step::Traverse(self.traverser_operation(node))];

        if self.has_progress_monitor() {
            body.push(Step::Notify(Event::Traversed));
        }

        Step::WhenTraverseFirst { when, body }
    }

    fn visitor_operation(&self, node: &NodeType) -> Operation {
        match &self.naming {
            Naming::PerType => Operation::PerType(node.name.prefixed("visit")),
            Naming::Shared { visitor, .. } => shared(visitor, "visit", node),
        }
    }

    fn traverser_operation(&self, node: &NodeType) -> Operation {
        match &self.naming {
            Naming::PerType => Operation::PerType(node.name.prefixed("traverse")),
            Naming::Shared { traverser, .. } => shared(traverser, "traverse", node),
        }
    }
}

fn shared(overload: &syn::Path, method: &str, node: &NodeType) -> Operation {
    Operation::Shared {
        overload: overload.clone(),
        ident: syn::Ident::new(method, node.name.ident.span()),
    }
}
