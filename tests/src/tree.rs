//! Per-type method names: `visit_leaf`, `traverse_branch`.

use crate::{Branch, DepthFirst, Error, Leaf, Node, Recorder};

pub trait Visitor<R, E> {
    fn visit_leaf(&mut self, node: &Leaf) -> Result<R, E>;
    fn visit_branch(&mut self, node: &Branch) -> Result<R, E>;
}

pub trait Traverser<R, E> {
    fn traverse_leaf(&self, node: &Leaf, visitor: &mut dyn Visitor<R, E>) -> Result<(), E>;
    fn traverse_branch(&self, node: &Branch, visitor: &mut dyn Visitor<R, E>) -> Result<(), E>;
}

impl Branch {
    pub fn accept<R, E>(&self, visitor: &mut dyn Visitor<R, E>) -> Result<R, E> {
        visitor.visit_branch(self)
    }
}

visitgen::traversing_visitor! {
    /// Visits and walks a tree, reporting progress.
    #[visitor(crate::tree::Visitor)]
    #[traverser(crate::tree::Traverser)]
    #[progress_monitor(crate::ProgressMonitor)]
    #[nodes(Leaf, Branch)]
    #[dispatched(Leaf)]
    #[self_dispatching(Branch)]
    pub struct TraversingVisitor<R, E: std::error::Error>;
}

visitgen::traversing_visitor! {
    #[visitor(Visitor)]
    #[traverser(Traverser)]
    #[dispatched(Leaf)]
    #[self_dispatching(Branch)]
    pub struct UnmonitoredTraversingVisitor<R, E>;
}

impl Visitor<String, Error> for Recorder {
    fn visit_leaf(&mut self, node: &Leaf) -> Result<String, Error> {
        self.record(&node.name)
    }

    fn visit_branch(&mut self, node: &Branch) -> Result<String, Error> {
        self.record(&node.name)
    }
}

impl<R, E> Traverser<R, E> for DepthFirst {
    fn traverse_leaf(&self, node: &Leaf, _visitor: &mut dyn Visitor<R, E>) -> Result<(), E> {
        self.record(&node.name);
        Ok(())
    }

    fn traverse_branch(&self, node: &Branch, visitor: &mut dyn Visitor<R, E>) -> Result<(), E> {
        self.record(&node.name);

        for child in &node.children {
            match child {
                Node::Leaf(leaf) => visitor.visit_leaf(leaf)?,
                Node::Branch(branch) => visitor.visit_branch(branch)?,
            };
        }

        Ok(())
    }
}
