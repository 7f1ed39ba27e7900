//! A small tree model shared by the integration tests, with recording
//! visitors, traversers and progress monitors.

mod log;
pub use log::{Entry, Log};

pub mod tree;

pub use std_util::*;

use std::any::Any;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("refused to visit `{0}`")]
    Refused(String),
}

#[derive(Debug)]
pub struct Leaf {
    pub name: String,
}

#[derive(Debug)]
pub struct Branch {
    pub name: String,
    pub children: Vec<Node>,
}

#[derive(Debug)]
pub enum Node {
    Leaf(Leaf),
    Branch(Branch),
}

pub fn leaf(name: &str) -> Node {
    Node::Leaf(Leaf {
        name: name.to_string(),
    })
}

pub fn branch(name: &str, children: Vec<Node>) -> Branch {
    Branch {
        name: name.to_string(),
        children,
    }
}

/// `root` holding the leaves `a` and `b`.
pub fn sample() -> Branch {
    branch("root", vec![leaf("a"), leaf("b")])
}

/// Visits every node, returning its name. Records each visit.
pub struct Recorder {
    log: Log,

    /// Fails instead of visiting the node with this name
    refuse: Option<String>,
}

impl Recorder {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            refuse: None,
        }
    }

    pub fn refusing(log: &Log, name: &str) -> Self {
        Self {
            log: log.clone(),
            refuse: Some(name.to_string()),
        }
    }

    fn record(&mut self, name: &str) -> Result<String, Error> {
        if self.refuse.as_deref() == Some(name) {
            return Err(Error::Refused(name.to_string()));
        }

        self.log.push(Entry::Visit(name.to_string()));
        Ok(name.to_string())
    }
}

/// Walks branch children in order. Records each traversal.
pub struct DepthFirst {
    log: Log,
}

impl DepthFirst {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }

    fn record(&self, name: &str) {
        self.log.push(Entry::Traverse(name.to_string()));
    }
}

pub trait ProgressMonitor {
    fn traversed(&mut self, node: &dyn Any);
    fn visited(&mut self, node: &dyn Any);
}

/// Records every notification.
pub struct Progress {
    log: Log,
}

impl Progress {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl ProgressMonitor for Progress {
    fn traversed(&mut self, node: &dyn Any) {
        self.log.push(Entry::Traversed(name_of(node)));
    }

    fn visited(&mut self, node: &dyn Any) {
        self.log.push(Entry::Visited(name_of(node)));
    }
}

fn name_of(node: &dyn Any) -> String {
    if let Some(leaf) = node.downcast_ref::<Leaf>() {
        leaf.name.clone()
    } else if let Some(branch) = node.downcast_ref::<Branch>() {
        branch.name.clone()
    } else {
        panic!("progress reported for an unknown node type")
    }
}
