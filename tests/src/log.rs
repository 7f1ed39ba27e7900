use std::{cell::RefCell, rc::Rc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// The inner visitor visited the named node
    Visit(String),

    /// The traverser walked the named node's children
    Traverse(String),

    /// The progress monitor was told about a traversal
    Traversed(String),

    /// The progress monitor was told about a visit
    Visited(String),
}

/// Shared record of everything the parts of a traversing visitor did.
#[derive(Debug, Clone, Default)]
pub struct Log {
    entries: Rc<RefCell<Vec<Entry>>>,
}

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&self, entry: Entry) {
        self.entries.borrow_mut().push(entry);
    }

    pub fn entries(&self) -> Vec<Entry> {
        self.entries.borrow().clone()
    }

    /// Entries of one kind, by node name.
    pub fn names(&self, kind: fn(&Entry) -> Option<&str>) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter_map(kind)
            .map(str::to_string)
            .collect()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl Entry {
    pub fn visit(&self) -> Option<&str> {
        match self {
            Entry::Visit(name) => Some(name),
            _ => None,
        }
    }

    pub fn traverse(&self) -> Option<&str> {
        match self {
            Entry::Traverse(name) => Some(name),
            _ => None,
        }
    }

    pub fn notification(&self) -> Option<&str> {
        match self {
            Entry::Traversed(name) | Entry::Visited(name) => Some(name),
            _ => None,
        }
    }
}
