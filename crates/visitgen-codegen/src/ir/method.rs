use crate::schema::Name;

/// A visit method of the generated type, for one node type.
#[derive(Debug, Clone)]
pub struct VisitMethod {
    /// Path to the node type, the method takes `node: &#node`
    pub node: syn::Path,

    pub name: Name,

    /// The Visitor operation this method realizes
    pub realizes: Operation,

    /// Body, in execution order
    pub steps: Vec<Step>,
}

impl VisitMethod {
    /// The Traverser operation called from this method's hooks.
    pub fn traverse_operation(&self) -> Option<&Operation> {
        self.steps.iter().find_map(Step::traverse_operation)
    }

    /// The step that produces the method's result.
    pub fn visit_call(&self) -> Option<&VisitCall> {
        self.steps.iter().find_map(|step| match step {
            Step::Visit(call) => Some(call),
            _ => None,
        })
    }
}

/// A reference to a template operation for one node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// A method whose name includes the node type, e.g. `visit_leaf`
    PerType(syn::Ident),

    /// The shared method of an overload trait, e.g. `Visit::<Leaf, R, E>::visit`
    Shared {
        overload: syn::Path,
        ident: syn::Ident,
    },
}

impl Operation {
    pub fn ident(&self) -> &syn::Ident {
        match self {
            Operation::PerType(ident) => ident,
            Operation::Shared { ident, .. } => ident,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Step {
    /// Runs `body` when `traverse_first` equals `when` at call time
    WhenTraverseFirst { when: bool, body: Vec<Step> },

    /// Walks the node's children, passing the generated visitor along
    Traverse(Operation),

    /// Computes and binds the method's result
    Visit(VisitCall),

    /// Notifies the progress monitor, if one is set
    Notify(Event),

    /// Returns the bound result
    Return,
}

impl Step {
    fn traverse_operation(&self) -> Option<&Operation> {
        match self {
            Step::Traverse(operation) => Some(operation),
            Step::WhenTraverseFirst { body, .. } => body.iter().find_map(Step::traverse_operation),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitCall {
    /// Calls the inner visitor's operation for the node type
    Visitor(Operation),

    /// Calls the node's own dispatch method with the inner visitor
    SelfDispatch { accept: syn::Ident },
}

/// Progress monitor notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Traversed,
    Visited,
}

impl Event {
    /// Name of the progress monitor method receiving this event.
    pub fn method(self) -> &'static str {
        match self {
            Event::Traversed => "traversed",
            Event::Visited => "visited",
        }
    }
}
