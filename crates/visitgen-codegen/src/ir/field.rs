use proc_macro2::Span;

/// The state held by a Traversing Visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Traverse before visiting (`true`) or after (`false`)
    TraverseFirst,
    Visitor,
    Traverser,
    ProgressMonitor,
}

impl FieldRole {
    pub fn name(self) -> &'static str {
        match self {
            FieldRole::TraverseFirst => "traverse_first",
            FieldRole::Visitor => "visitor",
            FieldRole::Traverser => "traverser",
            FieldRole::ProgressMonitor => "progress_monitor",
        }
    }

    pub fn ident(self) -> syn::Ident {
        syn::Ident::new(self.name(), Span::call_site())
    }
}

#[derive(Debug, Clone)]
pub struct FieldDef {
    pub role: FieldRole,

    pub ident: syn::Ident,

    /// Stored type, also the mutator's argument type
    pub ty: syn::Type,

    pub init: FieldInit,

    /// How the accessor hands the value out
    pub access: Access,

    /// `visitor`
    pub accessor: syn::Ident,

    /// `visitor_mut`, for fields the generated type owns exclusively
    pub accessor_mut: Option<syn::Ident>,

    /// `set_visitor`
    pub mutator: syn::Ident,
}

/// Initial value of a field in the constructor.
#[derive(Debug, Clone)]
pub enum FieldInit {
    /// Passed to the constructor and stored as is
    Argument,

    /// Starts at a fixed value, changed later through the mutator
    Value(syn::Expr),
}

#[derive(Debug, Clone)]
pub enum Access {
    /// Returned by value
    Copy,

    /// Returned as a borrow of the pointee, e.g. `&dyn Visitor<R, E>`
    Borrow(syn::Type),

    /// Returned as an optional borrow, e.g. `Option<&dyn ProgressMonitor>`
    OptionalBorrow(syn::Type),
}
