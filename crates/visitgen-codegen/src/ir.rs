mod field;
pub use field::{Access, FieldDef, FieldInit, FieldRole};

mod method;
pub use method::{Event, Operation, Step, VisitCall, VisitMethod};

mod params;
pub use params::ParamContext;

/// The synthesized Traversing Visitor type, as data.
///
/// Built once by [`synthesize`](crate::synthesize) and emitted in a single
/// pass by [`expand`](crate::expand). Nothing mutates it in between.
#[derive(Debug, Clone)]
pub struct TraversingVisitorDef {
    /// Name of the generated type
    pub ident: syn::Ident,

    /// Visibility of the type and its inherent methods
    pub vis: syn::Visibility,

    /// Attributes forwarded to the struct, e.g. doc comments
    pub attrs: Vec<syn::Attribute>,

    /// `R` and `E`
    pub params: ParamContext,

    /// Stored state, in declaration order
    pub fields: Vec<FieldDef>,

    pub constructor: Constructor,

    /// The narrowed Visitor trait the type implements, `Visitor<R, E>`
    pub implements: syn::Path,

    /// One method per node type
    pub methods: Vec<VisitMethod>,
}

/// `fn new(traverser, visitor) -> Self`
#[derive(Debug, Clone)]
pub struct Constructor {
    pub ident: syn::Ident,

    /// Fields taken as arguments, in argument order
    pub args: Vec<FieldRole>,
}

impl TraversingVisitorDef {
    pub fn field(&self, role: FieldRole) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.role == role)
    }

    /// Finds the method synthesized for a node type, by type name.
    pub fn method(&self, node: &str) -> Option<&VisitMethod> {
        self.methods.iter().find(|method| method.name.ident == node)
    }

    pub fn has_progress_monitor(&self) -> bool {
        self.field(FieldRole::ProgressMonitor).is_some()
    }
}
