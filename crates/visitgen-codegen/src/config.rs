use crate::ir::ParamContext;

use proc_macro2::Span;

/// Name of the generated type unless configured otherwise.
pub const DEFAULT_IDENT: &str = "TraversingVisitor";

/// Settings for one synthesis run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Dispatch-naming policy: `visit_leaf` / `traverse_leaf` when true,
    /// shared `visit` / `traverse` through overload traits when false
    pub include_type: bool,

    /// Name of the generated type
    pub ident: syn::Ident,

    /// Visibility of the generated type and its inherent methods
    pub vis: syn::Visibility,

    /// Attributes copied onto the generated struct
    pub attrs: Vec<syn::Attribute>,

    /// Result and failure type parameters, `<R, E: ::std::error::Error>`
    /// by default
    pub params: ParamContext,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include_type: true,
            ident: syn::Ident::new(DEFAULT_IDENT, Span::call_site()),
            vis: syn::parse_quote!(pub),
            attrs: vec![],
            params: ParamContext::default(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dispatch-naming policy
    pub fn include_type(mut self, include_type: bool) -> Self {
        self.include_type = include_type;
        self
    }

    /// Set the name of the generated type
    pub fn ident(mut self, ident: syn::Ident) -> Self {
        self.ident = ident;
        self
    }

    /// Set the visibility of the generated type
    pub fn vis(mut self, vis: syn::Visibility) -> Self {
        self.vis = vis;
        self
    }

    /// Add an attribute to the generated struct
    pub fn attr(mut self, attr: syn::Attribute) -> Self {
        self.attrs.push(attr);
        self
    }

    /// Set the type parameters
    pub fn params(mut self, params: ParamContext) -> Self {
        self.params = params;
        self
    }
}
