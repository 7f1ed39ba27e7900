use proc_macro2::TokenStream;
use quote::quote;

/// The generic parameters of the generated type and the references that
/// carry them.
///
/// Every synthesis step that names a template goes through this context, so
/// `R` and `E` are threaded the same way everywhere.
#[derive(Debug, Clone)]
pub struct ParamContext {
    /// Result type parameter, `R` by default
    pub result: syn::Ident,

    /// Failure type parameter, `E` by default
    pub failure: syn::Ident,

    /// Bounds placed on the failure parameter
    pub failure_bounds: Vec<syn::TypeParamBound>,
}

/// `<R, E: ::std::error::Error>`
impl Default for ParamContext {
    fn default() -> Self {
        Self::new(syn::parse_quote!(R), syn::parse_quote!(E))
            .failure_bound(syn::parse_quote!(::std::error::Error))
    }
}

impl ParamContext {
    /// Parameters taken as written, with an unbounded failure parameter.
    pub fn new(result: syn::Ident, failure: syn::Ident) -> Self {
        Self {
            result,
            failure,
            failure_bounds: vec![],
        }
    }

    pub fn failure_bound(mut self, bound: syn::TypeParamBound) -> Self {
        self.failure_bounds.push(bound);
        self
    }

    /// `<R, E: Bound>`, for the struct and impl headers.
    pub fn declare(&self) -> TokenStream {
        let result = &self.result;
        let failure = &self.failure;

        if self.failure_bounds.is_empty() {
            quote!(<#result, #failure>)
        } else {
            let bounds = &self.failure_bounds;
            quote!(<#result, #failure: #( #bounds )+*>)
        }
    }

    /// `<R, E>`, where the parameters are used.
    pub fn apply(&self) -> TokenStream {
        let result = &self.result;
        let failure = &self.failure;
        quote!(<#result, #failure>)
    }

    /// `Result<R, E>`, returned by every visit method.
    pub fn result_ty(&self) -> syn::Type {
        let result = &self.result;
        let failure = &self.failure;
        syn::parse_quote!(::std::result::Result<#result, #failure>)
    }

    /// Narrows a Visitor or Traverser template: `Visitor<R, E>`.
    pub fn narrow(&self, template: &syn::Path) -> syn::Path {
        let args = self.apply();
        syn::parse_quote!(#template #args)
    }

    /// Narrows an overload trait for one node type: `Visit<Leaf, R, E>`.
    pub fn narrow_overload(&self, overload: &syn::Path, node: &syn::Path) -> syn::Path {
        let result = &self.result;
        let failure = &self.failure;
        syn::parse_quote!(#overload<#node, #result, #failure>)
    }

    /// Same as [`narrow_overload`](Self::narrow_overload), spelled for
    /// expression position: `Visit::<Leaf, R, E>`.
    pub fn turbofish_overload(&self, overload: &syn::Path, node: &syn::Path) -> TokenStream {
        let result = &self.result;
        let failure = &self.failure;
        quote!(#overload::<#node, #result, #failure>)
    }
}
