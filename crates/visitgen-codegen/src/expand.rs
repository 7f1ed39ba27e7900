mod accessors;
mod methods;
mod structure;

use crate::ir::TraversingVisitorDef;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The type being emitted
    def: &'a TraversingVisitorDef,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let type_struct = self.expand_struct();
        let inherent_impl = self.expand_inherent_impl();
        let visitor_impls = self.expand_visitor_impls();

        quote! {
            #type_struct
            #inherent_impl
            #visitor_impls
        }
    }

    /// `TraversingVisitor<R, E>`
    fn self_ty(&self) -> TokenStream {
        let ident = &self.def.ident;
        let args = self.def.params.apply();
        quote!(#ident #args)
    }
}

/// Emits the struct, its inherent impl and its Visitor impls.
pub fn expand(def: &TraversingVisitorDef) -> TokenStream {
    Expand { def }.expand()
}
