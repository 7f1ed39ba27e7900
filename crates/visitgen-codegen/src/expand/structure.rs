use super::Expand;
use crate::ir::FieldInit;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_struct(&self) -> TokenStream {
        let attrs = &self.def.attrs;
        let vis = &self.def.vis;
        let ident = &self.def.ident;
        let generics = self.def.params.declare();

        let fields = self.def.fields.iter().map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;
            quote!(#ident: #ty,)
        });

        quote! {
            #( #attrs )*
            #vis struct #ident #generics {
                #( #fields )*
            }
        }
    }

    pub(super) fn expand_inherent_impl(&self) -> TokenStream {
        let generics = self.def.params.declare();
        let self_ty = self.self_ty();
        let constructor = self.expand_constructor();
        let accessors = self.expand_accessors();

        quote! {
            impl #generics #self_ty {
                #constructor
                #accessors
            }
        }
    }

    fn expand_constructor(&self) -> TokenStream {
        let vis = &self.def.vis;
        let ident = &self.def.constructor.ident;

        let args = self
            .def
            .constructor
            .args
            .iter()
            .filter_map(|role| self.def.field(*role))
            .map(|field| {
                let ident = &field.ident;
                let ty = &field.ty;
                quote!(#ident: #ty)
            });

        let inits = self.def.fields.iter().map(|field| {
            let ident = &field.ident;

            match &field.init {
                FieldInit::Argument => quote!(#ident,),
                FieldInit::Value(value) => quote!(#ident: #value,),
            }
        });

        quote! {
            /// Pairs a traverser with a visitor. Each node is visited
            /// before its children are traversed until
            /// `set_traverse_first(true)` is called.
            #vis fn #ident( #( #args ),* ) -> Self {
                Self {
                    #( #inits )*
                }
            }
        }
    }
}
