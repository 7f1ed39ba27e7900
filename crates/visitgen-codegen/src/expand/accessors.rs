use super::Expand;
use crate::ir::{Access, FieldDef};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_accessors(&self) -> TokenStream {
        self.def
            .fields
            .iter()
            .map(|field| self.expand_accessor_pair(field))
            .collect()
    }

    fn expand_accessor_pair(&self, field: &FieldDef) -> TokenStream {
        let vis = &self.def.vis;
        let ident = &field.ident;
        let ty = &field.ty;
        let accessor = &field.accessor;
        let mutator = &field.mutator;
        let accessor_doc = format!("Returns the `{ident}` of this traversing visitor.");
        let mutator_doc = format!("Replaces the `{ident}` of this traversing visitor.");

        let accessor = match &field.access {
            Access::Copy => quote! {
                #vis fn #accessor(&self) -> #ty {
                    self.#ident
                }
            },
            Access::Borrow(target) => quote! {
                #vis fn #accessor(&self) -> &#target {
                    &*self.#ident
                }
            },
            Access::OptionalBorrow(target) => quote! {
                #vis fn #accessor(&self) -> ::std::option::Option<&#target> {
                    self.#ident.as_deref()
                }
            },
        };

        let accessor_mut = field
            .accessor_mut
            .as_ref()
            .map(|accessor_mut| self.expand_accessor_mut(field, accessor_mut));

        quote! {
            #[doc = #accessor_doc]
            #accessor

            #accessor_mut

            #[doc = #mutator_doc]
            #vis fn #mutator(&mut self, #ident: #ty) {
                self.#ident = #ident;
            }
        }
    }

    fn expand_accessor_mut(&self, field: &FieldDef, accessor_mut: &syn::Ident) -> TokenStream {
        let vis = &self.def.vis;
        let ident = &field.ident;
        let doc = format!("Returns the `{ident}` of this traversing visitor for mutation.");

        let accessor_mut = match &field.access {
            Access::Borrow(target) => quote! {
                #vis fn #accessor_mut(&mut self) -> &mut #target {
                    &mut *self.#ident
                }
            },
            Access::OptionalBorrow(target) => quote! {
                #vis fn #accessor_mut(&mut self) -> ::std::option::Option<&mut #target> {
                    match self.#ident.as_mut() {
                        ::std::option::Option::Some(value) => ::std::option::Option::Some(&mut **value),
                        ::std::option::Option::None => ::std::option::Option::None,
                    }
                }
            },
            Access::Copy => return TokenStream::new(),
        };

        quote! {
            #[doc = #doc]
            #accessor_mut
        }
    }
}
