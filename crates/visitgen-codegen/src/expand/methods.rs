use super::Expand;
use crate::ir::{FieldRole, Operation, Step, VisitCall, VisitMethod};

use proc_macro2::{Span, TokenStream};
use quote::quote;

impl Expand<'_> {
    /// The Visitor impl, plus one overload impl per node type under shared
    /// method names.
    pub(super) fn expand_visitor_impls(&self) -> TokenStream {
        let generics = self.def.params.declare();
        let self_ty = self.self_ty();
        let visitor = &self.def.implements;

        let overload_impls = self.def.methods.iter().filter_map(|method| {
            let Operation::Shared { overload, .. } = &method.realizes else {
                return None;
            };

            let overload = self.def.params.narrow_overload(overload, &method.node);
            let visit_method = self.expand_visit_method(method);

            Some(quote! {
                impl #generics #overload for #self_ty {
                    #visit_method
                }
            })
        });

        let visit_methods = self
            .def
            .methods
            .iter()
            .filter(|method| matches!(method.realizes, Operation::PerType(_)))
            .map(|method| self.expand_visit_method(method));

        quote! {
            #( #overload_impls )*

            impl #generics #visitor for #self_ty {
                #( #visit_methods )*
            }
        }
    }

    fn expand_visit_method(&self, method: &VisitMethod) -> TokenStream {
        let ident = method.realizes.ident();
        let node_ty = &method.node;
        let result_ty = self.def.params.result_ty();
        let body = self.expand_steps(method, &method.steps);

        quote! {
            fn #ident(&mut self, node: &#node_ty) -> #result_ty {
                #body
            }
        }
    }

    fn expand_steps(&self, method: &VisitMethod, steps: &[Step]) -> TokenStream {
        steps
            .iter()
            .map(|step| self.expand_step(method, step))
            .collect()
    }

    fn expand_step(&self, method: &VisitMethod, step: &Step) -> TokenStream {
        let params = &self.def.params;

        match step {
            Step::WhenTraverseFirst { when, body } => {
                let traverse_first = FieldRole::TraverseFirst.ident();
                let body = self.expand_steps(method, body);

                if *when {
                    quote! {
                        if self.#traverse_first {
                            #body
                        }
                    }
                } else {
                    quote! {
                        if !self.#traverse_first {
                            #body
                        }
                    }
                }
            }
            Step::Traverse(operation) => {
                let field = FieldRole::Traverser.ident();

                let call = match operation {
                    Operation::PerType(ident) => quote!(traverser.#ident(node, self)),
                    Operation::Shared { overload, ident } => {
                        let overload = params.turbofish_overload(overload, &method.node);
                        quote!(#overload::#ident(&*traverser, node, self))
                    }
                };

                quote! {
                    let traverser = ::std::rc::Rc::clone(&self.#field);
                    #call?;
                }
            }
            Step::Visit(VisitCall::Visitor(operation)) => {
                let field = FieldRole::Visitor.ident();

                let call = match operation {
                    Operation::PerType(ident) => quote!(self.#field.#ident(node)),
                    Operation::Shared { overload, ident } => {
                        let overload = params.turbofish_overload(overload, &method.node);
                        quote!(#overload::#ident(&mut *self.#field, node))
                    }
                };

                quote!(let result = #call?;)
            }
            Step::Visit(VisitCall::SelfDispatch { accept }) => {
                let field = FieldRole::Visitor.ident();
                quote!(let result = node.#accept(&mut *self.#field)?;)
            }
            Step::Notify(event) => {
                let field = FieldRole::ProgressMonitor.ident();
                let notify = syn::Ident::new(event.method(), Span::call_site());

                quote! {
                    if let ::std::option::Option::Some(monitor) = self.#field.as_mut() {
                        monitor.#notify(node);
                    }
                }
            }
            Step::Return => quote!(::std::result::Result::Ok(result)),
        }
    }
}
