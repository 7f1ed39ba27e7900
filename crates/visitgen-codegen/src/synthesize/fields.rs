use super::Synthesize;
use crate::ir::{Access, Constructor, FieldDef, FieldInit, FieldRole};

use proc_macro2::Span;
use quote::format_ident;

impl Synthesize<'_> {
    pub(super) fn fields(&self) -> Vec<FieldDef> {
        let params = &self.options.params;
        let visitor = params.narrow(&self.templates.visitor.path);
        let traverser = params.narrow(&self.templates.traverser.path);

        let mut fields = vec![
            field(
                FieldRole::TraverseFirst,
                syn::parse_quote!(bool),
                FieldInit::Value(syn::parse_quote!(false)),
                Access::Copy,
            ),
            lend_mut(field(
                FieldRole::Visitor,
                syn::parse_quote!(::std::boxed::Box<dyn #visitor>),
                FieldInit::Argument,
                Access::Borrow(syn::parse_quote!(dyn #visitor)),
            )),
            // Shared so a hook can hold the traverser while lending out `self`
            field(
                FieldRole::Traverser,
                syn::parse_quote!(::std::rc::Rc<dyn #traverser>),
                FieldInit::Argument,
                Access::Borrow(syn::parse_quote!(dyn #traverser)),
            ),
        ];

        if let Some(monitor) = &self.templates.progress_monitor {
            fields.push(lend_mut(field(
                FieldRole::ProgressMonitor,
                syn::parse_quote!(::std::option::Option<::std::boxed::Box<dyn #monitor>>),
                FieldInit::Value(syn::parse_quote!(::std::option::Option::None)),
                Access::OptionalBorrow(syn::parse_quote!(dyn #monitor)),
            )));
        }

        fields
    }

    pub(super) fn constructor(&self) -> Constructor {
        Constructor {
            ident: syn::Ident::new("new", Span::call_site()),
            args: vec![FieldRole::Traverser, FieldRole::Visitor],
        }
    }
}

fn field(role: FieldRole, ty: syn::Type, init: FieldInit, access: Access) -> FieldDef {
    let ident = role.ident();

    FieldDef {
        role,
        accessor: ident.clone(),
        accessor_mut: None,
        mutator: format_ident!("set_{}", ident),
        ident,
        ty,
        init,
        access,
    }
}

/// Adds a `<field>_mut` accessor. The traverser is shared and gets none.
fn lend_mut(mut field: FieldDef) -> FieldDef {
    field.accessor_mut = Some(format_ident!("{}_mut", field.ident));
    field
}
