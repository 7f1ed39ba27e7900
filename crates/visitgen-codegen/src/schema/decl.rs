use super::{Catalog, DeclAttr, ErrorSet, Templates};
use crate::{ir::ParamContext, Options};

/// A `traversing_visitor!` declaration: an attributed unit struct.
///
/// ```ignore
/// #[visitor(crate::Visitor)]
/// #[traverser(crate::Traverser)]
/// #[dispatched(Leaf)]
/// #[self_dispatching(Branch)]
/// pub struct TraversingVisitor<R, E>;
/// ```
#[derive(Debug)]
pub(crate) struct Declaration {
    pub(crate) catalog: Catalog,
    pub(crate) templates: Templates,
    pub(crate) options: Options,
}

impl Declaration {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let mut errs = ErrorSet::new();

        if !matches!(ast.fields, syn::Fields::Unit) {
            errs.spanned(
                &ast.fields,
                format!(
                    "expected a unit struct, e.g. `pub struct {};`",
                    ast.ident
                ),
            );
        }

        let params = match params_from_generics(&ast.generics) {
            Ok(params) => params,
            Err(err) => {
                errs.push(err);
                ParamContext::default()
            }
        };

        let mut attr = DeclAttr::default();
        let mut options = Options::default()
            .ident(ast.ident.clone())
            .vis(ast.vis.clone())
            .params(params);

        for node in &ast.attrs {
            if node.path().is_ident("doc") || node.path().is_ident("allow") {
                options = options.attr(node.clone());
            } else if let Err(err) = attr.populate_from_ast(node) {
                errs.push(err);
            }
        }

        if let Some(include_type) = attr.include_type {
            options = options.include_type(include_type);
        }

        if attr.visitor.is_none() {
            errs.spanned(&ast.ident, "missing #[visitor(..)] attribute");
        }

        if attr.traverser.is_none() {
            errs.spanned(&ast.ident, "missing #[traverser(..)] attribute");
        }

        let catalog = match attr.catalog.build() {
            Ok(catalog) => Some(catalog),
            Err(err) => {
                errs.push(err.into());
                None
            }
        };

        match (attr.visitor, attr.traverser, catalog, errs.collect()) {
            (Some(visitor), Some(traverser), Some(catalog), None) => {
                let mut templates = Templates::new(visitor, traverser);

                if let Some(progress_monitor) = attr.progress_monitor {
                    templates = templates.progress_monitor(progress_monitor);
                }

                Ok(Self {
                    catalog,
                    templates,
                    options,
                })
            }
            (.., Some(err)) => Err(err),
            // Every missing piece above records an error
            _ => Err(syn::Error::new_spanned(
                &ast.ident,
                "incomplete traversing visitor declaration",
            )),
        }
    }
}

fn params_from_generics(generics: &syn::Generics) -> syn::Result<ParamContext> {
    if let Some(where_clause) = &generics.where_clause {
        return Err(syn::Error::new_spanned(
            where_clause,
            "where clauses are not supported; bound the failure parameter inline",
        ));
    }

    // `<R, E: ::std::error::Error>`. Written parameters are taken as is.
    if generics.params.is_empty() {
        return Ok(ParamContext::default());
    }

    let params: Vec<_> = generics.params.iter().collect();

    let [syn::GenericParam::Type(result), syn::GenericParam::Type(failure)] = params.as_slice()
    else {
        return Err(syn::Error::new_spanned(
            generics,
            "expected exactly two type parameters, e.g. `<R, E>`",
        ));
    };

    if !result.bounds.is_empty() {
        return Err(syn::Error::new_spanned(
            &result.bounds,
            "the result type parameter cannot be bounded",
        ));
    }

    if let Some(default) = result.default.as_ref().or(failure.default.as_ref()) {
        return Err(syn::Error::new_spanned(
            default,
            "type parameter defaults are not supported",
        ));
    }

    let params = failure.bounds.iter().fold(
        ParamContext::new(result.ident.clone(), failure.ident.clone()),
        |params, bound| params.failure_bound(bound.clone()),
    );

    Ok(params)
}
