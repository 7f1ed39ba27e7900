use super::{display_path, CatalogBuilder, Template};

use syn::punctuated::Punctuated;
use syn::Token;

/// Settings collected from the attributes of a declaration.
#[derive(Debug, Default)]
pub(crate) struct DeclAttr {
    /// `#[visitor(Path, overload = Path)]`
    pub(crate) visitor: Option<Template>,

    /// `#[traverser(Path, overload = Path)]`
    pub(crate) traverser: Option<Template>,

    /// `#[progress_monitor(Path)]`
    pub(crate) progress_monitor: Option<syn::Path>,

    /// `#[include_type]` or `#[include_type = <bool>]`
    pub(crate) include_type: Option<bool>,

    /// `#[nodes(..)]`, `#[dispatched(..)]` and `#[self_dispatching(..)]`
    pub(crate) catalog: CatalogBuilder,
}

impl DeclAttr {
    pub(super) fn populate_from_ast(&mut self, attr: &syn::Attribute) -> syn::Result<()> {
        let path = attr.path();

        if path.is_ident("visitor") {
            if self.visitor.is_some() {
                return Err(syn::Error::new_spanned(attr, "duplicate #[visitor] attribute"));
            }

            self.visitor = Some(template_from_ast(attr, "visitor")?);
        } else if path.is_ident("traverser") {
            if self.traverser.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate #[traverser] attribute",
                ));
            }

            self.traverser = Some(template_from_ast(attr, "traverser")?);
        } else if path.is_ident("progress_monitor") {
            if self.progress_monitor.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate #[progress_monitor] attribute",
                ));
            }

            self.progress_monitor = Some(attr.parse_args()?);
        } else if path.is_ident("include_type") {
            if self.include_type.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate #[include_type] attribute",
                ));
            }

            self.include_type = Some(include_type_from_ast(attr)?);
        } else if path.is_ident("nodes") {
            let nodes = node_list_from_ast(attr)?;
            self.catalog = std::mem::take(&mut self.catalog).declare_all(nodes);
        } else if path.is_ident("dispatched") {
            for node in node_list_from_ast(attr)? {
                self.catalog = std::mem::take(&mut self.catalog).dispatched(node);
            }
        } else if path.is_ident("self_dispatching") {
            let (nodes, accept) = self_dispatching_from_ast(attr)?;

            for node in nodes {
                let catalog = std::mem::take(&mut self.catalog);

                self.catalog = match &accept {
                    Some(accept) => catalog.self_dispatching_with(node, accept.clone()),
                    None => catalog.self_dispatching(node),
                };
            }
        } else {
            return Err(syn::Error::new_spanned(
                attr,
                format!("unknown attribute `#[{}]`", display_path(path)),
            ));
        }

        Ok(())
    }
}

fn template_from_ast(attr: &syn::Attribute, role: &str) -> syn::Result<Template> {
    let mut path = None;
    let mut overload = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("overload") && meta.input.peek(Token![=]) {
            if overload.is_some() {
                return Err(meta.error("duplicate `overload`"));
            }

            overload = Some(meta.value()?.parse::<syn::Path>()?);
        } else if meta.input.is_empty() || meta.input.peek(Token![,]) {
            if path.is_some() {
                return Err(syn::Error::new_spanned(
                    &meta.path,
                    "expected a single template path",
                ));
            }

            path = Some(meta.path.clone());
        } else {
            return Err(meta.error("expected a template path or `overload = <path>`"));
        }

        Ok(())
    })?;

    let Some(path) = path else {
        return Err(syn::Error::new_spanned(
            attr,
            format!("expected a template path, e.g. `#[{role}(crate::Template)]`"),
        ));
    };

    Ok(Template { path, overload })
}

fn include_type_from_ast(attr: &syn::Attribute) -> syn::Result<bool> {
    match &attr.meta {
        syn::Meta::Path(_) => Ok(true),
        syn::Meta::NameValue(meta) => match &meta.value {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Bool(lit),
                ..
            }) => Ok(lit.value),
            value => Err(syn::Error::new_spanned(value, "expected `true` or `false`")),
        },
        syn::Meta::List(_) => Err(syn::Error::new_spanned(
            attr,
            "expected `#[include_type]` or `#[include_type = <bool>]`",
        )),
    }
}

fn node_list_from_ast(attr: &syn::Attribute) -> syn::Result<Vec<syn::Path>> {
    let nodes = attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)?;
    Ok(nodes.into_iter().collect())
}

fn self_dispatching_from_ast(
    attr: &syn::Attribute,
) -> syn::Result<(Vec<syn::Path>, Option<syn::Ident>)> {
    let mut nodes = vec![];
    let mut accept = None;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("accept") && meta.input.peek(Token![=]) {
            if accept.is_some() {
                return Err(meta.error("duplicate `accept`"));
            }

            accept = Some(meta.value()?.parse::<syn::Ident>()?);
        } else if meta.input.is_empty() || meta.input.peek(Token![,]) {
            nodes.push(meta.path.clone());
        } else {
            return Err(meta.error("expected a node type path or `accept = <method>`"));
        }

        Ok(())
    })?;

    Ok((nodes, accept))
}
