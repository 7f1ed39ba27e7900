use super::{display_path, display_path_with_args, ErrorSet, Name, NodeCategory, NodeType};
use crate::{Error, Result};

/// Dispatch method called on self-dispatching node types unless overridden.
pub const DEFAULT_ACCEPT: &str = "accept";

/// The node types of an object model, partitioned into dispatched and
/// self-dispatching types.
///
/// A `Catalog` can only be obtained from [`CatalogBuilder::build`], which
/// checks the partition, so every value of this type is well formed.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Dispatched node types first, then self-dispatching ones, each in
    /// declaration order
    nodes: Vec<NodeType>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn nodes(&self) -> &[NodeType] {
        &self.nodes
    }

    pub fn dispatched(&self) -> impl Iterator<Item = &NodeType> + '_ {
        self.nodes
            .iter()
            .filter(|node| !node.category.is_self_dispatching())
    }

    pub fn self_dispatching(&self) -> impl Iterator<Item = &NodeType> + '_ {
        self.nodes
            .iter()
            .filter(|node| node.category.is_self_dispatching())
    }

    /// Finds a node type by its type name, e.g. `"Leaf"`.
    pub fn get(&self, name: &str) -> Option<&NodeType> {
        self.nodes.iter().find(|node| node.name.ident == name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Collects node types and validates them into a [`Catalog`].
#[derive(Debug, Default, Clone)]
pub struct CatalogBuilder {
    /// Every node type of the model, when declared explicitly
    declared: Option<Vec<syn::Path>>,

    dispatched: Vec<syn::Path>,

    self_dispatching: Vec<(syn::Path, Option<syn::Ident>)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a node type of the model without classifying it.
    ///
    /// Once any node type is declared, the declared set is the whole model:
    /// each declared type must be classified exactly once, and only declared
    /// types may be classified.
    pub fn declare(mut self, path: syn::Path) -> Self {
        self.declared.get_or_insert_with(Vec::new).push(path);
        self
    }

    /// Declares the node types of the model. An empty list still declares
    /// the model, so every classified type is then reported as undeclared.
    pub fn declare_all(mut self, paths: impl IntoIterator<Item = syn::Path>) -> Self {
        self.declared.get_or_insert_with(Vec::new).extend(paths);
        self
    }

    /// Adds a node type whose visit is named on the Visitor.
    pub fn dispatched(mut self, path: syn::Path) -> Self {
        self.dispatched.push(path);
        self
    }

    /// Adds a node type that dispatches itself through `accept`.
    pub fn self_dispatching(mut self, path: syn::Path) -> Self {
        self.self_dispatching.push((path, None));
        self
    }

    /// Adds a self-dispatching node type with a custom dispatch method name.
    pub fn self_dispatching_with(mut self, path: syn::Path, accept: syn::Ident) -> Self {
        self.self_dispatching.push((path, Some(accept)));
        self
    }

    /// Checks the partition and returns the catalog.
    ///
    /// Every violation is reported in the returned
    /// [`Error::Configuration`], not only the first one.
    pub fn build(self) -> Result<Catalog> {
        let mut errs = ErrorSet::new();

        let self_dispatching: Vec<_> = self.self_dispatching.iter().map(|(path, _)| path).collect();

        for path in self
            .dispatched
            .iter()
            .chain(self_dispatching.iter().copied())
            .chain(self.declared.iter().flatten())
        {
            check_node_path(path, &mut errs);
        }

        report_duplicates(self.dispatched.iter(), "dispatched", &mut errs);
        report_duplicates(self_dispatching.iter().copied(), "self-dispatching", &mut errs);

        for &path in &self_dispatching {
            if self.dispatched.contains(path) {
                errs.spanned(
                    path,
                    format!(
                        "node type `{}` is both dispatched and self-dispatching",
                        display_path(path)
                    ),
                );
            }
        }

        if let Some(declared) = &self.declared {
            report_duplicates(declared.iter(), "declared", &mut errs);

            for path in declared {
                if !self.dispatched.contains(path) && !self_dispatching.contains(&path) {
                    errs.spanned(
                        path,
                        format!(
                            "node type `{}` is neither dispatched nor self-dispatching",
                            display_path(path)
                        ),
                    );
                }
            }

            for path in self.dispatched.iter().chain(self_dispatching.iter().copied()) {
                if !declared.contains(path) {
                    errs.spanned(
                        path,
                        format!(
                            "node type `{}` is not declared in `nodes`",
                            display_path(path)
                        ),
                    );
                }
            }
        }

        // Stop before building names from malformed paths
        if let Some(err) = errs.collect() {
            tracing::debug!(error = %err, "rejected node catalog");
            return Err(Error::Configuration(err));
        }

        let mut nodes = vec![];

        nodes.extend(
            self.dispatched
                .into_iter()
                .filter_map(|path| node_type(path, NodeCategory::Dispatched)),
        );

        nodes.extend(self.self_dispatching.into_iter().filter_map(|(path, accept)| {
            let accept = accept.unwrap_or_else(|| {
                syn::Ident::new(DEFAULT_ACCEPT, proc_macro2::Span::call_site())
            });
            node_type(path, NodeCategory::SelfDispatching { accept })
        }));

        let mut errs = ErrorSet::new();

        for (i, node) in nodes.iter().enumerate() {
            for other in &nodes[i + 1..] {
                if node.name.snake == other.name.snake && node.path != other.path {
                    errs.spanned(
                        &other.path,
                        format!(
                            "node types `{}` and `{}` share the name `{}`",
                            display_path(&node.path),
                            display_path(&other.path),
                            node.name.snake
                        ),
                    );
                }
            }
        }

        if let Some(err) = errs.collect() {
            tracing::debug!(error = %err, "rejected node catalog");
            return Err(Error::Configuration(err));
        }

        tracing::debug!(
            nodes = nodes.len(),
            self_dispatching = nodes
                .iter()
                .filter(|node| node.category.is_self_dispatching())
                .count(),
            "validated node catalog"
        );

        Ok(Catalog { nodes })
    }
}

fn node_type(path: syn::Path, category: NodeCategory) -> Option<NodeType> {
    let name = Name::from_ident(&path.segments.last()?.ident);

    Some(NodeType {
        path,
        name,
        category,
    })
}

fn check_node_path(path: &syn::Path, errs: &mut ErrorSet) {
    if path.segments.is_empty() {
        errs.spanned(path, "node type path is empty");
        return;
    }

    if path
        .segments
        .iter()
        .any(|segment| !segment.arguments.is_none())
    {
        errs.spanned(
            path,
            format!(
                "node type `{}` must not carry generic arguments",
                display_path_with_args(path)
            ),
        );
    }
}

fn report_duplicates<'a>(
    paths: impl Iterator<Item = &'a syn::Path>,
    list: &str,
    errs: &mut ErrorSet,
) {
    let mut seen: Vec<&syn::Path> = vec![];

    for path in paths {
        if seen.contains(&path) {
            errs.spanned(
                path,
                format!(
                    "node type `{}` is {list} more than once",
                    display_path(path)
                ),
            );
        } else {
            seen.push(path);
        }
    }
}
