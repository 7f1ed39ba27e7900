use super::Name;

use quote::ToTokens;

/// How the generated code reaches the Visitor for a node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeCategory {
    /// The generated method names the Visitor operation for the node type.
    Dispatched,

    /// The node routes itself to the Visitor through its own dispatch
    /// method, e.g. `node.accept(visitor)`.
    SelfDispatching {
        /// Name of the node's dispatch method
        accept: syn::Ident,
    },
}

impl NodeCategory {
    pub fn is_self_dispatching(&self) -> bool {
        matches!(self, NodeCategory::SelfDispatching { .. })
    }
}

/// One node type of the object model.
#[derive(Debug, Clone)]
pub struct NodeType {
    /// Path to the node type, as referenced from the generated code
    pub path: syn::Path,

    /// Type name, taken from the last path segment
    pub name: Name,

    /// Dispatch category, fixed when the catalog is built
    pub category: NodeCategory,
}

/// Renders a path for diagnostics, e.g. `ast::Leaf`.
pub(crate) fn display_path(path: &syn::Path) -> String {
    let segments = path
        .segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect::<Vec<_>>()
        .join("::");

    if path.leading_colon.is_some() {
        format!("::{segments}")
    } else {
        segments
    }
}

/// Renders a path with its generic arguments, e.g. `Visitor<u32, String>`.
pub(crate) fn display_path_with_args(path: &syn::Path) -> String {
    path.to_token_stream()
        .to_string()
        .replace(" :: ", "::")
        .replace(":: ", "::")
        .replace(" < ", "<")
        .replace(" <", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
}
