//! Synthesis of a *Traversing Visitor*: a generated type that pairs a
//! Visitor with a Traverser so a single call visits and walks a whole object
//! graph.
//!
//! The generated type is generic over a result type `R` and a failure type
//! `E` and expects the following template shapes (names are configurable):
//!
//! ```ignore
//! // Per-type method names (`include_type = true`)
//! trait Visitor<R, E> {
//!     fn visit_leaf(&mut self, node: &Leaf) -> Result<R, E>;
//! }
//! trait Traverser<R, E> {
//!     fn traverse_leaf(&self, node: &Leaf, visitor: &mut dyn Visitor<R, E>) -> Result<(), E>;
//! }
//!
//! // Shared method names (`include_type = false`)
//! trait Visit<N, R, E> {
//!     fn visit(&mut self, node: &N) -> Result<R, E>;
//! }
//! trait Visitor<R, E>: Visit<Leaf, R, E> + Visit<Branch, R, E> {}
//!
//! // Optional
//! trait ProgressMonitor {
//!     fn traversed(&mut self, node: &dyn Any);
//!     fn visited(&mut self, node: &dyn Any);
//! }
//! ```
//!
//! Self-dispatching node types provide
//! `fn accept<R, E>(&self, visitor: &mut dyn Visitor<R, E>) -> Result<R, E>`.

mod config;
pub use config::{Options, DEFAULT_IDENT};

mod error;
pub use error::{Error, Result};

mod expand;
pub use expand::expand;

pub mod ir;

mod render;
pub use render::render;

mod schema;
pub use schema::{
    Catalog, CatalogBuilder, Name, NodeCategory, NodeType, Template, Templates, DEFAULT_ACCEPT,
};

mod synthesize;
pub use synthesize::synthesize;

use proc_macro2::TokenStream;

/// Expands a `traversing_visitor!` declaration.
pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let decl = schema::Declaration::from_ast(&item)?;
    let def = synthesize(&decl.catalog, &decl.templates, &decl.options)?;

    Ok(expand(&def))
}
