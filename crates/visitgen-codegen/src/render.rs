use crate::{expand, ir::TraversingVisitorDef};

/// Formats the generated type as Rust source, for host pipelines that write
/// the output themselves.
pub fn render(def: &TraversingVisitorDef) -> syn::Result<String> {
    let file: syn::File = syn::parse2(expand(def))?;
    Ok(prettyplease::unparse(&file))
}
