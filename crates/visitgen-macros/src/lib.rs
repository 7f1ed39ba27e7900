extern crate proc_macro;

use proc_macro::TokenStream;

/// Generates a Traversing Visitor from an attributed unit struct.
///
/// ```ignore
/// traversing_visitor! {
///     #[visitor(crate::Visitor)]
///     #[traverser(crate::Traverser)]
///     #[progress_monitor(crate::ProgressMonitor)]
///     #[dispatched(Leaf)]
///     #[self_dispatching(Branch)]
///     pub struct TraversingVisitor<R, E>;
/// }
/// ```
#[proc_macro]
pub fn traversing_visitor(input: TokenStream) -> TokenStream {
    match visitgen_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
