mod fields;
mod methods;

use crate::{
    ir::TraversingVisitorDef,
    schema::{Catalog, Naming, NodeCategory, Templates},
    Options, Result,
};

struct Synthesize<'a> {
    /// The templates the generated type refers to
    templates: &'a Templates,

    /// How template operations are named
    naming: Naming,

    options: &'a Options,
}

/// Synthesizes the Traversing Visitor type for a catalog.
///
/// Templates are resolved before anything is built; once that succeeds,
/// synthesis cannot fail. The catalog was validated when it was built.
pub fn synthesize(
    catalog: &Catalog,
    templates: &Templates,
    options: &Options,
) -> Result<TraversingVisitorDef> {
    let naming = templates.resolve(options.include_type)?;

    tracing::debug!(
        ident = %options.ident,
        dispatched = catalog.dispatched().count(),
        self_dispatching = catalog.self_dispatching().count(),
        include_type = options.include_type,
        progress_monitor = templates.progress_monitor.is_some(),
        "synthesizing traversing visitor"
    );

    let synthesize = Synthesize {
        templates,
        naming,
        options,
    };

    Ok(synthesize.type_def(catalog))
}

impl Synthesize<'_> {
    fn type_def(&self, catalog: &Catalog) -> TraversingVisitorDef {
        let params = &self.options.params;

        let methods = catalog
            .nodes()
            .iter()
            .map(|node| match &node.category {
                NodeCategory::Dispatched => self.dispatched_method(node),
                NodeCategory::SelfDispatching { accept } => {
                    self.self_dispatching_method(node, accept)
                }
            })
            .collect();

        TraversingVisitorDef {
            ident: self.options.ident.clone(),
            vis: self.options.vis.clone(),
            attrs: self.options.attrs.clone(),
            params: params.clone(),
            fields: self.fields(),
            constructor: self.constructor(),
            implements: params.narrow(&self.templates.visitor.path),
            methods,
        }
    }

    fn has_progress_monitor(&self) -> bool {
        self.templates.progress_monitor.is_some()
    }
}
