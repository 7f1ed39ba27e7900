use super::{display_path, display_path_with_args, ErrorSet};
use crate::{Error, Result};

/// A trait the generated type refers to, named without generic arguments.
#[derive(Debug, Clone)]
pub struct Template {
    /// Path to the aggregate trait, e.g. `crate::Visitor`
    pub path: syn::Path,

    /// Generic trait providing the shared method name, e.g. `crate::Visit`.
    /// Only used when method names do not include the node type.
    pub overload: Option<syn::Path>,
}

impl Template {
    pub fn new(path: syn::Path) -> Self {
        Self {
            path,
            overload: None,
        }
    }

    pub fn overload(mut self, path: syn::Path) -> Self {
        self.overload = Some(path);
        self
    }
}

/// The existing traits the Traversing Visitor is generated against.
#[derive(Debug, Clone)]
pub struct Templates {
    /// `Visitor<R, E>`, realized by the generated type
    pub visitor: Template,

    /// `Traverser<R, E>`, called to walk each node's children
    pub traverser: Template,

    /// Observer notified after each traversal and visit, if any
    pub progress_monitor: Option<syn::Path>,
}

impl Templates {
    pub fn new(visitor: Template, traverser: Template) -> Self {
        Self {
            visitor,
            traverser,
            progress_monitor: None,
        }
    }

    pub fn progress_monitor(mut self, path: syn::Path) -> Self {
        self.progress_monitor = Some(path);
        self
    }

    /// Checks that every template can be referenced from generated code
    /// and settles how operations are named under the given policy.
    pub(crate) fn resolve(&self, include_type: bool) -> Result<Naming> {
        let mut errs = ErrorSet::new();

        for (role, template) in [("visitor", &self.visitor), ("traverser", &self.traverser)] {
            check_path(role, &template.path, &mut errs);

            match &template.overload {
                Some(overload) => {
                    check_path(role, overload, &mut errs);

                    if include_type {
                        tracing::debug!(
                            role,
                            overload = %display_path(overload),
                            "overload trait unused with per-type method names"
                        );
                    }
                }
                None if !include_type => errs.spanned(
                    &template.path,
                    format!(
                        "shared method names need an overload trait for `{}`; add `overload = <path>`",
                        display_path(&template.path)
                    ),
                ),
                None => {}
            }
        }

        if let Some(path) = &self.progress_monitor {
            check_path("progress monitor", path, &mut errs);
        }

        errs.finish().map_err(Error::TemplateResolution)?;

        match (include_type, &self.visitor.overload, &self.traverser.overload) {
            (false, Some(visitor), Some(traverser)) => Ok(Naming::Shared {
                visitor: visitor.clone(),
                traverser: traverser.clone(),
            }),
            _ => Ok(Naming::PerType),
        }
    }
}

/// How template operations are named for each node type.
#[derive(Debug, Clone)]
pub(crate) enum Naming {
    /// `visit_leaf`, `traverse_leaf`
    PerType,

    /// `Visit::<Leaf, R, E>::visit`, `Traverse::<Leaf, R, E>::traverse`
    Shared {
        visitor: syn::Path,
        traverser: syn::Path,
    },
}

fn check_path(role: &str, path: &syn::Path, errs: &mut ErrorSet) {
    if path.segments.is_empty() {
        errs.spanned(path, format!("{role} template path is empty"));
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
                "{role} template `{}` must be named without generic arguments; \
                 the generated type supplies them",
                display_path_with_args(path)
            ),
        );
    }
}
