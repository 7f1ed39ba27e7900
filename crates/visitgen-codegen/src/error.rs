/// Errors detected while preparing a synthesis run.
///
/// Both kinds are raised before any member of the output type is built, so a
/// failed run never yields a partial type definition. Each kind wraps a
/// spanned `syn::Error`, which may combine several diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The node catalog or the declaration describing it is malformed.
    #[error("invalid node catalog: {0}")]
    Configuration(syn::Error),

    /// A Visitor, Traverser or progress monitor template cannot be
    /// referenced from the generated type.
    #[error("unresolved template: {0}")]
    TemplateResolution(syn::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// The underlying diagnostics, with spans.
    pub fn diagnostics(&self) -> &syn::Error {
        match self {
            Error::Configuration(err) | Error::TemplateResolution(err) => err,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    pub fn is_template_resolution(&self) -> bool {
        matches!(self, Error::TemplateResolution(_))
    }
}

impl From<Error> for syn::Error {
    fn from(err: Error) -> syn::Error {
        match err {
            Error::Configuration(err) | Error::TemplateResolution(err) => err,
        }
    }
}
