use std_util::str;
use syn::ext::IdentExt;

/// Name of a node type, as used to build per-type method names.
#[derive(Debug, Clone)]
pub struct Name {
    /// The type identifier as written, e.g. `BinaryExpr`
    pub ident: syn::Ident,

    /// Snake case form, e.g. `binary_expr`
    pub snake: String,
}

impl Name {
    pub fn from_ident(ident: &syn::Ident) -> Self {
        let snake = str::snake_case(&ident.unraw().to_string());

        Self {
            ident: ident.clone(),
            snake,
        }
    }

    /// Builds `<prefix>_<snake name>`, spanned at the type identifier.
    pub fn prefixed(&self, prefix: &str) -> syn::Ident {
        syn::Ident::new(&format!("{prefix}_{}", self.snake), self.ident.span())
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ident.unraw())
    }
}
