mod catalog;
pub use catalog::{Catalog, CatalogBuilder, DEFAULT_ACCEPT};

mod decl;
pub(crate) use decl::Declaration;

mod decl_attr;
pub(crate) use decl_attr::DeclAttr;

mod error;
pub(crate) use error::ErrorSet;

mod name;
pub use name::Name;

mod node;
pub(crate) use node::{display_path, display_path_with_args};
pub use node::{NodeCategory, NodeType};

mod template;
pub(crate) use template::Naming;
pub use template::{Template, Templates};
