//! Generates *Traversing Visitors*: types that pair a Visitor with a
//! Traverser so one call visits and walks a whole object graph.
//!
//! ```ignore
//! visitgen::traversing_visitor! {
//!     /// Visits every node of a tree.
//!     #[visitor(Visitor)]
//!     #[traverser(Traverser)]
//!     #[progress_monitor(ProgressMonitor)]
//!     #[dispatched(Leaf)]
//!     #[self_dispatching(Branch)]
//!     pub struct TraversingVisitor<R, E>;
//! }
//!
//! let mut visitor = TraversingVisitor::new(Rc::new(DepthFirst), Box::new(Printer));
//! visitor.set_traverse_first(true);
//! visitor.visit_branch(&root)?;
//! ```
//!
//! Supported attributes:
//!
//! - `#[visitor(Path)]`, `#[traverser(Path)]`: the templates, required. Add
//!   `overload = Path` to name the generic trait providing a shared method
//!   name when `include_type` is false.
//! - `#[progress_monitor(Path)]`: optional observer trait.
//! - `#[include_type]` / `#[include_type = false]`: per-type (`visit_leaf`)
//!   or shared (`visit`) method names. Defaults to per-type.
//! - `#[nodes(..)]`: optional list of every node type; when present each
//!   must be classified exactly once.
//! - `#[dispatched(..)]`, `#[self_dispatching(.., accept = method)]`: the
//!   node type partition.
//!
//! See `visitgen-codegen` for the template trait shapes and for generating
//! outside of a macro.

pub use visitgen_macros::traversing_visitor;
