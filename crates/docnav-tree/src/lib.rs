//! Navigation tree and flat page index for docnav.
//!
//! Walks a data directory of markdown files and produces:
//!
//! - a navigation tree ([`GroupNode`] root) mirroring the directory layout,
//!   with `index.md` files adopted by their directories
//! - a [`FlatIndex`] mapping each routed URL path to its [`PageProps`]
//!
//! # Example
//!
//! ```no_run
//! use docnav_tree::{TreeBuilder, flatten_node_props};
//!
//! let root = TreeBuilder::new("data").build()?;
//! let props = flatten_node_props(&root);
//! println!("{} pages", props.len());
//! # Ok::<(), docnav_tree::BuildError>(())
//! ```

mod builder;
mod error;
mod flatten;
mod node;
pub mod path;

pub use builder::{ROOT_TITLE, TreeBuilder, build_data_file_tree};
pub use error::BuildError;
pub use flatten::{FlatIndex, PageProps, flatten_into, flatten_node_props};
pub use node::{FullPage, GroupNode, PageNode, StubPage, TreeNode};
pub use path::file_path_to_url_path;
