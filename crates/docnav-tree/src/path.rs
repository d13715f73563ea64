//! File path to URL path mapping.
//!
//! Data files are addressed two ways:
//! - the **data path** keeps the on-disk layout (ordering prefixes included)
//!   and is used for sorting
//! - the **URL path** is the public address with ordering prefixes removed
//!   and `index` files collapsed onto their directory
//!
//! | File (relative to root)        | Data path                  | URL path        |
//! |--------------------------------|----------------------------|-----------------|
//! | `index.md`                     | `/index`                   | `/`             |
//! | `02_intro.md`                  | `/02_intro`                | `/intro`        |
//! | `01_docs/02_setup/index.md`    | `/01_docs/02_setup/index`  | `/docs/setup/`  |

use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;

pub use docnav_meta::strip_order_prefix;

static SEGMENT_PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\d+_").expect("invalid segment prefix regex"));

/// Path of `file_path` relative to `data_root`, `/`-separated with a
/// leading `/`.
///
/// Files outside `data_root` keep their full path.
#[must_use]
pub fn relative_path(file_path: &Path, data_root: &Path) -> String {
    let rel = file_path.strip_prefix(data_root).unwrap_or(file_path);

    let mut out = String::new();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            out.push('/');
            out.push_str(&part.to_string_lossy().replace('\\', "/"));
        }
    }
    out
}

/// Relative path without the `.md` extension.
///
/// Only a trailing `.md` is removed; `.md` inside a directory name is kept.
///
/// ```
/// use std::path::Path;
/// use docnav_tree::path::data_path;
///
/// let root = Path::new("/data");
/// assert_eq!(data_path(Path::new("/data/01_docs/intro.md"), root), "/01_docs/intro");
/// ```
#[must_use]
pub fn data_path(file_path: &Path, data_root: &Path) -> String {
    let rel = relative_path(file_path, data_root);
    match rel.strip_suffix(".md") {
        Some(stripped) => stripped.to_owned(),
        None => rel,
    }
}

/// Convert a data file path into its public URL path.
///
/// Ordering prefixes are removed from every segment and `index` files map
/// to their directory with a trailing slash.
///
/// ```
/// use std::path::Path;
/// use docnav_tree::path::file_path_to_url_path;
///
/// let root = Path::new("/data");
/// assert_eq!(file_path_to_url_path(Path::new("/data/index.md"), root), "/");
/// assert_eq!(file_path_to_url_path(Path::new("/data/01_docs/02_setup/index.md"), root), "/docs/setup/");
/// assert_eq!(file_path_to_url_path(Path::new("/data/01_docs/03_faq.md"), root), "/docs/faq");
/// ```
#[must_use]
pub fn file_path_to_url_path(file_path: &Path, data_root: &Path) -> String {
    let without_ext = data_path(file_path, data_root);
    let url = SEGMENT_PREFIX_PATTERN.replace_all(&without_ext, "/");

    match url.rsplit_once('/') {
        Some(("", "index")) => "/".to_owned(),
        Some((parent, "index")) => format!("{parent}/"),
        _ => url.into_owned(),
    }
}
