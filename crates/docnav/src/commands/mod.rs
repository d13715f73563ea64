//! CLI command implementations.

pub(crate) mod props;
pub(crate) mod tree;

pub(crate) use props::PropsArgs;
pub(crate) use tree::TreeArgs;

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_tree::{GroupNode, TreeBuilder};

use crate::error::CliError;

/// Data source and output arguments shared by all commands.
#[derive(Args, Debug, Default)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Markdown data directory (overrides config).
    #[arg(short, long, env = "DOCNAV_DATA_DIR")]
    pub(crate) data_dir: Option<PathBuf>,

    /// Print JSON on a single line.
    #[arg(long)]
    pub(crate) compact: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl SourceArgs {
    /// Resolve configuration and build the navigation tree.
    pub(crate) fn build_tree(&self) -> Result<GroupNode, CliError> {
        let cli_settings = CliSettings {
            data_dir: self.data_dir.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let builder = TreeBuilder::new(config.data_dir());
        tracing::info!(data_dir = %builder.data_root().display(), "Building navigation tree");

        Ok(builder.build()?)
    }
}
