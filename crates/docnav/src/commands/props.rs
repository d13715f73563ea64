//! `docnav props` command implementation.

use std::io;

use clap::Args;
use docnav_tree::{FlatIndex, flatten_node_props};

use super::SourceArgs;
use crate::error::CliError;
use crate::output::write_json;

/// Arguments for the props command.
#[derive(Args)]
pub(crate) struct PropsArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

impl PropsArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let props = self.collect()?;
        write_json(io::stdout().lock(), &props, self.source.compact)
    }

    fn collect(&self) -> Result<FlatIndex, CliError> {
        let root = self.source.build_tree()?;
        let props = flatten_node_props(&root);
        tracing::info!(page_count = props.len(), "Flat index built");
        Ok(props)
    }
}
