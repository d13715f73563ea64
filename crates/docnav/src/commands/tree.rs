//! `docnav tree` command implementation.

use std::io::{self, Write};

use clap::Args;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::write_json;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

impl TreeArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        self.write_to(io::stdout().lock())
    }

    fn write_to<W: Write>(&self, writer: W) -> Result<(), CliError> {
        let root = self.source.build_tree()?;
        write_json(writer, &root, self.source.compact)
    }
}
