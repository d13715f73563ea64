//! `${VAR}` expansion for configured paths.
//!
//! `${VAR:-default}` falls back to `default` when VAR is unset or empty, as
//! in the shell. Bare `$VAR` is kept literally so paths containing `$` need
//! no escaping.

use std::env::{self, VarError};
use std::path::PathBuf;

use crate::ConfigError;

/// Why a referenced variable could not be used.
#[derive(Debug, thiserror::Error)]
enum VarProblem {
    #[error("not set")]
    Unset,
    #[error("is empty")]
    Empty,
    #[error("is not valid UTF-8")]
    NotUnicode,
}

fn lookup(name: &str) -> Result<Option<String>, VarProblem> {
    match env::var(name) {
        Ok(value) if value.is_empty() => Err(VarProblem::Empty),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Err(VarProblem::Unset),
        Err(VarError::NotUnicode(_)) => Err(VarProblem::NotUnicode),
    }
}

/// Expand variable references in the path configured at `field`.
pub(crate) fn expand_path(raw: &str, field: &str) -> Result<PathBuf, ConfigError> {
    if !raw.contains("${") {
        return Ok(PathBuf::from(raw));
    }

    let expanded = shellexpand::env_with_context(raw, lookup).map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} {}", e.var_name, e.cause),
    })?;
    Ok(PathBuf::from(expanded.as_ref()))
}
