/// Run configuration module
///
/// This module handles:
/// - Turning CLI arguments into one immutable RunConfig
/// - Picking the inventory source when both --file and --url are given
/// - Choosing the base reference that locations are joined onto
use crate::cli::CliArgs;
use crate::error::{Error, Result};
use crate::fetch::base_href;
use crate::format::OutputMode;
use log::debug;
use std::path::PathBuf;

const MISSING_SOURCE: &str = "Need to specify either a file or a URL.";

/// Where the inventory bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventorySource {
    File(PathBuf),
    Url(String),
}

/// Everything a run needs, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source: InventorySource,
    /// Base reference for entry locations; empty when reading a file without --url
    pub base_uri: String,
    /// Output file, or None for stdout
    pub output: Option<PathBuf>,
    pub mode: OutputMode,
}

/// Build a RunConfig from CLI arguments
///
/// A file takes precedence over a URL; the URL then only serves as the
/// base reference. Giving neither is a usage error.
pub fn build_run_config(args: &CliArgs) -> Result<RunConfig> {
    let base_uri = args.url.as_deref().map(base_href).unwrap_or_default();
    let source = match (&args.file, &args.url) {
        (Some(file), _) => InventorySource::File(file.clone()),
        (None, Some(url)) => InventorySource::Url(url.clone()),
        (None, None) => return Err(Error::Usage(MISSING_SOURCE.to_string())),
    };

    let config = RunConfig { source, base_uri, output: args.output.clone(), mode: args.output_mode() };
    debug!("Resolved run config: {:?}", config);

    Ok(config)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
