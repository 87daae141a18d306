use crate::format::OutputMode;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "inventory-fmt")]
#[command(about = "Process an intersphinx link inventory (objects.inv) and emit HTML, reStructuredText or text")]
#[command(version)]
pub struct CliArgs {
    /// URL to retrieve objects.inv from; "/objects.inv" is appended when the URL does not name it.
    /// With --file, only used as the base HREF for every location
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// objects.inv format file to read (takes precedence over --url)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output file to write to, truncated first (defaults to stdout)
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output HTML
    #[arg(long, group = "mode")]
    pub html: bool,

    /// Output terse text list
    #[arg(long, group = "mode")]
    pub terse: bool,

    /// Output ReStructuredText
    #[arg(long, group = "mode")]
    pub rst: bool,

    /// Output short form and correct form of each link
    #[arg(long, group = "mode")]
    pub rewrite: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        let mut args = CliArgs::parse();

        // An empty value means "not given"
        args.url = args.url.filter(|u| !u.is_empty());
        args.file = args.file.filter(|f| !f.as_os_str().is_empty());

        args
    }

    /// The formatting mode selected by the flags (default text when none is set)
    pub fn output_mode(&self) -> OutputMode {
        if self.html {
            OutputMode::Html
        } else if self.terse {
            OutputMode::Terse
        } else if self.rst {
            OutputMode::Rst
        } else if self.rewrite {
            OutputMode::Rewrite
        } else {
            OutputMode::Text
        }
    }

    /// One-line usage summary, as clap prints it
    pub fn usage() -> String {
        CliArgs::command().render_usage().to_string()
    }
}
