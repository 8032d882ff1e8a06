//! CLI argument definitions for famkit.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "famkit",
    version,
    about = "Family parameter automation - add, associate and type family parameters",
    long_about = "Batch-edit a family document: add family parameters from loosely typed\n\
                  inputs, associate nested element parameters with family parameters,\n\
                  and create family types. Documents are read from and written to JSON\n\
                  snapshots."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add family parameters described by a request file.
    AddParameters(AddParametersArgs),

    /// Associate nested element parameters with family parameters.
    Associate(AssociateArgs),

    /// Create family types.
    CreateTypes(CreateTypesArgs),

    /// Show how specification type and group names resolve.
    Resolve(ResolveArgs),

    /// List supported specification types and parameter groups.
    Specs,
}

/// Family snapshot input and output shared by the editing commands.
#[derive(Args)]
pub struct DocumentArgs {
    /// Family document snapshot (JSON).
    #[arg(long = "family", value_name = "PATH")]
    pub family: PathBuf,

    /// Where to write the edited snapshot (default: overwrite --family).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Run the operation and report without writing the snapshot.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct AddParametersArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Parameter request file (JSON or TOML, by extension).
    #[arg(long = "request", value_name = "PATH")]
    pub request: PathBuf,

    /// Fail on names that only resolve to the default type or group.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Args)]
pub struct AssociateArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Id of the placed nested element.
    #[arg(long = "element", value_name = "ID")]
    pub element: String,

    /// Element parameter names, paired in order with --family-params.
    #[arg(long = "element-params", value_name = "NAME", num_args = 1.., required = true)]
    pub element_params: Vec<String>,

    /// Family parameter names.
    #[arg(long = "family-params", value_name = "NAME", num_args = 1.., required = true)]
    pub family_params: Vec<String>,

    /// Do not force associated visibility parameters on.
    #[arg(long = "no-force-visibility")]
    pub no_force_visibility: bool,
}

#[derive(Args)]
pub struct CreateTypesArgs {
    #[command(flatten)]
    pub document: DocumentArgs,

    /// Names of the types to create.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Specification type names to resolve.
    #[arg(long = "spec", value_name = "NAME")]
    pub specs: Vec<String>,

    /// Parameter group names to resolve.
    #[arg(long = "group", value_name = "NAME")]
    pub groups: Vec<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
