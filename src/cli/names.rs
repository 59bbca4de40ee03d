use clap::Args;
use clusterpath::output::OutputFormat;
use std::path::PathBuf;

use super::common::parse_non_empty;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[arg(required = true, num_args = 1.., help = "Cluster name(s), e.g. root:org:team")]
    pub names: Vec<String>,
    #[arg(short = 'o', long, default_value_t = OutputFormat::Table, help = "Output format: json, table, or plain")]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct ParseUrlArgs {
    #[arg(value_parser = parse_non_empty, help = "Workspace URL (…/clusters/<name> or …/services/workspaces/<name>)")]
    pub url: String,
    #[arg(short = 'o', long, default_value_t = OutputFormat::Table, help = "Output format: json, table, or plain")]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct QualifyArgs {
    #[arg(
        required_unless_present = "file",
        conflicts_with = "file",
        help = "Object name"
    )]
    pub name: Option<String>,
    #[arg(long, conflicts_with = "file", help = "Logical cluster of the object")]
    pub cluster: Option<String>,
    #[arg(short = 'n', long, conflicts_with = "file", help = "Namespace of the object")]
    pub namespace: Option<String>,
    #[arg(short = 'f', long, help = "Read a JSON object from a file ('-' for stdin)")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SelectorArgs {
    #[arg(value_parser = parse_non_empty, help = "Workspace name")]
    pub workspace: String,
}
