use clap::{Args, Subcommand};
use clusterpath::output::OutputFormat;

use super::common::parse_non_empty;

#[derive(Subcommand, Debug)]
pub enum WsCommand {
    #[command(about = "Show the current workspace")]
    Current(WsCurrentArgs),
    #[command(about = "Point at a workspace URL")]
    Set(WsSetArgs),
    #[command(about = "Switch workspace: NAME (child), .. (parent), - (previous), :root:a (absolute)")]
    Use(WsUseArgs),
    #[command(about = "Forget the stored workspace")]
    Clear,
}

#[derive(Args, Debug)]
pub struct WsCurrentArgs {
    #[arg(short = 'o', long, default_value_t = OutputFormat::Table, help = "Output format: json, table, or plain")]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct WsSetArgs {
    #[arg(value_parser = parse_non_empty, help = "Workspace URL")]
    pub url: String,
}

#[derive(Args, Debug)]
pub struct WsUseArgs {
    #[arg(value_parser = parse_non_empty, allow_hyphen_values = true, help = "Workspace reference")]
    pub reference: String,
}
