use clap::{Args, Parser, Subcommand, ValueEnum};

mod common;
mod names;
mod ws;

pub use names::*;
pub use ws::*;

const CLI_AFTER_HELP: &str = "EXAMPLES:\n  clusterpath validate root:org:team\n  clusterpath parse-url https://kcp.example.com:6443/clusters/root:org\n  clusterpath qualify --cluster root:org --namespace default my-config\n  clusterpath selector team-a\n  clusterpath ws set https://kcp.example.com:6443/clusters/root\n  clusterpath ws use org\n  clusterpath ws use ..\n";

#[derive(Parser, Debug)]
#[command(
    name = "clusterpath",
    version,
    about = "Validate logical cluster names and navigate workspace URLs",
    after_help = CLI_AFTER_HELP
)]
pub struct Cli {
    #[arg(short = 'q', long, global = true, help = "Suppress all output")]
    pub quiet: bool,
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count, help = "Increase verbosity (-v, -vv)")]
    pub verbose: u8,
    #[arg(long, global = true, help = "Show what would happen without executing")]
    pub dry_run: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Check logical cluster names")]
    Validate(ValidateArgs),
    #[command(about = "Split a workspace URL into base URL and cluster")]
    ParseUrl(ParseUrlArgs),
    #[command(about = "Print the qualified name of an object")]
    Qualify(QualifyArgs),
    #[command(about = "Print the label selector for a workspace")]
    Selector(SelectorArgs),
    #[command(subcommand, about = "Show and switch the current workspace")]
    Ws(WsCommand),
    #[command(about = "Generate shell completions")]
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(ValueEnum, Debug, Clone)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    Pwsh,
}
