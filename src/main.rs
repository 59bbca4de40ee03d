use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io;
use std::io::Write;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;
mod commands;
mod context;
mod helpers;

use cli::{Cli, Commands, Shell};
use context::AppContext;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let ctx = AppContext {
        quiet: cli.quiet,
        verbose: cli.verbose,
        dry_run: cli.dry_run,
    };

    let result = match cli.command {
        Commands::Validate(args) => commands::names::validate(&ctx, args),
        Commands::ParseUrl(args) => commands::names::parse_url(&ctx, args),
        Commands::Qualify(args) => commands::names::qualify(&ctx, args),
        Commands::Selector(args) => commands::names::selector(&ctx, args),
        Commands::Ws(cmd) => commands::ws::handle(&ctx, cmd),
        Commands::Completions(args) => generate_completions(args),
    };

    if let Err(err) = result {
        if ctx.verbose > 0 {
            eprintln!("{err:?}");
        } else {
            eprintln!("{}", format_error_chain(&err));
        }
        std::process::exit(1);
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` enables debug and `-vv` trace.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn format_error_chain(err: &anyhow::Error) -> String {
    let mut out = err.to_string();
    for cause in err.chain().skip(1) {
        out.push_str(": ");
        out.push_str(&cause.to_string());
    }
    out
}

fn generate_completions(args: cli::CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let shell = match args.shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::Pwsh => clap_complete::Shell::PowerShell,
    };

    // Generate into a buffer so `clusterpath completions bash | head` does
    // not panic on a closed pipe.
    let mut buf: Vec<u8> = Vec::new();
    clap_complete::generate(shell, &mut cmd, "clusterpath", &mut buf);

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout.write_all(&buf) {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }

    Ok(())
}
