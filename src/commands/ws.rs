use anyhow::{Context, Result};
use clusterpath::config::Config;
use clusterpath::parse_cluster_url;
use clusterpath::workspace::resolve;
use tracing::info;

use crate::cli::{WsCommand, WsCurrentArgs, WsSetArgs, WsUseArgs};
use crate::context::{AppContext, load_config};
use crate::helpers::{print_cluster_url, print_line};

pub fn handle(ctx: &AppContext, cmd: WsCommand) -> Result<()> {
    match cmd {
        WsCommand::Current(args) => ws_current(ctx, args),
        WsCommand::Set(args) => ws_set(ctx, args),
        WsCommand::Use(args) => ws_use(ctx, args),
        WsCommand::Clear => {
            if ctx.dry_run {
                print_line(ctx, "Would clear workspace state.");
                return Ok(());
            }
            Config::clear()?;
            print_line(ctx, "Cleared workspace state.");
            Ok(())
        }
    }
}

fn ws_current(ctx: &AppContext, args: WsCurrentArgs) -> Result<()> {
    let config = load_config()?;
    let parsed = config.cluster_url()?;
    print_cluster_url(ctx, &parsed, args.output)
}

fn ws_set(ctx: &AppContext, args: WsSetArgs) -> Result<()> {
    let parsed = parse_cluster_url(&args.url)?;
    let next = if Config::exists()? {
        Config::load()
            .context("Failed to load config")?
            .switch_to(args.url)
    } else {
        Config::new(args.url)
    };
    save(ctx, &next)?;
    print_line(ctx, &format!("Current workspace is \"{}\".", parsed.cluster()));
    Ok(())
}

fn ws_use(ctx: &AppContext, args: WsUseArgs) -> Result<()> {
    let config = load_config()?;
    let current = config.cluster_url()?;
    let previous = config.previous_cluster_url()?;

    let target = resolve(
        current.cluster(),
        previous.as_ref().map(|p| p.cluster()),
        &args.reference,
    )?;
    // Going back restores the previous server as-is, host included.
    let server = match (&previous, args.reference.trim()) {
        (Some(previous), "-") => previous.to_string(),
        _ => current.base().cluster_url(&target),
    };
    info!(from = %current.cluster(), to = %target, %server, "switching workspace");

    save(ctx, &config.switch_to(server))?;
    print_line(ctx, &format!("Current workspace is \"{target}\"."));
    Ok(())
}

fn save(ctx: &AppContext, config: &Config) -> Result<()> {
    if ctx.dry_run {
        print_line(ctx, &format!("Would save server {}", config.server));
        return Ok(());
    }
    config.save()
}
