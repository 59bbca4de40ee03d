use anyhow::{Context, Result};
use clusterpath::helper::ClusterUrl;
use clusterpath::output::{OutputFormat, print_json, print_table};
use serde::Serialize;
use std::io::Read;
use std::path::Path;

use crate::context::AppContext;

pub fn maybe_print_json<T: serde::Serialize>(ctx: &AppContext, value: &T) -> Result<()> {
    if ctx.quiet {
        return Ok(());
    }
    print_json(value)
}

pub fn maybe_print_table(ctx: &AppContext, headers: &[&str], rows: Vec<Vec<String>>) {
    if ctx.quiet {
        return;
    }
    print_table(headers, rows);
}

pub fn print_line(ctx: &AppContext, message: &str) {
    if ctx.quiet {
        return;
    }
    println!("{message}");
}

/// Reads a file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        return Ok(input);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[derive(Serialize)]
struct ClusterUrlView {
    url: String,
    base: String,
    cluster: String,
}

impl From<&ClusterUrl> for ClusterUrlView {
    fn from(parsed: &ClusterUrl) -> Self {
        Self {
            url: parsed.to_string(),
            base: parsed.base().to_string(),
            cluster: parsed.cluster().to_string(),
        }
    }
}

pub fn print_cluster_url(ctx: &AppContext, parsed: &ClusterUrl, output: OutputFormat) -> Result<()> {
    let view = ClusterUrlView::from(parsed);
    match output {
        OutputFormat::Json => maybe_print_json(ctx, &view)?,
        OutputFormat::Table => maybe_print_table(
            ctx,
            &["Base URL", "Cluster"],
            vec![vec![view.base, view.cluster]],
        ),
        OutputFormat::Plain => {
            print_line(ctx, &view.base);
            print_line(ctx, &view.cluster);
        }
    }
    Ok(())
}
