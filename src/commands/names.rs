use anyhow::{Context, Result, bail};
use clusterpath::consts::CLUSTER_ANNOTATION;
use clusterpath::object::{Object, ObjectMeta};
use clusterpath::output::OutputFormat;
use clusterpath::{
    Name, is_valid_cluster, parse_cluster_url, qualified_object_name, workspace_label_selector,
};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::cli::{ParseUrlArgs, QualifyArgs, SelectorArgs, ValidateArgs};
use crate::context::AppContext;
use crate::helpers::{
    maybe_print_json, maybe_print_table, print_cluster_url, print_line, read_input,
};

#[derive(Serialize)]
struct Validity<'a> {
    name: &'a str,
    valid: bool,
}

pub fn validate(ctx: &AppContext, args: ValidateArgs) -> Result<()> {
    let results: Vec<Validity> = args
        .names
        .iter()
        .map(|name| Validity {
            name,
            valid: is_valid_cluster(&Name::new(name.as_str())),
        })
        .collect();

    match args.output {
        OutputFormat::Json => maybe_print_json(ctx, &results)?,
        OutputFormat::Table => {
            let rows = results
                .iter()
                .map(|r| vec![r.name.to_string(), yes_no(r.valid).to_string()])
                .collect();
            maybe_print_table(ctx, &["Name", "Valid"], rows);
        }
        OutputFormat::Plain => {
            for r in &results {
                print_line(ctx, &format!("{}\t{}", r.name, yes_no(r.valid)));
            }
        }
    }

    let invalid = results.iter().filter(|r| !r.valid).count();
    if invalid > 0 {
        bail!("{invalid} of {} cluster name(s) invalid", results.len());
    }
    Ok(())
}

fn yes_no(valid: bool) -> &'static str {
    if valid { "yes" } else { "no" }
}

pub fn parse_url(ctx: &AppContext, args: ParseUrlArgs) -> Result<()> {
    let parsed = parse_cluster_url(&args.url)?;
    print_cluster_url(ctx, &parsed, args.output)
}

pub fn qualify(ctx: &AppContext, args: QualifyArgs) -> Result<()> {
    let key = match args.file {
        Some(path) => {
            let raw = read_input(&path)?;
            let object: Object = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid object JSON: {}", path.display()))?;
            qualified_object_name(&object)
        }
        None => {
            let mut annotations = BTreeMap::new();
            if let Some(cluster) = args.cluster {
                annotations.insert(CLUSTER_ANNOTATION.to_string(), cluster);
            }
            let meta = ObjectMeta {
                name: args.name.unwrap_or_default(),
                namespace: args.namespace,
                annotations,
            };
            qualified_object_name(&meta)
        }
    };
    print_line(ctx, &key);
    Ok(())
}

pub fn selector(ctx: &AppContext, args: SelectorArgs) -> Result<()> {
    print_line(ctx, &workspace_label_selector(&args.workspace));
    Ok(())
}
