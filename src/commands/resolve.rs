//! Resolve command implementation.

use crate::cli::ResolveArgs;
use crate::config::Config;
use crate::discovery::{self, DiscoveryOptions};
use crate::error::RouterError;
use crate::router::{PathRouter, ProjectTree};
use anyhow::Result;
use std::path::Path;

/// Run the resolve command.
pub fn run(args: ResolveArgs, root_override: Option<&Path>, config: &Config) -> Result<()> {
    // Resolve to absolute path
    let project_root = args
        .path
        .canonicalize()
        .unwrap_or_else(|_| args.path.clone());

    let build_root = match root_override {
        Some(root) => root.to_path_buf(),
        None => config.build_root(&project_root),
    };

    let router = PathRouter::with_root(&build_root)?;
    let tree = enumerate(&args, config, &project_root, &build_root)?;

    if let Some(name) = &args.project {
        let node = tree
            .get(name)
            .ok_or_else(|| RouterError::UnknownProject(name.clone()))?;
        let output = router.resolve_output(node)?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&project_json(node, &output))?);
        } else {
            println!("{}", output.display());
        }
        return Ok(());
    }

    if args.json {
        let projects = tree
            .nodes()
            .iter()
            .map(|node| {
                let output = router.resolve_output(node)?;
                Ok(project_json(node, &output))
            })
            .collect::<Result<Vec<_>>>()?;

        let doc = serde_json::json!({
            "build_root": build_root,
            "projects": projects,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    if tree.is_empty() {
        println!("No subprojects found in {}.", project_root.display());
        return Ok(());
    }

    println!("  {:<20} {:<40}", "PROJECT", "OUTPUT");
    println!("  {}", "-".repeat(60));
    for node in tree.nodes() {
        let output = router.resolve_output(node)?;
        println!("  {:<20} {:<40}", node.name, output.display());
    }

    println!(
        "\nRouted {} subproject{} under {}",
        tree.len(),
        if tree.len() == 1 { "" } else { "s" },
        build_root.display()
    );

    Ok(())
}

fn enumerate(
    args: &ResolveArgs,
    config: &Config,
    project_root: &Path,
    build_root: &Path,
) -> Result<ProjectTree> {
    if !config.discovery.subprojects.is_empty() {
        return Ok(discovery::from_names(
            project_root,
            &config.discovery.subprojects,
        )?);
    }

    let options = DiscoveryOptions {
        max_depth: args.max_depth.unwrap_or(config.discovery.max_depth),
        exclude: args
            .exclude
            .clone()
            .unwrap_or_else(|| config.discovery.exclude.clone()),
        follow_symlinks: false,
    };

    Ok(discovery::discover(project_root, &options, Some(build_root))?)
}

fn project_json(node: &crate::router::ProjectNode, output: &Path) -> serde_json::Value {
    serde_json::json!({
        "name": node.name,
        "path": node.path,
        "parent": node.parent,
        "output": output,
    })
}
