//! Clean command implementation.

use crate::cli::CleanArgs;
use crate::config::Config;
use crate::router::{dir_size, CleanOutcome, PathRouter};
use anyhow::Result;
use humansize::{format_size, BINARY};
use std::io::{self, Write};
use std::path::Path;

/// Run the clean command.
pub fn run(args: CleanArgs, root_override: Option<&Path>, config: &Config) -> Result<()> {
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

    if args.dry_run {
        if build_root.exists() {
            println!(
                "[DRY RUN] Would remove {} ({})",
                build_root.display(),
                format_size(dir_size(&build_root), BINARY)
            );
        } else {
            println!(
                "[DRY RUN] Build root {} does not exist, nothing to clean.",
                build_root.display()
            );
        }
        return Ok(());
    }

    // Confirmation
    if !args.force && build_root.exists() {
        print!("Remove {} and everything beneath it? [y/N] ", build_root.display());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    match router.clean()? {
        CleanOutcome::Removed { freed_bytes } => {
            println!(
                "Removed {} (freed {})",
                build_root.display(),
                format_size(freed_bytes, BINARY)
            );
        }
        CleanOutcome::AlreadyClean => {
            println!(
                "Build root {} does not exist, nothing to clean.",
                build_root.display()
            );
        }
    }

    Ok(())
}
