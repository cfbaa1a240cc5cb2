//! Mirrors command implementation.

use crate::cli::MirrorsArgs;
use crate::config::Config;
use anyhow::Result;

/// Run the mirrors command.
pub fn run(args: MirrorsArgs, config: &Config) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&config.mirrors)?);
        return Ok(());
    }

    if config.mirrors.is_empty() {
        println!("No mirrors configured.");
        return Ok(());
    }

    println!("  {:<16} {:<50}", "NAME", "URL");
    println!("  {}", "-".repeat(66));
    for mirror in &config.mirrors {
        println!("  {:<16} {:<50}", mirror.name, mirror.url);
    }

    Ok(())
}
