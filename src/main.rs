use clap::{Parser, Subcommand};
use docnav::{collections, linking, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docnav")]
#[command(about = "Navigation and ordering toolchain for markdown documentation content")]
#[command(long_about = "\
Navigation and ordering toolchain for markdown documentation content

Your filesystem is the data source. Top-level directories are collections,
markdown files with TOML frontmatter are entries, and depends_on chains in
frontmatter decide reading order.

Content structure:

  content/
  ├── collections.toml             # Collection order, names, sort methods
  ├── concepts/                    # Collection (sort = \"dependency\")
  │   ├── large-language-models.md # No depends_on = chain root
  │   ├── context.md               # depends_on = \"large-language-models\"
  │   └── tools.md                 # depends_on = \"context\"
  ├── patterns/                    # Collection (sort = \"alphabetical\")
  │   └── small-steps.md           # relates_to = [\"context-rot\"]
  └── failure-modes/
      └── context-rot.md

Entry frontmatter (+++ fenced TOML):

  title       required
  depends_on  slug of the prerequisite entry (same collection)
  relates_to  slugs of related entries (any collection)
  aliases     alternate link ids
  draft       true = skipped by the scanner

Run 'docnav gen-config' to print a documented collections.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content into manifest.json and print the inventory
    Scan {
        /// Where to write the manifest
        #[arg(long, default_value = "manifest.json")]
        manifest: PathBuf,
    },
    /// Print the unified navigation list in reading order
    Nav,
    /// Validate content: references, dependency chains, frontmatter
    Check,
    /// Print link-target records as JSON
    LinkTargets,
    /// Print a stock collections.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan { manifest: manifest_path } => {
            let manifest = scan::scan(&cli.source)?;
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest);
            println!("Manifest: {}", manifest_path.display());
        }
        Command::Nav => {
            let manifest = scan::scan(&cli.source)?;
            let nav = collections::build_nav(&manifest.collections);
            output::print_nav_output(&nav);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let warnings = scan::validate(&manifest);
            output::print_check_output(&warnings);
            if !warnings.is_empty() {
                std::process::exit(1);
            }
        }
        Command::LinkTargets => {
            let manifest = scan::scan(&cli.source)?;
            let targets = linking::link_targets(&manifest);
            println!("{}", serde_json::to_string_pretty(&targets)?);
        }
        Command::GenConfig => {
            print!("{}", collections::stock_config_toml());
        }
    }

    Ok(())
}
