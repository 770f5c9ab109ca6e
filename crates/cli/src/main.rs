mod cmd;
mod logging;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use gh_frontmatter_core::config::{ConfigLoader, ResolvedConfig, parse_date_zone};
use gh_frontmatter_core::yaml::YamlVersion;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "ghfm", version, about = "Render markdown frontmatter as GitHub-style tables")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/gh-frontmatter/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Render a sequence at the root as a table
    #[arg(long, global = true)]
    allow_array_at_root: bool,

    /// Render a scalar or null at the root as a table
    #[arg(long, global = true)]
    allow_primitive_at_root: bool,

    /// YAML version used to resolve plain scalars (1.1 or 1.2)
    #[arg(long, global = true, value_name = "VERSION")]
    yaml_version: Option<YamlVersion>,

    /// Reject mappings with duplicate keys
    #[arg(long, global = true)]
    unique_keys: bool,

    /// Zone for printing dates: "local", "utc" or an offset like "+02:00"
    #[arg(long, global = true, value_name = "ZONE")]
    date_zone: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print the resolved settings
    Doctor,

    /// Render a markdown document to HTML with its frontmatter as a table
    Render {
        /// Markdown file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Write the HTML here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Render only the frontmatter table
    Table {
        /// Markdown file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// Treat the whole input as raw YAML
        #[arg(long)]
        yaml: bool,

        /// Print the fragment as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Commands::Doctor = cli.command {
        cmd::doctor::run(cli.config.as_deref(), |cfg| apply_overrides(&cli, cfg));
        return Ok(());
    }

    let mut cfg = ConfigLoader::load(cli.config.as_deref())?;
    apply_overrides(&cli, &mut cfg)?;
    logging::init(&cfg)?;

    let result = match cli.command {
        Commands::Doctor => Ok(()),
        Commands::Render { ref file, ref output } => {
            cmd::render::run(&cfg, file.as_deref(), output.as_deref())
        }
        Commands::Table { ref file, yaml, json } => {
            cmd::table::run(&cfg, file.as_deref(), yaml, json)
        }
    };

    logging::flush();
    result
}

/// Command-line flags win over the config file.
fn apply_overrides(cli: &Cli, cfg: &mut ResolvedConfig) -> Result<()> {
    if cli.allow_array_at_root {
        cfg.render.allow_array_at_root = true;
    }
    if cli.allow_primitive_at_root {
        cfg.render.allow_primitive_at_root = true;
    }
    if let Some(version) = cli.yaml_version {
        cfg.parse.version = version;
    }
    if cli.unique_keys {
        cfg.parse.unique_keys = true;
    }
    if let Some(ref zone) = cli.date_zone {
        cfg.render.date_zone = parse_date_zone(zone)?;
    }
    Ok(())
}

/// Read a file, or stdin when no path is given.
pub(crate) fn read_input(file: Option<&Path>) -> Result<String> {
    use color_eyre::eyre::WrapErr;

    match file {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display())),
        None => std::io::read_to_string(std::io::stdin()).wrap_err("failed to read stdin"),
    }
}
