//! table_alter CLI
//!
//! Reads two `CREATE TABLE` definitions from files and prints the ALTER
//! statements that migrate between them.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use table_alter::config::{self, OutputFormat};
use table_alter::utils::init_logging;
use table_alter::{Config, TableAlterClient};

/// Generate ALTER TABLE statements from two CREATE TABLE definitions.
#[derive(Parser)]
#[command(name = "table_alter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File holding the current CREATE TABLE statement.
    #[arg(long, value_name = "PATH")]
    old: PathBuf,

    /// File holding the desired CREATE TABLE statement.
    #[arg(long, value_name = "PATH")]
    new: PathBuf,

    /// Table name to use in the statements (default: taken from the old DDL).
    #[arg(short, long)]
    table: Option<String>,

    /// TOML configuration file.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Leave out the rollback statements.
    #[arg(long)]
    no_reverse: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_from_file(path)?,
        None => Config::default(),
    };
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.no_reverse {
        config.output.include_reverse = false;
    }

    let mut logging = config.logging.clone().unwrap_or_default();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    init_logging(&logging)?;
    tracing::debug!(
        old = %cli.old.display(),
        new = %cli.new.display(),
        "reading table definitions"
    );

    let old_ddl = read_ddl(&cli.old)?;
    let new_ddl = read_ddl(&cli.new)?;

    let client = TableAlterClient::new(config);
    let plan = client.plan(&old_ddl, &new_ddl, cli.table.as_deref())?;
    print!("{}", client.render(&plan)?);

    Ok(())
}

fn read_ddl(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

