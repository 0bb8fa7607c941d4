use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use docx_outline::document::{ViewerRole, load_document};
use docx_outline::export::{ExportFormat, export};
use docx_outline::Config;

#[derive(Parser)]
#[command(name = "docx-outline")]
#[command(version)]
#[command(about = "Paragraph statistics and heading outline for .docx files", long_about = None)]
struct Cli {
    /// Input .docx file
    #[arg(value_name = "FILE", required_unless_present = "init_config")]
    file: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,

    /// Who the output is for; restricted viewers only get counts
    #[arg(long, value_enum)]
    role: Option<ViewerRole>,

    /// Compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if cli.init_config {
        Config::init_default()?;
        match Config::get_config_path() {
            Some(path) => println!("Wrote default config to {}", path.display()),
            None => bail!("No config directory available on this platform"),
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let Some(file_path) = cli.file else {
        bail!("No input file given");
    };

    let result = load_document(&file_path)
        .await
        .with_context(|| format!("Failed to process {}", file_path.display()))?;

    let format = cli.format.unwrap_or(config.output.format);
    let role = cli.role.unwrap_or(config.output.role);
    let pretty = config.output.pretty && !cli.compact;
    let rendered = export(&result, format, role, pretty)?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote output to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
