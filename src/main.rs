//! qrmint CLI entrypoint

use anyhow::Result;
use clap::Parser;
use qrmint::{
    ConsolePrompter, MintConfig, QrMinter, QrmintConfig, SessionInputs, SystemViewer, logging,
    output, session,
};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "qrmint",
    version,
    about = "Generate a QR code PNG from text and open it in the system viewer"
)]
struct Cli {
    /// Optional configuration file (toml/yaml). Defaults to qrmint.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Encode TEXT instead of prompting for it
    #[arg(long, value_name = "TEXT")]
    text: Option<String>,

    /// Output filename; the extension is forced to .png and the prompt is skipped
    #[arg(long, short = 'o', value_name = "NAME")]
    output: Option<String>,

    /// Override the error correction level (low/medium/quartile/high)
    #[arg(long, value_name = "LEVEL")]
    ec_level: Option<String>,

    /// Override the side length of one module in pixels
    #[arg(long, value_name = "PIXELS")]
    module_size: Option<u32>,

    /// Render the symbol without the standard 4-module quiet zone
    #[arg(long)]
    no_quiet_zone: bool,

    /// Do not launch the platform image viewer after saving
    #[arg(long)]
    no_open: bool,

    /// Output the session result as formatted JSON instead of status lines
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = QrmintConfig::load(cli.config.as_deref())?;

    if let Some(ref level) = cli.ec_level {
        config.render.ec_level = Some(level.clone());
    }

    if let Some(px) = cli.module_size {
        config.render.module_size = Some(px);
    }

    if cli.no_quiet_zone {
        config.render.quiet_zone = Some(false);
    }

    if cli.no_open {
        config.output.open_viewer = false;
    }

    logging::init(&config.logging)?;

    let render = config.render_config()?;
    let output_config = config.output_config()?;
    debug!(?render, ?output_config, "Resolved configuration");

    let minter = QrMinter::new(MintConfig { render });
    let inputs = SessionInputs {
        text: cli.text,
        file_name: cli.output,
    };

    let mut prompter = if cli.json {
        ConsolePrompter::quiet()
    } else {
        ConsolePrompter::new()
    };

    let outcome = session::run(&minter, &output_config, inputs, &mut prompter, &SystemViewer)?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::outcome_value(&outcome))?
        );
    }

    Ok(())
}
