//! Build automation tasks for the Dog Breeds API
//!
//! - Generating the OpenAPI document from the server's route descriptions
//! - Checking that the committed document is up to date

use anyhow::{bail, Context};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for the Dog Breeds API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Write the OpenAPI document served at /api-docs.json to a file
    GenerateOpenapi {
        /// Output file for the generated document
        #[arg(short, long, default_value = "docs/openapi.json")]
        output: PathBuf,

        /// Fail instead of writing when the file is out of date
        #[arg(long)]
        check: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateOpenapi { output, check } => generate_openapi(&output, check)?,
    }

    Ok(())
}

fn generate_openapi(output: &Path, check: bool) -> anyhow::Result<()> {
    let document = breeds_server::api::openapi::document();
    let mut rendered = serde_json::to_string_pretty(&document)?;
    rendered.push('\n');

    if check {
        let current = fs::read_to_string(output)
            .with_context(|| format!("Failed to read {}", output.display()))?;
        if current != rendered {
            bail!(
                "{} is out of date, run `cargo xtask generate-openapi`",
                output.display()
            );
        }
        println!("{} is up to date", output.display());
        return Ok(());
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, rendered)?;

    println!("✅ Generated OpenAPI document at: {}", output.display());

    Ok(())
}
