use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

/// Expand a template file: resolve `<%field%>` placeholders and run its
/// print/save directives.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the template file
    template: PathBuf,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let template = massup_core::load(&cli.template)
        .with_context(|| cli.template.display().to_string())?;

    template.run()?;

    Ok(())
}
