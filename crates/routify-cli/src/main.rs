mod commands;
mod config;
mod format;

use clap::Parser;
use colored::Colorize;

use crate::commands::generate::{self, GenerateOptions};
use crate::config::Config;

#[derive(Parser)]
#[command(name = "routify")]
#[command(version, about = "Generate a typed route table from a Next.js app router directory", long_about = None)]
struct Cli {
    /// Output directory for the generated module
    #[arg(short, long)]
    output: Option<String>,

    /// Output filename
    #[arg(short, long)]
    filename: Option<String>,

    /// Path to a prettier config forwarded to the formatter
    #[arg(long)]
    prettier_config: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let result = Config::load().and_then(|config| {
        let options = GenerateOptions::resolve(
            cli.output,
            cli.filename,
            cli.prettier_config,
            cli.debug,
            &config,
        );
        generate::execute(&options)
    });

    match result {
        Ok(file_path) => {
            println!("{} Routes generated successfully!", "✓".green());
            println!("{} {}", "Output:".dimmed(), file_path.display());
        }
        Err(error) => {
            eprintln!("{} {:#}", "✗ Error:".red(), error);
            std::process::exit(1);
        }
    }
}
