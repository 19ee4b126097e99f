use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use booknotes::config;
use booknotes::error::ConfigError;
use booknotes::pipeline::process_mailbox;

#[derive(Parser)]
#[command(name = "booknotes")]
#[command(about = "Fetch book-annotation export mails and render Markdown notes", long_about = None)]
struct Cli {
    /// Configuration file (default: <config dir>/booknotes/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dump the rendered notes to stdout instead of files
    #[arg(long)]
    stdout: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{e:#}");
        let code = e
            .downcast_ref::<ConfigError>()
            .map_or(1, ConfigError::exit_code);
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let path = match &cli.config {
        Some(p) => p.clone(),
        None => config::default_config_path().ok_or(ConfigError::NoConfigDir)?,
    };
    let mut cfg = config::load(&path)?;
    if cli.stdout {
        cfg.options.dump_stdout = true;
    }
    process_mailbox(&cfg)
}
