//! nyan - a small terminal text editor inside a cat.
//!
//! # Usage
//!
//! ```bash
//! nyan notes.txt
//! nyan --padding-lines 2 notes.txt
//! nyan --status-ttl 20 --save
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nyan::app::{App, DEFAULT_STATUS_TTL};
use nyan::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};

/// A small terminal text editor inside a cat
#[derive(Parser, Debug)]
#[command(name = "nyan", version, about, long_about = None)]
struct Cli {
    /// File to edit; created on the first save if it does not exist
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Never give the editor region fewer rows than this
    #[arg(long, value_name = "N")]
    min_editor_lines: Option<u16>,

    /// Blank rows requested below the last line of the document
    #[arg(long, value_name = "N")]
    padding_lines: Option<u16>,

    /// Frames a status message stays on screen
    #[arg(long, value_name = "N")]
    status_ttl: Option<u16>,

    /// Write debug logs to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save the given flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            min_editor_lines: self.min_editor_lines,
            padding_lines: self.padding_lines,
            status_ttl: self.status_ttl,
            log_file: self.log_file.clone(),
        }
    }
}

/// The terminal belongs to the UI, so logs go to a file. Without one,
/// output stays off unless `RUST_LOG` asks for it.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
            )
            .with_writer(std::io::stderr)
            .init();
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nyan=debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log_file.as_deref())?;
    tracing::debug!(?effective, "configuration resolved");

    let app = App::new(cli.file)
        .with_chrome(effective.chrome())
        .with_status_ttl(effective.status_ttl.unwrap_or(DEFAULT_STATUS_TTL));

    app.run().context("Application error")
}
