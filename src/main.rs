//! Markwright - A terminal rich-text editor that writes Markdown.
//!
//! # Usage
//!
//! ```bash
//! markwright
//! markwright draft.html
//! markwright --print draft.html
//! cat draft.html | markwright --print
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use markwright::app::App;
use markwright::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use markwright::convert::html_to_markdown;

/// A terminal rich-text editor that writes Markdown
#[derive(Parser, Debug)]
#[command(name = "markwright", version, about, long_about = None)]
struct Cli {
    /// HTML file to seed the editor with
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Convert FILE (or stdin) to Markdown on stdout and exit
    #[arg(short, long)]
    print: bool,

    /// Color palette (auto probes COLORFGBG)
    #[arg(long, value_enum, default_value = "auto")]
    theme: ThemeMode,

    /// External clipboard command, e.g. "wl-copy" or "xclip -sel c"
    #[arg(long, value_name = "CMD")]
    copy_command: Option<String>,

    /// Save current command-line flags as defaults in the global config
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

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

    let content = match &cli.file {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("File not found: {}", path.display());
            }
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None if effective.print => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
        None => String::new(),
    };

    if effective.print {
        let markdown = html_to_markdown(&content);
        println!("{markdown}");
        return Ok(());
    }

    let mut app = App::new()
        .with_content(content)
        .with_copy_command(effective.copy_command.clone())
        .with_theme(effective.theme.unwrap_or(ThemeMode::Auto))
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    app.run().context("Application error")
}
