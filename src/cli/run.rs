//! Command handlers.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::args::{Cli, Commands, OutputArgs};
use super::input::resolve_record;
use crate::config::expand_path;
use crate::render::{Artifacts, head_snippet, html_document, robots_txt, sitemap_xml};
use crate::share::{self, parse_share, share_link, share_token};
use crate::{log, logger};

/// Run the parsed command.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Head { input, output } => {
            // Snippet has no trailing newline of its own
            let head = format!("{}\n", head_snippet(&resolve_record(input)?));
            emit(&head, output)
        }
        Commands::Robots { input, output } => emit(&robots_txt(&resolve_record(input)?), output),
        Commands::Sitemap { input, output } => emit(&sitemap_xml(&resolve_record(input)?), output),
        Commands::Html { input, output } => emit(&html_document(&resolve_record(input)?), output),
        Commands::Build { input, out } => {
            let artifacts = Artifacts::render(&resolve_record(input)?);
            let written = artifacts.write_to(&expand_path(out))?;
            logger::status_success(&format!(
                "wrote {} files to {}",
                written.len(),
                out.display()
            ));
            Ok(())
        }
        Commands::Share {
            input,
            base,
            token_only,
        } => {
            let record = resolve_record(input)?;
            let line = if *token_only {
                share_token(&record)
            } else {
                share_link(base, &record)
                    .with_context(|| format!("invalid base URL `{base}`"))?
            };
            println!("{line}");
            Ok(())
        }
        Commands::Load { link, pretty } => load(link, *pretty),
    }
}

/// Print a share link's metadata, failing loudly since it was asked for explicitly.
fn load(link: &str, pretty: bool) -> Result<()> {
    let raw = match parse_share(link) {
        Ok(raw) => raw,
        Err(e) => {
            logger::status_error("could not load shared config", &e.to_string());
            bail!("invalid share link");
        }
    };

    let record = crate::meta::normalize(&raw);
    let json = record.to_json();
    let formatted = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        json.to_string()
    };
    println!("{formatted}");

    // Re-encoding a normalized record may differ from the input token
    if share::extract_token(link).as_deref() != Some(share_token(&record).as_str()) {
        log!("share"; "link was normalized on load");
    }
    Ok(())
}

/// Write text to `--output` or stdout.
fn emit(text: &str, output: &OutputArgs) -> Result<()> {
    match &output.output {
        Some(path) => write_file(&expand_path(path), text),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    log!("write"; "{}", path.display());
    Ok(())
}
