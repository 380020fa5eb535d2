//! Context resolution commands

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use wrench_fs::{OutputFormat, io, render};

use crate::cli::SourceArgs;
use crate::commands::source::resolve_instance;
use crate::error::{CliError, Result};

/// Resolve contexts and print them, or write them to `output`.
///
/// Without an explicit format the output file extension decides, falling
/// back to JSON.
pub fn run_resolve(
    source: &SourceArgs,
    target: Option<&str>,
    format: Option<OutputFormat>,
    output: Option<&Path>,
) -> Result<()> {
    let format = match (format, output) {
        (Some(format), _) => format,
        (None, Some(path)) => OutputFormat::from_path(path)?,
        (None, None) => OutputFormat::default(),
    };

    let resolved = resolve_instance(source)?;
    let content = match target {
        Some(name) => {
            let context = resolved.context(name).ok_or_else(|| {
                let declared = resolved.target_names();
                CliError::user(format!(
                    "Unknown target '{name}'. Declared targets: {}",
                    if declared.is_empty() {
                        "(none)".to_string()
                    } else {
                        declared.join(", ")
                    }
                ))
            })?;
            render(context, format)?
        }
        None => render(&resolved.contexts(), format)?,
    };

    match output {
        Some(path) => {
            io::write_atomic(path, content.as_bytes())?;
            println!(
                "{} Wrote {} to {}",
                "OK".green().bold(),
                target.map_or_else(|| "all contexts".to_string(), |name| format!("context '{name}'")),
                path.display()
            );
        }
        None => write_document(&mut std::io::stdout().lock(), &content)?,
    }
    Ok(())
}

/// List declared targets, one per line
pub fn run_targets(source: &SourceArgs) -> Result<()> {
    let resolved = resolve_instance(source)?;
    let names = resolved.target_names();

    if names.is_empty() {
        println!("{}", "(none)".dimmed());
        return Ok(());
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}

/// Print the resolved system subtree
pub fn run_tree(source: &SourceArgs, format: OutputFormat) -> Result<()> {
    let resolved = resolve_instance(source)?;
    write_document(&mut std::io::stdout().lock(), &render(resolved.system(), format)?)
}

/// Write a rendered document, ending it with exactly one newline.
///
/// A closed stdout surfaces as [`CliError::Io`] instead of a panic.
fn write_document(out: &mut impl Write, content: &str) -> Result<()> {
    out.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
