//! Flat properties display

use indexmap::IndexMap;
use wrench_fs::{OutputFormat, render};

use crate::cli::SourceArgs;
use crate::commands::source::resolve_instance;
use crate::error::Result;

/// Print the effective properties in key order, as `key=value` lines or JSON
pub fn run_properties(source: &SourceArgs, json: bool) -> Result<()> {
    let resolved = resolve_instance(source)?;
    let properties = resolved.properties();

    if json {
        let map: IndexMap<&str, &str> = properties.iter().collect();
        println!("{}", render(&map, OutputFormat::Json)?);
        return Ok(());
    }

    for (key, value) in properties.iter() {
        println!("{key}={value}");
    }
    Ok(())
}
