//! Version code command

use wrench_core::shorten_version;

use crate::error::Result;

/// Print the compact code for a four-segment version
pub fn run_shorten_version(version: &str) -> Result<()> {
    println!("{}", shorten_version(version)?);
    Ok(())
}
