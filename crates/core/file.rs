use std::{fs::OpenOptions, io::Write, path::Path};

use eyre::{Context, Result};
use log::trace;

/// Writes `content` to a new file at `path`, an existing file is never overwritten.
pub fn write_new_file(path: &Path, content: &str) -> Result<()> {
    trace!("Creating '{}'", path.display());
    let mut file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(path)
        .wrap_err_with(|| format!("Failed to create the '{}' file.", path.display()))?;

    file.write_all(content.as_bytes())
        .and_then(|_| file.write_all(b"\n"))
        .wrap_err_with(|| format!("Cannot write results to '{}'", path.display()))
}
