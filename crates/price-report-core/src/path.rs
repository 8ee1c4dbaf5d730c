use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};

/// Expand a leading `~` to the user's home directory.
///
/// Everything after the `~` is appended below the home directory, so
/// `~/data/products.txt` and `~data/products.txt` both resolve inside it.
pub fn expand_home(input: &str) -> Result<PathBuf> {
    if !input.starts_with('~') {
        return Ok(PathBuf::from(input));
    }
    let home = dirs::home_dir().ok_or(ReportError::HomeNotFound)?;
    Ok(expand_home_with(input, &home))
}

fn expand_home_with(input: &str, home: &Path) -> PathBuf {
    match input.strip_prefix('~') {
        Some(rest) => {
            let rest = rest.trim_start_matches(['/', '\\']);
            if rest.is_empty() {
                home.to_path_buf()
            } else {
                home.join(rest)
            }
        }
        None => PathBuf::from(input),
    }
}
