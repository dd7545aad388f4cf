//! I/O helpers for file/stdin/stdout handling
//!
//! `None` and the conventional `-` both mean the standard stream.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// The path, unless it is missing or `-`
fn file_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| p.as_os_str() != "-")
}

/// Read item JSON from a file or stdin
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    if let Some(p) = file_path(path) {
        return fs::read(p).with_context(|| format!("Failed to read {}", p.display()));
    }

    let mut buf = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut buf)
        .context("Failed to read item JSON from stdin")?;
    Ok(buf)
}

/// Write rendered YAML to a file or stdout
pub fn write_output(path: Option<&Path>, yaml: &str) -> Result<()> {
    if let Some(p) = file_path(path) {
        return fs::write(p, yaml).with_context(|| format!("Failed to write {}", p.display()));
    }

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(yaml.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write YAML to stdout")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_means_stdio() {
        assert_eq!(file_path(Some(Path::new("-"))), None);
        assert_eq!(file_path(None), None);
        assert_eq!(
            file_path(Some(Path::new("item.json"))),
            Some(Path::new("item.json"))
        );
    }

    #[test]
    fn test_file_round_trip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.yml");
        write_output(Some(&path), "Header:\n")?;
        assert_eq!(read_input(Some(&path))?, b"Header:\n");
        Ok(())
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = read_input(Some(Path::new("/nonexistent/item.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/item.json"));
    }
}
