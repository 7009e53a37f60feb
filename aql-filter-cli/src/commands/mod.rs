//! CLI command implementations.

pub mod check;
pub mod init;
pub mod process;
pub mod version;

use std::path::Path;
use tokio::io::AsyncReadExt;

use crate::error::{CliError, CliResult};

/// Read a filter spec from a file, or from stdin for `None` / `-`.
pub async fn read_input(path: Option<&Path>) -> CliResult<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            tokio::fs::read_to_string(path).await.map_err(|e| {
                CliError::Config(format!("Failed to read {}: {}", path.display(), e))
            })
        }
        _ => {
            let mut input = String::new();
            tokio::io::stdin().read_to_string(&mut input).await?;
            Ok(input)
        }
    }
}

/// Blank input means no filter was requested.
pub fn normalize_input(input: &str) -> &str {
    if input.trim().is_empty() { "null" } else { input }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_input() {
        assert_eq!(normalize_input(""), "null");
        assert_eq!(normalize_input(" \n"), "null");
        assert_eq!(normalize_input("{}"), "{}");
    }

    #[tokio::test]
    async fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filter.json");
        std::fs::write(&path, r#"{"limit": 1}"#).unwrap();
        assert_eq!(read_input(Some(&path)).await.unwrap(), r#"{"limit": 1}"#);
    }

    #[tokio::test]
    async fn test_read_input_missing_file() {
        let err = read_input(Some(Path::new("missing.json"))).await.unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
