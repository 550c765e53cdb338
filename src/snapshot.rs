//! Portfolio snapshot persistence.
//!
//! The portfolio is read-only at runtime; it enters the process as a JSON
//! snapshot produced by the seeding tool (or an upstream export) and is
//! handed to the server at startup. Writes go to a temp file and then
//! rename, so a reader never observes a torn snapshot.

use std::fs;
use std::path::Path;

use crate::errors::Result;
use crate::types::Loan;

/// Load a portfolio snapshot from a JSON file.
pub fn load(path: &Path) -> Result<Vec<Loan>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Write a portfolio snapshot as pretty-printed JSON.
///
/// Creates parent directories as needed.
pub fn save(path: &Path, loans: &[Loan]) -> Result<()> {
    let json = serde_json::to_string_pretty(loans)?;
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::demo_portfolio;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn test_path(name: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "snapshot_test_{}_{}_{name}",
            std::process::id(),
            id
        ))
    }

    #[test]
    fn test_save_then_load_round_trips_demo_portfolio() {
        let dir = test_path("round_trip");
        let path = dir.join("portfolio.json");

        let loans = demo_portfolio();
        save(&path, &loans).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded.len(), loans.len());
        assert_eq!(loaded[0].borrower_name, loans[0].borrower_name);
        assert_eq!(loaded[0].covenants[0].status, loans[0].covenants[0].status);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_leaves_no_temp_file_behind() {
        let dir = test_path("no_tmp");
        let path = dir.join("portfolio.json");

        save(&path, &demo_portfolio()).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let path = test_path("missing").join("nope.json");
        assert!(load(&path).is_err());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = test_path("malformed");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("portfolio.json");
        fs::write(&path, "{not json").unwrap();

        assert!(load(&path).is_err());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_wire_format_uses_snake_case_keys() {
        let dir = test_path("wire");
        let path = dir.join("portfolio.json");

        save(&path, &demo_portfolio()).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"borrower_name\""));
        assert!(raw.contains("\"covenants\""));
        assert!(raw.contains("\"Critical\""));

        let _ = fs::remove_dir_all(&dir);
    }
}
