//! Command implementations.

pub mod check;
pub mod config;
pub mod draw;

pub use self::check::execute_check;
pub use self::config::execute_config;
pub use self::draw::execute_draw;

use crate::error::Result;
use giftmatch_gatekeeper::ExchangeDraft;
use std::fs;
use std::path::Path;

/// Read an exchange draft from disk.
///
/// Files ending in `.json` are parsed as JSON, everything else as TOML.
pub fn load_draft(path: &Path) -> Result<ExchangeDraft> {
    let contents = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::from_str(&contents)?)
    } else {
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use tempfile::TempDir;

    #[test]
    fn test_load_toml_and_json() {
        let dir = TempDir::new().unwrap();

        let toml_path = dir.path().join("x.toml");
        fs::write(&toml_path, "name = \"x\"\nparticipants = [\"A\", \"B\"]\n").unwrap();
        let draft = load_draft(&toml_path).unwrap();
        assert_eq!(draft.participants, vec!["A", "B"]);

        let json_path = dir.path().join("x.JSON");
        fs::write(&json_path, r#"{"name": "x", "participants": ["C", "D"]}"#).unwrap();
        let draft = load_draft(&json_path).unwrap();
        assert_eq!(draft.participants, vec!["C", "D"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_draft(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
