use crate::pipeline::StreetIndex;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the street index as pretty-printed UTF-8 JSON.
///
/// Parent directories are created as needed. Non-ASCII characters are
/// written as-is, indentation is two spaces.
pub fn write_street_index(path: &Path, index: &StreetIndex) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, index)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_parents_and_keeps_umlauts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app").join("data").join("streets.json");

        let mut index = StreetIndex::default();
        index.insert(
            "13507",
            vec!["Berliner Straße".to_string(), "Veitstraße".to_string()],
        );
        index.insert("13509", Vec::new());

        write_street_index(&path, &index).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n  \"13507\": [\n    \"Berliner Straße\",\n    \"Veitstraße\"\n  ],\n  \"13509\": []\n}"
        );
    }

    #[test]
    fn test_write_fails_when_parent_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let result = write_street_index(&blocker.join("streets.json"), &StreetIndex::default());
        assert!(result.is_err());
    }
}
