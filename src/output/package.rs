use crate::error::OutputError;
use crate::pipeline::PublishPackage;
use std::fs;
use std::path::{Path, PathBuf};

/// Max characters of the title kept in a file name
const SLUG_LEN: usize = 48;

/// `<NNN>-<slug>.json`, numbered by position in the batch
pub fn package_file_name(index: usize, title: &str) -> String {
    let mut slug = String::new();
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug: String = slug.trim_end_matches('-').chars().take(SLUG_LEN).collect();
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        format!("{:03}.json", index + 1)
    } else {
        format!("{:03}-{}.json", index + 1, slug)
    }
}

/// Write one package as pretty JSON, returning its path
pub fn write_package(
    out_dir: &Path,
    index: usize,
    package: &PublishPackage,
) -> Result<PathBuf, OutputError> {
    fs::create_dir_all(out_dir).map_err(OutputError::CreateDir)?;

    let path = out_dir.join(package_file_name(index, &package.title));
    let json = serde_json::to_string_pretty(package)?;
    fs::write(&path, json).map_err(OutputError::WritePackage)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_package_file_name() {
        assert_eq!(package_file_name(0, "Quarterly Results: 2024!"), "001-quarterly-results-2024.json");
        assert_eq!(package_file_name(11, "  ¿¿  "), "012.json");
    }

    #[test]
    fn test_write_package() {
        let dir = tempfile::tempdir().unwrap();
        let package = PublishPackage {
            title: "Hello World".to_string(),
            content: "c".to_string(),
            author: None,
            email: None,
            category: None,
            reviews: vec![],
            tags: vec!["hello".to_string(), "world".to_string()],
            summary: "Brief overview of Hello World.".to_string(),
            issues: vec![],
            submission_date: Utc::now(),
        };

        let path = write_package(&dir.path().join("out"), 2, &package).unwrap();
        assert!(path.ends_with("003-hello-world.json"));

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["summary"], "Brief overview of Hello World.");
        assert!(written["submissionDate"].as_str().unwrap().ends_with('Z'));
    }
}
