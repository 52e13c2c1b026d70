use crate::error::{Result, ScanError};
use crate::types::profile::ProfileDocument;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn read_profile(path: &Path) -> Result<ProfileDocument> {
    if !path.exists() {
        return Err(ScanError::PathNotFound(path.display().to_string()));
    }
    let raw = std::fs::read_to_string(path)?;
    ProfileDocument::from_json_str(&raw).map_err(|source| ScanError::InvalidProfile {
        path: path.display().to_string(),
        source,
    })
}

/// Every `*.json` file under `root`, sorted for stable batch output.
pub fn profile_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ScanError::PathNotFound(root.display().to_string()));
    }
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json"))
        .collect();
    files.sort();
    Ok(files)
}

/// Slug for a profile file: the document's own slug, else the file stem.
pub fn fallback_slug(doc: &ProfileDocument, path: &Path) -> Option<String> {
    doc.slug_text().or_else(|| {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_profile_is_path_not_found() {
        let dir = tempfile::TempDir::new().expect("temp dir should be created");
        let err = read_profile(&dir.path().join("absent.json")).expect_err("read should fail");
        assert!(matches!(err, ScanError::PathNotFound(_)));
    }

    #[test]
    fn malformed_profile_is_invalid() {
        let dir = tempfile::TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").expect("fixture should be written");
        let err = read_profile(&path).expect_err("read should fail");
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn profile_files_finds_nested_json_only() {
        let dir = tempfile::TempDir::new().expect("temp dir should be created");
        std::fs::create_dir_all(dir.path().join("north")).expect("dir should be created");
        std::fs::write(dir.path().join("b.json"), "{}").expect("fixture should be written");
        std::fs::write(dir.path().join("north/a.json"), "{}").expect("fixture should be written");
        std::fs::write(dir.path().join("notes.txt"), "x").expect("fixture should be written");

        let files = profile_files(dir.path()).expect("listing should succeed");
        let names: Vec<_> = files
            .iter()
            .map(|path| {
                path.strip_prefix(dir.path())
                    .expect("path should be under root")
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(names, vec!["b.json", "north/a.json"]);
    }

    #[test]
    fn slug_falls_back_to_file_stem() {
        let with_slug = ProfileDocument::from_json_str(r#"{"slug": " alpha-school "}"#)
            .expect("document should parse");
        assert_eq!(
            fallback_slug(&with_slug, Path::new("profiles/other.json")),
            Some("alpha-school".to_string())
        );
        assert_eq!(
            fallback_slug(&ProfileDocument::default(), Path::new("profiles/beta.json")),
            Some("beta".to_string())
        );
    }
}
