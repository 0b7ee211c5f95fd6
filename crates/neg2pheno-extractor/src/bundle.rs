//! TXT and JSON bundles of affirmed mentions

use crate::config::TxtMode;
use crate::error::ExtractorError;
use neg2pheno_domain::affirmation::distinct_sorted;
use neg2pheno_domain::AffirmationMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

static UNSAFE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("valid filename pattern"));

/// One record of the JSON bundle
#[derive(Debug, Serialize)]
struct BundleRecord<'a> {
    id: &'a str,
    text: String,
}

/// Turn a document filename into a safe output file name
///
/// Names that would leave the input directory (absolute, drive-prefixed or
/// containing `..`) keep only their last component. Other relative
/// separators are flattened. Runs of characters outside `[A-Za-z0-9._-]`
/// become a single `_` and `.txt` is appended unless already present.
///
/// ```
/// use neg2pheno_extractor::sanitize_filename;
///
/// assert_eq!(sanitize_filename("patient/01: notes.txt"), "patient_01_notes.txt");
/// assert_eq!(sanitize_filename("/abs/dir/x.txt"), "x.txt");
/// assert_eq!(sanitize_filename("  "), "note.txt");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    let segments: Vec<&str> = name.split(['/', '\\']).collect();
    let escapes = name.starts_with(['/', '\\'])
        || has_drive_prefix(name)
        || segments.iter().any(|s| s.trim() == "..");

    let joined = if escapes {
        segments.last().copied().unwrap_or_default().to_string()
    } else {
        segments
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty() && *s != ".")
            .collect::<Vec<_>>()
            .join("/")
    };

    let trimmed = joined.trim();
    let base = if trimmed.is_empty() { "note" } else { trimmed };
    let mut safe = UNSAFE_RUN.replace_all(base, "_").into_owned();
    if !safe.to_lowercase().ends_with(".txt") {
        safe.push_str(".txt");
    }
    safe
}

fn has_drive_prefix(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Render mentions as TXT file content
///
/// Mentions are reduced to distinct trimmed non-empty strings in ascending
/// order; non-empty content ends with a newline.
pub fn render_txt(mentions: &[String], mode: TxtMode) -> String {
    let terms = distinct_sorted(mentions);
    if terms.is_empty() {
        return String::new();
    }
    let mut content = terms.join(mode.separator());
    content.push('\n');
    content
}

/// Write one TXT file per document into `<out_dir>/<subdir>`
///
/// Returns the directory written.
pub fn write_txt_bundle(
    out_dir: &Path,
    affirmed: &AffirmationMap,
    mode: TxtMode,
    subdir: &str,
) -> Result<PathBuf, ExtractorError> {
    let txt_dir = out_dir.join(subdir);
    fs::create_dir_all(&txt_dir)?;

    for (filename, mentions) in affirmed.iter() {
        let path = txt_dir.join(sanitize_filename(filename));
        debug!("Writing {}", path.display());
        fs::write(&path, render_txt(mentions, mode))?;
    }

    Ok(txt_dir)
}

/// Write every document as one `{id, text}` record of a JSON array
///
/// `text` holds the distinct mentions joined by `"; "`. Returns the file written.
pub fn write_json_bundle(
    out_dir: &Path,
    affirmed: &AffirmationMap,
    filename: &str,
) -> Result<PathBuf, ExtractorError> {
    let records: Vec<BundleRecord<'_>> = affirmed
        .iter()
        .map(|(id, mentions)| BundleRecord {
            id,
            text: distinct_sorted(mentions).join("; "),
        })
        .collect();

    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(filename);
    fs::write(&path, serde_json::to_string_pretty(&records)?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn mentions(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sanitize_keeps_plain_names() {
        assert_eq!(sanitize_filename("note_01.txt"), "note_01.txt");
        assert_eq!(sanitize_filename("NOTE.TXT"), "NOTE.TXT");
        assert_eq!(sanitize_filename("report"), "report.txt");
    }

    #[test]
    fn test_sanitize_flattens_relative_paths() {
        assert_eq!(sanitize_filename("patient/01: notes.txt"), "patient_01_notes.txt");
        assert_eq!(sanitize_filename("./a//b.txt"), "a_b.txt");
    }

    #[test]
    fn test_sanitize_strips_escaping_paths() {
        assert_eq!(sanitize_filename("/abs/dir/x.txt"), "x.txt");
        assert_eq!(sanitize_filename("C:\\notes\\y.txt"), "y.txt");
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd.txt");
        assert_eq!(sanitize_filename("/"), "note.txt");
    }

    #[test]
    fn test_render_lines_and_semicolons() {
        let items = mentions(&["seizures", "microcephaly", " seizures "]);
        assert_eq!(render_txt(&items, TxtMode::Lines), "microcephaly\nseizures\n");
        assert_eq!(
            render_txt(&items, TxtMode::Semicolons),
            "microcephaly; seizures\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_txt(&[], TxtMode::Lines), "");
        assert_eq!(render_txt(&mentions(&["  "]), TxtMode::Semicolons), "");
    }

    #[test]
    fn test_write_txt_bundle_includes_empty_documents() {
        let dir = TempDir::new().unwrap();
        let mut map = AffirmationMap::new();
        map.record("a.txt", "fever");
        map.insert_document("b.txt");

        let txt_dir = write_txt_bundle(dir.path(), &map, TxtMode::Lines, "in").unwrap();
        assert_eq!(txt_dir, dir.path().join("in"));
        assert_eq!(fs::read_to_string(txt_dir.join("a.txt")).unwrap(), "fever\n");
        assert_eq!(fs::read_to_string(txt_dir.join("b.txt")).unwrap(), "");
    }

    #[test]
    fn test_write_txt_bundle_nested_subdir() {
        let dir = TempDir::new().unwrap();
        let mut map = AffirmationMap::new();
        map.record("a.txt", "seizures");
        map.record("a.txt", "ataxia");

        let txt_dir =
            write_txt_bundle(dir.path(), &map, TxtMode::Semicolons, "phenobert/in").unwrap();
        assert_eq!(txt_dir, dir.path().join("phenobert").join("in"));
        assert_eq!(
            fs::read_to_string(txt_dir.join("a.txt")).unwrap(),
            "ataxia; seizures\n"
        );
    }

    #[test]
    fn test_write_json_bundle() {
        let dir = TempDir::new().unwrap();
        let mut map = AffirmationMap::new();
        map.record("b.txt", "fièvre");
        map.record("b.txt", "ataxia");
        map.insert_document("a.txt");

        let path = write_json_bundle(dir.path(), &map, "text_examples.json").unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("fièvre"));
        assert!(raw.contains("\n  {\n    \"id\": \"a.txt\""));

        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([
                {"id": "a.txt", "text": ""},
                {"id": "b.txt", "text": "ataxia; fièvre"}
            ])
        );
    }

    proptest! {
        #[test]
        fn prop_sanitized_name_is_safe(name in ".{0,40}") {
            let safe = sanitize_filename(&name);
            prop_assert!(safe.to_lowercase().ends_with(".txt"));
            prop_assert!(safe
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')));
            prop_assert!(safe != ".." && safe != ".");
        }

        #[test]
        fn prop_sanitize_is_idempotent(name in "[ -~]{0,40}") {
            let once = sanitize_filename(&name);
            prop_assert_eq!(sanitize_filename(&once), once.clone());
        }
    }
}
