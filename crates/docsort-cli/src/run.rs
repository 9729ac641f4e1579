//! Per-file processing shared by both binaries.

use std::io::Write;
use std::path::{Path, PathBuf};

use docsort_core::{ConfigLayout, DocsOptions, SortOutcome, sort_config_text, sort_docs};
use docsort_fs::{read_text, write_text};
use similar::TextDiff;
use tracing::{Level, debug};

use crate::error::{CliError, Result};

/// Which transform a binary applies to its files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    /// Markdown files with `{% docs %}` blocks
    Docs,
    /// dbt model YAML files
    Yaml,
}

impl Pipeline {
    /// Sorts one file's content.
    pub fn sort(self, path: &Path, text: &str) -> Result<SortOutcome> {
        match self {
            Self::Docs => Ok(sort_docs(text, &DocsOptions::default())),
            Self::Yaml => sort_config_text(text, &ConfigLayout::default())
                .map_err(|e| CliError::sort(path, e)),
        }
    }

    /// The line printed after a file has been rewritten.
    pub fn notice(self, path: &Path) -> String {
        match self {
            Self::Docs => format!("The docs within <{}> have been sorted.", path.display()),
            Self::Yaml => format!("The yaml file <{}> has been re-sorted.", path.display()),
        }
    }
}

/// Sorts each file in order, printing a notice to `out` for every rewrite.
///
/// Stops at the first error; files before it have already been written.
/// Returns the number of rewritten files.
pub fn sort_files<W: Write>(pipeline: Pipeline, paths: &[PathBuf], out: &mut W) -> Result<usize> {
    let mut rewritten = 0;

    for path in paths {
        if sort_file(pipeline, path)? {
            writeln!(out, "{}", pipeline.notice(path))?;
            rewritten += 1;
        }
    }

    Ok(rewritten)
}

/// Sorts a single file in place. Returns whether the file was rewritten.
pub fn sort_file(pipeline: Pipeline, path: &Path) -> Result<bool> {
    debug!(path = %path.display(), ?pipeline, "Sorting file");

    let original = read_text(path)?;
    let outcome = pipeline.sort(path, &original)?;

    if !outcome.changed {
        debug!(path = %path.display(), "Already sorted");
        return Ok(false);
    }

    if tracing::enabled!(Level::DEBUG) {
        let diff = TextDiff::from_lines(original.as_str(), outcome.content.as_str())
            .unified_diff()
            .context_radius(3)
            .header("original", "sorted")
            .to_string();
        debug!(path = %path.display(), "Reordering:\n{}", diff);
    }

    write_text(path, &outcome.content)?;
    debug!(path = %path.display(), "Wrote file");

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    const SORTED: &str = "{% docs a %}\ntext A\n{% enddocs %}\n\n{% docs b %}\ntext B\n{% enddocs %}\n";
    const UNSORTED: &str = "{% docs b %}\ntext B\n{% enddocs %}\n\n{% docs a %}\ntext A\n{% enddocs %}\n";

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[rstest]
    #[case(Pipeline::Docs, "The docs within <models/doc_orders.md> have been sorted.")]
    #[case(Pipeline::Yaml, "The yaml file <models/doc_orders.md> has been re-sorted.")]
    fn test_notice(#[case] pipeline: Pipeline, #[case] expected: &str) {
        assert_eq!(pipeline.notice(Path::new("models/doc_orders.md")), expected);
    }

    #[test]
    fn test_sort_file_rewrites_unsorted() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "docs.md", UNSORTED);

        assert!(sort_file(Pipeline::Docs, &path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), SORTED);
    }

    #[test]
    fn test_sort_file_leaves_sorted_alone() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "docs.md", SORTED);

        assert!(!sort_file(Pipeline::Docs, &path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), SORTED);
    }

    #[test]
    fn test_sort_files_notices_only_rewrites() {
        let dir = TempDir::new().unwrap();
        let sorted = write(&dir, "sorted.md", SORTED);
        let unsorted = write(&dir, "unsorted.md", UNSORTED);

        let mut out = Vec::new();
        let count = sort_files(Pipeline::Docs, &[sorted, unsorted.clone()], &mut out).unwrap();

        assert_eq!(count, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("The docs within <{}> have been sorted.\n", unsorted.display())
        );
    }

    #[test]
    fn test_sort_files_empty_list() {
        let mut out = Vec::new();
        assert_eq!(sort_files(Pipeline::Docs, &[], &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_error_stops_the_run() {
        let dir = TempDir::new().unwrap();
        let first = write(&dir, "first.md", UNSORTED);
        let missing = dir.path().join("missing.md");
        let last = write(&dir, "last.md", UNSORTED);

        let mut out = Vec::new();
        let err = sort_files(Pipeline::Docs, &[first.clone(), missing, last.clone()], &mut out)
            .unwrap_err();

        assert!(matches!(err, CliError::Fs(_)));
        assert_eq!(fs::read_to_string(&first).unwrap(), SORTED);
        assert_eq!(fs::read_to_string(&last).unwrap(), UNSORTED);
    }

    #[test]
    fn test_yaml_pipeline() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "schema.yml", "models:\n  - name: z\n  - name: a\nowner: x\n");

        let mut out = Vec::new();
        sort_files(Pipeline::Yaml, &[path.clone()], &mut out).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("owner: x\n"));
        assert!(written.find("name: a").unwrap() < written.find("name: z").unwrap());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("The yaml file <{}> has been re-sorted.\n", path.display())
        );
    }

    #[test]
    fn test_yaml_error_names_the_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "schema.yml", "models:\n  - description: no name\n");

        let err = sort_file(Pipeline::Yaml, &path).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("schema.yml"));
        assert!(message.contains("has no `name` field"));
    }
}
