//! Essential file checks.

use std::path::Path;

use super::outcome::{CheckOutcome, Section, SectionReport};

/// Check that every essential file exists relative to `root`.
///
/// Each missing file is its own failure, so the section's failure count is
/// the number of missing files.
pub fn check_essential_files(root: &Path, files: &[String]) -> SectionReport {
    let mut report = SectionReport::new(Section::SourceFiles);

    for file in files {
        if root.join(file).exists() {
            report.push(CheckOutcome::passed(file.as_str()));
        } else {
            report.push(CheckOutcome::failed(format!("{} not found", file)));
        }
    }

    tracing::debug!(
        "{} of {} essential files missing",
        report.failure_count(),
        files.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VerifyConfig;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, file: &str) {
        let path = root.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn all_files_present_has_no_missing() {
        let temp = TempDir::new().unwrap();
        let files = VerifyConfig::default().essential_files;
        for file in &files {
            touch(temp.path(), file);
        }

        let report = check_essential_files(temp.path(), &files);
        assert_eq!(report.outcomes.len(), 8);
        assert_eq!(report.failure_count(), 0);
    }

    #[test]
    fn each_missing_file_counts() {
        let temp = TempDir::new().unwrap();
        let files = VerifyConfig::default().essential_files;
        touch(temp.path(), "package.json");

        let report = check_essential_files(temp.path(), &files);
        assert_eq!(report.failure_count(), 7);
        assert_eq!(report.outcomes[0].label, "src/main.ts not found");
        assert_eq!(report.outcomes[6].label, "package.json");
    }

    #[test]
    fn order_follows_list() {
        let temp = TempDir::new().unwrap();
        let files = vec!["b.txt".to_string(), "a.txt".to_string()];

        let report = check_essential_files(temp.path(), &files);
        assert_eq!(report.outcomes[0].label, "b.txt not found");
        assert_eq!(report.outcomes[1].label, "a.txt not found");
    }

    #[test]
    fn empty_list_is_clean() {
        let temp = TempDir::new().unwrap();
        let report = check_essential_files(temp.path(), &[]);
        assert!(report.outcomes.is_empty());
    }
}
