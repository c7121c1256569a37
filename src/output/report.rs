//! Report metadata and persistence

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Generation context attached to rendered (non-JSON) reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub resume_file: String,
    pub job_file: Option<String>,
}

impl ReportMetadata {
    pub fn new(resume_file: &str, job_file: Option<&str>) -> Self {
        Self {
            generated_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            resume_file: resume_file.to_string(),
            job_file: job_file.map(|s| s.to_string()),
        }
    }
}

/// Write a rendered report to disk.
pub fn save_report(content: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_carries_files() {
        let metadata = ReportMetadata::new("resume.pdf", Some("job.txt"));
        assert_eq!(metadata.resume_file, "resume.pdf");
        assert_eq!(metadata.job_file.as_deref(), Some("job.txt"));
        assert_eq!(metadata.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_save_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");
        save_report("# Report", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Report");
    }
}
