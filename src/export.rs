//! Plain-text summary export.

use crate::error::Result;
use crate::journal::record::Record;
use crate::types::LocalStamp;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

const NOT_FILLED: &str = "(not filled)";

/// Fixed-order, human-readable summary of the three steps.
pub fn summary_text(record: &Record) -> String {
    let lines = [
        "Reframe | Three-Step Reflection Log".to_string(),
        format!("Generated: {}", LocalStamp::now()),
        String::new(),
        "STEP 1 | Pause".to_string(),
        format!("- Feeling right now: {}", filled(&record.step1.feel)),
        format!("- Pause length: {} seconds", record.step1.seconds),
        String::new(),
        "STEP 2 | Observe".to_string(),
        format!("- First thought: {}", filled(&record.step2.thought)),
        format!("- Body sensations: {}", filled(&record.step2.body)),
        format!("- Emotion score: {}/10", record.step2.score),
        String::new(),
        "STEP 3 | Redirect".to_string(),
        format!("- Old reaction: {}", filled(&record.step3.old_reaction)),
        format!("- New choice: {}", filled(&record.step3.new_reaction)),
        format!(
            "- Tried ten percent: {}",
            if record.step3.tried_ten_percent {
                "yes"
            } else {
                "no"
            }
        ),
    ];
    lines.join("\n")
}

fn filled(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_FILLED
    } else {
        value
    }
}

/// File name for a dated export, e.g. `reframe-2026-08-24.txt`.
pub fn export_file_name() -> String {
    format!("reframe-{}.txt", Local::now().format("%Y-%m-%d"))
}

/// Write the summary into `dir` and return the created path.
pub fn export_to(record: &Record, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = dir.as_ref().join(export_file_name());
    fs::write(&path, summary_text(record))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_shows_placeholders_for_empty_fields() {
        let record = Record::fresh();
        let text = summary_text(&record);
        assert!(text.starts_with("Reframe | Three-Step Reflection Log"));
        assert!(text.contains("- Feeling right now: (not filled)"));
        assert!(text.contains("- Pause length: 45 seconds"));
        assert!(text.contains("- Emotion score: 5/10"));
        assert!(text.contains("- Tried ten percent: no"));
    }

    #[test]
    fn test_summary_includes_filled_values() {
        let mut record = Record::fresh();
        record.step1.feel = "tight chest".to_string();
        record.step3.tried_ten_percent = true;

        let text = summary_text(&record);
        assert!(text.contains("- Feeling right now: tight chest"));
        assert!(text.contains("- Tried ten percent: yes"));
    }

    #[test]
    fn test_export_file_name_has_date_stamp() {
        let name = export_file_name();
        assert!(name.starts_with("reframe-"));
        assert!(name.ends_with(".txt"));
        assert_eq!(name.len(), "reframe-2026-08-24.txt".len());
    }

    #[test]
    fn test_export_to_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let record = Record::fresh();
        let path = export_to(&record, dir.path()).unwrap();
        let written = fs::read_to_string(path).unwrap();
        assert!(written.starts_with("Reframe | Three-Step Reflection Log"));
        assert!(written.contains("STEP 3 | Redirect"));
    }
}
