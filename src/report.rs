use std::path::PathBuf;

use log::{error, info, warn};
use serde::Serialize;

use crate::clients::errors::Error;

/// An artwork file that was written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArtwork {
    /// Album name as reported by the catalog
    pub album: String,
    pub path: PathBuf,
}

/// Why an entry was passed over without an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The line isn't a `"<name> / <artist>"` pair
    Malformed(String),
    /// The search returned nothing credited to the entry's artist
    NoArtistMatch,
}

/// What happened to one list entry
#[derive(Debug)]
pub enum ProcessOutcome {
    Success(SavedArtwork),
    Skipped(SkipReason),
    Failed(Error),
}

#[derive(Debug)]
pub struct EntryReport {
    /// The list line as read from the file
    pub line: String,
    pub outcome: ProcessOutcome,
}

impl EntryReport {
    /// Print the user facing progress line for this entry
    pub fn log(&self) {
        match &self.outcome {
            ProcessOutcome::Success(saved) => info!(
                "Saved artwork for {} ({}): {}",
                self.line,
                saved.album,
                saved.path.display()
            ),
            ProcessOutcome::Skipped(SkipReason::NoArtistMatch) => {
                warn!("Artwork for {} not found (no artist match)", self.line);
            }
            ProcessOutcome::Skipped(SkipReason::Malformed(reason)) => {
                warn!("Skipping malformed entry: {reason}");
            }
            ProcessOutcome::Failed(e) => error!("Error while processing {}: {e}", self.line),
        }
    }
}

#[derive(Debug)]
pub enum ListStatus {
    /// The list file doesn't exist
    Missing,
    /// The list file exists but couldn't be read
    Unreadable(Error),
    Processed(Vec<EntryReport>),
}

#[derive(Debug)]
pub struct ListReport {
    pub path: PathBuf,
    pub status: ListStatus,
}

/// Totals for a whole run, written out with `--summary`
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Artwork files written, in processing order
    pub files: Vec<PathBuf>,
    /// List files that were missing or unreadable
    pub skipped_lists: Vec<PathBuf>,
}

impl RunSummary {
    /// Fold a processed list into the totals
    pub fn record(&mut self, report: &ListReport) {
        let entries = match &report.status {
            ListStatus::Missing | ListStatus::Unreadable(_) => {
                self.skipped_lists.push(report.path.clone());
                return;
            }
            ListStatus::Processed(entries) => entries,
        };
        for entry in entries {
            match &entry.outcome {
                ProcessOutcome::Success(saved) => {
                    self.saved += 1;
                    self.files.push(saved.path.clone());
                }
                ProcessOutcome::Skipped(_) => self.skipped += 1,
                ProcessOutcome::Failed(_) => self.failed += 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(line: &str, outcome: ProcessOutcome) -> EntryReport {
        EntryReport {
            line: line.to_string(),
            outcome,
        }
    }

    #[test]
    fn test_record_counts_outcomes() {
        let report = ListReport {
            path: PathBuf::from("list.txt"),
            status: ListStatus::Processed(vec![
                entry(
                    "Abbey Road / The Beatles",
                    ProcessOutcome::Success(SavedArtwork {
                        album: "Abbey Road".into(),
                        path: PathBuf::from("img/The Beatles_Abbey Road.jpg"),
                    }),
                ),
                entry(
                    "Abbey Road",
                    ProcessOutcome::Skipped(SkipReason::Malformed("Abbey Road".into())),
                ),
                entry(
                    "Kind of Blue / Nobody",
                    ProcessOutcome::Skipped(SkipReason::NoArtistMatch),
                ),
                entry(
                    "Blue Train / John Coltrane",
                    ProcessOutcome::Failed(Error::MissingArtwork("Blue Train".into())),
                ),
            ]),
        };

        let mut summary = RunSummary::default();
        summary.record(&report);

        assert_eq!(summary.saved, 1);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(
            summary.files,
            vec![PathBuf::from("img/The Beatles_Abbey Road.jpg")]
        );
        assert!(summary.skipped_lists.is_empty());
    }

    #[test]
    fn test_record_missing_list() {
        let report = ListReport {
            path: PathBuf::from("list2.txt"),
            status: ListStatus::Missing,
        };

        let mut summary = RunSummary::default();
        summary.record(&report);

        assert_eq!(summary.skipped_lists, vec![PathBuf::from("list2.txt")]);
        assert_eq!(summary.saved + summary.skipped + summary.failed, 0);
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let summary = RunSummary {
            saved: 1,
            skipped: 0,
            failed: 0,
            files: vec![PathBuf::from("img/a_b.jpg")],
            skipped_lists: vec![],
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["saved"], 1);
        assert_eq!(json["files"][0], "img/a_b.jpg");
    }
}
