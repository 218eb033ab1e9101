//! Internal module for the ordered filter pipeline applied to each visited node.

use crate::error::FinderError;
use crate::options::FinderOptions;
use crate::types::FileEntry;

type Stage = Box<dyn Fn(&FileEntry) -> Result<bool, FinderError> + Send + Sync>;

/// A flat list of filter stages evaluated left to right with short-circuit:
/// regular-file check, then full-path pattern match, then the caller's
/// predicate. The predicate never sees an entry a previous stage rejected,
/// so pattern-excluded files cost no predicate I/O.
pub(crate) struct FilterChain {
    stages: Vec<Stage>,
}

impl FilterChain {
    pub(crate) fn new(options: &FinderOptions) -> Self {
        let mut stages: Vec<Stage> = Vec::with_capacity(3);
        stages.push(Box::new(|entry| Ok(entry.is_file())));
        if let Some(pattern) = options.pattern.clone() {
            stages.push(Box::new(move |entry| {
                Ok(pattern.is_match(&entry.path().to_string_lossy()))
            }));
        }
        if let Some(predicate) = options.predicate.clone() {
            stages.push(Box::new(move |entry| {
                predicate(entry).map_err(FinderError::Predicate)
            }));
        }
        Self { stages }
    }

    /// True if every stage accepts the entry.
    pub(crate) fn matches(&self, entry: &FileEntry) -> Result<bool, FinderError> {
        for stage in &self.stages {
            if !stage(entry)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
