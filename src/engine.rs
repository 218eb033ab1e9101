use crate::error::FinderError;
use crate::filter::FilterChain;
use crate::options::FinderOptions;
use crate::types::FileEntry;
use ignore::WalkBuilder;
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing;

/// Locates files under a root directory through a depth-bounded pre-order
/// walk and the configured filter pipeline.
pub struct FileFinder {
    options: FinderOptions,
}

impl FileFinder {
    pub fn new(options: FinderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FinderOptions {
        &self.options
    }

    /// Returns the lazy stream of matching paths.
    ///
    /// No filesystem access happens until the stream is pulled; each pull
    /// performs exactly the walking and filtering needed to produce the next
    /// match. Every call starts a fresh, independent traversal, so the same
    /// finder can be consumed any number of times.
    pub fn find_paths(&self) -> PathStream {
        PathStream::new(self.options.clone())
    }
}

fn build_walker(options: &FinderOptions) -> ignore::Walk {
    let mut builder = WalkBuilder::new(&options.root);
    builder
        .git_ignore(options.respect_gitignore)
        .git_global(options.respect_gitignore)
        .git_exclude(options.respect_gitignore)
        .ignore(false)
        .parents(false)
        .hidden(!options.include_hidden)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth);
    builder.build()
}

/// Lazy sequence of matching file paths in pre-order traversal order:
/// a directory's matches appear before its descendants', one subtree is
/// exhausted before the next sibling, and siblings follow the platform's
/// directory-listing order (not sorted).
///
/// The stream is fused after yielding an error; already-yielded paths remain
/// valid. Dropping the stream mid-iteration releases all walker resources.
pub struct PathStream {
    walker: ignore::Walk,
    filter: FilterChain,
    done: bool,
}

impl PathStream {
    fn new(options: FinderOptions) -> Self {
        #[cfg(feature = "logging")]
        tracing::debug!("starting traversal at {}", options.root.display());
        let filter = FilterChain::new(&options);
        let walker = build_walker(&options);
        Self {
            walker,
            filter,
            done: false,
        }
    }
}

impl Iterator for PathStream {
    type Item = Result<PathBuf, FinderError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let entry = match self.walker.next() {
                None => return None,
                Some(Ok(entry)) => entry,
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(FinderError::from_walk(err)));
                }
            };
            let entry = FileEntry::from_walk_entry(&entry);
            match self.filter.matches(&entry) {
                Ok(true) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("matched {}", entry.path().display());
                    return Some(Ok(entry.into_path()));
                }
                Ok(false) => continue,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

/// Runs a full traversal and collects every matching path.
///
/// Convenience wrapper over [`FileFinder::find_paths`] for callers that do
/// not need laziness; the first error aborts the walk.
pub fn find(options: FinderOptions) -> Result<Vec<PathBuf>, FinderError> {
    FileFinder::new(options).find_paths().collect()
}
