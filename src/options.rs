use crate::error::{FinderError, PredicateError};
use crate::types::FileEntry;
use regex::Regex;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Caller-supplied filter invoked on every entry that survived the type and
/// pattern stages. Returning `Ok(false)` rejects the entry; an `Err`
/// propagates out of the stream unmodified.
pub type Predicate = Arc<dyn Fn(&FileEntry) -> Result<bool, PredicateError> + Send + Sync>;

/// Immutable-once-built finder configuration.
///
/// Safe to clone and reuse; every [`find_paths`](crate::FileFinder::find_paths)
/// call starts a fresh traversal from the same configuration.
#[derive(Clone)]
pub struct FinderOptions {
    pub root: PathBuf,
    /// Deepest directory level to descend to, counting the root as 0 and its
    /// immediate children as 1. `None` is unbounded; `Some(0)` yields nothing
    /// since only the root itself is in range and directories are never
    /// yielded.
    pub max_depth: Option<usize>,
    /// Compiled expression matched against the full path of each file.
    pub pattern: Option<Regex>,
    pub predicate: Option<Predicate>,
    pub include_hidden: bool,
    pub respect_gitignore: bool,
    pub follow_links: bool,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_depth: None,
            pattern: None,
            predicate: None,
            include_hidden: true,
            respect_gitignore: false,
            follow_links: false,
        }
    }
}

impl fmt::Debug for FinderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FinderOptions")
            .field("root", &self.root)
            .field("max_depth", &self.max_depth)
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("predicate", &self.predicate.as_ref().map(|_| "<callback>"))
            .field("include_hidden", &self.include_hidden)
            .field("respect_gitignore", &self.respect_gitignore)
            .field("follow_links", &self.follow_links)
            .finish()
    }
}

/// Fluent builder for [`FinderOptions`].
///
/// The pattern is kept as source text until [`build`](FinderBuilder::build),
/// which compiles it and reports a bad expression immediately rather than on
/// first traversal.
pub struct FinderBuilder {
    root: PathBuf,
    max_depth: Option<usize>,
    pattern: Option<String>,
    predicate: Option<Predicate>,
    include_hidden: bool,
    respect_gitignore: bool,
    follow_links: bool,
}

impl FinderBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: None,
            pattern: None,
            predicate: None,
            include_hidden: true,
            respect_gitignore: false,
            follow_links: false,
        }
    }

    /// Bounds the traversal depth. See [`FinderOptions::max_depth`] for the
    /// counting convention.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn no_limit_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Regular expression matched against the full path of each candidate
    /// file. Compiled at [`build`](FinderBuilder::build) time.
    pub fn filename_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Custom filter invoked only on entries that already passed the type
    /// and pattern stages.
    pub fn predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&FileEntry) -> Result<bool, PredicateError> + Send + Sync + 'static,
    {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.include_hidden = yes;
        self
    }

    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.respect_gitignore = yes;
        self
    }

    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    /// Validates and finalizes the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::InvalidPattern`] if the filename pattern does
    /// not compile. No filesystem access happens here.
    pub fn build(self) -> Result<FinderOptions, FinderError> {
        let pattern = match self.pattern {
            Some(raw) => {
                let compiled = Regex::new(&raw).map_err(|source| FinderError::InvalidPattern {
                    pattern: raw.clone(),
                    source,
                })?;
                Some(compiled)
            }
            None => None,
        };
        Ok(FinderOptions {
            root: self.root,
            max_depth: self.max_depth,
            pattern,
            predicate: self.predicate,
            include_hidden: self.include_hidden,
            respect_gitignore: self.respect_gitignore,
            follow_links: self.follow_links,
        })
    }
}
