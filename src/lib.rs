//! # Filescout
//!
//! `filescout` is a library for locating files in a directory tree by walking it
//! depth-first to a bounded depth and passing every node through a chained filter:
//! a regular-file check, an optional regular expression matched against the full
//! path, and an optional caller-supplied predicate.
//!
//! Results are exposed as a lazy [`PathStream`]: no filesystem access happens until
//! the stream is pulled, and dropping it early stops the walk without scanning the
//! rest of the tree. It is intended as a building block for module and plugin
//! discovery rather than as a search tool.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use filescout::{FileFinder, FinderBuilder};
//!
//! let options = FinderBuilder::new("plugins")
//!     .max_depth(2)
//!     .filename_pattern(r"module\.toml$")
//!     .predicate(|entry| Ok(entry.read_to_string()?.contains("[module]")))
//!     .build()
//!     .expect("invalid finder configuration");
//!
//! let finder = FileFinder::new(options);
//! for path in finder.find_paths() {
//!     println!("{}", path.expect("traversal failed").display());
//! }
//! ```
//!
//! # Depth convention
//!
//! The root directory is depth 0 and its immediate children are depth 1. A file is
//! yielded only if its depth is at most `max_depth`; directories sitting exactly at
//! the limit are visited but their children are pruned. `max_depth(0)` therefore
//! yields nothing, and an unset depth is unbounded.

mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod types;

pub use engine::{FileFinder, PathStream, find};
pub use error::{FinderError, PredicateError};
pub use options::{FinderBuilder, FinderOptions, Predicate};
pub use types::FileEntry;
