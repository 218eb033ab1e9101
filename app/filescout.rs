//! Command-line interface for filescout.
//!
//! This binary provides access to the filescout library functionality,
//! walking a directory tree and printing the matching file paths in
//! various formats.

use clap::{Parser, ValueEnum};
use filescout::output::{self, FindReport};
use filescout::{FileFinder, FinderBuilder, FinderOptions};
use std::path::PathBuf;
use std::process::exit;

/// filescout — locate files by depth, pattern, and content
#[derive(Parser)]
#[command(name = "filescout", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Maximum directory depth below the root (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Regular expression applied to the full path of each file
    #[arg(short = 'e', long)]
    pattern: Option<String>,

    /// Keep only files whose content contains this substring
    #[arg(long)]
    contains: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Lines)]
    format: Format,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print each path as soon as it is found
    #[arg(long)]
    stream: bool,

    /// Skip hidden files and directories
    #[arg(long)]
    skip_hidden: bool,

    /// Honor .gitignore files during the walk
    #[arg(long)]
    gitignore: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Lines,
    Text,
    Json,
}

impl Format {
    fn into_output(self) -> output::OutputFormat {
        match self {
            Format::Lines => output::OutputFormat::Lines,
            Format::Text => output::OutputFormat::Text,
            Format::Json => output::OutputFormat::Json,
        }
    }
}

impl Cli {
    fn into_options(self) -> Result<(FinderOptions, Format, bool, bool, Option<PathBuf>), filescout::FinderError> {
        let mut builder = FinderBuilder::new(self.root)
            .include_hidden(!self.skip_hidden)
            .respect_gitignore(self.gitignore)
            .follow_links(self.follow_links);

        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        if let Some(pattern) = self.pattern {
            builder = builder.filename_pattern(pattern);
        }

        if let Some(needle) = self.contains {
            builder = builder.predicate(move |entry| Ok(entry.read_to_string()?.contains(&needle)));
        }

        Ok((
            builder.build()?,
            self.format,
            self.pretty,
            self.stream,
            self.output,
        ))
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, format, pretty, stream, output_path) = match cli.into_options() {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if stream {
        run_stream(options);
        return;
    }

    run_collect(options, format, pretty, output_path);
}

fn run_stream(options: FinderOptions) {
    let finder = FileFinder::new(options);
    for path in finder.find_paths() {
        match path {
            Ok(p) => println!("{}", p.display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                exit(1);
            }
        }
    }
}

fn run_collect(options: FinderOptions, format: Format, pretty: bool, output_path: Option<PathBuf>) {
    let root = options.root.clone();
    let finder = FileFinder::new(options);
    let paths: Result<Vec<PathBuf>, _> = finder.find_paths().collect();

    let paths = match paths {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    let report = FindReport::new(root, paths);
    let format = format.into_output();

    if let Some(path) = output_path {
        if let Err(e) = output::write_result_to_file(&report, format, &path, pretty) {
            eprintln!("Error: {}", e);
            exit(1);
        }
        return;
    }

    match format {
        output::OutputFormat::Json => {
            println!("{}", output::format_report(&report, format, pretty));
        }
        _ => {
            print!("{}", output::format_report(&report, format, pretty));
        }
    }
}
