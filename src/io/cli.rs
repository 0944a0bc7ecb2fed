//! Command-line interface for solving puzzle inputs in batch

use crate::io::configuration::INPUT_EXTENSION;
use crate::io::error::{ErrorContext, Result, WithContext, invalid_parameter};
use crate::io::input::read_input;
use crate::io::progress::ProgressManager;
use crate::puzzles::{Part, Puzzle};
use clap::Parser;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "latticewalk")]
#[command(
    author,
    version,
    about = "Explore puzzle lattices and print their answers"
)]
/// Command-line arguments for the lattice puzzle solver
pub struct Cli {
    /// Puzzle the input belongs to
    #[arg(value_enum, value_name = "PUZZLE")]
    pub puzzle: Puzzle,

    /// Input file or directory of `.txt` inputs to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Only answer this part (1 or 2)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Parts to answer for every input
    ///
    /// # Errors
    ///
    /// Returns an error if the requested part does not exist for the puzzle
    pub fn requested_parts(&self) -> Result<Vec<Part>> {
        let Some(number) = self.part else {
            return Ok(self.puzzle.parts().to_vec());
        };

        let part = Part::from_number(number)?;
        if self.puzzle.parts().contains(&part) {
            Ok(vec![part])
        } else {
            Err(invalid_parameter(
                "part",
                &number,
                &format!("{:?} only has {} part(s)", self.puzzle, self.puzzle.parts().len()),
            ))
        }
    }
}

/// Answers computed for one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Input file the answers belong to
    pub path: PathBuf,
    /// Answer for each requested part, in part order
    pub answers: Vec<(Part, u64)>,
}

impl Report {
    /// Output lines: one integer per part, prefixed by the file name when labelled
    pub fn lines(&self, labelled: bool) -> Vec<String> {
        self.answers
            .iter()
            .map(|(part, answer)| {
                if labelled {
                    let name = self.path.file_name().unwrap_or_default().to_string_lossy();
                    format!("{name} part {part}: {answer}")
                } else {
                    answer.to_string()
                }
            })
            .collect()
    }
}

/// Orchestrates batch processing of puzzle inputs with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Solve every input selected by the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, reading or solving fails
    pub fn process(&mut self) -> Result<Vec<Report>> {
        let parts = self.cli.requested_parts()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            // Allow print for user feedback on an empty input directory
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("No .{INPUT_EXTENSION} inputs in {}", self.cli.target.display());
            }
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            reports.push(self.process_file(file, index, &parts)?);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            Ok(vec![target.clone()])
        } else if target.is_dir() {
            let context = ErrorContext {
                path: Some(target.clone()),
                operation: Some("list directory"),
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_context(context.clone())? {
                let path = entry.with_context(context.clone())?.path();
                if path.is_file()
                    && path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an input file or a directory",
            ))
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize, parts: &[Part]) -> Result<Report> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, parts.len());
        }

        let input = read_input(input_path)?;

        let mut answers = Vec::with_capacity(parts.len());
        for &part in parts {
            let task_bar = self
                .progress_manager
                .as_ref()
                .map_or_else(ProgressBar::hidden, |pm| pm.task_bar(0, "searching"));

            let answer = self
                .cli
                .puzzle
                .solve(&input, part, &task_bar)
                .with_path(input_path.to_path_buf())?;
            task_bar.finish_and_clear();
            answers.push((part, answer));

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_part(index);
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(Report {
            path: input_path.to_path_buf(),
            answers,
        })
    }
}
