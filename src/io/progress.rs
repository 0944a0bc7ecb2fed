//! Progress display for batch runs over puzzle inputs

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>16}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] inputs [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

static TASK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("  {prefix} [{bar:30.green/white}] {pos}/{len} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Parts answered so far for one input
#[derive(Debug, Clone)]
struct InputState {
    name: String,
    answered: usize,
    parts: usize,
    done: bool,
}

impl InputState {
    fn label(&self) -> String {
        if self.done {
            format!("✓ {}", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Coordinates progress display for batch operations
///
/// Each of the most recent inputs gets a bar counting answered parts. Runs
/// with more inputs than bars also get a batch bar. Long-running puzzle
/// steps can attach their own task bar.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    input_bars: Vec<ProgressBar>,
    inputs: BTreeMap<usize, InputState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            input_bars: Vec::new(),
            inputs: BTreeMap::new(),
        }
    }

    /// Create the bars for a run over `input_count` inputs
    pub fn initialize(&mut self, input_count: usize) {
        if input_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(input_count as u64).with_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        self.input_bars = (0..input_count.min(MAX_INDIVIDUAL_PROGRESS_BARS))
            .map(|_| {
                self.multi_progress
                    .add(ProgressBar::new(0).with_style(FILE_STYLE.clone()))
            })
            .collect();
    }

    /// Register input `index` as started with `parts` parts to answer
    pub fn start_file(&mut self, index: usize, path: &Path, parts: usize) {
        let state = InputState {
            name: path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned(),
            answered: 0,
            parts,
            done: false,
        };
        self.inputs.insert(index, state);
        self.refresh();
    }

    /// Report one more part answered for an input
    pub fn complete_part(&mut self, index: usize) {
        if let Some(state) = self.inputs.get_mut(&index) {
            state.answered = (state.answered + 1).min(state.parts);
        }
        self.refresh();
    }

    /// Mark an input as finished
    pub fn complete_file(&mut self, index: usize) {
        if let Some(state) = self.inputs.get_mut(&index) {
            state.answered = state.parts;
            state.done = true;
        }
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.inc(1);
        }
        self.refresh();
    }

    /// Attach a bar for a long-running step of the current input
    ///
    /// The caller finishes the bar; `finish` clears it with the rest.
    pub fn task_bar(&self, length: u64, label: &str) -> ProgressBar {
        let bar = ProgressBar::new(length).with_style(TASK_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.multi_progress.add(bar)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.finish();
        }
        let _ = self.multi_progress.clear();
    }

    /// Show the most recent inputs on the available bars
    fn refresh(&self) {
        let skipped = self.inputs.len().saturating_sub(self.input_bars.len());
        let mut recent = self.inputs.values().skip(skipped);

        for bar in &self.input_bars {
            match recent.next() {
                Some(state) => {
                    bar.set_length(state.parts as u64);
                    bar.set_position(state.answered as u64);
                    bar.set_prefix(state.label());
                    bar.set_message(format!("{}/{} parts", state.answered, state.parts));
                }
                None => bar.set_length(0),
            }
        }
    }
}
