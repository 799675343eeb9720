pub mod accuracy;
mod chart;
mod dataset;
pub mod length;
pub mod rouge;

use crate::args::Commands;
use sqleval::EvalError;

pub fn run(command: Commands) -> Result<(), EvalError> {
    match command {
        Commands::Accuracy(args) => accuracy::run(args),
        Commands::Length(args) => length::run(args),
        Commands::Rouge(args) => rouge::run(args),
    }
}

// ---------------------------------------------------------------------------
// Shared utilities
// ---------------------------------------------------------------------------

use indicatif::{ProgressBar, ProgressStyle};

pub fn create_eval_progress(total: u64, message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:30.cyan} [{pos}/{len}] {msg}")
            .unwrap(),
    );
    pb.set_message(message.into());
    pb
}

pub fn finish_eval_progress(pb: &ProgressBar, message: impl Into<String>) {
    pb.finish_with_message(message.into());
}
