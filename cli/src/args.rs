use clap::{Parser, Subcommand};

use crate::eval;

/// Score model-generated SQL queries against references from a CSV dataset.
#[derive(Parser, Debug, serde::Serialize)]
#[command(name = "sqleval", version, about, arg_required_else_help = true)]
pub struct FullArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, serde::Serialize)]
pub enum Commands {
    /// Token-overlap accuracy across the whole dataset
    Accuracy(eval::accuracy::AccuracyArgs),
    /// Token-overlap accuracy bucketed by query length, with a bar chart
    Length(eval::length::LengthArgs),
    /// ROUGE-L and longest-common-substring scores
    Rouge(eval::rouge::RougeArgs),
}
