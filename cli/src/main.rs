mod args;
mod eval;

use clap::Parser;
use sqleval::EvalError;

fn main() -> Result<(), EvalError> {
    let args = args::FullArgs::parse();
    eval::run(args.command)
}
