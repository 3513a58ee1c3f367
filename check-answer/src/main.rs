use std::{path::PathBuf, process::ExitCode};

use check_answer::{compare_files, Verdict};
use clap::Parser;

/// Compares the single integer a submission printed with the expected one.
#[derive(Parser)]
#[command(name = "check-answer")]
struct Cli {
    /// Output produced by the graded program
    #[arg(long, default_value = "out.txt")]
    out: PathBuf,

    /// Expected answer
    #[arg(long, default_value = "answer.txt")]
    answer: PathBuf,
}

fn main() -> anyhow::Result<ExitCode> {
    grading_common::init_tracing();
    let cli = Cli::parse();

    let verdict = compare_files(&cli.out, &cli.answer)?;
    tracing::info!(%verdict, "compared answers");
    match verdict {
        Verdict::Match => Ok(ExitCode::SUCCESS),
        Verdict::Mismatch { .. } => {
            println!("{verdict}");
            Ok(ExitCode::FAILURE)
        }
    }
}
